//! Drone patrol quadrants.
//!
//! The grid is split at `mid = size / 2` into four rectangles:
//!
//! ```text
//!          col < mid   col ≥ mid
//! row < mid    0           1
//! row ≥ mid    2           3
//! ```
//!
//! Drone `i` patrols quadrant `i % 4`.  On grids too small to split (size 1)
//! the raw bounds would be empty; they are repaired so `min ≤ max` and both
//! lie on the grid, which keeps [`Quadrant::random_cell`] total.

use ff_core::{AgentRng, Cell, DroneId};

/// Inclusive cell bounds of one quadrant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quadrant {
    pub index:   u8,
    pub row_min: i32,
    pub row_max: i32,
    pub col_min: i32,
    pub col_max: i32,
}

impl Quadrant {
    /// Quadrant `index % 4` of a `grid_size × grid_size` grid.
    pub fn new(index: u8, grid_size: i32) -> Self {
        let index = index % 4;
        let mid = grid_size / 2;
        let last = grid_size - 1;
        let lower = (0, mid - 1);
        let upper = (mid, last);

        let (rows, cols) = match index {
            0 => (lower, lower),
            1 => (lower, upper),
            2 => (upper, lower),
            _ => (upper, upper),
        };
        let (row_min, row_max) = repair(rows, grid_size);
        let (col_min, col_max) = repair(cols, grid_size);
        Self { index, row_min, row_max, col_min, col_max }
    }

    #[inline]
    pub fn for_drone(id: DroneId, grid_size: i32) -> Self {
        Self::new((id.0 % 4) as u8, grid_size)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (self.row_min..=self.row_max).contains(&cell.row)
            && (self.col_min..=self.col_max).contains(&cell.col)
    }

    /// A uniformly random cell inside the bounds.
    pub fn random_cell(&self, rng: &mut AgentRng) -> Cell {
        Cell::new(
            rng.gen_range(self.row_min..=self.row_max),
            rng.gen_range(self.col_min..=self.col_max),
        )
    }
}

/// Clamp `(lo, hi)` onto the grid with `lo ≤ hi`.
fn repair((lo, hi): (i32, i32), grid_size: i32) -> (i32, i32) {
    let max = (grid_size - 1).max(0);
    let lo = lo.clamp(0, max);
    (lo, hi.clamp(lo, max))
}
