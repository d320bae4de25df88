//! Grid cell coordinates and distance helpers.
//!
//! A `Cell` is a `(row, col)` pair on a `size × size` grid.  Coordinates are
//! signed so direction vectors (`target - self`) can be formed without casts;
//! a cell is only *valid* when both components lie in `0..size`.
//!
//! The derived `Ord` compares `row` first, then `col`, i.e. row-major order.
//! Every place that needs a deterministic pick from a set of cells (cluster
//! representative, "first visible fire") sorts by this order.

use std::fmt;

/// A position on the simulation grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Euclidean distance in cell units.
    #[inline]
    pub fn distance(self, other: Cell) -> f64 {
        let dr = (other.row - self.row) as f64;
        let dc = (other.col - self.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// `true` if both coordinates lie in `0..size`.
    #[inline]
    pub fn in_bounds(self, size: i32) -> bool {
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Clamp both coordinates into `0..size`.  Moving off the grid is never
    /// an error; the agent simply stops at the edge.
    #[inline]
    pub fn clamp(self, size: i32) -> Cell {
        let max = (size - 1).max(0);
        Cell::new(self.row.clamp(0, max), self.col.clamp(0, max))
    }

    /// One sign-of-direction step of at most `speed` cells per axis.
    ///
    /// Each axis moves independently by `min(|delta|, speed)`, so a diagonal
    /// step can cover up to `speed * √2`.  The target is never overshot on
    /// either axis.  Speeds beyond `i32::MAX` behave as `i32::MAX`.
    pub fn step_towards(self, target: Cell, speed: u32) -> Cell {
        let speed = i32::try_from(speed).unwrap_or(i32::MAX);
        let axis = |from: i32, to: i32| {
            let delta = to - from;
            from + delta.signum() * delta.abs().min(speed)
        };
        Cell::new(axis(self.row, target.row), axis(self.col, target.col))
    }

    /// The four orthogonal neighbours (may be out of bounds).
    #[inline]
    pub fn neighbors4(self) -> [Cell; 4] {
        [
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row, self.col + 1),
            Cell::new(self.row, self.col - 1),
        ]
    }

    /// The eight Moore neighbours (may be out of bounds).
    pub fn neighbors8(self) -> impl Iterator<Item = Cell> {
        (-1..=1)
            .flat_map(move |dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(move |(dr, dc)| Cell::new(self.row + dr, self.col + dc))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}
