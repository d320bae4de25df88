//! Grid movement shared by both agent types.

use ff_core::Cell;

/// One move from `from` towards `target` at `speed` cells per axis.
///
/// Each axis advances independently and never past the target; the result
/// is clamped to the grid, so leaving the grid is impossible rather than an
/// error.
#[inline]
pub fn move_towards(from: Cell, target: Cell, speed: u32, grid_size: i32) -> Cell {
    from.step_towards(target, speed).clamp(grid_size)
}
