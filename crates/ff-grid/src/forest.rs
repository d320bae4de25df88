//! `Forest`: exclusive per-cell tree storage with range queries.
//!
//! Cells are stored row-major in a flat `Vec<Option<Tree>>`, so iterating
//! the storage visits cells in the same order `Cell`'s `Ord` sorts them.
//! Every query that returns several cells returns them in that order.

use ff_core::{Cell, SimRng};

use crate::{GridError, GridResult, Tree, TreeState};

/// A square grid of optional trees.
#[derive(Clone, Debug)]
pub struct Forest {
    size:       i32,
    cells:      Vec<Option<Tree>>,
    tree_count: usize,
}

impl Forest {
    /// An empty `size × size` forest.
    pub fn new(size: u32) -> Self {
        let size = size as i32;
        let n = (size as usize) * (size as usize);
        Self { size, cells: vec![None; n], tree_count: 0 }
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size)
    }

    /// The centre cell (`size / 2` on both axes).
    #[inline]
    pub fn center(&self) -> Cell {
        Cell::new(self.size / 2, self.size / 2)
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row as usize * self.size as usize + cell.col as usize)
    }

    #[inline]
    fn cell_at(&self, index: usize) -> Cell {
        let size = self.size as usize;
        Cell::new((index / size) as i32, (index % size) as i32)
    }

    // ── Planting ──────────────────────────────────────────────────────────

    /// Place `tree` at `cell`.
    pub fn plant(&mut self, cell: Cell, tree: Tree) -> GridResult<()> {
        let i = self.index(cell).ok_or(GridError::OutOfBounds(cell))?;
        if self.cells[i].is_some() {
            return Err(GridError::Occupied(cell));
        }
        self.cells[i] = Some(tree);
        self.tree_count += 1;
        Ok(())
    }

    /// Plant `floor(density * size²)` copies of `template` on distinct
    /// random empty cells.  Returns the number planted, which is smaller
    /// than requested only if the grid runs out of empty cells.
    pub fn plant_random(&mut self, density: f64, template: Tree, rng: &mut SimRng) -> usize {
        let wanted = (density.clamp(0.0, 1.0) * self.cells.len() as f64) as usize;
        let mut empty: Vec<usize> = (0..self.cells.len())
            .filter(|&i| self.cells[i].is_none())
            .collect();
        rng.shuffle(&mut empty);

        let planted = wanted.min(empty.len());
        for &i in &empty[..planted] {
            self.cells[i] = Some(template);
        }
        self.tree_count += planted;
        planted
    }

    // ── Fire state changes ────────────────────────────────────────────────

    /// Set an Alive tree burning.  Returns `false` if there is no alive tree
    /// at `cell`.
    pub fn ignite(&mut self, cell: Cell, burn_time: u32) -> bool {
        match self.tree_mut(cell) {
            Some(tree) if tree.state == TreeState::Alive => {
                tree.state = TreeState::Burning;
                tree.burn_time = burn_time;
                true
            }
            _ => false,
        }
    }

    /// Ignite every alive tree in the `side × side` square centred on
    /// `center`, keeping each tree's existing burn timer.  Cells outside the
    /// grid are skipped.  Returns the number of trees ignited.
    pub fn ignite_square(&mut self, center: Cell, side: u32) -> usize {
        let side = side as i32;
        let lo = -(side / 2);
        let hi = lo + side - 1;
        let mut ignited = 0;
        for dr in lo..=hi {
            for dc in lo..=hi {
                let cell = Cell::new(center.row + dr, center.col + dc);
                if let Some(tree) = self.tree_mut(cell) {
                    if tree.state == TreeState::Alive {
                        tree.state = TreeState::Burning;
                        ignited += 1;
                    }
                }
            }
        }
        ignited
    }

    /// Put out a burning tree.  The tree becomes Burned immediately,
    /// pre-empting its natural burn-out.  Returns `false` if the tree at
    /// `cell` was not burning.
    pub fn extinguish(&mut self, cell: Cell) -> bool {
        match self.tree_mut(cell) {
            Some(tree) if tree.is_burning() => {
                tree.state = TreeState::Burned;
                true
            }
            _ => false,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn tree(&self, cell: Cell) -> Option<&Tree> {
        self.index(cell).and_then(|i| self.cells[i].as_ref())
    }

    pub fn tree_mut(&mut self, cell: Cell) -> Option<&mut Tree> {
        self.index(cell).and_then(|i| self.cells[i].as_mut())
    }

    /// State of the tree at `cell`, or `None` if the cell holds no tree.
    #[inline]
    pub fn state(&self, cell: Cell) -> Option<TreeState> {
        self.tree(cell).map(|t| t.state)
    }

    #[inline]
    pub fn is_burning(&self, cell: Cell) -> bool {
        self.state(cell) == Some(TreeState::Burning)
    }

    #[inline]
    pub fn has_tree(&self, cell: Cell) -> bool {
        self.tree(cell).is_some()
    }

    /// All trees with their cells, row-major.
    pub fn trees(&self) -> impl Iterator<Item = (Cell, &Tree)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.as_ref().map(|t| (self.cell_at(i), t)))
    }

    /// Cells of all burning trees, row-major.
    pub fn burning_cells(&self) -> Vec<Cell> {
        self.trees()
            .filter(|(_, t)| t.is_burning())
            .map(|(c, _)| c)
            .collect()
    }

    /// Burning cells within Euclidean distance `radius` of `center`
    /// (inclusive), row-major.  Only the bounding box of the circle,
    /// clipped to the grid, is scanned; any radius is accepted.
    pub fn burning_within(&self, center: Cell, radius: f64) -> Vec<Cell> {
        if radius < 0.0 {
            return Vec::new();
        }
        let reach = radius.min(self.size as f64).floor() as i32;
        let max = self.size - 1;
        let (r0, r1) = ((center.row - reach).max(0), (center.row + reach).min(max));
        let (c0, c1) = ((center.col - reach).max(0), (center.col + reach).min(max));

        let mut found = Vec::new();
        for row in r0..=r1 {
            for col in c0..=c1 {
                let cell = Cell::new(row, col);
                if self.is_burning(cell) && center.distance(cell) <= radius {
                    found.push(cell);
                }
            }
        }
        found
    }

    /// Cells holding no tree, row-major.
    pub fn tree_free_cells(&self) -> Vec<Cell> {
        (0..self.cells.len())
            .filter(|&i| self.cells[i].is_none())
            .map(|i| self.cell_at(i))
            .collect()
    }

    /// Number of trees in `state`.
    pub fn count(&self, state: TreeState) -> usize {
        self.trees().filter(|(_, t)| t.state == state).count()
    }

    #[inline]
    pub fn tree_count(&self) -> usize {
        self.tree_count
    }

    /// `true` while any tree is still burning.
    pub fn any_burning(&self) -> bool {
        self.cells.iter().flatten().any(Tree::is_burning)
    }

    /// Fraction of planted trees that are Burned.  `0.0` for a treeless grid.
    pub fn burned_fraction(&self) -> f64 {
        if self.tree_count == 0 {
            return 0.0;
        }
        self.count(TreeState::Burned) as f64 / self.tree_count as f64
    }

    /// Fraction of cells holding a tree.
    pub fn density(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.tree_count as f64 / self.cells.len() as f64
    }
}
