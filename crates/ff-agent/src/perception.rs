//! Fire perception and clustering.
//!
//! Clustering is a breadth-first flood fill over 4-adjacency, restricted to
//! the set of *visible* burning cells: two burning cells that are adjacent
//! on the grid but with one of them out of sensor range end up in different
//! clusters (or only one of them is seen at all).
//!
//! Output is fully deterministic.  Seeds are taken in row-major order, each
//! cluster is sorted row-major, and clusters are returned ordered by their
//! smallest cell.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use ff_core::Cell;
use ff_grid::Forest;

/// Burning cells within Euclidean `range` of `pos`, row-major.
#[inline]
pub fn visible_fires(forest: &Forest, pos: Cell, range: f64) -> Vec<Cell> {
    forest.burning_within(pos, range)
}

/// Group `fires` into 4-connected components.
///
/// Every input cell lands in exactly one cluster; duplicates in the input
/// are ignored.
pub fn cluster_fires(fires: &[Cell]) -> Vec<Vec<Cell>> {
    let pending: FxHashSet<Cell> = fires.iter().copied().collect();
    let mut seeds: Vec<Cell> = pending.iter().copied().collect();
    seeds.sort_unstable();

    let mut visited: FxHashSet<Cell> = FxHashSet::default();
    let mut clusters = Vec::new();
    let mut queue = VecDeque::new();

    for seed in seeds {
        if !visited.insert(seed) {
            continue;
        }
        let mut cluster = vec![seed];
        queue.push_back(seed);
        while let Some(cell) = queue.pop_front() {
            for n in cell.neighbors4() {
                if pending.contains(&n) && visited.insert(n) {
                    cluster.push(n);
                    queue.push_back(n);
                }
            }
        }
        cluster.sort_unstable();
        clusters.push(cluster);
    }
    clusters
}

/// The cell of `cells` closest to `from`.  Equal distances go to the first
/// such cell in slice order.
pub fn nearest(from: Cell, cells: &[Cell]) -> Option<Cell> {
    cells
        .iter()
        .copied()
        .min_by(|a, b| from.distance(*a).total_cmp(&from.distance(*b)))
}
