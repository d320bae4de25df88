//! One tick of the fire automaton.
//!
//! ```text
//! burning = snapshot of burning cells at tick start (row-major)
//! for cell in burning:
//!     for n in moore_neighbours(cell):
//!         if n is Alive and rng < prob_spread: ignite n (timer = burn_time)
//!     cell.timer -= 1; if timer == 0: cell becomes Burned
//! ```
//!
//! Trees ignited during the tick are not in the snapshot, so they neither
//! spread nor count down until the next tick.

use ff_core::SimRng;

use crate::{Forest, TreeState};

/// What one call to [`spread_and_burn`] changed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FireStep {
    pub ignited:    usize,
    pub burned_out: usize,
}

/// Advance the fire by one tick.
pub fn spread_and_burn(
    forest:      &mut Forest,
    prob_spread: f64,
    burn_time:   u32,
    rng:         &mut SimRng,
) -> FireStep {
    let mut step = FireStep::default();

    for cell in forest.burning_cells() {
        for neighbor in cell.neighbors8() {
            if forest.state(neighbor) == Some(TreeState::Alive)
                && rng.gen_bool(prob_spread)
                && forest.ignite(neighbor, burn_time)
            {
                step.ignited += 1;
            }
        }

        if let Some(tree) = forest.tree_mut(cell) {
            tree.burn_time = tree.burn_time.saturating_sub(1);
            if tree.burn_time == 0 {
                tree.state = TreeState::Burned;
                step.burned_out += 1;
            }
        }
    }

    if step.ignited > 0 || step.burned_out > 0 {
        tracing::trace!(ignited = step.ignited, burned_out = step.burned_out, "fire step");
    }
    step
}
