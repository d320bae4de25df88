//! Tree state.

use std::fmt;

/// Lifecycle of a tree.  Transitions only run Alive → Burning → Burned;
/// Burned is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum TreeState {
    #[default]
    Alive,
    Burning,
    Burned,
}

impl TreeState {
    /// Numeric condition code used by renderers (0 alive, 1 burning, 2 burned).
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            TreeState::Alive   => 0,
            TreeState::Burning => 1,
            TreeState::Burned  => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TreeState::Alive   => "alive",
            TreeState::Burning => "burning",
            TreeState::Burned  => "burned",
        }
    }
}

impl fmt::Display for TreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tree occupying one grid cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tree {
    pub state: TreeState,
    /// Ticks left until a burning tree is Burned.  Reset to the configured
    /// burn time whenever the tree is ignited by a neighbour.
    pub burn_time: u32,
    pub growth_rate: f32,
}

impl Tree {
    pub fn new(burn_time: u32, growth_rate: f32) -> Self {
        Self { state: TreeState::Alive, burn_time, growth_rate }
    }

    #[inline]
    pub fn is_burning(&self) -> bool {
        self.state == TreeState::Burning
    }
}
