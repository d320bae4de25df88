//! `ff-grid`: the forest: a `size × size` grid of trees and the fire that
//! moves through it.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`tree`]   | `Tree`, `TreeState`                                      |
//! | [`forest`] | `Forest`: row-major cell storage, range queries         |
//! | [`fire`]   | `spread_and_burn`: one tick of the fire automaton       |
//! | [`error`]  | `GridError`, `GridResult<T>`                             |
//!
//! Tree occupancy is exclusive per cell.  Mobile agents are not stored here;
//! they carry their own `Cell` and may share a cell with a tree or with each
//! other.

pub mod error;
pub mod fire;
pub mod forest;
pub mod tree;


pub use error::{GridError, GridResult};
pub use fire::{FireStep, spread_and_burn};
pub use forest::Forest;
pub use tree::{Tree, TreeState};
