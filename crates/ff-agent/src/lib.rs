//! `ff-agent`: the mobile agents and what they do each tick.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`context`]     | `StepContext<'a>`: the mutable world one agent steps in  |
//! | [`agent`]       | `FieldAgent` trait shared by both agent types             |
//! | [`perception`]  | Visible-fire scan, 4-adjacency clustering, nearest pick   |
//! | [`movement`]    | Clamped per-axis stepping                                 |
//! | [`quadrant`]    | Drone patrol quadrants                                    |
//! | [`firefighter`] | `Firefighter`: bidder, extinguisher                      |
//! | [`drone`]       | `Drone`: scout and contract manager                      |
//!
//! # Stepping model
//!
//! Agents step one at a time.  Each receives a fresh [`StepContext`] that
//! mutably borrows the forest, the contract registry, and the tick's event
//! log, so an agent always sees every write made by the agents that stepped
//! before it in the same tick.  No agent state is shared; the registry is the
//! only channel between drones and firefighters.

pub mod agent;
pub mod context;
pub mod drone;
pub mod firefighter;
pub mod movement;
pub mod perception;
pub mod quadrant;


pub use agent::FieldAgent;
pub use context::StepContext;
pub use drone::Drone;
pub use firefighter::{Extinguishing, Firefighter};
pub use movement::move_towards;
pub use perception::{cluster_fires, nearest, visible_fires};
pub use quadrant::Quadrant;
