//! `ff-core`: foundational types for the forest-fire response simulator.
//!
//! This crate is a dependency of every other `ff-*` crate.  It has no `ff-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`cell`]      | `Cell`, Euclidean distance, sign-of-direction stepping  |
//! | [`ids`]       | `FirefighterId`, `DroneId`, `ContractId`                |
//! | [`time`]      | `Tick`, `SimClock`                                      |
//! | [`rng`]       | `AgentRng` (per-agent), `SimRng` (global)               |
//! | [`config`]    | `FireConfig`: the flat run configuration               |
//! | [`event`]     | `SimEvent`, `ContractEvent`, `EventLog`                 |
//! | [`error`]     | `FfError`, `FfResult`                                   |

pub mod cell;
pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::FireConfig;
pub use error::{FfError, FfResult};
pub use event::{AgentRef, ContractEvent, ContractEventKind, EventLog, SimEvent};
pub use ids::{ContractId, DroneId, FirefighterId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
