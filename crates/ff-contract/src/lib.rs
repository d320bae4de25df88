//! `ff-contract`: Contract-Net Protocol bookkeeping.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`contract`] | `Contract`, `ContractStatus`, team sizing                  |
//! | [`bid`]      | `Bid`, `bid_value`                                         |
//! | [`registry`] | `ContractRegistry`: the single owner of every contract    |
//! | [`error`]    | `ContractError`, `ContractResult<T>`                       |
//!
//! # Lifecycle
//!
//! ```text
//!   create()            assign()               complete()
//!  ─────────▶ Open ──────────────▶ Assigned ──────────────▶ Complete
//!             ▲  submit_bid()       (manager drone only)    (assignee only)
//!             └──┘
//! ```
//!
//! Transitions never run backwards.  Complete contracts stay in the registry
//! for reporting; they simply stop covering their cluster cells.
//!
//! Every rejected operation returns a typed [`ContractError`].  Agents treat
//! these as skipped actions, not failures.

pub mod bid;
pub mod contract;
pub mod error;
pub mod registry;

#[cfg(test)]
mod tests;

pub use bid::{Bid, WATER_EPSILON, bid_value};
pub use contract::{Contract, ContractStatus, team_size_for};
pub use error::{ContractError, ContractResult};
pub use registry::{ContractRegistry, ContractStats};
