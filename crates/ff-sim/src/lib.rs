//! `ff-sim`: tick loop orchestrator for the forest-fire response simulator.
//!
//! # Tick order
//!
//! ```text
//! for tick in 1..=config.steps:
//!   ① Fire          spread_and_burn over the snapshot of burning trees.
//!   ② Firefighters  step in spawn order: refill, work, bid, fight, explore.
//!   ③ Drones        step in spawn order: assign, recharge, perceive, patrol.
//!   ④ Observe       hand the tick's events and a TickSummary to the observer.
//! ```
//!
//! Every agent steps against the live forest and contract registry, so later
//! agents see the writes of earlier ones within the same tick.  With
//! `stop_when_extinguished` the loop also ends at the first tick boundary
//! with no burning tree.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | [`batch::run_replicates`] runs seeds on Rayon's thread pool |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ff_core::FireConfig;
//! use ff_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(FireConfig::default()).build()?;
//! let report = sim.run(&mut NoopObserver);
//! println!("{report}");
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use batch::{BatchSummary, run_replicates};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{IdleRecord, RunReport, TickSummary};
pub use sim::Sim;
