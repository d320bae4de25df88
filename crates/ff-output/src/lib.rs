//! `ff-output`: simulation output writers for the forest-fire response
//! simulator.
//!
//! The CSV backend creates one file per log in the output directory:
//!
//! | File                        | One row per                               |
//! |-----------------------------|-------------------------------------------|
//! | `position_logs.csv`         | agent per tick                            |
//! | `cnp_contract_logs.csv`     | contract event (created/bid/assignment/complete) |
//! | `drone_fire_logs.csv`       | drone detection (`debug_mode` only)       |
//! | `firefighter_fire_logs.csv` | firefighter detection or extinguish (`debug_mode` only) |
//! | `water_splashes.csv`        | extinguished tree                         |
//! | `tick_summaries.csv`        | tick                                      |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ff_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ff_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let report = sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ContractRow, DetectionKind, DetectionRow, EventRows, PositionRow, SplashRow};
pub use writer::OutputWriter;
