//! Run configuration.
//!
//! `FireConfig` is the flat key-value parameter set of one simulation run.
//! It deserializes from JSON using the same keys the scenario files use,
//! including the historical spellings (`"Tree density"`, `"probSpread"`).
//! Unknown keys are ignored so scenario files may carry parameters for
//! variants this simulator does not model (wind, humidity, …).
//!
//! ```rust
//! use ff_core::FireConfig;
//!
//! let cfg = FireConfig::from_json_str(r#"{ "size": 20, "Tree density": 0.5 }"#).unwrap();
//! assert_eq!(cfg.size, 20);
//! assert_eq!(cfg.tree_density, 0.5);
//! assert_eq!(cfg.num_drones, 5); // defaulted
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Cell, FfError, FfResult};

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireConfig {
    /// Grid dimension; the grid is `size × size`.
    pub size: u32,

    /// Fraction of cells planted with a tree at setup.
    #[serde(rename = "Tree density", alias = "tree_density")]
    pub tree_density: f64,

    /// Probability that a burning tree ignites one alive neighbour per tick.
    #[serde(rename = "probSpread", alias = "probability_of_spread", alias = "prob_spread")]
    pub prob_spread: f64,

    /// Ticks a tree burns before it is Burned.
    pub tree_burn_time: u32,

    /// Regrowth hook carried on every tree.  Not used by the fire model.
    pub tree_growth_rate: f32,

    /// Side length of the square ignited around the grid centre at setup.
    pub initial_fire_size: u32,

    pub num_firefighters: u32,
    pub num_drones: u32,

    /// Water units a firefighter carries; one unit per extinguished tree.
    pub max_water: u32,

    pub drone_max_battery: f64,

    /// Safety margin kept on top of the distance to base before a drone
    /// turns back.
    pub drone_battery_warning: f64,

    /// Firefighter detection and extinguishing radius.
    pub sensor_range: f64,
    pub drone_sensor_range: f64,

    /// Firefighter cells per tick, per axis.
    pub base_speed: u32,
    pub drone_speed: u32,

    /// Ticks an extinguish action takes.
    pub extinguish_time: u32,

    /// Tick budget.
    pub steps: u64,

    pub seed: u64,

    /// Record per-agent fire detections in the event log.
    pub debug_mode: bool,

    /// End the run early once no tree is burning.
    pub stop_when_extinguished: bool,

    /// Allow at most one outstanding bid per firefighter.
    pub exclusive_bidding: bool,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            size:                   50,
            tree_density:           0.75,
            prob_spread:            0.08,
            tree_burn_time:         8,
            tree_growth_rate:       0.01,
            initial_fire_size:      5,
            num_firefighters:       30,
            num_drones:             5,
            max_water:              50,
            drone_max_battery:      80.0,
            drone_battery_warning:  10.0,
            sensor_range:           2.0,
            drone_sensor_range:     7.0,
            base_speed:             3,
            drone_speed:            3,
            extinguish_time:        1,
            steps:                  200,
            seed:                   0,
            debug_mode:             false,
            stop_when_extinguished: false,
            exclusive_bidding:      false,
        }
    }
}

impl FireConfig {
    /// Parse from a JSON document.  Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> FfResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> FfResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Grid size as the signed coordinate type used by [`Cell`].
    #[inline]
    pub fn grid_size(&self) -> i32 {
        self.size as i32
    }

    /// The drones' shared recharge station: the bottom-right corner.
    #[inline]
    pub fn drone_base(&self) -> Cell {
        let last = self.grid_size() - 1;
        Cell::new(last, last)
    }

    /// Reject parameter sets the simulation cannot run.
    pub fn validate(&self) -> FfResult<()> {
        fn bad(msg: impl Into<String>) -> FfResult<()> {
            Err(FfError::Config(msg.into()))
        }

        if self.size == 0 || self.size > i32::MAX as u32 {
            return bad(format!("size must be in 1..={}, got {}", i32::MAX, self.size));
        }
        if !(0.0..=1.0).contains(&self.tree_density) {
            return bad(format!("Tree density must be in [0, 1], got {}", self.tree_density));
        }
        if !(0.0..=1.0).contains(&self.prob_spread) {
            return bad(format!("probSpread must be in [0, 1], got {}", self.prob_spread));
        }
        if self.base_speed == 0 || self.drone_speed == 0 {
            return bad("base_speed and drone_speed must be at least 1");
        }
        if self.extinguish_time == 0 {
            return bad("extinguish_time must be at least 1");
        }
        if !(self.drone_max_battery > 0.0) {
            return bad(format!("drone_max_battery must be positive, got {}", self.drone_max_battery));
        }
        if self.drone_battery_warning < 0.0 {
            return bad("drone_battery_warning must not be negative");
        }
        if self.sensor_range < 0.0 || self.drone_sensor_range < 0.0 {
            return bad("sensor ranges must not be negative");
        }
        Ok(())
    }
}
