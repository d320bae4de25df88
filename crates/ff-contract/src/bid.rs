//! Firefighter bids.

use ff_core::{Cell, FirefighterId, Tick};

/// Added to the water level before dividing so an empty tank never yields an
/// infinite or NaN bid.
pub const WATER_EPSILON: f64 = 1e-5;

/// Cost of sending a unit `distance` cells away with `water` units on board.
/// Lower is better: close, well-supplied units win.
#[inline]
pub fn bid_value(distance: f64, water: u32) -> f64 {
    distance / (water as f64 + WATER_EPSILON)
}

/// One firefighter's offer on one contract.
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub firefighter: FirefighterId,
    pub value:       f64,
    pub distance:    f64,
    pub water:       u32,
    pub tick:        Tick,
}

impl Bid {
    /// Price a bid from `from` to a contract at `location`.
    pub fn new(firefighter: FirefighterId, from: Cell, location: Cell, water: u32, tick: Tick) -> Self {
        let distance = from.distance(location);
        Self {
            firefighter,
            value: bid_value(distance, water),
            distance,
            water,
            tick,
        }
    }
}
