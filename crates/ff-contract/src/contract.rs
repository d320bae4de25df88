//! The contract record.

use std::fmt;

use ff_core::{Cell, ContractId, DroneId, FirefighterId, Tick};

use crate::Bid;

/// Contract state.  Only `Open → Assigned → Complete` is legal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ContractStatus {
    Open,
    Assigned,
    Complete,
}

impl ContractStatus {
    /// `true` if `self → next` is a legal forward step.
    #[inline]
    pub fn can_transition_to(self, next: ContractStatus) -> bool {
        matches!(
            (self, next),
            (ContractStatus::Open, ContractStatus::Assigned)
                | (ContractStatus::Assigned, ContractStatus::Complete)
        )
    }

    /// Open and Assigned contracts still cover their cluster.
    #[inline]
    pub fn is_live(self) -> bool {
        self != ContractStatus::Complete
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContractStatus::Open     => "open",
            ContractStatus::Assigned => "assigned",
            ContractStatus::Complete => "complete",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Firefighters requested for a cluster of `cluster_len` burning cells:
/// half the cluster, rounded down, but at least one.
#[inline]
pub fn team_size_for(cluster_len: usize) -> usize {
    (cluster_len / 2).max(1)
}

/// A fire-suppression task announced by a drone.
///
/// Contracts are only ever handed out by shared reference; every mutation
/// goes through [`ContractRegistry`][crate::ContractRegistry].
#[derive(Clone, Debug)]
pub struct Contract {
    pub id: ContractId,

    /// Representative cell: the row-major smallest cell of `cluster`.
    pub location: Cell,

    /// Burning cells that make up the task, sorted row-major.
    pub cluster: Vec<Cell>,

    pub status: ContractStatus,

    /// Bids in submission order.  Only grows while the contract is open.
    pub bids: Vec<Bid>,

    /// Winning firefighters, at most `team_size` of them.
    pub assigned: Vec<FirefighterId>,

    pub team_size: usize,

    /// Creation tick.
    pub timestamp: Tick,
    pub assign_time: Option<Tick>,
    pub complete_time: Option<Tick>,

    /// The drone that announced the contract and alone may assign it.
    pub manager: DroneId,
}

impl Contract {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == ContractStatus::Open
    }

    #[inline]
    pub fn has_bid_from(&self, firefighter: FirefighterId) -> bool {
        self.bids.iter().any(|b| b.firefighter == firefighter)
    }

    #[inline]
    pub fn is_assigned_to(&self, firefighter: FirefighterId) -> bool {
        self.assigned.contains(&firefighter)
    }

    /// Ticks from assignment to completion, once both have happened.
    pub fn time_to_extinguish(&self) -> Option<u64> {
        Some(self.complete_time?.since(self.assign_time?))
    }
}
