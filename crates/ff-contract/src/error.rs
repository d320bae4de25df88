//! Contract registry error type.

use thiserror::Error;

use ff_core::{Cell, ContractId, DroneId, FirefighterId, Tick};

use crate::ContractStatus;

/// A registry operation that was refused.  None of these are fatal; agents
/// skip the action and carry on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContractError {
    #[error("contract {0} does not exist")]
    UnknownContract(ContractId),

    #[error("cannot create a contract for an empty cluster")]
    EmptyCluster,

    #[error("cell {cell} is already covered by live contract {by}")]
    CellCovered { cell: Cell, by: ContractId },

    #[error("contract {contract} is {status}, not open")]
    NotOpen { contract: ContractId, status: ContractStatus },

    #[error("{firefighter} already bid on contract {contract}")]
    DuplicateBid { contract: ContractId, firefighter: FirefighterId },

    #[error("{drone} does not manage contract {contract}")]
    NotManager { contract: ContractId, drone: DroneId },

    #[error("contract {0} has no bids")]
    NoBids(ContractId),

    #[error("contract {contract} was created at {created}; cannot assign at {now}")]
    TooEarly { contract: ContractId, created: Tick, now: Tick },

    #[error("{firefighter} is not assigned to contract {contract}")]
    NotAssignee { contract: ContractId, firefighter: FirefighterId },

    #[error("contract {contract} cannot move from {from} to {to}")]
    IllegalTransition { contract: ContractId, from: ContractStatus, to: ContractStatus },
}

pub type ContractResult<T> = Result<T, ContractError>;
