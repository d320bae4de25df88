//! Append-only observability records.
//!
//! Agents push [`SimEvent`]s into the tick's [`EventLog`] as they act.  The
//! log is pure output: nothing in the coordination logic ever reads it back.
//! The simulation hands each tick's log to its observer and then clears it.

use std::fmt;

use crate::{Cell, ContractId, DroneId, FirefighterId, Tick};

// ── Agent reference ───────────────────────────────────────────────────────────

/// A mobile agent of either type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AgentRef {
    Firefighter(FirefighterId),
    Drone(DroneId),
}

impl AgentRef {
    /// Lower-case type label used in the position log.
    pub fn kind(self) -> &'static str {
        match self {
            AgentRef::Firefighter(_) => "firefighter",
            AgentRef::Drone(_)       => "drone",
        }
    }
}

impl fmt::Display for AgentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentRef::Firefighter(id) => fmt::Display::fmt(id, f),
            AgentRef::Drone(id)       => fmt::Display::fmt(id, f),
        }
    }
}

// ── Contract events ───────────────────────────────────────────────────────────

/// Discriminant of a [`ContractEvent`], as written to the contract log.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ContractEventKind {
    Created,
    Bid,
    Assignment,
    Complete,
}

impl ContractEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContractEventKind::Created    => "created",
            ContractEventKind::Bid        => "bid",
            ContractEventKind::Assignment => "assignment",
            ContractEventKind::Complete   => "complete",
        }
    }
}

impl fmt::Display for ContractEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a contract's lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum ContractEvent {
    Created {
        contract:     ContractId,
        location:     Cell,
        cluster_size: usize,
        team_size:    usize,
        manager:      DroneId,
    },
    Bid {
        contract:    ContractId,
        firefighter: FirefighterId,
        bid:         f64,
        distance:    f64,
        water:       u32,
    },
    /// One record per winning firefighter.
    Assignment {
        contract:    ContractId,
        manager:     DroneId,
        firefighter: FirefighterId,
        bid:         f64,
    },
    Complete {
        contract:    ContractId,
        firefighter: FirefighterId,
        location:    Cell,
    },
}

impl ContractEvent {
    pub fn kind(&self) -> ContractEventKind {
        match self {
            ContractEvent::Created { .. }    => ContractEventKind::Created,
            ContractEvent::Bid { .. }        => ContractEventKind::Bid,
            ContractEvent::Assignment { .. } => ContractEventKind::Assignment,
            ContractEvent::Complete { .. }   => ContractEventKind::Complete,
        }
    }

    pub fn contract(&self) -> ContractId {
        match *self {
            ContractEvent::Created { contract, .. }
            | ContractEvent::Bid { contract, .. }
            | ContractEvent::Assignment { contract, .. }
            | ContractEvent::Complete { contract, .. } => contract,
        }
    }
}

// ── SimEvent ──────────────────────────────────────────────────────────────────

/// Everything the simulation reports to the outside world.
#[derive(Clone, Debug, PartialEq)]
pub enum SimEvent {
    /// Agent position at the start of its step.
    Position { tick: Tick, agent: AgentRef, cell: Cell },

    Contract { tick: Tick, event: ContractEvent },

    /// Burning cells an agent saw this tick.  Only recorded with
    /// `debug_mode` on.
    FireDetected { tick: Tick, agent: AgentRef, fires: Vec<Cell> },

    /// A firefighter finished extinguishing a tree.  Only recorded with
    /// `debug_mode` on.
    Extinguished { tick: Tick, firefighter: FirefighterId, cell: Cell },

    /// Water drop location, used by renderers.
    WaterSplash { tick: Tick, cell: Cell },
}

impl SimEvent {
    pub fn tick(&self) -> Tick {
        match *self {
            SimEvent::Position { tick, .. }
            | SimEvent::Contract { tick, .. }
            | SimEvent::FireDetected { tick, .. }
            | SimEvent::Extinguished { tick, .. }
            | SimEvent::WaterSplash { tick, .. } => tick,
        }
    }
}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// Append-only buffer of the events produced during one tick.
#[derive(Default, Debug)]
pub struct EventLog {
    events: Vec<SimEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Shorthand for pushing a [`SimEvent::Contract`].
    #[inline]
    pub fn contract(&mut self, tick: Tick, event: ContractEvent) {
        self.events.push(SimEvent::Contract { tick, event });
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Contract lifecycle events in push order.
    pub fn contract_events(&self) -> impl Iterator<Item = &ContractEvent> + '_ {
        self.events.iter().filter_map(|e| match e {
            SimEvent::Contract { event, .. } => Some(event),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
