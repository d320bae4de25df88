//! Flat row types, one per output log.
//!
//! Rows keep typed values; each backend decides how to format them.
//! [`EventRows::split`] sorts one tick's [`SimEvent`]s into these buckets.

use ff_core::{AgentRef, Cell, ContractEvent, SimEvent, Tick};

/// One agent's position at the start of its step.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionRow {
    pub tick:  Tick,
    pub agent: AgentRef,
    pub cell:  Cell,
}

/// One contract lifecycle event.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractRow {
    pub tick:  Tick,
    pub event: ContractEvent,
}

/// What a detection row records.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DetectionKind {
    /// Burning cells seen this tick.
    Detected,
    /// A single tree put out this tick.
    Extinguished,
}

impl DetectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DetectionKind::Detected     => "detected",
            DetectionKind::Extinguished => "extinguished",
        }
    }
}

/// Debug-mode fire observations of one agent.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionRow {
    pub tick:  Tick,
    pub agent: AgentRef,
    pub kind:  DetectionKind,
    pub cells: Vec<Cell>,
}

/// Where water was dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SplashRow {
    pub tick: Tick,
    pub cell: Cell,
}

/// One tick's events, split by destination log.
#[derive(Default, Debug)]
pub struct EventRows {
    pub positions:  Vec<PositionRow>,
    pub contracts:  Vec<ContractRow>,
    pub detections: Vec<DetectionRow>,
    pub splashes:   Vec<SplashRow>,
}

impl EventRows {
    /// Bucket `events`, keeping push order within each bucket.
    pub fn split(events: &[SimEvent]) -> Self {
        let mut rows = Self::default();
        for event in events {
            match event {
                &SimEvent::Position { tick, agent, cell } => {
                    rows.positions.push(PositionRow { tick, agent, cell });
                }
                SimEvent::Contract { tick, event } => {
                    rows.contracts.push(ContractRow { tick: *tick, event: event.clone() });
                }
                SimEvent::FireDetected { tick, agent, fires } => {
                    rows.detections.push(DetectionRow {
                        tick:  *tick,
                        agent: *agent,
                        kind:  DetectionKind::Detected,
                        cells: fires.clone(),
                    });
                }
                &SimEvent::Extinguished { tick, firefighter, cell } => {
                    rows.detections.push(DetectionRow {
                        tick,
                        agent: AgentRef::Firefighter(firefighter),
                        kind:  DetectionKind::Extinguished,
                        cells: vec![cell],
                    });
                }
                &SimEvent::WaterSplash { tick, cell } => {
                    rows.splashes.push(SplashRow { tick, cell });
                }
            }
        }
        rows
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
            && self.contracts.is_empty()
            && self.detections.is_empty()
            && self.splashes.is_empty()
    }
}
