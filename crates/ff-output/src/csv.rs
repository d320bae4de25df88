//! CSV output backend.
//!
//! Creates six files in the configured output directory:
//! - `position_logs.csv`
//! - `cnp_contract_logs.csv`
//! - `drone_fire_logs.csv`
//! - `firefighter_fire_logs.csv`
//! - `water_splashes.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ff_core::{AgentRef, Cell, ContractEvent};
use ff_sim::TickSummary;

use crate::{ContractRow, DetectionRow, OutputResult, PositionRow, SplashRow};
use crate::writer::OutputWriter;

pub const POSITION_HEADER: [&str; 5] = ["time", "agent_id", "type", "x", "y"];

pub const CONTRACT_HEADER: [&str; 11] = [
    "event",
    "task_id",
    "time",
    "drone_id",
    "firefighter_id",
    "bid",
    "distance",
    "water",
    "location",
    "cluster_size",
    "team_size",
];

pub const DETECTION_HEADER: [&str; 4] = ["agent_id", "event", "cells", "time"];

pub const SPLASH_HEADER: [&str; 3] = ["x", "y", "time"];

pub const SUMMARY_HEADER: [&str; 10] = [
    "tick", "alive", "burning", "burned", "ignited", "burned_out", "open", "assigned", "complete",
    "events",
];

/// Writes simulation output to six CSV files.
pub struct CsvWriter {
    positions:          Writer<File>,
    contracts:          Writer<File>,
    drone_fires:        Writer<File>,
    firefighter_fires:  Writer<File>,
    splashes:           Writer<File>,
    summaries:          Writer<File>,
    finished:           bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    ///
    /// `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let open = |name: &str, header: &[&str]| -> OutputResult<Writer<File>> {
            let mut w = Writer::from_path(dir.join(name))?;
            w.write_record(header)?;
            Ok(w)
        };

        Ok(Self {
            positions:         open("position_logs.csv", &POSITION_HEADER)?,
            contracts:         open("cnp_contract_logs.csv", &CONTRACT_HEADER)?,
            drone_fires:       open("drone_fire_logs.csv", &DETECTION_HEADER)?,
            firefighter_fires: open("firefighter_fire_logs.csv", &DETECTION_HEADER)?,
            splashes:          open("water_splashes.csv", &SPLASH_HEADER)?,
            summaries:         open("tick_summaries.csv", &SUMMARY_HEADER)?,
            finished:          false,
        })
    }
}

/// `(r,c);(r,c);…`
fn cell_list(cells: &[Cell]) -> String {
    cells.iter().map(Cell::to_string).collect::<Vec<_>>().join(";")
}

/// Contract row as CSV fields; columns that do not apply to the event kind
/// are left empty.
fn contract_record(row: &ContractRow) -> [String; 11] {
    let mut rec: [String; 11] = Default::default();
    rec[0] = row.event.kind().as_str().to_owned();
    rec[1] = row.event.contract().to_string();
    rec[2] = row.tick.0.to_string();
    match &row.event {
        ContractEvent::Created { location, cluster_size, team_size, manager, .. } => {
            rec[3] = manager.to_string();
            rec[8] = location.to_string();
            rec[9] = cluster_size.to_string();
            rec[10] = team_size.to_string();
        }
        ContractEvent::Bid { firefighter, bid, distance, water, .. } => {
            rec[4] = firefighter.to_string();
            rec[5] = bid.to_string();
            rec[6] = distance.to_string();
            rec[7] = water.to_string();
        }
        ContractEvent::Assignment { manager, firefighter, bid, .. } => {
            rec[3] = manager.to_string();
            rec[4] = firefighter.to_string();
            rec[5] = bid.to_string();
        }
        ContractEvent::Complete { firefighter, location, .. } => {
            rec[4] = firefighter.to_string();
            rec[8] = location.to_string();
        }
    }
    rec
}

impl OutputWriter for CsvWriter {
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.tick.0.to_string(),
                row.agent.to_string(),
                row.agent.kind().to_owned(),
                row.cell.row.to_string(),
                row.cell.col.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_contract_events(&mut self, rows: &[ContractRow]) -> OutputResult<()> {
        for row in rows {
            self.contracts.write_record(&contract_record(row))?;
        }
        Ok(())
    }

    fn write_detections(&mut self, rows: &[DetectionRow]) -> OutputResult<()> {
        for row in rows {
            let out = match row.agent {
                AgentRef::Drone(_)       => &mut self.drone_fires,
                AgentRef::Firefighter(_) => &mut self.firefighter_fires,
            };
            out.write_record(&[
                row.agent.to_string(),
                row.kind.as_str().to_owned(),
                cell_list(&row.cells),
                row.tick.0.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_splashes(&mut self, rows: &[SplashRow]) -> OutputResult<()> {
        for row in rows {
            self.splashes.write_record(&[
                row.cell.row.to_string(),
                row.cell.col.to_string(),
                row.tick.0.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, s: &TickSummary) -> OutputResult<()> {
        self.summaries.write_record(&[
            s.tick.0.to_string(),
            s.alive.to_string(),
            s.burning.to_string(),
            s.burned.to_string(),
            s.ignited.to_string(),
            s.burned_out.to_string(),
            s.open.to_string(),
            s.assigned.to_string(),
            s.complete.to_string(),
            s.events.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.positions.flush()?;
        self.contracts.flush()?;
        self.drone_fires.flush()?;
        self.firefighter_fires.flush()?;
        self.splashes.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
