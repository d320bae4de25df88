//! Integration tests for ff-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use ff_core::{AgentRef, Cell, ContractEvent, ContractId, DroneId, FirefighterId, Tick};
    use ff_sim::TickSummary;

    use crate::csv::CsvWriter;
    use crate::row::{ContractRow, DetectionKind, DetectionRow, PositionRow, SplashRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, name: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(name)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn headers(dir: &TempDir, name: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(name)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        for name in [
            "position_logs.csv",
            "cnp_contract_logs.csv",
            "drone_fire_logs.csv",
            "firefighter_fire_logs.csv",
            "water_splashes.csv",
            "tick_summaries.csv",
        ] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir, "position_logs.csv"), ["time", "agent_id", "type", "x", "y"]);
        assert_eq!(headers(&dir, "water_splashes.csv"), ["x", "y", "time"]);
        assert_eq!(headers(&dir, "drone_fire_logs.csv"), ["agent_id", "event", "cells", "time"]);
        assert_eq!(headers(&dir, "cnp_contract_logs.csv")[..3], ["event", "task_id", "time"]);
        assert_eq!(headers(&dir, "tick_summaries.csv").len(), 10);
    }

    #[test]
    fn csv_position_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![
            PositionRow { tick: Tick(4), agent: AgentRef::Firefighter(FirefighterId(2)), cell: Cell::new(1, 7) },
            PositionRow { tick: Tick(4), agent: AgentRef::Drone(DroneId(0)), cell: Cell::new(9, 3) },
        ];
        w.write_positions(&rows).unwrap();
        w.finish().unwrap();

        let read_rows = read(&dir, "position_logs.csv");
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "4");
        assert_eq!(&read_rows[0][1], "F2");
        assert_eq!(&read_rows[0][2], "firefighter");
        assert_eq!(&read_rows[0][3], "1"); // row
        assert_eq!(&read_rows[0][4], "7"); // col
        assert_eq!(&read_rows[1][1], "D0");
        assert_eq!(&read_rows[1][2], "drone");
    }

    #[test]
    fn csv_contract_columns_follow_event_kind() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let c = ContractId(3);
        let rows = vec![
            ContractRow {
                tick:  Tick(1),
                event: ContractEvent::Created {
                    contract:     c,
                    location:     Cell::new(5, 6),
                    cluster_size: 4,
                    team_size:    2,
                    manager:      DroneId(1),
                },
            },
            ContractRow {
                tick:  Tick(1),
                event: ContractEvent::Bid {
                    contract:    c,
                    firefighter: FirefighterId(0),
                    bid:         2.5,
                    distance:    2.5,
                    water:       10,
                },
            },
            ContractRow {
                tick:  Tick(2),
                event: ContractEvent::Complete {
                    contract:    c,
                    firefighter: FirefighterId(0),
                    location:    Cell::new(5, 6),
                },
            },
        ];
        w.write_contract_events(&rows).unwrap();
        w.finish().unwrap();

        let read_rows = read(&dir, "cnp_contract_logs.csv");
        assert_eq!(read_rows.len(), 3);

        let created = &read_rows[0];
        assert_eq!(&created[0], "created");
        assert_eq!(&created[1], "C3");
        assert_eq!(&created[3], "D1");
        assert_eq!(&created[4], "");
        assert_eq!(&created[8], "(5,6)");
        assert_eq!(&created[9], "4");
        assert_eq!(&created[10], "2");

        let bid = &read_rows[1];
        assert_eq!(&bid[0], "bid");
        assert_eq!(&bid[3], "");
        assert_eq!(&bid[4], "F0");
        assert_eq!(&bid[5], "2.5");
        assert_eq!(&bid[7], "10");

        assert_eq!(&read_rows[2][0], "complete");
        assert_eq!(&read_rows[2][2], "2");
    }

    #[test]
    fn csv_detections_routed_by_agent_type() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![
            DetectionRow {
                tick:  Tick(3),
                agent: AgentRef::Drone(DroneId(1)),
                kind:  DetectionKind::Detected,
                cells: vec![Cell::new(0, 1), Cell::new(0, 2)],
            },
            DetectionRow {
                tick:  Tick(3),
                agent: AgentRef::Firefighter(FirefighterId(4)),
                kind:  DetectionKind::Extinguished,
                cells: vec![Cell::new(0, 1)],
            },
        ];
        w.write_detections(&rows).unwrap();
        w.finish().unwrap();

        let drones = read(&dir, "drone_fire_logs.csv");
        assert_eq!(drones.len(), 1);
        assert_eq!(&drones[0][0], "D1");
        assert_eq!(&drones[0][1], "detected");
        assert_eq!(&drones[0][2], "(0,1);(0,2)");

        let ffs = read(&dir, "firefighter_fire_logs.csv");
        assert_eq!(ffs.len(), 1);
        assert_eq!(&ffs[0][0], "F4");
        assert_eq!(&ffs[0][1], "extinguished");
        assert_eq!(&ffs[0][3], "3");
    }

    #[test]
    fn csv_splash_and_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_splashes(&[SplashRow { tick: Tick(8), cell: Cell::new(2, 3) }]).unwrap();
        w.write_tick_summary(&TickSummary { tick: Tick(8), burning: 5, open: 1, ..TickSummary::default() })
            .unwrap();
        w.finish().unwrap();

        let splashes = read(&dir, "water_splashes.csv");
        assert_eq!(&splashes[0][0], "2");
        assert_eq!(&splashes[0][1], "3");
        assert_eq!(&splashes[0][2], "8");

        let summaries = read(&dir, "tick_summaries.csv");
        assert_eq!(summaries.len(), 1);
        assert_eq!(&summaries[0][0], "8");
        assert_eq!(&summaries[0][2], "5"); // burning
        assert_eq!(&summaries[0][6], "1"); // open
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_missing_dir_fails() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── Event splitting ───────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use ff_core::{AgentRef, Cell, ContractEvent, ContractId, FirefighterId, SimEvent, Tick};

    use crate::row::{DetectionKind, EventRows};

    #[test]
    fn split_buckets_in_push_order() {
        let f0 = FirefighterId(0);
        let events = vec![
            SimEvent::Position { tick: Tick(1), agent: AgentRef::Firefighter(f0), cell: Cell::new(0, 0) },
            SimEvent::Contract {
                tick:  Tick(1),
                event: ContractEvent::Complete { contract: ContractId(0), firefighter: f0, location: Cell::new(1, 1) },
            },
            SimEvent::Extinguished { tick: Tick(1), firefighter: f0, cell: Cell::new(1, 1) },
            SimEvent::WaterSplash { tick: Tick(1), cell: Cell::new(1, 1) },
            SimEvent::Position { tick: Tick(1), agent: AgentRef::Firefighter(FirefighterId(1)), cell: Cell::new(2, 2) },
        ];

        let rows = EventRows::split(&events);
        assert_eq!(rows.positions.len(), 2);
        assert_eq!(rows.positions[1].cell, Cell::new(2, 2));
        assert_eq!(rows.contracts.len(), 1);
        assert_eq!(rows.splashes.len(), 1);
        assert_eq!(rows.detections.len(), 1);
        assert_eq!(rows.detections[0].kind, DetectionKind::Extinguished);
        assert_eq!(rows.detections[0].agent, AgentRef::Firefighter(f0));
    }

    #[test]
    fn split_empty() {
        assert!(EventRows::split(&[]).is_empty());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use ff_core::FireConfig;
    use ff_sim::{SimBuilder, SimObserver, TickSummary};

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{ContractRow, DetectionRow, PositionRow, SplashRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, name: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(name)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    /// Fails every summary write; counts the attempts.
    #[derive(Default)]
    struct FailingWriter {
        summary_calls: usize,
        finished:      bool,
    }

    impl OutputWriter for FailingWriter {
        fn write_positions(&mut self, _: &[PositionRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_contract_events(&mut self, _: &[ContractRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_detections(&mut self, _: &[DetectionRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_splashes(&mut self, _: &[SplashRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_tick_summary(&mut self, _: &TickSummary) -> OutputResult<()> {
            self.summary_calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.summary_calls))))
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn first_error_kept_and_run_continues() {
        let config = FireConfig { size: 10, num_firefighters: 2, num_drones: 1, steps: 5, seed: 3, ..FireConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        let report = sim.run(&mut obs);

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("write 1"), "got {err}");
        assert!(obs.take_error().is_none(), "take_error drains");

        let writer = obs.into_writer();
        assert_eq!(writer.summary_calls as u64, report.ticks);
        assert!(writer.finished);
    }

    #[test]
    fn integration_csv() {
        let config = FireConfig {
            size:                   20,
            num_firefighters:       6,
            num_drones:             3,
            steps:                  40,
            seed:                   7,
            debug_mode:             true,
            stop_when_extinguished: false,
            ..FireConfig::default()
        };
        let mut sim = SimBuilder::new(config).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let report = sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(report.ticks, 40);

        // Every agent logs its position once per tick.
        let positions = read(&dir, "position_logs.csv");
        assert_eq!(positions.len(), 40 * 9);

        assert_eq!(read(&dir, "tick_summaries.csv").len(), 40);

        let contracts = read(&dir, "cnp_contract_logs.csv");
        let created = contracts.iter().filter(|r| &r[0] == "created").count();
        assert_eq!(created, report.contracts_created);

        // Debug mode: one extinguished row per splash.
        let splashes = read(&dir, "water_splashes.csv").len();
        let extinguished = read(&dir, "firefighter_fire_logs.csv")
            .iter()
            .filter(|r| &r[1] == "extinguished")
            .count();
        assert_eq!(splashes, extinguished);

        assert!(read(&dir, "drone_fire_logs.csv").iter().all(|r| r[0].starts_with('D')));
    }

    #[test]
    fn finish_called_by_sim_end_only() {
        let config = FireConfig { size: 10, num_firefighters: 1, num_drones: 1, steps: 3, ..FireConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        sim.run_ticks(2, &mut obs);
        assert!(!obs.into_writer().finished);
    }

    #[test]
    fn noop_hooks_are_harmless() {
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        obs.on_tick_start(ff_core::Tick(1));
        obs.on_events(ff_core::Tick(1), &[]);
        assert!(obs.take_error().is_none());
    }
}
