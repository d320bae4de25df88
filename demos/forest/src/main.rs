//! forest: command-line runner for the forest-fire response simulator.
//!
//! Single run (CSV logs under `--out`, report on stdout):
//!
//! ```text
//! cargo run --release -p forest -- --config demos/forest/forest.json --out output/forest
//! ```
//!
//! Replicate sweep (no CSV, one report line per seed plus the batch means):
//!
//! ```text
//! cargo run --release -p forest -- --replicates 16 --seed 100
//! ```
//!
//! Logging goes to stderr; `RUST_LOG` overrides `--log-level`.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use ff_core::FireConfig;
use ff_output::{CsvWriter, SimOutputObserver};
use ff_sim::{BatchSummary, SimBuilder, run_replicates};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "forest", version, about = "Forest-fire response simulation")]
struct Cli {
    /// JSON config file; missing keys take their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the tick budget.
    #[arg(long)]
    steps: Option<u64>,

    /// Override the seed (first seed of a replicate sweep).
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the CSV logs (created if missing).
    #[arg(short, long, default_value = "output/forest")]
    out: PathBuf,

    /// Record per-agent fire detections.
    #[arg(long)]
    debug: bool,

    /// Run this many seeds instead of a single logged run.
    #[arg(long)]
    replicates: Option<u64>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FireConfig> {
    let mut config = match &cli.config {
        Some(path) => FireConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FireConfig::default(),
    };
    if let Some(steps) = cli.steps {
        config.steps = steps;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.debug_mode |= cli.debug;
    Ok(config)
}

// ── Modes ─────────────────────────────────────────────────────────────────────

fn run_single(cli: &Cli, config: FireConfig) -> Result<()> {
    let mut sim = SimBuilder::new(config).build()?;

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;
    let writer = CsvWriter::new(&cli.out)?;
    let mut obs = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    let report = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }
    tracing::info!(
        elapsed_s = elapsed.as_secs_f64(),
        out = %cli.out.display(),
        "simulation complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn run_batch(cli: &Cli, config: FireConfig, n: u64) -> Result<()> {
    let seeds: Vec<u64> = (config.seed..config.seed + n).collect();

    let t0 = Instant::now();
    let reports = run_replicates(&config, &seeds)?;
    tracing::info!(runs = reports.len(), elapsed_s = t0.elapsed().as_secs_f64(), "batch complete");

    let summary = BatchSummary::from_reports(&reports);
    if cli.json {
        let doc = serde_json::json!({ "runs": reports, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{:<8} {:>6} {:>10} {:>10}", "seed", "ticks", "burned %", "complete");
    println!("{}", "-".repeat(38));
    for r in &reports {
        println!(
            "{:<8} {:>6} {:>10.2} {:>5}/{:<4}",
            r.seed,
            r.ticks,
            r.burned_fraction * 100.0,
            r.contracts_completed,
            r.contracts_created,
        );
    }
    if let Some(s) = summary {
        println!();
        println!("mean burned fraction: {:.4}", s.mean_burned_fraction);
        match s.mean_completion_rate {
            Some(rate) => println!("mean completion rate: {rate:.4}"),
            None => println!("mean completion rate: n/a"),
        }
        println!("mean ticks:           {:.1}", s.mean_ticks);
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = load_config(&cli)?;
    tracing::info!(
        size = config.size,
        firefighters = config.num_firefighters,
        drones = config.num_drones,
        steps = config.steps,
        seed = config.seed,
        "loaded configuration"
    );

    match cli.replicates {
        Some(n) if n > 0 => run_batch(&cli, config, n),
        _ => run_single(&cli, config),
    }
}
