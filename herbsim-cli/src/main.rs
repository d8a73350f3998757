mod progress;
mod reports;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use herbsim_core::{Herb, SimConfig, TrialRunner};
use progress::ProgressMeter;
use reports::{CellStats, HerbRow, MatrixReport, PatchColumn};

#[derive(Debug, Parser)]
#[command(name = "herbsim", version)]
#[command(about = "Monte Carlo cross-check for the closed-form herb yield calculator")]
struct Args {
    /// Path to the JSON run configuration
    config: PathBuf,

    /// Number of trials per herb/patch cell
    #[arg(long, short, default_value_t = 10_000)]
    trials: u32,

    /// Master seed for the per-trial RNG streams
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Suppress the progress ticker
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args.config)?;
    config
        .validate()
        .context("configuration failed validation")?;

    let herbs = growable_herbs(&config);
    if herbs.is_empty() {
        anyhow::bail!(
            "no herb is growable at farming level {}; the catalog starts at level {}",
            config.farming_level,
            Herb::Guam.required_level()
        );
    }

    let cell_count = herbs.len() * config.patches.len();
    info!(
        "running {} trials per cell across {} herbs x {} patches (seed {})",
        args.trials,
        herbs.len(),
        config.patches.len(),
        args.seed
    );

    let total_trials = cell_count as u64 * u64::from(args.trials);
    let mut meter = ProgressMeter::new(total_trials, args.quiet);
    let report = run_matrix(&config, &args, &herbs, &mut meter)?;
    meter.finish();

    let rendered = match args.report.as_str() {
        "json" => reports::generate_json_report(&report)?,
        "markdown" => reports::generate_markdown_report(&report),
        _ => reports::generate_console_report(&report),
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    SimConfig::from_json(&raw)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

/// Herbs the configured farming level can plant, in catalog order.
fn growable_herbs(config: &SimConfig) -> Vec<Herb> {
    let mut herbs = Vec::new();
    for herb in Herb::ALL {
        if herb.required_level() <= config.farming_level {
            herbs.push(*herb);
        } else {
            debug!(
                "skipping {}: requires level {}",
                herb.name(),
                herb.required_level()
            );
        }
    }
    herbs
}

/// Run every (herb, patch) cell and assemble the report matrix.
fn run_matrix(
    config: &SimConfig,
    args: &Args,
    herbs: &[Herb],
    meter: &mut ProgressMeter,
) -> Result<MatrixReport> {
    let mut rows = Vec::with_capacity(herbs.len());
    for herb in herbs {
        let mut cells = Vec::with_capacity(config.patches.len());
        for patch in &config.patches {
            let runner = TrialRunner::new(*herb, *patch, args.trials, args.seed);
            let aggregate = runner.run_with_progress(config, |_| meter.tick())?;
            let stats = CellStats::from_aggregate(&aggregate)?;
            debug!(
                "{} at {}: {:.1}% survival, {:.2} herbs, {:.1} xp",
                herb.name(),
                patch.key(),
                stats.survival_rate * 100.0,
                stats.mean_herbs,
                stats.mean_xp
            );
            cells.push(stats);
        }
        rows.push(HerbRow::new(herb.name().to_string(), cells));
    }

    Ok(MatrixReport {
        farming_level: config.farming_level,
        trials: args.trials,
        seed: args.seed,
        patches: config
            .patches
            .iter()
            .map(|patch| PatchColumn {
                key: patch.key().to_string(),
                name: patch.name().to_string(),
                description: patch.description(config),
            })
            .collect(),
        rows,
    })
}
