use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use algoviz_core::{
    AlgorithmInfo, EngineError, PacingConfig, RunPhase, SearchAlgorithm, SortAlgorithm,
    format_array, parse_array, parse_target, random_array,
};
use algoviz_engine::SearchOutcome;
use algoviz_runtime::{Job, JobReport, Player};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::error::Result;
use crate::render::{FrameRenderer, FrameStyle};

/// How long the frame loop waits for an event before re-checking the job.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(
    name = "algoviz",
    about = "Watch sorting and searching algorithms run step by step",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub playback: PlaybackArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlaybackArgs {
    /// Playback speed multiplier; overrides the config file.
    #[arg(long, global = true)]
    pub speed: Option<f64>,

    /// Run without pausing between steps.
    #[arg(long, global = true)]
    pub instant: bool,

    /// Pacing config file (TOML, or JSON with a `.json` extension).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Draw each frame as horizontal bars.
    #[arg(long, global = true)]
    pub bars: bool,

    /// Print only the summary.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Print the summary as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort a comma-separated array.
    Sort {
        /// bubble, insertion, selection, merge, quick, or tim.
        algorithm: String,
        /// Values, e.g. "5, 3, 8, 1".
        #[arg(allow_hyphen_values = true)]
        values: String,
    },

    /// Search a comma-separated array for a target.
    Search {
        /// linear, binary, hash, or interpolation.
        algorithm: String,
        #[arg(allow_hyphen_values = true)]
        values: String,
        #[arg(allow_hyphen_values = true)]
        target: String,
    },

    /// Describe every algorithm.
    List,

    /// Print a random demo array.
    Random {
        /// Seed for a reproducible array.
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Sort { algorithm, values } => {
            let algorithm: SortAlgorithm = algorithm.parse()?;
            let values = parse_array(&values)?;
            let summary = play(Job::Sort { algorithm, values }, &cli.playback, out)?;
            print_summary(&summary, cli.playback.json, out)
        }
        Commands::Search {
            algorithm,
            values,
            target,
        } => {
            let algorithm: SearchAlgorithm = algorithm.parse()?;
            let values = parse_array(&values)?;
            let target = parse_target(&target)?;
            let job = Job::Search {
                algorithm,
                values,
                target,
            };
            let summary = play(job, &cli.playback, out)?;
            print_summary(&summary, cli.playback.json, out)
        }
        Commands::List => print_catalog(cli.playback.json, out),
        Commands::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            writeln!(out, "{}", format_array(&random_array(&mut rng)))?;
            Ok(())
        }
    }
}

/// Resolve the pacing config: file first, then the `--speed` override.
pub fn load_config(playback: &PlaybackArgs) -> Result<PacingConfig> {
    let mut config = match &playback.config {
        Some(path) => PacingConfig::from_file(path)?,
        None => PacingConfig::default(),
    };
    if let Some(speed) = playback.speed {
        config.speed = speed;
    }
    Ok(config.validated()?)
}

/// Final state of a played job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub kind: &'static str,
    pub algorithm: &'static str,
    pub phase: RunPhase,
    pub comparisons: u64,
    pub swaps: u64,
    pub hash_operations: u64,
    pub frames: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SearchOutcome>,
}

fn play(job: Job, playback: &PlaybackArgs, out: &mut dyn Write) -> Result<Summary> {
    let config = load_config(playback)?;
    let style = if playback.bars {
        FrameStyle::Bars
    } else {
        FrameStyle::Line
    };
    let algorithm = job.algorithm_key();
    let target = match &job {
        Job::Search { target, .. } => Some(*target),
        Job::Sort { .. } => None,
    };

    let mut renderer = FrameRenderer::new(job.values(), style);
    tracing::debug!(
        target: "algoviz.cli",
        algorithm,
        len = job.values().len(),
        config = ?playback.config,
        speed = config.speed,
        instant = playback.instant,
        "playing job"
    );
    let mut player = Player::with_pacing(config, playback.instant);
    player.start(job)?;

    loop {
        match player.recv_event_timeout(POLL_INTERVAL) {
            Some(event) => {
                let frame = renderer.apply(&event);
                if !playback.quiet {
                    writeln!(out, "{frame}")?;
                }
            }
            None if !player.is_busy() => break,
            None => {}
        }
    }
    for event in player.drain_events() {
        let frame = renderer.apply(&event);
        if !playback.quiet {
            writeln!(out, "{frame}")?;
        }
    }

    let Some(result) = player.join() else {
        return Err(EngineError::WorkerPanicked {
            message: "worker exited without a report".into(),
        }
        .into());
    };
    let report = result?;
    let stats = report.stats();
    let phase = report.phase();

    tracing::debug!(
        target: "algoviz.cli",
        algorithm,
        phase = phase.as_str(),
        comparisons = stats.comparisons,
        frames = renderer.frames(),
        "job summary"
    );

    let (kind, values, outcome) = match report {
        JobReport::Sorted { values, .. } => ("sort", Some(values), None),
        JobReport::Searched(report) => ("search", None, Some(report.outcome)),
    };
    Ok(Summary {
        kind,
        algorithm,
        phase,
        comparisons: stats.comparisons,
        swaps: stats.swaps,
        hash_operations: stats.hash_operations,
        frames: renderer.frames(),
        values,
        target,
        outcome,
    })
}

fn print_summary(summary: &Summary, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(summary)?)?;
        return Ok(());
    }

    let mut line = format!(
        "{} {}: {}, {} comparisons",
        summary.algorithm, summary.kind, summary.phase, summary.comparisons
    );
    if summary.kind == "sort" {
        line.push_str(&format!(", {} swaps", summary.swaps));
    }
    if summary.hash_operations > 0 {
        line.push_str(&format!(", {} hash operations", summary.hash_operations));
    }
    writeln!(out, "{line}")?;

    if let Some(values) = &summary.values {
        writeln!(out, "result: {}", format_array(values))?;
    }
    match (summary.outcome, summary.target) {
        (Some(SearchOutcome::Found(index)), Some(target)) => {
            writeln!(out, "found {target} at index {index}")?;
        }
        (Some(SearchOutcome::NotFound), Some(target)) => {
            writeln!(out, "{target} not found")?;
        }
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct CatalogEntry {
    kind: &'static str,
    key: &'static str,
    requires_sorted: bool,
    #[serde(flatten)]
    info: AlgorithmInfo,
}

fn catalog() -> Vec<CatalogEntry> {
    let sorts = SortAlgorithm::ALL.into_iter().map(|alg| CatalogEntry {
        kind: "sort",
        key: alg.key(),
        requires_sorted: false,
        info: alg.info(),
    });
    let searches = SearchAlgorithm::ALL.into_iter().map(|alg| CatalogEntry {
        kind: "search",
        key: alg.key(),
        requires_sorted: alg.requires_sorted(),
        info: alg.info(),
    });
    sorts.chain(searches).collect()
}

fn print_catalog(json: bool, out: &mut dyn Write) -> Result<()> {
    let entries = catalog();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }
    for entry in entries {
        writeln!(
            out,
            "{:<7} {:<14} {:<22} time {:<28} space {}",
            entry.kind,
            entry.key,
            entry.info.name,
            entry.info.time_complexity,
            entry.info.space_complexity
        )?;
        writeln!(out, "        {}", entry.info.description)?;
    }
    Ok(())
}
