#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use gutter_layout::LayoutConfig;
use serde_json::json;
use tracing::info;

use crate::determinism::{DEFAULT_SEED, fixture_seed, random_trace};
use crate::trace::{LayoutTrace, ReplayOutcome, Result, TraceError, replay};

#[derive(Debug, Parser)]
#[command(
    name = "gutter-replay",
    about = "Replay recorded or seeded panel layout traces and report invariant issues",
    version
)]
pub struct Cli {
    /// Trace JSON file to replay.
    #[arg(long, conflicts_with = "seed")]
    pub trace: Option<PathBuf>,

    /// Generate a random trace from this seed (defaults to GUTTER_SEED).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of steps in a generated trace.
    #[arg(long, default_value_t = 200)]
    pub steps: usize,

    /// Layout preset for generated traces.
    #[arg(long, default_value = "workspace")]
    pub preset: String,

    /// Write the replayed trace as JSON.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Only print the summary line.
    #[arg(long)]
    pub quiet: bool,
}

pub fn run_from_env() -> Result<bool> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

/// Replay the trace `cli` selects, writing JSONL to `out`.
///
/// Returns `true` when the replay recorded no error-severity issues.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<bool> {
    let trace = load_trace(cli)?;
    if let Some(path) = &cli.save {
        trace.write_to(path)?;
        info!(path = %path.display(), "layout.replay: trace saved");
    }

    let outcome = replay(&trace)?;
    if !cli.quiet {
        for (step, snapshot) in outcome.snapshots.iter().enumerate() {
            serde_json::to_writer(&mut *out, &json!({ "step": step, "snapshot": snapshot }))?;
            writeln!(out)?;
        }
    }
    write_summary(&trace, &outcome, out)?;
    Ok(!outcome.has_errors())
}

fn load_trace(cli: &Cli) -> Result<LayoutTrace> {
    if let Some(path) = &cli.trace {
        return LayoutTrace::from_path(path);
    }
    let config = LayoutConfig::preset(&cli.preset)
        .ok_or_else(|| TraceError::UnknownPreset(cli.preset.clone()))?;
    let seed = cli.seed.unwrap_or_else(|| fixture_seed(DEFAULT_SEED));
    info!(seed, steps = cli.steps, preset = %cli.preset, "layout.replay: generated trace");
    Ok(random_trace(seed, cli.steps, config))
}

fn write_summary(
    trace: &LayoutTrace,
    outcome: &ReplayOutcome,
    out: &mut impl Write,
) -> Result<()> {
    let summary = json!({
        "checksum": outcome.checksum,
        "steps": trace.steps.len(),
        "issues": outcome.issues,
        "errors": outcome.has_errors(),
    });
    serde_json::to_writer(&mut *out, &summary)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
