#![forbid(unsafe_code)]

//! Recorded command streams and their deterministic replay.
//!
//! A [`LayoutTrace`] is a layout configuration, a starting container width
//! and a list of host commands. [`replay`] runs it against a fresh
//! [`LayoutEngine`], snapshots the layout after every step and hashes the
//! snapshots, so two runs of the same trace can be compared by checksum
//! alone.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "config": { "panels": [ { "preferred_width": 350 }, { "preferred_width": 400 } ] },
//!   "container_width": 1000,
//!   "steps": [
//!     { "op": "begin_drag", "boundary": 0, "pointer_x": 350 },
//!     { "op": "update_drag", "pointer_x": 40 },
//!     { "op": "end_drag" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use gutter_layout::{
    DragEndReason, InvariantIssue, InvariantSeverity, LayoutConfig, LayoutConfigError,
    LayoutEngine, LayoutSnapshot, PanelId,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info_span, warn};

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to access trace file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse trace JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid layout config in trace: {0}")]
    Config(#[from] LayoutConfigError),
    #[error("unknown preset {0:?} (expected workspace, simulator or editor)")]
    UnknownPreset(String),
    #[error("failed to write replay output: {0}")]
    Output(#[from] std::io::Error),
}

impl TraceError {
    /// Process exit code for the replay binary.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownPreset(_) => 64,
            Self::Json(_) | Self::Config(_) => 65,
            Self::Io { .. } => 66,
            Self::Output(_) => 74,
        }
    }
}

pub type Result<T> = std::result::Result<T, TraceError>;

/// One host command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TraceStep {
    Resize { width: i64 },
    BeginDrag { boundary: usize, pointer_x: i32 },
    UpdateDrag { pointer_x: i32 },
    QueueDrag { pointer_x: i32 },
    Frame,
    EndDrag,
    CancelDrag { reason: DragEndReason },
    Open { panel: usize },
    Collapse { panel: usize },
}

/// A replayable command stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTrace {
    pub config: LayoutConfig,
    pub container_width: i64,
    #[serde(default)]
    pub steps: Vec<TraceStep>,
}

impl LayoutTrace {
    #[must_use]
    pub fn new(config: LayoutConfig, container_width: i64) -> Self {
        Self {
            config,
            container_width,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_step(mut self, step: TraceStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let trace: Self = serde_json::from_str(json)?;
        trace.config.validate()?;
        Ok(trace)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| TraceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json_pretty()?).map_err(|source| TraceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// An invariant finding tagged with the step that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepIssue {
    /// `0` is the mount; step `n` is `steps[n - 1]`.
    pub step: usize,
    pub issue: InvariantIssue,
}

/// Everything a replay observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayOutcome {
    /// Mount snapshot followed by one snapshot per step.
    pub snapshots: Vec<LayoutSnapshot>,
    pub issues: Vec<StepIssue>,
    /// blake3 hex digest of the snapshots' JSON.
    pub checksum: String,
}

impl ReplayOutcome {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.issue.severity == InvariantSeverity::Error)
    }

    #[must_use]
    pub fn final_snapshot(&self) -> Option<&LayoutSnapshot> {
        self.snapshots.last()
    }
}

/// Run `trace` against a fresh engine.
pub fn replay(trace: &LayoutTrace) -> Result<ReplayOutcome> {
    let _span = info_span!(
        "layout.replay",
        panels = trace.config.panel_count(),
        container_width = trace.container_width,
        steps = trace.steps.len()
    )
    .entered();

    let mut engine = LayoutEngine::new(trace.config.clone(), trace.container_width)?;
    let mut snapshots = Vec::with_capacity(trace.steps.len() + 1);
    let mut issues = Vec::new();
    record(&engine, 0, &mut snapshots, &mut issues);

    for (index, step) in trace.steps.iter().enumerate() {
        let changed = apply(&mut engine, step);
        debug!(step = index + 1, ?step, changed, "layout.replay: applied");
        record(&engine, index + 1, &mut snapshots, &mut issues);
    }

    let checksum = blake3::hash(&serde_json::to_vec(&snapshots)?)
        .to_hex()
        .to_string();
    if !issues.is_empty() {
        warn!(count = issues.len(), "layout.replay: invariant issues recorded");
    }
    Ok(ReplayOutcome {
        snapshots,
        issues,
        checksum,
    })
}

/// Apply one step; returns how many panels changed.
fn apply(engine: &mut LayoutEngine, step: &TraceStep) -> usize {
    match *step {
        TraceStep::Resize { width } => engine.resize_container(width).len(),
        TraceStep::BeginDrag {
            boundary,
            pointer_x,
        } => engine.begin_drag(boundary, pointer_x).changes.len(),
        TraceStep::UpdateDrag { pointer_x } => engine.update_drag(pointer_x).changes.len(),
        TraceStep::QueueDrag { pointer_x } => {
            engine.queue_drag(pointer_x);
            0
        }
        TraceStep::Frame => engine
            .on_frame()
            .map_or(0, |outcome| outcome.changes.len()),
        TraceStep::EndDrag => engine.end_drag().changes.len(),
        TraceStep::CancelDrag { reason } => engine.cancel_drag(reason).changes.len(),
        TraceStep::Open { panel } => engine.open_panel(PanelId::new(panel)).len(),
        TraceStep::Collapse { panel } => engine.collapse_panel(PanelId::new(panel)).len(),
    }
}

fn record(
    engine: &LayoutEngine,
    step: usize,
    snapshots: &mut Vec<LayoutSnapshot>,
    issues: &mut Vec<StepIssue>,
) {
    snapshots.push(engine.snapshot());
    issues.extend(
        engine
            .audit()
            .issues
            .into_iter()
            .map(|issue| StepIssue { step, issue }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_trace() -> LayoutTrace {
        LayoutTrace::new(LayoutConfig::workspace().with_stack_below(None), 1000)
            .with_step(TraceStep::BeginDrag {
                boundary: 0,
                pointer_x: 350,
            })
            .with_step(TraceStep::UpdateDrag { pointer_x: 40 })
            .with_step(TraceStep::EndDrag)
    }

    #[test]
    fn replay_snapshots_every_step() {
        let outcome = replay(&drag_trace()).expect("replay");
        assert_eq!(outcome.snapshots.len(), 4);
        assert!(outcome.snapshots[2].dragging);
        let last = outcome.final_snapshot().expect("snapshot");
        assert!(!last.dragging);
        assert_eq!(last.panels[0].render_width, 48);
        assert_eq!(last.panels[0].stored_width, Some(0));
        assert!(!outcome.has_errors());
        assert_eq!(outcome.checksum.len(), 64);
    }

    #[test]
    fn same_trace_same_checksum() {
        let a = replay(&drag_trace()).expect("replay");
        let b = replay(&drag_trace()).expect("replay");
        assert_eq!(a.checksum, b.checksum);
        let shorter = LayoutTrace {
            steps: drag_trace().steps[..2].to_vec(),
            ..drag_trace()
        };
        assert_ne!(replay(&shorter).expect("replay").checksum, a.checksum);
    }

    #[test]
    fn steps_use_op_tags() {
        let json = serde_json::to_value(TraceStep::CancelDrag {
            reason: DragEndReason::Blur,
        })
        .expect("serialize");
        assert_eq!(json["op"], "cancel_drag");
        assert_eq!(json["reason"], "blur");
        let frame: TraceStep = serde_json::from_str(r#"{"op":"frame"}"#).expect("parse");
        assert_eq!(frame, TraceStep::Frame);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = LayoutTrace::from_json_str(
            r#"{"config":{"panels":[{"preferred_width":300}]},"container_width":800}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TraceError::Config(_)));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn infeasible_container_records_warnings_only() {
        let trace = LayoutTrace::new(LayoutConfig::workspace(), 100);
        let outcome = replay(&trace).expect("replay");
        assert!(!outcome.issues.is_empty());
        assert!(!outcome.has_errors());
        assert_eq!(outcome.issues[0].step, 0);
    }
}
