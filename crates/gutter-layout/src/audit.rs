#![forbid(unsafe_code)]

//! Structured invariant checks over a width vector.
//!
//! The engine runs [`audit`] after every operation. Findings are data, not
//! panics: the engine logs them and only asserts (in debug builds) when an
//! error-level finding shows up in a container wide enough to hold every
//! panel at its floor.

use gutter_core::Px;
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::geometry::{self, COLLAPSED, PanelId, in_ghost_zone};

/// Severity for one invariant finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvariantSeverity {
    Error,
    Warning,
}

/// Stable code for invariant findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvariantCode {
    /// Explicit panels need more than the container offers.
    OverClaimed,
    /// A panel would render narrower than its floor.
    BelowFloor,
    /// A resting width inside `(min_width, collapse_threshold)`.
    GhostZone,
    /// An explicit width above its `max_width`.
    AboveMax,
}

/// One finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantIssue {
    pub code: InvariantCode,
    pub severity: InvariantSeverity,
    pub panel: Option<PanelId>,
    pub message: String,
}

/// All findings for one layout state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantReport {
    pub container_width: Px,
    /// Whether every panel fits at its floor in this container.
    pub feasible: bool,
    pub issues: Vec<InvariantIssue>,
}

impl InvariantReport {
    /// Return true if any error-level finding exists.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == InvariantSeverity::Error)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Findings with the given code.
    pub fn with_code(&self, code: InvariantCode) -> impl Iterator<Item = &InvariantIssue> {
        self.issues.iter().filter(move |issue| issue.code == code)
    }
}

/// Check `widths` against `config` for a `container`-wide layout.
///
/// Ghost-zone checks are skipped `while_dragging`: raw widths are allowed to
/// pass through the zone until release.
#[must_use]
pub fn audit(
    config: &LayoutConfig,
    container: Px,
    widths: &[Px],
    while_dragging: bool,
) -> InvariantReport {
    let feasible = u64::from(container) >= config.min_footprint();
    let hard = if feasible {
        InvariantSeverity::Error
    } else {
        InvariantSeverity::Warning
    };
    let mut issues = Vec::new();
    let mut push = |code, severity, panel: Option<usize>, message: String| {
        issues.push(InvariantIssue {
            code,
            severity,
            panel: panel.map(PanelId::new),
            message,
        });
    };

    for (index, (spec, &width)) in config.panels.iter().zip(widths).enumerate() {
        if width != COLLAPSED && width < spec.min_width {
            push(
                InvariantCode::BelowFloor,
                hard,
                Some(index),
                format!("width {width} below floor {}", spec.min_width),
            );
        }
        if width > spec.cap() {
            push(
                InvariantCode::AboveMax,
                hard,
                Some(index),
                format!("width {width} above max {}", spec.cap()),
            );
        }
        if !while_dragging && in_ghost_zone(spec, width) {
            push(
                InvariantCode::GhostZone,
                hard,
                Some(index),
                format!(
                    "width {width} rests inside ({}, {})",
                    spec.min_width, spec.collapse_threshold
                ),
            );
        }
    }

    let last = config.last_index();
    let last_spec = config.last_spec();
    let raw = geometry::raw_remainder(config, container, widths);
    if raw < 0 {
        push(
            InvariantCode::OverClaimed,
            hard,
            None,
            format!("explicit panels over-claim the container by {}", -raw),
        );
    } else if (raw as u64) < u64::from(last_spec.min_width) {
        push(
            InvariantCode::BelowFloor,
            hard,
            Some(last),
            format!("remainder {raw} below floor {}", last_spec.min_width),
        );
    } else if !while_dragging && in_ghost_zone(last_spec, raw as Px) {
        push(
            InvariantCode::GhostZone,
            InvariantSeverity::Warning,
            Some(last),
            format!(
                "remainder {raw} rests inside ({}, {})",
                last_spec.min_width, last_spec.collapse_threshold
            ),
        );
    }

    InvariantReport {
        container_width: container,
        feasible,
        issues,
    }
}
