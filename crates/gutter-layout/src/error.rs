#![forbid(unsafe_code)]

//! Setup-time configuration errors.
//!
//! Runtime engine operations never fail; bad runtime input is clamped and
//! logged instead. Only a layout that cannot be described consistently is
//! rejected, and only when it is constructed.

use gutter_core::Px;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutConfigError {
    #[error("a layout needs at least 2 panels (got {count})")]
    TooFewPanels { count: usize },
    #[error("panel {index}: min_width must be > 0")]
    ZeroMinWidth { index: usize },
    #[error("panel {index}: collapse_threshold {threshold} must exceed min_width {min}")]
    ThresholdNotAboveMin { index: usize, threshold: Px, min: Px },
    #[error("panel {index}: preferred_width {preferred} is below min_width {min}")]
    PreferredBelowMin { index: usize, preferred: Px, min: Px },
    #[error("panel {index}: max_width {max} is below collapse_threshold {threshold}")]
    MaxBelowThreshold { index: usize, max: Px, threshold: Px },
    #[error("expected {expected} explicit widths (got {got})")]
    WidthCountMismatch { expected: usize, got: usize },
    #[error("failed to parse layout config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutConfigError>;
