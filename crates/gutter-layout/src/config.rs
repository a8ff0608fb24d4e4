#![forbid(unsafe_code)]

//! Layout configuration: per-panel limits and divider geometry.
//!
//! A [`LayoutConfig`] describes `N >= 2` horizontally stacked panels. The
//! first `N - 1` panels carry an explicit width; the last one always takes
//! the remainder of the container.
//!
//! # Invariants
//!
//! 1. `min_width > 0` for every panel.
//! 2. `collapse_threshold > min_width`.
//! 3. `preferred_width >= min_width`.
//! 4. `max_width`, when present, is at least `collapse_threshold`.
//!
//! [`LayoutConfig::validate`] enforces all four; every engine constructor
//! calls it.

use gutter_core::Px;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutConfigError, Result};

/// Width of a collapsed panel's gutter button.
pub const DEFAULT_MIN_WIDTH: Px = 48;

/// Width below which a panel counts as squeezed and snaps shut on release.
pub const DEFAULT_COLLAPSE_THRESHOLD: Px = 250;

/// Width of one draggable divider strip.
pub const DEFAULT_DIVIDER_WIDTH: Px = 16;

fn default_min_width() -> Px {
    DEFAULT_MIN_WIDTH
}

fn default_collapse_threshold() -> Px {
    DEFAULT_COLLAPSE_THRESHOLD
}

fn default_divider_width() -> Px {
    DEFAULT_DIVIDER_WIDTH
}

fn default_resizable() -> bool {
    true
}

/// Static limits for one panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Host-facing name, used in logs and snapshots.
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_min_width")]
    pub min_width: Px,
    #[serde(default = "default_collapse_threshold")]
    pub collapse_threshold: Px,
    /// Width restored by an explicit open command.
    pub preferred_width: Px,
    #[serde(default)]
    pub max_width: Option<Px>,
    /// Whether the divider on this panel's trailing edge can be dragged.
    #[serde(default = "default_resizable")]
    pub resizable: bool,
}

impl PanelSpec {
    /// A resizable panel with default floor and threshold.
    #[must_use]
    pub fn new(label: impl Into<String>, preferred_width: Px) -> Self {
        Self {
            label: label.into(),
            min_width: DEFAULT_MIN_WIDTH,
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
            preferred_width,
            max_width: None,
            resizable: true,
        }
    }

    #[must_use]
    pub fn with_min_width(mut self, min_width: Px) -> Self {
        self.min_width = min_width;
        self
    }

    #[must_use]
    pub fn with_collapse_threshold(mut self, collapse_threshold: Px) -> Self {
        self.collapse_threshold = collapse_threshold;
        self
    }

    #[must_use]
    pub fn with_max_width(mut self, max_width: Px) -> Self {
        self.max_width = Some(max_width);
        self
    }

    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.resizable = false;
        self
    }

    /// Upper bound for this panel's explicit width.
    #[inline]
    #[must_use]
    pub fn cap(&self) -> Px {
        self.max_width.unwrap_or(Px::MAX)
    }

    /// Check the per-panel invariants.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.min_width == 0 {
            return Err(LayoutConfigError::ZeroMinWidth { index });
        }
        if self.collapse_threshold <= self.min_width {
            return Err(LayoutConfigError::ThresholdNotAboveMin {
                index,
                threshold: self.collapse_threshold,
                min: self.min_width,
            });
        }
        if self.preferred_width < self.min_width {
            return Err(LayoutConfigError::PreferredBelowMin {
                index,
                preferred: self.preferred_width,
                min: self.min_width,
            });
        }
        if let Some(max) = self.max_width {
            if max < self.collapse_threshold {
                return Err(LayoutConfigError::MaxBelowThreshold {
                    index,
                    max,
                    threshold: self.collapse_threshold,
                });
            }
        }
        Ok(())
    }
}

/// Configuration for one layout instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_divider_width")]
    pub divider_width: Px,
    /// Below this container width every panel is stacked full-width.
    #[serde(default)]
    pub stack_below: Option<Px>,
    pub panels: Vec<PanelSpec>,
}

impl LayoutConfig {
    /// Build and validate a layout with default divider width.
    pub fn new(panels: impl IntoIterator<Item = PanelSpec>) -> Result<Self> {
        let config = Self {
            divider_width: DEFAULT_DIVIDER_WIDTH,
            stack_below: None,
            panels: panels.into_iter().collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// The three-pane desktop workspace: control matrix, workflow canvas,
    /// output.
    #[must_use]
    pub fn workspace() -> Self {
        Self {
            divider_width: DEFAULT_DIVIDER_WIDTH,
            stack_below: Some(1024),
            panels: vec![
                PanelSpec::new("control-matrix", 350),
                PanelSpec::new("workflow-canvas", 500),
                PanelSpec::new("output", 400),
            ],
        }
    }

    /// The agent simulator modal: capped sidebar plus chat area.
    #[must_use]
    pub fn simulator() -> Self {
        Self {
            divider_width: DEFAULT_DIVIDER_WIDTH,
            stack_below: Some(768),
            panels: vec![
                PanelSpec::new("simulator-sidebar", 350).with_max_width(600),
                PanelSpec::new("simulator-main", 400),
            ],
        }
    }

    /// The module editor modal: capped sidebar plus editor area.
    #[must_use]
    pub fn editor() -> Self {
        Self {
            divider_width: DEFAULT_DIVIDER_WIDTH,
            stack_below: Some(768),
            panels: vec![
                PanelSpec::new("editor-sidebar", 280).with_max_width(500),
                PanelSpec::new("editor-main", 400),
            ],
        }
    }

    /// Look up a preset by name (`workspace`, `simulator`, `editor`).
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "workspace" => Some(Self::workspace()),
            "simulator" => Some(Self::simulator()),
            "editor" => Some(Self::editor()),
            _ => None,
        }
    }

    #[must_use]
    pub fn with_divider_width(mut self, divider_width: Px) -> Self {
        self.divider_width = divider_width;
        self
    }

    #[must_use]
    pub fn with_stack_below(mut self, stack_below: Option<Px>) -> Self {
        self.stack_below = stack_below;
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.panels.len() < 2 {
            return Err(LayoutConfigError::TooFewPanels {
                count: self.panels.len(),
            });
        }
        for (index, panel) in self.panels.iter().enumerate() {
            panel.validate(index)?;
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Number of panels with a stored width (all but the last).
    #[inline]
    #[must_use]
    pub fn explicit_count(&self) -> usize {
        self.panels.len().saturating_sub(1)
    }

    /// Index of the implicit remainder panel.
    #[inline]
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.explicit_count()
    }

    #[inline]
    #[must_use]
    pub fn last_spec(&self) -> &PanelSpec {
        &self.panels[self.last_index()]
    }

    /// Total width of all dividers.
    #[inline]
    #[must_use]
    pub fn overhead_width(&self) -> Px {
        let dividers = Px::try_from(self.explicit_count()).unwrap_or(Px::MAX);
        self.divider_width.saturating_mul(dividers)
    }

    /// Smallest container in which every panel fits at its floor.
    #[must_use]
    pub fn min_footprint(&self) -> u64 {
        u64::from(self.overhead_width())
            + self
                .panels
                .iter()
                .map(|panel| u64::from(panel.min_width))
                .sum::<u64>()
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::workspace()
    }
}
