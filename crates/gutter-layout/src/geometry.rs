#![forbid(unsafe_code)]

//! Pure width arithmetic over a set of explicit panel widths.
//!
//! Explicit widths are stored for panels `0..N-1`; a stored width of
//! [`COLLAPSED`] means "closed, rendered as a gutter at `min_width`". The
//! last panel's width is never stored, it is always the remainder:
//!
//! ```text
//! remainder = container - overhead - Σ effective_width(explicit panels)
//! ```
//!
//! Nothing here mutates state or logs.

use gutter_core::Px;
use serde::{Deserialize, Serialize};

use crate::config::{LayoutConfig, PanelSpec};

/// Stored width of a logically closed panel.
pub const COLLAPSED: Px = 0;

/// Ordinal position of a panel in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(usize);

impl PanelId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for PanelId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// How a panel should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    /// Full content.
    Full,
    /// Open but narrower than its collapse threshold.
    Squeezed,
    /// Gutter button at `min_width`.
    Collapsed,
}

/// Horizontal space a panel occupies.
#[inline]
#[must_use]
pub fn effective_width(spec: &PanelSpec, width: Px) -> Px {
    if width == COLLAPSED {
        spec.min_width
    } else {
        width
    }
}

/// Classify an explicit panel.
#[must_use]
pub fn squeeze_state(spec: &PanelSpec, width: Px) -> VisualState {
    if width == COLLAPSED {
        VisualState::Collapsed
    } else if width < spec.collapse_threshold {
        VisualState::Squeezed
    } else {
        VisualState::Full
    }
}

/// Classify the implicit last panel from its remainder.
///
/// A remainder at or below the floor is drawn as a gutter.
#[must_use]
pub fn remainder_state(spec: &PanelSpec, remainder: Px) -> VisualState {
    if remainder <= spec.min_width {
        VisualState::Collapsed
    } else if remainder < spec.collapse_threshold {
        VisualState::Squeezed
    } else {
        VisualState::Full
    }
}

/// Whether a resting width sits in the forbidden open interval
/// `(min_width, collapse_threshold)`.
#[inline]
#[must_use]
pub fn in_ghost_zone(spec: &PanelSpec, width: Px) -> bool {
    width > spec.min_width && width < spec.collapse_threshold
}

/// Container width minus divider overhead.
#[inline]
#[must_use]
pub fn available_width(config: &LayoutConfig, container: Px) -> Px {
    container.saturating_sub(config.overhead_width())
}

/// Sum of effective widths of the explicit panels.
#[must_use]
pub fn claimed_width(config: &LayoutConfig, widths: &[Px]) -> u64 {
    config
        .panels
        .iter()
        .zip(widths)
        .map(|(spec, &width)| u64::from(effective_width(spec, width)))
        .sum()
}

/// Signed remainder; negative means the explicit panels over-claim.
#[must_use]
pub fn raw_remainder(config: &LayoutConfig, container: Px, widths: &[Px]) -> i64 {
    i64::from(available_width(config, container)) - claimed_width(config, widths) as i64
}

/// Width of the implicit last panel, never negative.
///
/// A clamped result only happens transiently or on containers narrower
/// than the combined floors; callers audit for it.
#[must_use]
pub fn remainder_width(config: &LayoutConfig, container: Px, widths: &[Px]) -> Px {
    raw_remainder(config, container, widths).clamp(0, i64::from(Px::MAX)) as Px
}

/// Largest width panel `index` can take with every other panel at its
/// floor.
#[must_use]
pub fn max_allowed(config: &LayoutConfig, container: Px, index: usize) -> Px {
    let others: u64 = config
        .panels
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, spec)| u64::from(spec.min_width))
        .sum();
    let available = u64::from(available_width(config, container));
    available.saturating_sub(others).min(u64::from(Px::MAX)) as Px
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> LayoutConfig {
        LayoutConfig::workspace()
    }

    #[test]
    fn collapsed_panel_occupies_min_width() {
        let spec = PanelSpec::new("a", 350);
        assert_eq!(effective_width(&spec, COLLAPSED), 48);
        assert_eq!(effective_width(&spec, 300), 300);
    }

    #[test]
    fn squeeze_classification() {
        let spec = PanelSpec::new("a", 350);
        assert_eq!(squeeze_state(&spec, 0), VisualState::Collapsed);
        assert_eq!(squeeze_state(&spec, 48), VisualState::Squeezed);
        assert_eq!(squeeze_state(&spec, 249), VisualState::Squeezed);
        assert_eq!(squeeze_state(&spec, 250), VisualState::Full);
    }

    #[test]
    fn remainder_classification() {
        let spec = PanelSpec::new("out", 400);
        assert_eq!(remainder_state(&spec, 0), VisualState::Collapsed);
        assert_eq!(remainder_state(&spec, 48), VisualState::Collapsed);
        assert_eq!(remainder_state(&spec, 118), VisualState::Squeezed);
        assert_eq!(remainder_state(&spec, 570), VisualState::Full);
    }

    #[test]
    fn ghost_zone_is_open_interval() {
        let spec = PanelSpec::new("a", 350);
        assert!(!in_ghost_zone(&spec, 48));
        assert!(in_ghost_zone(&spec, 49));
        assert!(in_ghost_zone(&spec, 249));
        assert!(!in_ghost_zone(&spec, 250));
        assert!(!in_ghost_zone(&spec, 0));
    }

    #[test]
    fn remainder_of_three_panel_workspace() {
        let config = workspace();
        assert_eq!(remainder_width(&config, 1000, &[350, 400]), 218);
        assert_eq!(remainder_width(&config, 1000, &[0, 0]), 872);
        assert_eq!(remainder_width(&config, 1000, &[350, 0]), 570);
    }

    #[test]
    fn overclaim_is_negative_raw_and_zero_clamped() {
        let config = workspace();
        assert_eq!(raw_remainder(&config, 500, &[350, 400]), -282);
        assert_eq!(remainder_width(&config, 500, &[350, 400]), 0);
    }

    #[test]
    fn zero_container_never_underflows() {
        let config = workspace();
        assert_eq!(available_width(&config, 0), 0);
        assert_eq!(remainder_width(&config, 0, &[0, 0]), 0);
        assert_eq!(max_allowed(&config, 0, 0), 0);
    }

    #[test]
    fn max_allowed_pushes_others_to_floor() {
        let config = workspace();
        assert_eq!(max_allowed(&config, 1000, 0), 1000 - 32 - 48 - 48);
        assert_eq!(max_allowed(&config, 1000, 2), 872);
    }

    #[test]
    fn panel_id_round_trips_through_serde() {
        let id = PanelId::new(2);
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "2");
        assert_eq!(PanelId::from(2).index(), 2);
    }
}
