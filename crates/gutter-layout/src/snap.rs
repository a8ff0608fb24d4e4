#![forbid(unsafe_code)]

//! Snap/collapse policy: the ghost-zone sanitization pass.
//!
//! Runs once after every completed width change (drag release, open,
//! collapse, container reflow) and leaves no panel resting inside
//! `(min_width, collapse_threshold)`.
//!
//! # Algorithm
//!
//! 1. Explicit panels above their `max_width` are clamped; the excess goes
//!    to the implicit last panel.
//! 2. Explicit panels are visited in stack order. A panel with
//!    `0 < width < collapse_threshold` collapses; the `width - min_width`
//!    it frees is donated to the active panel (if open and not the one
//!    collapsing), then to open panels after it, nearest first. Whatever
//!    nobody takes stays with the implicit panel.
//! 3. If the implicit remainder is in its ghost zone, the gap above its
//!    floor is absorbed by the active panel, then by open explicit panels
//!    from the end backwards. If they cannot take all of it, the remainder
//!    is raised to its threshold instead, taken from the nearest open panel
//!    that stays at or above its own threshold. Failing that, open panels
//!    are collapsed from the end until the remainder clears its threshold.
//!
//! Donations only ever grow a recipient, and a recipient visited earlier
//! already rests at `0` or `>= collapse_threshold`, so a single pass
//! reaches a fixed point: running it twice changes nothing.

use gutter_core::Px;
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::geometry::{self, COLLAPSED, PanelId};

/// What one sanitization pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapOutcome {
    /// Whether any explicit width changed.
    pub changed: bool,
    /// Panels that snapped shut, in visit order.
    pub collapsed: Vec<PanelId>,
    /// The implicit panel could not leave its ghost zone because the
    /// container is too narrow for any clean layout.
    pub squeezed_remainder: bool,
}

/// Run the sanitization pass in place.
///
/// `active` is the explicit panel whose trailing divider was being dragged
/// or which was explicitly opened.
pub fn sanitize(
    config: &LayoutConfig,
    container: Px,
    widths: &mut [Px],
    active: Option<usize>,
) -> SnapOutcome {
    let explicit = config.explicit_count();
    debug_assert_eq!(widths.len(), explicit);
    let before = widths.to_vec();
    let active = active.filter(|&index| index < explicit);
    let mut collapsed = Vec::new();

    for (index, spec) in config.panels.iter().take(explicit).enumerate() {
        if widths[index] > spec.cap() {
            debug!(
                panel = index,
                width = widths[index],
                max = spec.cap(),
                "layout.snap: clamped panel to max width"
            );
            widths[index] = spec.cap();
        }
    }

    for index in 0..explicit {
        let spec = &config.panels[index];
        let width = widths[index];
        if width == COLLAPSED || width >= spec.collapse_threshold {
            continue;
        }
        let freed = width.saturating_sub(spec.min_width);
        widths[index] = COLLAPSED;
        collapsed.push(PanelId::new(index));

        let recipients: Vec<usize> = active
            .filter(|&a| a != index)
            .into_iter()
            .chain((index + 1..explicit).filter(|&j| Some(j) != active))
            .collect();
        let leftover = donate(config, widths, freed, &recipients);
        debug!(
            panel = index,
            width,
            freed,
            leftover,
            "layout.snap: collapsed panel into gutter"
        );
    }

    let squeezed_remainder = resolve_remainder(config, container, widths, active);

    SnapOutcome {
        changed: before.as_slice() != &*widths,
        collapsed,
        squeezed_remainder,
    }
}

/// Give `amount` to open recipients in order, respecting `max_width`.
/// Returns the part nobody could take.
pub(crate) fn donate(
    config: &LayoutConfig,
    widths: &mut [Px],
    amount: Px,
    recipients: &[usize],
) -> Px {
    let mut left = amount;
    for &index in recipients {
        if left == 0 {
            break;
        }
        if widths[index] == COLLAPSED {
            continue;
        }
        let room = config.panels[index].cap().saturating_sub(widths[index]);
        let give = left.min(room);
        widths[index] += give;
        left -= give;
    }
    left
}

/// Step 3. Returns `true` when the remainder had to stay squeezed.
fn resolve_remainder(
    config: &LayoutConfig,
    container: Px,
    widths: &mut [Px],
    active: Option<usize>,
) -> bool {
    let explicit = config.explicit_count();
    let last = config.last_spec();
    let raw = geometry::raw_remainder(config, container, widths);
    if raw < 0 {
        warn!(
            container,
            overclaim = -raw,
            "layout.snap: explicit panels over-claim the container"
        );
        return false;
    }
    let remainder = raw as Px;
    if !geometry::in_ghost_zone(last, remainder) {
        return false;
    }

    let gap = remainder - last.min_width;
    let recipients: Vec<usize> = active
        .filter(|&a| widths[a] != COLLAPSED)
        .into_iter()
        .chain((0..explicit).rev().filter(|&j| Some(j) != active))
        .filter(|&j| widths[j] != COLLAPSED)
        .collect();
    let capacity: u64 = recipients
        .iter()
        .map(|&j| u64::from(config.panels[j].cap().saturating_sub(widths[j])))
        .sum();
    if capacity >= u64::from(gap) {
        let leftover = donate(config, widths, gap, &recipients);
        debug_assert_eq!(leftover, 0);
        debug!(
            remainder,
            gap, "layout.snap: implicit panel collapsed into gutter"
        );
        return false;
    }

    let shortfall = last.collapse_threshold - remainder;
    for index in (0..explicit).rev() {
        let spec = &config.panels[index];
        let width = widths[index];
        if width == COLLAPSED {
            continue;
        }
        if u64::from(width) >= u64::from(spec.collapse_threshold) + u64::from(shortfall) {
            widths[index] = width - shortfall;
            debug!(
                panel = index,
                remainder,
                shortfall,
                "layout.snap: widened implicit panel to its threshold"
            );
            return false;
        }
    }

    // Every open neighbour is capped or too close to its own threshold:
    // collapse them from the end until the remainder clears its threshold.
    let saved = widths.to_vec();
    let mut raised = remainder;
    for index in (0..explicit).rev() {
        let width = widths[index];
        if width == COLLAPSED {
            continue;
        }
        raised += width - config.panels[index].min_width;
        widths[index] = COLLAPSED;
        debug!(
            panel = index,
            width,
            remainder = raised,
            "layout.snap: collapsed capped panel to widen implicit panel"
        );
        if !geometry::in_ghost_zone(last, raised) {
            return false;
        }
    }
    widths.copy_from_slice(&saved);

    debug!(
        container,
        remainder, "layout.snap: implicit panel left squeezed"
    );
    true
}
