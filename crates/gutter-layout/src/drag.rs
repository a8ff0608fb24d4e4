#![forbid(unsafe_code)]

//! Divider drag lifecycle and live candidate widths.
//!
//! ```text
//! Idle -> Dragging -> Idle
//!            ^    |
//!            +----+  (pointer moves)
//! ```
//!
//! [`DragController`] owns the one [`DragSession`] that may exist at a time
//! and numbers every transition it emits. It never touches panel widths
//! itself: [`drag_candidates`] turns a session plus a pointer position into
//! raw widths and the engine decides what to commit.
//!
//! # Bounded-neighbor rule
//!
//! A move on boundary `i` only ever trades pixels between panel `i` and
//! panel `i + 1` (the implicit remainder when `i + 1` is last). Panel `i`
//! grows at most by the neighbor's slack above its floor and shrinks at
//! most by the neighbor's headroom below its `max_width`. No cascade past
//! the neighbor happens while dragging, so each move is O(1) in the panel
//! count apart from copying the width vector.
//!
//! # Failure Modes
//!
//! - A second `begin` while dragging is a [`DragNoopReason::ActiveDragAlreadyInProgress`]
//!   no-op; the running session is kept.
//! - `update`/`finish` with no session are [`DragNoopReason::IdleWithoutActiveDrag`]
//!   no-ops (duplicate pointer-up, late moves).

use gutter_core::Px;
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::geometry::{self, effective_width};

/// Snapshot taken at pointer-down; destroyed at pointer-up or cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    /// Divider being dragged (between panel `boundary` and `boundary + 1`).
    pub boundary: usize,
    pub anchor_pointer_x: i32,
    /// Stored explicit widths at pointer-down.
    pub anchor_widths: Vec<Px>,
    pub container_width_at_start: Px,
    /// Last pointer position applied to the layout.
    pub last_pointer_x: i32,
    /// Number of applied moves.
    pub moves: u32,
}

impl DragSession {
    /// Total pointer travel since pointer-down.
    #[must_use]
    pub fn total_delta_x(&self) -> i32 {
        self.last_pointer_x.saturating_sub(self.anchor_pointer_x)
    }
}

/// Lifecycle state, cheap to copy into transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        boundary: usize,
        origin_x: i32,
        current_x: i32,
    },
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEndReason {
    PointerUp,
    /// Host window lost focus mid-drag.
    Blur,
    Programmatic,
    ContainerResized,
    /// The scoped guard went away with the session still open.
    GuardDropped,
}

/// Explicit diagnostics for drag input that is safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    IdleWithoutActiveDrag,
    ActiveDragAlreadyInProgress,
    BoundaryOutOfRange,
    BoundaryDisabled,
    StackedLayout,
    PointerUnchanged,
}

/// Effect of one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Started {
        boundary: usize,
        pointer_x: i32,
    },
    Updated {
        boundary: usize,
        pointer_x: i32,
        delta_x: i32,
        total_delta_x: i32,
    },
    Finished {
        boundary: usize,
        reason: DragEndReason,
        total_delta_x: i32,
    },
    Noop {
        reason: DragNoopReason,
    },
}

impl DragEffect {
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// One numbered state-machine transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragTransition {
    pub transition_id: u64,
    pub from: DragState,
    pub to: DragState,
    pub effect: DragEffect,
}

/// Global pointer cursor forced while a resize gesture is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeCursor {
    /// Horizontal divider drag.
    ColResize,
    /// Modal corner drag.
    NwseResize,
}

/// Host-wide overrides to apply for the duration of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragChrome {
    pub cursor: ResizeCursor,
    pub suppress_text_selection: bool,
}

impl DragChrome {
    #[must_use]
    pub const fn resizing(cursor: ResizeCursor) -> Self {
        Self {
            cursor,
            suppress_text_selection: true,
        }
    }
}

/// Owner of the single live drag session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragController {
    session: Option<DragSession>,
    transition_counter: u64,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        match &self.session {
            None => DragState::Idle,
            Some(session) => DragState::Dragging {
                boundary: session.boundary,
                origin_x: session.anchor_pointer_x,
                current_x: session.last_pointer_x,
            },
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Number of transitions emitted so far.
    #[must_use]
    pub const fn transition_count(&self) -> u64 {
        self.transition_counter
    }

    /// Cursor/selection overrides while a session is live.
    #[must_use]
    pub fn chrome(&self) -> Option<DragChrome> {
        self.session
            .as_ref()
            .map(|_| DragChrome::resizing(ResizeCursor::ColResize))
    }

    /// Open a session anchored at the current widths.
    ///
    /// The caller has already checked that `boundary` exists and is enabled.
    pub fn begin(
        &mut self,
        boundary: usize,
        pointer_x: i32,
        widths: &[Px],
        container: Px,
    ) -> DragTransition {
        if self.session.is_some() {
            return self.noop(DragNoopReason::ActiveDragAlreadyInProgress);
        }
        let from = self.state();
        self.session = Some(DragSession {
            boundary,
            anchor_pointer_x: pointer_x,
            anchor_widths: widths.to_vec(),
            container_width_at_start: container,
            last_pointer_x: pointer_x,
            moves: 0,
        });
        self.record(
            from,
            DragEffect::Started {
                boundary,
                pointer_x,
            },
        )
    }

    /// Move the pointer. The session records the position; candidate widths
    /// are derived from it with [`drag_candidates`].
    pub fn update(&mut self, pointer_x: i32) -> DragTransition {
        let from = self.state();
        let Some(session) = self.session.as_mut() else {
            return self.noop(DragNoopReason::IdleWithoutActiveDrag);
        };
        if session.last_pointer_x == pointer_x {
            return self.noop(DragNoopReason::PointerUnchanged);
        }
        let delta_x = pointer_x.saturating_sub(session.last_pointer_x);
        session.last_pointer_x = pointer_x;
        session.moves = session.moves.saturating_add(1);
        let effect = DragEffect::Updated {
            boundary: session.boundary,
            pointer_x,
            delta_x,
            total_delta_x: session.total_delta_x(),
        };
        self.record(from, effect)
    }

    /// Close the session, handing it back so the caller can finalize widths.
    pub fn finish(&mut self, reason: DragEndReason) -> (DragTransition, Option<DragSession>) {
        let from = self.state();
        let Some(session) = self.session.take() else {
            return (self.noop(DragNoopReason::IdleWithoutActiveDrag), None);
        };
        let effect = DragEffect::Finished {
            boundary: session.boundary,
            reason,
            total_delta_x: session.total_delta_x(),
        };
        (self.record(from, effect), Some(session))
    }

    /// Emit a no-op transition without changing state.
    pub fn noop(&mut self, reason: DragNoopReason) -> DragTransition {
        let state = self.state();
        self.record(state, DragEffect::Noop { reason })
    }

    fn record(&mut self, from: DragState, effect: DragEffect) -> DragTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        DragTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state(),
            effect,
        }
    }
}

/// Raw explicit widths for `session` with the pointer at `pointer_x`.
///
/// Widths come back un-snapped; values inside a ghost zone are expected
/// mid-drag. When the clamped candidate equals the anchor the anchor widths
/// are returned untouched, so a zero move never reshapes a collapsed
/// neighbor.
#[must_use]
pub fn drag_candidates(config: &LayoutConfig, session: &DragSession, pointer_x: i32) -> Vec<Px> {
    let anchors = &session.anchor_widths;
    let index = session.boundary;
    let neighbor = index + 1;
    let container = session.container_width_at_start;
    let spec = &config.panels[index];
    let anchor_eff = u64::from(effective_width(spec, anchors[index]));

    let (slack, headroom) = if neighbor < config.explicit_count() {
        let neighbor_spec = &config.panels[neighbor];
        let eff = effective_width(neighbor_spec, anchors[neighbor]);
        (
            u64::from(eff.saturating_sub(neighbor_spec.min_width)),
            u64::from(neighbor_spec.cap().saturating_sub(eff)),
        )
    } else {
        let remainder = geometry::remainder_width(config, container, anchors);
        (
            u64::from(remainder.saturating_sub(config.last_spec().min_width)),
            u64::MAX,
        )
    };

    let lower = u64::from(spec.min_width).max(anchor_eff.saturating_sub(headroom));
    let upper = anchor_eff
        .saturating_add(slack)
        .min(u64::from(spec.cap()))
        .min(u64::from(geometry::max_allowed(config, container, index)))
        .max(lower);

    let delta = i64::from(pointer_x) - i64::from(session.anchor_pointer_x);
    let wanted = (anchor_eff as i64).saturating_add(delta).max(0) as u64;
    let candidate = wanted.clamp(lower, upper);
    if candidate == anchor_eff {
        return anchors.clone();
    }

    let mut widths = anchors.clone();
    widths[index] = candidate as Px;
    if neighbor < config.explicit_count() {
        let neighbor_eff = i64::from(effective_width(&config.panels[neighbor], anchors[neighbor]));
        let change = candidate as i64 - anchor_eff as i64;
        widths[neighbor] = (neighbor_eff - change).max(0) as Px;
    }
    widths
}
