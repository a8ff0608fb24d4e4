#![forbid(unsafe_code)]

//! The layout container: panel widths, commands and host-facing views.
//!
//! [`LayoutEngine`] owns the stored widths of the first `N - 1` panels and
//! the drag controller. The host pushes the container width in, forwards
//! pointer input and gutter-button clicks, and reads back per-panel render
//! widths and visual states.
//!
//! # Invariants
//!
//! After every command:
//!
//! 1. `Σ render widths + overhead == container` (whenever the container can
//!    hold every panel at its floor).
//! 2. No explicit panel rests inside its ghost zone unless a drag is live.
//! 3. Every stored width is `0` or at least the panel's `min_width`, and
//!    never above its `max_width`.
//!
//! Each command returns the [`PanelChange`]s it caused, diffed from panel
//! views taken before and after, so hosts only re-render what moved.
//!
//! # Failure Modes
//!
//! Commands never fail. Negative container widths are clamped to zero,
//! unknown panel ids are ignored, and stale drag events come back as no-op
//! transitions. Each is logged at `warn` or reported through
//! [`DragNoopReason`].

use gutter_core::{PointerCoalescer, PointerPosition, Px, Span};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::audit::{InvariantReport, audit};
use crate::config::LayoutConfig;
use crate::drag::{
    DragChrome, DragController, DragEffect, DragEndReason, DragNoopReason, DragState,
    DragTransition, drag_candidates,
};
use crate::error::{LayoutConfigError, Result};
use crate::geometry::{
    self, COLLAPSED, PanelId, VisualState, effective_width, in_ghost_zone, max_allowed,
    remainder_state, remainder_width, squeeze_state,
};
use crate::snap::{self, donate};

/// Whether panels sit side by side or stack vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    #[default]
    Split,
    /// Container below `stack_below`: every panel full width, no dividers.
    Stacked,
}

/// What the host renders for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelView {
    pub id: PanelId,
    pub render_width: Px,
    pub visual_state: VisualState,
    /// Stored width; `None` for the implicit last panel.
    pub stored_width: Option<Px>,
}

/// One divider strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryView {
    /// Boundary `i` sits between panel `i` and panel `i + 1`.
    pub index: usize,
    pub span: Span,
    pub enabled: bool,
}

/// A panel whose render width or visual state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelChange {
    pub panel: PanelId,
    pub previous: PanelView,
    pub current: PanelView,
}

/// Serializable picture of the whole layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub mode: LayoutMode,
    pub container_width: Px,
    pub dragging: bool,
    pub panels: Vec<PanelView>,
    pub boundaries: Vec<BoundaryView>,
}

/// Result of a drag command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragOutcome {
    pub transition: DragTransition,
    pub changes: Vec<PanelChange>,
}

/// N-panel layout with collapse-to-gutter snapping.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    container_width: Px,
    /// Host window width; decides the stacking breakpoint when set.
    viewport_width: Option<Px>,
    widths: Vec<Px>,
    drag: DragController,
    pending: PointerCoalescer,
    squeezed_remainder: bool,
}

impl LayoutEngine {
    /// Mount a layout with every explicit panel at its preferred width.
    pub fn new(config: LayoutConfig, container_width: i64) -> Result<Self> {
        let widths = config
            .panels
            .iter()
            .take(config.explicit_count())
            .map(|spec| spec.preferred_width)
            .collect();
        Self::mount(config, container_width, widths)
    }

    /// Mount a layout from previously stored explicit widths.
    pub fn with_widths(config: LayoutConfig, container_width: i64, widths: &[Px]) -> Result<Self> {
        config.validate()?;
        if widths.len() != config.explicit_count() {
            return Err(LayoutConfigError::WidthCountMismatch {
                expected: config.explicit_count(),
                got: widths.len(),
            });
        }
        Self::mount(config, container_width, widths.to_vec())
    }

    fn mount(config: LayoutConfig, container_width: i64, widths: Vec<Px>) -> Result<Self> {
        config.validate()?;
        let mut engine = Self {
            config,
            container_width: 0,
            viewport_width: None,
            widths,
            drag: DragController::new(),
            pending: PointerCoalescer::new(),
            squeezed_remainder: false,
        };
        engine.reflow(container_width);
        debug!(
            panels = engine.config.panel_count(),
            container = engine.container_width,
            widths = ?engine.widths,
            "layout.engine: mounted"
        );
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn container_width(&self) -> Px {
        self.container_width
    }

    /// Stored explicit widths (`0` = collapsed).
    #[must_use]
    pub fn widths(&self) -> &[Px] {
        &self.widths
    }

    /// Width the stacking breakpoint is measured against: the host viewport
    /// if one was given, else the container.
    #[must_use]
    pub fn viewport_width(&self) -> Px {
        self.viewport_width.unwrap_or(self.container_width)
    }

    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        match self.config.stack_below {
            Some(breakpoint) if self.viewport_width() < breakpoint => LayoutMode::Stacked,
            _ => LayoutMode::Split,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Global cursor/selection overrides to apply right now.
    #[must_use]
    pub fn chrome(&self) -> Option<DragChrome> {
        self.drag.chrome()
    }

    /// The implicit panel could not be moved out of its ghost zone by the
    /// last snap pass.
    #[must_use]
    pub fn squeezed_remainder(&self) -> bool {
        self.squeezed_remainder
    }

    /// Width of the implicit last panel.
    #[must_use]
    pub fn remainder(&self) -> Px {
        remainder_width(&self.config, self.container_width, &self.widths)
    }

    #[must_use]
    pub fn panel_view(&self, id: PanelId) -> Option<PanelView> {
        let index = id.index();
        if index >= self.config.panel_count() {
            return None;
        }
        if self.mode() == LayoutMode::Stacked {
            return Some(PanelView {
                id,
                render_width: self.container_width,
                visual_state: VisualState::Full,
                stored_width: self.widths.get(index).copied(),
            });
        }
        let spec = &self.config.panels[index];
        let view = match self.widths.get(index) {
            Some(&width) => PanelView {
                id,
                render_width: effective_width(spec, width),
                visual_state: squeeze_state(spec, width),
                stored_width: Some(width),
            },
            None => {
                let remainder = self.remainder();
                PanelView {
                    id,
                    render_width: remainder,
                    visual_state: remainder_state(spec, remainder),
                    stored_width: None,
                }
            }
        };
        Some(view)
    }

    #[must_use]
    pub fn panel_views(&self) -> Vec<PanelView> {
        (0..self.config.panel_count())
            .filter_map(|index| self.panel_view(PanelId::new(index)))
            .collect()
    }

    /// Render widths in panel order.
    #[must_use]
    pub fn render_widths(&self) -> Vec<Px> {
        self.panel_views()
            .iter()
            .map(|view| view.render_width)
            .collect()
    }

    /// Divider strips in Split mode; empty when stacked.
    #[must_use]
    pub fn boundaries(&self) -> Vec<BoundaryView> {
        if self.mode() == LayoutMode::Stacked {
            return Vec::new();
        }
        let divider = self.config.divider_width;
        let mut x: Px = 0;
        let mut out = Vec::with_capacity(self.config.explicit_count());
        for (index, (spec, &width)) in self.config.panels.iter().zip(&self.widths).enumerate() {
            x = x.saturating_add(effective_width(spec, width));
            out.push(BoundaryView {
                index,
                span: Span::new(x, divider),
                enabled: self.boundary_enabled(index),
            });
            x = x.saturating_add(divider);
        }
        out
    }

    /// Enabled divider under the pointer.
    #[must_use]
    pub fn hit_test(&self, pointer_x: i32) -> Option<usize> {
        self.boundaries()
            .into_iter()
            .find(|boundary| boundary.enabled && boundary.span.contains(pointer_x))
            .map(|boundary| boundary.index)
    }

    fn boundary_enabled(&self, index: usize) -> bool {
        self.widths.get(index).is_some_and(|&width| width != COLLAPSED)
            && self.config.panels[index].resizable
    }

    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            mode: self.mode(),
            container_width: self.container_width,
            dragging: self.is_dragging(),
            panels: self.panel_views(),
            boundaries: self.boundaries(),
        }
    }

    /// Check the current state.
    #[must_use]
    pub fn audit(&self) -> InvariantReport {
        audit(
            &self.config,
            self.container_width,
            &self.widths,
            self.is_dragging(),
        )
    }

    // ---- drag commands ----

    /// Pointer-down on divider `boundary`.
    pub fn begin_drag(&mut self, boundary: usize, pointer_x: i32) -> DragOutcome {
        let transition = if self.drag.is_dragging() {
            self.drag.noop(DragNoopReason::ActiveDragAlreadyInProgress)
        } else if self.mode() == LayoutMode::Stacked {
            self.drag.noop(DragNoopReason::StackedLayout)
        } else if boundary >= self.config.explicit_count() {
            warn!(boundary, "layout.drag: boundary out of range");
            self.drag.noop(DragNoopReason::BoundaryOutOfRange)
        } else if !self.boundary_enabled(boundary) {
            self.drag.noop(DragNoopReason::BoundaryDisabled)
        } else {
            self.pending.clear();
            self.drag
                .begin(boundary, pointer_x, &self.widths, self.container_width)
        };
        if let DragEffect::Noop { reason } = transition.effect {
            debug!(boundary, ?reason, "layout.drag: begin ignored");
        } else {
            debug!(boundary, pointer_x, widths = ?self.widths, "layout.drag: started");
        }
        DragOutcome {
            transition,
            changes: Vec::new(),
        }
    }

    /// Pointer-down at `pointer_x`, starting a drag on whatever enabled
    /// divider is under it.
    pub fn pointer_down(&mut self, pointer_x: i32) -> Option<DragOutcome> {
        let boundary = self.hit_test(pointer_x)?;
        Some(self.begin_drag(boundary, pointer_x))
    }

    /// Apply a pointer move immediately.
    pub fn update_drag(&mut self, pointer_x: i32) -> DragOutcome {
        let before = self.panel_views();
        self.pending.clear();
        let transition = self.apply_move(pointer_x);
        self.outcome(transition, &before)
    }

    /// Buffer a pointer move until the next [`on_frame`](Self::on_frame).
    /// Returns `false` when no drag is live.
    pub fn queue_drag(&mut self, pointer_x: i32) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        self.pending.push(PointerPosition::new(pointer_x, 0));
        trace!(
            pointer_x,
            folded = self.pending.pending_moves(),
            "layout.drag: move queued"
        );
        true
    }

    /// Animation-frame tick: apply the latest queued move, if any.
    pub fn on_frame(&mut self) -> Option<DragOutcome> {
        let position = self.pending.take()?;
        let before = self.panel_views();
        let transition = self.apply_move(position.x);
        Some(self.outcome(transition, &before))
    }

    /// Pointer-up.
    pub fn end_drag(&mut self) -> DragOutcome {
        self.cancel_drag(DragEndReason::PointerUp)
    }

    /// End the drag for any reason. Finalizes exactly like pointer-up.
    pub fn cancel_drag(&mut self, reason: DragEndReason) -> DragOutcome {
        let before = self.panel_views();
        let transition = self.finish_drag(reason);
        self.outcome(transition, &before)
    }

    /// Start a drag whose session is finalized when the guard goes away.
    pub fn begin_drag_guarded(
        &mut self,
        boundary: usize,
        pointer_x: i32,
    ) -> std::result::Result<DragGuard<'_>, DragNoopReason> {
        let outcome = self.begin_drag(boundary, pointer_x);
        if let DragEffect::Noop { reason } = outcome.transition.effect {
            return Err(reason);
        }
        Ok(DragGuard { engine: self })
    }

    fn apply_move(&mut self, pointer_x: i32) -> DragTransition {
        let transition = self.drag.update(pointer_x);
        if transition.effect.is_noop() {
            return transition;
        }
        if let Some(session) = self.drag.session() {
            self.widths = drag_candidates(&self.config, session, pointer_x);
            trace!(
                boundary = session.boundary,
                pointer_x,
                widths = ?self.widths,
                "layout.drag: moved"
            );
        }
        self.check_invariants("update_drag");
        transition
    }

    fn finish_drag(&mut self, reason: DragEndReason) -> DragTransition {
        if let Some(position) = self.pending.take() {
            self.apply_move(position.x);
        }
        let (transition, session) = self.drag.finish(reason);
        let Some(session) = session else {
            debug!(?reason, "layout.drag: end without active drag");
            return transition;
        };
        self.settle(Some(session.boundary));
        debug!(
            boundary = session.boundary,
            ?reason,
            moves = session.moves,
            widths = ?self.widths,
            "layout.drag: finished"
        );
        self.check_invariants("end_drag");
        transition
    }

    // ---- panel commands ----

    /// Open panel `id` to its preferred width (gutter-button click).
    pub fn open_panel(&mut self, id: PanelId) -> Vec<PanelChange> {
        let before = self.panel_views();
        self.finish_pending_drag();
        let index = id.index();
        if index >= self.config.panel_count() {
            warn!(panel = index, "layout.open: unknown panel");
        } else if index == self.config.last_index() {
            self.reveal_last();
        } else {
            self.open_explicit(index);
        }
        self.check_invariants("open_panel");
        diff(&before, &self.panel_views())
    }

    /// Collapse panel `id` to its gutter.
    pub fn collapse_panel(&mut self, id: PanelId) -> Vec<PanelChange> {
        let before = self.panel_views();
        self.finish_pending_drag();
        let index = id.index();
        if index >= self.config.panel_count() {
            warn!(panel = index, "layout.collapse: unknown panel");
        } else if index == self.config.last_index() {
            self.collapse_last();
        } else {
            self.collapse_explicit(index);
        }
        self.check_invariants("collapse_panel");
        diff(&before, &self.panel_views())
    }

    /// New container width from the host.
    pub fn resize_container(&mut self, container_width: i64) -> Vec<PanelChange> {
        let before = self.panel_views();
        self.reflow(container_width);
        diff(&before, &self.panel_views())
    }

    /// New host viewport width. Only the Split/Stacked decision depends on
    /// it; stored widths are untouched.
    pub fn set_viewport_width(&mut self, viewport_width: i64) -> Vec<PanelChange> {
        let before = self.panel_views();
        self.apply_viewport(viewport_width);
        diff(&before, &self.panel_views())
    }

    /// Viewport and container changed together (window resize of a hosted
    /// frame).
    pub fn resize_in_viewport(
        &mut self,
        container_width: i64,
        viewport_width: i64,
    ) -> Vec<PanelChange> {
        let before = self.panel_views();
        self.apply_viewport(viewport_width);
        self.reflow(container_width);
        diff(&before, &self.panel_views())
    }

    fn apply_viewport(&mut self, viewport_width: i64) {
        let viewport = if viewport_width < 0 {
            warn!(
                viewport_width,
                "layout.resize: negative viewport width clamped to 0"
            );
            0
        } else {
            Px::try_from(viewport_width).unwrap_or(Px::MAX)
        };
        let previous = self.mode();
        self.viewport_width = Some(viewport);
        let mode = self.mode();
        if mode != previous {
            if self.drag.is_dragging() {
                self.finish_drag(DragEndReason::ContainerResized);
            }
            debug!(viewport, ?mode, "layout.resize: layout mode switched");
        }
    }

    fn finish_pending_drag(&mut self) {
        if self.drag.is_dragging() {
            self.finish_drag(DragEndReason::Programmatic);
        }
    }

    fn open_explicit(&mut self, index: usize) {
        let config = &self.config;
        let container = self.container_width;
        let spec = &config.panels[index];
        let target = spec
            .preferred_width
            .min(spec.cap())
            .min(max_allowed(config, container, index));
        let eff = effective_width(spec, self.widths[index]);
        if self.widths[index] != COLLAPSED && eff >= target {
            debug!(panel = index, width = eff, target, "layout.open: already open");
            return;
        }

        let widths = &mut self.widths;
        widths[index] = eff;
        let mut need = target.saturating_sub(eff);
        let explicit = config.explicit_count();
        let after = index + 1..explicit;
        let before = (0..index).rev();

        for donor in after {
            need = take_from(config, widths, donor, index, need);
        }
        if need > 0 {
            let last = config.last_spec();
            let remainder = remainder_width(config, container, widths.as_slice());
            let available = remainder.saturating_sub(last.min_width);
            let mut take = need.min(available);
            if in_ghost_zone(last, remainder - take) {
                take = available;
            }
            let grown = widths[index].saturating_add(take).min(spec.cap());
            need = need.saturating_sub(grown.saturating_sub(widths[index]));
            widths[index] = grown;
        }
        for donor in before {
            need = take_from(config, widths, donor, index, need);
        }
        debug!(panel = index, target, shortfall = need, widths = ?widths, "layout.open: opened");
        self.settle(Some(index));
    }

    fn reveal_last(&mut self) {
        let config = &self.config;
        let last_index = config.last_index();
        let target = config
            .last_spec()
            .preferred_width
            .min(max_allowed(config, self.container_width, last_index));
        let remainder = remainder_width(config, self.container_width, &self.widths);
        if remainder >= target {
            debug!(remainder, target, "layout.open: implicit panel already open");
            return;
        }
        let mut need = target - remainder;
        for donor in (0..config.explicit_count()).rev() {
            if need == 0 {
                break;
            }
            let spec = &config.panels[donor];
            let width = self.widths[donor];
            if width == COLLAPSED {
                continue;
            }
            let spare = width.saturating_sub(spec.min_width);
            let take = need.min(spare);
            self.widths[donor] = if width - take < spec.collapse_threshold {
                COLLAPSED
            } else {
                width - take
            };
            need -= take;
        }
        debug!(target, shortfall = need, widths = ?self.widths, "layout.open: revealed implicit panel");
        self.settle(None);
    }

    fn collapse_explicit(&mut self, index: usize) {
        let width = self.widths[index];
        if width == COLLAPSED {
            debug!(panel = index, "layout.collapse: already collapsed");
            return;
        }
        let freed = width.saturating_sub(self.config.panels[index].min_width);
        self.widths[index] = COLLAPSED;
        let recipients: Vec<usize> = (index + 1..self.config.explicit_count()).collect();
        let leftover = donate(&self.config, &mut self.widths, freed, &recipients);
        debug!(panel = index, freed, leftover, "layout.collapse: collapsed");
        self.settle(None);
    }

    fn collapse_last(&mut self) {
        let config = &self.config;
        let last = config.last_spec();
        let gap = self.remainder().saturating_sub(last.min_width);
        if gap == 0 {
            debug!("layout.collapse: implicit panel already collapsed");
            return;
        }
        let explicit = config.explicit_count();
        let recipients: Vec<usize> = (0..explicit).rev().collect();
        let leftover = donate(config, &mut self.widths, gap, &recipients);
        let neighbor = explicit - 1;
        if leftover > 0 && self.widths[neighbor] == COLLAPSED {
            let spec = &config.panels[neighbor];
            self.widths[neighbor] = spec.min_width.saturating_add(leftover).min(spec.cap());
        }
        debug!(gap, leftover, widths = ?self.widths, "layout.collapse: collapsed implicit panel");
        self.settle(None);
    }

    // ---- reflow ----

    fn reflow(&mut self, container_width: i64) {
        let container = if container_width < 0 {
            warn!(
                container_width,
                "layout.resize: negative container width clamped to 0"
            );
            0
        } else {
            Px::try_from(container_width).unwrap_or(Px::MAX)
        };
        if self.drag.is_dragging() {
            self.finish_drag(DragEndReason::ContainerResized);
        }
        let previous = self.container_width;
        self.container_width = container;

        let config = &self.config;
        for index in 0..config.explicit_count() {
            let spec = &config.panels[index];
            let width = self.widths[index];
            if width == COLLAPSED {
                continue;
            }
            let limit = max_allowed(config, container, index).min(spec.cap());
            if width > limit {
                self.widths[index] = if limit < spec.min_width {
                    COLLAPSED
                } else {
                    limit
                };
            }
        }

        let available = u64::from(geometry::available_width(config, container));
        let needed = geometry::claimed_width(config, &self.widths)
            + u64::from(config.last_spec().min_width);
        if needed > available {
            let mut deficit = needed - available;
            for index in (0..config.explicit_count()).rev() {
                if deficit == 0 {
                    break;
                }
                let width = self.widths[index];
                if width == COLLAPSED {
                    continue;
                }
                let spare = u64::from(width.saturating_sub(config.panels[index].min_width));
                let shrink = deficit.min(spare);
                self.widths[index] = width - shrink as Px;
                deficit -= shrink;
            }
            if deficit > 0 {
                warn!(
                    container,
                    deficit,
                    footprint = config.min_footprint(),
                    "layout.resize: container narrower than panel floors"
                );
                self.widths.fill(COLLAPSED);
            }
        }

        self.settle(None);
        debug!(
            from = previous,
            to = container,
            mode = ?self.mode(),
            widths = ?self.widths,
            "layout.resize: reflowed"
        );
        self.check_invariants("resize_container");
    }

    fn settle(&mut self, active: Option<usize>) {
        let outcome = snap::sanitize(&self.config, self.container_width, &mut self.widths, active);
        self.squeezed_remainder = outcome.squeezed_remainder;
        if outcome.squeezed_remainder {
            warn!(
                container = self.container_width,
                remainder = self.remainder(),
                "layout.snap: implicit panel stuck in ghost zone"
            );
        }
    }

    fn outcome(&self, transition: DragTransition, before: &[PanelView]) -> DragOutcome {
        DragOutcome {
            transition,
            changes: diff(before, &self.panel_views()),
        }
    }

    fn check_invariants(&self, operation: &'static str) {
        let report = self.audit();
        for issue in &report.issues {
            warn!(
                operation,
                code = ?issue.code,
                severity = ?issue.severity,
                panel = ?issue.panel,
                message = %issue.message,
                "layout.audit: invariant issue"
            );
        }
        debug_assert!(
            !(report.feasible && report.has_errors()),
            "{operation} left the layout inconsistent: {:?} widths={:?} container={}",
            report.issues,
            self.widths,
            self.container_width
        );
    }
}

/// Move up to `need` pixels from `donor` into `recipient`. A donor that would
/// rest below its threshold collapses entirely; its surplus goes to the
/// recipient up to the recipient's `max_width`. Returns the unmet need.
fn take_from(
    config: &LayoutConfig,
    widths: &mut [Px],
    donor: usize,
    recipient: usize,
    need: Px,
) -> Px {
    let width = widths[donor];
    if need == 0 || width == COLLAPSED {
        return need;
    }
    let spec = &config.panels[donor];
    let spare = width.saturating_sub(spec.min_width);
    let take = need.min(spare);
    let given = if width - take < spec.collapse_threshold {
        widths[donor] = COLLAPSED;
        spare
    } else {
        widths[donor] = width - take;
        take
    };
    let cap = config.panels[recipient].cap();
    let grown = widths[recipient].saturating_add(given).min(cap);
    let accepted = grown.saturating_sub(widths[recipient]);
    widths[recipient] = grown;
    need.saturating_sub(accepted)
}

fn diff(before: &[PanelView], after: &[PanelView]) -> Vec<PanelChange> {
    before
        .iter()
        .zip(after)
        .filter(|(previous, current)| {
            previous.render_width != current.render_width
                || previous.visual_state != current.visual_state
        })
        .map(|(previous, current)| PanelChange {
            panel: current.id,
            previous: *previous,
            current: *current,
        })
        .collect()
}

/// Scoped drag session. Dropping it while the drag is still live cancels
/// with [`DragEndReason::GuardDropped`], which runs the snap pass and clears
/// the chrome.
#[derive(Debug)]
pub struct DragGuard<'a> {
    engine: &'a mut LayoutEngine,
}

impl DragGuard<'_> {
    pub fn update(&mut self, pointer_x: i32) -> DragOutcome {
        self.engine.update_drag(pointer_x)
    }

    pub fn queue(&mut self, pointer_x: i32) -> bool {
        self.engine.queue_drag(pointer_x)
    }

    pub fn on_frame(&mut self) -> Option<DragOutcome> {
        self.engine.on_frame()
    }

    #[must_use]
    pub fn engine(&self) -> &LayoutEngine {
        self.engine
    }

    /// Pointer-up.
    pub fn end(mut self) -> DragOutcome {
        self.engine.end_drag()
    }

    pub fn cancel(mut self, reason: DragEndReason) -> DragOutcome {
        self.engine.cancel_drag(reason)
    }
}

impl Drop for DragGuard<'_> {
    fn drop(&mut self) {
        if self.engine.is_dragging() {
            self.engine.cancel_drag(DragEndReason::GuardDropped);
        }
    }
}
