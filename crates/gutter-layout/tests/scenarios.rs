//! Worked examples on the three-panel workspace and the two-panel modals.
//!
//! Run:
//!   cargo test -p gutter-layout --test scenarios

use gutter_layout::{
    COLLAPSED, DragEffect, DragEndReason, InvariantCode, LayoutConfig, LayoutEngine, LayoutMode,
    PanelId, PanelSpec, Px, VisualState,
};

fn workspace_config() -> LayoutConfig {
    LayoutConfig::workspace().with_stack_below(None)
}

fn assert_conserved(engine: &LayoutEngine) {
    let rendered: u64 = engine
        .render_widths()
        .iter()
        .map(|&width| u64::from(width))
        .sum();
    assert_eq!(
        rendered + u64::from(engine.config().overhead_width()),
        u64::from(engine.container_width()),
        "widths {:?} do not fill container {}",
        engine.render_widths(),
        engine.container_width()
    );
}

fn state(engine: &LayoutEngine, index: usize) -> VisualState {
    engine
        .panel_view(PanelId::new(index))
        .map(|view| view.visual_state)
        .expect("panel exists")
}

#[test]
fn mount_collapses_squeezed_right_panel_into_middle() {
    let engine = LayoutEngine::with_widths(workspace_config(), 1000, &[350, 400])
        .expect("valid layout");
    assert_eq!(engine.widths(), &[350, 570]);
    assert_eq!(engine.render_widths(), vec![350, 570, 48]);
    assert_eq!(state(&engine, 0), VisualState::Full);
    assert_eq!(state(&engine, 1), VisualState::Full);
    assert_eq!(state(&engine, 2), VisualState::Collapsed);
    assert!(engine.audit().is_clean());
    assert_conserved(&engine);
}

#[test]
fn dragging_left_past_its_floor_clamps_then_collapses() {
    let mut engine = LayoutEngine::with_widths(workspace_config(), 1000, &[350, 400])
        .expect("valid layout");
    let divider_x = 350;
    engine.begin_drag(0, divider_x);
    engine.update_drag(divider_x - 310);
    assert_eq!(engine.widths()[0], 48, "candidate 40 clamps to the floor");
    assert_conserved(&engine);

    engine.end_drag();
    assert_eq!(engine.widths()[0], COLLAPSED);
    assert_eq!(engine.render_widths()[0], 48);
    assert_eq!(state(&engine, 0), VisualState::Collapsed);
    assert_conserved(&engine);
}

#[test]
fn collapsing_middle_hands_its_space_to_the_right() {
    let mut engine = LayoutEngine::with_widths(workspace_config(), 1000, &[350, 500])
        .expect("valid layout");
    let changes = engine.collapse_panel(PanelId::new(1));
    assert_eq!(engine.widths(), &[350, COLLAPSED]);
    assert_eq!(engine.remainder(), 1000 - 32 - 350 - 48);
    assert_eq!(state(&engine, 1), VisualState::Collapsed);
    assert_eq!(state(&engine, 2), VisualState::Full);
    assert!(changes.iter().any(|change| change.panel == PanelId::new(1)));
    assert!(changes.iter().any(|change| change.panel == PanelId::new(2)));
    assert_conserved(&engine);
}

#[test]
fn opening_left_from_all_collapsed() {
    let mut engine = LayoutEngine::with_widths(workspace_config(), 1000, &[0, 0])
        .expect("valid layout");
    assert_eq!(engine.remainder(), 872);
    engine.open_panel(PanelId::new(0));
    assert_eq!(engine.widths(), &[350, COLLAPSED]);
    assert_eq!(engine.remainder(), 570);
    assert_eq!(state(&engine, 0), VisualState::Full);
    assert_eq!(state(&engine, 2), VisualState::Full);
    assert_conserved(&engine);
}

#[test]
fn drag_release_collapses_active_panel_into_remainder() {
    let mut engine = LayoutEngine::new(workspace_config(), 1400).expect("valid layout");
    // [350 | 500 | 518]: shrink the middle to 200 by dragging its divider.
    engine.begin_drag(1, 866);
    engine.update_drag(566);
    assert_eq!(engine.widths(), &[350, 200]);
    engine.end_drag();
    // The dragged panel itself collapsed, so the right panel keeps the space.
    assert_eq!(engine.widths(), &[350, COLLAPSED]);
    assert_eq!(engine.remainder(), 1400 - 32 - 350 - 48);
    assert_conserved(&engine);
}

#[test]
fn squeezing_neighbor_during_drag_collapses_it_on_release() {
    let mut engine = LayoutEngine::new(workspace_config(), 1400).expect("valid layout");
    // Grow the left panel so the middle drops to 150.
    engine.begin_drag(0, 350);
    engine.update_drag(700);
    assert_eq!(engine.widths(), &[700, 150]);
    assert_eq!(state(&engine, 1), VisualState::Squeezed);
    engine.end_drag();
    // Middle collapses and its 102 spare pixels go to the panel being dragged.
    assert_eq!(engine.widths(), &[802, COLLAPSED]);
    assert_conserved(&engine);
}

#[test]
fn blur_finalizes_like_pointer_up() {
    let mut engine = LayoutEngine::new(workspace_config(), 1400).expect("valid layout");
    engine.begin_drag(0, 350);
    engine.update_drag(150);
    let outcome = engine.cancel_drag(DragEndReason::Blur);
    assert!(matches!(
        outcome.transition.effect,
        DragEffect::Finished {
            reason: DragEndReason::Blur,
            ..
        }
    ));
    assert!(!engine.is_dragging());
    assert_eq!(engine.widths()[0], COLLAPSED);
    assert!(engine.chrome().is_none());
}

#[test]
fn simulator_sidebar_never_exceeds_its_cap() {
    let config = LayoutConfig::simulator().with_stack_below(None);
    let mut engine = LayoutEngine::new(config, 1600).expect("valid layout");
    engine.begin_drag(0, 350);
    engine.update_drag(1200);
    assert_eq!(engine.widths(), &[600]);
    engine.end_drag();
    assert_eq!(engine.widths(), &[600]);
    assert_conserved(&engine);
}

#[test]
fn capped_sidebar_lets_remainder_widen_to_threshold() {
    let config = LayoutConfig::simulator().with_stack_below(None);
    let mut engine = LayoutEngine::with_widths(config, 1400, &[600]).expect("valid layout");
    engine.resize_container(800);
    // 800 - 16 - 600 = 184 would squeeze the main panel; the sidebar gives 66.
    assert_eq!(engine.widths(), &[534]);
    assert_eq!(engine.remainder(), 250);
    assert!(!engine.squeezed_remainder());
}

#[test]
fn fully_capped_sidebar_collapses_instead_of_squeezing_main() {
    let config = LayoutConfig::new([
        PanelSpec::new("side", 300).with_max_width(300),
        PanelSpec::new("main", 400),
    ])
    .expect("valid config");
    let engine = LayoutEngine::new(config, 466).expect("valid layout");
    assert_eq!(engine.widths(), &[COLLAPSED]);
    assert_eq!(engine.remainder(), 402);
    assert!(!engine.squeezed_remainder());
    assert_eq!(engine.audit().with_code(InvariantCode::GhostZone).count(), 0);
    assert_conserved(&engine);
}

#[test]
fn container_growth_and_shrink_keep_floors() {
    let mut engine = LayoutEngine::new(workspace_config(), 1400).expect("valid layout");
    for width in [1200_i64, 900, 600, 400, 1100, 2200] {
        engine.resize_container(width);
        assert_conserved(&engine);
        for (index, render) in engine.render_widths().into_iter().enumerate() {
            let min: Px = engine.config().panels[index].min_width;
            assert!(render >= min, "panel {index} at {render} below {min}");
        }
        assert!(!engine.audit().has_errors(), "{:?}", engine.audit());
    }
}

#[test]
fn zero_container_degrades_gracefully() {
    let mut engine = LayoutEngine::new(workspace_config(), 1400).expect("valid layout");
    engine.resize_container(0);
    assert_eq!(engine.widths(), &[COLLAPSED, COLLAPSED]);
    assert_eq!(engine.remainder(), 0);
    engine.resize_container(1400);
    assert_conserved(&engine);
    engine.open_panel(PanelId::new(0));
    engine.open_panel(PanelId::new(1));
    assert_eq!(engine.widths(), &[350, 500]);
}

#[test]
fn responsive_breakpoint_switches_modes() {
    let mut engine = LayoutEngine::new(LayoutConfig::workspace(), 1400).expect("valid layout");
    assert_eq!(engine.mode(), LayoutMode::Split);
    engine.resize_container(1000);
    assert_eq!(engine.mode(), LayoutMode::Stacked);
    assert_eq!(engine.render_widths(), vec![1000, 1000, 1000]);
    engine.collapse_panel(PanelId::new(0));
    engine.resize_container(1400);
    assert_eq!(engine.mode(), LayoutMode::Split);
    assert_eq!(engine.widths()[0], COLLAPSED);
    assert_conserved(&engine);
}

#[test]
fn snapshot_round_trips_through_json() {
    let engine = LayoutEngine::new(LayoutConfig::editor(), 1100).expect("valid layout");
    let snapshot = engine.snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize");
    let back: gutter_layout::LayoutSnapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, snapshot);
    assert_eq!(back.boundaries.len(), 1);
    assert!(back.boundaries[0].enabled);
}
