//! Property invariants for random command streams.
//!
//! Every generated stream runs against the workspace and modal presets (with
//! stacking disabled so widths stay observable) and checks width
//! conservation, the ghost-zone postcondition, rendered floors and snap
//! idempotence after each command.

use gutter_layout::{
    InvariantCode, LayoutConfig, LayoutEngine, PanelId, Px, geometry, snap,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Resize(i64),
    Drag { boundary: usize, delta: i32 },
    QueuedDrag { boundary: usize, deltas: Vec<i32> },
    Open(usize),
    Collapse(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (800_i64..2400).prop_map(Op::Resize),
        (0_usize..2, -700_i32..700).prop_map(|(boundary, delta)| Op::Drag { boundary, delta }),
        (0_usize..2, prop::collection::vec(-400_i32..400, 1..6))
            .prop_map(|(boundary, deltas)| Op::QueuedDrag { boundary, deltas }),
        (0_usize..3).prop_map(Op::Open),
        (0_usize..3).prop_map(Op::Collapse),
    ]
}

fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    prop_oneof![
        Just(LayoutConfig::workspace()),
        Just(LayoutConfig::simulator()),
        Just(LayoutConfig::editor()),
    ]
    .prop_map(|config| config.with_stack_below(None))
}

fn divider_x(engine: &LayoutEngine, boundary: usize) -> Option<i32> {
    engine
        .boundaries()
        .get(boundary)
        .filter(|view| view.enabled)
        .map(|view| view.span.x as i32)
}

fn apply(engine: &mut LayoutEngine, op: &Op) {
    match op {
        Op::Resize(width) => {
            engine.resize_container(*width);
        }
        Op::Drag { boundary, delta } => {
            if let Some(x) = divider_x(engine, *boundary) {
                engine.begin_drag(*boundary, x);
                engine.update_drag(x + delta);
                assert_rest_invariants(engine, true);
                engine.end_drag();
            }
        }
        Op::QueuedDrag { boundary, deltas } => {
            if let Some(x) = divider_x(engine, *boundary) {
                engine.begin_drag(*boundary, x);
                for (step, delta) in deltas.iter().enumerate() {
                    engine.queue_drag(x + delta);
                    if step % 2 == 1 {
                        engine.on_frame();
                    }
                }
                engine.end_drag();
            }
        }
        Op::Open(index) => {
            engine.open_panel(PanelId::new(*index));
        }
        Op::Collapse(index) => {
            engine.collapse_panel(PanelId::new(*index));
        }
    }
}

fn assert_rest_invariants(engine: &LayoutEngine, dragging: bool) {
    let config = engine.config();
    let container = engine.container_width();
    let rendered = engine.render_widths();

    let total: u64 = rendered.iter().map(|&width| u64::from(width)).sum();
    assert_eq!(
        total + u64::from(config.overhead_width()),
        u64::from(container),
        "conservation broken: {rendered:?} in {container}"
    );

    for (index, &width) in rendered.iter().enumerate() {
        let min: Px = config.panels[index].min_width;
        assert!(width >= min, "panel {index} rendered {width} below {min}");
    }

    let report = engine.audit();
    assert!(!report.has_errors(), "{report:?}");
    if dragging {
        return;
    }

    assert_eq!(
        report.with_code(InvariantCode::GhostZone).count(),
        0,
        "ghost zone at rest: widths {:?} remainder {}",
        engine.widths(),
        engine.remainder()
    );
    for (spec, &width) in config.panels.iter().zip(engine.widths()) {
        assert!(!geometry::in_ghost_zone(spec, width));
    }

    let mut again = engine.widths().to_vec();
    let outcome = snap::sanitize(config, container, &mut again, None);
    assert!(!outcome.changed, "second snap pass changed {:?}", engine.widths());
    assert_eq!(again.as_slice(), engine.widths());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_command_streams_preserve_invariants(
        config in config_strategy(),
        container in 800_i64..2400,
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut engine = LayoutEngine::new(config, container).expect("preset is valid");
        assert_rest_invariants(&engine, false);
        for op in &ops {
            apply(&mut engine, op);
            prop_assert!(!engine.is_dragging());
            assert_rest_invariants(&engine, false);
        }
    }

    #[test]
    fn drag_there_and_back_restores_widths(
        boundary in 0_usize..2,
        delta in -90_i32..=240,
    ) {
        let config = LayoutConfig::workspace().with_stack_below(None);
        let mut engine = LayoutEngine::new(config, 1400).expect("preset is valid");
        let start = engine.widths().to_vec();

        let x = divider_x(&engine, boundary).expect("boundary enabled");
        engine.begin_drag(boundary, x);
        engine.update_drag(x + delta);
        engine.end_drag();

        let x = divider_x(&engine, boundary).expect("boundary still enabled");
        engine.begin_drag(boundary, x);
        engine.update_drag(x - delta);
        engine.end_drag();

        prop_assert_eq!(engine.widths(), start.as_slice());
    }

    #[test]
    fn sanitize_twice_is_sanitize_once(
        config in config_strategy(),
        container in 800_u32..2400,
        first in 0_u32..900,
        second in 0_u32..900,
        active in prop::option::of(0_usize..2),
    ) {
        let explicit = config.explicit_count();
        let mut widths: Vec<Px> = [first, second].into_iter().take(explicit).collect();
        // Start from a state whose explicit panels fit at their current widths.
        let claimed = geometry::claimed_width(&config, &widths);
        let room = u64::from(geometry::available_width(&config, container))
            - u64::from(config.last_spec().min_width);
        prop_assume!(claimed <= room);

        snap::sanitize(&config, container, &mut widths, active);
        let settled = widths.clone();
        let outcome = snap::sanitize(&config, container, &mut widths, active);
        prop_assert!(!outcome.changed);
        prop_assert_eq!(widths, settled);
    }
}

#[test]
fn seed_corpus_command_streams() {
    let streams: [&[Op]; 3] = [
        &[
            Op::Collapse(2),
            Op::Resize(800),
            Op::Open(2),
            Op::Drag { boundary: 0, delta: -600 },
            Op::Resize(2399),
        ],
        &[
            Op::Collapse(0),
            Op::Collapse(1),
            Op::Collapse(2),
            Op::Open(1),
            Op::Open(0),
            Op::Resize(801),
        ],
        &[
            Op::Drag { boundary: 1, delta: 699 },
            Op::Drag { boundary: 0, delta: 699 },
            Op::Resize(800),
            Op::Open(2),
        ],
    ];
    for config in [LayoutConfig::workspace(), LayoutConfig::simulator(), LayoutConfig::editor()] {
        for stream in streams {
            let mut engine =
                LayoutEngine::new(config.clone().with_stack_below(None), 1000).expect("valid");
            for op in stream {
                apply(&mut engine, op);
                assert_rest_invariants(&engine, false);
            }
        }
    }
}
