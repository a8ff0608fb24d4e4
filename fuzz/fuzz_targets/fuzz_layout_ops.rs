#![no_main]

use arbitrary::Arbitrary;
use gutter_layout::{DragEndReason, LayoutConfig, LayoutEngine, PanelId, PanelSpec};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Resize(i16),
    Begin { boundary: u8, x: i16 },
    Update(i16),
    Queue(i16),
    Frame,
    End,
    Cancel(bool),
    Open(u8),
    Collapse(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    preset: u8,
    extra_panels: u8,
    container: u16,
    ops: Vec<Op>,
}

fn config(input: &Input) -> LayoutConfig {
    match input.preset % 4 {
        0 => LayoutConfig::workspace(),
        1 => LayoutConfig::simulator(),
        2 => LayoutConfig::editor(),
        _ => {
            let count = 2 + usize::from(input.extra_panels % 7);
            LayoutConfig::new(
                (0..count).map(|index| PanelSpec::new(format!("p{index}"), 260 + 20 * index as u32)),
            )
            .unwrap_or_else(|_| LayoutConfig::workspace())
        }
    }
}

fuzz_target!(|input: Input| {
    let config = config(&input);
    let panels = config.panel_count();
    let Ok(mut engine) = LayoutEngine::new(config, i64::from(input.container)) else {
        return;
    };

    for op in input.ops.iter().take(256) {
        match *op {
            Op::Resize(width) => {
                engine.resize_container(i64::from(width) * 2);
            }
            Op::Begin { boundary, x } => {
                engine.begin_drag(usize::from(boundary) % (panels + 1), i32::from(x));
            }
            Op::Update(x) => {
                engine.update_drag(i32::from(x));
            }
            Op::Queue(x) => {
                engine.queue_drag(i32::from(x));
            }
            Op::Frame => {
                engine.on_frame();
            }
            Op::End => {
                engine.end_drag();
            }
            Op::Cancel(blur) => {
                let reason = if blur {
                    DragEndReason::Blur
                } else {
                    DragEndReason::Programmatic
                };
                engine.cancel_drag(reason);
            }
            Op::Open(index) => {
                engine.open_panel(PanelId::new(usize::from(index) % (panels + 1)));
            }
            Op::Collapse(index) => {
                engine.collapse_panel(PanelId::new(usize::from(index) % (panels + 1)));
            }
        }

        // Post-conditions that must always hold:
        let report = engine.audit();
        assert!(!(report.feasible && report.has_errors()), "{report:?}");
        let rendered = engine.render_widths();
        assert_eq!(rendered.len(), panels);
        if !engine.is_dragging() && report.feasible {
            let total: u64 = rendered.iter().map(|&w| u64::from(w)).sum();
            let overhead = u64::from(engine.config().overhead_width());
            if engine.mode() == gutter_layout::LayoutMode::Split {
                assert_eq!(total + overhead, u64::from(engine.container_width()));
            }
        }
    }
});
