#![forbid(unsafe_code)]

//! Seeded trace generation.
//!
//! Seeds come from `GUTTER_SEED` when set so a failing stress run can be
//! reproduced exactly; the generator is a plain LCG with no platform or
//! crate-version dependence.

use gutter_layout::{DragEndReason, LayoutConfig};

use crate::trace::{LayoutTrace, TraceStep};

/// Environment variable overriding the default seed.
pub const SEED_ENV: &str = "GUTTER_SEED";

/// Seed used when neither the caller nor the environment picks one.
pub const DEFAULT_SEED: u64 = 0x5EED_6077_E125;

/// Seed from `GUTTER_SEED`, else `default_seed`.
#[must_use]
pub fn fixture_seed(default_seed: u64) -> u64 {
    env_u64(SEED_ENV).unwrap_or(default_seed)
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Linear congruential generator.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        self.state
    }

    /// Uniform in `min..=max`.
    pub fn next_i64_range(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max);
        if min == max {
            return min;
        }
        let span = (max - min) as u64 + 1;
        min + (self.next_u64() % span) as i64
    }

    pub fn next_i32_range(&mut self, min: i32, max: i32) -> i32 {
        self.next_i64_range(i64::from(min), i64::from(max)) as i32
    }

    pub fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }

    pub fn choose_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 0
    }
}

/// Build a `steps`-long trace for `config`.
///
/// Drags are generated as well-formed gestures (begin, moves, end or
/// cancel) with the occasional stale pointer-up while idle. Container widths
/// range from zero to well past the widest preset so stacking, infeasible
/// and roomy layouts all show up. A drag still open after the last step is
/// closed with a pointer-up.
#[must_use]
pub fn random_trace(seed: u64, steps: usize, config: LayoutConfig) -> LayoutTrace {
    let mut rng = Lcg::new(seed);
    let panels = config.panel_count();
    let explicit = config.explicit_count();
    let container_width = rng.next_i64_range(600, 2400);
    let mut trace = LayoutTrace::new(config, container_width);
    let mut dragging = false;

    for _ in 0..steps {
        let step = if dragging {
            match rng.choose_index(8) {
                0..=2 => TraceStep::UpdateDrag {
                    pointer_x: rng.next_i32_range(-900, 2400),
                },
                3 | 4 => TraceStep::QueueDrag {
                    pointer_x: rng.next_i32_range(-900, 2400),
                },
                5 => TraceStep::Frame,
                6 => {
                    dragging = false;
                    TraceStep::EndDrag
                }
                _ => {
                    dragging = false;
                    let reasons = [
                        DragEndReason::Blur,
                        DragEndReason::Programmatic,
                        DragEndReason::PointerUp,
                    ];
                    TraceStep::CancelDrag {
                        reason: reasons[rng.choose_index(reasons.len())],
                    }
                }
            }
        } else {
            match rng.choose_index(10) {
                0 | 1 => TraceStep::Resize {
                    width: if rng.choose_index(12) == 0 {
                        rng.next_i64_range(-50, 400)
                    } else {
                        rng.next_i64_range(400, 2600)
                    },
                },
                2..=4 => {
                    dragging = true;
                    TraceStep::BeginDrag {
                        boundary: rng.choose_index(explicit + 1),
                        pointer_x: rng.next_i32_range(0, 2400),
                    }
                }
                5 | 6 => TraceStep::Open {
                    panel: rng.choose_index(panels),
                },
                7 | 8 => TraceStep::Collapse {
                    panel: rng.choose_index(panels),
                },
                _ => {
                    if rng.choose_bool() {
                        TraceStep::EndDrag
                    } else {
                        TraceStep::Frame
                    }
                }
            }
        };
        trace.steps.push(step);
    }
    if dragging {
        trace.steps.push(TraceStep::EndDrag);
    }
    trace
}
