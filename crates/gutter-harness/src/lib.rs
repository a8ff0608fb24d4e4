#![forbid(unsafe_code)]

//! Deterministic replay harness for `gutter-layout`.
//!
//! Traces are plain JSON command streams; replaying one yields a snapshot
//! per step, every invariant finding, and a blake3 checksum that stays
//! stable across runs and machines.

pub mod cli;
pub mod determinism;
pub mod trace;

pub use cli::{Cli, run, run_from_env};
pub use determinism::{DEFAULT_SEED, Lcg, SEED_ENV, fixture_seed, random_trace};
pub use trace::{
    LayoutTrace, ReplayOutcome, Result, StepIssue, TraceError, TraceStep, replay,
};
