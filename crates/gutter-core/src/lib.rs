#![forbid(unsafe_code)]

//! Host-facing primitives shared by the Gutter layout crates.
//!
//! - [`geometry`]: pixel spans, sizes and pointer positions.
//! - [`coalescer`]: latest-wins pointer coalescing for per-frame updates.
//! - `logging`: subscriber setup for binaries (feature `tracing-json`).

pub mod coalescer;
pub mod geometry;
#[cfg(feature = "tracing-json")]
pub mod logging;

pub use coalescer::PointerCoalescer;
pub use geometry::{PointerPosition, Px, Size, Span};
