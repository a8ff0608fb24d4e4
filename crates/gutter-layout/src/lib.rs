#![forbid(unsafe_code)]

//! Adaptive panel layout engine.
//!
//! `N` panels sit side by side in a container. The first `N - 1` carry a
//! stored width; the last always takes what is left. Panels can be dragged
//! narrower than their collapse threshold while the pointer is down, but on
//! release anything left resting between `min_width` and
//! `collapse_threshold` snaps shut into a gutter button and its space goes
//! to a neighbor.
//!
//! # Example
//!
//! ```
//! use gutter_layout::{LayoutConfig, LayoutEngine, PanelId, VisualState};
//!
//! let mut engine = LayoutEngine::new(LayoutConfig::workspace(), 1400).unwrap();
//! assert_eq!(engine.render_widths(), vec![350, 500, 518]);
//!
//! // Drag the first divider 200 px left and let go: 150 px is inside the
//! // ghost zone, so the panel collapses to its gutter.
//! engine.begin_drag(0, 360);
//! engine.update_drag(160);
//! let changes = engine.end_drag().changes;
//! assert!(changes.iter().any(|c| c.panel == PanelId::new(0)
//!     && c.current.visual_state == VisualState::Collapsed));
//!
//! // Clicking the gutter reopens it.
//! engine.open_panel(PanelId::new(0));
//! assert_eq!(engine.widths()[0], 350);
//! ```

pub mod audit;
pub mod config;
pub mod drag;
pub mod engine;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod snap;

pub use audit::{InvariantCode, InvariantIssue, InvariantReport, InvariantSeverity};
pub use config::{LayoutConfig, PanelSpec};
pub use drag::{
    DragChrome, DragEffect, DragEndReason, DragNoopReason, DragSession, DragState,
    DragTransition, ResizeCursor,
};
pub use engine::{
    BoundaryView, DragGuard, DragOutcome, LayoutEngine, LayoutMode, LayoutSnapshot, PanelChange,
    PanelView,
};
pub use error::LayoutConfigError;
pub use frame::{ModalFrame, ModalLayout};
pub use geometry::{COLLAPSED, PanelId, VisualState};
pub use gutter_core::Px;
