#![forbid(unsafe_code)]

//! Pointer-move coalescing for per-frame layout updates.
//!
//! Hosts can receive pointer-move events much faster than the display
//! refreshes. Each move would otherwise trigger a full layout pass and a
//! reflow. [`PointerCoalescer`] keeps only the most recent position and
//! hands it out once per animation frame.
//!
//! # Usage
//!
//! ```
//! use gutter_core::{PointerCoalescer, PointerPosition};
//!
//! let mut coalescer = PointerCoalescer::new();
//! coalescer.push(PointerPosition::new(10, 0));
//! coalescer.push(PointerPosition::new(24, 0));
//! assert_eq!(coalescer.pending_moves(), 2);
//!
//! // Once per frame: latest position wins.
//! assert_eq!(coalescer.take(), Some(PointerPosition::new(24, 0)));
//! assert_eq!(coalescer.take(), None);
//! ```

use crate::geometry::PointerPosition;

/// Latest-wins buffer for pointer moves.
///
/// Not thread-safe; it lives on the UI event loop next to the layout
/// engine it feeds. All operations are O(1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerCoalescer {
    pending: Option<PointerPosition>,
    /// Moves folded into `pending` since the last take.
    folded: u32,
}

impl PointerCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move, replacing any pending one.
    pub fn push(&mut self, position: PointerPosition) {
        self.pending = Some(position);
        self.folded = self.folded.saturating_add(1);
    }

    /// Take the pending position, leaving the coalescer empty.
    #[must_use]
    pub fn take(&mut self) -> Option<PointerPosition> {
        self.folded = 0;
        self.pending.take()
    }

    /// Whether a position is waiting for the next frame.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of moves folded into the pending position.
    #[must_use]
    pub const fn pending_moves(&self) -> u32 {
        self.folded
    }

    /// Discard any pending position.
    pub fn clear(&mut self) {
        self.pending = None;
        self.folded = 0;
    }
}
