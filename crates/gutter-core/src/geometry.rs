#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Widths are unsigned pixels. Pointer coordinates are signed because a
//! drag can leave the host window on either side.

use serde::{Deserialize, Serialize};

/// A pixel length (width or height).
pub type Px = u32;

/// A horizontal run of pixels: panels, dividers and hit strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Left edge (inclusive).
    pub x: Px,
    /// Width in pixels.
    pub width: Px,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(x: Px, width: Px) -> Self {
        Self { x, width }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> Px {
        self.x.saturating_add(self.width)
    }

    /// Check if the span has zero width.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Check if a pointer x-coordinate falls inside the span.
    #[inline]
    pub fn contains(&self, x: i32) -> bool {
        let x = i64::from(x);
        x >= i64::from(self.x) && x < i64::from(self.right())
    }
}

/// A two-dimensional size, used by resizable modal frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Shrink both axes by `margin`, saturating at zero.
    #[inline]
    pub const fn inset(&self, margin: Px) -> Self {
        Self {
            width: self.width.saturating_sub(margin),
            height: self.height.saturating_sub(margin),
        }
    }

    /// Clamp each axis into `[min, max]`.
    ///
    /// When `max < min` on an axis the minimum wins, so a frame never
    /// shrinks below its floor on a tiny viewport.
    #[must_use]
    pub fn clamp(self, min: Size, max: Size) -> Self {
        Self {
            width: self.width.min(max.width).max(min.width),
            height: self.height.min(max.height).max(min.height),
        }
    }

    /// Offset by a signed delta, saturating at zero.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            width: offset_px(self.width, dx),
            height: offset_px(self.height, dy),
        }
    }
}

/// Pointer position in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Signed delta from `origin` to `self`, saturating on overflow.
    #[inline]
    pub const fn delta_from(self, origin: PointerPosition) -> (i32, i32) {
        (
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
        )
    }
}

/// Apply a signed delta to a pixel length, saturating into `0..=u32::MAX`.
#[inline]
pub fn offset_px(value: Px, delta: i32) -> Px {
    let shifted = i64::from(value) + i64::from(delta);
    shifted.clamp(0, i64::from(Px::MAX)) as Px
}
