#![forbid(unsafe_code)]

//! Corner-resizable modal frames hosting a panel layout.
//!
//! A [`ModalFrame`] is a floating box whose size follows a corner drag,
//! bounded below by a fixed minimum and above by the viewport minus a
//! margin. [`ModalLayout`] feeds the frame width into a [`LayoutEngine`]
//! as its container width so the panels inside reflow with the frame.

use gutter_core::{PointerPosition, Px, Size};
use tracing::{debug, trace};

use crate::config::LayoutConfig;
use crate::drag::{DragChrome, ResizeCursor};
use crate::engine::{LayoutEngine, PanelChange};
use crate::error::Result;

/// Smallest size a modal frame can be dragged to.
pub const MODAL_MIN_SIZE: Size = Size::new(700, 500);

/// Gap kept between the frame and the viewport edge.
pub const VIEWPORT_MARGIN: Px = 20;

/// Initial size of the simulator and editor modals.
pub const MODAL_DEFAULT_SIZE: Size = Size::new(1100, 750);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CornerDrag {
    anchor_pointer: PointerPosition,
    anchor_size: Size,
}

/// A floating frame resized from its bottom-right corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalFrame {
    size: Size,
    min_size: Size,
    viewport: Size,
    viewport_margin: Px,
    corner: Option<CornerDrag>,
}

impl ModalFrame {
    /// A frame of `size`, clamped into `viewport`.
    #[must_use]
    pub fn new(size: Size, viewport: Size) -> Self {
        let mut frame = Self {
            size,
            min_size: MODAL_MIN_SIZE,
            viewport,
            viewport_margin: VIEWPORT_MARGIN,
            corner: None,
        };
        frame.size = frame.clamp(size);
        frame
    }

    #[must_use]
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self.size = self.clamp(self.size);
        self
    }

    #[must_use]
    pub fn with_viewport_margin(mut self, margin: Px) -> Self {
        self.viewport_margin = margin;
        self.size = self.clamp(self.size);
        self
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.corner.is_some()
    }

    #[must_use]
    pub fn chrome(&self) -> Option<DragChrome> {
        self.corner
            .map(|_| DragChrome::resizing(ResizeCursor::NwseResize))
    }

    /// Clamp into `[min_size, viewport - margin]`; the minimum wins when the
    /// viewport is too small.
    fn clamp(&self, size: Size) -> Size {
        size.clamp(self.min_size, self.viewport.inset(self.viewport_margin))
    }

    /// Pointer-down on the corner handle. Returns `false` if a corner drag is
    /// already live.
    pub fn begin_resize(&mut self, pointer: PointerPosition) -> bool {
        if self.corner.is_some() {
            return false;
        }
        self.corner = Some(CornerDrag {
            anchor_pointer: pointer,
            anchor_size: self.size,
        });
        true
    }

    /// Pointer move; returns the new size when it changed.
    pub fn update_resize(&mut self, pointer: PointerPosition) -> Option<Size> {
        let corner = self.corner?;
        let (dx, dy) = pointer.delta_from(corner.anchor_pointer);
        let next = self.clamp(corner.anchor_size.offset(dx, dy));
        if next == self.size {
            return None;
        }
        trace!(width = next.width, height = next.height, "layout.frame: resized");
        self.size = next;
        Some(next)
    }

    /// Pointer-up. Returns `false` when no corner drag was live.
    pub fn end_resize(&mut self) -> bool {
        self.corner.take().is_some()
    }

    /// The host viewport changed; returns the new size when the frame had to
    /// shrink or grow to stay inside it.
    pub fn set_viewport(&mut self, viewport: Size) -> Option<Size> {
        self.viewport = viewport;
        let next = self.clamp(self.size);
        if next == self.size {
            return None;
        }
        self.size = next;
        Some(next)
    }
}

/// A modal frame with a panel layout inside it.
#[derive(Debug, Clone)]
pub struct ModalLayout {
    frame: ModalFrame,
    engine: LayoutEngine,
}

impl ModalLayout {
    pub fn new(config: LayoutConfig, size: Size, viewport: Size) -> Result<Self> {
        let frame = ModalFrame::new(size, viewport);
        let mut engine = LayoutEngine::new(config, i64::from(frame.size().width))?;
        engine.set_viewport_width(i64::from(viewport.width));
        Ok(Self { frame, engine })
    }

    /// The agent simulator modal at its default size.
    pub fn simulator(viewport: Size) -> Result<Self> {
        Self::new(LayoutConfig::simulator(), MODAL_DEFAULT_SIZE, viewport)
    }

    /// The module editor modal at its default size.
    pub fn editor(viewport: Size) -> Result<Self> {
        Self::new(LayoutConfig::editor(), MODAL_DEFAULT_SIZE, viewport)
    }

    #[must_use]
    pub fn frame(&self) -> &ModalFrame {
        &self.frame
    }

    #[must_use]
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Panel commands and divider drags go straight to the engine.
    pub fn engine_mut(&mut self) -> &mut LayoutEngine {
        &mut self.engine
    }

    /// Corner handle pressed. Refused while a divider drag is live.
    pub fn begin_corner_resize(&mut self, pointer: PointerPosition) -> bool {
        if self.engine.is_dragging() {
            debug!("layout.frame: corner resize refused during divider drag");
            return false;
        }
        self.frame.begin_resize(pointer)
    }

    pub fn update_corner_resize(&mut self, pointer: PointerPosition) -> Vec<PanelChange> {
        match self.frame.update_resize(pointer) {
            Some(size) => self.engine.resize_container(i64::from(size.width)),
            None => Vec::new(),
        }
    }

    pub fn end_corner_resize(&mut self) -> bool {
        self.frame.end_resize()
    }

    /// Host window resized. The frame is re-clamped to it and the panels
    /// stack only when the window itself drops below the breakpoint.
    pub fn set_viewport(&mut self, viewport: Size) -> Vec<PanelChange> {
        let size = self
            .frame
            .set_viewport(viewport)
            .unwrap_or_else(|| self.frame.size());
        self.engine
            .resize_in_viewport(i64::from(size.width), i64::from(viewport.width))
    }

    /// Whichever gesture is live decides the cursor.
    #[must_use]
    pub fn chrome(&self) -> Option<DragChrome> {
        self.frame.chrome().or_else(|| self.engine.chrome())
    }
}
