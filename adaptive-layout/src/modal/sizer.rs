//! Open state and border-drag resizing of one modal.

use super::config::ModalConfig;
use super::resize::{ModalResizeSession, ResizeDirection};
use super::sizing::{ModalSize, SizeBounds, initial_size};
use crate::session::EventResult;
use crate::surface::{FrameHandle, PointerId, SharedSurface};
use crate::units::Viewport;

/// Size state of one modal dialog.
///
/// The size is re-resolved every time the modal opens, so a window resized
/// between opens is reflected. While open, the user may drag its border;
/// the drag follows the same frame coalescing and clamping as column resize.
#[derive(Debug)]
pub struct ModalSizer {
    config: ModalConfig,
    surface: SharedSurface,
    viewport: Viewport,
    size: ModalSize,
    open: bool,
    resize: Option<ModalResizeSession>,
}

impl ModalSizer {
    /// A closed modal sized for `viewport`.
    pub fn new(config: ModalConfig, surface: SharedSurface, viewport: Viewport) -> Self {
        let size = initial_size(&config, viewport);
        Self {
            config,
            surface,
            viewport,
            size,
            open: false,
            resize: None,
        }
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    pub fn size(&self) -> ModalSize {
        self.size
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn bounds(&self) -> SizeBounds {
        SizeBounds::for_viewport(&self.config, self.viewport)
    }

    /// Replace the options. An open modal is resized to match them.
    pub fn set_config(&mut self, config: ModalConfig) {
        self.config = config;
        if self.open {
            self.teardown();
            self.size = initial_size(&self.config, self.viewport);
        }
    }

    /// Open or close the modal. Opening resolves the size against `viewport`;
    /// closing abandons any resize in flight.
    pub fn set_open(&mut self, open: bool, viewport: Viewport) {
        if open && !self.open {
            self.viewport = viewport;
            self.size = initial_size(&self.config, viewport);
            log::debug!(
                "modal opened at {}x{} in {}x{}",
                self.size.width,
                self.size.height,
                viewport.width,
                viewport.height
            );
        } else if !open {
            self.teardown();
        }
        self.open = open;
    }

    /// The viewport changed while mounted. The current size is pulled back
    /// inside the new bounds; a drag in flight keeps its starting bounds.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.size = self.bounds().clamp(self.size);
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Pointer down on a border handle.
    pub fn begin_resize(
        &mut self,
        direction: ResizeDirection,
        pointer: PointerId,
        x: f64,
        y: f64,
    ) -> EventResult {
        if !self.open {
            return EventResult::Ignored;
        }
        self.resize = Some(ModalResizeSession::begin(
            self.surface.clone(),
            direction,
            pointer,
            (x, y),
            self.size,
            self.bounds(),
        ));
        EventResult::StartDrag
    }

    pub fn resize_move(&mut self, pointer: PointerId, x: f64, y: f64) -> EventResult {
        match self.resize.as_mut() {
            Some(session) => session.pointer_move(pointer, x, y),
            None => EventResult::Ignored,
        }
    }

    pub fn on_frame(&mut self, handle: FrameHandle) -> EventResult {
        let Some(size) = self.resize.as_mut().and_then(|s| s.on_frame(handle)) else {
            return EventResult::Ignored;
        };
        self.size = self.bounds().clamp(size);
        EventResult::Consumed
    }

    /// Pointer up or cancelled. A frame still pending is discarded.
    pub fn end_resize(&mut self, pointer: PointerId) -> EventResult {
        match self.resize.take_if(|s| s.pointer() == pointer) {
            Some(_) => EventResult::Consumed,
            None => EventResult::Ignored,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        self.resize.as_ref().map(|s| s.direction())
    }

    /// `"W×H"` label shown while the border is dragged.
    pub fn resize_indicator(&self) -> Option<String> {
        self.resize.as_ref().map(|_| {
            format!(
                "{}×{}",
                self.size.width.round(),
                self.size.height.round()
            )
        })
    }

    /// Abandon any resize in flight, releasing capture and frames.
    pub fn teardown(&mut self) {
        self.resize = None;
    }
}
