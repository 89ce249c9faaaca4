//! Pointer-driven width drag of a single column.

use crate::session::EventResult;
use crate::surface::{FrameHandle, FrameSlot, PointerGrab, PointerId, SharedSurface};
use crate::table::ColumnId;
use crate::units::clamp;

/// Allowed column width range in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthBounds {
    pub min: f64,
    pub max: f64,
}

impl WidthBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, width: f64) -> f64 {
        clamp(width, self.min, self.max)
    }
}

/// An active column resize gesture.
///
/// Holds the pointer capture and at most one pending frame; both are released
/// when the session is dropped.
#[derive(Debug)]
pub struct ResizeSession {
    column: ColumnId,
    start_x: f64,
    start_width: f64,
    bounds: WidthBounds,
    applied: bool,
    frame: FrameSlot<f64>,
    grab: PointerGrab,
}

impl ResizeSession {
    /// Start resizing `column` from its current width.
    pub fn begin(
        surface: SharedSurface,
        column: ColumnId,
        pointer: PointerId,
        start_x: f64,
        start_width: f64,
        bounds: WidthBounds,
    ) -> Self {
        log::debug!("resize start: {} at {}px", column, start_width);
        Self {
            column,
            start_x,
            start_width: bounds.clamp(start_width),
            bounds,
            applied: false,
            frame: FrameSlot::new(surface.clone()),
            grab: PointerGrab::acquire(surface, pointer),
        }
    }

    pub fn column(&self) -> &ColumnId {
        &self.column
    }

    pub fn pointer(&self) -> PointerId {
        self.grab.pointer()
    }

    /// Clamped width for a pointer at `x`.
    pub fn candidate(&self, x: f64) -> f64 {
        self.bounds.clamp(self.start_width + (x - self.start_x))
    }

    /// Pointer moved; the new width is applied on the next frame.
    pub fn pointer_move(&mut self, pointer: PointerId, x: f64) -> EventResult {
        if pointer != self.pointer() {
            return EventResult::Ignored;
        }
        let width = self.candidate(x);
        if self.frame.schedule(width) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// A frame fired. Returns the width to apply if it was ours.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<f64> {
        let width = self.frame.take(handle)?;
        self.applied = true;
        Some(width)
    }

    /// Whether any frame applied a width during this session.
    pub fn applied(&self) -> bool {
        self.applied
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_pending()
    }
}

impl Drop for ResizeSession {
    fn drop(&mut self) {
        log::debug!("resize end: {}", self.column);
    }
}
