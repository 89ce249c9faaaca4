//! Two-axis resize drag of a modal border.

use serde::{Deserialize, Serialize};

use super::sizing::{ModalSize, SizeBounds};
use crate::session::EventResult;
use crate::surface::{FrameHandle, FrameSlot, PointerGrab, PointerId, SharedSurface};

/// Which border handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    /// Corner handle: both axes follow the pointer.
    Both,
    /// Vertical edge: width only.
    X,
    /// Horizontal edge: height only.
    Y,
}

impl ResizeDirection {
    pub fn adjusts_width(&self) -> bool {
        matches!(self, ResizeDirection::Both | ResizeDirection::X)
    }

    pub fn adjusts_height(&self) -> bool {
        matches!(self, ResizeDirection::Both | ResizeDirection::Y)
    }
}

#[derive(Debug)]
pub struct ModalResizeSession {
    direction: ResizeDirection,
    start_x: f64,
    start_y: f64,
    start: ModalSize,
    bounds: SizeBounds,
    frame: FrameSlot<ModalSize>,
    grab: PointerGrab,
}

impl ModalResizeSession {
    pub fn begin(
        surface: SharedSurface,
        direction: ResizeDirection,
        pointer: PointerId,
        (start_x, start_y): (f64, f64),
        start: ModalSize,
        bounds: SizeBounds,
    ) -> Self {
        log::debug!(
            "modal resize start ({:?}) at {}x{}",
            direction,
            start.width,
            start.height
        );
        Self {
            direction,
            start_x,
            start_y,
            start,
            bounds,
            frame: FrameSlot::new(surface.clone()),
            grab: PointerGrab::acquire(surface, pointer),
        }
    }

    pub fn direction(&self) -> ResizeDirection {
        self.direction
    }

    pub fn pointer(&self) -> PointerId {
        self.grab.pointer()
    }

    /// Clamped size for a pointer at `(x, y)`. Axes the handle does not
    /// control keep their starting value.
    pub fn candidate(&self, x: f64, y: f64) -> ModalSize {
        let width = if self.direction.adjusts_width() {
            self.bounds.clamp_width(self.start.width + (x - self.start_x))
        } else {
            self.start.width
        };
        let height = if self.direction.adjusts_height() {
            self.bounds.clamp_height(self.start.height + (y - self.start_y))
        } else {
            self.start.height
        };
        ModalSize::new(width, height)
    }

    pub fn pointer_move(&mut self, pointer: PointerId, x: f64, y: f64) -> EventResult {
        if pointer != self.pointer() {
            return EventResult::Ignored;
        }
        let size = self.candidate(x, y);
        if self.frame.schedule(size) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<ModalSize> {
        self.frame.take(handle)
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ManualSurface;

    fn bounds() -> SizeBounds {
        SizeBounds {
            min_width: 520.0,
            max_width: 980.0,
            min_height: 320.0,
            max_height: 760.0,
        }
    }

    #[test]
    fn test_axis_handles() {
        let surface = ManualSurface::new();
        let start = ModalSize::new(600.0, 400.0);
        for (direction, expected) in [
            (ResizeDirection::Both, ModalSize::new(650.0, 430.0)),
            (ResizeDirection::X, ModalSize::new(650.0, 400.0)),
            (ResizeDirection::Y, ModalSize::new(600.0, 430.0)),
        ] {
            let session = ModalResizeSession::begin(
                surface.clone(),
                direction,
                PointerId(1),
                (0.0, 0.0),
                start,
                bounds(),
            );
            assert_eq!(session.candidate(50.0, 30.0), expected);
        }
    }

    #[test]
    fn test_large_deltas_clamp_both_axes() {
        let surface = ManualSurface::new();
        let session = ModalResizeSession::begin(
            surface,
            ResizeDirection::Both,
            PointerId(1),
            (100.0, 100.0),
            ModalSize::new(600.0, 400.0),
            bounds(),
        );
        assert_eq!(session.candidate(-5000.0, 9000.0), ModalSize::new(520.0, 760.0));
        assert_eq!(session.candidate(9000.0, -5000.0), ModalSize::new(980.0, 320.0));
    }
}
