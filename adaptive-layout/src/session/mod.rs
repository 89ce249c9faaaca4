//! Transient drag sessions driven by pointer gestures.
//!
//! Each interactive surface owns at most one session of each kind; both are
//! single-slot state, so starting a new gesture replaces whatever an
//! interrupted one left behind.

pub mod reorder;
pub mod resize;

pub use reorder::{DropSide, HeaderRect, ReorderSession, move_column};
pub use resize::{ResizeSession, WidthBounds};

/// Result of feeding an input signal to a layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The signal was not for us (no active session, disabled column, ...).
    Ignored,
    /// The signal was handled.
    Consumed,
    /// The signal started a drag session.
    StartDrag,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
