//! Viewport-clamped, user-resizable modal sizing.

mod config;
mod resize;
mod scroll;
mod sizer;
mod sizing;

pub use config::{
    ContentPadding, DEFAULT_MODAL_MIN_HEIGHT, DEFAULT_MODAL_MIN_WIDTH, Edges, ModalConfig,
};
pub use resize::{ModalResizeSession, ResizeDirection};
pub use scroll::{DEFAULT_MIN_SCROLL_Y, DEFAULT_SCROLL_OFFSET, DEFAULT_SCROLL_Y, TableScrollY};
pub use sizer::ModalSizer;
pub use sizing::{
    ModalSize, SizeBounds, default_width_ratio, initial_size, resolve_width_px, viewport_max,
};
