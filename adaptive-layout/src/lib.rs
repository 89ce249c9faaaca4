//! Adaptive layout for data tables and modal dialogs.
//!
//! Tables get user-resizable, drag-reorderable columns whose layout is
//! persisted under a key derived from the column schema. Modals get a
//! viewport-clamped size that the user can drag. Both are driven by the host
//! through a [`Surface`] for frame scheduling and pointer capture.

pub mod error;
pub mod fingerprint;
pub mod modal;
pub mod paths;
pub mod session;
pub mod store;
pub mod surface;
pub mod table;
pub mod units;

pub use error::{LayoutError, PlatformError};
pub use fingerprint::fingerprint;
pub use modal::{ModalConfig, ModalSize, ModalSizer, ResizeDirection};
pub use session::EventResult;
pub use store::LayoutStore;
pub use surface::{FrameHandle, ManualSurface, PointerId, SharedSurface, Surface, UnsupportedSurface};
pub use table::{Column, ColumnId, TableConfig, TableLayout, TableLayoutEngine};
pub use units::{Length, Viewport};
