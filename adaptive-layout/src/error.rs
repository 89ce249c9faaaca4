//! Error types for persistence and host platform capabilities.

use thiserror::Error;

/// Errors raised by layout persistence.
///
/// None of these reach the user: `LayoutStore` logs and swallows them so
/// the in-memory layout stays authoritative for the session.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no platform data directory available")]
    NoDataDir,
    #[error("layout storage is unavailable")]
    Unavailable,
}

/// Capabilities a host surface may not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("pointer capture is not supported by this surface")]
    PointerCaptureUnsupported,
    #[error("frame scheduling is not supported by this surface")]
    FramesUnsupported,
}
