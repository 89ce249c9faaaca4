//! Layout storage backend trait.

use crate::error::LayoutError;

/// Backend trait for layout storage.
///
/// Implementations handle raw JSON text storage/retrieval.
/// The `LayoutStore` wraps this with typed width/order access.
pub trait StoreBackend: Send + Sync {
    /// Get the raw value for a key.
    fn get(&self, key: &str) -> Result<Option<String>, LayoutError>;

    /// Set the raw value for a key.
    fn set(&self, key: &str, value: String) -> Result<(), LayoutError>;

    /// Delete a key.
    fn delete(&self, key: &str) -> Result<(), LayoutError>;

    /// Get all keys matching a prefix.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, LayoutError>;
}
