//! In-memory and unavailable layout backends.

use dashmap::DashMap;

use super::StoreBackend;
use crate::error::LayoutError;

/// Process-local layout storage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: DashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, LayoutError> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    fn set(&self, key: &str, value: String) -> Result<(), LayoutError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), LayoutError> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, LayoutError> {
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|e| e.key().starts_with(prefix))
            .map(|e| e.key().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }
}

/// A store that rejects every call, e.g. storage disabled by the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBackend;

impl StoreBackend for UnavailableBackend {
    fn get(&self, _key: &str) -> Result<Option<String>, LayoutError> {
        Err(LayoutError::Unavailable)
    }

    fn set(&self, _key: &str, _value: String) -> Result<(), LayoutError> {
        Err(LayoutError::Unavailable)
    }

    fn delete(&self, _key: &str) -> Result<(), LayoutError> {
        Err(LayoutError::Unavailable)
    }

    fn keys_with_prefix(&self, _prefix: &str) -> Result<Vec<String>, LayoutError> {
        Err(LayoutError::Unavailable)
    }
}
