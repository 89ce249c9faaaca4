//! Persisted column layout storage.
//!
//! Each table key maps to two entries:
//!
//! - `<key>` holds a JSON object of column widths, `{ "id": 120, ... }`
//! - `<key>:order` holds a JSON array of column ids, `["b", "a"]`
//!
//! Reads never fail: missing or malformed data yields an empty layout.
//! Writes are best-effort: failures are logged and dropped so the caller's
//! in-memory layout keeps working for the rest of the session.

mod backend;
mod memory;
mod sqlite;

pub use backend::StoreBackend;
pub use memory::{MemoryBackend, UnavailableBackend};
pub use sqlite::SqliteBackend;

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde_json::Value;

use crate::error::LayoutError;
use crate::table::ColumnId;

/// Persisted column widths in pixels.
pub type WidthMap = BTreeMap<ColumnId, f64>;

/// Persisted left-to-right column order (partial).
pub type OrderArray = Vec<ColumnId>;

/// Storage key holding the order array for a table key.
pub fn order_key(key: &str) -> String {
    format!("{}:order", key)
}

/// Drop empty and repeated ids, keeping the first occurrence.
pub fn dedup_order(order: &[ColumnId]) -> OrderArray {
    let mut seen = HashSet::new();
    order
        .iter()
        .filter(|id| !id.as_str().is_empty())
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// Typed layout storage over a raw `StoreBackend`.
#[derive(Clone)]
pub struct LayoutStore {
    backend: Arc<dyn StoreBackend>,
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore").finish_non_exhaustive()
    }
}

impl LayoutStore {
    /// Create a layout store over the given backend.
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// A store that only lives as long as the process.
    pub fn memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Open the SQLite store at the platform data directory.
    pub fn open_default() -> Result<Self, LayoutError> {
        let path = crate::paths::layout_db().ok_or(LayoutError::NoDataDir)?;
        Ok(Self::new(SqliteBackend::open(path)?))
    }

    fn read_json(&self, key: &str) -> Option<Value> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("layout read failed for '{}': {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("ignoring malformed layout entry '{}': {}", key, e);
                None
            }
        }
    }

    fn write_json(&self, key: &str, value: Value) {
        let result = serde_json::to_string(&value)
            .map_err(LayoutError::from)
            .and_then(|raw| self.backend.set(key, raw));
        if let Err(e) = result {
            log::warn!("layout write failed for '{}': {}", key, e);
        }
    }

    /// Read persisted widths. Non-numeric entries are skipped.
    pub fn read_widths(&self, key: &str) -> WidthMap {
        let Some(Value::Object(entries)) = self.read_json(key) else {
            return WidthMap::new();
        };
        entries
            .into_iter()
            .filter_map(|(id, width)| {
                let width = width.as_f64().filter(|w| w.is_finite())?;
                Some((ColumnId::new(id), width))
            })
            .collect()
    }

    /// Persist widths, best-effort.
    pub fn write_widths(&self, key: &str, widths: &WidthMap) {
        let entries = widths
            .iter()
            .filter_map(|(id, width)| {
                let number = serde_json::Number::from_f64(*width)?;
                Some((id.to_string(), Value::Number(number)))
            })
            .collect();
        self.write_json(key, Value::Object(entries));
    }

    /// Read the persisted order. Non-string entries are skipped.
    pub fn read_order(&self, key: &str) -> OrderArray {
        let Some(Value::Array(items)) = self.read_json(&order_key(key)) else {
            return OrderArray::new();
        };
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(id) => Some(ColumnId::new(id)),
                _ => None,
            })
            .collect()
    }

    /// Persist the order, deduplicated, best-effort.
    pub fn write_order(&self, key: &str, order: &[ColumnId]) {
        let items = dedup_order(order)
            .into_iter()
            .map(|id| Value::String(id.to_string()))
            .collect();
        self.write_json(&order_key(key), Value::Array(items));
    }

    /// Forget both the widths and the order of a table key.
    pub fn clear(&self, key: &str) {
        for entry in [key.to_string(), order_key(key)] {
            if let Err(e) = self.backend.delete(&entry) {
                log::warn!("layout delete failed for '{}': {}", entry, e);
            }
        }
    }

    /// Stored keys starting with `prefix`. Empty when the backend fails.
    pub fn keys(&self, prefix: &str) -> Vec<String> {
        self.backend.keys_with_prefix(prefix).unwrap_or_else(|e| {
            log::warn!("layout key listing failed: {}", e);
            Vec::new()
        })
    }
}
