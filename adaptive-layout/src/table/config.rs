//! Table layout configuration.

use serde::{Deserialize, Serialize};

use super::Column;
use super::pagination::Pagination;
use crate::fingerprint::fingerprint;
use crate::session::WidthBounds;

pub const DEFAULT_MIN_COLUMN_WIDTH: f64 = 60.0;
pub const DEFAULT_MAX_COLUMN_WIDTH: f64 = 800.0;
pub const DEFAULT_COLUMN_WIDTH: f64 = 120.0;
/// Width of an operation column without an explicit pixel width.
pub const ACTION_COLUMN_WIDTH: f64 = 72.0;

/// Prefix of derived storage keys.
pub const STORAGE_KEY_PREFIX: &str = "resizable-table";

/// Per-table layout options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Explicit persistence key. Derived from route, row key and schema
    /// fingerprint when absent.
    pub storage_key: Option<String>,
    /// Route of the hosting page, part of the derived key.
    pub route: Option<String>,
    /// Name of the row identity field, part of the derived key.
    pub row_key: Option<String>,
    pub resizable_columns: bool,
    pub reorderable_columns: bool,
    pub allow_fixed_columns: bool,
    pub min_column_width: f64,
    pub max_column_width: f64,
    pub default_column_width: f64,
    pub pagination: Pagination,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            storage_key: None,
            route: None,
            row_key: None,
            resizable_columns: true,
            reorderable_columns: true,
            allow_fixed_columns: true,
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            pagination: Pagination::Unset,
        }
    }
}

impl TableConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_row_key(mut self, row_key: impl Into<String>) -> Self {
        self.row_key = Some(row_key.into());
        self
    }

    pub fn with_width_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_column_width = min;
        self.max_column_width = max;
        self
    }

    pub fn bounds(&self) -> WidthBounds {
        WidthBounds::new(self.min_column_width, self.max_column_width)
    }

    /// Key under which this table's layout is persisted.
    pub fn storage_key_for(&self, columns: &[Column]) -> String {
        if let Some(key) = self.storage_key.as_deref().filter(|k| !k.is_empty()) {
            return key.to_string();
        }
        format!(
            "{}:{}:{}:{}",
            STORAGE_KEY_PREFIX,
            self.route.as_deref().unwrap_or("unknown"),
            self.row_key.as_deref().unwrap_or(""),
            fingerprint(columns)
        )
    }
}
