//! Caller-supplied column descriptions and column identity.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::units::{Length, deserialize_lenient};

/// Side a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    Left,
    Right,
}

/// Stable addressing key of a leaf column.
///
/// Widths, order entries and drag/resize targets are all keyed by this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identity derived from a positional index path, e.g. `"0.2"`.
    pub fn from_index_path(path: &[usize]) -> Self {
        Self(join_index_path(path))
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ColumnId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Dot-join a positional index path.
pub(crate) fn join_index_path(path: &[usize]) -> String {
    path.iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// One node of a caller-supplied column tree.
///
/// Columns with children are header groups and are never leaves; only leaves
/// can be resized, reordered or persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Explicit identity hint.
    #[serde(default, deserialize_with = "deserialize_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Path of the data field rendered in this column.
    #[serde(
        default,
        rename = "dataIndex",
        deserialize_with = "deserialize_data_path",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub data_path: Vec<String>,
    /// Header text.
    #[serde(default)]
    pub title: String,
    /// Caller width. Only absolute pixel lengths take part in resolution.
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing_if = "Option::is_none")]
    pub width: Option<Length>,
    /// Pinned side requested by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
    /// Explicit resize override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resizable: Option<bool>,
    /// Child columns of a header group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Column>,
}

impl Column {
    /// Create a leaf column with an explicit key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Create a leaf column addressed by its data field path (`"a.b"`).
    pub fn field(path: &str, title: impl Into<String>) -> Self {
        Self {
            data_path: path.split('.').map(str::to_string).collect(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Create a header group spanning the given children.
    pub fn group(title: impl Into<String>, children: Vec<Column>) -> Self {
        Self {
            title: title.into(),
            children,
            ..Self::default()
        }
    }

    /// Set the caller width.
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Pin the column to a side.
    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    /// Override whether the column may be resized.
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = Some(resizable);
        self
    }

    /// Set the data field path.
    pub fn data_path(mut self, path: &str) -> Self {
        self.data_path = path.split('.').map(str::to_string).collect();
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The data path joined with `.`.
    pub fn data_path_text(&self) -> String {
        self.data_path.join(".")
    }

    /// Key text, falling back to the data path. `None` when neither is set.
    pub fn identity_hint(&self) -> Option<String> {
        if let Some(key) = self.key.as_deref().filter(|k| !k.is_empty()) {
            return Some(key.to_string());
        }
        let path = self.data_path_text();
        (!path.is_empty()).then_some(path)
    }

    /// Resolve this column's identity at the given positional path.
    pub fn identity(&self, index_path: &[usize]) -> ColumnId {
        match self.identity_hint() {
            Some(hint) => ColumnId(hint),
            None => ColumnId::from_index_path(index_path),
        }
    }

    /// Caller width in absolute pixels, if any.
    pub fn width_px(&self) -> Option<f64> {
        self.width.and_then(|w| w.as_px())
    }
}

/// Whether every top-level column is a leaf (no header groups).
pub fn is_flat(columns: &[Column]) -> bool {
    columns.iter().all(Column::is_leaf)
}

fn deserialize_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Array(parts)) => Some(join_values(&parts)),
        _ => None,
    })
}

fn deserialize_data_path<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => vec![s],
        Some(serde_json::Value::Number(n)) => vec![n.to_string()],
        Some(serde_json::Value::Array(parts)) => parts.iter().map(value_text).collect(),
        _ => Vec::new(),
    })
}

fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn join_values(parts: &[serde_json::Value]) -> String {
    parts.iter().map(value_text).collect::<Vec<_>>().join(".")
}
