//! Pagination settings passed through to the host table.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placement used when the caller names none.
pub const DEFAULT_PLACEMENT: &str = "bottomRight";

/// Pager options. Unset fields fall back to the host's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_size_changer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Vec<String>>,
    /// Older name for `placement`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec<String>>,
    /// Any other pager option (`showQuickJumper`, `pageSizeOptions`, ...),
    /// kept verbatim for the host.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Pagination as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Pagination {
    /// Nothing supplied; the host decides.
    #[default]
    Unset,
    /// Explicitly turned off.
    Disabled,
    Enabled(PaginationOptions),
}

impl Pagination {
    /// Fill in the table's pager defaults: simple mode, a page size changer,
    /// and bottom-right placement. `Unset` and `Disabled` pass through.
    pub fn merged(&self) -> Pagination {
        let Pagination::Enabled(opts) = self else {
            return self.clone();
        };
        let mut merged = opts.clone();
        merged.simple = Some(opts.simple.unwrap_or(true));
        merged.show_size_changer = Some(opts.show_size_changer.unwrap_or(true));
        merged.placement = opts
            .placement
            .clone()
            .or_else(|| opts.position.clone())
            .or_else(|| Some(vec![DEFAULT_PLACEMENT.to_string()]));
        merged.position = None;
        Pagination::Enabled(merged)
    }
}

impl<'de> Deserialize<'de> for Pagination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            None | Some(serde_json::Value::Null) => Ok(Pagination::Unset),
            Some(serde_json::Value::Bool(false)) => Ok(Pagination::Disabled),
            Some(serde_json::Value::Bool(true)) => {
                Ok(Pagination::Enabled(PaginationOptions::default()))
            }
            Some(value) => serde_json::from_value(value)
                .map(Pagination::Enabled)
                .map_err(serde::de::Error::custom),
        }
    }
}

impl Serialize for Pagination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Pagination::Unset => serializer.serialize_none(),
            Pagination::Disabled => serializer.serialize_bool(false),
            Pagination::Enabled(opts) => opts.serialize(serializer),
        }
    }
}
