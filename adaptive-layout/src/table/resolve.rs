//! Resolution of the effective column layout.
//!
//! Pure functions from (column tree, config, widths, order) to the layout a
//! host renders. Width precedence for a leaf is: in-memory/persisted width,
//! then the caller's pixel width, then the configured default, always
//! clamped. Operation columns skip all of that.

use std::collections::HashMap;

use serde::Serialize;

use super::classify::is_operation_column;
use super::column::{Column, ColumnId, FixedSide, is_flat};
use super::config::{ACTION_COLUMN_WIDTH, TableConfig};
use super::pagination::Pagination;
use crate::store::WidthMap;

/// A column as the host should render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedColumn {
    pub id: ColumnId,
    pub title: String,
    /// Position in the caller's tree; stable across reorders.
    pub index_path: Vec<usize>,
    /// Pixel width. `None` for header groups, which span their children.
    pub width: Option<f64>,
    pub fixed: Option<FixedSide>,
    /// Show a resize handle.
    pub resizable: bool,
    /// Header can be dragged to reorder.
    pub draggable: bool,
    pub operation: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResolvedColumn>,
}

impl ResolvedColumn {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a ResolvedColumn>) {
        if self.is_leaf() {
            out.push(self);
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }
}

/// Effective layout of a whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableLayout {
    pub storage_key: String,
    /// Whether header drag-reordering is active for this schema.
    pub reorderable: bool,
    pub columns: Vec<ResolvedColumn>,
    /// Pager settings with the table defaults filled in.
    pub pagination: Pagination,
}

impl TableLayout {
    /// Leaf columns, left to right.
    pub fn leaves(&self) -> Vec<&ResolvedColumn> {
        let mut out = Vec::new();
        for column in &self.columns {
            column.collect_leaves(&mut out);
        }
        out
    }

    pub fn leaf(&self, id: &ColumnId) -> Option<&ResolvedColumn> {
        self.leaves().into_iter().find(|c| &c.id == id)
    }

    /// Top-level ids, left to right.
    pub fn order(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    /// Ids that take part in persisted ordering.
    pub fn draggable_order(&self) -> Vec<ColumnId> {
        self.columns
            .iter()
            .filter(|c| c.draggable)
            .map(|c| c.id.clone())
            .collect()
    }

    /// Sum of all leaf widths.
    pub fn total_width(&self) -> f64 {
        self.leaves().iter().filter_map(|c| c.width).sum()
    }
}

/// Indices of `ids` arranged by a partial `order`.
///
/// Ids named in `order` come first in that order; the rest follow in their
/// original order. Unknown and repeated order entries are skipped.
///
/// Identities must be unique; of two siblings sharing one, only the later
/// is kept.
pub fn ordered_indices(ids: &[ColumnId], order: &[ColumnId]) -> Vec<usize> {
    let mut remaining: HashMap<&ColumnId, usize> = HashMap::with_capacity(ids.len());
    for (i, id) in ids.iter().enumerate() {
        if remaining.insert(id, i).is_some() {
            log::warn!("duplicate column identity '{}'; earlier column hidden", id);
        }
    }
    let mut out = Vec::with_capacity(ids.len());

    for id in order {
        if let Some(i) = remaining.remove(id) {
            out.push(i);
        }
    }
    for id in ids {
        if let Some(i) = remaining.remove(id) {
            out.push(i);
        }
    }
    out
}

/// Resolve the layout of `columns`.
pub fn resolve(
    columns: &[Column],
    config: &TableConfig,
    widths: &WidthMap,
    order: &[ColumnId],
    storage_key: &str,
) -> TableLayout {
    let reorderable = config.reorderable_columns && is_flat(columns);

    let top_ids: Vec<ColumnId> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| c.identity(&[i]))
        .collect();
    let indices: Vec<usize> = if reorderable {
        // Persisted entries never move operation columns.
        let operation_ids: Vec<&ColumnId> = columns
            .iter()
            .zip(&top_ids)
            .filter(|(c, _)| is_operation_column(c))
            .map(|(_, id)| id)
            .collect();
        let order: Vec<ColumnId> = order
            .iter()
            .filter(|id| !operation_ids.contains(id))
            .cloned()
            .collect();
        ordered_indices(&top_ids, &order)
    } else {
        (0..columns.len()).collect()
    };

    let resolver = Resolver {
        config,
        widths,
        reorderable,
    };
    let resolved = indices
        .into_iter()
        .map(|i| resolver.column(&columns[i], vec![i]))
        .collect();

    TableLayout {
        storage_key: storage_key.to_string(),
        reorderable,
        columns: resolved,
        pagination: config.pagination.merged(),
    }
}

struct Resolver<'a> {
    config: &'a TableConfig,
    widths: &'a WidthMap,
    reorderable: bool,
}

impl Resolver<'_> {
    fn column(&self, column: &Column, index_path: Vec<usize>) -> ResolvedColumn {
        let id = column.identity(&index_path);

        if !column.is_leaf() {
            let children = column
                .children
                .iter()
                .enumerate()
                .map(|(i, child)| {
                    let mut path = index_path.clone();
                    path.push(i);
                    self.column(child, path)
                })
                .collect();
            return ResolvedColumn {
                id,
                title: column.title.clone(),
                index_path,
                width: None,
                fixed: self.caller_fixed(column),
                resizable: false,
                draggable: false,
                operation: false,
                children,
            };
        }

        let operation = is_operation_column(column);
        let width = if operation {
            column.width_px().unwrap_or(ACTION_COLUMN_WIDTH)
        } else {
            let requested = self
                .widths
                .get(&id)
                .copied()
                .or_else(|| column.width_px())
                .unwrap_or(self.config.default_column_width);
            self.config.bounds().clamp(requested)
        };
        let fixed = if operation {
            Some(FixedSide::Right)
        } else {
            self.caller_fixed(column)
        };

        ResolvedColumn {
            title: column.title.clone(),
            width: Some(width),
            fixed,
            resizable: self.config.resizable_columns && column.resizable != Some(false) && !operation,
            draggable: self.reorderable && index_path.len() == 1 && !operation,
            operation,
            children: Vec::new(),
            id,
            index_path,
        }
    }

    fn caller_fixed(&self, column: &Column) -> Option<FixedSide> {
        if self.config.allow_fixed_columns {
            column.fixed
        } else {
            None
        }
    }
}
