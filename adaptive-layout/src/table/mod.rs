//! Resizable, reorderable, persisted table columns.
//!
//! A host describes its columns as a [`Column`] tree and mounts a
//! [`TableLayoutEngine`]. The engine resolves each leaf's width, pinning,
//! resize handle and drag affordance, and turns header gestures into layout
//! changes that are persisted under a per-table key.

mod classify;
pub(crate) mod column;
mod config;
mod engine;
mod pagination;
mod resolve;

pub use classify::is_operation_column;
pub use column::{Column, ColumnId, FixedSide, is_flat};
pub use config::{
    ACTION_COLUMN_WIDTH, DEFAULT_COLUMN_WIDTH, DEFAULT_MAX_COLUMN_WIDTH,
    DEFAULT_MIN_COLUMN_WIDTH, STORAGE_KEY_PREFIX, TableConfig,
};
pub use engine::TableLayoutEngine;
pub use pagination::{DEFAULT_PLACEMENT, Pagination, PaginationOptions};
pub use resolve::{ResolvedColumn, TableLayout, ordered_indices, resolve};
