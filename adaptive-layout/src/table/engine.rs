//! Stateful table layout engine.

use super::column::{Column, ColumnId};
use super::config::TableConfig;
use super::resolve::{ResolvedColumn, TableLayout, resolve};
use crate::session::{EventResult, HeaderRect, ReorderSession, ResizeSession};
use crate::store::{LayoutStore, OrderArray, WidthMap, dedup_order};
use crate::surface::{FrameHandle, PointerId, SharedSurface};

/// Column layout state of one mounted table.
///
/// Owns the in-memory widths and order (seeded from the store), and the
/// single resize and reorder sessions. Every change the user makes is
/// persisted when its gesture ends. Dropping the engine mid-gesture releases
/// pointer capture and cancels pending frames.
#[derive(Debug)]
pub struct TableLayoutEngine {
    columns: Vec<Column>,
    config: TableConfig,
    store: LayoutStore,
    surface: SharedSurface,
    storage_key: String,
    widths: WidthMap,
    order: OrderArray,
    resize: Option<ResizeSession>,
    reorder: ReorderSession,
}

impl TableLayoutEngine {
    /// Mount a table, loading its persisted layout.
    pub fn new(
        columns: Vec<Column>,
        config: TableConfig,
        store: LayoutStore,
        surface: SharedSurface,
    ) -> Self {
        let storage_key = config.storage_key_for(&columns);
        let widths = load_widths(&store, &storage_key, &config);
        let order = store.read_order(&storage_key);
        log::debug!(
            "table '{}' mounted: {} widths, {} ordered",
            storage_key,
            widths.len(),
            order.len()
        );
        Self {
            columns,
            config,
            store,
            surface,
            storage_key,
            widths,
            order,
            resize: None,
            reorder: ReorderSession::new(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// In-memory width overrides.
    pub fn widths(&self) -> &WidthMap {
        &self.widths
    }

    /// In-memory (partial) column order.
    pub fn order(&self) -> &OrderArray {
        &self.order
    }

    /// Replace the column tree.
    ///
    /// If the storage key changes (a different schema), the layout is
    /// reloaded and any gesture in flight is abandoned.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.rekey();
    }

    /// Replace the configuration, reloading if the storage key changes.
    pub fn set_config(&mut self, config: TableConfig) {
        self.config = config;
        self.rekey();
    }

    fn rekey(&mut self) {
        let key = self.config.storage_key_for(&self.columns);
        if key != self.storage_key {
            log::debug!("table key changed: '{}' -> '{}'", self.storage_key, key);
            self.teardown();
            self.widths = load_widths(&self.store, &key, &self.config);
            self.order = self.store.read_order(&key);
            self.storage_key = key;
        }
    }

    /// Resolve the layout to render.
    pub fn layout(&self) -> TableLayout {
        resolve(
            &self.columns,
            &self.config,
            &self.widths,
            &self.order,
            &self.storage_key,
        )
    }

    /// Resolved state of a single leaf column.
    pub fn leaf(&self, id: &ColumnId) -> Option<ResolvedColumn> {
        self.layout().leaf(id).cloned()
    }

    /// Current rendered width of a leaf column.
    pub fn column_width(&self, id: &ColumnId) -> Option<f64> {
        self.leaf(id).and_then(|c| c.width)
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Pointer down on the resize handle of `id`.
    pub fn begin_resize(&mut self, id: &ColumnId, pointer: PointerId, x: f64) -> EventResult {
        let Some(column) = self.leaf(id) else {
            return EventResult::Ignored;
        };
        let Some(width) = column.width.filter(|_| column.resizable) else {
            return EventResult::Ignored;
        };
        // Replacing the slot drops any stale session and its guards.
        self.resize = Some(ResizeSession::begin(
            self.surface.clone(),
            column.id,
            pointer,
            x,
            width,
            self.config.bounds(),
        ));
        EventResult::StartDrag
    }

    /// Pointer moved while resizing.
    pub fn resize_move(&mut self, pointer: PointerId, x: f64) -> EventResult {
        match self.resize.as_mut() {
            Some(session) => session.pointer_move(pointer, x),
            None => EventResult::Ignored,
        }
    }

    /// A frame requested by this table fired.
    pub fn on_frame(&mut self, handle: FrameHandle) -> EventResult {
        let Some(session) = self.resize.as_mut() else {
            return EventResult::Ignored;
        };
        let Some(width) = session.on_frame(handle) else {
            return EventResult::Ignored;
        };
        let width = self.config.bounds().clamp(width);
        self.widths.insert(session.column().clone(), width);
        EventResult::Consumed
    }

    /// Pointer up: end the resize and persist the last applied width.
    /// A frame still pending is discarded.
    pub fn end_resize(&mut self, pointer: PointerId) -> EventResult {
        let Some(session) = self.resize.take_if(|s| s.pointer() == pointer) else {
            return EventResult::Ignored;
        };
        self.finish_resize(session)
    }

    /// The host cancelled the gesture (lost capture, focus change). Widths
    /// already applied are kept and persisted, like a pointer up.
    pub fn cancel_resize(&mut self) -> EventResult {
        match self.resize.take() {
            Some(session) => self.finish_resize(session),
            None => EventResult::Ignored,
        }
    }

    fn finish_resize(&mut self, session: ResizeSession) -> EventResult {
        if session.applied() {
            // Bounds may have changed through `set_config` since load.
            let bounds = self.config.bounds();
            for width in self.widths.values_mut() {
                *width = bounds.clamp(*width);
            }
            self.store.write_widths(&self.storage_key, &self.widths);
        }
        EventResult::Consumed
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Column being resized, if any.
    pub fn resizing_column(&self) -> Option<&ColumnId> {
        self.resize.as_ref().map(|s| s.column())
    }

    // -------------------------------------------------------------------------
    // Reorder
    // -------------------------------------------------------------------------

    /// Drag started on the header of `id`.
    pub fn begin_drag(&mut self, id: &ColumnId) -> EventResult {
        if !self.leaf(id).is_some_and(|c| c.draggable) {
            return EventResult::Ignored;
        }
        self.reorder.begin(id.clone())
    }

    /// A drag hovers over the header of `id`. Consumed means droppable.
    pub fn drag_over(&self, id: &ColumnId) -> EventResult {
        if !self.leaf(id).is_some_and(|c| c.draggable) {
            return EventResult::Ignored;
        }
        self.reorder.drag_over(id)
    }

    /// Drop on the header of `target`, whose bounds are `target_rect` at
    /// drop time. `payload` is the transferred column id, used when the
    /// drag slot was lost.
    pub fn drop_on(
        &mut self,
        target: &ColumnId,
        pointer_x: f64,
        target_rect: HeaderRect,
        payload: Option<&str>,
    ) -> EventResult {
        let layout = self.layout();
        if !layout.leaf(target).is_some_and(|c| c.draggable) {
            return EventResult::Ignored;
        }
        let current = layout.draggable_order();
        match self
            .reorder
            .drop_on(&current, target, pointer_x, target_rect, payload)
        {
            Some(next) => {
                self.order = dedup_order(&next);
                self.store.write_order(&self.storage_key, &self.order);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Drag ended, with or without a drop.
    pub fn end_drag(&mut self) {
        self.reorder.end();
    }

    pub fn is_dragging(&self) -> bool {
        self.reorder.is_active()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Forget the user's widths and order for this table.
    pub fn reset_layout(&mut self) {
        self.teardown();
        self.widths.clear();
        self.order.clear();
        self.store.clear(&self.storage_key);
    }

    /// Abandon any gesture in flight, releasing capture and frames.
    pub fn teardown(&mut self) {
        self.resize = None;
        self.reorder.end();
    }
}

/// Persisted widths, pulled inside the configured bounds.
fn load_widths(store: &LayoutStore, key: &str, config: &TableConfig) -> WidthMap {
    let bounds = config.bounds();
    let mut widths = store.read_widths(key);
    for width in widths.values_mut() {
        *width = bounds.clamp(*width);
    }
    widths
}
