use std::sync::Arc;

use adaptive_layout::session::HeaderRect;
use adaptive_layout::store::{LayoutStore, UnavailableBackend, WidthMap};
use adaptive_layout::table::FixedSide;
use adaptive_layout::{
    Column, ColumnId, EventResult, ManualSurface, PointerId, TableConfig, TableLayoutEngine,
    UnsupportedSurface,
};

const POINTER: PointerId = PointerId(1);

fn id(s: &str) -> ColumnId {
    ColumnId::from(s)
}

fn ids(list: &[&str]) -> Vec<ColumnId> {
    list.iter().map(|s| ColumnId::from(*s)).collect()
}

fn orders_columns() -> Vec<Column> {
    vec![
        Column::new("A", "Customer").width(100u32),
        Column::new("B", "Amount").width(100u32),
        Column::new("op", "操作"),
    ]
}

fn orders_config() -> TableConfig {
    TableConfig::default()
        .with_storage_key("orders")
        .with_width_bounds(60.0, 800.0)
}

/// Drive one full resize gesture on `column`, firing a single frame.
fn drag_resize(engine: &mut TableLayoutEngine, surface: &ManualSurface, column: &str, dx: f64) {
    assert_eq!(engine.begin_resize(&id(column), POINTER, 0.0), EventResult::StartDrag);
    assert_eq!(engine.resize_move(POINTER, dx), EventResult::Consumed);
    for frame in surface.take_frames() {
        engine.on_frame(frame);
    }
    assert_eq!(engine.end_resize(POINTER), EventResult::Consumed);
}

fn assert_operation_column(engine: &TableLayoutEngine) {
    let layout = engine.layout();
    let op = layout.leaf(&id("op")).unwrap();
    assert!(op.operation);
    assert_eq!(op.fixed, Some(FixedSide::Right));
    assert!(!op.resizable);
    assert!(!op.draggable);
    assert_eq!(op.width, Some(72.0));
    assert_eq!(layout.order().last(), Some(&id("op")));
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_resize_reorder_and_persist() {
    let surface = ManualSurface::new();
    let store = LayoutStore::memory();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        surface.clone(),
    );
    assert_operation_column(&engine);

    // Widen A by 50px
    drag_resize(&mut engine, &surface, "A", 50.0);
    assert_eq!(engine.column_width(&id("A")), Some(150.0));
    let mut expected = WidthMap::new();
    expected.insert(id("A"), 150.0);
    assert_eq!(store.read_widths("orders"), expected);
    assert_operation_column(&engine);

    // A huge leftward drag stops at the minimum
    drag_resize(&mut engine, &surface, "A", -1000.0);
    assert_eq!(engine.column_width(&id("A")), Some(60.0));
    assert_eq!(store.read_widths("orders").get(&id("A")), Some(&60.0));

    // Drop A on the right half of B
    assert_eq!(engine.begin_drag(&id("A")), EventResult::StartDrag);
    assert_eq!(engine.drag_over(&id("B")), EventResult::Consumed);
    let b_rect = HeaderRect::new(60.0, 100.0);
    assert_eq!(
        engine.drop_on(&id("B"), 150.0, b_rect, Some("A")),
        EventResult::Consumed
    );
    engine.end_drag();

    assert_eq!(engine.layout().order(), ids(&["B", "A", "op"]));
    assert_eq!(store.read_order("orders"), ids(&["B", "A"]));
    assert_operation_column(&engine);

    // A remount sees the same layout
    let remounted = TableLayoutEngine::new(orders_columns(), orders_config(), store, surface);
    assert_eq!(remounted.layout(), engine.layout());
}

#[test]
fn test_drop_on_left_half_inserts_before() {
    let surface = ManualSurface::new();
    let store = LayoutStore::memory();
    let columns = vec![Column::new("A", "A"), Column::new("B", "B"), Column::new("C", "C")];
    let mut engine = TableLayoutEngine::new(columns, orders_config(), store.clone(), surface);

    engine.begin_drag(&id("C"));
    let b_rect = HeaderRect::new(120.0, 120.0);
    assert_eq!(engine.drop_on(&id("B"), 130.0, b_rect, None), EventResult::Consumed);
    assert_eq!(engine.layout().order(), ids(&["A", "C", "B"]));
    assert!(!engine.is_dragging());
}

// ============================================================================
// Operation Columns
// ============================================================================

#[test]
fn test_operation_column_ignores_persisted_state() {
    let store = LayoutStore::memory();
    let mut widths = WidthMap::new();
    widths.insert(id("op"), 500.0);
    store.write_widths("orders", &widths);
    store.write_order("orders", &ids(&["op", "B", "A"]));

    let engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store,
        ManualSurface::new(),
    );
    assert_operation_column(&engine);
    assert_eq!(engine.layout().order(), ids(&["B", "A", "op"]));
}

#[test]
fn test_operation_column_rejects_gestures() {
    let surface = ManualSurface::new();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        LayoutStore::memory(),
        surface.clone(),
    );

    assert_eq!(engine.begin_resize(&id("op"), POINTER, 0.0), EventResult::Ignored);
    assert_eq!(engine.begin_drag(&id("op")), EventResult::Ignored);
    assert_eq!(surface.captured_count(), 0);

    engine.begin_drag(&id("A"));
    assert_eq!(engine.drag_over(&id("op")), EventResult::Ignored);
    assert_eq!(
        engine.drop_on(&id("op"), 0.0, HeaderRect::new(0.0, 72.0), None),
        EventResult::Ignored
    );
}

#[test]
fn test_explicit_resizable_cannot_unlock_operation_column() {
    let columns = vec![
        Column::new("a", "A"),
        Column::new("actions", "Actions").resizable(true).width(140u32),
    ];
    let engine = TableLayoutEngine::new(
        columns,
        TableConfig::default(),
        LayoutStore::memory(),
        ManualSurface::new(),
    );
    let op = engine.leaf(&id("actions")).unwrap();
    assert!(!op.resizable);
    assert_eq!(op.width, Some(140.0));
}

// ============================================================================
// Order Stability
// ============================================================================

#[test]
fn test_new_column_appends_after_persisted_order() {
    let store = LayoutStore::memory();
    store.write_order("orders", &ids(&["A", "B", "C"]));
    let columns = vec![
        Column::new("A", "A"),
        Column::new("B", "B"),
        Column::new("C", "C"),
        Column::new("D", "D"),
    ];
    let engine = TableLayoutEngine::new(columns, orders_config(), store.clone(), ManualSurface::new());
    assert_eq!(engine.layout().order(), ids(&["A", "B", "C", "D"]));

    store.write_order("orders", &ids(&["C", "A", "B"]));
    let columns = vec![
        Column::new("A", "A"),
        Column::new("B", "B"),
        Column::new("C", "C"),
        Column::new("D", "D"),
    ];
    let engine = TableLayoutEngine::new(columns, orders_config(), store, ManualSurface::new());
    assert_eq!(engine.layout().order(), ids(&["C", "A", "B", "D"]));
}

#[test]
fn test_unknown_order_entries_are_skipped() {
    let store = LayoutStore::memory();
    store.write_order("orders", &ids(&["gone", "B"]));
    let engine = TableLayoutEngine::new(orders_columns(), orders_config(), store, ManualSurface::new());
    assert_eq!(engine.layout().order(), ids(&["B", "A", "op"]));
}

// ============================================================================
// No-op Drops
// ============================================================================

#[test]
fn test_self_drop_writes_nothing() {
    let store = LayoutStore::memory();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        ManualSurface::new(),
    );

    engine.begin_drag(&id("A"));
    assert_eq!(
        engine.drop_on(&id("A"), 90.0, HeaderRect::new(0.0, 100.0), Some("A")),
        EventResult::Ignored
    );
    assert!(store.keys("orders").is_empty());
    assert_eq!(engine.layout().order(), ids(&["A", "B", "op"]));
}

#[test]
fn test_drop_without_drag_or_payload_writes_nothing() {
    let store = LayoutStore::memory();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        ManualSurface::new(),
    );

    assert_eq!(engine.drag_over(&id("B")), EventResult::Ignored);
    assert_eq!(
        engine.drop_on(&id("B"), 150.0, HeaderRect::new(100.0, 100.0), None),
        EventResult::Ignored
    );
    assert!(store.keys("orders").is_empty());
}

#[test]
fn test_payload_recovers_lost_drag() {
    let store = LayoutStore::memory();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        ManualSurface::new(),
    );

    // No begin_drag: the slot was lost, only the payload survives
    assert_eq!(
        engine.drop_on(&id("B"), 10.0, HeaderRect::new(0.0, 100.0), Some("A")),
        EventResult::Consumed
    );
    assert_eq!(store.read_order("orders"), ids(&["A", "B"]));
}

// ============================================================================
// Frames And Teardown
// ============================================================================

#[test]
fn test_moves_coalesce_into_last_candidate() {
    let surface = ManualSurface::new();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        LayoutStore::memory(),
        surface.clone(),
    );

    engine.begin_resize(&id("B"), POINTER, 200.0);
    for x in [210.0, 230.0, 260.0, 245.0] {
        engine.resize_move(POINTER, x);
    }
    assert_eq!(surface.pending_frames().len(), 1);
    // Not applied until the frame fires
    assert_eq!(engine.column_width(&id("B")), Some(100.0));

    let frame = surface.take_frames()[0];
    assert_eq!(engine.on_frame(frame), EventResult::Consumed);
    assert_eq!(engine.column_width(&id("B")), Some(145.0));
    assert_eq!(engine.on_frame(frame), EventResult::Ignored);
}

#[test]
fn test_pointer_up_discards_pending_frame() {
    let surface = ManualSurface::new();
    let store = LayoutStore::memory();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        surface.clone(),
    );

    engine.begin_resize(&id("A"), POINTER, 0.0);
    engine.resize_move(POINTER, 80.0);
    assert_eq!(engine.end_resize(PointerId(2)), EventResult::Ignored);
    assert_eq!(engine.end_resize(POINTER), EventResult::Consumed);

    assert!(surface.pending_frames().is_empty());
    assert_eq!(engine.column_width(&id("A")), Some(100.0));
    assert!(store.read_widths("orders").is_empty());
}

#[test]
fn test_cancel_keeps_applied_width() {
    let surface = ManualSurface::new();
    let store = LayoutStore::memory();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        surface.clone(),
    );
    assert_eq!(engine.cancel_resize(), EventResult::Ignored);

    engine.begin_resize(&id("B"), POINTER, 0.0);
    engine.resize_move(POINTER, 25.0);
    engine.on_frame(surface.take_frames()[0]);
    assert_eq!(engine.cancel_resize(), EventResult::Consumed);

    assert!(!engine.is_resizing());
    assert_eq!(surface.captured_count(), 0);
    assert_eq!(store.read_widths("orders").get(&id("B")), Some(&125.0));
}

#[test]
fn test_out_of_range_stored_width_is_clamped_on_write() {
    let surface = ManualSurface::new();
    let store = LayoutStore::memory();
    let mut seeded = WidthMap::new();
    seeded.insert(id("A"), 5000.0);
    seeded.insert(id("B"), 100.0);
    store.write_widths("orders", &seeded);

    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        surface.clone(),
    );
    assert_eq!(engine.column_width(&id("A")), Some(800.0));

    drag_resize(&mut engine, &surface, "B", 10.0);

    let stored = store.read_widths("orders");
    assert_eq!(stored.get(&id("A")), Some(&800.0));
    assert_eq!(stored.get(&id("B")), Some(&110.0));
    assert!(stored.values().all(|w| (60.0..=800.0).contains(w)));
}

#[test]
fn test_narrowed_bounds_apply_to_every_stored_width() {
    let surface = ManualSurface::new();
    let store = LayoutStore::memory();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        surface.clone(),
    );
    drag_resize(&mut engine, &surface, "A", 400.0);
    assert_eq!(store.read_widths("orders").get(&id("A")), Some(&500.0));

    engine.set_config(orders_config().with_width_bounds(60.0, 300.0));
    drag_resize(&mut engine, &surface, "B", 10.0);

    let stored = store.read_widths("orders");
    assert_eq!(stored.get(&id("A")), Some(&300.0));
    assert_eq!(stored.get(&id("B")), Some(&110.0));
}

#[test]
fn test_drop_mid_drag_releases_everything() {
    let surface = ManualSurface::new();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        LayoutStore::memory(),
        surface.clone(),
    );

    engine.begin_resize(&id("A"), POINTER, 0.0);
    engine.resize_move(POINTER, 30.0);
    assert!(surface.is_captured(POINTER));
    assert_eq!(surface.pending_frames().len(), 1);

    drop(engine);
    assert_eq!(surface.captured_count(), 0);
    assert!(surface.pending_frames().is_empty());
}

#[test]
fn test_schema_change_abandons_gesture() {
    let surface = ManualSurface::new();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        TableConfig::default().with_route("/orders"),
        LayoutStore::memory(),
        surface.clone(),
    );
    let before = engine.storage_key().to_string();

    engine.begin_resize(&id("A"), POINTER, 0.0);
    let mut columns = orders_columns();
    columns.insert(2, Column::new("C", "Status"));
    engine.set_columns(columns);

    assert_ne!(engine.storage_key(), before);
    assert!(!engine.is_resizing());
    assert_eq!(surface.captured_count(), 0);
}

#[test]
fn test_unsupported_surface_keeps_fixed_size() {
    let store = LayoutStore::memory();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        Arc::new(UnsupportedSurface),
    );

    engine.begin_resize(&id("A"), POINTER, 0.0);
    assert_eq!(engine.resize_move(POINTER, 50.0), EventResult::Ignored);
    engine.end_resize(POINTER);

    assert_eq!(engine.column_width(&id("A")), Some(100.0));
    assert!(store.read_widths("orders").is_empty());
}

#[test]
fn test_unavailable_store_keeps_in_memory_layout() {
    let surface = ManualSurface::new();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        LayoutStore::new(UnavailableBackend),
        surface.clone(),
    );

    drag_resize(&mut engine, &surface, "B", 20.0);
    assert_eq!(engine.column_width(&id("B")), Some(120.0));
}

// ============================================================================
// Grouped Headers
// ============================================================================

#[test]
fn test_grouped_schema_disables_reorder() {
    let surface = ManualSurface::new();
    let store = LayoutStore::memory();
    store.write_order("grouped", &ids(&["1", "0"]));
    let columns = vec![
        Column::new("name", "Name"),
        Column::group(
            "Totals",
            vec![Column::new("qty", "Qty"), Column::new("sum", "Sum")],
        ),
    ];
    let mut engine = TableLayoutEngine::new(
        columns,
        TableConfig::default().with_storage_key("grouped"),
        store.clone(),
        surface.clone(),
    );

    let layout = engine.layout();
    assert!(!layout.reorderable);
    assert_eq!(layout.order(), ids(&["name", "1"]));
    assert_eq!(engine.begin_drag(&id("name")), EventResult::Ignored);

    // Leaves inside the group still resize and persist
    drag_resize(&mut engine, &surface, "sum", 30.0);
    assert_eq!(store.read_widths("grouped").get(&id("sum")), Some(&150.0));
    assert_eq!(engine.begin_resize(&id("1"), POINTER, 0.0), EventResult::Ignored);
}

#[test]
fn test_reset_layout_clears_store() {
    let surface = ManualSurface::new();
    let store = LayoutStore::memory();
    let mut engine = TableLayoutEngine::new(
        orders_columns(),
        orders_config(),
        store.clone(),
        surface.clone(),
    );
    drag_resize(&mut engine, &surface, "A", 40.0);
    engine.begin_drag(&id("B"));
    engine.drop_on(&id("A"), 0.0, HeaderRect::new(0.0, 140.0), None);
    assert_eq!(store.keys("orders").len(), 2);

    engine.reset_layout();
    assert!(store.keys("orders").is_empty());
    assert_eq!(engine.column_width(&id("A")), Some(100.0));
    assert_eq!(engine.layout().order(), ids(&["A", "B", "op"]));
}
