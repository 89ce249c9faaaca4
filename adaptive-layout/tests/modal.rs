use adaptive_layout::modal::{
    ModalConfig, ModalSize, ModalSizer, ResizeDirection, TableScrollY, initial_size,
    resolve_width_px, viewport_max,
};
use adaptive_layout::{EventResult, Length, ManualSurface, PointerId, Viewport};
use proptest::prelude::*;

const POINTER: PointerId = PointerId(4);

fn desktop() -> Viewport {
    Viewport::new(1000.0, 800.0)
}

// ============================================================================
// Width Resolution
// ============================================================================

#[test]
fn test_vw_width_resolves_against_viewport() {
    let width: Length = "50vw".parse().unwrap();
    assert_eq!(resolve_width_px(&width, desktop()), 500.0);

    let config = ModalConfig::default().with_width(width).with_min_size(300.0, 200.0);
    assert_eq!(initial_size(&config, desktop()).width, 500.0);
}

#[test]
fn test_oversized_width_clamps_to_viewport_max() {
    let config = ModalConfig::default().with_width(9999u32);
    assert_eq!(viewport_max(desktop()).width, 980.0);
    assert_eq!(initial_size(&config, desktop()).width, 980.0);
}

#[test]
fn test_unparsable_width_uses_default_ratio() {
    let config: ModalConfig = serde_json::from_str(r#"{"width": "auto"}"#).unwrap();
    // 1000 wide is below the 1024 breakpoint
    assert_eq!(initial_size(&config, desktop()).width, 700.0);
}

#[test]
fn test_width_below_minimum_clamps_up() {
    let config = ModalConfig::default().with_width("200px".parse::<Length>().unwrap());
    assert_eq!(initial_size(&config, desktop()).width, 520.0);
}

// ============================================================================
// Open Transitions
// ============================================================================

#[test]
fn test_reopen_reflects_current_viewport() {
    let surface = ManualSurface::new();
    let config = ModalConfig::default().with_width("80vw".parse::<Length>().unwrap());
    let mut sizer = ModalSizer::new(config, surface, desktop());

    sizer.set_open(true, desktop());
    assert_eq!(sizer.size().width, 800.0);

    sizer.set_open(false, desktop());
    sizer.set_open(true, Viewport::new(1600.0, 900.0));
    assert_eq!(sizer.size().width, 1280.0);
}

#[test]
fn test_staying_open_keeps_user_size() {
    let surface = ManualSurface::new();
    let mut sizer = ModalSizer::new(ModalConfig::default(), surface.clone(), desktop());
    sizer.set_open(true, desktop());

    sizer.begin_resize(ResizeDirection::X, POINTER, 0.0, 0.0);
    sizer.resize_move(POINTER, 100.0, 0.0);
    sizer.on_frame(surface.take_frames()[0]);
    sizer.end_resize(POINTER);
    let resized = sizer.size();

    sizer.set_open(true, Viewport::new(1200.0, 800.0));
    assert_eq!(sizer.size(), resized);
}

#[test]
fn test_viewport_shrink_pulls_size_inside() {
    let surface = ManualSurface::new();
    let config = ModalConfig::default().with_width(900u32).with_initial_height(700.0);
    let mut sizer = ModalSizer::new(config, surface, desktop());
    sizer.set_open(true, desktop());
    assert_eq!(sizer.size(), ModalSize::new(900.0, 700.0));

    sizer.set_viewport(Viewport::new(800.0, 600.0));
    assert_eq!(sizer.size(), ModalSize::new(784.0, 570.0));
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_corner_resize_clamps_both_axes() {
    let surface = ManualSurface::new();
    let config = ModalConfig::default().with_width(600u32).with_initial_height(400.0);
    let mut sizer = ModalSizer::new(config, surface.clone(), desktop());
    sizer.set_open(true, desktop());

    assert_eq!(
        sizer.begin_resize(ResizeDirection::Both, POINTER, 500.0, 400.0),
        EventResult::StartDrag
    );
    for (x, y) in [(520.0, 410.0), (900.0, 900.0), (5000.0, 5000.0)] {
        assert_eq!(sizer.resize_move(POINTER, x, y), EventResult::Consumed);
    }
    let frames = surface.take_frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(sizer.on_frame(frames[0]), EventResult::Consumed);
    assert_eq!(sizer.size(), ModalSize::new(980.0, 760.0));

    sizer.resize_move(POINTER, -5000.0, -5000.0);
    sizer.on_frame(surface.take_frames()[0]);
    assert_eq!(sizer.size(), ModalSize::new(520.0, 320.0));
    assert_eq!(sizer.end_resize(POINTER), EventResult::Consumed);
    assert!(!surface.is_captured(POINTER));
}

#[test]
fn test_drop_mid_resize_releases_everything() {
    let surface = ManualSurface::new();
    let mut sizer = ModalSizer::new(ModalConfig::default(), surface.clone(), desktop());
    sizer.set_open(true, desktop());
    sizer.begin_resize(ResizeDirection::Both, POINTER, 0.0, 0.0);
    sizer.resize_move(POINTER, 10.0, 10.0);

    drop(sizer);
    assert_eq!(surface.captured_count(), 0);
    assert!(surface.pending_frames().is_empty());
}

// ============================================================================
// Table Scroll Height
// ============================================================================

#[test]
fn test_table_scroll_y_follows_container() {
    let mut scroll = TableScrollY::default();
    assert_eq!(scroll.observe(false, 800.0), 320.0);
    assert_eq!(scroll.observe(true, 500.9), 444.0);
    assert_eq!(scroll.observe(true, 0.0), 180.0);
}

proptest! {
    #[test]
    fn prop_initial_size_within_viewport_bounds(
        width in 0.0f64..20_000.0,
        height in proptest::option::of(0.0f64..20_000.0),
        vw in 200.0f64..4000.0,
        vh in 200.0f64..3000.0,
    ) {
        let mut config = ModalConfig::default().with_width(width);
        config.initial_height = height;
        let viewport = Viewport::new(vw, vh);
        let max = viewport_max(viewport);
        let size = initial_size(&config, viewport);

        prop_assert!(size.width <= max.width && size.height <= max.height);
        prop_assert!(size.width >= config.min_width.min(max.width));
        prop_assert!(size.height >= config.min_height.min(max.height));
    }
}
