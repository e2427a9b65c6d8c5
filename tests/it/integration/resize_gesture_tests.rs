//! Resize gesture workflows: handle grabs, modifier policies, throttling.

use crate::helpers::*;
use reportcanvas::GestureKind;
use reportcanvas::geometry::{Point, Rect, Size};

/// One selected 100x50 element at (100, 100).
fn selected_store() -> (reportcanvas::ElementStore, reportcanvas::InteractionEngine) {
    let store = CanvasBuilder::new()
        .element(Rect::new(100.0, 100.0, 100.0, 50.0))
        .build();
    let mut engine = unthrottled_engine();
    engine.selection_mut().select_only(1);
    (store, engine)
}

#[test]
fn test_se_handle_grab_resizes_without_threshold() {
    init_tracing();
    let (mut store, mut engine) = selected_store();
    let mut sink = RecordingSink::new();

    // Press exactly on the se corner: the gesture starts immediately.
    engine.pointer_down(&store, Point::new(200.0, 150.0), no_mods(), &mut sink);
    assert_eq!(engine.gesture_kind(), GestureKind::Resizing);

    engine.pointer_move(&store, Point::new(250.0, 180.0), no_mods(), &mut sink);
    engine.pointer_up(&store, Point::new(250.0, 180.0), no_mods(), &mut sink);

    assert_eq!(
        sink.last_resize(),
        Some((1, Size::new(150.0, 80.0), Point::new(100.0, 100.0)))
    );
    apply_intents(&mut store, &sink.intents);
    assert_eq!(store.get(1).unwrap().rect(), Rect::new(100.0, 100.0, 150.0, 80.0));
}

#[test]
fn test_nw_handle_moves_origin_with_size() {
    let (mut store, mut engine) = selected_store();
    let mut sink = RecordingSink::new();

    engine.pointer_down(&store, Point::new(100.0, 100.0), no_mods(), &mut sink);
    engine.pointer_move(&store, Point::new(80.0, 90.0), no_mods(), &mut sink);
    engine.pointer_up(&store, Point::new(80.0, 90.0), no_mods(), &mut sink);

    apply_intents(&mut store, &sink.intents);
    assert_eq!(store.get(1).unwrap().rect(), Rect::new(80.0, 90.0, 120.0, 60.0));
}

#[test]
fn test_edge_handle_affects_one_axis() {
    let (mut store, mut engine) = selected_store();
    let mut sink = RecordingSink::new();

    // The east edge midpoint sits at (200, 125).
    engine.pointer_down(&store, Point::new(200.0, 125.0), no_mods(), &mut sink);
    assert_eq!(engine.gesture_kind(), GestureKind::Resizing);
    engine.pointer_move(&store, Point::new(230.0, 170.0), no_mods(), &mut sink);
    engine.pointer_up(&store, Point::new(230.0, 170.0), no_mods(), &mut sink);

    apply_intents(&mut store, &sink.intents);
    assert_eq!(store.get(1).unwrap().rect(), Rect::new(100.0, 100.0, 130.0, 50.0));
}

#[test]
fn test_shift_resize_preserves_aspect_ratio() {
    let (mut store, mut engine) = selected_store();
    let mut sink = RecordingSink::new();

    engine.pointer_down(&store, Point::new(200.0, 150.0), shift(), &mut sink);
    engine.pointer_move(&store, Point::new(250.0, 200.0), shift(), &mut sink);
    engine.pointer_up(&store, Point::new(250.0, 200.0), shift(), &mut sink);

    apply_intents(&mut store, &sink.intents);
    let rect = store.get(1).unwrap().rect();
    assert_eq!(rect.size(), Size::new(150.0, 75.0));
    assert_eq!(rect.width / rect.height, 2.0);
}

#[test]
fn test_alt_resize_keeps_center_fixed() {
    let (mut store, mut engine) = selected_store();
    let mut sink = RecordingSink::new();

    let before = store.get(1).unwrap().rect().center();

    engine.pointer_down(&store, Point::new(200.0, 150.0), alt(), &mut sink);
    engine.pointer_move(&store, Point::new(220.0, 160.0), alt(), &mut sink);
    engine.pointer_up(&store, Point::new(220.0, 160.0), alt(), &mut sink);

    apply_intents(&mut store, &sink.intents);
    let rect = store.get(1).unwrap().rect();
    assert_eq!(rect.center(), before);
    assert_eq!(rect.size(), Size::new(120.0, 60.0));
}

#[test]
fn test_resize_respects_minimum_size() {
    let (mut store, mut engine) = selected_store();
    let mut sink = RecordingSink::new();

    engine.pointer_down(&store, Point::new(200.0, 150.0), no_mods(), &mut sink);
    engine.pointer_move(&store, Point::new(0.0, 0.0), no_mods(), &mut sink);
    engine.pointer_up(&store, Point::new(0.0, 0.0), no_mods(), &mut sink);

    apply_intents(&mut store, &sink.intents);
    let size = store.get(1).unwrap().size;
    assert_eq!(size, Size::new(20.0, 20.0));
}

#[test]
fn test_resize_recomputes_from_initial_not_intermediate() {
    let (mut store, mut engine) = selected_store();
    let mut sink = RecordingSink::new();

    engine.pointer_down(&store, Point::new(200.0, 150.0), no_mods(), &mut sink);
    // Overshoot far out, then come back: the final rect depends only on
    // the release position.
    engine.pointer_move(&store, Point::new(400.0, 300.0), no_mods(), &mut sink);
    engine.pointer_move(&store, Point::new(210.0, 155.0), no_mods(), &mut sink);
    engine.pointer_up(&store, Point::new(210.0, 155.0), no_mods(), &mut sink);

    apply_intents(&mut store, &sink.intents);
    assert_eq!(store.get(1).unwrap().rect(), Rect::new(100.0, 100.0, 110.0, 55.0));
}

#[test]
fn test_no_handles_on_locked_element() {
    let store = CanvasBuilder::new()
        .locked(Rect::new(100.0, 100.0, 100.0, 50.0))
        .build();
    let mut engine = unthrottled_engine();
    let mut sink = RecordingSink::new();

    engine.selection_mut().select_only(1);
    assert!(engine.handle_under(&store, Point::new(200.0, 150.0)).is_none());

    // The corner press falls through to click handling.
    engine.pointer_down(&store, Point::new(200.0, 150.0), no_mods(), &mut sink);
    assert_eq!(engine.gesture_kind(), GestureKind::Clicking);
    engine.pointer_move(&store, Point::new(260.0, 190.0), no_mods(), &mut sink);
    engine.pointer_up(&store, Point::new(260.0, 190.0), no_mods(), &mut sink);

    assert!(sink.resize_intents().is_empty());
}

#[test]
fn test_no_handles_on_multi_selection() {
    let store = CanvasBuilder::new()
        .element(Rect::new(100.0, 100.0, 100.0, 50.0))
        .element(Rect::new(300.0, 100.0, 50.0, 50.0))
        .build();
    let mut engine = unthrottled_engine();
    let mut sink = RecordingSink::new();

    engine.selection_mut().set_many([1, 2]);

    // With two elements selected there is nothing to grab; the press on
    // the corner of element 1 arms a drag instead.
    assert!(engine.handle_under(&store, Point::new(200.0, 150.0)).is_none());
    engine.pointer_down(&store, Point::new(200.0, 150.0), no_mods(), &mut sink);
    assert_eq!(engine.gesture_kind(), GestureKind::Pending);
}

#[test]
fn test_resize_throttling_still_sends_final_update() {
    use reportcanvas::{InteractionConfig, InteractionEngine};

    let store = CanvasBuilder::new()
        .element(Rect::new(100.0, 100.0, 100.0, 50.0))
        .build();
    let mut engine = InteractionEngine::new(InteractionConfig {
        update_throttle_ms: 600_000,
        ..InteractionConfig::default()
    });
    let mut sink = RecordingSink::new();

    engine.selection_mut().select_only(1);

    engine.pointer_down(&store, Point::new(200.0, 150.0), no_mods(), &mut sink);
    engine.pointer_move(&store, Point::new(210.0, 150.0), no_mods(), &mut sink);
    engine.pointer_move(&store, Point::new(220.0, 150.0), no_mods(), &mut sink);
    engine.pointer_move(&store, Point::new(230.0, 150.0), no_mods(), &mut sink);
    engine.pointer_up(&store, Point::new(240.0, 155.0), no_mods(), &mut sink);

    // First move passes the gate, the rest are suppressed, release is
    // authoritative.
    assert_eq!(sink.resize_intents().len(), 2);
    assert_eq!(
        sink.last_resize(),
        Some((1, Size::new(140.0, 55.0), Point::new(100.0, 100.0)))
    );
}
