//! Selection set semantics and bounds derivation.

use crate::helpers::{CanvasBuilder, add_element};
use reportcanvas::SelectionManager;
use reportcanvas::geometry::Rect;
use reportcanvas::store::ElementStore;

#[test]
fn test_select_only_is_exclusive() {
    let mut sel = SelectionManager::new();
    sel.set_many([1, 2, 3]);

    assert!(sel.select_only(2));
    assert_eq!(sel.sorted_ids(), vec![2]);
    assert_eq!(sel.single(), Some(2));
}

#[test]
fn test_toggle_and_add_modifier_semantics() {
    let mut sel = SelectionManager::new();

    // Ctrl-click adds, ctrl-click again removes.
    sel.toggle(1);
    sel.toggle(2);
    assert_eq!(sel.sorted_ids(), vec![1, 2]);
    sel.toggle(1);
    assert_eq!(sel.sorted_ids(), vec![2]);

    // Shift-click only ever adds.
    sel.add(2);
    sel.add(9);
    assert_eq!(sel.sorted_ids(), vec![2, 9]);
}

#[test]
fn test_set_from_rect_replaces_with_intersecting_visible() {
    let store = CanvasBuilder::new()
        .element(Rect::new(0.0, 0.0, 50.0, 50.0))
        .element(Rect::new(100.0, 0.0, 50.0, 50.0))
        .hidden(Rect::new(30.0, 30.0, 50.0, 50.0))
        .build();

    let mut sel = SelectionManager::new();
    sel.add(2);

    let changed = sel.set_from_rect(&Rect::new(0.0, 0.0, 60.0, 60.0), &store);
    assert!(changed);
    assert_eq!(sel.sorted_ids(), vec![1]);
}

#[test]
fn test_set_from_rect_empty_result_is_valid() {
    let store = CanvasBuilder::new()
        .element(Rect::new(0.0, 0.0, 10.0, 10.0))
        .build();

    let mut sel = SelectionManager::new();
    sel.add(1);
    assert!(sel.set_from_rect(&Rect::new(500.0, 500.0, 10.0, 10.0), &store));
    assert!(sel.is_empty());
}

#[test]
fn test_bounds_unions_selected_rects() {
    let mut store = ElementStore::new();
    let a = add_element(&mut store, Rect::new(10.0, 10.0, 20.0, 20.0));
    let b = add_element(&mut store, Rect::new(50.0, 40.0, 30.0, 10.0));
    add_element(&mut store, Rect::new(500.0, 500.0, 10.0, 10.0));

    let mut sel = SelectionManager::new();
    sel.set_many([a, b]);

    assert_eq!(sel.bounds(&store), Rect::new(10.0, 10.0, 70.0, 40.0));
}

#[test]
fn test_stale_ids_are_treated_as_deselected() {
    let mut store = ElementStore::new();
    let a = add_element(&mut store, Rect::new(0.0, 0.0, 10.0, 10.0));

    let mut sel = SelectionManager::new();
    sel.set_many([a, 777]);
    store.remove(a);

    // Nothing resolvable left: degenerate bounds, no panic.
    assert_eq!(sel.bounds(&store), Rect::ZERO);
}
