//! Resize transform tests: base table, modifier policies, size floor.

use reportcanvas::geometry::{Point, Rect, Size, Vec2};
use reportcanvas::resize::{Handle, compute_resize};
use reportcanvas::types::Modifiers;

const MIN: f32 = 20.0;

fn rect_100x50() -> Rect {
    Rect::new(100.0, 100.0, 100.0, 50.0)
}

#[test]
fn test_se_grow_keeps_origin() {
    let out = compute_resize(
        Handle::Se,
        Vec2::new(50.0, 30.0),
        rect_100x50(),
        Modifiers::NONE,
        MIN,
    );
    assert_eq!(out.size, Size::new(150.0, 80.0));
    assert_eq!(out.position, Point::new(100.0, 100.0));
}

#[test]
fn test_nw_shrink_moves_origin() {
    let out = compute_resize(
        Handle::Nw,
        Vec2::new(-20.0, -10.0),
        rect_100x50(),
        Modifiers::NONE,
        MIN,
    );
    assert_eq!(out.size, Size::new(120.0, 60.0));
    assert_eq!(out.position, Point::new(80.0, 90.0));
}

#[test]
fn test_aspect_lock_preserves_two_to_one_ratio() {
    let shift = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };
    let out = compute_resize(Handle::Se, Vec2::new(50.0, 50.0), rect_100x50(), shift, MIN);

    assert_eq!(out.size, Size::new(150.0, 75.0));
    assert_eq!(out.position, Point::new(100.0, 100.0));
    assert_eq!(out.size.width / out.size.height, 2.0);
}

#[test]
fn test_size_floors_at_minimum() {
    let out = compute_resize(
        Handle::Se,
        Vec2::new(-50.0, -50.0),
        Rect::new(10.0, 10.0, 30.0, 30.0),
        Modifiers::NONE,
        MIN,
    );
    assert_eq!(out.size, Size::new(20.0, 20.0));
}

#[test]
fn test_center_anchor_with_aspect_lock() {
    // Both modifiers: aspect fixes the proportions, alt re-centers.
    let both = Modifiers {
        shift: true,
        alt: true,
        ..Modifiers::NONE
    };
    let initial = rect_100x50();
    let out = compute_resize(Handle::Se, Vec2::new(50.0, 50.0), initial, both, MIN);

    assert_eq!(out.size, Size::new(150.0, 75.0));
    let result = Rect::from_origin_size(out.position, out.size);
    assert_eq!(result.center(), initial.center());
}

#[test]
fn test_center_anchor_applies_to_edge_handles() {
    let alt = Modifiers {
        alt: true,
        ..Modifiers::NONE
    };
    let initial = rect_100x50();
    let out = compute_resize(Handle::E, Vec2::new(30.0, 0.0), initial, alt, MIN);

    assert_eq!(out.size, Size::new(130.0, 50.0));
    let result = Rect::from_origin_size(out.position, out.size);
    assert_eq!(result.center(), initial.center());
}

#[test]
fn test_edge_handles_affect_single_axis() {
    let initial = rect_100x50();

    let out = compute_resize(Handle::N, Vec2::new(99.0, -10.0), initial, Modifiers::NONE, MIN);
    assert_eq!(out.size, Size::new(100.0, 60.0));
    assert_eq!(out.position, Point::new(100.0, 90.0));

    let out = compute_resize(Handle::W, Vec2::new(-15.0, 99.0), initial, Modifiers::NONE, MIN);
    assert_eq!(out.size, Size::new(115.0, 50.0));
    assert_eq!(out.position, Point::new(85.0, 100.0));
}

#[test]
fn test_delta_always_measured_from_initial() {
    // Growing deltas model one continuous gesture; each call must answer
    // as if it were the only one.
    let initial = rect_100x50();
    for step in 1..=10 {
        let delta = Vec2::new(step as f32 * 5.0, step as f32 * 3.0);
        let out = compute_resize(Handle::Se, delta, initial, Modifiers::NONE, MIN);
        assert_eq!(out.size, Size::new(100.0 + delta.x, 50.0 + delta.y));
    }
}
