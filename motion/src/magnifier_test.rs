#![allow(clippy::float_cmp)]

use super::*;

fn image() -> Size {
    Size::new(400.0, 300.0)
}

fn magnifier() -> Magnifier {
    Magnifier::new(MagnifierConfig::default())
}

// =============================================================
// Config
// =============================================================

#[test]
fn default_config_values() {
    let c = MagnifierConfig::default();
    assert_eq!(c.lens_size, 120.0);
    assert_eq!(c.zoom, 2.0);
    assert_eq!(c.touch_offset_y, -70.0);
    assert_eq!(c.long_press_ms, 300);
}

// =============================================================
// Pointer input
// =============================================================

#[test]
fn hidden_until_pointer_enters() {
    let mut m = magnifier();
    m.pointer_move(Point::new(50.0, 50.0), image());
    assert!(m.lens().is_none());
    m.pointer_enter();
    assert!(m.lens().is_some());
}

#[test]
fn pointer_leave_hides() {
    let mut m = magnifier();
    m.pointer_enter();
    m.pointer_leave();
    assert!(!m.is_visible());
}

#[test]
fn pointer_lens_is_centered_on_pointer() {
    let mut m = magnifier();
    m.pointer_enter();
    m.pointer_move(Point::new(200.0, 150.0), image());
    let lens = m.geometry();
    assert_eq!(lens.left, 140.0);
    assert_eq!(lens.top, 90.0);
    assert_eq!(lens.size, 120.0);
}

#[test]
fn pointer_background_offset_inside_image() {
    let mut m = magnifier();
    m.pointer_move(Point::new(100.0, 50.0), image());
    let lens = m.geometry();
    // -(100 * 2 - 60) = -140, -(50 * 2 - 60) = -40
    assert_eq!(lens.background_x, -140.0);
    assert_eq!(lens.background_y, -40.0);
    assert_eq!(lens.background_width, 800.0);
    assert_eq!(lens.background_height, 600.0);
}

#[test]
fn pointer_at_origin_offsets_by_half_lens() {
    let mut m = magnifier();
    m.pointer_move(Point::new(0.0, 0.0), image());
    let lens = m.geometry();
    assert_eq!(lens.background_x, 60.0);
    assert_eq!(lens.background_y, 60.0);
}

// =============================================================
// Clamping
// =============================================================

#[test]
fn sample_clamps_for_points_outside_image() {
    let mut m = magnifier();
    let outside = [
        Point::new(-50.0, -50.0),
        Point::new(900.0, 20.0),
        Point::new(20.0, 900.0),
        Point::new(1e6, -1e6),
        Point::new(-0.5, 300.5),
    ];
    for p in outside {
        m.pointer_move(p, image());
        let lens = m.geometry();
        assert!((0.0..=400.0).contains(&lens.sample.x), "x out of range for {p:?}");
        assert!((0.0..=300.0).contains(&lens.sample.y), "y out of range for {p:?}");
    }
}

#[test]
fn sample_clamps_to_far_corner() {
    let mut m = magnifier();
    m.pointer_move(Point::new(1000.0, 1000.0), image());
    let lens = m.geometry();
    assert_eq!(lens.sample, Point::new(400.0, 300.0));
    assert_eq!(lens.background_x, -(400.0 * 2.0 - 60.0));
    assert_eq!(lens.background_y, -(300.0 * 2.0 - 60.0));
}

#[test]
fn lens_itself_is_not_clamped() {
    let mut m = magnifier();
    m.pointer_move(Point::new(-100.0, -100.0), image());
    let lens = m.geometry();
    assert_eq!(lens.left, -160.0);
    assert_eq!(lens.top, -160.0);
}

#[test]
fn unmeasured_image_gives_degenerate_sample() {
    let mut m = magnifier();
    m.pointer_move(Point::new(75.0, 75.0), Size::default());
    let lens = m.geometry();
    assert_eq!(lens.sample, Point::new(0.0, 0.0));
    assert_eq!(lens.background_width, 0.0);
    assert_eq!(lens.background_x, 60.0);
}

// =============================================================
// Touch input
// =============================================================

#[test]
fn touch_start_is_pending_and_hidden() {
    let mut m = magnifier();
    let ticket = m.touch_start(Point::new(100.0, 100.0), image());
    assert_eq!(m.touch_phase(), TouchPhase::Pending { ticket });
    assert!(m.lens().is_none());
}

#[test]
fn long_press_activates_lens() {
    let mut m = magnifier();
    let ticket = m.touch_start(Point::new(100.0, 100.0), image());
    assert!(m.long_press_elapsed(ticket));
    assert_eq!(m.touch_phase(), TouchPhase::Active);
    assert!(m.lens().is_some());
}

#[test]
fn touch_lens_is_lifted_above_finger() {
    let mut m = magnifier();
    let ticket = m.touch_start(Point::new(200.0, 200.0), image());
    m.long_press_elapsed(ticket);
    let lens = m.geometry();
    assert_eq!(lens.left, 140.0);
    assert_eq!(lens.top, 200.0 - 60.0 - 70.0);
    // Sample follows the lens center, not the finger.
    assert_eq!(lens.sample, Point::new(200.0, 130.0));
}

#[test]
fn movement_before_long_press_cancels() {
    let mut m = magnifier();
    let ticket = m.touch_start(Point::new(100.0, 100.0), image());
    assert_eq!(m.touch_move(Point::new(100.0, 140.0), image()), TouchMove::Cancelled);
    assert_eq!(m.touch_phase(), TouchPhase::Idle);
    assert!(!m.long_press_elapsed(ticket));
    assert!(!m.is_visible());
}

#[test]
fn cancelled_move_keeps_start_position() {
    let mut m = magnifier();
    m.touch_start(Point::new(100.0, 100.0), image());
    m.touch_move(Point::new(10.0, 10.0), image());
    assert_eq!(m.geometry().left, 40.0);
}

#[test]
fn active_move_tracks_and_prevents_scroll() {
    let mut m = magnifier();
    let ticket = m.touch_start(Point::new(100.0, 100.0), image());
    m.long_press_elapsed(ticket);
    let outcome = m.touch_move(Point::new(150.0, 180.0), image());
    assert_eq!(outcome, TouchMove::Tracked { prevent_scroll: true });
    assert_eq!(m.geometry().left, 90.0);
}

#[test]
fn idle_move_tracks_without_preventing_scroll() {
    let mut m = magnifier();
    let outcome = m.touch_move(Point::new(10.0, 10.0), image());
    assert_eq!(outcome, TouchMove::Tracked { prevent_scroll: false });
}

#[test]
fn touch_end_hides_and_resets() {
    let mut m = magnifier();
    let ticket = m.touch_start(Point::new(100.0, 100.0), image());
    m.long_press_elapsed(ticket);
    m.touch_end();
    assert!(!m.is_visible());
    assert_eq!(m.touch_phase(), TouchPhase::Idle);
    // Next lens is laid out for the mouse again, with no touch lift.
    assert_eq!(m.geometry().top, 40.0);
}

#[test]
fn touch_end_before_long_press_disarms_timer() {
    let mut m = magnifier();
    let ticket = m.touch_start(Point::new(100.0, 100.0), image());
    m.touch_end();
    assert!(!m.long_press_elapsed(ticket));
    assert!(!m.is_visible());
}

#[test]
fn stale_ticket_from_previous_press_is_ignored() {
    let mut m = magnifier();
    let first = m.touch_start(Point::new(100.0, 100.0), image());
    m.touch_end();
    let second = m.touch_start(Point::new(120.0, 120.0), image());
    assert_ne!(first, second);
    assert!(!m.long_press_elapsed(first));
    assert_eq!(m.touch_phase(), TouchPhase::Pending { ticket: second });
    assert!(m.long_press_elapsed(second));
}

#[test]
fn long_press_elapsed_twice_only_activates_once() {
    let mut m = magnifier();
    let ticket = m.touch_start(Point::new(100.0, 100.0), image());
    assert!(m.long_press_elapsed(ticket));
    assert!(!m.long_press_elapsed(ticket));
}

// =============================================================
// Style
// =============================================================

#[test]
fn style_contains_position_and_background() {
    let mut m = magnifier();
    m.pointer_move(Point::new(100.0, 50.0), image());
    let style = m.geometry().style();
    assert!(style.contains("left: 40px"));
    assert!(style.contains("top: -10px"));
    assert!(style.contains("width: 120px"));
    assert!(style.contains("background-size: 800px 600px"));
    assert!(style.contains("background-position: -140px -40px"));
}
