use super::*;

use drawerkit_core::Point;

#[test]
fn tracker_accumulates_vertical_delta_from_anchor() {
    let mut tracker = DragTracker::new();
    tracker.begin(Point::new(200.0, 500.0));
    assert!(tracker.is_active());

    assert_eq!(tracker.update(Point::new(200.0, 470.0)), Some(-30.0));
    assert_eq!(tracker.update(Point::new(210.0, 440.0)), Some(-60.0));
    assert_eq!(tracker.delta(), -60.0);

    assert_eq!(tracker.finish(), Some(-60.0));
    assert!(!tracker.is_active());
    assert_eq!(tracker.delta(), 0.0);
}

#[test]
fn update_without_begin_is_ignored() {
    let mut tracker = DragTracker::new();
    assert_eq!(tracker.update(Point::new(0.0, 100.0)), None);
    assert_eq!(tracker.finish(), None);
}

#[test]
fn cancel_discards_the_gesture() {
    let mut tracker = DragTracker::new();
    tracker.begin(Point::new(0.0, 500.0));
    tracker.update(Point::new(0.0, 450.0));
    tracker.cancel();

    assert!(!tracker.is_active());
    assert_eq!(tracker.finish(), None);
}

#[test]
fn zero_movement_finishes_with_zero_delta() {
    let mut tracker = DragTracker::new();
    tracker.begin(Point::new(100.0, 500.0));
    assert_eq!(tracker.finish(), Some(0.0));
}

#[test]
fn consumption_is_shared_across_clones() {
    let event = PointerEvent::new(PointerEventKind::Move, Point::new(0.0, 100.0));
    let clone = event.clone();
    assert!(!clone.is_consumed());

    event.consume();
    assert!(clone.is_consumed());
}
