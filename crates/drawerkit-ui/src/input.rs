//! Pointer events and drag bookkeeping.
//!
//! Events carry shared consumption state so the drawer can claim moves once a
//! drag is in progress and keep handlers below it from also reacting.

use drawerkit_core::Point;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Debug)]
pub struct PointerEvent {
    kind: PointerEventKind,
    position: Point,
    /// Shared via Rc<Cell> so consumption is visible across clones.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Mark this event as consumed, preventing other handlers from
    /// processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

/// Tracks one touch interaction: the anchor where the pointer went down and
/// the cumulative vertical delta since.
#[derive(Debug, Default)]
pub struct DragTracker {
    anchor_y: Option<f32>,
    dy: f32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.anchor_y.is_some()
    }

    /// Cumulative vertical delta since the drag began.
    pub fn delta(&self) -> f32 {
        self.dy
    }

    pub fn begin(&mut self, position: Point) {
        self.anchor_y = Some(position.y);
        self.dy = 0.0;
    }

    /// Update with a new pointer position; returns the cumulative delta, or
    /// `None` if no drag is active.
    pub fn update(&mut self, position: Point) -> Option<f32> {
        let anchor_y = self.anchor_y?;
        self.dy = position.y - anchor_y;
        Some(self.dy)
    }

    /// End the drag, returning the final cumulative delta if one was active.
    pub fn finish(&mut self) -> Option<f32> {
        let active = self.anchor_y.take().is_some();
        let dy = self.dy;
        self.dy = 0.0;
        active.then_some(dy)
    }

    pub fn cancel(&mut self) {
        self.anchor_y = None;
        self.dy = 0.0;
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
