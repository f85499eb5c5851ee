//! Gesture-to-animation core of the drawer.
//!
//! The animator owns the animated position and interprets drags and
//! programmatic commands against the two rest positions. Drags set the
//! position directly each frame; transitions delegate to the animation layer.
//! A transition issued while another is in flight simply retakes the animated
//! value (last write wins), and a drag issued mid-transition does the same.

use drawerkit_animation::{Animatable, AnimationType, Easing, SpringSpec, TweenSpec};
use drawerkit_core::{Point, Rect, RuntimeHandle, State};
use log::{debug, trace};

use crate::callbacks::DrawerCallbacks;
use crate::config::{ConfigError, DrawerConfig};
use crate::drawer_state::DrawerState;
use crate::input::{DragTracker, PointerEvent, PointerEventKind};
use crate::style::DrawerStyle;

/// Duration of the timed open transition.
const OPEN_TWEEN_MILLIS: u64 = 250;

pub struct Animator {
    config: DrawerConfig,
    callbacks: DrawerCallbacks,
    position: Animatable<Point>,
    resting: DrawerState,
    tracker: DragTracker,
}

impl Animator {
    pub fn new(
        config: DrawerConfig,
        initial_state: DrawerState,
        callbacks: DrawerCallbacks,
        runtime: RuntimeHandle,
    ) -> Self {
        let position = Animatable::new(config.rest_position(initial_state), runtime);
        Self {
            config,
            callbacks,
            position,
            resting: initial_state,
            tracker: DragTracker::new(),
        }
    }

    /// Logical state the drawer currently rests at (or is transitioning
    /// toward).
    pub fn drawer_state(&self) -> DrawerState {
        self.resting
    }

    /// Rest position of the current logical state.
    pub fn rest_position(&self) -> Point {
        self.config.rest_position(self.resting)
    }

    /// Current animated position.
    pub fn current_position(&self) -> Point {
        self.position.value()
    }

    /// Read-only view of the animated position for hosts to observe per
    /// frame.
    pub fn position_state(&self) -> State<Point> {
        self.position.state()
    }

    /// Whether a transition animation is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.position.is_animating()
    }

    pub fn style(&self) -> &DrawerStyle {
        self.config.style()
    }

    /// Container frame for the host's renderer: full viewport width, panel
    /// height padded by the over-drag slack so the backing never shows
    /// through during resisted drags.
    pub fn frame(&self) -> Rect {
        let viewport = self.config.viewport();
        Rect {
            x: 0.0,
            y: self.position.value().y,
            width: viewport.width,
            height: self.config.container_height() + viewport.height.sqrt(),
        }
    }

    /// Feed a pointer event to the drawer. Returns whether it was handled.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind() {
            PointerEventKind::Down => {
                if event.is_consumed() {
                    return false;
                }
                self.tracker.begin(event.position());
                // Do not consume Down; handlers below may still want it.
                true
            }
            PointerEventKind::Move => {
                if !self.tracker.is_active() || event.is_consumed() {
                    return false;
                }
                if let Some(dy) = self.tracker.update(event.position()) {
                    self.drag_update(dy);
                    event.consume();
                }
                true
            }
            PointerEventKind::Up => {
                let Some(dy) = self.tracker.finish() else {
                    return false;
                };
                self.release(dy, Some(event.position()));
                true
            }
            PointerEventKind::Cancel => {
                if !self.tracker.is_active() {
                    return false;
                }
                self.tracker.cancel();
                self.snap_back();
                true
            }
        }
    }

    /// Apply a cumulative drag delta `dy` (pixels, positive = downward)
    /// measured from the start of the gesture.
    pub fn handle_drag_update(&mut self, dy: f32) {
        self.drag_update(dy);
    }

    /// Release a drag with final cumulative delta `dy`.
    pub fn handle_drag_release(&mut self, dy: f32) {
        self.tracker.cancel();
        self.release(dy, None);
    }

    /// Command the drawer to a logical state. Idempotent: commanding the
    /// state it already rests at (or is heading to) does nothing.
    pub fn set_drawer_state(&mut self, state: DrawerState) {
        if state == self.resting {
            return;
        }
        debug!("drawer commanded to {:?}", state);
        self.transition_to(state);
    }

    /// Replace the rest positions, re-validating their ordering. If the rest
    /// target of the current state moved, the drawer re-issues the transition
    /// toward it (both callback phases fire again).
    pub fn set_positions(&mut self, up: Point, down: Point) -> Result<(), ConfigError> {
        self.config.set_positions(up, down)?;
        let target = self.config.rest_position(self.resting);
        if self.position.target() != target {
            debug!("rest positions moved, re-transitioning to {:?}", self.resting);
            self.transition_to(self.resting);
        }
        Ok(())
    }

    fn drag_update(&mut self, dy: f32) {
        let rest = self.config.rest_position(self.resting);
        let up_y = self.config.up_position().y;
        let candidate_y = rest.y + dy;

        // 1:1 tracking inside the drawer's range; square-root resistance past
        // fully-open, bounded by one viewport-height's worth of easing.
        let y = if candidate_y >= up_y {
            candidate_y
        } else {
            up_y - self.overdrag_ease(dy)
        };

        trace!("drag dy={dy} -> y={y}");
        self.position.snap_to(Point::new(0.0, y));
    }

    fn overdrag_ease(&self, dy: f32) -> f32 {
        (-dy).sqrt().min(self.config.viewport().height.sqrt())
    }

    fn release(&mut self, dy: f32, at: Option<Point>) {
        if dy == 0.0 && self.resting == DrawerState::Down {
            // A tap on the collapsed drawer. Additive: the snap-back below
            // still runs.
            let position = at.unwrap_or_else(|| self.position.value());
            self.callbacks.emit_press(position);
        }

        let threshold = self.config.toggle_threshold();
        if dy > threshold && self.resting == DrawerState::Up {
            self.transition_to(DrawerState::Down);
            self.callbacks.emit_drawer_state_set(DrawerState::Down);
        } else if dy < -threshold && self.resting == DrawerState::Down {
            self.transition_to(DrawerState::Up);
            self.callbacks.emit_drawer_state_set(DrawerState::Up);
        } else {
            self.snap_back();
        }
    }

    /// Start a transition and fire the started-phase callbacks. The settled
    /// phase fires from the animation layer once the value stops moving.
    fn transition_to(&mut self, state: DrawerState) {
        let target = self.config.rest_position(state);

        // The fully-open rest is defined at y = 0 and opens on a
        // deterministic, time-bounded tween; everything else settles on a
        // spring.
        let animation = if target.y == 0.0 {
            AnimationType::Tween(TweenSpec::tween(OPEN_TWEEN_MILLIS, Easing::EaseInOut))
        } else {
            AnimationType::Spring(SpringSpec::default_spring())
        };

        debug!("transition to {:?} at y={} ({:?})", state, target.y, animation);

        let callbacks = self.callbacks.clone();
        self.position.animate_to_with(target, animation, move || {
            callbacks.emit_settled(state);
        });
        self.resting = state;

        // Started-phase side effects happen at initiation, not completion.
        self.callbacks.emit_rest_position_set(target);
        self.callbacks.emit_transition_started(state);
    }

    /// Spring back to the current rest position without changing state or
    /// firing callbacks.
    fn snap_back(&mut self) {
        let rest = self.config.rest_position(self.resting);
        self.position
            .animate_to(rest, AnimationType::Spring(SpringSpec::default_spring()));
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
