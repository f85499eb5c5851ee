//! Host-facing callback surface.
//!
//! Every callback is optional; missing ones are silent no-ops. The
//! transition contract is two-phase: `on_expanded`/`on_collapsed` (and
//! `on_rest_position_set`) fire synchronously when a transition is
//! *initiated*, `on_settled` fires when its animation actually completes.
//! Interrupted transitions never settle.

use std::rc::Rc;

use drawerkit_core::Point;

use crate::drawer_state::DrawerState;

#[derive(Clone, Default)]
pub struct DrawerCallbacks {
    pub(crate) on_rest_position_set: Option<Rc<dyn Fn(Point)>>,
    pub(crate) on_drawer_state_set: Option<Rc<dyn Fn(DrawerState)>>,
    pub(crate) on_expanded: Option<Rc<dyn Fn()>>,
    pub(crate) on_collapsed: Option<Rc<dyn Fn()>>,
    pub(crate) on_press: Option<Rc<dyn Fn(Point)>>,
    pub(crate) on_settled: Option<Rc<dyn Fn(DrawerState)>>,
}

impl DrawerCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The drawer began transitioning to a new rest position. Fires before
    /// the visual animation completes.
    pub fn on_rest_position_set(mut self, callback: impl Fn(Point) + 'static) -> Self {
        self.on_rest_position_set = Some(Rc::new(callback));
        self
    }

    /// A gesture flipped the logical drawer state.
    pub fn on_drawer_state_set(mut self, callback: impl Fn(DrawerState) + 'static) -> Self {
        self.on_drawer_state_set = Some(Rc::new(callback));
        self
    }

    /// A transition toward the up position was initiated.
    pub fn on_expanded(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_expanded = Some(Rc::new(callback));
        self
    }

    /// A transition toward the down position was initiated.
    pub fn on_collapsed(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_collapsed = Some(Rc::new(callback));
        self
    }

    /// The collapsed drawer was tapped (released with zero drag delta).
    /// Receives the pointer position of the tap.
    pub fn on_press(mut self, callback: impl Fn(Point) + 'static) -> Self {
        self.on_press = Some(Rc::new(callback));
        self
    }

    /// A transition's animation finished and the drawer is at rest in the
    /// given state.
    pub fn on_settled(mut self, callback: impl Fn(DrawerState) + 'static) -> Self {
        self.on_settled = Some(Rc::new(callback));
        self
    }

    pub(crate) fn emit_rest_position_set(&self, position: Point) {
        if let Some(callback) = &self.on_rest_position_set {
            callback(position);
        }
    }

    pub(crate) fn emit_drawer_state_set(&self, state: DrawerState) {
        if let Some(callback) = &self.on_drawer_state_set {
            callback(state);
        }
    }

    pub(crate) fn emit_transition_started(&self, state: DrawerState) {
        match state {
            DrawerState::Up => {
                if let Some(callback) = &self.on_expanded {
                    callback();
                }
            }
            DrawerState::Down => {
                if let Some(callback) = &self.on_collapsed {
                    callback();
                }
            }
        }
    }

    pub(crate) fn emit_press(&self, position: Point) {
        if let Some(callback) = &self.on_press {
            callback(position);
        }
    }

    pub(crate) fn emit_settled(&self, state: DrawerState) {
        if let Some(callback) = &self.on_settled {
            callback(state);
        }
    }
}
