//! Draggable bottom-drawer component.
//!
//! A panel that slides between a collapsed ("down") and expanded ("up")
//! vertical rest position. Touch drags track the finger 1:1 inside the
//! drawer's range and meet square-root resistance past fully-open; releasing
//! either snaps back or flips the logical state once the drag crosses the
//! toggle threshold. Opening runs on a timed ease-in-out tween, every other
//! transition on a spring.

mod animator;
mod callbacks;
mod config;
mod drawer_state;
mod input;
mod style;

pub use animator::Animator;
pub use callbacks::DrawerCallbacks;
pub use config::{ConfigError, DrawerConfig};
pub use drawer_state::{DrawerState, InvalidDrawerState};
pub use input::{DragTracker, PointerEvent, PointerEventKind};
pub use style::{
    DrawerStyle, Shadow, ROUNDED_CORNER_RADIUS, SHADOW_COLOR, SHADOW_OPACITY, SHADOW_RADIUS,
};
