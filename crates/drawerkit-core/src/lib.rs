//! Runtime services and shared primitives for Drawerkit.
//!
//! This crate carries the pieces every other Drawerkit crate leans on: the
//! frame-callback runtime that hosts pump from their vsync, a small observable
//! value holder, and geometry/color primitives.

mod color;
mod frame_clock;
mod geometry;
mod runtime;
mod state;

pub use color::Color;
pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use geometry::{Point, Rect, Size};
pub use runtime::{FrameCallbackId, RuntimeHandle};
pub use state::{MutableState, State};
