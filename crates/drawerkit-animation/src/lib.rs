//! Animation system for Drawerkit
//!
//! Provides time-based tweens with easing curves and physically-modeled
//! spring animations, stepped by the drawerkit-core frame-callback runtime.

mod animation;

pub use animation::{
    Animatable, AnimationType, Easing, Lerp, SpringScalar, SpringSpec, TweenSpec,
};
