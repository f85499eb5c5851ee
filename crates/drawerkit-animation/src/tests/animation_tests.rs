use super::*;

use drawerkit_core::{Point, RuntimeHandle};
use std::cell::Cell;
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

fn pump(runtime: &RuntimeHandle, max_frames: u32) -> u32 {
    let mut frame_time = 0u64;
    let mut frames = 0;
    while runtime.has_frame_callbacks() && frames < max_frames {
        frame_time += FRAME_NANOS;
        runtime.drain_frame_callbacks(frame_time);
        frames += 1;
    }
    frames
}

#[test]
fn tween_interpolates_over_time() {
    let runtime = RuntimeHandle::new();
    let mut animatable = Animatable::new(0.0f32, runtime.clone());
    let state = animatable.state();

    animatable.animate_to(1.0, AnimationType::Tween(TweenSpec::linear(300)));
    assert!(animatable.is_animating());

    let mut frame_time = 0u64;
    let mut saw_midpoint = false;
    for _ in 0..32 {
        if !runtime.has_frame_callbacks() {
            break;
        }
        frame_time += FRAME_NANOS;
        runtime.drain_frame_callbacks(frame_time);
        let value = state.get();
        if value > 0.0 && value < 1.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "animation should report intermediate values");
    assert_eq!(state.get(), 1.0, "animation should end at target");
    assert!(!animatable.is_animating());
}

#[test]
fn tween_honors_delay() {
    let runtime = RuntimeHandle::new();
    let mut animatable = Animatable::new(0.0f32, runtime.clone());
    let state = animatable.state();

    animatable.animate_to(
        1.0,
        AnimationType::Tween(TweenSpec::linear(100).with_delay(100)),
    );

    // First frames fall inside the delay window; value must not move.
    runtime.drain_frame_callbacks(FRAME_NANOS);
    runtime.drain_frame_callbacks(2 * FRAME_NANOS);
    assert_eq!(state.get(), 0.0);

    pump(&runtime, 64);
    assert_eq!(state.get(), 1.0);
}

#[test]
fn spring_settles_at_target() {
    let runtime = RuntimeHandle::new();
    let mut animatable = Animatable::new(400.0f32, runtime.clone());

    animatable.animate_to(0.0, AnimationType::Spring(SpringSpec::default_spring()));
    let frames = pump(&runtime, 600);

    assert!(frames < 600, "spring should settle within 600 frames");
    assert_eq!(animatable.value(), 0.0);
    assert!(!animatable.is_animating());
}

#[test]
fn spring_with_equal_start_and_target_settles_immediately() {
    let runtime = RuntimeHandle::new();
    let mut animatable = Animatable::new(400.0f32, runtime.clone());

    animatable.animate_to(400.0, AnimationType::Spring(SpringSpec::default_spring()));
    let frames = pump(&runtime, 16);

    assert!(frames <= 3);
    assert_eq!(animatable.value(), 400.0);
}

#[test]
fn snap_to_cancels_in_flight_animation() {
    let runtime = RuntimeHandle::new();
    let mut animatable = Animatable::new(0.0f32, runtime.clone());

    animatable.animate_to(1.0, AnimationType::Tween(TweenSpec::linear(300)));
    runtime.drain_frame_callbacks(FRAME_NANOS);

    animatable.snap_to(5.0);
    assert!(!animatable.is_animating());

    pump(&runtime, 16);
    assert_eq!(animatable.value(), 5.0);
    assert_eq!(animatable.target(), 5.0);
}

#[test]
fn settled_callback_fires_once_on_completion() {
    let runtime = RuntimeHandle::new();
    let mut animatable = Animatable::new(0.0f32, runtime.clone());
    let settled = Rc::new(Cell::new(0u32));

    let settled_clone = Rc::clone(&settled);
    animatable.animate_to_with(
        1.0,
        AnimationType::Tween(TweenSpec::linear(100)),
        move || {
            settled_clone.set(settled_clone.get() + 1);
        },
    );

    assert_eq!(settled.get(), 0, "settled must not fire at initiation");
    pump(&runtime, 64);
    assert_eq!(settled.get(), 1);

    // No further frames, no further invocations.
    pump(&runtime, 16);
    assert_eq!(settled.get(), 1);
}

#[test]
fn settled_callback_dropped_when_superseded() {
    let runtime = RuntimeHandle::new();
    let mut animatable = Animatable::new(0.0f32, runtime.clone());
    let settled = Rc::new(Cell::new(false));

    let settled_clone = Rc::clone(&settled);
    animatable.animate_to_with(
        1.0,
        AnimationType::Tween(TweenSpec::linear(300)),
        move || settled_clone.set(true),
    );
    runtime.drain_frame_callbacks(FRAME_NANOS);

    animatable.snap_to(0.5);
    pump(&runtime, 32);
    assert!(!settled.get(), "superseded animation must not report settled");
}

#[test]
fn new_animation_interrupts_previous_target() {
    let runtime = RuntimeHandle::new();
    let mut animatable = Animatable::new(0.0f32, runtime.clone());

    animatable.animate_to(1.0, AnimationType::Tween(TweenSpec::linear(300)));
    runtime.drain_frame_callbacks(FRAME_NANOS);
    animatable.animate_to(-1.0, AnimationType::Tween(TweenSpec::linear(100)));

    pump(&runtime, 64);
    assert_eq!(animatable.value(), -1.0);
}

#[test]
fn point_lerp_is_componentwise() {
    let start = Point::new(0.0, 400.0);
    let target = Point::new(0.0, 0.0);
    let mid = start.lerp(&target, 0.5);
    assert_eq!(mid, Point::new(0.0, 200.0));
}

#[test]
fn point_spring_axis_is_vertical() {
    assert_eq!(Point::new(7.0, 120.0).to_f32(), 120.0);

    let start = Point::new(0.0, 400.0);
    let target = Point::new(0.0, 0.0);
    let current = Point::new(0.0, 100.0);
    assert!((Point::spring_progress(&start, &target, &current) - 0.75).abs() < 1e-6);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!((end - 1.0).abs() < 0.01, "End should be ~1 for {:?}", easing);
    }
}

#[test]
fn ease_in_out_is_symmetric_around_midpoint() {
    let halfway = Easing::EaseInOut.transform(0.5);
    assert!((halfway - 0.5).abs() < 0.01);

    let early = Easing::EaseInOut.transform(0.25);
    let late = Easing::EaseInOut.transform(0.75);
    assert!((early + late - 1.0).abs() < 0.02);
}

#[test]
fn tween_spec_default_has_reasonable_values() {
    let spec = TweenSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowIn);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_spec_default_is_critically_damped() {
    let spec = SpringSpec::default();
    assert_eq!(spec.damping_ratio, 1.0);
}

#[test]
fn spring_spec_bouncy_has_low_damping() {
    let spec = SpringSpec::bouncy();
    assert_eq!(spec.damping_ratio, 0.5);
    assert!(
        spec.damping_ratio < 1.0,
        "Bouncy spring should be under-damped"
    );
}

#[test]
fn spring_spec_stiff_has_high_stiffness() {
    let spec = SpringSpec::stiff();
    assert_eq!(spec.stiffness, 3000.0);
    assert!(spec.stiffness > SpringSpec::default().stiffness);
}
