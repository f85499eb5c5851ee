use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drawerkit_animation::Easing;
use drawerkit_core::{Point, RuntimeHandle, Size};
use drawerkit_ui::{Animator, DrawerCallbacks, DrawerConfig, DrawerState};

const FRAME_NANOS: u64 = 16_666_667;

fn drawer() -> (Animator, RuntimeHandle) {
    let runtime = RuntimeHandle::new();
    let config = DrawerConfig::new(
        Point::new(0.0, 0.0),
        Point::new(0.0, 400.0),
        50.0,
        300.0,
        Size::new(400.0, 800.0),
    )
    .expect("valid bench config");
    let animator = Animator::new(
        config,
        DrawerState::Down,
        DrawerCallbacks::new(),
        runtime.clone(),
    );
    (animator, runtime)
}

fn bench_drag_updates(c: &mut Criterion) {
    c.bench_function("drag_update_sweep", |b| {
        let (mut animator, _runtime) = drawer();
        b.iter(|| {
            for step in 0..120 {
                animator.handle_drag_update(black_box(-(step as f32)));
            }
        });
    });
}

fn bench_release_and_settle(c: &mut Criterion) {
    c.bench_function("release_and_settle", |b| {
        b.iter(|| {
            let (mut animator, runtime) = drawer();
            animator.handle_drag_release(black_box(-60.0));
            let mut frame_time = 0u64;
            while runtime.has_frame_callbacks() {
                frame_time += FRAME_NANOS;
                runtime.drain_frame_callbacks(frame_time);
            }
            black_box(animator.current_position())
        });
    });
}

fn bench_easing_transform(c: &mut Criterion) {
    c.bench_function("ease_in_out_transform", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for step in 0..=100 {
                acc += Easing::EaseInOut.transform(black_box(step as f32 / 100.0));
            }
            black_box(acc)
        });
    });
}

criterion_group!(
    benches,
    bench_drag_updates,
    bench_release_and_settle,
    bench_easing_transform
);
criterion_main!(benches);
