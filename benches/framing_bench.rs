//! Benchmarks for the per-frame hot paths: tween sampling, easing and
//! pointer picking.
#![allow(missing_docs)] // criterion_group! generates an undocumented fn

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use resortview::camera::{CameraPose, CameraTween};
use resortview::options::Options;
use resortview::util::easing::EasingFunction;
use resortview::ResortEngine;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    let _ = c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn tween_sample_benchmark(c: &mut Criterion) {
    let mut tween = CameraTween::new(
        CameraPose::new(Vec3::new(100.0, 50.0, 100.0), Vec3::ZERO),
        CameraPose::new(Vec3::new(50.0, 20.0, -50.0), Vec3::new(0.0, 9.0, -30.0)),
        1.0,
        EasingFunction::Linear,
    );
    let _ = tween.advance(0.4);
    let _ = c.bench_function("tween_sample", |b| {
        b.iter(|| black_box(black_box(&tween).sample()));
    });
}

fn pick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer");
    let mut engine = ResortEngine::resort(Options::default(), (1280, 720));

    let _ = group.bench_function("hover", |b| {
        b.iter(|| black_box(engine.hover(black_box(640.0), black_box(360.0))));
    });
    let _ = group.bench_function("click_and_frame", |b| {
        b.iter(|| {
            let hit = engine.click(black_box(640.0), black_box(360.0));
            let _ = engine.frame(1.0 / 60.0);
            black_box(hit)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    tween_sample_benchmark,
    pick_benchmark
);
criterion_main!(benches);
