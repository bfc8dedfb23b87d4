//! Benchmarks for the per-tick motion update and a full headless tick.
//!
//! Run with: `cargo bench --bench motion`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ringswarm::prelude::*;

fn bench_motion_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion_step");

    for &(width, height) in &[(320u32, 240u32), (800, 600), (1920, 1080)] {
        let start = ParticleSet::initialize(width, height, &mut seeded_rng(1)).unwrap();
        let model = MotionModel::new();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &start,
            |b, start| {
                let mut particles = start.clone();
                let mut rng = seeded_rng(2);
                b.iter(|| black_box(model.step(&mut particles, width, height, &mut rng)))
            },
        );
    }

    group.finish();
}

fn bench_centroid(c: &mut Criterion) {
    let particles = ParticleSet::initialize(800, 600, &mut seeded_rng(3)).unwrap();
    c.bench_function("centroid", |b| b.iter(|| black_box(MotionModel::centroid(&particles))));
}

fn bench_session_tick(c: &mut Criterion) {
    let mut frame = PixelBuffer::new(800, 600).unwrap();
    let mut session = Session::new(&frame, seeded_rng(4)).unwrap();
    c.bench_function("session_tick_800x600", |b| {
        b.iter(|| black_box(session.tick(&mut frame).unwrap()))
    });
}

criterion_group!(benches, bench_motion_step, bench_centroid, bench_session_tick);
criterion_main!(benches);
