//! Benchmarks for circle rasterization and frame rendering.
//!
//! Run with: `cargo bench --bench raster`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ringswarm::prelude::*;
use ringswarm::raster::{draw_circle, fill_circle};

fn bench_circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    let mut frame = PixelBuffer::new(256, 256).unwrap();
    frame.set_draw_color(Color::MAGENTA).unwrap();
    let center = IVec2::new(128, 128);

    for radius in [1, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("fill", radius), &radius, |b, &r| {
            b.iter(|| fill_circle(&mut frame, black_box(center), r).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("outline", radius), &radius, |b, &r| {
            b.iter(|| draw_circle(&mut frame, black_box(center), r).unwrap())
        });
    }

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let mut frame = PixelBuffer::new(800, 600).unwrap();
    let particles = ParticleSet::initialize(800, 600, &mut seeded_rng(9)).unwrap();
    let renderer = Renderer::new();

    c.bench_function("render_frame_800x600", |b| {
        b.iter(|| renderer.draw(&mut frame, black_box(&particles)).unwrap())
    });
}

criterion_group!(benches, bench_circles, bench_render_frame);
criterion_main!(benches);
