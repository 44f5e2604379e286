#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for keyframe lookup and pixel-space blending.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyplot::prelude::*;

fn wave(n: usize, phase: f32) -> DataWithAesthetic {
    let x: Vec<f32> = (0..n).map(|i| i as f32).collect();
    let y: Vec<f32> = x.iter().map(|v| (v * 0.05 + phase).sin()).collect();
    let size: Vec<f32> = y.iter().map(|v| v.abs()).collect();
    DataWithAesthetic::new().x(&x).y(&y).size(&size)
}

fn series(rows: usize, frames: usize) -> Axis {
    let mut axis = Axis::new(Viewport::from_size(800.0, 600.0));
    let index = axis.points(wave(rows, 0.0)).expect("registration should succeed");
    for f in 1..frames {
        axis.add_frame(index, wave(rows, f as f32 * 0.3), f as f32)
            .expect("frame should be accepted");
    }
    axis
}

fn frame_info_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_info");

    for frames in [2, 64, 4096] {
        let axis = series(1, frames);
        let keyframes = axis.plots()[0].keyframes();
        let end = (frames - 1) as f32;

        group.bench_with_input(BenchmarkId::from_parameter(frames), &frames, |b, _| {
            b.iter(|| keyframes.frame_info(black_box(end * 0.37)));
        });
    }

    group.finish();
}

fn blend_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_frame_at");

    for rows in [100, 10_000, 100_000] {
        let axis = series(rows, 4);
        let transform = axis.transform();
        let keyframes = axis.plots()[0].keyframes();

        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| keyframes.pixel_frame_at(black_box(1.5), &transform));
        });
    }

    group.finish();
}

fn draw_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    for rows in [100, 10_000] {
        let axis = series(rows, 4);

        group.bench_with_input(BenchmarkId::new("recorder", rows), &rows, |b, _| {
            b.iter(|| {
                let mut rec = Recorder::new();
                axis.draw(&mut rec, black_box(2.25));
                rec
            });
        });

        group.bench_with_input(BenchmarkId::new("svg_animated", rows), &rows, |b, _| {
            b.iter(|| {
                let mut svg = SvgBackend::new(800, 600);
                axis.draw_animated(&mut svg);
                svg.element_count()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, frame_info_benchmark, blend_benchmark, draw_benchmark);
criterion_main!(benches);
