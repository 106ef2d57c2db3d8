//! Benchmarks for vscope-rs operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use vscope_core::pixel::pack_rgb_opaque;
use vscope_ops::grid::draw_grid;
use vscope_ops::hsv::rgb_to_hsv;
use vscope_ops::{ScopeBuffer, Vectorscope};

fn frame(w: u32, h: u32) -> Vec<u32> {
    (0..w * h)
        .map(|i| {
            let x = i % w;
            let y = i / w;
            pack_rgb_opaque((x * 255 / w) as u8, (y * 255 / h) as u8, (i % 251) as u8)
        })
        .collect()
}

/// Benchmark the RGB to HSV conversion.
fn bench_hsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("hsv");

    let rgb: Vec<[u8; 3]> = (0..10000u32)
        .map(|i| [(i % 256) as u8, (i / 7 % 256) as u8, (i / 13 % 256) as u8])
        .collect();
    group.throughput(Throughput::Elements(rgb.len() as u64));

    group.bench_function("rgb_to_hsv", |b| {
        b.iter(|| {
            rgb.iter()
                .map(|&v| rgb_to_hsv(black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark grid stamping alone.
fn bench_grid(c: &mut Criterion) {
    let scope = Vectorscope::new(1920, 1080).unwrap();
    let mut buf = ScopeBuffer::new(scope.size());

    c.bench_function("grid_1080p", |b| {
        b.iter(|| {
            buf.clear();
            draw_grid(black_box(&mut buf), &scope.style().grid)
        })
    });
}

/// Benchmark full frame processing at common resolutions.
fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");

    for (w, h) in [(320, 240), (1280, 720), (1920, 1080)] {
        let scope = Vectorscope::new(w, h).unwrap();
        let input = frame(w, h);
        let mut output = vec![0u32; input.len()];

        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("frame", format!("{w}x{h}")),
            &input,
            |b, input| b.iter(|| scope.process(black_box(input), &mut output)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_hsv, bench_grid, bench_process);
criterion_main!(benches);
