//! Benchmarks for rastr operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use rastr_color::{bgr_to_hsv_buffer, hsv_to_bgr_buffer, to_gray};
use rastr_core::PixelBuffer;
use rastr_ops::composite::{blend, weighted_merge};
use rastr_ops::{BlendMode, Pivot, adjust, filter, resize, transform};

fn test_image(width: u32, height: u32) -> PixelBuffer {
    let data = (0..width * height * 3).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
    PixelBuffer::from_data(width, height, 3, data).unwrap()
}

const SIZES: [u32; 3] = [64, 256, 1024];

/// Benchmark window filters across radii.
fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    group.sample_size(20);

    let img = test_image(256, 256);
    group.throughput(Throughput::Elements(256 * 256));

    for radius in [1u32, 3, 8] {
        group.bench_with_input(BenchmarkId::new("blur", radius), &radius, |b, &r| {
            b.iter(|| filter::blur(black_box(&img), r).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("erode", radius), &radius, |b, &r| {
            b.iter(|| filter::erode(black_box(&img), r).unwrap())
        });
    }

    group.finish();
}

/// Benchmark pointwise adjustments, including the HSV round trips.
fn bench_adjust(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjust");

    for size in SIZES {
        let img = test_image(size, size);
        group.throughput(Throughput::Elements(size as u64 * size as u64));

        group.bench_with_input(BenchmarkId::new("brightness", size), &img, |b, img| {
            b.iter(|| adjust::brightness(black_box(img), 40).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("contrast", size), &img, |b, img| {
            b.iter(|| adjust::contrast(black_box(img), 20).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("saturation", size), &img, |b, img| {
            b.iter(|| adjust::saturation(black_box(img), -30).unwrap())
        });
    }

    group.finish();
}

/// Benchmark color space conversions on their own.
fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    for size in SIZES {
        let img = test_image(size, size);
        let hsv = bgr_to_hsv_buffer(&img);
        group.throughput(Throughput::Elements(size as u64 * size as u64));

        group.bench_with_input(BenchmarkId::new("bgr_to_hsv", size), &img, |b, img| {
            b.iter(|| bgr_to_hsv_buffer(black_box(img)))
        });
        group.bench_with_input(BenchmarkId::new("hsv_to_bgr", size), &hsv, |b, hsv| {
            b.iter(|| hsv_to_bgr_buffer(black_box(hsv)))
        });
        group.bench_with_input(BenchmarkId::new("to_gray", size), &img, |b, img| {
            b.iter(|| to_gray(black_box(img)))
        });
    }

    group.finish();
}

/// Benchmark geometric transforms.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for size in SIZES {
        let img = test_image(size, size);
        group.throughput(Throughput::Elements(size as u64 * size as u64));

        group.bench_with_input(BenchmarkId::new("rotate_90_cw", size), &img, |b, img| {
            b.iter(|| transform::rotate_90_cw(black_box(img)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("rotate_30", size), &img, |b, img| {
            b.iter(|| transform::rotate(black_box(img), 30.0, Pivot::center_of(img)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("resize_2x", size), &img, |b, img| {
            b.iter(|| resize::resize(black_box(img), size * 2, size * 2).unwrap())
        });
    }

    group.finish();
}

/// Benchmark compositing.
fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");

    let a = test_image(512, 512);
    let b = transform::flip_h(&a).unwrap();
    let mask = PixelBuffer::filled(128, 128, &[96]);
    group.throughput(Throughput::Elements(512 * 512));

    for mode in BlendMode::ALL {
        group.bench_function(BenchmarkId::new("blend", mode), |bench| {
            bench.iter(|| blend(black_box(&a), black_box(&b), mode).unwrap())
        });
    }
    group.bench_function("weighted_merge", |bench| {
        bench.iter(|| weighted_merge(black_box(&a), black_box(&b), black_box(&mask)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_filters,
    bench_adjust,
    bench_color,
    bench_transform,
    bench_composite
);
criterion_main!(benches);
