//! Benchmarks for snapdiff operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use snapdiff_core::PixelBuffer;
use snapdiff_ops::{diff, diff_slices, parallel, DiffOptions};

/// Deterministic RGBA gradient.
fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[
                (x * 255 / width) as u8,
                (y * 255 / height) as u8,
                ((x + y) % 256) as u8,
                255,
            ]);
        }
    }
    PixelBuffer::from_data(width, height, data).unwrap()
}

/// Gradient with roughly one percent of pixels changed.
fn sparse_changes(width: u32, height: u32) -> PixelBuffer {
    let mut image = gradient(width, height);
    for y in 0..height {
        for x in 0..width {
            if (x * 31 + y * 17) % 97 == 0 {
                let [r, g, b, a] = image.pixel(x, y);
                image.set_pixel(x, y, [r.wrapping_add(130), g.wrapping_add(90), b, a]);
            }
        }
    }
    image
}

/// Gradient with every other pixel changed.
fn dense_changes(width: u32, height: u32) -> PixelBuffer {
    let mut image = gradient(width, height);
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 2 == 0 {
                let [r, g, b, a] = image.pixel(x, y);
                image.set_pixel(x, y, [r.wrapping_add(130), g.wrapping_add(90), b, a]);
            }
        }
    }
    image
}

/// Benchmark the equality fast path on unchanged screenshots.
fn bench_identical(c: &mut Criterion) {
    let mut group = c.benchmark_group("identical");

    for &(w, h) in &[(256u32, 256u32), (1024, 1024), (1920, 1080)] {
        let baseline = gradient(w, h);
        let candidate = baseline.clone();
        let mut out = PixelBuffer::new(w, h);

        group.throughput(Throughput::Elements(w as u64 * h as u64));

        group.bench_function(BenchmarkId::new("diff_only", format!("{w}x{h}")), |b| {
            b.iter(|| {
                diff(
                    black_box(&baseline),
                    black_box(&candidate),
                    &mut out,
                    &DiffOptions::default(),
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

/// Benchmark realistic change densities.
fn bench_changes(c: &mut Criterion) {
    let mut group = c.benchmark_group("changes");

    let (w, h) = (1920u32, 1080u32);
    let baseline = gradient(w, h);
    let sparse = sparse_changes(w, h);
    let dense = dense_changes(w, h);
    let mut out = PixelBuffer::new(w, h);

    group.throughput(Throughput::Elements(w as u64 * h as u64));

    group.bench_function("sparse", |b| {
        b.iter(|| {
            diff(
                black_box(&baseline),
                black_box(&sparse),
                &mut out,
                &DiffOptions::default(),
            )
            .unwrap()
        })
    });

    group.bench_function("dense", |b| {
        b.iter(|| {
            diff(
                black_box(&baseline),
                black_box(&dense),
                &mut out,
                &DiffOptions::default(),
            )
            .unwrap()
        })
    });

    group.finish();
}

/// Benchmark output layouts and the minimap overlay.
fn bench_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts");

    let (w, h) = (1920u32, 1080u32);
    let baseline = gradient(w, h);
    let candidate = sparse_changes(w, h);

    group.throughput(Throughput::Elements(w as u64 * h as u64));

    let mut narrow = PixelBuffer::new(w, h);
    group.bench_function("diff_only", |b| {
        b.iter(|| {
            diff(
                black_box(&baseline),
                black_box(&candidate),
                &mut narrow,
                &DiffOptions::default(),
            )
            .unwrap()
        })
    });

    let mut sheet = PixelBuffer::new(3 * w, h);
    group.bench_function("side_by_side", |b| {
        b.iter(|| {
            diff(
                black_box(&baseline),
                black_box(&candidate),
                &mut sheet,
                &DiffOptions::default(),
            )
            .unwrap()
        })
    });

    let options = DiffOptions::new().with_minimap(true);
    group.bench_function("diff_only_minimap", |b| {
        b.iter(|| {
            diff(
                black_box(&baseline),
                black_box(&candidate),
                &mut narrow,
                &options,
            )
            .unwrap()
        })
    });

    group.finish();
}

/// Benchmark the raw slice entry point against the typed one.
fn bench_entry_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry");

    let (w, h) = (1024u32, 1024u32);
    let baseline = gradient(w, h);
    let candidate = sparse_changes(w, h);
    let mut out = PixelBuffer::new(w, h);
    let mut raw_out = vec![0u8; (w as usize) * (h as usize) * 4];

    group.throughput(Throughput::Elements(w as u64 * h as u64));

    group.bench_function("buffers", |b| {
        b.iter(|| {
            diff(
                black_box(&baseline),
                black_box(&candidate),
                &mut out,
                &DiffOptions::default(),
            )
            .unwrap()
        })
    });

    group.bench_function("slices", |b| {
        b.iter(|| {
            diff_slices(
                black_box(baseline.data()),
                black_box(candidate.data()),
                &mut raw_out,
                w,
                h,
                &DiffOptions::default(),
            )
            .unwrap()
        })
    });

    group.finish();
}

/// Benchmark single-threaded against parallel scanning.
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");

    let (w, h) = (1920u32, 1080u32);
    let baseline = gradient(w, h);
    let candidate = dense_changes(w, h);
    let mut out = PixelBuffer::new(w, h);

    group.throughput(Throughput::Elements(w as u64 * h as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            diff(
                black_box(&baseline),
                black_box(&candidate),
                &mut out,
                &DiffOptions::default(),
            )
            .unwrap()
        })
    });

    group.bench_function("rayon", |b| {
        b.iter(|| {
            parallel::diff(
                black_box(&baseline),
                black_box(&candidate),
                &mut out,
                &DiffOptions::default(),
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_identical,
    bench_changes,
    bench_layouts,
    bench_entry_points,
    bench_parallel,
);

criterion_main!(benches);
