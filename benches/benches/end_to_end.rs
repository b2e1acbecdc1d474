//! Whole-pipeline benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use toydct_core::{Dimensions, Parallelism, Rgb, RgbGrid};
use toydct_pipeline::{MaskSelection, MemorySink, Pipeline, PipelineOptions};

fn create_test_grid(width: u32, height: u32) -> RgbGrid {
    let mut grid = RgbGrid::new(Dimensions::new(width, height)).unwrap();
    for y in 0..height {
        for x in 0..width {
            let color = Rgb::new(
                ((x * 255) / width) as u8,
                ((y * 255) / height) as u8,
                128,
            );
            grid.put(x, y, color).unwrap();
        }
    }
    grid
}

fn bench_run_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pipeline by Image Size");

    for &size in &[64u32, 256, 512] {
        let grid = create_test_grid(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));

        for (label, parallelism) in [
            ("sequential", Parallelism::Sequential),
            ("rayon", Parallelism::Rayon),
        ] {
            let pipeline = Pipeline::new(PipelineOptions::new().parallelism(parallelism));
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}x{}", size, size)),
                &grid,
                |b, grid| b.iter(|| pipeline.run(black_box(grid), &mut MemorySink::new()).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_encode_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode Path");
    let grid = create_test_grid(256, 256);
    let blocks = toydct_color::blocks_to_ycbcr(&toydct_transform::partition(&grid).unwrap());

    for (label, options) in [
        ("quantize", PipelineOptions::new()),
        ("quantize_prune10", PipelineOptions::new().prune(Some(10))),
        ("transform_only", PipelineOptions::new().quantize(false)),
    ] {
        let pipeline = Pipeline::new(options);
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut work = blocks.clone();
                pipeline.encode(black_box(&mut work)).unwrap();
                work
            });
        });
    }

    group.finish();
}

fn bench_render_masks(c: &mut Criterion) {
    let grid = create_test_grid(256, 256);
    let blocks = toydct_color::blocks_to_ycbcr(&toydct_transform::partition(&grid).unwrap());
    let selection = MaskSelection {
        cr: true,
        checkerboard: true,
    };

    c.bench_function("render_masks_256", |b| {
        b.iter(|| toydct_pipeline::render_masks(black_box(&blocks), grid.dimensions(), selection).unwrap())
    });
}

criterion_group!(benches, bench_run_by_size, bench_encode_only, bench_render_masks);
criterion_main!(benches);
