//! Benchmarks for the per-block stages
//!
//! Run with: cargo bench --bench transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use toydct_color::{blocks_to_rgb, blocks_to_ycbcr};
use toydct_core::{Block, Parallelism, Rgb, YCbCr};
use toydct_transform::{
    dct_1d, idct_1d, prune_blocks, quantize_block, transform_block, transform_blocks,
    TransformKind, LUMA_QUANT_TABLE,
};

fn luma_block() -> Block<YCbCr> {
    Block::from_fn(0, 0, |bx, by| {
        YCbCr::new((bx * 13 + by * 7) as f32 - 96.0, 128.0, 128.0)
    })
}

fn luma_blocks(count: u32) -> Vec<Block<YCbCr>> {
    (0..count)
        .map(|i| {
            Block::from_fn(i % 64, i / 64, |bx, by| {
                YCbCr::new(((bx + by) as u32 * 9 + i) as f32 % 255.0 - 128.0, 128.0, 128.0)
            })
        })
        .collect()
}

fn bench_dct_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 1D");
    let line = [-76.0f32, -73.0, -67.0, -62.0, -58.0, -67.0, -64.0, -55.0];

    group.bench_function("forward", |b| b.iter(|| dct_1d(black_box(&line))));

    let coefficients = dct_1d(&line);
    group.bench_function("inverse", |b| b.iter(|| idct_1d(black_box(&coefficients))));

    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block Stages");
    let block = luma_block();

    group.bench_function("transform_forward", |b| {
        b.iter(|| {
            let mut work = block.clone();
            transform_block(black_box(&mut work), TransformKind::Forward);
            work
        });
    });

    let mut coefficients = block.clone();
    transform_block(&mut coefficients, TransformKind::Forward);

    group.bench_function("transform_inverse", |b| {
        b.iter(|| {
            let mut work = coefficients.clone();
            transform_block(black_box(&mut work), TransformKind::Inverse);
            work
        });
    });

    group.bench_function("quantize", |b| {
        b.iter(|| {
            let mut work = coefficients.clone();
            quantize_block(black_box(&mut work), &LUMA_QUANT_TABLE);
            work
        });
    });

    group.finish();
}

fn bench_scheduling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transform Scheduling");

    for &count in &[64u32, 1024, 4096] {
        let blocks = luma_blocks(count);
        group.throughput(Throughput::Elements(count as u64));

        for (label, parallelism) in [
            ("sequential", Parallelism::Sequential),
            ("rayon", Parallelism::Rayon),
        ] {
            group.bench_with_input(BenchmarkId::new(label, count), &blocks, |b, blocks| {
                b.iter(|| {
                    let mut work = blocks.clone();
                    transform_blocks(&mut work, TransformKind::Forward, parallelism);
                    work
                });
            });
        }
    }

    group.finish();
}

fn bench_prune(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pruning");
    let mut blocks = luma_blocks(1024);
    transform_blocks(&mut blocks, TransformKind::Forward, Parallelism::Sequential);

    for &keep in &[1usize, 10, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(keep), &keep, |b, &keep| {
            b.iter(|| {
                let mut work = blocks.clone();
                prune_blocks(&mut work, keep, Parallelism::Sequential).unwrap();
                work
            });
        });
    }

    group.finish();
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color Conversion");
    let rgb: Vec<Block<Rgb>> = (0..1024u32)
        .map(|i| {
            Block::from_fn(i % 32, i / 32, |bx, by| {
                Rgb::new((bx * 31) as u8, (by * 29) as u8, (i % 256) as u8)
            })
        })
        .collect();
    group.throughput(Throughput::Elements(rgb.len() as u64 * 64));

    group.bench_function("rgb_to_ycbcr", |b| b.iter(|| blocks_to_ycbcr(black_box(&rgb))));

    let ycbcr = blocks_to_ycbcr(&rgb);
    group.bench_function("ycbcr_to_rgb", |b| b.iter(|| blocks_to_rgb(black_box(&ycbcr))));

    group.finish();
}

criterion_group!(
    benches,
    bench_dct_1d,
    bench_block,
    bench_scheduling,
    bench_prune,
    bench_color
);
criterion_main!(benches);
