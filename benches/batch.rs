use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mandel_batch::batch::{evaluate_batch, BatchRequest};
use mandel_batch::escape;
use mandel_batch::pixel::Complex;

const SIDE: u32 = 256;

fn frame_request(max_iters: u32, coords: Vec<u32>) -> BatchRequest {
    BatchRequest {
        draw_id: 0,
        centre: Complex {
            real: -0.5,
            imaginary: 0.0,
        },
        width: SIDE,
        height: SIDE,
        pixel_size: 3.0 / SIDE as f64,
        max_iters,
        coords,
    }
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_batch");
    group.sample_size(20);

    for max_iters in [256u32, 4_096] {
        group.bench_function(format!("full-frame-{max_iters}"), |b| {
            b.iter_batched(
                || frame_request(max_iters, (0..SIDE * SIDE).collect()),
                evaluate_batch,
                BatchSize::LargeInput,
            )
        });
    }

    // A scattered subset, the shape interleaved dispatchers send.
    let mut rng = StdRng::seed_from_u64(1);
    let scattered: Vec<u32> = (0..8_192).map(|_| rng.gen_range(0..SIDE * SIDE)).collect();
    group.bench_function("scattered-8k", |b| {
        b.iter_batched(
            || frame_request(1_024, scattered.clone()),
            evaluate_batch,
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_points(c: &mut Criterion) {
    // Seahorse valley, slow to classify either way.
    c.bench_function("evaluate-near-boundary", |b| {
        b.iter(|| escape::evaluate(-0.7453, 0.1127, 10_000))
    });
    // Deep interior, where only the cycle check keeps this cheap.
    c.bench_function("evaluate-interior", |b| {
        b.iter(|| escape::evaluate(-0.2, 0.0, 1_000_000))
    });
}

criterion_group!(benches, bench_batches, bench_points);
criterion_main!(benches);
