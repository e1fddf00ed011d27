// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kernel_core::elementwise::vector;
use std::{hint::black_box, time::Duration};

// Sweeps element counts either side of `kernel_core::backend::MIN_PARALLEL_UNITS`
// so the `mt`-feature build (this crate always enables it) shows where the
// worker-pool backend starts paying for itself versus running inline.
fn bench_binary_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_binary_add");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    group.noise_threshold(0.02);
    for &n in &[64usize, 1_024, 65_536, 1_048_576] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, &n| {
            let a: Vec<f32> = (0..n).map(|i| i as f32).collect();
            let b: Vec<f32> = (0..n).map(|i| (n - i) as f32).collect();
            let mut dst = vec![0.0f32; n];
            bencher.iter(|| {
                vector::binary(
                    &mut dst,
                    1,
                    black_box(&a),
                    1,
                    black_box(&b),
                    1,
                    n,
                    |x, y| x + y,
                );
                black_box(&dst);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_binary_add);
criterion_main!(benches);
