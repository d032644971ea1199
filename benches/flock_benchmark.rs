/*
 * Flock Step Benchmark
 *
 * Measures the cost of one full simulation tick at several population
 * sizes. The neighbor scan is O(n^2) by design, so the step time should
 * grow quadratically with the flock size.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use torus_flock::{Flock, FlockParams};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_step");

    for num_boids in [100usize, 250, 500, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_boids),
            &num_boids,
            |b, &n| {
                let mut rng = StdRng::seed_from_u64(7);
                let mut flock = Flock::new(FlockParams::default()).unwrap();
                flock.spawn(n, &mut rng);

                b.iter(|| {
                    flock.step();
                    black_box(flock.boids().len())
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step
}

criterion_main!(benches);
