use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gwas_kmeans::{metrics, KMeansConfig, KMeansEngine, OptimalKSelector, Point};
use rand::prelude::*;
use std::time::Duration;

fn random_points(n_samples: usize, n_features: usize, seed: u64) -> Vec<Point<f64>> {
    let mut rnd = StdRng::seed_from_u64(seed);
    let raw: Vec<f64> = (0..n_samples * n_features).map(|_| rnd.gen_range(-1.0..1.0)).collect();
    Point::from_row_major(&raw, n_features).unwrap()
}

fn benchmark_lloyd_varying_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("lloyd_samples");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_features = 32;
    let k = 16;
    for n_samples in [1_000, 5_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*n_samples as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_samples), n_samples, |b, &n_samples| {
            let points = random_points(n_samples, n_features, 1337);
            let engine = KMeansEngine::new(k, 10).unwrap();
            b.iter(|| {
                let mut points = points.clone();
                let conf = KMeansConfig::build().seed(42).build();
                engine.cluster(black_box(&mut points), &conf).unwrap()
            });
        });
    }
    group.finish();
}

fn benchmark_silhouette(c: &mut Criterion) {
    let mut group = c.benchmark_group("silhouette");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(2));

    for n_samples in [500, 2_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n_samples), n_samples, |b, &n_samples| {
            let mut points = random_points(n_samples, 16, 7);
            let conf = KMeansConfig::build().seed(42).build();
            let state = KMeansEngine::new(8, 20).unwrap().cluster(&mut points, &conf).unwrap();
            b.iter(|| metrics::silhouette(black_box(&state.clusters)));
        });
    }
    group.finish();
}

fn benchmark_optimal_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimal_k");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(3));

    let points = random_points(1_000, 8, 99);
    let selector = OptimalKSelector::new(2, 6).unwrap().with_max_iterations(20);
    group.bench_function("sweep_2_to_6", |b| {
        b.iter(|| {
            let mut points = points.clone();
            let conf = KMeansConfig::build().seed(42).build();
            selector.select(black_box(&mut points), &conf).unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_lloyd_varying_samples, benchmark_silhouette, benchmark_optimal_k);
criterion_main!(benches);
