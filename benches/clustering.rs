use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lund::{Lund, SpectralDecomposition};
use rand::prelude::*;

fn bench_lund(c: &mut Criterion) {
    let mut group = c.benchmark_group("lund");

    // Generate synthetic spectral data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 500;
    let m = 8;

    let eigenvectors: Vec<Vec<f32>> = (0..n)
        .map(|_| (0..m).map(|_| rng.random::<f32>()).collect())
        .collect();
    let eigenvalues: Vec<f32> = (0..m).map(|l| 0.95f32.powi(l as i32)).collect();
    let graph = SpectralDecomposition::from_real(eigenvectors, eigenvalues).unwrap();

    // Strictly increasing densities keep the sweep free of degenerate ties.
    let density: Vec<f32> = (0..n)
        .map(|i| 1.0 + i as f32 * 0.01 + rng.random::<f32>() * 0.005)
        .collect();

    group.bench_function("fit_predict_n500_m8_inferred_k", |b| {
        b.iter(|| {
            let model = Lund::new(2.0);
            model
                .fit_predict(black_box(&graph), black_box(&density))
                .unwrap();
        })
    });

    group.bench_function("fit_predict_n500_m8_k10", |b| {
        b.iter(|| {
            let model = Lund::new(2.0).with_n_clusters(10);
            model
                .fit_predict(black_box(&graph), black_box(&density))
                .unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lund);
criterion_main!(benches);
