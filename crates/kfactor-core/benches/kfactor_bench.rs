use criterion::{criterion_group, criterion_main, Criterion};
use kfactor_core::calculator::BendCalculator;
use kfactor_core::curve::{compute_k_factor, sample_curve, KFactorCurve};
use kfactor_types::input::{BendCount, BendInput};
use std::hint::black_box;

fn bench_k_factor(c: &mut Criterion) {
    c.bench_function("compute_k_factor", |b| {
        b.iter(|| compute_k_factor(black_box(1.75)))
    });
}

fn bench_cached_vs_direct(c: &mut Criterion) {
    let calc = BendCalculator::default();
    let ratios: Vec<f64> = (0..256).map(|i| i as f64 * 0.1).collect();

    let mut group = c.benchmark_group("k_factor_256_ratios");

    group.bench_function("direct", |b| {
        b.iter(|| {
            let sum: f64 = ratios.iter().map(|&r| compute_k_factor(r)).sum();
            black_box(sum);
        })
    });

    group.bench_function("cached", |b| {
        b.iter(|| {
            let sum: f64 = ratios.iter().map(|&r| calc.k_factor(r)).sum();
            black_box(sum);
        })
    });

    group.finish();
}

fn bench_calculate(c: &mut Criterion) {
    let calc = BendCalculator::default();
    let input = BendInput::new(2.0, 1.5)
        .with_angle(90.0)
        .with_bends(BendCount::ONE);

    c.bench_function("calculate_full_bend", |b| {
        b.iter(|| calc.calculate(black_box(&input)))
    });
}

fn bench_sample_curve(c: &mut Criterion) {
    c.bench_function("sample_curve_10k", |b| {
        b.iter(|| sample_curve(&KFactorCurve::STANDARD, 0.0, 25.0, black_box(10_000)))
    });
}

criterion_group!(
    benches,
    bench_k_factor,
    bench_cached_vs_direct,
    bench_calculate,
    bench_sample_curve
);
criterion_main!(benches);
