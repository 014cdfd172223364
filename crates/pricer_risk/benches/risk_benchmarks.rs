//! Criterion benchmarks for pricing, sweeps and strategy payoffs.
//!
//! Benchmarks cover:
//! - Single price and Greeks evaluation
//! - Sensitivity sweeps at increasing sample counts
//! - Default spot/volatility heatmap
//! - Strategy payoff curves and exact summaries

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{greeks, price, GreeksConvention};
use pricer_models::instruments::{OptionField, OptionParameters, OptionType};
use pricer_risk::scenarios::{sweep, Metric, SensitivityGrid};
use pricer_risk::strategy::{strategy_payoff, StrategyPreset, StrategySummary};

fn reference() -> OptionParameters<f64> {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
}

/// Benchmark a single price and full Greeks evaluation.
fn bench_single_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_evaluation");
    let params = reference();
    let convention = GreeksConvention::default();

    group.bench_function("price", |b| b.iter(|| price(black_box(&params))));
    group.bench_function("greeks", |b| {
        b.iter(|| greeks(black_box(&params), black_box(&convention)))
    });

    group.finish();
}

/// Benchmark sweeps over spot.
fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let params = reference();

    for n in [101, 1_000, 10_000] {
        for metric in [Metric::Price, Metric::Delta] {
            group.bench_with_input(BenchmarkId::new(metric.name(), n), &n, |b, &n| {
                b.iter(|| sweep(black_box(&params), OptionField::Spot, 50.0, 150.0, n, metric))
            });
        }
    }

    group.finish();
}

/// Benchmark the default 10x10 heatmap.
fn bench_grid(c: &mut Criterion) {
    let params = reference();
    c.bench_function("spot_vol_heatmap", |b| {
        b.iter(|| SensitivityGrid::spot_vol_default(black_box(&params)))
    });
}

/// Benchmark strategy payoff sampling and summaries.
fn bench_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy");
    let params = reference();
    let legs = StrategyPreset::BullCallSpread {
        lower: 95.0,
        upper: 105.0,
    }
    .build(&params)
    .unwrap();

    for n in [101, 10_000] {
        group.bench_with_input(BenchmarkId::new("payoff", n), &n, |b, &n| {
            b.iter(|| strategy_payoff(black_box(&legs), 50.0, 150.0, n))
        });
    }
    group.bench_function("summary", |b| {
        b.iter(|| StrategySummary::from_legs(black_box(&legs)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_evaluation,
    bench_sweep,
    bench_grid,
    bench_strategy
);
criterion_main!(benches);
