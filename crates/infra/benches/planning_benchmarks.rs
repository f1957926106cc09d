use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::{Months, TimeZone, Utc};
use stockcast_core::ProductId;
use stockcast_forecasting::{
    AccuracyTag, ForecastEngine, ForecastMethod, PredictionRecord, ReplenishmentOptimizer,
    SeasonalPattern, SeasonalTrendReporter,
};
use stockcast_infra::InMemoryDemandStore;
use std::sync::Arc;

/// Store with `history` monthly records and a full year of seasonal patterns.
fn seeded_store(product: ProductId, history: u32) -> Arc<InMemoryDemandStore> {
    let store = Arc::new(InMemoryDemandStore::new());
    let start = Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap();

    for i in 0..history {
        let record = PredictionRecord::new(
            product,
            start + Months::new(i),
            ForecastMethod::MovingAverage,
            100.0 + f64::from(i % 17) * 3.5,
            85.0,
            AccuracyTag::Medium,
        )
        .unwrap();
        store.record_prediction(record).unwrap();
    }
    for month in 1..=12u8 {
        let factor = 80.0 + f64::from(month) * 5.0;
        store
            .upsert_seasonal_pattern(SeasonalPattern::new(product, month, factor).unwrap())
            .unwrap();
    }

    store
}

fn bench_forecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast");
    let product = ProductId::new();
    let engine = ForecastEngine::new(seeded_store(product, 36));

    for months in [3u32, 12, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(months), &months, |b, &months| {
            b.iter(|| engine.forecast(black_box(product), black_box(months)).unwrap());
        });
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");

    for history in [1u32, 12, 120] {
        let product = ProductId::new();
        let optimizer = ReplenishmentOptimizer::new(seeded_store(product, history));
        group.bench_with_input(BenchmarkId::from_parameter(history), &history, |b, _| {
            b.iter(|| optimizer.optimize(black_box(product)).unwrap());
        });
    }
    group.finish();
}

fn bench_trends(c: &mut Criterion) {
    let product = ProductId::new();
    let reporter = SeasonalTrendReporter::new(seeded_store(product, 1));

    c.bench_function("trends", |b| {
        b.iter(|| reporter.trends(black_box(product)).unwrap());
    });
}

criterion_group!(benches, bench_forecast, bench_optimize, bench_trends);
criterion_main!(benches);
