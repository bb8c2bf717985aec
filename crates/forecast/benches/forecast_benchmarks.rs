use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, TimeZone, Utc};
use stockcast_core::{MovementId, ProductId};
use stockcast_forecast::{average_daily_consumption, project};
use stockcast_inventory::{MovementKind, OutboundHistory, StockMovement};
use stockcast_products::StockThresholds;

fn sample_history(movements: usize) -> OutboundHistory {
    let product_id = ProductId::new();
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let log: Vec<StockMovement> = (0..movements)
        .map(|i| {
            StockMovement::new(
                MovementId::new(),
                product_id,
                MovementKind::Outbound,
                (i % 9) as f64 + 1.0,
                start + Duration::days(i as i64),
            )
            .unwrap()
        })
        .collect();
    OutboundHistory::from_sorted(log).expect("generated log is sorted")
}

fn bench_rate_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_estimation");
    for movements in [10usize, 100, 1_000] {
        let history = sample_history(movements);
        group.throughput(Throughput::Elements(movements as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(movements),
            &history,
            |b, history| b.iter(|| average_daily_consumption(black_box(history))),
        );
    }
    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let thresholds = StockThresholds::new(20.0, 50.0).expect("valid thresholds");
    let as_of = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();

    let mut group = c.benchmark_group("projection");
    for horizon in [7u32, 30, 90] {
        group.throughput(Throughput::Elements(u64::from(horizon) + 1));
        group.bench_with_input(BenchmarkId::from_parameter(horizon), &horizon, |b, &h| {
            b.iter(|| {
                project(
                    black_box(500.0),
                    black_box(3.5),
                    h,
                    thresholds,
                    as_of,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rate_estimation, bench_projection);
criterion_main!(benches);
