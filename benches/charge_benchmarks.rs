//! Performance benchmarks for the parking charge engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single stay calculation: < 10μs mean
//! - Stay with discount and overtime: < 20μs mean
//! - Batch of 1000 stays: < 20ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use parking_charge_engine::engine::ChargeEngine;
use parking_charge_engine::lookup::InMemoryLookup;
use parking_charge_engine::models::{
    Reservation, ReservationStatus, Stay, SubscriptionStatus, SubscriptionUsage, Tariff,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn entry() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

/// Engine with a four-tier tariff, an active plan and a confirmed
/// reservation for the benchmark identities.
fn create_bench_engine(
    user_id: Uuid,
    vehicle_id: Uuid,
    parking_lot_id: Uuid,
    vehicle_class_id: Uuid,
) -> ChargeEngine<InMemoryLookup> {
    let mut lookup = InMemoryLookup::new();
    lookup.add_tariff(Tariff {
        id: Uuid::new_v4(),
        parking_lot_id,
        vehicle_class_id,
        name: "Standard Rate".to_string(),
        rate_per_hour: dec("5.00"),
        rate_per_day: Some(dec("20.00")),
        rate_per_week: Some(dec("100.00")),
        rate_per_month: Some(dec("300.00")),
        minimum_time_minutes: 60,
    });
    lookup.add_subscription(SubscriptionUsage {
        id: Uuid::new_v4(),
        user_id,
        vehicle_id,
        parking_lot_id,
        plan_name: "Monthly Plan".to_string(),
        discount_percentage: dec("20.00"),
        start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        status: SubscriptionStatus::Active,
        entries_used: 0,
        hours_used: 0,
        max_entries: None,
        max_hours: None,
    });
    lookup.add_reservation(Reservation {
        id: Uuid::new_v4(),
        user_id,
        vehicle_id,
        parking_lot_id,
        start_time: entry(),
        end_time: Some(entry() + Duration::hours(2)),
        estimated_duration_minutes: None,
        status: ReservationStatus::Confirmed,
    });
    ChargeEngine::new(lookup)
}

fn create_stay(
    user_id: Uuid,
    vehicle_id: Uuid,
    parking_lot_id: Uuid,
    vehicle_class_id: Uuid,
    duration_minutes: i64,
) -> Stay {
    Stay {
        id: Some(Uuid::new_v4()),
        user_id,
        vehicle_id,
        parking_lot_id,
        vehicle_class_id,
        entry_time: entry(),
        exit_time: Some(entry() + Duration::minutes(duration_minutes)),
        tariff: None,
        reservation: None,
        subscription: None,
    }
}

/// Benchmark: plain two-hour stay without discounts or reservations.
///
/// Target: < 10μs mean
fn bench_single_stay(c: &mut Criterion) {
    let user_id = Uuid::new_v4();
    let vehicle_id = Uuid::new_v4();
    let parking_lot_id = Uuid::new_v4();
    let vehicle_class_id = Uuid::new_v4();

    let mut lookup = InMemoryLookup::new();
    lookup.add_tariff(Tariff {
        id: Uuid::new_v4(),
        parking_lot_id,
        vehicle_class_id,
        name: "Standard Rate".to_string(),
        rate_per_hour: dec("5.00"),
        rate_per_day: None,
        rate_per_week: None,
        rate_per_month: None,
        minimum_time_minutes: 60,
    });
    let engine = ChargeEngine::new(lookup);
    let stay = create_stay(user_id, vehicle_id, parking_lot_id, vehicle_class_id, 120);

    c.bench_function("single_stay", |b| {
        b.iter(|| black_box(engine.calculate_for_stay(black_box(&stay)).unwrap()))
    });
}

/// Benchmark: stay that exercises the full pipeline: tier optimization,
/// plan discount and reservation overtime.
///
/// Target: < 20μs mean
fn bench_full_pipeline(c: &mut Criterion) {
    let user_id = Uuid::new_v4();
    let vehicle_id = Uuid::new_v4();
    let parking_lot_id = Uuid::new_v4();
    let vehicle_class_id = Uuid::new_v4();

    let engine = create_bench_engine(user_id, vehicle_id, parking_lot_id, vehicle_class_id);
    let mut stay = create_stay(user_id, vehicle_id, parking_lot_id, vehicle_class_id, 150);
    stay.reservation = Some(Reservation {
        id: Uuid::new_v4(),
        user_id,
        vehicle_id,
        parking_lot_id,
        start_time: entry(),
        end_time: Some(entry() + Duration::hours(2)),
        estimated_duration_minutes: None,
        status: ReservationStatus::Confirmed,
    });

    c.bench_function("full_pipeline", |b| {
        b.iter(|| black_box(engine.calculate_for_stay(black_box(&stay)).unwrap()))
    });
}

/// Benchmark: batch of 1000 stays against one engine.
///
/// Target: < 20ms mean
fn bench_batch_1000(c: &mut Criterion) {
    let user_id = Uuid::new_v4();
    let vehicle_id = Uuid::new_v4();
    let parking_lot_id = Uuid::new_v4();
    let vehicle_class_id = Uuid::new_v4();

    let engine = create_bench_engine(user_id, vehicle_id, parking_lot_id, vehicle_class_id);
    let stays: Vec<Stay> = (0..1000i64)
        .map(|i| {
            create_stay(
                user_id,
                vehicle_id,
                parking_lot_id,
                vehicle_class_id,
                31 + (i % 4000),
            )
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let mut results = Vec::with_capacity(stays.len());
            for stay in &stays {
                results.push(engine.calculate_for_stay(stay).unwrap());
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: various stay lengths to understand tier-optimization scaling.
fn bench_duration_scaling(c: &mut Criterion) {
    let user_id = Uuid::new_v4();
    let vehicle_id = Uuid::new_v4();
    let parking_lot_id = Uuid::new_v4();
    let vehicle_class_id = Uuid::new_v4();

    let engine = create_bench_engine(user_id, vehicle_id, parking_lot_id, vehicle_class_id);

    let mut group = c.benchmark_group("duration_scaling");

    for duration_minutes in [60i64, 1440, 10_080, 43_200, 100_000].iter() {
        let stay = create_stay(
            user_id,
            vehicle_id,
            parking_lot_id,
            vehicle_class_id,
            *duration_minutes,
        );

        group.bench_with_input(
            BenchmarkId::new("minutes", duration_minutes),
            duration_minutes,
            |b, _| b.iter(|| black_box(engine.calculate_for_stay(black_box(&stay)).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_stay,
    bench_full_pipeline,
    bench_batch_1000,
    bench_duration_scaling,
);
criterion_main!(benches);
