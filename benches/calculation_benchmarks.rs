//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite covers:
//! - Bracket evaluation for both tax tables
//! - A single monthly payslip computed in-process
//! - A full summary pass (monthly, vacation, thirteenth)
//! - The `/calculate` endpoint end to end
//! - Batches of 100 requests through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use folha_engine::api::{AppState, CalculationRequest, create_router};
use folha_engine::calculation::{
    compute_monthly, compute_summary, contribution_table, withholding_table,
};
use folha_engine::config::ConfigLoader;
use folha_engine::models::{Deduction, PayrollInput};
use folha_engine::snapshot::JsonFileStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/folha").expect("Failed to load config");
    let snapshot_path = std::env::temp_dir().join("folha-bench-snapshots.json");
    AppState::new(config, JsonFileStore::new(snapshot_path))
}

/// A payslip exercising every earning rule and `deduction_count` ad-hoc
/// deductions.
fn create_payroll_input(deduction_count: usize) -> PayrollInput {
    PayrollInput {
        workload_divisor: Decimal::from(220),
        base_salary: Decimal::new(452_350, 2),
        overtime_hours: Decimal::from(12),
        overtime_percentage: Decimal::from(75),
        night_shift_hours: Decimal::from(40),
        night_overtime_hours: Decimal::from(4),
        night_shift_percentage: Decimal::from(20),
        training_value: Decimal::from(1_200),
        training_duration: Decimal::from(16),
        training_hours_given: Decimal::from(8),
        health_insurance: Decimal::new(18_990, 2),
        deductions: (0..deduction_count)
            .map(|i| Deduction {
                description: format!("Desconto {}", i + 1),
                value: Decimal::new(2_500, 2),
            })
            .collect(),
        working_days: Decimal::from(25),
        sundays_and_holidays: Decimal::from(5),
        ..Default::default()
    }
}

fn create_request(deduction_count: usize) -> CalculationRequest {
    let input = create_payroll_input(deduction_count);
    CalculationRequest {
        workload_divisor: Some(input.workload_divisor),
        base_salary: input.base_salary,
        overtime_hours: input.overtime_hours,
        night_shift_hours: input.night_shift_hours,
        night_overtime_hours: input.night_overtime_hours,
        training_value: input.training_value,
        training_duration: input.training_duration,
        training_hours_given: input.training_hours_given,
        health_insurance: input.health_insurance,
        deductions: input.deductions,
        working_days: input.working_days,
        sundays_and_holidays: input.sundays_and_holidays,
        ..Default::default()
    }
}

/// Benchmark: bracket lookups across the whole range of bases.
fn bench_brackets(c: &mut Criterion) {
    let bases: Vec<Decimal> = (0..100).map(|i| Decimal::from(i * 120)).collect();

    let mut group = c.benchmark_group("brackets");
    group.throughput(Throughput::Elements(bases.len() as u64));

    group.bench_function("contribution", |b| {
        b.iter(|| {
            for base in &bases {
                black_box(contribution_table().evaluate(*base));
            }
        })
    });
    group.bench_function("withholding", |b| {
        b.iter(|| {
            for base in &bases {
                black_box(withholding_table().evaluate(*base));
            }
        })
    });

    group.finish();
}

/// Benchmark: one monthly payslip, in-process.
fn bench_monthly(c: &mut Criterion) {
    let input = create_payroll_input(3);
    c.bench_function("monthly_payslip", |b| {
        b.iter(|| black_box(compute_monthly(black_box(&input))))
    });
}

/// Benchmark: monthly, vacation and thirteenth in one pass.
fn bench_summary(c: &mut Criterion) {
    let defaults = ConfigLoader::builtin();
    let input = create_request(3).into_summary_input(defaults.defaults());
    c.bench_function("summary_pass", |b| {
        b.iter(|| black_box(compute_summary(black_box(&input))))
    });
}

/// Benchmark: the `/calculate` endpoint end to end.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::to_string(&create_request(3)).unwrap();

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 different payslips through the router.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| {
            let mut request = create_request(i % 5);
            request.base_salary = Decimal::from(1_500 + i * 150);
            serde_json::to_string(&request).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: scaling with the number of ad-hoc deductions.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for deduction_count in [0usize, 1, 5, 20, 100].iter() {
        let input = create_payroll_input(*deduction_count);

        group.throughput(Throughput::Elements(*deduction_count as u64));
        group.bench_with_input(
            BenchmarkId::new("deductions", deduction_count),
            &input,
            |b, input| b.iter(|| black_box(compute_monthly(input))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_brackets,
    bench_monthly,
    bench_summary,
    bench_calculate_endpoint,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
