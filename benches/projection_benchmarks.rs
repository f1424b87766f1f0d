//! Performance benchmarks for the leave entitlement engine.
//!
//! Covers the pure projector at several horizons and the full HTTP path.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use leave_engine::api::{AppState, create_router};
use leave_engine::calculation::project_entitlements;
use leave_engine::config::LeavePolicy;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn bench_projection_horizons(c: &mut Criterion) {
    let policy = LeavePolicy::statutory();
    let onboard = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

    let mut group = c.benchmark_group("projection");
    for horizon in [1u32, 5, 20, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(horizon), &horizon, |b, &h| {
            b.iter(|| project_entitlements(black_box(onboard), black_box(h), &policy).unwrap())
        });
    }
    group.finish();
}

fn bench_http_entitlements(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(LeavePolicy::statutory()));
    let body = serde_json::json!({
        "employee_name": "Bench Employee",
        "onboard_date": "2024-04-01",
        "years_to_project": 5
    })
    .to_string();

    c.bench_function("http_entitlements_5_years", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/entitlements")
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

criterion_group!(benches, bench_projection_horizons, bench_http_entitlements);
criterion_main!(benches);
