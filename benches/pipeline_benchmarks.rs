//! Performance benchmarks for the longest pair pipeline.
//!
//! This benchmark suite measures:
//! - Processing a raw file end to end at several sizes
//! - Pair generation for one crowded project (quadratic in its size)
//! - The upload endpoint through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate};
use longest_pair::api::{AppState, create_router};
use longest_pair::calculation::{generate_project_pairs, process_as_of};
use longest_pair::config::ServiceConfig;
use longest_pair::models::WorkInterval;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const BOUNDARY: &str = "bench-boundary";

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

/// Builds a file of `lines` intervals spread over `projects` projects.
fn create_raw_file(lines: usize, projects: usize) -> String {
    (0..lines)
        .map(|i| {
            let from = base_date() + Duration::days((i * 7 % 900) as i64);
            let to = from + Duration::days((30 + i * 13 % 300) as i64);
            format!(
                "{}, {}, {}, {}\n",
                100 + i % 250,
                i % projects,
                from.format("%Y-%m-%d"),
                to.format("%Y-%m-%d")
            )
        })
        .collect()
}

fn create_project(size: usize) -> Vec<WorkInterval> {
    (0..size)
        .map(|i| {
            let from = base_date() + Duration::days((i * 3) as i64);
            WorkInterval {
                employee_id: i.to_string(),
                project_id: "1".to_string(),
                from,
                to: from + Duration::days(90),
            }
        })
        .collect()
}

/// Benchmark: End-to-end processing at increasing file sizes.
fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");

    for lines in [10usize, 100, 1000].iter() {
        let raw = create_raw_file(*lines, 20);
        group.throughput(Throughput::Elements(*lines as u64));
        group.bench_with_input(BenchmarkId::new("lines", lines), &raw, |b, raw| {
            b.iter(|| black_box(process_as_of(raw, "yyyy-MM-dd", today()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: Pair generation within one project.
fn bench_pair_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_generation");

    for size in [10usize, 100, 500].iter() {
        let intervals = create_project(*size);
        group.throughput(Throughput::Elements((size * (size - 1) / 2) as u64));
        group.bench_with_input(
            BenchmarkId::new("intervals", size),
            &intervals,
            |b, intervals| b.iter(|| black_box(generate_project_pairs(intervals))),
        );
    }

    group.finish();
}

/// Benchmark: A 100-line upload through the HTTP router.
fn bench_upload(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::in_memory(ServiceConfig::default()));
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"bench.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n{content}\r\n--{b}--\r\n",
        b = BOUNDARY,
        content = create_raw_file(100, 10)
    );

    c.bench_function("upload_100_lines", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/attachments/upload")
                        .header(
                            "Content-Type",
                            format!("multipart/form-data; boundary={}", BOUNDARY),
                        )
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_process, bench_pair_generation, bench_upload);
criterion_main!(benches);
