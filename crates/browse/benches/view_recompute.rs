//! Benchmarks for view recomputation
//!
//! Run with: cargo bench --package browse
//!
//! Uses the sample jobs replicated into a larger record set.

use browse::{FilterValue, ListViewController};
use catalog::{Catalog, Job};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn large_job_set(copies: u32) -> Vec<Job> {
    let sample = Catalog::sample().jobs();
    let per_copy = sample.len() as u32;
    (0..copies)
        .flat_map(|copy| {
            sample.iter().cloned().map(move |mut job| {
                job.id += copy * per_copy;
                job
            })
        })
        .collect()
}

fn bench_filter_and_sort(c: &mut Criterion) {
    let jobs = large_job_set(1_000);
    let mut controller = ListViewController::new(jobs);

    c.bench_function("set_filter_category_remote", |b| {
        b.iter(|| {
            controller
                .set_filter("category", black_box(FilterValue::set(["Design", "Writing"])))
                .unwrap();
            let view = controller
                .set_filter("remote", black_box(FilterValue::flag(true)))
                .unwrap();
            black_box(view.total_match_count)
        })
    });
}

fn bench_keyword_search(c: &mut Criterion) {
    let jobs = large_job_set(1_000);
    let mut controller = ListViewController::new(jobs);

    c.bench_function("set_filter_keyword", |b| {
        b.iter(|| {
            let view = controller
                .set_filter("keyword", black_box(FilterValue::text("react")))
                .unwrap();
            black_box(view.total_match_count)
        })
    });
}

fn bench_page_change(c: &mut Criterion) {
    let jobs = large_job_set(1_000);
    let mut controller = ListViewController::new(jobs);
    controller.set_sort("price", "asc").unwrap();

    c.bench_function("set_page", |b| {
        let mut page = 0_i64;
        b.iter(|| {
            page = (page + 1) % 500;
            let view = controller.set_page(black_box(page));
            black_box(view.current_page)
        })
    });
}

criterion_group!(
    benches,
    bench_filter_and_sort,
    bench_keyword_search,
    bench_page_change
);
criterion_main!(benches);
