//! Criterion benchmarks for heatmap layout and card composition

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use heatcard::render::{cardify, render_heatmap, Palette, Theme};
use heatcard::services::parse_samples;
use heatcard::types::DailySample;
use std::hint::black_box;

/// One sample per day starting 2024-01-01, cycling through every intensity level
fn year_of_samples(days: usize) -> Vec<DailySample> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    (0..days)
        .map(|i| DailySample::from_date(start + Duration::days(i as i64), (i % 10) as f64 * 3600.0))
        .collect()
}

fn bench_render_heatmap(c: &mut Criterion) {
    let samples = year_of_samples(366);

    let mut group = c.benchmark_group("heatmap");
    group.throughput(Throughput::Elements(samples.len() as u64));

    for cols in [40usize, 80, 200] {
        group.bench_with_input(BenchmarkId::new("render_year", cols), &cols, |b, &cols| {
            b.iter(|| render_heatmap(black_box(&samples), cols, Palette::colored(Theme::Dark)));
        });
    }

    group.bench_function("render_year_monochrome", |b| {
        b.iter(|| render_heatmap(black_box(&samples), 80, Palette::monochrome()));
    });

    group.finish();
}

fn bench_cardify(c: &mut Criterion) {
    let samples = year_of_samples(366);
    let (grid, width) = render_heatmap(&samples, 120, Palette::colored(Theme::Dark));

    let mut group = c.benchmark_group("card");
    group.throughput(Throughput::Elements(grid.len() as u64));

    group.bench_function("cardify_heatmap", |b| {
        b.iter(|| cardify(black_box(&grid), "Last 12 months", width, 0, Palette::colored(Theme::Dark)));
    });

    group.finish();
}

fn bench_parse_samples(c: &mut Criterion) {
    let doc = serde_json::to_vec(&year_of_samples(366)).unwrap_or_default();

    let mut group = c.benchmark_group("loader");
    group.throughput(Throughput::Bytes(doc.len() as u64));

    group.bench_function("parse_year_document", |b| {
        b.iter(|| {
            let mut bytes = doc.clone();
            let _ = parse_samples(black_box(&mut bytes));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render_heatmap, bench_cardify, bench_parse_samples);
criterion_main!(benches);
