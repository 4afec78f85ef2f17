use butterfly_rust::api::{
    aggregate_for_grid, create_image, create_merged_image, ButterflyInfo, DateDelta, Observation,
};
use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn decade_info() -> ButterflyInfo {
    ButterflyInfo::new(
        -40,
        40,
        NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(1959, 12, 31).unwrap(),
        DateDelta::one_day(),
    )
    .unwrap()
}

/// Synthetic catalog: a handful of sightings per day drifting through the
/// activity belt, enough to exercise the full grid.
fn synthetic_rows(info: &ButterflyInfo, per_day: usize) -> Vec<Observation> {
    let days = info.date_axis_len();
    let mut rows = Vec::with_capacity(days * per_day);
    for day in 0..days {
        let date = info
            .date_start
            .checked_add_days(Days::new(day as u64))
            .unwrap();
        for group in 0..per_day {
            let center = ((day + group * 7) % 61) as i32 - 30;
            let lo = (center - 2).max(info.lat_min);
            let hi = (center + 2).min(info.lat_max);
            rows.push(Observation::new(date, lo, hi));
        }
    }
    rows
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let info = decade_info();

    for per_day in [1usize, 4, 8] {
        let rows = synthetic_rows(&info, per_day);
        group.bench_with_input(
            BenchmarkId::new("aggregate_for_grid", rows.len()),
            &rows,
            |b, rows| {
                b.iter(|| aggregate_for_grid(black_box(rows), black_box(&info)));
            },
        );
    }

    group.finish();
}

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");
    let info = decade_info();
    let filled = aggregate_for_grid(&synthetic_rows(&info, 4), &info);

    group.bench_function("create_image", |b| {
        b.iter(|| create_image(black_box(&filled), black_box(&info)));
    });

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let info = decade_info();

    for source_count in [2usize, 4, 8] {
        let sources: Vec<_> = (0..source_count)
            .map(|i| aggregate_for_grid(&synthetic_rows(&info, i + 1), &info))
            .collect();
        group.bench_with_input(
            BenchmarkId::new("create_merged_image", source_count),
            &sources,
            |b, sources| {
                b.iter(|| create_merged_image(black_box(sources), black_box(&info)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_rasterize, bench_merge);
criterion_main!(benches);
