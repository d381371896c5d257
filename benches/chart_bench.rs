//! Benchmarks for the chart adapter and text chart
//!
//! Run with: cargo bench

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cropwatch::chart::ChartData;
use cropwatch::model::SensorReading;
use cropwatch::render::{chart_lines, sparkline};

fn create_test_readings(count: usize) -> Vec<SensorReading> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            SensorReading::new(
                22.0 + (t / 10.0).sin() * 4.0,
                55.0 + (t / 7.0).cos() * 10.0,
                480.0 + (t / 13.0).sin() * 40.0,
                6.5 + (t / 17.0).cos() * 0.3,
                format!("2024-03-15T{:02}:{:02}:{:02}Z", (i / 3600) % 24, (i / 60) % 60, i % 60),
            )
        })
        .collect()
}

fn bench_chart_adapter(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_adapter");

    for size in [100, 1000, 10000] {
        let readings = create_test_readings(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("from_readings_{}", size), |b| {
            b.iter(|| ChartData::from_readings_in(black_box(&readings), &Utc))
        });
    }

    group.finish();
}

fn bench_text_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_chart");

    let chart = ChartData::from_readings_in(&create_test_readings(100), &Utc);

    group.bench_function("sparkline_100", |b| {
        b.iter(|| sparkline(black_box(&chart.temperature().values)))
    });

    group.bench_function("chart_lines_100", |b| {
        b.iter(|| chart_lines(black_box(&chart)))
    });

    group.finish();
}

criterion_group!(benches, bench_chart_adapter, bench_text_chart);
criterion_main!(benches);
