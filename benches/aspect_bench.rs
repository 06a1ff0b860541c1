use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harmonia_core::aspects::{aspects_in_chart, AspectCatalog};
use harmonia_core::chart::{Chart, ChartPoint};
use harmonia_core::patterns::{detect_patterns, PatternOrbs};

fn test_chart(n: usize) -> Chart {
    let points = (0..n)
        .map(|i| ChartPoint::new(format!("planet_{}", i), (i as f64) * 27.0))
        .collect();
    Chart::new(points).unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let catalog = AspectCatalog::majors();
    c.bench_function("classify_aspect", |b| {
        b.iter(|| catalog.classify(black_box(118.5)))
    });
}

fn bench_aspects_in_chart(c: &mut Criterion) {
    let catalog = AspectCatalog::majors();
    let chart = test_chart(10);
    c.bench_function("aspects_in_chart_10", |b| {
        b.iter(|| aspects_in_chart(black_box(&chart), &catalog))
    });
}

fn bench_detect_patterns(c: &mut Criterion) {
    let orbs = PatternOrbs::default();
    let chart = test_chart(14);
    c.bench_function("detect_patterns_14", |b| {
        b.iter(|| detect_patterns(black_box(&chart), &orbs))
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_aspects_in_chart,
    bench_detect_patterns
);
criterion_main!(benches);
