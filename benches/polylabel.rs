//! Benchmarks for the pole of inaccessibility search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use inaccessum::polylabel::{label_features, pole_of_inaccessibility, PolylabelOptions};
use inaccessum::{Point2, Polygon};

/// Generates a star-shaped ring with wobbly spikes.
fn generate_star(num_points: usize, cx: f64, cy: f64, radius: f64) -> Vec<Point2<f64>> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64 * 2.0 * std::f64::consts::PI;
            let spike = if i % 2 == 0 { 1.0 } else { 0.55 };
            let wobble = ((i * 17) % 100) as f64 / 1000.0; // Deterministic "noise"
            let r = radius * (spike + wobble);
            Point2::new(cx + r * t.cos(), cy + r * t.sin())
        })
        .collect()
}

/// A star with a smaller star-shaped hole off-center.
fn generate_star_with_hole(num_points: usize) -> Polygon<f64> {
    Polygon::with_holes(
        generate_star(num_points, 0.0, 0.0, 100.0),
        vec![generate_star(num_points / 4, 15.0, 10.0, 20.0)],
    )
}

fn bench_vertex_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("polylabel_vertices");
    let options = PolylabelOptions::with_precision(0.5);

    for size in [16, 128, 1024, 8192] {
        let polygon = generate_star_with_hole(size);
        group.throughput(Throughput::Elements(polygon.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("star", size), &polygon, |b, poly| {
            b.iter(|| pole_of_inaccessibility(black_box(poly), black_box(&options)))
        });
    }

    group.finish();
}

fn bench_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("polylabel_precision");
    let polygon = generate_star_with_hole(512);

    for precision in [10.0, 1.0, 0.1, 0.01] {
        let options = PolylabelOptions::with_precision(precision);
        group.bench_with_input(
            BenchmarkId::new("star_512", precision),
            &options,
            |b, opts| b.iter(|| pole_of_inaccessibility(black_box(&polygon), black_box(opts))),
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("polylabel_batch");

    let features: Vec<(usize, Polygon<f64>)> = (0..200)
        .map(|i| {
            let ring = generate_star(64 + i % 32, i as f64 * 300.0, 0.0, 50.0 + i as f64);
            (i, Polygon::new(ring))
        })
        .collect();
    group.throughput(Throughput::Elements(features.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| label_features(black_box(&features), None))
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        b.iter(|| inaccessum::polylabel::par_label_features(black_box(&features), None))
    });

    group.finish();
}

criterion_group!(benches, bench_vertex_count, bench_precision, bench_batch);
criterion_main!(benches);
