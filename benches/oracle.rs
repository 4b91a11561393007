//! Benchmarks comparing scalar and SIMD boundary distance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use inaccessum::polylabel::PolylabelOptions;
use inaccessum::simd::{polylabel_packed, PackedPolygon};
use inaccessum::{pole_of_inaccessibility, BoundaryDistance, Point2, Polygon};

/// Generates a regular polygon with deterministic radial jitter.
fn generate_ring(num_points: usize) -> Polygon<f64> {
    Polygon::new(
        (0..num_points)
            .map(|i| {
                let t = i as f64 / num_points as f64 * 2.0 * std::f64::consts::PI;
                let r = 100.0 + ((i * 31) % 50) as f64 / 10.0;
                Point2::new(r * t.cos(), r * t.sin())
            })
            .collect(),
    )
}

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("signed_distance");

    for size in [64, 512, 4096] {
        let polygon = generate_ring(size);
        let packed = PackedPolygon::new(&polygon);
        let query = Point2::new(12.5, -7.25);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("scalar", size), &polygon, |b, poly| {
            b.iter(|| poly.signed_distance(black_box(query)))
        });
        group.bench_with_input(BenchmarkId::new("simd", size), &packed, |b, packed| {
            b.iter(|| packed.signed_distance(black_box(query)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("polylabel_oracle");
    let polygon = generate_ring(2048);
    let options = PolylabelOptions::with_precision(0.1);

    group.bench_function("scalar", |b| {
        b.iter(|| pole_of_inaccessibility(black_box(&polygon), black_box(&options)))
    });
    group.bench_function("simd", |b| {
        b.iter(|| polylabel_packed(black_box(&polygon), black_box(&options)))
    });

    group.finish();
}

criterion_group!(benches, bench_oracle, bench_search);
criterion_main!(benches);
