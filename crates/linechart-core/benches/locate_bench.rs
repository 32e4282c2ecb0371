// File: crates/linechart-core/benches/locate_bench.rs
// Summary: Benchmarks for the per-frame nearest-point search and path builds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linechart_core::{build_path, nearest_x_index, AxisMinMax, Curve, DataPoint, PathParams};

fn gen_points(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| DataPoint::new(i as f64, (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001))
        .collect()
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_x_index");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_points(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut q = 0.0f64;
            b.iter(|| {
                // Sweep queries across the domain like a moving touch.
                q = (q + 37.0) % (n as f64);
                black_box(nearest_x_index(&data, q, true));
            });
        });
    }
    group.finish();
}

fn bench_build_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_path");
    for &n in &[1_000usize, 10_000usize] {
        let data = gen_points(n);
        let axis = AxisMinMax::of_points(&data, false, None, None);
        for curve in [Curve::Linear, Curve::Monotone] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_{curve:?}")),
                &n,
                |b, _| {
                    b.iter(|| {
                        black_box(build_path(&PathParams {
                            data: &data,
                            width: 1024.0,
                            height: 640.0,
                            end_spacing: 20.0,
                            is_filled: false,
                            curve,
                            axis,
                        }));
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_locate, bench_build_path);
criterion_main!(benches);
