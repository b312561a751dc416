// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_frame_geometry::line::LineEquation;
use understory_frame_geometry::matrix::parse_matrix;
use understory_frame_geometry::rect::rotated_bounds;

fn bench_parse_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/parse_matrix");
    let inputs = [
        ("identity", "none"),
        ("translate", "matrix(1, 0, 0, 1, 120.5, -48)"),
        (
            "rotate_scale",
            "matrix(0.612372, 0.353553, -0.353553, 0.612372, 10, 20)",
        ),
    ];
    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(parse_matrix(black_box(input))));
        });
    }
    group.finish();
}

fn bench_rotated_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/rotated_bounds");
    let rect = Rect::new(40.0, 60.0, 340.0, 260.0);
    for deg in [0.0_f64, 30.0, 90.0, 217.5] {
        group.bench_with_input(BenchmarkId::from_parameter(deg), &deg, |b, &deg| {
            b.iter(|| black_box(rotated_bounds(black_box(rect), deg)));
        });
    }
    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let l1 = LineEquation::from_angle(Point::new(10.0, 20.0), 33.0);
    let l2 = LineEquation::from_angle(Point::new(-40.0, 5.0), -71.0);
    let probes: Vec<Point> = (0..256)
        .map(|i| Point::new(f64::from(i) * 1.5 - 190.0, f64::from(i % 17) * 9.0))
        .collect();

    c.bench_function("geometry/line_intersection", |b| {
        b.iter(|| black_box(black_box(l1).intersection(&l2)));
    });
    c.bench_function("geometry/signed_distance_256", |b| {
        b.iter(|| {
            probes
                .iter()
                .map(|&p| l1.signed_distance_to(p))
                .sum::<f64>()
        });
    });
}

criterion_group!(benches, bench_parse_matrix, bench_rotated_bounds, bench_lines);
criterion_main!(benches);
