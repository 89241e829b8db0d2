use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabula_core::math::{Color, Vec2, FRAC_PI_3};
use tabula_lanes::raster_lane::{circle_spans, polygon_spans, ring_spans, VectorCanvas, ALL_ROWS};

fn bench_spans(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scanline Spans");

    group.bench_function("Circle r=200", |b| {
        b.iter(|| {
            black_box(circle_spans(
                black_box(Vec2::new(256.0, 256.0)),
                200.0,
                ALL_ROWS,
            ))
        })
    });

    group.bench_function("Ring r=200 w=12", |b| {
        b.iter(|| {
            black_box(ring_spans(
                black_box(Vec2::new(256.0, 256.0)),
                200.0,
                12.0,
                ALL_ROWS,
            ))
        })
    });

    let hexagon: Vec<Vec2> = (0..6)
        .map(|i| Vec2::new(256.0, 256.0) + Vec2::from_angle(i as f32 * FRAC_PI_3) * 150.0)
        .collect();
    group.bench_function("Hexagon r=150", |b| {
        b.iter(|| black_box(polygon_spans(black_box(&hexagon), ALL_ROWS)))
    });

    group.finish();
}

fn bench_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("Vector Canvas");

    group.bench_function("Anti-aliased circle 256x256", |b| {
        let mut canvas = VectorCanvas::new(256, 256);
        b.iter(|| canvas.fill_circle(Vec2::new(128.0, 128.0), 100.0, Color::WHITE))
    });

    group.finish();
}

criterion_group!(benches, bench_spans, bench_canvas);
criterion_main!(benches);
