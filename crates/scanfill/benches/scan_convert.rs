// this_file: crates/scanfill/benches/scan_convert.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scanfill::{
    CoverageMask, DashPattern, FillRule, LineCap, LineJoin, Path, Point, RasterConfig, Rasterizer,
    Rect, StrokeStyle,
};

fn star(center: Point, outer: f32, inner: f32, spikes: usize) -> Path {
    let points: Vec<Point> = (0..spikes * 2)
        .map(|i| {
            let angle = std::f32::consts::PI * i as f32 / spikes as f32;
            let r = if i % 2 == 0 { outer } else { inner };
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect();
    Path::polygon(&points)
}

fn zigzag(width: f32, rows: usize) -> Path {
    let mut path = Path::new();
    path.move_to(Point::new(4.0, 4.0));
    for i in 1..=rows {
        let x = if i % 2 == 0 { 4.0 } else { width - 4.0 };
        path.line_to(Point::new(x, 4.0 + i as f32 * 6.0));
    }
    path
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    for size in [32u32, 128, 512] {
        let s = size as f32;
        let rect = Path::rect(Rect::new(s * 0.1, s * 0.1, s * 0.9, s * 0.9));
        let shape = star(Point::new(s / 2.0, s / 2.0), s * 0.45, s * 0.2, 12);
        let mut rasterizer = Rasterizer::new(RasterConfig::default()).unwrap();
        let mut mask = CoverageMask::new(size, size).unwrap();
        let clip = Some(Rect::from_size(s, s));

        group.bench_with_input(BenchmarkId::new("rect", size), &rect, |b, path| {
            b.iter(|| {
                rasterizer
                    .fill_path(black_box(path), FillRule::NonZero, clip, &mut mask)
                    .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("star_even_odd", size), &shape, |b, path| {
            b.iter(|| {
                rasterizer
                    .fill_path(black_box(path), FillRule::EvenOdd, clip, &mut mask)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_aa_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("aa_level");
    let shape = star(Point::new(64.0, 64.0), 60.0, 25.0, 9);
    for level in [0u8, 2, 4, 6, 8] {
        let config = RasterConfig::default().with_aa_level(level);
        let mut rasterizer = Rasterizer::new(config).unwrap();
        let mut mask = CoverageMask::new(128, 128).unwrap();
        group.bench_function(BenchmarkId::from_parameter(level), |b| {
            b.iter(|| {
                rasterizer
                    .fill_path(black_box(&shape), FillRule::NonZero, None, &mut mask)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_stroke(c: &mut Criterion) {
    let path = zigzag(256.0, 40);
    let mut rasterizer = Rasterizer::new(RasterConfig::default()).unwrap();
    let mut mask = CoverageMask::new(256, 256).unwrap();

    let styles = [
        ("miter_butt", StrokeStyle::new(3.0)),
        (
            "round_round",
            StrokeStyle::new(3.0)
                .with_cap(LineCap::Round)
                .with_join(LineJoin::Round),
        ),
        (
            "dashed",
            StrokeStyle::new(3.0)
                .with_cap(LineCap::Square)
                .with_dash(DashPattern::new(vec![6.0, 3.0, 1.0, 3.0], 0.0).unwrap()),
        ),
    ];

    let mut group = c.benchmark_group("stroke");
    for (name, style) in styles {
        group.bench_function(name, |b| {
            b.iter(|| {
                rasterizer
                    .stroke_path(black_box(&path), &style, None, &mut mask)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_render_mask(c: &mut Criterion) {
    let shape = star(Point::new(32.0, 32.0), 30.0, 12.0, 7);
    let mut rasterizer = Rasterizer::new(RasterConfig::default()).unwrap();
    c.bench_function("render_mask_64", |b| {
        b.iter(|| {
            let mask = rasterizer
                .render_mask(black_box(&shape), &FillRule::NonZero.into(), 64, 64)
                .unwrap();
            black_box(mask);
        })
    });
}

criterion_group!(
    benches,
    bench_fill,
    bench_aa_levels,
    bench_stroke,
    bench_render_mask
);
criterion_main!(benches);
