use super::*;
use proptest::prelude::*;

const SIZE: u32 = 32;

fn render(config: RasterConfig, path: &Path, style: DrawStyle) -> CoverageMask {
    let mut rasterizer = Rasterizer::new(config).unwrap();
    rasterizer.render_mask(path, &style, SIZE, SIZE).unwrap()
}

fn coord() -> impl Strategy<Value = f32> {
    0.0f32..(SIZE as f32)
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

// Property: at one sample per pixel a rectangle covers exactly the pixels
// between its floored corners
proptest! {
    #[test]
    fn prop_aliased_rect_matches_reference(a in point(), b in point()) {
        let rect = Rect::new(a.x, a.y, b.x, b.y);
        let mask = render(RasterConfig::aliased(), &Path::rect(rect), FillRule::NonZero.into());

        let (x0, x1) = (rect.x0.floor() as i32, rect.x1.floor() as i32);
        let (y0, y1) = (rect.y0.floor() as i32, rect.y1.floor() as i32);
        for y in 0..SIZE as i32 {
            for x in 0..SIZE as i32 {
                let inside = x >= x0 && x < x1 && y >= y0 && y < y1;
                let expected = if inside { 255 } else { 0 };
                prop_assert_eq!(mask.get(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }
}

// Property: rendering the same path twice gives identical bytes
proptest! {
    #[test]
    fn prop_deterministic(points in prop::collection::vec(point(), 3..8), width in 0.5f32..4.0) {
        let path = Path::polygon(&points);
        let fill: DrawStyle = FillRule::EvenOdd.into();
        prop_assert_eq!(
            render(RasterConfig::default(), &path, fill.clone()),
            render(RasterConfig::default(), &path, fill)
        );

        let stroke: DrawStyle = StrokeStyle::new(width).with_join(LineJoin::Round).into();
        prop_assert_eq!(
            render(RasterConfig::default(), &path, stroke.clone()),
            render(RasterConfig::default(), &path, stroke)
        );
    }
}

// Property: a fill never covers a pixel outside its outline's bounds
proptest! {
    #[test]
    fn prop_fill_contained_in_bounds(points in prop::collection::vec(point(), 3..8)) {
        let path = Path::polygon(&points);
        let mask = render(RasterConfig::default(), &path, FillRule::NonZero.into());
        let Some(bounds) = path.bounds() else {
            return Ok(());
        };
        let allowed = IntRect::covering(&bounds);
        if let Some(covered) = mask.coverage_bounds() {
            prop_assert!(covered.x0 >= allowed.x0 && covered.x1 <= allowed.x1);
            prop_assert!(covered.y0 >= allowed.y0 && covered.y1 <= allowed.y1);
        }
    }
}

// Property: a stroke stays within half its width (plus caps) of the path
proptest! {
    #[test]
    fn prop_round_stroke_contained(a in point(), b in point(), width in 0.5f32..6.0) {
        let mut path = Path::new();
        path.move_to(a).line_to(b);
        let style = StrokeStyle::new(width)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Round);
        let mask = render(RasterConfig::default(), &path, style.into());

        // Slack for rounding in the cap arcs
        let hw = width / 2.0 + 1e-3;
        let grown = Rect::new(
            a.x.min(b.x) - hw,
            a.y.min(b.y) - hw,
            a.x.max(b.x) + hw,
            a.y.max(b.y) + hw,
        );
        let allowed = IntRect::covering(&grown);
        if let Some(covered) = mask.coverage_bounds() {
            prop_assert!(covered.x0 >= allowed.x0 && covered.x1 <= allowed.x1);
            prop_assert!(covered.y0 >= allowed.y0 && covered.y1 <= allowed.y1);
        }
    }
}

// Property: for a triangle the two fill rules agree
proptest! {
    #[test]
    fn prop_rules_agree_on_triangles(a in point(), b in point(), c in point()) {
        let path = Path::polygon(&[a, b, c]);
        prop_assert_eq!(
            render(RasterConfig::default(), &path, FillRule::NonZero.into()),
            render(RasterConfig::default(), &path, FillRule::EvenOdd.into())
        );
    }
}

// Property: coverage of a triangle tracks its true area
proptest! {
    #[test]
    fn prop_triangle_area(a in point(), b in point(), c in point()) {
        let area = ((b - a).cross(c - a) / 2.0).abs() as f64;
        let path = Path::polygon(&[a, b, c]);
        let mask = render(RasterConfig::default(), &path, FillRule::NonZero.into());
        let perimeter = (a.distance_to(b) + b.distance_to(c) + c.distance_to(a)) as f64;
        // Flooring onto the grid moves each edge by less than one sample
        prop_assert!((mask.area() - area).abs() <= perimeter / 10.0 + 1.0);
    }
}

fn wide_point() -> impl Strategy<Value = Point> {
    (-8.0f32..40.0, -8.0f32..40.0).prop_map(|(x, y)| Point::new(x, y))
}

// Property: clipping to a pixel-aligned window leaves every pixel inside it
// exactly as the unclipped render has it
proptest! {
    #[test]
    fn prop_clip_window_matches_unclipped(
        a in wide_point(),
        b in wide_point(),
        c in wide_point(),
        (x0, y0, w, h) in (0i32..16, 0i32..16, 1i32..16, 1i32..16),
        even_odd in any::<bool>(),
    ) {
        let rule = if even_odd { FillRule::EvenOdd } else { FillRule::NonZero };
        let path = Path::polygon(&[a, b, c]);
        let full = render(RasterConfig::default(), &path, rule.into());

        let window = IntRect::new(x0, y0, x0 + w, y0 + h);
        let clip = Rect::new(x0 as f32, y0 as f32, (x0 + w) as f32, (y0 + h) as f32);
        let mut rasterizer = Rasterizer::new(RasterConfig::default()).unwrap();
        let mut clipped = CoverageMask::new(SIZE, SIZE).unwrap();
        rasterizer.fill_path(&path, rule, Some(clip), &mut clipped).unwrap();

        for y in 0..SIZE as i32 {
            for x in 0..SIZE as i32 {
                let want = if window.contains(x, y) { full.get(x, y) } else { 0 };
                prop_assert_eq!(clipped.get(x, y), want, "pixel ({}, {})", x, y);
            }
        }
    }
}
