// this_file: crates/scanfill/src/rasterizer.rs

//! High-level entry point: paths and styles in, coverage rows out.
//!
//! A [`Rasterizer`] owns one edge list, one active edge list and one scan
//! converter and reuses them for every path it draws. Fill and stroke share
//! everything after edge insertion; they differ only in which [`PathSink`]
//! turns the path into edges.

use scanfill_core::{
    CoverageSink, DrawStyle, FillRule, IntRect, PathSink, RasterConfig, Rect, Result, StrokeStyle,
};

use crate::active::ActiveEdgeList;
use crate::dash::Dasher;
use crate::edge::{EdgeCounters, EdgeList};
use crate::fill::FillInserter;
use crate::fixed::SubpixelScale;
use crate::mask::CoverageMask;
use crate::path::Path;
use crate::scan_converter::{ScanConverter, SweepSummary};
use crate::stroke::Stroker;

/// Reusable single-threaded rasterizer
///
/// ```
/// use scanfill::{FillRule, Path, RasterConfig, Rasterizer, Rect};
///
/// let mut rasterizer = Rasterizer::new(RasterConfig::default())?;
/// let path = Path::rect(Rect::new(1.0, 1.0, 3.0, 3.0));
/// let mask = rasterizer.render_mask(&path, &FillRule::NonZero.into(), 4, 4)?;
/// assert_eq!(mask.get(2, 2), 255);
/// assert_eq!(mask.get(0, 0), 0);
/// # Ok::<(), scanfill::RasterError>(())
/// ```
#[derive(Debug)]
pub struct Rasterizer {
    config: RasterConfig,
    edges: EdgeList,
    active: ActiveEdgeList,
    converter: ScanConverter,
}

impl Rasterizer {
    /// Create a rasterizer after validating `config`
    pub fn new(config: RasterConfig) -> Result<Self> {
        config.validate()?;
        let scale = SubpixelScale::from_config(&config);
        Ok(Self {
            config,
            edges: EdgeList::with_capacity(scale, 256),
            active: ActiveEdgeList::with_capacity(64),
            converter: ScanConverter::new(scale),
        })
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Insertion counters of the most recent path
    pub fn edge_counters(&self) -> EdgeCounters {
        self.edges.counters()
    }

    /// Fill `path` with `rule`, clipped to `clip` when given
    pub fn fill_path<S>(
        &mut self,
        path: &Path,
        rule: FillRule,
        clip: Option<Rect>,
        sink: &mut S,
    ) -> Result<SweepSummary>
    where
        S: CoverageSink + ?Sized,
    {
        let pixel_clip = self.prepare(clip);
        {
            let mut fill = FillInserter::new(&mut self.edges);
            path.walk(&mut fill, self.config.flatness)?;
        }
        self.sweep(rule, pixel_clip, sink)
    }

    /// Stroke `path` with `style`, clipped to `clip` when given
    ///
    /// Strokes are always swept with the nonzero rule so that overlapping
    /// pieces of the outline merge.
    pub fn stroke_path<S>(
        &mut self,
        path: &Path,
        style: &StrokeStyle,
        clip: Option<Rect>,
        sink: &mut S,
    ) -> Result<SweepSummary>
    where
        S: CoverageSink + ?Sized,
    {
        let pixel_clip = self.prepare(clip);
        let flatness = self.config.flatness;
        {
            let mut stroker = Stroker::new(&mut self.edges, style, flatness);
            match &style.dash {
                Some(dash) if !dash.is_solid() => {
                    let mut dasher = Dasher::new(stroker, dash);
                    path.walk(&mut dasher, flatness)?;
                }
                Some(dash) => {
                    log::warn!(
                        "Dash pattern {:?} has no length; stroking solid",
                        dash.segments()
                    );
                    path.walk(&mut stroker, flatness)?;
                }
                None => path.walk(&mut stroker, flatness)?,
            }
        }
        self.sweep(FillRule::NonZero, pixel_clip, sink)
    }

    /// Fill or stroke depending on `style`
    pub fn draw<S>(
        &mut self,
        path: &Path,
        style: &DrawStyle,
        clip: Option<Rect>,
        sink: &mut S,
    ) -> Result<SweepSummary>
    where
        S: CoverageSink + ?Sized,
    {
        match style {
            DrawStyle::Fill(rule) => self.fill_path(path, *rule, clip, sink),
            DrawStyle::Stroke(stroke) => self.stroke_path(path, stroke, clip, sink),
        }
    }

    /// Draw `path` into a fresh `width × height` mask clipped to its bounds
    pub fn render_mask(
        &mut self,
        path: &Path,
        style: &DrawStyle,
        width: u32,
        height: u32,
    ) -> Result<CoverageMask> {
        let mut mask = CoverageMask::new(width, height)?;
        let clip = Rect::from_size(width as f32, height as f32);
        self.draw(path, style, Some(clip), &mut mask)?;
        Ok(mask)
    }

    /// Insert edges from an arbitrary [`PathSink`] producer and sweep them
    ///
    /// `emit` receives a fill inserter for the edge list; use it to feed
    /// geometry that does not live in a [`Path`].
    pub fn fill_with<F, S>(
        &mut self,
        rule: FillRule,
        clip: Option<Rect>,
        emit: F,
        sink: &mut S,
    ) -> Result<SweepSummary>
    where
        F: FnOnce(&mut dyn PathSink) -> Result<()>,
        S: CoverageSink + ?Sized,
    {
        let pixel_clip = self.prepare(clip);
        {
            let mut fill = FillInserter::new(&mut self.edges);
            emit(&mut fill)?;
            fill.finish()?;
        }
        self.sweep(rule, pixel_clip, sink)
    }

    fn prepare(&mut self, clip: Option<Rect>) -> IntRect {
        self.edges.reset();
        self.edges.set_clip(clip);
        clip.map_or(IntRect::INFINITE, |r| IntRect::covering(&r))
    }

    fn sweep<S>(&mut self, rule: FillRule, clip: IntRect, sink: &mut S) -> Result<SweepSummary>
    where
        S: CoverageSink + ?Sized,
    {
        let counters = self.edges.counters();
        log::trace!(
            "Edge list: {} inserted, {} horizontal, {} outside clip, {} pinned",
            counters.inserted,
            counters.horizontal,
            counters.outside,
            counters.pinned
        );

        let summary = self
            .converter
            .sweep(&mut self.edges, &mut self.active, rule, clip, sink)?;

        log::debug!(
            "Swept {} edges ({:?}): {} rows, {} sub-scanlines, peak {} active",
            summary.edges,
            rule,
            summary.rows_emitted,
            summary.subscanlines,
            summary.max_active
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanfill_core::{DashPattern, LineCap, Point, RasterError};

    fn rasterizer() -> Rasterizer {
        Rasterizer::new(RasterConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RasterConfig {
            hscale: 0,
            ..RasterConfig::default()
        };
        assert!(matches!(Rasterizer::new(config), Err(RasterError::Config(_))));
    }

    #[test]
    fn test_fill_rect_mask() {
        let mut r = rasterizer();
        let path = Path::rect(Rect::new(2.0, 3.0, 6.0, 5.0));
        let mask = r.render_mask(&path, &FillRule::NonZero.into(), 8, 8).unwrap();
        assert_eq!(mask.coverage_bounds(), Some(IntRect::new(2, 3, 6, 5)));
        assert_eq!(mask.area(), 8.0);
    }

    #[test]
    fn test_render_mask_clips_to_bounds() {
        let mut r = rasterizer();
        let path = Path::rect(Rect::new(-10.0, -10.0, 100.0, 100.0));
        let mask = r.render_mask(&path, &FillRule::EvenOdd.into(), 4, 3).unwrap();
        assert!(mask.data().iter().all(|&c| c == 255));
    }

    #[test]
    fn test_stroke_rect_has_hollow_center() {
        let mut r = rasterizer();
        let path = Path::rect(Rect::new(2.0, 2.0, 10.0, 10.0));
        let style = StrokeStyle::new(2.0);
        let mask = r.render_mask(&path, &style.into(), 12, 12).unwrap();
        assert_eq!(mask.get(6, 6), 0);
        assert_eq!(mask.get(2, 6), 255);
        // Miter corner
        assert!(mask.get(1, 1) > 240);
        // Outer 10×10 minus inner 6×6
        assert!((mask.area() - 64.0).abs() < 0.5);
    }

    #[test]
    fn test_solid_dash_strokes_normally() {
        let mut r = rasterizer();
        let mut path = Path::new();
        path.move_to(Point::new(1.0, 4.0)).line_to(Point::new(7.0, 4.0));
        let plain = StrokeStyle::new(2.0);
        let dashed = plain.clone().with_dash(DashPattern::new(vec![0.0, 0.0], 0.0).unwrap());
        let a = r.render_mask(&path, &plain.into(), 8, 8).unwrap();
        let b = r.render_mask(&path, &dashed.into(), 8, 8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reuse_is_deterministic() {
        let mut r = rasterizer();
        let path = Path::polygon(&[
            Point::new(0.3, 0.7),
            Point::new(9.1, 2.2),
            Point::new(4.4, 8.8),
        ]);
        let style = DrawStyle::Fill(FillRule::NonZero);
        let first = r.render_mask(&path, &style, 10, 10).unwrap();
        let stroke = StrokeStyle::new(3.0).with_cap(LineCap::Round);
        r.render_mask(&path, &stroke.into(), 10, 10).unwrap();
        let again = r.render_mask(&path, &style, 10, 10).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_fill_with_leading_line_to_starts_there() {
        let mut r = rasterizer();
        let mut mask = CoverageMask::new(16, 16).unwrap();
        r.fill_with(
            FillRule::NonZero,
            None,
            |sink| {
                sink.line_to(Point::new(8.0, 8.0))?;
                sink.line_to(Point::new(12.0, 8.0))?;
                sink.line_to(Point::new(8.0, 12.0))
            },
            &mut mask,
        )
        .unwrap();
        assert_eq!(mask.coverage_bounds(), Some(IntRect::new(8, 8, 12, 12)));
    }

    #[test]
    fn test_fill_with_custom_producer() {
        let mut r = rasterizer();
        let mut mask = CoverageMask::new(4, 4).unwrap();
        let summary = r
            .fill_with(
                FillRule::NonZero,
                None,
                |sink| {
                    sink.move_to(Point::new(0.0, 0.0))?;
                    sink.line_to(Point::new(2.0, 0.0))?;
                    sink.line_to(Point::new(2.0, 2.0))?;
                    sink.line_to(Point::new(0.0, 2.0))
                },
                &mut mask,
            )
            .unwrap();
        assert_eq!(summary.rows_emitted, 2);
        assert_eq!(mask.area(), 4.0);
        assert_eq!(r.edge_counters().inserted, 2);
    }

    #[test]
    fn test_empty_path() {
        let mut r = rasterizer();
        let mut rows = 0;
        let mut sink = |_: i32, _: i32, _: &[u8]| rows += 1;
        let summary = r
            .fill_path(&Path::new(), FillRule::NonZero, None, &mut sink)
            .unwrap();
        assert_eq!(summary, SweepSummary::default());
        assert_eq!(rows, 0);
    }
}
