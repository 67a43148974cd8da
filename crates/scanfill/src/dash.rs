// this_file: crates/scanfill/src/dash.rs

//! Dashing on top of the stroker
//!
//! The dasher walks each subpath by arc length and chops it into "on" runs.
//! Every run is handed to the wrapped [`Stroker`] as an independent open
//! subpath, so runs get caps at both ends and joins only within a run. A solid
//! pattern passes the path through to the stroker untouched.

use scanfill_core::{DashPattern, PathSink, Point, Result};

use crate::stroke::Stroker;

/// Most on/off toggles honoured within a single segment
pub const MAX_DASH_STEPS: usize = 1 << 16;

/// [`PathSink`] splitting the centerline into dash runs for a [`Stroker`]
pub struct Dasher<'a> {
    stroker: Stroker<'a>,
    /// Even-length copy of the pattern
    pattern: Vec<f32>,
    phase: f32,
    index: usize,
    /// Length left in the current entry
    remaining: f32,
    on: bool,
    /// Pattern draws no gaps; strokes pass straight through
    solid: bool,
    start: Point,
    current: Option<Point>,
}

impl<'a> Dasher<'a> {
    /// Wrap `stroker` to stroke with `dash`
    ///
    /// A solid `dash` (see [`DashPattern::is_solid`]) strokes the path as the
    /// bare stroker would.
    pub fn new(stroker: Stroker<'a>, dash: &DashPattern) -> Self {
        let mut pattern = dash.segments().to_vec();
        if pattern.len() % 2 == 1 {
            pattern.extend_from_within(..);
        }
        let mut dasher = Self {
            stroker,
            pattern,
            phase: dash.phase(),
            index: 0,
            remaining: 0.0,
            on: true,
            solid: dash.is_solid(),
            start: Point::ZERO,
            current: None,
        };
        dasher.restart();
        dasher
    }

    /// Rewind the pattern to the phase
    fn restart(&mut self) {
        self.index = 0;
        self.on = true;
        self.remaining = self.pattern.first().copied().unwrap_or(0.0);

        let period: f32 = self.pattern.iter().sum();
        if !(period > 0.0 && period.is_finite()) {
            return;
        }
        let mut offset = self.phase.rem_euclid(period);
        if !offset.is_finite() {
            offset = 0.0;
        }
        for _ in 0..self.pattern.len() * 2 {
            let entry = self.pattern[self.index];
            // A zero-length entry right at the phase still counts, so it can draw a dot
            if offset > entry || (offset == entry && entry > 0.0) {
                offset -= entry;
                self.advance();
            } else {
                break;
            }
        }
        self.remaining = (self.pattern[self.index] - offset).max(0.0);
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.pattern.len().max(1);
        self.on = !self.on;
        self.remaining = self.pattern.get(self.index).copied().unwrap_or(0.0);
    }
}

impl PathSink for Dasher<'_> {
    fn move_to(&mut self, p: Point) -> Result<()> {
        self.restart();
        self.start = p;
        self.current = Some(p);
        self.stroker.move_to(p)
    }

    fn line_to(&mut self, p: Point) -> Result<()> {
        let Some(mut from) = self.current else {
            return self.move_to(p);
        };
        if self.solid {
            self.current = Some(p);
            return self.stroker.line_to(p);
        }
        let mut left = from.distance_to(p);
        if !left.is_finite() {
            log::debug!("Skipping dash segment with non-finite length");
            self.current = Some(p);
            return Ok(());
        }

        let mut steps = 0;
        while left > self.remaining {
            if steps == MAX_DASH_STEPS {
                log::warn!(
                    "Dash pattern toggled {} times in one segment; drawing the rest {}",
                    MAX_DASH_STEPS,
                    if self.on { "on" } else { "off" }
                );
                break;
            }
            steps += 1;

            let split = from.lerp(p, self.remaining / left);
            left -= self.remaining;
            if self.on {
                self.stroker.line_to(split)?;
                self.stroker.end_subpath()?;
            } else {
                self.stroker.move_to(split)?;
            }
            from = split;
            self.advance();
        }

        self.remaining = (self.remaining - left).max(0.0);
        if self.on {
            self.stroker.line_to(p)?;
        }
        self.current = Some(p);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let Some(current) = self.current else {
            return Ok(());
        };
        if self.solid {
            self.current = Some(self.start);
            return self.stroker.close();
        }
        if current != self.start {
            self.line_to(self.start)?;
        }
        self.stroker.end_subpath()?;
        self.move_to(self.start)
    }

    fn finish(&mut self) -> Result<()> {
        self.current = None;
        self.stroker.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeList;
    use crate::fixed::SubpixelScale;
    use scanfill_core::{IntRect, LineCap, LineJoin, StrokeStyle};

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn dash_line(segments: &[f32], phase: f32, cap: LineCap, to: f32) -> EdgeList {
        let mut edges = EdgeList::new(SubpixelScale::DEFAULT);
        {
            let style = StrokeStyle::new(2.0).with_cap(cap);
            let dash = DashPattern::new(segments.to_vec(), phase).unwrap();
            let mut dasher = Dasher::new(Stroker::new(&mut edges, &style, 0.25), &dash);
            dasher.move_to(p(0.0, 0.0)).unwrap();
            dasher.line_to(p(to, 0.0)).unwrap();
            dasher.finish().unwrap();
        }
        edges
    }

    fn x_span(edges: &EdgeList) -> (i32, i32) {
        let b = edges.pixel_bbox().unwrap();
        (b.x0, b.x1)
    }

    #[test]
    fn test_even_pattern() {
        let edges = dash_line(&[2.0, 2.0], 0.0, LineCap::Butt, 10.0);
        // Runs 0-2, 4-6, 8-10: two vertical sides each
        assert_eq!(edges.len(), 6);
        assert_eq!(x_span(&edges), (0, 10));
    }

    #[test]
    fn test_phase_shifts_runs() {
        let edges = dash_line(&[2.0, 2.0], 1.0, LineCap::Butt, 10.0);
        // Runs 0-1, 3-5, 7-9
        assert_eq!(edges.len(), 6);
        assert_eq!(x_span(&edges), (0, 9));
    }

    #[test]
    fn test_phase_at_gap_boundary_starts_off() {
        let edges = dash_line(&[5.0, 5.0], 5.0, LineCap::Butt, 10.0);
        assert_eq!(edges.len(), 2);
        assert_eq!(x_span(&edges), (5, 10));
    }

    #[test]
    fn test_negative_phase_wraps() {
        let edges = dash_line(&[2.0, 2.0], -1.0, LineCap::Butt, 10.0);
        // Runs 1-3, 5-7, 9-10
        assert_eq!(edges.len(), 6);
        assert_eq!(x_span(&edges), (1, 10));
    }

    #[test]
    fn test_odd_pattern_alternates() {
        let edges = dash_line(&[3.0], 0.0, LineCap::Butt, 12.0);
        // Runs 0-3 and 6-9
        assert_eq!(edges.len(), 4);
        assert_eq!(x_span(&edges), (0, 9));
    }

    #[test]
    fn test_zero_length_runs_draw_dots() {
        let edges = dash_line(&[0.0, 4.0], 0.0, LineCap::Round, 6.0);
        assert!(!edges.is_empty());
        // Dots of radius 1 at x = 0 and x = 4
        assert_eq!(x_span(&edges), (-1, 5));
    }

    #[test]
    fn test_zero_length_runs_with_butt_caps_vanish() {
        let edges = dash_line(&[0.0, 4.0], 0.0, LineCap::Butt, 6.0);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_solid_pattern_strokes_like_bare_stroker() {
        let style = StrokeStyle::new(2.0)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Round);
        let draw = |sink: &mut dyn PathSink| {
            sink.move_to(p(1.0, 1.0))?;
            sink.line_to(p(9.0, 1.0))?;
            sink.line_to(p(9.0, 6.0))?;
            sink.move_to(p(2.0, 8.0))?;
            sink.line_to(p(6.0, 8.0))?;
            sink.line_to(p(4.0, 12.0))?;
            sink.close()?;
            sink.finish()
        };

        let mut bare = EdgeList::new(SubpixelScale::DEFAULT);
        draw(&mut Stroker::new(&mut bare, &style, 0.25)).unwrap();

        let mut dashed = EdgeList::new(SubpixelScale::DEFAULT);
        let solid = DashPattern::new(vec![0.0, 0.0], 0.0).unwrap();
        draw(&mut Dasher::new(Stroker::new(&mut dashed, &style, 0.25), &solid)).unwrap();

        assert!(!bare.is_empty());
        assert_eq!(dashed.edges(), bare.edges());
    }

    #[test]
    fn test_pattern_restarts_after_close() {
        let mut edges = EdgeList::new(SubpixelScale::DEFAULT);
        let style = StrokeStyle::new(1.0);
        let dash = DashPattern::new(vec![3.0, 1.0], 0.0).unwrap();
        let mut dasher = Dasher::new(Stroker::new(&mut edges, &style, 0.25), &dash);
        dasher.move_to(p(0.0, 0.0)).unwrap();
        dasher.line_to(p(5.0, 0.0)).unwrap();
        dasher.line_to(p(5.0, 5.0)).unwrap();
        dasher.close().unwrap();
        assert_eq!((dasher.index, dasher.on, dasher.remaining), (0, true, 3.0));
        assert_eq!(dasher.current, Some(p(0.0, 0.0)));
    }

    #[test]
    fn test_step_guard_terminates() {
        let edges = dash_line(&[1e-6, 1e-6], 0.0, LineCap::Butt, 1000.0);
        let b = edges.pixel_bbox().unwrap_or(IntRect::new(0, 0, 0, 0));
        assert!(b.x1 <= 1000);
    }
}
