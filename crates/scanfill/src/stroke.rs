// this_file: crates/scanfill/src/stroke.rs

//! Stroke outline generation
//!
//! A stroke is turned into filled polygons: one quad per segment body plus
//! a wedge for every join, a cap at each open end, and a dot for subpaths
//! that never moved. Every polygon goes into the edge list with the same
//! orientation, so overlaps union cleanly under the nonzero rule and the
//! result is swept exactly like a fill.

use std::f32::consts::{PI, TAU};

use scanfill_core::{LineCap, LineJoin, PathSink, Point, Result, StrokeStyle};

use crate::edge::EdgeList;

/// Segments shorter than this only mark the subpath as a potential dot
const DEGENERATE_LENGTH: f32 = 1e-5;

/// Upper bound on chords for one arc
const MAX_ARC_SEGMENTS: usize = 1024;

/// Ratio of miter length to half the stroke width for a turn from `d0` to `d1`
///
/// Equals `1 / cos(φ / 2)` for a turn angle φ: 1 for a straight continuation,
/// √2 for a right angle, unbounded for a full reversal. Directions need not
/// be normalised; a zero direction yields infinity.
pub fn miter_ratio(d0: Point, d1: Point) -> f32 {
    let (Some(d0), Some(d1)) = (d0.normalize(), d1.normalize()) else {
        return f32::INFINITY;
    };
    let sum = (d0 + d1).length();
    if sum <= 1e-6 {
        f32::INFINITY
    } else {
        2.0 / sum
    }
}

/// The join actually drawn at a vertex turning from `d0` to `d1`
///
/// Only miters change: they become bevels once the miter ratio exceeds
/// `miter_limit`, and always at a full reversal.
pub fn effective_join(join: LineJoin, miter_limit: f32, d0: Point, d1: Point) -> LineJoin {
    match join {
        LineJoin::Miter => {
            let ratio = miter_ratio(d0, d1);
            if !ratio.is_finite() || ratio > miter_limit {
                LineJoin::Bevel
            } else {
                LineJoin::Miter
            }
        }
        other => other,
    }
}

/// Chords needed for an arc of `sweep` radians and radius `radius`
///
/// Each chord's sagitta stays within `flatness`.
pub fn arc_segments(sweep: f32, radius: f32, flatness: f32) -> usize {
    let sweep = sweep.abs();
    if !(sweep.is_finite() && radius.is_finite()) || sweep == 0.0 || radius <= 0.0 {
        return 1;
    }
    let cos_half = (1.0 - flatness / radius).clamp(-1.0, 1.0);
    let step = 2.0 * cos_half.acos();
    if step <= f32::EPSILON {
        return MAX_ARC_SEGMENTS;
    }
    ((sweep / step).ceil() as usize).clamp(1, MAX_ARC_SEGMENTS)
}

#[inline]
fn rotate(v: Point, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// No current subpath
    Empty,
    /// One point so far; `dot` once a zero-length segment was seen
    Open { start: Point, dot: bool },
    /// At least one real segment
    Accumulating {
        start: Point,
        current: Point,
        first_dir: Point,
        last_dir: Point,
    },
}

/// [`PathSink`] turning a centerline into stroke outline edges
pub struct Stroker<'a> {
    edges: &'a mut EdgeList,
    half_width: f32,
    cap: LineCap,
    join: LineJoin,
    miter_limit: f32,
    flatness: f32,
    state: State,
    /// Where a `line_to` after `close` resumes
    last_point: Option<Point>,
    scratch: Vec<Point>,
}

impl<'a> Stroker<'a> {
    /// Stroke into `edges` with `style`, approximating arcs within `flatness`
    ///
    /// Unusable widths become a one-pixel hairline and miter limits below
    /// one are raised to one.
    pub fn new(edges: &'a mut EdgeList, style: &StrokeStyle, flatness: f32) -> Self {
        let width = if style.width.is_finite() && style.width > 0.0 {
            style.width
        } else {
            log::debug!("Stroke width {} replaced by a hairline", style.width);
            1.0
        };
        let miter_limit = if style.miter_limit >= 1.0 {
            style.miter_limit
        } else {
            1.0
        };
        let flatness = if flatness.is_finite() && flatness > 0.0 {
            flatness
        } else {
            0.25
        };
        Self {
            edges,
            half_width: width * 0.5,
            cap: style.cap,
            join: style.join,
            miter_limit,
            flatness,
            state: State::Empty,
            last_point: None,
            scratch: Vec::with_capacity(16),
        }
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn miter_limit(&self) -> f32 {
        self.miter_limit
    }

    /// End the current subpath as open: caps at both ends, or a dot
    pub fn end_subpath(&mut self) -> Result<()> {
        match self.state {
            State::Empty => {}
            State::Open { start, dot } => {
                if dot {
                    self.emit_dot(start)?;
                }
                self.last_point = Some(start);
            }
            State::Accumulating {
                start,
                current,
                first_dir,
                last_dir,
            } => {
                self.emit_cap(start, -first_dir)?;
                self.emit_cap(current, last_dir)?;
                self.last_point = Some(current);
            }
        }
        self.state = State::Empty;
        Ok(())
    }

    fn emit_body(&mut self, a: Point, b: Point, dir: Point) -> Result<()> {
        let n = dir.perp() * self.half_width;
        self.emit_polygon(&[a + n, b + n, b - n, a - n])
    }

    fn emit_join(&mut self, v: Point, d0: Point, d1: Point) -> Result<()> {
        let cross = d0.cross(d1);
        let dot = d0.dot(d1);
        if cross.abs() < 1e-6 && dot > 0.0 {
            return Ok(());
        }

        let hw = self.half_width;
        let turn = cross.atan2(dot);
        // Outer side of the turn
        let side = if turn >= 0.0 { -1.0 } else { 1.0 };
        let n0 = d0.perp() * side;
        let n1 = d1.perp() * side;
        let a = v + n0 * hw;
        let b = v + n1 * hw;

        match effective_join(self.join, self.miter_limit, d0, d1) {
            LineJoin::Bevel => self.emit_polygon(&[v, a, b]),
            LineJoin::Miter => {
                let ratio = miter_ratio(d0, d1);
                match (n0 + n1).normalize() {
                    Some(bisector) => {
                        let tip = v + bisector * (hw * ratio);
                        self.emit_polygon(&[v, a, tip, b])
                    }
                    None => self.emit_polygon(&[v, a, b]),
                }
            }
            LineJoin::Round => {
                let n = arc_segments(turn, hw, self.flatness);
                let mut pts = std::mem::take(&mut self.scratch);
                pts.clear();
                pts.push(v);
                let start = n0 * hw;
                for i in 0..=n {
                    pts.push(v + rotate(start, turn * i as f32 / n as f32));
                }
                let result = self.emit_polygon(&pts);
                self.scratch = pts;
                result
            }
        }
    }

    /// Cap at `end`, with `dir` the unit direction pointing out of the stroke
    fn emit_cap(&mut self, end: Point, dir: Point) -> Result<()> {
        let hw = self.half_width;
        let n = dir.perp() * hw;
        match self.cap {
            LineCap::Butt => Ok(()),
            LineCap::Square => {
                let ext = dir * hw;
                self.emit_polygon(&[end + n, end + n + ext, end - n + ext, end - n])
            }
            LineCap::Round => {
                let segments = arc_segments(PI, hw, self.flatness).max(2);
                let mut pts = std::mem::take(&mut self.scratch);
                pts.clear();
                for i in 0..=segments {
                    pts.push(end + rotate(n, -PI * i as f32 / segments as f32));
                }
                let result = self.emit_polygon(&pts);
                self.scratch = pts;
                result
            }
        }
    }

    /// Visible mark for a subpath that never left its start point
    fn emit_dot(&mut self, c: Point) -> Result<()> {
        let hw = self.half_width;
        match self.cap {
            LineCap::Butt => Ok(()),
            LineCap::Square => self.emit_polygon(&[
                c + Point::new(-hw, -hw),
                c + Point::new(hw, -hw),
                c + Point::new(hw, hw),
                c + Point::new(-hw, hw),
            ]),
            LineCap::Round => {
                let segments = arc_segments(TAU, hw, self.flatness).max(4);
                let mut pts = std::mem::take(&mut self.scratch);
                pts.clear();
                let radius = Point::new(hw, 0.0);
                for i in 0..segments {
                    pts.push(c + rotate(radius, TAU * i as f32 / segments as f32));
                }
                let result = self.emit_polygon(&pts);
                self.scratch = pts;
                result
            }
        }
    }

    /// Insert a closed polygon, oriented with positive signed area
    fn emit_polygon(&mut self, pts: &[Point]) -> Result<()> {
        if pts.len() < 3 {
            return Ok(());
        }
        let mut area = 0.0f32;
        for i in 0..pts.len() {
            area += pts[i].cross(pts[(i + 1) % pts.len()]);
        }
        if area.is_nan() || area.abs() <= 1e-9 {
            return Ok(());
        }
        let n = pts.len();
        if area > 0.0 {
            for i in 0..n {
                self.edges.insert(pts[i], pts[(i + 1) % n])?;
            }
        } else {
            for i in (0..n).rev() {
                self.edges.insert(pts[(i + 1) % n], pts[i])?;
            }
        }
        Ok(())
    }
}

impl PathSink for Stroker<'_> {
    fn move_to(&mut self, p: Point) -> Result<()> {
        self.end_subpath()?;
        self.state = State::Open {
            start: p,
            dot: false,
        };
        self.last_point = Some(p);
        Ok(())
    }

    fn line_to(&mut self, p: Point) -> Result<()> {
        match self.state {
            State::Empty => {
                let from = self.last_point.unwrap_or(p);
                self.move_to(from)?;
                if from != p {
                    self.line_to(p)?;
                }
            }
            State::Open { start, .. } => {
                let delta = p - start;
                match delta.normalize() {
                    Some(dir) if delta.length() >= DEGENERATE_LENGTH => {
                        self.emit_body(start, p, dir)?;
                        self.state = State::Accumulating {
                            start,
                            current: p,
                            first_dir: dir,
                            last_dir: dir,
                        };
                    }
                    _ => {
                        self.state = State::Open { start, dot: true };
                    }
                }
            }
            State::Accumulating {
                start,
                current,
                first_dir,
                last_dir,
            } => {
                let delta = p - current;
                if let Some(dir) = delta.normalize() {
                    if delta.length() >= DEGENERATE_LENGTH {
                        self.emit_join(current, last_dir, dir)?;
                        self.emit_body(current, p, dir)?;
                        self.state = State::Accumulating {
                            start,
                            current: p,
                            first_dir,
                            last_dir: dir,
                        };
                    }
                }
            }
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.state {
            State::Empty => {}
            State::Open { start, .. } => {
                self.emit_dot(start)?;
                self.last_point = Some(start);
            }
            State::Accumulating { start, current, .. } => {
                if current.distance_to(start) >= DEGENERATE_LENGTH {
                    self.line_to(start)?;
                }
                if let State::Accumulating {
                    current,
                    first_dir,
                    last_dir,
                    ..
                } = self.state
                {
                    self.emit_join(current, last_dir, first_dir)?;
                }
                self.last_point = Some(start);
            }
        }
        self.state = State::Empty;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.end_subpath()
    }
}
