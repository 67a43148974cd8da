// this_file: crates/scanfill/src/curves.rs

//! Bézier curve linearization via subdivision.
//!
//! De Casteljau halving with an explicit stack instead of recursion, so the
//! worst case is a fixed number of stack slots no matter how wild the curve.
//! Quadratics are degree-elevated and go through the same cubic path.

use scanfill_core::Point;

/// Maximum subdivision depth; at most 2^16 segments per curve.
pub const MAX_DEPTH: u32 = 16;

/// A cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Cubic {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// The cubic tracing the same curve as the quadratic `p0, c, p2`.
    pub fn from_quad(p0: Point, c: Point, p2: Point) -> Self {
        let c1 = p0 + (c - p0) * (2.0 / 3.0);
        let c2 = p2 + (c - p2) * (2.0 / 3.0);
        Self::new(p0, c1, c2, p2)
    }

    /// Largest distance from a control point to the chord `p0 → p3`.
    ///
    /// NaN when any point is not finite.
    pub fn flatness(&self) -> f32 {
        if ![self.p0, self.p1, self.p2, self.p3].iter().all(|p| p.is_finite()) {
            return f32::NAN;
        }
        let chord = self.p3 - self.p0;
        let len = chord.length();
        if len <= f32::EPSILON {
            return self.p0.distance_to(self.p1).max(self.p0.distance_to(self.p2));
        }
        let d1 = (self.p1 - self.p0).cross(chord).abs() / len;
        let d2 = (self.p2 - self.p0).cross(chord).abs() / len;
        d1.max(d2)
    }

    /// Split at t = 0.5.
    pub fn split(&self) -> (Cubic, Cubic) {
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        let p012 = p01.midpoint(p12);
        let p123 = p12.midpoint(p23);
        let mid = p012.midpoint(p123);
        (
            Cubic::new(self.p0, p01, p012, mid),
            Cubic::new(mid, p123, p23, self.p3),
        )
    }

    /// Line segment end points approximating this curve within `tolerance`.
    pub fn flatten(&self, tolerance: f32) -> CubicFlattener {
        CubicFlattener::new(*self, tolerance)
    }
}

/// Iterator over the end points of a flattened cubic.
///
/// The start point is not yielded; the last item is always `p3`.
#[derive(Debug, Clone)]
pub struct CubicFlattener {
    stack: Vec<(Cubic, u32)>,
    tolerance: f32,
}

impl CubicFlattener {
    pub fn new(curve: Cubic, tolerance: f32) -> Self {
        let mut stack = Vec::with_capacity(MAX_DEPTH as usize + 1);
        stack.push((curve, 0));
        Self {
            stack,
            tolerance: if tolerance.is_finite() && tolerance > 0.0 {
                tolerance
            } else {
                0.25
            },
        }
    }
}

impl Iterator for CubicFlattener {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some((curve, depth)) = self.stack.pop() {
            let flatness = curve.flatness();
            // Non-finite input cannot converge; emit the chord
            if depth >= MAX_DEPTH || !flatness.is_finite() || flatness <= self.tolerance {
                return Some(curve.p3);
            }
            let (first, second) = curve.split();
            self.stack.push((second, depth + 1));
            self.stack.push((first, depth + 1));
        }
        None
    }
}
