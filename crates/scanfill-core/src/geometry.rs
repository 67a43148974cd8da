//! Points and rectangles in device space
//!
//! Everything the rasterizer consumes has already been transformed into
//! device pixels. Coordinates are `f32`, the same precision the font outline
//! pens hand over, and only become fixed-point once they reach the edge list.

use std::ops::{Add, Mul, Neg, Sub};

/// A position or direction in device space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length when treated as a vector
    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product
    #[inline]
    pub fn cross(self, other: Point) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotate a quarter turn: (x, y) becomes (-y, x)
    #[inline]
    pub fn perp(self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Unit vector in the same direction, or `None` when too short to have one
    pub fn normalize(self) -> Option<Point> {
        let len = self.length();
        if len.is_finite() && len > f32::EPSILON {
            Some(Point::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, k: f32) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

/// Axis-aligned rectangle in device space, `x0 <= x1` and `y0 <= y1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    /// Build a rectangle from two corners in any order
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        !(self.x1 > self.x0 && self.y1 > self.y0)
    }

    /// Closed-interval containment
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }

    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

/// Axis-aligned rectangle of whole pixels, half-open: `[x0, x1) × [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl IntRect {
    /// Large enough to contain every pixel the fixed-point range can address
    pub const INFINITE: IntRect = IntRect {
        x0: i32::MIN / 2,
        y0: i32::MIN / 2,
        x1: i32::MAX / 2,
        y1: i32::MAX / 2,
    };

    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// Smallest pixel rectangle covering `rect`
    pub fn covering(rect: &Rect) -> Self {
        Self {
            x0: rect.x0.floor() as i32,
            y0: rect.y0.floor() as i32,
            x1: rect.x1.ceil() as i32,
            y1: rect.y1.ceil() as i32,
        }
    }

    pub fn width(&self) -> i32 {
        (self.x1 - self.x0).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.y1 - self.y0).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    pub fn intersect(&self, other: &IntRect) -> IntRect {
        IntRect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ops() {
        let a = Point::new(3.0, 4.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a + Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(a - Point::new(1.0, 1.0), Point::new(2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(6.0, 8.0));
        assert_eq!(-a, Point::new(-3.0, -4.0));
    }

    #[test]
    fn test_perp_is_quarter_turn() {
        let d = Point::new(1.0, 0.0);
        assert_eq!(d.perp(), Point::new(0.0, 1.0));
        assert_eq!(d.dot(d.perp()), 0.0);
        assert_eq!(d.cross(d.perp()), 1.0);
    }

    #[test]
    fn test_normalize_rejects_zero() {
        assert!(Point::ZERO.normalize().is_none());
        let n = Point::new(0.0, 2.0).normalize().unwrap();
        assert_eq!(n, Point::new(0.0, 1.0));
    }

    #[test]
    fn test_rect_normalizes_corners() {
        let r = Rect::new(10.0, 8.0, 2.0, 4.0);
        assert_eq!(r, Rect { x0: 2.0, y0: 4.0, x1: 10.0, y1: 8.0 });
        assert!(r.contains(Point::new(10.0, 8.0)));
        assert!(!r.is_empty());
        assert!(Rect::new(1.0, 1.0, 1.0, 5.0).is_empty());
    }

    #[test]
    fn test_int_rect_covering() {
        let r = IntRect::covering(&Rect::new(0.5, -1.25, 3.1, 2.0));
        assert_eq!(r, IntRect::new(0, -2, 4, 2));
        assert_eq!(r.width(), 4);
        assert!(r.contains(3, 1));
        assert!(!r.contains(4, 1));
    }

    #[test]
    fn test_int_rect_intersect() {
        let a = IntRect::new(0, 0, 10, 10);
        let b = IntRect::new(5, -5, 20, 5);
        assert_eq!(a.intersect(&b), IntRect::new(5, 0, 10, 5));
        assert!(a.intersect(&IntRect::new(20, 20, 30, 30)).is_empty());
    }
}
