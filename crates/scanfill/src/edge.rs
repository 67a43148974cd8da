// this_file: crates/scanfill/src/edge.rs

//! Edges and the edge list that collects them before a sweep
//!
//! Every path, filled or stroked, ends up here as a pile of straight
//! segments. Each segment is floored onto the sub-pixel grid, clipped, turned
//! so it runs downward, and annotated with Bresenham stepping terms. After
//! that the sweep never touches a float again.

use scanfill_core::{IntRect, Point, RasterError, Rect, Result};

use crate::fixed::{idiv_up, SubpixelScale, FIXED_LIMIT};

/// One y-monotonic segment, ready to be stepped down the sub-scanlines
///
/// `x` is exact at every step: the remainder of `|dx| / dy` lives in
/// `error_accum`, and whenever it crosses zero `x` moves one extra unit in
/// `x_dir`. No floating-point drift, however long the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// X at the current sub-scanline, in horizontal sub-pixel units
    pub x: i32,
    /// First sub-scanline this edge covers
    pub y: i32,
    /// Sub-scanlines left before the edge retires
    pub height: i32,
    /// +1 if the original segment ran downward, -1 if upward
    pub winding_dir: i32,
    /// Sign of dx
    pub x_dir: i32,
    /// Whole units added to `x` every sub-scanline (signed)
    pub x_step_major: i32,
    pub error_accum: i32,
    pub error_threshold_up: i32,
    pub error_threshold_down: i32,
}

impl Edge {
    /// Build an edge from fixed-point endpoints with `y0 < y1`
    ///
    /// Returns `None` when the edge spans no sub-scanline.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32, winding_dir: i32) -> Option<Self> {
        Self::span(x0, y0, x1, y1, y0, y1, winding_dir)
    }

    /// The part of the edge `(x0, y0) → (x1, y1)` on sub-scanlines `from..to`
    ///
    /// The returned edge is in exactly the state the whole edge reaches after
    /// stepping down to `from`, so cutting an edge never moves it by a sample.
    /// Returns `None` when `from..to` is empty or leaves `y0..y1`.
    pub fn span(
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        from: i32,
        to: i32,
        winding_dir: i32,
    ) -> Option<Self> {
        let dy = y1 - y0;
        if dy <= 0 || from < y0 || to > y1 || from >= to {
            return None;
        }

        let dx = x1 - x0;
        let width = dx.abs();
        let x_dir = if dx > 0 { 1 } else { -1 };

        // Start the error one short of the threshold going right-to-left so
        // both directions land on the same side of exact hits.
        let error_start = if dx >= 0 { 0 } else { 1 - dy };

        let (x_step_major, error_threshold_up) = if dy >= width {
            (0, width)
        } else {
            ((width / dy) * x_dir, width % dy)
        };

        // After k steps the error sits in (-dy, 0] and is congruent to
        // start + k * up modulo dy.
        let k = (from - y0) as i64;
        let acc = error_start as i64 + k * error_threshold_up as i64;
        let error_accum = -(-acc).rem_euclid(dy as i64);

        Some(Edge {
            x: ceil_x(x0, y0, x1, y1, from),
            y: from,
            height: to - from,
            winding_dir,
            x_dir,
            x_step_major,
            error_accum: error_accum as i32,
            error_threshold_up,
            error_threshold_down: dy,
        })
    }

    /// Advance one sub-scanline
    ///
    /// Returns `false` once the edge has covered all of its sub-scanlines.
    #[inline]
    pub fn step(&mut self) -> bool {
        self.height -= 1;
        if self.height <= 0 {
            return false;
        }
        self.x += self.x_step_major;
        self.error_accum += self.error_threshold_up;
        if self.error_accum > 0 {
            self.x += self.x_dir;
            self.error_accum -= self.error_threshold_down;
        }
        true
    }
}

/// Inclusive fixed-point bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl FixedBox {
    /// Everything representable
    pub const UNBOUNDED: FixedBox = FixedBox {
        x0: -FIXED_LIMIT,
        y0: -FIXED_LIMIT,
        x1: FIXED_LIMIT,
        y1: FIXED_LIMIT,
    };

    /// Identity for `include`
    pub const EMPTY: FixedBox = FixedBox {
        x0: i32::MAX,
        y0: i32::MAX,
        x1: i32::MIN,
        y1: i32::MIN,
    };

    pub fn is_empty(&self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }

    fn include(&mut self, x: i32, y: i32) {
        self.x0 = self.x0.min(x);
        self.y0 = self.y0.min(y);
        self.x1 = self.x1.max(x);
        self.y1 = self.y1.max(y);
    }
}

/// Per-list insertion statistics
///
/// Diagnostic only; nothing in the sweep depends on these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeCounters {
    /// Edges stored (after clipping splits)
    pub inserted: usize,
    /// Segments dropped for spanning no sub-scanline
    pub horizontal: usize,
    /// Segments dropped for lying wholly above or below the clip
    pub outside: usize,
    /// Stored edges pinned onto a vertical clip boundary
    pub pinned: usize,
}

/// The global edge table: unordered while building, sorted before a sweep
///
/// One list serves one sweep at a time. `reset` keeps the allocation so a
/// long-lived rasterizer stops allocating after its first few paths.
#[derive(Debug, Clone)]
pub struct EdgeList {
    edges: Vec<Edge>,
    bbox: FixedBox,
    clip: FixedBox,
    scale: SubpixelScale,
    counters: EdgeCounters,
}

impl EdgeList {
    pub fn new(scale: SubpixelScale) -> Self {
        Self::with_capacity(scale, 0)
    }

    pub fn with_capacity(scale: SubpixelScale, capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            bbox: FixedBox::EMPTY,
            clip: FixedBox::UNBOUNDED,
            scale,
            counters: EdgeCounters::default(),
        }
    }

    pub fn scale(&self) -> SubpixelScale {
        self.scale
    }

    /// Set the clip applied to every subsequent insertion
    ///
    /// `None` clips only to the representable range. Boundaries are closed:
    /// geometry touching the rectangle's edge counts as inside.
    pub fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = match clip {
            Some(r) => FixedBox {
                x0: self.scale.to_fixed_x(r.x0),
                y0: self.scale.to_fixed_y(r.y0),
                x1: self.scale.to_fixed_x(r.x1),
                y1: self.scale.to_fixed_y(r.y1),
            },
            None => FixedBox::UNBOUNDED,
        };
    }

    pub fn clip(&self) -> FixedBox {
        self.clip
    }

    /// Forget all edges, bounds and counters; keep storage and clip
    pub fn reset(&mut self) {
        self.edges.clear();
        self.bbox = FixedBox::EMPTY;
        self.counters = EdgeCounters::default();
    }

    /// Add the segment `p0 → p1`, given in device space
    ///
    /// Horizontal segments and segments wholly above or below the clip are
    /// dropped. Parts left or right of the clip are pinned onto the clip's
    /// vertical boundary so they still contribute winding to pixels inside.
    pub fn insert(&mut self, p0: Point, p1: Point) -> Result<()> {
        let (mut x0, mut y0) = (self.scale.to_fixed_x(p0.x), self.scale.to_fixed_y(p0.y));
        let (mut x1, mut y1) = (self.scale.to_fixed_x(p1.x), self.scale.to_fixed_y(p1.y));

        if y0 == y1 {
            self.counters.horizontal += 1;
            return Ok(());
        }

        let winding_dir = if y0 < y1 {
            1
        } else {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
            -1
        };

        let clip = self.clip;
        if clip.is_empty() || y1 <= clip.y0 || y0 >= clip.y1 {
            self.counters.outside += 1;
            return Ok(());
        }

        let from = y0.max(clip.y0);
        let to = y1.min(clip.y1);
        if from >= to {
            self.counters.horizontal += 1;
            return Ok(());
        }

        self.insert_pinned([x0, y0, x1, y1], from, to, winding_dir)
    }

    /// Store sub-scanlines `from..to` of `line`, pinning the runs that fall
    /// left or right of the clip onto its vertical boundary
    ///
    /// Inside runs keep the stepping of the whole line, so the sweep sees the
    /// same x on every sub-scanline as it would without a clip, clamped to
    /// the clip's horizontal extent.
    fn insert_pinned(
        &mut self,
        line: [i32; 4],
        from: i32,
        to: i32,
        winding_dir: i32,
    ) -> Result<()> {
        let [x0, y0, x1, y1] = line;
        let (left, right) = (self.clip.x0, self.clip.x1);
        let side = |y: i32| {
            let x = ceil_x(x0, y0, x1, y1, y);
            if x < left {
                -1
            } else if x > right {
                1
            } else {
                0
            }
        };

        let mut ya = from;
        while ya < to {
            let current = side(ya);
            // Side is monotone along the line: search for where it changes.
            let (mut lo, mut hi) = (ya + 1, to);
            while lo < hi {
                let mid = lo + (hi - lo) / 2;
                if side(mid) == current {
                    lo = mid + 1;
                } else {
                    hi = mid;
                }
            }
            let yb = lo;

            let edge = match current {
                0 => Edge::span(x0, y0, x1, y1, ya, yb, winding_dir),
                _ => {
                    let bound = if current < 0 { left } else { right };
                    self.counters.pinned += 1;
                    Edge::new(bound, ya, bound, yb, winding_dir)
                }
            };
            if let Some(edge) = edge {
                let x_last = match current {
                    0 => ceil_x(x0, y0, x1, y1, yb - 1),
                    _ => edge.x,
                };
                self.push_edge(edge, x_last)?;
            }
            ya = yb;
        }
        Ok(())
    }

    /// Store `edge`, whose x on its last sub-scanline is `x_last`
    fn push_edge(&mut self, edge: Edge, x_last: i32) -> Result<()> {
        let requested = self.edges.len() + 1;
        self.edges
            .try_reserve(1)
            .map_err(|_| RasterError::out_of_memory("edge list", requested))?;
        self.edges.push(edge);
        self.bbox.include(edge.x, edge.y);
        self.bbox.include(x_last, edge.y + edge.height);
        self.counters.inserted += 1;
        Ok(())
    }


    /// Order by starting sub-scanline, then by x
    pub fn sort(&mut self) {
        self.edges.sort_unstable_by_key(|e| (e.y, e.x));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    pub fn counters(&self) -> EdgeCounters {
        self.counters
    }

    /// Fixed-point bounds of every stored edge, `None` when empty
    pub fn bbox(&self) -> Option<FixedBox> {
        if self.bbox.is_empty() {
            None
        } else {
            Some(self.bbox)
        }
    }

    /// Whole pixels touched by the stored edges
    pub fn pixel_bbox(&self) -> Option<IntRect> {
        self.bbox().map(|b| {
            IntRect::new(
                self.scale.pixel_x(b.x0),
                self.scale.pixel_y(b.y0),
                self.scale.pixel_x_up(b.x1),
                idiv_up(b.y1, self.scale.vertical()),
            )
        })
    }
}

/// X of the line through the two points on sub-scanline `y`, rounded the way
/// `Edge::step` rounds: up, in either direction
#[inline]
fn ceil_x(x0: i32, y0: i32, x1: i32, y1: i32, y: i32) -> i32 {
    if y1 == y0 {
        return x0;
    }
    let num = (x1 - x0) as i64 * (y - y0) as i64;
    let den = (y1 - y0) as i64;
    x0 + (-(-num).div_euclid(den)) as i32
}
