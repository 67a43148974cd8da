//! The two seams of the rasterizer
//!
//! Geometry flows in through [`PathSink`]: a fill inserter and a stroke
//! generator both implement it and both feed the same edge list. Coverage
//! flows out through [`CoverageSink`]: whatever composites pixels (a mask, a
//! blender, a test harness) receives one row at a time.

use crate::error::Result;
use crate::geometry::Point;

/// Receiver of flattened path commands
///
/// Curves never reach a `PathSink`; they are flattened to `line_to` calls
/// first.
pub trait PathSink {
    /// Start a new subpath at `p`
    fn move_to(&mut self, p: Point) -> Result<()>;

    /// Extend the current subpath with a straight segment to `p`
    fn line_to(&mut self, p: Point) -> Result<()>;

    /// Close the current subpath back to its starting point
    fn close(&mut self) -> Result<()>;

    /// The path is complete; flush any pending subpath
    fn finish(&mut self) -> Result<()>;
}

/// Receiver of anti-aliased coverage rows
///
/// Called once per emitted scanline, in increasing `y`, with coverage for
/// pixels `x .. x + coverage.len()`. A coverage of 255 means fully inside.
pub trait CoverageSink {
    fn blit_row(&mut self, y: i32, x: i32, coverage: &[u8]);
}

impl<F> CoverageSink for F
where
    F: FnMut(i32, i32, &[u8]),
{
    #[inline]
    fn blit_row(&mut self, y: i32, x: i32, coverage: &[u8]) {
        self(y, x, coverage)
    }
}
