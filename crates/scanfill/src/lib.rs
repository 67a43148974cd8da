//! Scanfill: vector paths in, anti-aliased coverage out
//!
//! Every shape, filled or stroked, takes the same road. Its outline is cut
//! into straight edges on a 17×15 sub-pixel grid, the edges are swept
//! scanline by scanline, and the covered spans of each sub-scanline pile up
//! into one coverage byte per pixel. Stroking and dashing are just two more
//! ways to produce edges.
//!
//! ## The Pipeline
//!
//! - `fixed`: Sub-pixel arithmetic, always floored
//! - `edge`: Edges with Bresenham stepping, the clipped edge list
//! - `active`: Edges crossing the current sub-scanline
//! - `coverage`: Delta-encoded coverage for one pixel row
//! - `scan_converter`: The sweep that ties them together
//! - `curves`, `path`: Bézier flattening and path replay
//! - `fill`, `stroke`, `dash`: The three ways geometry becomes edges
//! - `mask`, `rasterizer`: A ready-made coverage buffer and the entry point
//! - `parallel`: Independent sweeps on many cores (feature `parallel`)
//!
//! ```
//! use scanfill::{LineCap, Path, Point, RasterConfig, Rasterizer, StrokeStyle};
//!
//! let mut path = Path::new();
//! path.move_to(Point::new(2.0, 8.0)).line_to(Point::new(14.0, 8.0));
//!
//! let style = StrokeStyle::new(4.0).with_cap(LineCap::Round);
//! let mut rasterizer = Rasterizer::new(RasterConfig::default())?;
//! let mask = rasterizer.render_mask(&path, &style.into(), 16, 16)?;
//!
//! assert_eq!(mask.get(8, 7), 255);
//! assert_eq!(mask.get(8, 2), 0);
//! # Ok::<(), scanfill::RasterError>(())
//! ```

pub mod active;
pub mod coverage;
pub mod curves;
pub mod dash;
pub mod edge;
pub mod fill;
pub mod fixed;
pub mod mask;
pub mod path;
pub mod rasterizer;
pub mod scan_converter;
pub mod stroke;

// Rayon only pays off with many independent paths
#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod proptests;

pub use scanfill_core::{
    CoverageSink, DashPattern, DrawStyle, FillRule, IntRect, LineCap, LineJoin, PathSink, Point,
    RasterConfig, RasterError, Rect, Result, StrokeStyle,
};

pub use active::ActiveEdgeList;
pub use dash::Dasher;
pub use edge::{Edge, EdgeCounters, EdgeList};
pub use fill::FillInserter;
pub use fixed::SubpixelScale;
pub use mask::CoverageMask;
pub use path::{Path, PathCommand};
pub use rasterizer::Rasterizer;
pub use scan_converter::{scan_convert, ScanConverter, SweepSummary};
pub use stroke::Stroker;

#[cfg(feature = "parallel")]
pub use parallel::{ParallelRasterizer, RasterJob};
