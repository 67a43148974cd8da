//! Scanfill Core: the vocabulary every rasterizer stage shares
//!
//! Paths go in, coverage comes out. This crate holds the types that travel
//! between those two ends, and nothing that actually rasterizes:
//!
//! - [`geometry`] - device-space points and rectangles
//! - [`style`] - fill rules, stroke styles, dash patterns
//! - [`config`] - the sub-pixel grid and flattening tolerance
//! - [`traits`] - [`PathSink`] for geometry in, [`CoverageSink`] for coverage out
//! - [`error`] - the one error type, [`RasterError`]
//!
//! ```
//! use scanfill_core::{RasterConfig, StrokeStyle, LineCap};
//!
//! let config = RasterConfig::default().with_aa_level(4);
//! assert_eq!(config.max_coverage(), 15);
//!
//! let style = StrokeStyle::new(2.0).with_cap(LineCap::Round);
//! assert_eq!(style.width, 2.0);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod style;
pub mod traits;

pub use config::RasterConfig;
pub use error::{RasterError, Result};
pub use geometry::{IntRect, Point, Rect};
pub use style::{DashPattern, DrawStyle, FillRule, LineCap, LineJoin, StrokeStyle};
pub use traits::{CoverageSink, PathSink};
