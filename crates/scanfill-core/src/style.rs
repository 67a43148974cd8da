//! How a path is painted: filled by a winding rule, or stroked
//!
//! Styles are immutable inputs. The rasterizer reads them, sanitizes what it
//! must (a NaN width still draws a hairline), and never stores them inside
//! the edge list.

use crate::error::{RasterError, Result};

/// The ancient question: what defines the inside of a shape?
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Inside wherever the signed crossing count is non-zero
    #[default]
    NonZero,
    /// Inside after an odd number of crossings, direction ignored
    EvenOdd,
}

/// Shape drawn at the open ends of a stroked subpath
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Stop flush with the endpoint
    #[default]
    Butt,
    /// Half-disc centred on the endpoint
    Round,
    /// Extend by half the stroke width past the endpoint
    Square,
}

/// Shape drawn where two stroked segments meet
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Extend the outer edges to their intersection, subject to the miter limit
    #[default]
    Miter,
    /// Arc around the shared vertex
    Round,
    /// Connect the outer corners with a straight edge
    Bevel,
}

/// On/off lengths along the path, starting "on", plus a starting offset
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashPattern {
    segments: Vec<f32>,
    phase: f32,
}

impl DashPattern {
    /// Validate and build a dash pattern
    ///
    /// Negative and non-finite lengths are rejected. An empty pattern, or one
    /// whose lengths sum to zero, is accepted but reports [`is_solid`].
    ///
    /// [`is_solid`]: DashPattern::is_solid
    pub fn new(segments: impl Into<Vec<f32>>, phase: f32) -> Result<Self> {
        let segments = segments.into();
        for (i, len) in segments.iter().enumerate() {
            if !len.is_finite() || *len < 0.0 {
                return Err(RasterError::invalid_parameter(format!("dash[{i}]"), len));
            }
        }
        if !phase.is_finite() {
            return Err(RasterError::invalid_parameter("dash phase", phase));
        }
        Ok(Self { segments, phase })
    }

    pub fn segments(&self) -> &[f32] {
        &self.segments
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Sum of one pass through the lengths
    pub fn total_length(&self) -> f32 {
        self.segments.iter().sum()
    }

    /// Length after which the on/off sequence repeats exactly
    ///
    /// Odd-length arrays swap sense on every pass, so they only repeat after
    /// two passes.
    pub fn period(&self) -> f32 {
        if self.segments.len() % 2 == 1 {
            self.total_length() * 2.0
        } else {
            self.total_length()
        }
    }

    /// Whether this pattern would draw a plain solid stroke
    pub fn is_solid(&self) -> bool {
        self.segments.is_empty() || self.total_length() <= 0.0
    }
}

/// Everything needed to turn a centerline into an outline
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    pub miter_limit: f32,
    pub dash: Option<DashPattern>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 10.0,
            dash: None,
        }
    }
}

impl StrokeStyle {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    pub fn with_miter_limit(mut self, limit: f32) -> Self {
        self.miter_limit = limit;
        self
    }

    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// Fill or stroke, the two ways a path reaches the edge list
#[derive(Debug, Clone, PartialEq)]
pub enum DrawStyle {
    Fill(FillRule),
    Stroke(StrokeStyle),
}

impl From<FillRule> for DrawStyle {
    fn from(rule: FillRule) -> Self {
        DrawStyle::Fill(rule)
    }
}

impl From<StrokeStyle> for DrawStyle {
    fn from(style: StrokeStyle) -> Self {
        DrawStyle::Stroke(style)
    }
}
