// this_file: crates/scanfill/src/fixed.rs

//! Sub-pixel fixed-point arithmetic for scan conversion.
//!
//! A horizontal coordinate is stored as `floor(x * hscale)` and a vertical one
//! as `floor(y * vscale)`. Flooring (never rounding) keeps edge positions and
//! sub-scanline sampling on the same side of every boundary, which is what
//! lets an axis-aligned rectangle land exactly on whole sub-pixels.

use scanfill_core::RasterConfig;

/// Magnitude limit for fixed-point coordinates.
///
/// Float coordinates saturate to `±FIXED_LIMIT` on conversion, leaving plenty
/// of headroom below `i32::MAX` for Bresenham stepping and span arithmetic.
pub const FIXED_LIMIT: i32 = 1 << 24;

/// Sub-pixel sampling factors for both axes.
///
/// # Examples
///
/// ```
/// use scanfill::fixed::SubpixelScale;
///
/// let scale = SubpixelScale::DEFAULT;
/// assert_eq!(scale.to_fixed_x(1.0), 17);
/// assert_eq!(scale.to_fixed_y(1.0), 15);
/// assert_eq!(scale.pixel_x(33), 1);
/// assert_eq!(scale.pixel_x_up(35), 3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubpixelScale {
    h: i32,
    v: i32,
}

impl SubpixelScale {
    /// The 17×15 grid: 255 samples per pixel.
    pub const DEFAULT: SubpixelScale = SubpixelScale { h: 17, v: 15 };

    /// One sample per pixel.
    pub const ALIASED: SubpixelScale = SubpixelScale { h: 1, v: 1 };

    /// Create a grid; factors below one are raised to one.
    pub const fn new(h: i32, v: i32) -> Self {
        Self {
            h: if h < 1 { 1 } else { h },
            v: if v < 1 { 1 } else { v },
        }
    }

    pub fn from_config(config: &RasterConfig) -> Self {
        Self::new(config.hscale, config.vscale)
    }

    #[inline]
    pub const fn horizontal(self) -> i32 {
        self.h
    }

    #[inline]
    pub const fn vertical(self) -> i32 {
        self.v
    }

    /// Coverage accumulated by a pixel that is entirely inside.
    #[inline]
    pub const fn max_coverage(self) -> i32 {
        self.h * self.v
    }

    #[inline]
    pub fn to_fixed_x(self, x: f32) -> i32 {
        floor_to_fixed(x, self.h)
    }

    #[inline]
    pub fn to_fixed_y(self, y: f32) -> i32 {
        floor_to_fixed(y, self.v)
    }

    /// Pixel column containing fixed-point `x`.
    #[inline]
    pub const fn pixel_x(self, x: i32) -> i32 {
        idiv(x, self.h)
    }

    /// First pixel column boundary at or right of fixed-point `x`.
    #[inline]
    pub const fn pixel_x_up(self, x: i32) -> i32 {
        idiv_up(x, self.h)
    }

    /// Pixel row containing fixed-point `y`.
    #[inline]
    pub const fn pixel_y(self, y: i32) -> i32 {
        idiv(y, self.v)
    }

    /// Normalise accumulated coverage to a byte, full coverage = 255.
    #[inline]
    pub fn coverage_byte(self, acc: i32) -> u8 {
        let max = self.max_coverage();
        if max == 255 {
            return acc.clamp(0, 255) as u8;
        }
        ((acc.clamp(0, max) as i64 * 255) / max as i64) as u8
    }
}

impl Default for SubpixelScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scale and floor a float into fixed-point, saturating at [`FIXED_LIMIT`].
///
/// NaN maps to zero; infinities saturate like any other huge value.
#[inline]
pub fn floor_to_fixed(v: f32, scale: i32) -> i32 {
    let scaled = (v as f64 * scale as f64).floor();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(-(FIXED_LIMIT as f64), FIXED_LIMIT as f64) as i32
}

/// Floor division for a positive divisor.
#[inline]
pub const fn idiv(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

/// Ceiling division for a positive divisor.
#[inline]
pub const fn idiv_up(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}
