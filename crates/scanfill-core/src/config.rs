//! Rasterizer configuration
//!
//! The sub-pixel grid decides how many samples each pixel gets. The default
//! 17×15 grid is picked so that neither 1/17 nor 1/15 is a power of two
//! (rounding bias does not line up between the axes) and so that a fully
//! covered pixel accumulates exactly 17·15 = 255.
//!
//! # Environment Variables
//!
//! [`RasterConfig::from_env`] honours two overrides:
//!
//! ```bash
//! SCANFILL_AA_LEVEL=4 SCANFILL_FLATNESS=0.5 ./my_app
//! ```

use crate::error::{RasterError, Result};

/// Environment variable selecting an anti-aliasing preset (0..=8)
pub const AA_LEVEL_ENV: &str = "SCANFILL_AA_LEVEL";

/// Environment variable overriding the curve/arc flattening tolerance
pub const FLATNESS_ENV: &str = "SCANFILL_FLATNESS";

/// Largest sub-pixel factor accepted on either axis
pub const MAX_SCALE: i32 = 64;

/// Sub-pixel grid and flattening tolerance for one rasterizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterConfig {
    /// Horizontal sub-pixel samples per pixel
    pub hscale: i32,
    /// Vertical sub-pixel samples (sub-scanlines) per pixel
    pub vscale: i32,
    /// Maximum deviation, in device pixels, of flattened curves and arcs
    pub flatness: f32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            hscale: 17,
            vscale: 15,
            flatness: 0.25,
        }
    }
}

impl RasterConfig {
    /// Pick a sub-pixel grid from an anti-aliasing level
    ///
    /// | level | grid  |
    /// |-------|-------|
    /// | 0     | 1×1   |
    /// | 1-2   | 2×2   |
    /// | 3-4   | 5×3   |
    /// | 5-6   | 8×8   |
    /// | 7+    | 17×15 |
    pub fn with_aa_level(self, level: u8) -> Self {
        let (hscale, vscale) = match level {
            0 => (1, 1),
            1..=2 => (2, 2),
            3..=4 => (5, 3),
            5..=6 => (8, 8),
            _ => (17, 15),
        };
        Self {
            hscale,
            vscale,
            ..self
        }
    }

    /// One sample per pixel: hard-edged, containment-exact output
    pub fn aliased() -> Self {
        Self::default().with_aa_level(0)
    }

    pub fn with_flatness(self, flatness: f32) -> Self {
        Self { flatness, ..self }
    }

    /// Defaults with `SCANFILL_AA_LEVEL` / `SCANFILL_FLATNESS` applied
    pub fn from_env() -> Self {
        Self::default().apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source
    ///
    /// Malformed values are ignored with a warning so a typo in the
    /// environment never stops rendering.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(AA_LEVEL_ENV) {
            match raw.trim().parse::<u8>() {
                Ok(level) => {
                    self = self.with_aa_level(level);
                    log::info!(
                        "Scanfill anti-aliasing level {} ({}x{}) via {}",
                        level,
                        self.hscale,
                        self.vscale,
                        AA_LEVEL_ENV
                    );
                }
                Err(_) => log::warn!("Ignoring {}={:?}: not a level 0-8", AA_LEVEL_ENV, raw),
            }
        }
        if let Some(raw) = lookup(FLATNESS_ENV) {
            match raw.trim().parse::<f32>() {
                Ok(flatness) if flatness.is_finite() && flatness > 0.0 => {
                    self.flatness = flatness;
                    log::info!("Scanfill flatness {} via {}", flatness, FLATNESS_ENV);
                }
                _ => log::warn!("Ignoring {}={:?}: not a positive number", FLATNESS_ENV, raw),
            }
        }
        self
    }

    /// Check the grid and tolerance are usable
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SCALE).contains(&self.hscale) {
            return Err(RasterError::config(format!(
                "hscale must be in 1..={MAX_SCALE}, got {}",
                self.hscale
            )));
        }
        if !(1..=MAX_SCALE).contains(&self.vscale) {
            return Err(RasterError::config(format!(
                "vscale must be in 1..={MAX_SCALE}, got {}",
                self.vscale
            )));
        }
        if !self.flatness.is_finite() || self.flatness <= 0.0 {
            return Err(RasterError::config(format!(
                "flatness must be positive, got {}",
                self.flatness
            )));
        }
        Ok(())
    }

    /// Accumulated coverage of a fully covered pixel
    pub const fn max_coverage(&self) -> i32 {
        self.hscale * self.vscale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let config = RasterConfig::default();
        assert_eq!((config.hscale, config.vscale), (17, 15));
        assert_eq!(config.max_coverage(), 255);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_aa_levels() {
        let base = RasterConfig::default();
        assert_eq!(base.with_aa_level(0).max_coverage(), 1);
        assert_eq!(base.with_aa_level(2).max_coverage(), 4);
        assert_eq!(base.with_aa_level(4).max_coverage(), 15);
        assert_eq!(base.with_aa_level(6).max_coverage(), 64);
        assert_eq!(base.with_aa_level(8).max_coverage(), 255);
        assert_eq!(base.with_aa_level(200).max_coverage(), 255);
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let config = RasterConfig {
            hscale: 0,
            ..RasterConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RasterConfig {
            vscale: MAX_SCALE + 1,
            ..RasterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_flatness() {
        assert!(RasterConfig::default().with_flatness(0.0).validate().is_err());
        assert!(RasterConfig::default().with_flatness(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let config = RasterConfig::default().apply_overrides(|key| match key {
            AA_LEVEL_ENV => Some("0".to_string()),
            FLATNESS_ENV => Some(" 0.5 ".to_string()),
            _ => None,
        });
        assert_eq!((config.hscale, config.vscale), (1, 1));
        assert_eq!(config.flatness, 0.5);
    }

    #[test]
    fn test_malformed_overrides_ignored() {
        let config = RasterConfig::default().apply_overrides(|key| match key {
            AA_LEVEL_ENV => Some("lots".to_string()),
            FLATNESS_ENV => Some("-1".to_string()),
            _ => None,
        });
        assert_eq!(config, RasterConfig::default());
    }
}
