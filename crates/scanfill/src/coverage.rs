// this_file: crates/scanfill/src/coverage.rs

//! Delta-encoded coverage accumulation for one pixel row.
//!
//! Each sub-scanline span adds four deltas at most: a partial start pixel, the
//! full-coverage run, and a partial end pixel. A prefix sum at flush time
//! turns the deltas into absolute per-pixel coverage.

use scanfill_core::{RasterError, Result};

use crate::fixed::SubpixelScale;

/// Coverage accumulator sized to the horizontal extent of one sweep
#[derive(Debug, Clone)]
pub struct CoverageRow {
    scale: SubpixelScale,
    /// Pixel column of `deltas[0]`
    x_min: i32,
    width: usize,
    /// `width + 2` slots; the last two absorb end-of-span deltas
    deltas: Vec<i32>,
    bytes: Vec<u8>,
    dirty: bool,
}

impl CoverageRow {
    pub fn new(scale: SubpixelScale) -> Self {
        Self {
            scale,
            x_min: 0,
            width: 0,
            deltas: Vec::new(),
            bytes: Vec::new(),
            dirty: false,
        }
    }

    /// Resize for pixel columns `x_min .. x_min + width` and zero everything.
    pub fn reset(&mut self, x_min: i32, width: usize) -> Result<()> {
        let slots = width.saturating_add(2);
        grow(&mut self.deltas, slots, "coverage row")?;
        grow(&mut self.bytes, width, "coverage row")?;
        self.deltas.truncate(slots);
        self.deltas.fill(0);
        self.bytes.truncate(width);
        self.x_min = x_min;
        self.width = width;
        self.dirty = false;
        Ok(())
    }

    #[inline]
    pub fn scale(&self) -> SubpixelScale {
        self.scale
    }

    #[inline]
    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether any span landed since the last clear
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Accumulate the span `x0 .. x1` of one sub-scanline (fixed-point x)
    pub fn add_span(&mut self, x0: i32, x1: i32) {
        if x1 <= x0 {
            return;
        }
        let h = self.scale.horizontal();
        let xofs = self.x_min * h;
        let (x0, x1) = (x0 - xofs, x1 - xofs);

        let x0p = x0.div_euclid(h);
        let x0sub = x0.rem_euclid(h);
        let x1p = x1.div_euclid(h);
        let x1sub = x1.rem_euclid(h);

        if x0p == x1p {
            self.add(x0p, x1sub - x0sub);
            self.add(x0p + 1, x0sub - x1sub);
        } else {
            self.add(x0p, h - x0sub);
            self.add(x0p + 1, x0sub);
            self.add(x1p, x1sub - h);
            self.add(x1p + 1, -x1sub);
        }
        self.dirty = true;
    }

    #[inline]
    fn add(&mut self, pixel: i32, delta: i32) {
        if let Some(slot) = usize::try_from(pixel).ok().and_then(|i| self.deltas.get_mut(i)) {
            *slot += delta;
        }
    }

    /// Prefix-sum the deltas into coverage bytes for the whole row
    pub fn resolve(&mut self) -> &[u8] {
        let mut acc = 0i32;
        for (byte, delta) in self.bytes.iter_mut().zip(&self.deltas) {
            acc += delta;
            *byte = self.scale.coverage_byte(acc);
        }
        &self.bytes
    }

    /// Zero the deltas, keeping the current extent
    pub fn clear(&mut self) {
        if self.dirty {
            self.deltas.fill(0);
            self.dirty = false;
        }
    }
}

fn grow<T: Copy + Default>(buf: &mut Vec<T>, len: usize, what: &'static str) -> Result<()> {
    if buf.len() < len {
        buf.try_reserve(len - buf.len())
            .map_err(|_| RasterError::out_of_memory(what, len))?;
        buf.resize(len, T::default());
    }
    Ok(())
}
