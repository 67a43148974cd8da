//! Coverage mask: an 8-bit alpha buffer filled by sweeps
//!
//! Rows from several sweeps combine with `max`, so drawing overlapping
//! shapes into one mask behaves like a union.

use scanfill_core::{CoverageSink, IntRect, RasterError, Result};

/// Largest width or height accepted for a mask
pub const MAX_MASK_DIMENSION: u32 = 32_768;

/// Row-major `width × height` coverage buffer, 255 = fully covered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl CoverageMask {
    /// Allocate a blank mask
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0
            || height == 0
            || width > MAX_MASK_DIMENSION
            || height > MAX_MASK_DIMENSION
        {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| RasterError::out_of_memory("coverage mask", len))?;
        data.resize(len, 0);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel rectangle covered by the mask
    pub fn bounds(&self) -> IntRect {
        IntRect::from_size(self.width, self.height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Coverage at (`x`, `y`), zero outside the mask
    pub fn get(&self, x: i32, y: i32) -> u8 {
        if !self.bounds().contains(x, y) {
            return 0;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn row(&self, y: u32) -> Option<&[u8]> {
        let w = self.width as usize;
        let start = (y as usize).checked_mul(w)?;
        self.data.get(start..start + w)
    }

    /// Sum of all coverage, 255 per fully covered pixel
    pub fn total_coverage(&self) -> u64 {
        self.data.iter().map(|&c| c as u64).sum()
    }

    /// Covered area in pixels
    pub fn area(&self) -> f64 {
        self.total_coverage() as f64 / 255.0
    }

    /// Tight bounds of non-zero coverage, `None` when blank
    pub fn coverage_bounds(&self) -> Option<IntRect> {
        let mut r = IntRect::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN);
        for (y, row) in self.data.chunks_exact(self.width as usize).enumerate() {
            if let (Some(first), Some(last)) = (
                row.iter().position(|&c| c != 0),
                row.iter().rposition(|&c| c != 0),
            ) {
                r.x0 = r.x0.min(first as i32);
                r.x1 = r.x1.max(last as i32 + 1);
                r.y0 = r.y0.min(y as i32);
                r.y1 = y as i32 + 1;
            }
        }
        (!r.is_empty()).then_some(r)
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl CoverageSink for CoverageMask {
    fn blit_row(&mut self, y: i32, x: i32, coverage: &[u8]) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let width = self.width as i32;
        let x0 = x.max(0);
        let x1 = x.saturating_add(coverage.len() as i32).min(width);
        if x1 <= x0 {
            return;
        }
        let row_start = y as usize * self.width as usize;
        let dst = &mut self.data[row_start + x0 as usize..row_start + x1 as usize];
        let src = &coverage[(x0 - x) as usize..(x1 - x) as usize];
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = (*d).max(s);
        }
    }
}
