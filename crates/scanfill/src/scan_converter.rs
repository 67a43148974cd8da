// this_file: crates/scanfill/src/scan_converter.rs

//! Scanline sweep turning a sorted edge list into coverage rows.
//!
//! The sweep walks sub-scanlines top to bottom. On each one it activates the
//! edges starting there, orders the active edges by x, pairs crossings into
//! spans under the fill rule and feeds the spans to the coverage row. Whenever
//! the pixel row changes the finished row is handed to the sink.

use scanfill_core::{CoverageSink, FillRule, IntRect, Result};

use crate::active::ActiveEdgeList;
use crate::coverage::CoverageRow;
use crate::edge::{Edge, EdgeList};
use crate::fixed::SubpixelScale;

/// What one sweep did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Edges in the list when the sweep started
    pub edges: usize,
    /// Rows handed to the sink
    pub rows_emitted: usize,
    /// Sub-scanlines visited
    pub subscanlines: usize,
    /// Largest active edge list seen
    pub max_active: usize,
}

/// Reusable sweep state
///
/// Only the coverage row survives between sweeps, so one converter can serve
/// any number of paths without reallocating.
#[derive(Debug, Clone)]
pub struct ScanConverter {
    row: CoverageRow,
}

impl Default for ScanConverter {
    fn default() -> Self {
        Self::new(SubpixelScale::DEFAULT)
    }
}

impl ScanConverter {
    pub fn new(scale: SubpixelScale) -> Self {
        Self {
            row: CoverageRow::new(scale),
        }
    }

    /// Sweep every edge in `edges`, emitting rows inside `clip` to `sink`
    ///
    /// Rows come out in increasing y, each at most once, each covering the
    /// horizontal extent of the edges intersected with `clip`. An empty edge
    /// list emits nothing.
    pub fn sweep<S>(
        &mut self,
        edges: &mut EdgeList,
        active: &mut ActiveEdgeList,
        rule: FillRule,
        clip: IntRect,
        sink: &mut S,
    ) -> Result<SweepSummary>
    where
        S: CoverageSink + ?Sized,
    {
        let scale = edges.scale();
        if self.row.scale() != scale {
            self.row = CoverageRow::new(scale);
        }
        active.clear();
        edges.sort();

        let mut summary = SweepSummary {
            edges: edges.len(),
            ..SweepSummary::default()
        };
        let Some(bbox) = edges.bbox() else {
            return Ok(summary);
        };

        let x_min = scale.pixel_x(bbox.x0);
        let x_max = scale.pixel_x_up(bbox.x1);
        let emit_x0 = x_min.max(clip.x0);
        let emit_x1 = x_max.min(clip.x1);
        if emit_x1 <= emit_x0 {
            return Ok(summary);
        }
        let window = Window {
            x: emit_x0,
            start: (emit_x0 - x_min) as usize,
            end: (emit_x1 - x_min) as usize,
            clip,
        };
        self.row.reset(x_min, (x_max - x_min) as usize)?;

        let count = edges.len();
        let mut next = 0;
        let mut y = edges.edges()[0].y;
        let mut row_y = scale.pixel_y(y);

        while !active.is_empty() || next < count {
            let pixel_y = scale.pixel_y(y);
            if pixel_y != row_y {
                self.flush(row_y, &window, sink, &mut summary);
                row_y = pixel_y;
            }

            while next < count && edges.edges()[next].y == y {
                active.push(next)?;
                next += 1;
            }
            active.sort_by_x(edges.edges());
            summary.max_active = summary.max_active.max(active.len());

            if clip.y0 <= row_y && row_y < clip.y1 {
                accumulate(&mut self.row, active, edges.edges(), rule);
            }
            summary.subscanlines += 1;

            active.advance(edges.edges_mut());
            if !active.is_empty() {
                y += 1;
            } else if let Some(edge) = edges.edges().get(next) {
                y = edge.y;
            }
        }
        self.flush(row_y, &window, sink, &mut summary);

        Ok(summary)
    }

    fn flush<S>(&mut self, y: i32, window: &Window, sink: &mut S, summary: &mut SweepSummary)
    where
        S: CoverageSink + ?Sized,
    {
        if window.clip.y0 <= y && y < window.clip.y1 {
            let coverage = self.row.resolve();
            if let Some(slice) = coverage.get(window.start..window.end) {
                sink.blit_row(y, window.x, slice);
                summary.rows_emitted += 1;
            }
        }
        self.row.clear();
    }
}

/// Columns of the coverage row that reach the sink
struct Window {
    /// Device x of the first emitted pixel
    x: i32,
    start: usize,
    end: usize,
    clip: IntRect,
}

/// Pair up active-edge crossings into spans for one sub-scanline
fn accumulate(row: &mut CoverageRow, active: &ActiveEdgeList, edges: &[Edge], rule: FillRule) {
    match rule {
        FillRule::NonZero => {
            let mut winding = 0;
            let mut start = 0;
            for edge in active.iter(edges) {
                let before = winding;
                winding += edge.winding_dir;
                if before == 0 && winding != 0 {
                    start = edge.x;
                } else if before != 0 && winding == 0 {
                    row.add_span(start, edge.x);
                }
            }
        }
        FillRule::EvenOdd => {
            let mut inside = false;
            let mut start = 0;
            for edge in active.iter(edges) {
                if inside {
                    row.add_span(start, edge.x);
                } else {
                    start = edge.x;
                }
                inside = !inside;
            }
        }
    }
}

/// Sweep `edges` once with a throwaway converter
///
/// Convenience for one-off sweeps; hot loops should keep a [`ScanConverter`].
pub fn scan_convert<S>(
    edges: &mut EdgeList,
    active: &mut ActiveEdgeList,
    rule: FillRule,
    clip: IntRect,
    sink: &mut S,
) -> Result<SweepSummary>
where
    S: CoverageSink + ?Sized,
{
    ScanConverter::new(edges.scale()).sweep(edges, active, rule, clip, sink)
}
