//! Parallel batch rendering
//!
//! Independent paths rasterize on separate threads with Rayon. Nothing is
//! shared between sweeps: each worker gets its own [`Rasterizer`], and each
//! job renders into its own [`CoverageMask`].

use rayon::prelude::*;
use scanfill_core::{DrawStyle, RasterConfig, RasterError, Rect, Result};

use crate::mask::CoverageMask;
use crate::path::Path;
use crate::rasterizer::Rasterizer;

/// One independent unit of work
#[derive(Debug, Clone)]
pub struct RasterJob {
    pub path: Path,
    pub style: DrawStyle,
    /// Extra clip inside the mask bounds
    pub clip: Option<Rect>,
    pub width: u32,
    pub height: u32,
}

impl RasterJob {
    pub fn new(path: Path, style: impl Into<DrawStyle>, width: u32, height: u32) -> Self {
        Self {
            path,
            style: style.into(),
            clip: None,
            width,
            height,
        }
    }

    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }
}

/// Batch renderer
pub struct ParallelRasterizer {
    config: RasterConfig,
    /// Number of threads to use (0 = Rayon's global pool)
    thread_count: usize,
}

impl ParallelRasterizer {
    pub fn new(config: RasterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            thread_count: 0,
        })
    }

    /// Use a dedicated pool of `thread_count` threads
    pub fn with_threads(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Render every job, results in job order
    ///
    /// A failing job does not stop the others.
    pub fn render_masks(&self, jobs: &[RasterJob]) -> Result<Vec<Result<CoverageMask>>> {
        log::debug!(
            "Rendering {} jobs on {} threads",
            jobs.len(),
            if self.thread_count == 0 {
                rayon::current_num_threads()
            } else {
                self.thread_count
            }
        );

        if self.thread_count == 0 {
            return Ok(self.render_all(jobs));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count)
            .build()
            .map_err(|e| RasterError::config(format!("thread pool: {e}")))?;
        Ok(pool.install(|| self.render_all(jobs)))
    }

    fn render_all(&self, jobs: &[RasterJob]) -> Vec<Result<CoverageMask>> {
        let config = self.config;
        jobs.par_iter()
            .map_init(
                || Rasterizer::new(config),
                |rasterizer, job| match rasterizer {
                    Ok(rasterizer) => render_job(rasterizer, job),
                    Err(e) => Err(RasterError::config(e.to_string())),
                },
            )
            .collect()
    }
}

fn render_job(rasterizer: &mut Rasterizer, job: &RasterJob) -> Result<CoverageMask> {
    let mut mask = CoverageMask::new(job.width, job.height)?;
    let bounds = Rect::from_size(job.width as f32, job.height as f32);
    let clip = job.clip.map_or(bounds, |c| c.intersect(&bounds));
    if clip.is_empty() {
        return Ok(mask);
    }
    rasterizer.draw(&job.path, &job.style, Some(clip), &mut mask)?;
    Ok(mask)
}
