// this_file: crates/scanfill/src/active.rs

//! Active edge list: the edges crossing the current sub-scanline.
//!
//! Holds indices into the sorted edge list rather than copies, so the edge
//! list stays the single owner of edge state while the sweep steps it.

use scanfill_core::{RasterError, Result};

use crate::edge::Edge;

/// Indices of active edges, kept sorted by current x by the sweep.
#[derive(Debug, Clone, Default)]
pub struct ActiveEdgeList {
    indices: Vec<usize>,
}

impl ActiveEdgeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for `capacity` simultaneously active edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
        }
    }

    /// Activate the edge at `index`.
    pub fn push(&mut self, index: usize) -> Result<()> {
        let requested = self.indices.len() + 1;
        self.indices
            .try_reserve(1)
            .map_err(|_| RasterError::out_of_memory("active edge list", requested))?;
        self.indices.push(index);
        Ok(())
    }

    /// Sort by current x.
    ///
    /// Insertion sort: between consecutive sub-scanlines the order barely
    /// changes, so this is close to linear in practice.
    pub fn sort_by_x(&mut self, edges: &[Edge]) {
        for i in 1..self.indices.len() {
            let current = self.indices[i];
            let key = edges[current].x;
            let mut j = i;
            while j > 0 && edges[self.indices[j - 1]].x > key {
                self.indices[j] = self.indices[j - 1];
                j -= 1;
            }
            self.indices[j] = current;
        }
    }

    /// Step every active edge down one sub-scanline, retiring finished ones.
    pub fn advance(&mut self, edges: &mut [Edge]) {
        let mut i = 0;
        while i < self.indices.len() {
            let alive = edges
                .get_mut(self.indices[i])
                .map(Edge::step)
                .unwrap_or(false);
            if alive {
                i += 1;
            } else {
                self.indices.swap_remove(i);
            }
        }
    }

    /// Active edges in their current order.
    pub fn iter<'a>(&'a self, edges: &'a [Edge]) -> impl Iterator<Item = &'a Edge> + 'a {
        self.indices.iter().filter_map(move |&i| edges.get(i))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}
