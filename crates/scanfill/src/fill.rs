// this_file: crates/scanfill/src/fill.rs

//! Direct fill: path segments become edges one to one
//!
//! Filled subpaths are implicitly closed, so a subpath left open still gets
//! its closing edge when the next `move_to` or `finish` arrives. A `line_to`
//! with no current point starts a subpath there instead of drawing from the
//! origin.

use scanfill_core::{PathSink, Point, Result};

use crate::edge::EdgeList;

/// [`PathSink`] inserting every segment straight into an [`EdgeList`]
#[derive(Debug)]
pub struct FillInserter<'a> {
    edges: &'a mut EdgeList,
    start: Point,
    current: Option<Point>,
    open: bool,
}

impl<'a> FillInserter<'a> {
    pub fn new(edges: &'a mut EdgeList) -> Self {
        Self {
            edges,
            start: Point::ZERO,
            current: None,
            open: false,
        }
    }

    fn close_subpath(&mut self) -> Result<()> {
        if self.open {
            if let Some(current) = self.current.filter(|c| *c != self.start) {
                self.edges.insert(current, self.start)?;
            }
            self.current = Some(self.start);
        }
        self.open = false;
        Ok(())
    }
}

impl PathSink for FillInserter<'_> {
    fn move_to(&mut self, p: Point) -> Result<()> {
        self.close_subpath()?;
        self.start = p;
        self.current = Some(p);
        self.open = true;
        Ok(())
    }

    fn line_to(&mut self, p: Point) -> Result<()> {
        let Some(current) = self.current else {
            return self.move_to(p);
        };
        // After a close this continues from the closed subpath's start
        self.open = true;
        self.edges.insert(current, p)?;
        self.current = Some(p);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.close_subpath()
    }

    fn finish(&mut self) -> Result<()> {
        self.close_subpath()
    }
}
