// this_file: crates/scanfill/src/path.rs

//! Path construction and replay
//!
//! A [`Path`] is a recorded list of drawing commands in device space. It can
//! hold curves; they are flattened on replay, so sinks only ever see lines.

use scanfill_core::{PathSink, Point, Rect, Result};

use crate::curves::Cubic;

/// One recorded drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// A sequence of subpaths
///
/// ```
/// use scanfill::{Path, Point};
///
/// let mut path = Path::new();
/// path.move_to(Point::new(0.0, 0.0))
///     .line_to(Point::new(10.0, 0.0))
///     .quad_to(Point::new(10.0, 10.0), Point::new(0.0, 10.0))
///     .close();
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed axis-aligned rectangle, wound clockwise in y-down space
    pub fn rect(rect: Rect) -> Self {
        Self::polygon(&[
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ])
    }

    /// Closed polygon through `points`; empty input gives an empty path
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for &p in rest {
                path.line_to(p);
            }
            path.close();
        }
        path
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, c: Point, p: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo(c, p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo(c1, c2, p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Bounds of every point and control point, `None` for an empty path
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.commands.iter().flat_map(|cmd| {
            let pts: [Option<Point>; 3] = match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => [Some(p), None, None],
                PathCommand::QuadTo(c, p) => [Some(c), Some(p), None],
                PathCommand::CubicTo(c1, c2, p) => [Some(c1), Some(c2), Some(p)],
                PathCommand::Close => [None, None, None],
            };
            pts.into_iter().flatten()
        });
        let first = points.next()?;
        let mut r = Rect {
            x0: first.x,
            y0: first.y,
            x1: first.x,
            y1: first.y,
        };
        for p in points {
            r.x0 = r.x0.min(p.x);
            r.y0 = r.y0.min(p.y);
            r.x1 = r.x1.max(p.x);
            r.y1 = r.y1.max(p.y);
        }
        Some(r)
    }

    /// Replay into `sink`, flattening curves to within `flatness` pixels
    ///
    /// Drawing without a current point starts a subpath where the command
    /// ends. `sink.finish()` is called once at the end.
    pub fn walk<S>(&self, sink: &mut S, flatness: f32) -> Result<()>
    where
        S: PathSink + ?Sized,
    {
        let mut current: Option<Point> = None;
        let mut start = Point::ZERO;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    sink.move_to(p)?;
                    current = Some(p);
                    start = p;
                }
                PathCommand::LineTo(p) => {
                    match current {
                        Some(_) => sink.line_to(p)?,
                        None => {
                            sink.move_to(p)?;
                            start = p;
                        }
                    }
                    current = Some(p);
                }
                PathCommand::QuadTo(c, p) => {
                    let from = begin(sink, current, p, &mut start)?;
                    for q in Cubic::from_quad(from, c, p).flatten(flatness) {
                        sink.line_to(q)?;
                    }
                    current = Some(p);
                }
                PathCommand::CubicTo(c1, c2, p) => {
                    let from = begin(sink, current, p, &mut start)?;
                    for q in Cubic::new(from, c1, c2, p).flatten(flatness) {
                        sink.line_to(q)?;
                    }
                    current = Some(p);
                }
                PathCommand::Close => {
                    if current.is_some() {
                        sink.close()?;
                        current = Some(start);
                    }
                }
            }
        }
        sink.finish()
    }
}

/// Current point for a curve, opening a subpath at `end` if there is none
fn begin<S>(sink: &mut S, current: Option<Point>, end: Point, start: &mut Point) -> Result<Point>
where
    S: PathSink + ?Sized,
{
    match current {
        Some(p) => Ok(p),
        None => {
            sink.move_to(end)?;
            *start = end;
            Ok(end)
        }
    }
}
