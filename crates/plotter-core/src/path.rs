//! Polygon path model and its SVG path-data form.

use kurbo::{BezPath, PathEl, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Path validation and parsing errors.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("Path is empty")]
    Empty,
    #[error("Path must start with a move-to command")]
    MissingMoveTo,
    #[error("Unexpected move-to command at index {0}")]
    UnexpectedMoveTo(usize),
    #[error("Unexpected close-path command at index {0}")]
    UnexpectedClose(usize),
    #[error("Unsupported path segment: {0}")]
    Unsupported(&'static str),
    #[error("Invalid path data: {0}")]
    Syntax(String),
}

/// Result type for path operations.
pub type PathResult<T> = Result<T, PathError>;

/// A single drawing command in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
}

impl PathCommand {
    /// The vertex this command ends at, if any.
    pub fn point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::ClosePath => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M{},{}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L{},{}", p.x, p.y),
            PathCommand::ClosePath => write!(f, "Z"),
        }
    }
}

/// An ordered sequence of commands: one move-to, any number of line-tos,
/// and optionally a final close-path.
///
/// Only a closed path is eligible for final output; an open one is a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PathCommand>", into = "Vec<PathCommand>")]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Start a new open path at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    /// A two-point open path from `from` to `to`.
    pub fn segment(from: Point, to: Point) -> Self {
        let mut path = Self::new(from);
        path.line_to(to);
        path
    }

    /// Append a vertex.
    ///
    /// # Panics
    ///
    /// Panics if the path is already closed.
    pub fn line_to(&mut self, point: Point) {
        assert!(!self.is_closed(), "line_to on a closed path");
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Close the path.
    ///
    /// # Panics
    ///
    /// Panics if the path is already closed or has no line-to command.
    pub fn close(&mut self) {
        assert!(!self.is_closed(), "close on a closed path");
        assert!(self.line_count() > 0, "close on a path without line segments");
        self.commands.push(PathCommand::ClosePath);
    }

    /// The commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The first vertex.
    pub fn start(&self) -> Point {
        match self.commands[0] {
            PathCommand::MoveTo(p) => p,
            _ => unreachable!("path always starts with a move-to"),
        }
    }

    /// The most recently committed vertex.
    pub fn last_vertex(&self) -> Point {
        self.commands
            .iter()
            .rev()
            .find_map(PathCommand::point)
            .unwrap_or_else(|| self.start())
    }

    /// All vertices in order, without the implicit closing edge.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(PathCommand::point)
    }

    /// Number of line-to commands.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check whether the path ends with a close-path command.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::ClosePath))
    }

    /// Serialize to SVG path data, e.g. `M0,0 L4,0 Z`.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Parse SVG path data made of move-to, line-to and close-path commands.
    pub fn from_svg(data: &str) -> PathResult<Self> {
        let bez = BezPath::from_svg(data).map_err(|e| PathError::Syntax(e.to_string()))?;
        Self::try_from(&bez)
    }

    /// Convert to a kurbo path for rendering.
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => bez.move_to(p),
                PathCommand::LineTo(p) => bez.line_to(p),
                PathCommand::ClosePath => bez.close_path(),
            }
        }
        bez
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<PathCommand>> for Path {
    type Error = PathError;

    fn try_from(commands: Vec<PathCommand>) -> PathResult<Self> {
        match commands.first() {
            None => return Err(PathError::Empty),
            Some(PathCommand::MoveTo(_)) => {}
            Some(_) => return Err(PathError::MissingMoveTo),
        }

        let mut lines = 0;
        for (index, command) in commands.iter().enumerate().skip(1) {
            match command {
                PathCommand::MoveTo(_) => return Err(PathError::UnexpectedMoveTo(index)),
                PathCommand::LineTo(_) => lines += 1,
                PathCommand::ClosePath => {
                    if lines == 0 || index != commands.len() - 1 {
                        return Err(PathError::UnexpectedClose(index));
                    }
                }
            }
        }

        Ok(Self { commands })
    }
}

impl TryFrom<&BezPath> for Path {
    type Error = PathError;

    fn try_from(bez: &BezPath) -> PathResult<Self> {
        let commands = bez
            .elements()
            .iter()
            .map(|el| match *el {
                PathEl::MoveTo(p) => Ok(PathCommand::MoveTo(p)),
                PathEl::LineTo(p) => Ok(PathCommand::LineTo(p)),
                PathEl::ClosePath => Ok(PathCommand::ClosePath),
                PathEl::QuadTo(..) => Err(PathError::Unsupported("quadratic curve")),
                PathEl::CurveTo(..) => Err(PathError::Unsupported("cubic curve")),
            })
            .collect::<PathResult<Vec<_>>>()?;
        Self::try_from(commands)
    }
}

impl From<Path> for Vec<PathCommand> {
    fn from(path: Path) -> Self {
        path.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path {
        let mut path = Path::new(Point::new(0.0, 0.0));
        path.line_to(Point::new(4.0, 0.0));
        path.line_to(Point::new(4.0, 4.0));
        path.line_to(Point::new(0.0, 4.0));
        path.close();
        path
    }

    #[test]
    fn test_new_path() {
        let path = Path::new(Point::new(1.0, 2.0));
        assert_eq!(path.len(), 1);
        assert!(!path.is_closed());
        assert_eq!(path.start(), Point::new(1.0, 2.0));
        assert_eq!(path.last_vertex(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_last_vertex_after_close() {
        let path = square();
        assert!(path.is_closed());
        assert_eq!(path.last_vertex(), Point::new(0.0, 4.0));
        assert_eq!(path.vertices().count(), 4);
        assert_eq!(path.line_count(), 3);
    }

    #[test]
    #[should_panic(expected = "without line segments")]
    fn test_close_without_lines_panics() {
        let mut path = Path::new(Point::ZERO);
        path.close();
    }

    #[test]
    #[should_panic(expected = "closed path")]
    fn test_line_after_close_panics() {
        let mut path = square();
        path.line_to(Point::new(1.0, 1.0));
    }

    #[test]
    fn test_to_svg() {
        assert_eq!(square().to_svg(), "M0,0 L4,0 L4,4 L0,4 Z");
        let segment = Path::segment(Point::new(-1.5, 2.0), Point::new(3.25, -4.0));
        assert_eq!(segment.to_svg(), "M-1.5,2 L3.25,-4");
    }

    #[test]
    fn test_svg_round_trip() {
        let path = square();
        let parsed = Path::from_svg(&path.to_svg()).unwrap();
        assert_eq!(parsed.commands(), path.commands());

        let mut fractional = Path::new(Point::new(-4.0, 0.5));
        fractional.line_to(Point::new(19.5, 20.0));
        fractional.line_to(Point::new(0.1, 7.3));
        fractional.close();
        let parsed = Path::from_svg(&fractional.to_svg()).unwrap();
        assert_eq!(parsed, fractional);
    }

    #[test]
    fn test_from_svg_rejects_curves() {
        let result = Path::from_svg("M0,0 Q1,1 2,0");
        assert_eq!(result, Err(PathError::Unsupported("quadratic curve")));
    }

    #[test]
    fn test_from_svg_rejects_garbage() {
        assert!(matches!(Path::from_svg("M0,0 X"), Err(PathError::Syntax(_))));
    }

    #[test]
    fn test_validation() {
        assert_eq!(Path::try_from(Vec::new()), Err(PathError::Empty));
        assert_eq!(
            Path::try_from(vec![PathCommand::LineTo(Point::ZERO)]),
            Err(PathError::MissingMoveTo)
        );
        assert_eq!(
            Path::try_from(vec![PathCommand::MoveTo(Point::ZERO), PathCommand::ClosePath]),
            Err(PathError::UnexpectedClose(1))
        );
        assert_eq!(
            Path::try_from(vec![
                PathCommand::MoveTo(Point::ZERO),
                PathCommand::LineTo(Point::new(1.0, 0.0)),
                PathCommand::MoveTo(Point::ZERO),
            ]),
            Err(PathError::UnexpectedMoveTo(2))
        );
        assert_eq!(
            Path::try_from(vec![
                PathCommand::MoveTo(Point::ZERO),
                PathCommand::LineTo(Point::new(1.0, 0.0)),
                PathCommand::ClosePath,
                PathCommand::LineTo(Point::new(1.0, 1.0)),
            ]),
            Err(PathError::UnexpectedClose(2))
        );
    }

    #[test]
    fn test_to_bez_path() {
        let bez = square().to_bez_path();
        assert_eq!(bez.elements().len(), 5);
        assert_eq!(bez.elements()[0], PathEl::MoveTo(Point::ZERO));
        assert_eq!(bez.elements()[4], PathEl::ClosePath);
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&square()).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, square());

        let bad = r#"[{"kind":"ClosePath"}]"#;
        assert!(serde_json::from_str::<Path>(bad).is_err());
    }
}
