//! Curve primitives and curves.
//!
//! The input model mirrors what an SVG path extractor hands over. Only
//! [`Segment::Line`] and [`Segment::CubicBezier`] can be flattened; the
//! other variants exist so that a collaborator can pass them through and
//! get a precise error back instead of silently dropped geometry.

use super::point::{Point, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single curve primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Straight line.
    Line { start: Point, end: Point },
    /// Cubic Bezier with two control points.
    CubicBezier {
        start: Point,
        c1: Point,
        c2: Point,
        end: Point,
    },
    /// Quadratic Bezier. Not supported by the flattener.
    QuadraticBezier {
        start: Point,
        control: Point,
        end: Point,
    },
    /// Elliptical arc. Not supported by the flattener.
    Arc {
        start: Point,
        radius: Vector,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
}

impl Segment {
    /// Line from `start` to `end`.
    #[must_use]
    pub const fn line(start: Point, end: Point) -> Self {
        Self::Line { start, end }
    }

    /// Cubic Bezier from `start` to `end` with control points `c1` and `c2`.
    #[must_use]
    pub const fn cubic(start: Point, c1: Point, c2: Point, end: Point) -> Self {
        Self::CubicBezier { start, c1, c2, end }
    }

    /// The primitive's kind, used for error reporting.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::Line { .. } => SegmentKind::Line,
            Self::CubicBezier { .. } => SegmentKind::CubicBezier,
            Self::QuadraticBezier { .. } => SegmentKind::QuadraticBezier,
            Self::Arc { .. } => SegmentKind::Arc,
        }
    }

    /// First point of the segment.
    #[must_use]
    pub fn start(&self) -> Point {
        match *self {
            Self::Line { start, .. }
            | Self::CubicBezier { start, .. }
            | Self::QuadraticBezier { start, .. }
            | Self::Arc { start, .. } => start,
        }
    }

    /// Last point of the segment.
    #[must_use]
    pub fn end(&self) -> Point {
        match *self {
            Self::Line { end, .. }
            | Self::CubicBezier { end, .. }
            | Self::QuadraticBezier { end, .. }
            | Self::Arc { end, .. } => end,
        }
    }
}

/// Discriminant of [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    Line,
    CubicBezier,
    QuadraticBezier,
    Arc,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => write!(f, "line"),
            Self::CubicBezier => write!(f, "cubic-bezier"),
            Self::QuadraticBezier => write!(f, "quadratic-bezier"),
            Self::Arc => write!(f, "arc"),
        }
    }
}

/// One continuous stroke: an ordered sequence of segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    segments: Vec<Segment>,
}

impl Curve {
    /// Create a curve from its segments.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Straight-line curve through `points`, one [`Segment::Line`] per pair.
    #[must_use]
    pub fn polyline(points: &[Point]) -> Self {
        let segments = points
            .windows(2)
            .map(|pair| Segment::line(pair[0], pair[1]))
            .collect();
        Self { segments }
    }

    /// Append a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Segments in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment ends where the first one starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => first.start() == last.end(),
            _ => false,
        }
    }
}

impl From<Vec<Segment>> for Curve {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}
