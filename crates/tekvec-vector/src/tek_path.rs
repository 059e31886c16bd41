//! Deduplicated point runs.
//!
//! A [`TekPath`] always holds at least one point. Construction collapses
//! equal consecutive points; scaling and offsetting map points one to one,
//! so a transform never drops a point. Points that only coincide after a
//! transform are collapsed again by [`TekPath::deduped`] when encoding.

use crate::encoder::encode_point_wrapping;
use std::fmt;
use tekvec_core::constants::BYTES_PER_POINT;
use tekvec_core::{BoundingBox, Point, TekError, TekResult, Vector};

/// Ordered points ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct TekPath {
    points: Vec<Point>,
}

impl TekPath {
    /// Build a path, collapsing runs of equal consecutive points.
    ///
    /// Fails with [`TekError::EmptyGeometry`] when `points` is empty.
    pub fn new<I>(points: I) -> TekResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points: Vec<Point> = points.into_iter().collect();
        if points.is_empty() {
            return Err(TekError::EmptyGeometry);
        }
        points.dedup();
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn bbox(&self) -> BoundingBox {
        let first = BoundingBox::from_point(self.first());
        self.points[1..]
            .iter()
            .fold(first, |bbox, p| bbox.including(*p))
    }

    /// Copy scaled by `factor` about the origin.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        let mut path = self.clone();
        path.scale_in_place(factor);
        path
    }

    /// Copy displaced by `offset`.
    #[must_use]
    pub fn offset(&self, offset: Vector) -> Self {
        let mut path = self.clone();
        path.offset_in_place(offset);
        path
    }

    pub fn scale_in_place(&mut self, factor: f64) {
        for p in &mut self.points {
            *p = p.scaled(factor);
        }
    }

    pub fn offset_in_place(&mut self, offset: Vector) {
        for p in &mut self.points {
            *p = p.translated(offset);
        }
    }

    /// Copy with equal consecutive points collapsed.
    #[must_use]
    pub fn deduped(&self) -> Self {
        let mut points = self.points.clone();
        points.dedup();
        Self { points }
    }

    /// Append `next` as a continuation, dropping its first point, which
    /// the caller has matched against this path's last point.
    pub fn append_continuation(&mut self, next: &TekPath) {
        for p in &next.points[1..] {
            if self.last() != *p {
                self.points.push(*p);
            }
        }
    }

    /// Raw vector-mode bytes without a Group Separator.
    ///
    /// Coordinates are truncated toward zero and masked to the wire's bit
    /// width, so out-of-range values wrap the way the terminal would read
    /// them. Use [`crate::PathEncoder`] for range-checked output.
    pub fn to_tek_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.points.len() * BYTES_PER_POINT);
        for p in &self.points {
            out.extend_from_slice(&encode_point_wrapping(*p));
        }
        out
    }
}

impl fmt::Display for TekPath {
    /// Writes the raw vector-mode bytes; every byte is printable ASCII.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_tek_bytes() {
            write!(f, "{}", byte as char)?;
        }
        Ok(())
    }
}
