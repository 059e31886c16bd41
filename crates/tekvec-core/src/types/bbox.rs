//! Axis-aligned bounding box computation.

use super::point::Point;

/// Axis-aligned bounding box. `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Box covering a single point.
    #[must_use]
    pub const fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    /// Smallest box covering every point, or `None` when there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |bbox, p| bbox.including(p)))
    }

    /// Grow to include `p`.
    #[must_use]
    pub fn including(self, p: Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Smallest box covering both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// True when either extent is zero or not a finite positive number.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        !positive(self.width()) || !positive(self.height())
    }

    /// `other` lies inside this box, allowing `tolerance` slack on each edge.
    #[must_use]
    pub fn contains_box(&self, other: &Self, tolerance: f64) -> bool {
        other.min_x >= self.min_x - tolerance
            && other.min_y >= self.min_y - tolerance
            && other.max_x <= self.max_x + tolerance
            && other.max_y <= self.max_y + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let bbox = BoundingBox::from_points([
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(bbox.min_x, -2.0);
        assert_eq!(bbox.min_y, -1.0);
        assert_eq!(bbox.max_x, 3.0);
        assert_eq!(bbox.max_y, 4.0);
        assert_eq!(bbox.width(), 5.0);
        assert_eq!(bbox.center(), Point::new(0.5, 1.5));
    }

    #[test]
    fn test_empty_has_no_box() {
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_degenerate() {
        let line = BoundingBox::from_points([Point::new(0.0, 5.0), Point::new(10.0, 5.0)]).unwrap();
        assert!(line.is_degenerate());

        let dot = BoundingBox::from_point(Point::new(1.0, 1.0));
        assert!(dot.is_degenerate());

        let square = BoundingBox::from_points([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
        assert!(!square.is_degenerate());
    }

    #[test]
    fn test_union_and_contains() {
        let a = BoundingBox::from_points([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
        let b = BoundingBox::from_points([Point::new(2.0, -1.0), Point::new(3.0, 0.0)]).unwrap();
        let u = a.union(b);
        assert!(u.contains_box(&a, 0.0));
        assert!(u.contains_box(&b, 0.0));
        assert!(!a.contains_box(&u, 0.0));
    }
}
