//! Points and displacement vectors.

use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// A 2D point. Transforms return a new point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `factor` about the origin.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Displace by `offset`.
    #[must_use]
    pub fn translated(self, offset: Vector) -> Self {
        Self::new(self.x + offset.dx, self.y + offset.dy)
    }

    /// Mirror across the horizontal line so that `y' = y_max - y`.
    ///
    /// Source images grow Y downward; the terminal grows Y upward.
    #[must_use]
    pub fn flipped_y(self, y_max: f64) -> Self {
        Self::new(self.x, y_max - self.y)
    }

    /// Equality on both axes within `tolerance`. A zero tolerance is exact equality.
    #[must_use]
    pub fn coincides_with(self, other: Self, tolerance: f64) -> bool {
        if tolerance == 0.0 {
            return self == other;
        }
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    /// Create a new vector.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((dx, dy): (f64, f64)) -> Self {
        Self::new(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_y() {
        let p = Point::new(3.0, 10.0).flipped_y(779.0);
        assert_eq!(p, Point::new(3.0, 769.0));
    }

    #[test]
    fn test_translate_and_back() {
        let p = Point::new(1.25, -7.5);
        let v = Vector::new(75.0, -10.0);
        assert_eq!(p.translated(v).translated(-v), p);
    }

    #[test]
    fn test_coincides_with_tolerance() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(10.0005, 9.9995);
        assert!(!a.coincides_with(b, 0.0));
        assert!(a.coincides_with(b, 0.001));
        assert!(a.coincides_with(a, 0.0));
    }
}
