//! Points in image pixel space.
//!
//! Coordinates are `(x, y)` = `(column, row)`. Integer coordinates refer to
//! pixel centres.

use std::fmt;

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Column coordinate
    pub x: f64,
    /// Row coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from column and row coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// ```
    /// use lineprof_core::Point;
    ///
    /// let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
    /// assert_eq!(d, 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_distance() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(2.0, 2.0);
        assert_abs_diff_eq!(a.distance(b), 2f64.sqrt(), epsilon = 1e-12);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Point::from((1.5, 2.0)), Point::new(1.5, 2.0));
        assert_eq!(Point::from([3.0, 4.0]), Point::new(3.0, 4.0));
        assert_eq!(Point::new(1.0, 2.5).to_string(), "(1, 2.5)");
    }

    #[test]
    fn test_finite() {
        assert!(Point::new(0.0, -1.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}
