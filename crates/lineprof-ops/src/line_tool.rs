//! Headless state of an interactive thick scan line.
//!
//! A viewer drags the endpoints and changes the width with keys or the
//! scroll wheel; [`ThickLine`] keeps the resulting geometry so it can be fed
//! to [`profile_line`](crate::profile_line) on every change. Drawing and
//! event wiring belong to the viewer.

use lineprof_core::Point;

/// Default endpoint pick radius, in pixels.
pub const DEFAULT_MAXDIST: f64 = 10.0;

/// Scan line geometry plus the endpoint pick radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThickLine {
    /// Endpoints `[(x1, y1), (x2, y2)]`.
    pub end_points: [Point; 2],
    /// Line width in pixels, never below 1.
    width: f64,
    /// Maximum distance at which a click picks an endpoint.
    pub maxdist: f64,
}

impl ThickLine {
    /// Creates a line between two points with width 1.
    pub fn new(start: impl Into<Point>, end: impl Into<Point>, maxdist: f64) -> Self {
        Self {
            end_points: [start.into(), end.into()],
            width: 1.0,
            maxdist,
        }
    }

    /// Initial placement on a `cols` x `rows` image: a horizontal line through
    /// the middle row, spanning the central third.
    ///
    /// ```
    /// use lineprof_core::Point;
    /// use lineprof_ops::ThickLine;
    ///
    /// let line = ThickLine::centered(300, 100, 10.0);
    /// assert_eq!(line.end_points, [Point::new(100.0, 50.0), Point::new(200.0, 50.0)]);
    /// ```
    pub fn centered(cols: usize, rows: usize, maxdist: f64) -> Self {
        let (w, h) = (cols as f64, rows as f64);
        Self::new((w / 3.0, h / 2.0), (2.0 * w / 3.0, h / 2.0), maxdist)
    }

    /// Current width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the width, clamped to at least 1. Non-finite widths are ignored.
    pub fn set_width(&mut self, width: f64) {
        if width.is_finite() {
            self.width = width.max(1.0);
        }
    }

    /// Widens by one pixel (`+` key, scroll up).
    pub fn widen(&mut self) {
        self.scroll(1);
    }

    /// Narrows by one pixel (`-` key, scroll down), never below 1.
    pub fn narrow(&mut self) {
        self.scroll(-1);
    }

    /// Changes the width by `steps` pixels.
    pub fn scroll(&mut self, steps: i32) {
        self.set_width(self.width + f64::from(steps));
    }

    /// Index of the endpoint closest to `p`, if it lies within `maxdist`.
    ///
    /// ```
    /// use lineprof_ops::ThickLine;
    ///
    /// let line = ThickLine::new((0.0, 0.0), (20.0, 0.0), 5.0);
    /// assert_eq!(line.hit_test((18.0, 1.0)), Some(1));
    /// assert_eq!(line.hit_test((10.0, 0.0)), None);
    /// ```
    pub fn hit_test(&self, p: impl Into<Point>) -> Option<usize> {
        let p = p.into();
        let d0 = self.end_points[0].distance(p);
        let d1 = self.end_points[1].distance(p);
        let (idx, dist) = if d1 < d0 { (1, d1) } else { (0, d0) };
        (dist <= self.maxdist).then_some(idx)
    }

    /// Moves endpoint `idx` (0 or 1) to `p`.
    ///
    /// # Panics
    ///
    /// Panics if `idx > 1`.
    pub fn move_endpoint(&mut self, idx: usize, p: impl Into<Point>) {
        self.end_points[idx] = p.into();
    }

    /// Replaces both endpoints.
    pub fn set_end_points(&mut self, end_points: [Point; 2]) {
        self.end_points = end_points;
    }

    /// Distance between the endpoints.
    pub fn length(&self) -> f64 {
        self.end_points[0].distance(self.end_points[1])
    }
}
