//! Geometric primitives for metric-space figures.
//!
//! Provides the point and line value types threaded through every
//! sampling operation.

use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the position vector.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Dot product of the position vectors.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the cross product of the position vectors.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
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

/// A non-vertical line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    /// Slope of the line.
    pub slope: f64,
    /// Y-intercept of the line.
    pub intercept: f64,
}

impl Line {
    /// Create a new line.
    #[must_use]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Horizontal line `y = intercept`.
    #[must_use]
    pub const fn horizontal(intercept: f64) -> Self {
        Self::new(0.0, intercept)
    }

    /// Y value of the line at `x`.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Point where the line crosses the y axis.
    #[must_use]
    pub fn y_intercept(&self) -> Point {
        Point::new(0.0, self.intercept)
    }

    /// Whether `point` lies on the line within `tolerance` in y.
    #[must_use]
    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        (point.y - self.y_at(point.x)).abs() <= tolerance
    }
}
