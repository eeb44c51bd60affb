//! Uniform rectangular sampling of candidate points.
//!
//! Coordinates are computed as `min + i * step` rather than by repeated
//! addition, so long ranges do not drift. `max` is included whenever it is
//! a whole number of steps from `min`, up to a relative slack of
//! [`ENDPOINT_SLACK`] steps.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Fraction of a step by which `max` may miss an exact multiple and still
/// be sampled.
pub const ENDPOINT_SLACK: f64 = 1e-9;

/// One axis of a sampling domain: `min, min + step, ..., <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// First sample.
    pub min: f64,
    /// Distance between samples.
    pub step: f64,
    /// Upper bound (inclusive when reachable).
    pub max: f64,
}

impl AxisRange {
    /// Create a new axis range. Not validated; see [`AxisRange::validate`].
    #[must_use]
    pub const fn new(min: f64, step: f64, max: f64) -> Self {
        Self { min, step, max }
    }

    /// Check that the range can be stepped through.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] for non-finite bounds, `min > max`
    /// or a step that is not strictly positive.
    pub fn validate(&self, axis: &'static str) -> Result<()> {
        let invalid = |message: String| Err(Error::InvalidDomain { axis, message });

        if !self.min.is_finite() || !self.max.is_finite() {
            return invalid(format!("bounds must be finite, got [{}, {}]", self.min, self.max));
        }
        if self.min > self.max {
            return invalid(format!("min {} exceeds max {}", self.min, self.max));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return invalid(format!("step must be finite and > 0, got {}", self.step));
        }
        Ok(())
    }

    /// Number of samples along this axis. Zero for an invalid range.
    #[must_use]
    pub fn count(&self) -> usize {
        if self.validate("-").is_err() {
            return 0;
        }
        ((self.max - self.min) / self.step + ENDPOINT_SLACK).floor() as usize + 1
    }

    /// The `index`-th sample.
    #[must_use]
    pub fn value(&self, index: usize) -> f64 {
        self.min + index as f64 * self.step
    }

    /// All samples, in increasing order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count()).map(move |i| self.value(i))
    }
}

/// Axis-aligned sampling rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Horizontal range.
    pub x: AxisRange,
    /// Vertical range.
    pub y: AxisRange,
}

impl Domain {
    /// Create a domain from two axis ranges.
    #[must_use]
    pub const fn new(x: AxisRange, y: AxisRange) -> Self {
        Self { x, y }
    }

    /// Square domain sharing `(min, step, max)` on both axes.
    #[must_use]
    pub const fn square(min: f64, step: f64, max: f64) -> Self {
        let axis = AxisRange::new(min, step, max);
        Self::new(axis, axis)
    }

    /// Square domain centered on `center`, reaching `half_width` in each
    /// direction.
    #[must_use]
    pub fn around(center: Point, half_width: f64, step: f64) -> Self {
        Self::new(
            AxisRange::new(center.x - half_width, step, center.x + half_width),
            AxisRange::new(center.y - half_width, step, center.y + half_width),
        )
    }

    /// Validate both axes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] naming the first offending axis.
    pub fn validate(&self) -> Result<()> {
        self.x.validate("x")?;
        self.y.validate("y")
    }

    /// Total number of candidate points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.count().saturating_mul(self.y.count())
    }

    /// Whether the domain yields no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazy row-major scan of the domain.
    #[must_use]
    pub fn samples(&self) -> GridSampler {
        GridSampler::new(*self)
    }
}

/// Lazy scan over a [`Domain`]: x outer, y inner.
///
/// Restartable by cloning or by calling [`Domain::samples`] again; holds no
/// state beyond its position.
#[derive(Debug, Clone)]
pub struct GridSampler {
    domain: Domain,
    cols: usize,
    rows: usize,
    next: usize,
}

impl GridSampler {
    /// Start a scan at the first point of `domain`.
    #[must_use]
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            cols: domain.x.count(),
            rows: domain.y.count(),
            next: 0,
        }
    }

    fn total(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }
}

impl Iterator for GridSampler {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.total() {
            return None;
        }
        let (i, j) = (self.next / self.rows, self.next % self.rows);
        self.next += 1;
        Some(Point::new(self.domain.x.value(i), self.domain.y.value(j)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridSampler {}
