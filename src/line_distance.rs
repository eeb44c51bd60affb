//! Point-to-line distance under an arbitrary metric.
//!
//! No closed form exists once the metric is not Euclidean, so the distance
//! is found by growing a circle around the point until one of its sampled
//! points lands on the line:
//!
//! 1. The search ceiling is the distance to the line's y-intercept. This is
//!    *a* point on the line, not necessarily the nearest one.
//! 2. Radii grow from zero in steps of `GROWTH_FACTOR * ε`.
//! 3. Each radius samples a square sub-grid of half-width `r` and step `ε`
//!    around the point, keeping candidates that pass the circle predicate.
//! 4. The first radius whose circle touches the line is the estimate.
//!
//! The search is cut short as soon as the answer can no longer match the
//! caller's distance-to-focus within tolerance.
//!
//! Cost per candidate is O(r/ε) growth steps, each sampling O((2r/ε)²)
//! sub-grid points. This dominates parabola tracing.

use log::trace;

use crate::geometry::{Line, Point};
use crate::grid::{AxisRange, Domain};
use crate::locus::on_circle;
use crate::metric::Metric;

/// Radius growth per step, in multiples of the tolerance.
pub const GROWTH_FACTOR: f64 = 10.0;

/// Line-membership slack for sub-grid points, as a fraction of the
/// tolerance. Half the sub-grid step, so a column matches at most one row
/// on a shallow line.
pub const LINE_SLACK: f64 = 0.5;

/// Why no distance was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The search ceiling is already too short to reach the focus distance.
    CeilingUnreachable,
    /// The radius passed the focus distance before touching the line.
    Overshoot,
    /// No circle up to the ceiling touched the line.
    NotFound,
}

/// Outcome of one estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineDistance {
    /// Radius of the first circle that touched the line.
    Found(f64),
    /// The search ended without a usable distance.
    Rejected(Rejection),
}

impl LineDistance {
    /// The distance, if one was found.
    #[must_use]
    pub fn found(self) -> Option<f64> {
        match self {
            Self::Found(r) => Some(r),
            Self::Rejected(_) => None,
        }
    }
}

/// Work counters, accumulated across estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimatorStats {
    /// Radii whose circle was sampled.
    pub growth_steps: usize,
    /// Sub-grid points examined.
    pub subgrid_points: usize,
}

/// Circle-growing line distance search.
#[derive(Debug, Clone, Copy)]
pub struct LineDistanceEstimator<'m, M: ?Sized> {
    metric: &'m M,
    tolerance: f64,
}

impl<'m, M: Metric + ?Sized> LineDistanceEstimator<'m, M> {
    /// Create an estimator sampling at `tolerance`.
    #[must_use]
    pub fn new(metric: &'m M, tolerance: f64) -> Self {
        Self { metric, tolerance }
    }

    /// Increment between successive radii.
    #[must_use]
    pub fn growth_step(&self) -> f64 {
        self.tolerance * GROWTH_FACTOR
    }

    /// Estimate the distance from `point` to `line`.
    ///
    /// `distance_to_focus` bounds the search: a parabola point needs the two
    /// distances to agree within tolerance, so radii beyond it are pointless.
    pub fn estimate(
        &self,
        point: Point,
        distance_to_focus: f64,
        line: &Line,
        stats: &mut EstimatorStats,
    ) -> LineDistance {
        let eps = self.tolerance;
        let ceiling = self.metric.distance(point, line.y_intercept());

        if ceiling - distance_to_focus + eps < 0.0 {
            trace!(
                "({}, {}): ceiling {ceiling} below focus distance {distance_to_focus}",
                point.x,
                point.y
            );
            return LineDistance::Rejected(Rejection::CeilingUnreachable);
        }

        for r in AxisRange::new(0.0, self.growth_step(), ceiling).values() {
            if r - distance_to_focus - eps > 0.0 {
                trace!(
                    "({}, {}): radius {r} overshot focus distance {distance_to_focus}",
                    point.x,
                    point.y
                );
                return LineDistance::Rejected(Rejection::Overshoot);
            }

            stats.growth_steps += 1;
            for candidate in Domain::around(point, r, eps).samples() {
                stats.subgrid_points += 1;
                if line.contains(candidate, eps * LINE_SLACK)
                    && on_circle(self.metric, eps, candidate, point, r)
                {
                    return LineDistance::Found(r);
                }
            }
        }

        LineDistance::Rejected(Rejection::NotFound)
    }
}
