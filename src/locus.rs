//! Locus predicates: circles, ellipses and parabolas under a metric.
//!
//! Each predicate decides whether one candidate point satisfies its
//! distance condition within a tolerance `ε`. All comparisons are strict
//! (`residual < ε`), so a NaN residual from a degenerate metric rejects the
//! candidate instead of failing the trace.
//!
//! Argument order is fixed: the candidate is always the first argument to
//! the metric for circles and ellipses, and the second for the parabola's
//! focus distance.

use std::fmt;

use crate::error::{Error, Result};
use crate::figure::Marker;
use crate::geometry::{Line, Point};
use crate::line_distance::{EstimatorStats, LineDistanceEstimator};
use crate::metric::Metric;

/// Whether `point` lies on the circle of `radius` around `center`:
/// `|d(point, center) - radius| < ε`.
pub fn on_circle<M: Metric + ?Sized>(
    metric: &M,
    eps: f64,
    point: Point,
    center: Point,
    radius: f64,
) -> bool {
    Locus::circle(center, radius)
        .residual(metric, point)
        .is_some_and(|residual| residual < eps)
}

/// Whether `point` lies on the ellipse with the given foci and distance sum:
/// `|d(point, f1) + d(point, f2) - sum| < ε`.
pub fn on_ellipse<M: Metric + ?Sized>(
    metric: &M,
    eps: f64,
    point: Point,
    focus1: Point,
    focus2: Point,
    sum: f64,
) -> bool {
    Locus::ellipse(focus1, focus2, sum)
        .residual(metric, point)
        .is_some_and(|residual| residual < eps)
}

/// Whether `point` is equidistant from `focus` and `directrix` within `ε`.
///
/// The line distance comes from [`LineDistanceEstimator`]; its work is
/// added to `stats`.
pub fn on_parabola<M: Metric + ?Sized>(
    metric: &M,
    eps: f64,
    point: Point,
    focus: Point,
    directrix: &Line,
    stats: &mut EstimatorStats,
) -> bool {
    let to_focus = metric.distance(focus, point);
    LineDistanceEstimator::new(metric, eps)
        .estimate(point, to_focus, directrix, stats)
        .found()
        .is_some_and(|to_line| (to_focus - to_line).abs() < eps)
}

/// Which predicate a locus uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocusKind {
    /// Fixed distance from a center.
    Circle,
    /// Fixed distance sum to two foci.
    Ellipse,
    /// Equal distance to a focus and a line.
    Parabola,
}

impl fmt::Display for LocusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Parabola => "parabola",
        };
        f.write_str(name)
    }
}

/// A locus together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Locus {
    /// Points at `radius` from `center`.
    Circle {
        /// Center point.
        center: Point,
        /// Target distance.
        radius: f64,
    },
    /// Points whose distances to the foci add up to `sum`.
    Ellipse {
        /// First focus.
        focus1: Point,
        /// Second focus.
        focus2: Point,
        /// Target distance sum.
        sum: f64,
    },
    /// Points as far from `focus` as from `directrix`.
    Parabola {
        /// Focus point.
        focus: Point,
        /// Directrix line.
        directrix: Line,
    },
}

impl Locus {
    /// Circle locus.
    #[must_use]
    pub const fn circle(center: Point, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    /// Ellipse locus.
    #[must_use]
    pub const fn ellipse(focus1: Point, focus2: Point, sum: f64) -> Self {
        Self::Ellipse { focus1, focus2, sum }
    }

    /// Parabola locus.
    #[must_use]
    pub const fn parabola(focus: Point, directrix: Line) -> Self {
        Self::Parabola { focus, directrix }
    }

    /// The predicate this locus uses.
    #[must_use]
    pub const fn kind(&self) -> LocusKind {
        match self {
            Self::Circle { .. } => LocusKind::Circle,
            Self::Ellipse { .. } => LocusKind::Ellipse,
            Self::Parabola { .. } => LocusKind::Parabola,
        }
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for non-finite coordinates or a
    /// negative or non-finite radius or sum.
    pub fn validate(&self) -> Result<()> {
        fn finite_point(name: &'static str, p: Point) -> Result<()> {
            if p.is_finite() {
                Ok(())
            } else {
                Err(Error::InvalidParameter {
                    name,
                    message: format!("coordinates must be finite, got ({}, {})", p.x, p.y),
                })
            }
        }
        fn distance(name: &'static str, value: f64) -> Result<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidParameter {
                    name,
                    message: format!("must be finite and >= 0, got {value}"),
                })
            }
        }

        match *self {
            Self::Circle { center, radius } => {
                finite_point("center", center)?;
                distance("radius", radius)
            }
            Self::Ellipse { focus1, focus2, sum } => {
                finite_point("focus1", focus1)?;
                finite_point("focus2", focus2)?;
                distance("sum", sum)
            }
            Self::Parabola { focus, directrix } => {
                finite_point("focus", focus)?;
                if directrix.slope.is_finite() && directrix.intercept.is_finite() {
                    Ok(())
                } else {
                    Err(Error::InvalidParameter {
                        name: "directrix",
                        message: format!(
                            "slope and intercept must be finite, got {} and {}",
                            directrix.slope, directrix.intercept
                        ),
                    })
                }
            }
        }
    }

    /// How far `point` is from satisfying the locus equation.
    ///
    /// Circles give `|d(point, center) - radius|` and ellipses
    /// `|d(point, f1) + d(point, f2) - sum|`. The parabola has no closed
    /// residual since its line distance is searched, so it gives `None`.
    #[must_use]
    pub fn residual<M: Metric + ?Sized>(&self, metric: &M, point: Point) -> Option<f64> {
        match *self {
            Self::Circle { center, radius } => {
                Some((metric.distance(point, center) - radius).abs())
            }
            Self::Ellipse { focus1, focus2, sum } => Some(
                (metric.distance(point, focus1) + metric.distance(point, focus2) - sum).abs(),
            ),
            Self::Parabola { .. } => None,
        }
    }

    /// Whether `point` satisfies this locus within `eps`.
    ///
    /// Parabola checks add their line-distance work to `stats`; circles and
    /// ellipses leave it untouched.
    pub fn accepts<M: Metric + ?Sized>(
        &self,
        metric: &M,
        point: Point,
        eps: f64,
        stats: &mut EstimatorStats,
    ) -> bool {
        match self {
            Self::Circle { center, radius } => on_circle(metric, eps, point, *center, *radius),
            Self::Ellipse { focus1, focus2, sum } => {
                on_ellipse(metric, eps, point, *focus1, *focus2, *sum)
            }
            Self::Parabola { focus, directrix } => {
                on_parabola(metric, eps, point, *focus, directrix, stats)
            }
        }
    }

    /// Labeled reference points to draw alongside the traced set.
    #[must_use]
    pub fn markers(&self) -> Vec<Marker> {
        match *self {
            Self::Circle { center, .. } => vec![Marker::new("center", center)],
            Self::Ellipse { focus1, focus2, .. } => {
                vec![Marker::new("focus 1", focus1), Marker::new("focus 2", focus2)]
            }
            Self::Parabola { focus, directrix } => vec![
                Marker::new("focus", focus),
                Marker::new("directrix intercept", directrix.y_intercept()),
            ],
        }
    }
}
