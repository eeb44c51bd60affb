//! Distance functions over 2D points.
//!
//! [`Metric`] is the capability every sampling operation takes. Any closure
//! `Fn(Point, Point) -> f64` qualifies; nothing here checks symmetry, the
//! triangle inequality or continuity, and several catalog entries violate
//! one or more of them on purpose.
//!
//! Argument order matters for asymmetric metrics: callers document which
//! point is passed first.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A distance function between two points.
pub trait Metric {
    /// Distance from `a` to `b`.
    fn distance(&self, a: Point, b: Point) -> f64;
}

impl<F> Metric for F
where
    F: Fn(Point, Point) -> f64,
{
    fn distance(&self, a: Point, b: Point) -> f64 {
        self(a, b)
    }
}

/// Straight-line distance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, a: Point, b: Point) -> f64 {
        (a.x - b.x).hypot(a.y - b.y)
    }
}

/// Manhattan distance `|dx| + |dy|`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Taxicab;

impl Metric for Taxicab {
    fn distance(&self, a: Point, b: Point) -> f64 {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }
}

/// Minkowski distance `(|dx|^p + |dy|^p)^(1/p)`.
///
/// `p = ∞` is the max norm. Exponents below 1 are accepted even though the
/// result no longer satisfies the triangle inequality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PNorm {
    /// Exponent.
    pub p: f64,
}

impl PNorm {
    /// Create a p-norm metric.
    #[must_use]
    pub const fn new(p: f64) -> Self {
        Self { p }
    }
}

impl Metric for PNorm {
    fn distance(&self, a: Point, b: Point) -> f64 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        if self.p.is_infinite() {
            return dx.max(dy);
        }
        (dx.powf(self.p) + dy.powf(self.p)).powf(1.0 / self.p)
    }
}

/// Every trip goes through the post office at the origin.
///
/// Zero for identical points, `|a| + |b|` otherwise. Discontinuous at `a == b`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PostOffice;

impl Metric for PostOffice {
    fn distance(&self, a: Point, b: Point) -> f64 {
        if a == b {
            0.0
        } else {
            a.norm() + b.norm()
        }
    }
}

/// Rail lines radiate from the origin: points on a common ray travel
/// directly, everything else changes trains at the hub.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BritishRail;

impl Metric for BritishRail {
    fn distance(&self, a: Point, b: Point) -> f64 {
        let same_ray = a.cross(b).abs() <= f64::EPSILON * a.norm() * b.norm() && a.dot(b) >= 0.0;
        if same_ray {
            Euclidean.distance(a, b)
        } else {
            a.norm() + b.norm()
        }
    }
}

/// River metric: vertical streets feed a single freeway along the x axis.
///
/// Points on the same street travel `|dy|`; otherwise drive to the freeway,
/// along it, and back out. Discontinuous at `a.x == b.x`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LosAngeles;

impl Metric for LosAngeles {
    fn distance(&self, a: Point, b: Point) -> f64 {
        if a.x == b.x {
            (a.y - b.y).abs()
        } else {
            a.y.abs() + (a.x - b.x).abs() + b.y.abs()
        }
    }
}

/// Number of coordinates that differ.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hamming;

impl Metric for Hamming {
    fn distance(&self, a: Point, b: Point) -> f64 {
        f64::from(u8::from(a.x != b.x) + u8::from(a.y != b.y))
    }
}

/// Walk the arc at the smaller radius, then radially out to the other point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RadialArc;

impl Metric for RadialArc {
    fn distance(&self, a: Point, b: Point) -> f64 {
        let (ra, rb) = (a.norm(), b.norm());
        let inner = ra.min(rb);
        if inner == 0.0 {
            return (ra - rb).abs();
        }
        let angle = a.cross(b).abs().atan2(a.dot(b)).clamp(0.0, PI);
        (ra - rb).abs() + inner * angle
    }
}

/// Named catalog entry, selectable from scene files and the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum MetricKind {
    /// [`Euclidean`].
    #[default]
    Euclidean,
    /// [`Taxicab`].
    Taxicab,
    /// [`PNorm`] with exponent `p`.
    PNorm {
        /// Exponent.
        p: f64,
    },
    /// [`PostOffice`].
    PostOffice,
    /// [`BritishRail`].
    BritishRail,
    /// [`LosAngeles`].
    LosAngeles,
    /// [`Hamming`].
    Hamming,
    /// [`RadialArc`].
    RadialArc,
}

impl MetricKind {
    /// All parameterless catalog entries, plus the p-norm at `p = 3`.
    pub const ALL: [Self; 8] = [
        Self::Euclidean,
        Self::Taxicab,
        Self::PNorm { p: 3.0 },
        Self::PostOffice,
        Self::BritishRail,
        Self::LosAngeles,
        Self::Hamming,
        Self::RadialArc,
    ];
}

impl Metric for MetricKind {
    fn distance(&self, a: Point, b: Point) -> f64 {
        match *self {
            Self::Euclidean => Euclidean.distance(a, b),
            Self::Taxicab => Taxicab.distance(a, b),
            Self::PNorm { p } => PNorm::new(p).distance(a, b),
            Self::PostOffice => PostOffice.distance(a, b),
            Self::BritishRail => BritishRail.distance(a, b),
            Self::LosAngeles => LosAngeles.distance(a, b),
            Self::Hamming => Hamming.distance(a, b),
            Self::RadialArc => RadialArc.distance(a, b),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Euclidean => write!(f, "Euclidean"),
            Self::Taxicab => write!(f, "taxicab"),
            Self::PNorm { p } => write!(f, "p-norm (p = {p})"),
            Self::PostOffice => write!(f, "post office"),
            Self::BritishRail => write!(f, "British Rail"),
            Self::LosAngeles => write!(f, "Los Angeles"),
            Self::Hamming => write!(f, "Hamming"),
            Self::RadialArc => write!(f, "radial/arc"),
        }
    }
}
