//! Brute-force locus tracing over a sampling grid.
//!
//! Every grid point is tested against the locus predicate; accepted points
//! are collected in scan order. Inputs are validated up front so an
//! unusable domain or tolerance fails before any sampling happens.
//!
//! # Example
//!
//! ```rust
//! use metric_loci::prelude::*;
//!
//! let points = LocusEngine::new(&Taxicab)
//!     .domain(Domain::square(-3.0, 0.5, 3.0))
//!     .tolerance(0.05)
//!     .trace(&Locus::circle(Point::ORIGIN, 2.0))?;
//!
//! assert!(points.iter().all(|p| (p.x.abs() + p.y.abs() - 2.0).abs() < 0.05));
//! # Ok::<(), metric_loci::Error>(())
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::cancel::{CancelHook, Never};
use crate::error::{Error, Result};
use crate::figure::{LocusFigure, PointSet};
use crate::grid::Domain;
use crate::line_distance::EstimatorStats;
use crate::locus::Locus;
use crate::metric::Metric;

/// Default acceptance tolerance.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Default sampling domain: `[-5, 5]²` at step 0.1.
pub const DEFAULT_DOMAIN: Domain = Domain::square(-5.0, 0.1, 5.0);

static NEVER: Never = Never;

/// Counters from one trace.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraceStats {
    /// Grid points tested.
    pub candidates: usize,
    /// Grid points accepted.
    pub accepted: usize,
    /// Line-distance work (parabolas only).
    pub estimator: EstimatorStats,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// A traced point set with its counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Accepted points in scan order.
    pub points: PointSet,
    /// Work done.
    pub stats: TraceStats,
}

/// Builder-style locus tracer over one metric.
pub struct LocusEngine<'a, M: ?Sized> {
    metric: &'a M,
    domain: Domain,
    tolerance: f64,
    cancel: &'a dyn CancelHook,
}

impl<'a, M: Metric + ?Sized> LocusEngine<'a, M> {
    /// Create an engine with the default domain and tolerance.
    #[must_use]
    pub fn new(metric: &'a M) -> Self {
        Self {
            metric,
            domain: DEFAULT_DOMAIN,
            tolerance: DEFAULT_TOLERANCE,
            cancel: &NEVER,
        }
    }

    /// Set the sampling domain.
    #[must_use]
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Set the acceptance tolerance.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Install a cancellation hook, polled once per candidate point.
    #[must_use]
    pub fn cancel(mut self, hook: &'a dyn CancelHook) -> Self {
        self.cancel = hook;
        self
    }

    /// Check domain and tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] or [`Error::InvalidTolerance`].
    pub fn validate(&self) -> Result<()> {
        self.domain.validate()?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }

    /// Trace `locus`, returning accepted points in scan order.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a validation error before sampling, or [`Error::Cancelled`]
    /// if the hook fires.
    pub fn trace(&self, locus: &Locus) -> Result<PointSet> {
        self.trace_with_stats(locus).map(|trace| trace.points)
    }

    /// Trace `locus` and report the work done.
    ///
    /// # Errors
    ///
    /// Same as [`LocusEngine::trace`].
    pub fn trace_with_stats(&self, locus: &Locus) -> Result<Trace> {
        self.validate()?;
        locus.validate()?;

        let start = Instant::now();
        let mut stats = TraceStats::default();
        let mut points = PointSet::new();

        debug!(
            "tracing {} over {} candidates (eps = {})",
            locus.kind(),
            self.domain.len(),
            self.tolerance
        );

        for candidate in self.domain.samples() {
            if self.cancel.is_cancelled() {
                debug!("{} trace cancelled after {} candidates", locus.kind(), stats.candidates);
                return Err(Error::Cancelled {
                    accepted: points.len(),
                });
            }
            stats.candidates += 1;
            if locus.accepts(self.metric, candidate, self.tolerance, &mut stats.estimator) {
                points.push(candidate);
            }
        }

        stats.accepted = points.len();
        stats.elapsed = start.elapsed();
        debug!(
            "{} trace accepted {}/{} in {:?}",
            locus.kind(),
            stats.accepted,
            stats.candidates,
            stats.elapsed
        );

        Ok(Trace { points, stats })
    }

    /// Trace `locus` and bundle it with its markers.
    ///
    /// # Errors
    ///
    /// Same as [`LocusEngine::trace`].
    pub fn figure(&self, title: impl Into<String>, locus: &Locus) -> Result<LocusFigure> {
        let points = self.trace(locus)?;
        Ok(LocusFigure::new(title, *locus, self.domain, points))
    }
}

/// One-shot trace of `locus` under `metric`.
///
/// # Errors
///
/// Same as [`LocusEngine::trace`].
pub fn trace_locus<M: Metric + ?Sized>(
    locus: &Locus,
    metric: &M,
    domain: Domain,
    tolerance: f64,
) -> Result<PointSet> {
    LocusEngine::new(metric)
        .domain(domain)
        .tolerance(tolerance)
        .trace(locus)
}
