//! # metric-loci
//!
//! Geometric loci and distance fields under arbitrary planar metrics.
//!
//! Circles, ellipses and parabolas are defined purely by distances, so the
//! same definitions produce very different shapes once the Euclidean metric
//! is swapped for taxicab, post office, British Rail, Los Angeles and
//! friends. This crate traces those shapes by brute-force sampling: every
//! point of a grid is tested against the locus equation within a tolerance.
//!
//! ## Features
//!
//! - **Any metric**: anything implementing [`metric::Metric`], including
//!   plain closures `Fn(Point, Point) -> f64`
//! - **Three loci**: circle, ellipse and parabola (with a grid-search
//!   point-to-line distance that needs no closed form)
//! - **Distance fields**: metric values on a square grid for contour plots
//! - **Multiple outputs**: SVG, terminal (ASCII) and CSV
//! - **Scenes**: YAML files describing one figure each
//!
//! ## Quick Start
//!
//! ```rust
//! use metric_loci::prelude::*;
//!
//! let diamond = LocusEngine::new(&Taxicab)
//!     .domain(Domain::square(-3.0, 0.1, 3.0))
//!     .figure("taxicab circle", &Locus::circle(Point::ORIGIN, 2.0))?;
//!
//! let svg = SvgRenderer::default().render_locus(&diamond)?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), metric_loci::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: the `metric-loci` binary (clap + env_logger)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Points and lines in the plane.
pub mod geometry;

/// Distance functions and the built-in catalog.
pub mod metric;

/// Sampling ranges and grid iteration.
pub mod grid;

// ============================================================================
// Locus Modules
// ============================================================================

/// Locus definitions and membership predicates.
pub mod locus;

/// Grid-search distance from a point to a line.
pub mod line_distance;

/// Cooperative cancellation for long traces.
pub mod cancel;

/// Locus tracing over a sampling grid.
pub mod engine;

/// Distance fields for contour plots.
pub mod contour;

// ============================================================================
// Output Modules
// ============================================================================

/// Figures and the renderer interface.
pub mod figure;

/// Output renderers (SVG, terminal, CSV).
pub mod output;

/// YAML scene files.
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for metric-loci operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use metric_loci::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cancel::{CancelHook, Deadline, Never};
    pub use crate::contour::{ContourEvaluator, ContourGrid, ScalarField};
    pub use crate::engine::{trace_locus, LocusEngine, Trace, TraceStats};
    pub use crate::error::{Error, Result};
    pub use crate::figure::{ContourFigure, Figure, LocusFigure, Marker, PointSet, Renderer};
    pub use crate::geometry::{Line, Point};
    pub use crate::grid::{AxisRange, Domain, GridSampler};
    pub use crate::locus::{Locus, LocusKind};
    pub use crate::metric::{
        BritishRail, Euclidean, Hamming, LosAngeles, Metric, MetricKind, PNorm, PostOffice,
        RadialArc, Taxicab,
    };
    pub use crate::output::{SvgRenderer, TerminalRenderer};
    pub use crate::scene::{FigureSpec, Scene};
}
