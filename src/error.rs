//! Error types for metric-loci operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while tracing loci or evaluating contours.
///
/// Degenerate metric output (NaN, asymmetry, discontinuities) is never an
/// error: such candidates simply fail their predicate.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (scene files, figure output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Sampling range is empty or cannot be stepped through.
    #[error("Invalid domain on {axis} axis: {message}")]
    InvalidDomain {
        /// Axis name (`x` or `y`).
        axis: &'static str,
        /// Why the range was rejected.
        message: String,
    },

    /// Tolerance must be finite and strictly positive.
    #[error("Invalid tolerance: {0} (must be finite and > 0)")]
    InvalidTolerance(f64),

    /// A locus or contour parameter is out of range.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// The caller's cancellation hook fired mid-trace.
    #[error("Trace cancelled after accepting {accepted} points")]
    Cancelled {
        /// Points accepted before cancellation.
        accepted: usize,
    },

    /// Scene file parsing error with line number.
    #[error("Scene error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Scene file not found.
    #[error("Scene file not found: {0}")]
    ConfigNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDomain {
            axis: "x",
            message: "step must be positive".to_string(),
        };
        assert!(err.to_string().contains("x axis"));
        assert!(err.to_string().contains("step"));
    }

    #[test]
    fn test_cancelled_reports_count() {
        let err = Error::Cancelled { accepted: 17 };
        assert!(err.to_string().contains("17"));
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
