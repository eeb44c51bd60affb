//! Distance fields for contour plots.
//!
//! Evaluates `metric(reference, (x, y))` at every node of a square grid.
//! Nothing is filtered: NaN, infinities and jumps from discontinuous metrics
//! are stored exactly as the metric returns them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::metric::Metric;

/// Square evaluation grid with linspace semantics: `samples` evenly spaced
/// nodes on `[min, max]`, endpoints included, on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourGrid {
    /// Lower bound of both axes.
    #[serde(default = "default_min")]
    pub min: f64,
    /// Upper bound of both axes.
    #[serde(default = "default_max")]
    pub max: f64,
    /// Nodes per axis.
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_min() -> f64 {
    -5.0
}
fn default_max() -> f64 {
    5.0
}
fn default_samples() -> usize {
    100
}

impl Default for ContourGrid {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            samples: default_samples(),
        }
    }
}

impl ContourGrid {
    /// Create a square grid.
    #[must_use]
    pub const fn new(min: f64, max: f64, samples: usize) -> Self {
        Self { min, max, samples }
    }

    /// Check that the grid spans a real interval with at least two nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming `grid` otherwise.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(Error::InvalidParameter { name: "grid", message });

        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return invalid(format!(
                "bounds must be finite with min < max, got [{}, {}]",
                self.min, self.max
            ));
        }
        if self.samples < 2 {
            return invalid(format!("needs at least 2 samples, got {}", self.samples));
        }
        Ok(())
    }

    /// Node coordinates along either axis.
    #[must_use]
    pub fn axis(&self) -> Vec<f64> {
        let last = self.samples.saturating_sub(1).max(1) as f64;
        let span = self.max - self.min;
        (0..self.samples)
            .map(|i| self.min + span * i as f64 / last)
            .collect()
    }
}

/// Row-major grid of metric values. Rows follow y, columns follow x.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    values: Vec<f64>,
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
}

impl ScalarField {
    /// Number of rows (y nodes).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.y_axis.len()
    }

    /// Number of columns (x nodes).
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.x_axis.len()
    }

    /// X coordinate of each column.
    #[must_use]
    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    /// Y coordinate of each row.
    #[must_use]
    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    /// Value at `(row, col)`, if in range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.row_count() && col < self.col_count() {
            Some(self.values[row * self.col_count() + col])
        } else {
            None
        }
    }

    /// Grid point at `(row, col)`, if in range.
    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> Option<Point> {
        Some(Point::new(*self.x_axis.get(col)?, *self.y_axis.get(row)?))
    }

    /// Row-major values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.col_count().max(1))
    }

    /// Copy into nested rows, for heatmap-style renderers.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Smallest and largest finite values, or `None` if there are none.
    #[must_use]
    pub fn extent(&self) -> Option<(f64, f64)> {
        let finite = self.values.iter().copied().filter(|v| v.is_finite());
        finite.fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// The field turned a quarter turn counter-clockwise about the grid
    /// center: the value at grid point `(x, y)` moves to `(-y, x)`.
    ///
    /// Only meaningful for square grids symmetric about the origin.
    #[must_use]
    pub fn rotate_quarter(&self) -> Self {
        let n = self.row_count();
        let mut values = vec![f64::NAN; self.values.len()];
        if n == self.col_count() {
            for row in 0..n {
                for col in 0..n {
                    // (x_c, y_r) -> (-y_r, x_c): new col mirrors row, new row is col.
                    values[col * n + (n - 1 - row)] = self.values[row * n + col];
                }
            }
        }
        Self {
            values,
            x_axis: self.x_axis.clone(),
            y_axis: self.y_axis.clone(),
        }
    }
}

/// Evaluates distance fields on a fixed grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContourEvaluator {
    grid: ContourGrid,
}

impl ContourEvaluator {
    /// Create an evaluator on `grid`.
    #[must_use]
    pub const fn new(grid: ContourGrid) -> Self {
        Self { grid }
    }

    /// Grid in use.
    #[must_use]
    pub const fn grid(&self) -> ContourGrid {
        self.grid
    }

    /// Evaluate `metric(reference, (x, y))` at every grid node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an unusable grid or a
    /// non-finite reference.
    pub fn evaluate<M: Metric + ?Sized>(
        &self,
        metric: &M,
        reference: Point,
    ) -> Result<ScalarField> {
        self.grid.validate()?;
        if !reference.is_finite() {
            return Err(Error::InvalidParameter {
                name: "reference",
                message: format!(
                    "coordinates must be finite, got ({}, {})",
                    reference.x, reference.y
                ),
            });
        }

        let axis = self.grid.axis();
        let values = axis
            .iter()
            .flat_map(|&y| axis.iter().map(move |&x| Point::new(x, y)))
            .map(|p| metric.distance(reference, p))
            .collect();

        Ok(ScalarField {
            values,
            x_axis: axis.clone(),
            y_axis: axis,
        })
    }
}
