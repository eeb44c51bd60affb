//! Scene files: the parameters of one figure, in YAML.
//!
//! A scene picks a metric, a sampling domain, a tolerance and what to draw.
//! Every field has a default, so an empty document is a valid scene (the
//! Euclidean distance field around the origin).
//!
//! ```yaml
//! version: 1
//! title: Taxicab circle
//! metric:
//!   name: taxicab
//! domain: { min: -3, step: 0.1, max: 3 }
//! tolerance: 0.05
//! figure:
//!   circle:
//!     center: { x: 0, y: 0 }
//!     radius: 2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cancel::{CancelHook, Never};
use crate::contour::{ContourEvaluator, ContourGrid};
use crate::engine::{LocusEngine, DEFAULT_DOMAIN, DEFAULT_TOLERANCE};
use crate::error::{Error, Result};
use crate::figure::{ContourFigure, Figure, Marker};
use crate::geometry::{Line, Point};
use crate::grid::{AxisRange, Domain};
use crate::locus::Locus;
use crate::metric::MetricKind;

/// What a scene draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureSpec {
    /// Trace a circle over the scene domain.
    Circle {
        /// Center point.
        center: Point,
        /// Target distance.
        radius: f64,
    },
    /// Trace an ellipse over the scene domain.
    Ellipse {
        /// First focus.
        focus1: Point,
        /// Second focus.
        focus2: Point,
        /// Target distance sum.
        sum: f64,
    },
    /// Trace a parabola over the scene domain.
    Parabola {
        /// Focus point.
        focus: Point,
        /// Directrix line.
        directrix: Line,
    },
    /// Evaluate the distance field from `reference`.
    Contour {
        /// Point distances are measured from.
        #[serde(default)]
        reference: Point,
        /// Evaluation grid.
        #[serde(default)]
        grid: ContourGrid,
    },
}

impl Default for FigureSpec {
    fn default() -> Self {
        Self::Contour {
            reference: Point::ORIGIN,
            grid: ContourGrid::default(),
        }
    }
}

impl FigureSpec {
    /// The locus to trace, if this is a locus figure.
    #[must_use]
    pub const fn locus(&self) -> Option<Locus> {
        match *self {
            Self::Circle { center, radius } => Some(Locus::circle(center, radius)),
            Self::Ellipse { focus1, focus2, sum } => Some(Locus::ellipse(focus1, focus2, sum)),
            Self::Parabola { focus, directrix } => Some(Locus::parabola(focus, directrix)),
            Self::Contour { .. } => None,
        }
    }
}

impl From<Locus> for FigureSpec {
    fn from(locus: Locus) -> Self {
        match locus {
            Locus::Circle { center, radius } => Self::Circle { center, radius },
            Locus::Ellipse { focus1, focus2, sum } => Self::Ellipse { focus1, focus2, sum },
            Locus::Parabola { focus, directrix } => Self::Parabola { focus, directrix },
        }
    }
}

/// One figure's parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene format version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Figure title; derived from the metric and figure when absent.
    #[serde(default)]
    pub title: Option<String>,

    /// Distance function.
    #[serde(default)]
    pub metric: MetricKind,

    /// Square sampling range shared by both axes (locus figures only).
    #[serde(default = "default_domain")]
    pub domain: AxisRange,

    /// Acceptance tolerance (locus figures only).
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// What to draw.
    #[serde(default)]
    pub figure: FigureSpec,
}

fn default_version() -> u32 {
    1
}
fn default_domain() -> AxisRange {
    DEFAULT_DOMAIN.x
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            version: default_version(),
            title: None,
            metric: MetricKind::default(),
            domain: default_domain(),
            tolerance: default_tolerance(),
            figure: FigureSpec::default(),
        }
    }
}

impl Scene {
    /// Creates a scene with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses a scene from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads a scene with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Serializes the scene back to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// The sampling domain as a square.
    #[must_use]
    pub fn sampling_domain(&self) -> Domain {
        Domain::new(self.domain, self.domain)
    }

    /// Title to draw: the explicit one, or "<metric> <figure>".
    #[must_use]
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        match self.figure.locus() {
            Some(locus) => format!("{} {}", self.metric, locus.kind()),
            None => format!("{} distance", self.metric),
        }
    }

    /// Compute the figure.
    ///
    /// # Errors
    ///
    /// Returns validation errors from the engine or contour evaluator.
    pub fn run(&self) -> Result<Figure> {
        self.run_with(&Never)
    }

    /// Compute the figure, polling `cancel` during locus traces.
    ///
    /// # Errors
    ///
    /// Same as [`Scene::run`], plus [`Error::Cancelled`].
    pub fn run_with(&self, cancel: &dyn CancelHook) -> Result<Figure> {
        let title = self.display_title();
        if let FigureSpec::Contour { reference, grid } = self.figure {
            let field = ContourEvaluator::new(grid).evaluate(&self.metric, reference)?;
            return Ok(Figure::Contour(ContourFigure {
                title,
                field,
                reference: Marker::new("reference", reference),
            }));
        }

        let locus = self.figure.locus().ok_or_else(|| Error::InvalidParameter {
            name: "figure",
            message: "no locus to trace".to_string(),
        })?;
        LocusEngine::new(&self.metric)
            .domain(self.sampling_domain())
            .tolerance(self.tolerance)
            .cancel(cancel)
            .figure(title, &locus)
            .map(Figure::Locus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_scene_default() {
        let scene = Scene::new();
        assert_eq!(scene.version, 1);
        assert_eq!(scene.metric, MetricKind::Euclidean);
        assert_eq!(scene.tolerance, 0.05);
        assert!(matches!(scene.figure, FigureSpec::Contour { .. }));
    }

    #[test]
    fn test_scene_parse_empty() {
        assert_eq!(Scene::parse("").unwrap(), Scene::default());
    }

    #[test]
    fn test_scene_parse_minimal() {
        let scene = Scene::parse("version: 1").unwrap();
        assert_eq!(scene.version, 1);
        assert_eq!(scene.domain, DEFAULT_DOMAIN.x);
    }

    #[test]
    fn test_scene_parse_circle() {
        let yaml = r#"
title: Taxicab circle
metric:
  name: taxicab
domain: { min: -3, step: 0.5, max: 3 }
tolerance: 0.05
figure:
  circle:
    center: { x: 0, y: 0 }
    radius: 2
"#;
        let scene = Scene::parse(yaml).unwrap();
        assert_eq!(scene.metric, MetricKind::Taxicab);
        assert_eq!(scene.figure, Locus::circle(Point::ORIGIN, 2.0).into());

        let Figure::Locus(figure) = scene.run().unwrap() else {
            panic!("expected a locus figure");
        };
        assert_eq!(figure.title, "Taxicab circle");
        assert!(figure.points.as_slice().contains(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_scene_parse_parabola() {
        let yaml = r#"
metric: { name: p_norm, p: 2 }
figure:
  parabola:
    focus: { x: 0, y: 1 }
    directrix: { slope: 0, intercept: -1 }
"#;
        let scene = Scene::parse(yaml).unwrap();
        assert_eq!(
            scene.figure,
            FigureSpec::from(Locus::parabola(Point::new(0.0, 1.0), Line::horizontal(-1.0)))
        );
        assert_eq!(scene.display_title(), "p-norm (p = 2) parabola");
    }

    #[test]
    fn test_scene_contour_run() {
        let yaml = r#"
metric: { name: los_angeles }
figure:
  contour:
    reference: { x: 1, y: 1 }
    grid: { samples: 11 }
"#;
        let scene = Scene::parse(yaml).unwrap();
        let Figure::Contour(figure) = scene.run().unwrap() else {
            panic!("expected a contour figure");
        };
        assert_eq!(figure.field.row_count(), 11);
        assert_eq!(figure.reference.point, Point::new(1.0, 1.0));
        assert_eq!(figure.title, "Los Angeles distance");
    }

    #[test]
    fn test_scene_parse_error_includes_line() {
        let yaml = r#"
version: 1
metric:
  name: taxicab
tolerance: not_a_number
"#;
        let err = Scene::parse(yaml).unwrap_err();
        match err {
            Error::ConfigParse { line, message } => {
                assert!(line == 5 || message.contains("line 5"), "line {line}: {message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_scene_unknown_metric() {
        assert!(Scene::parse("metric: { name: chebyshev_prime }").is_err());
    }

    #[test]
    fn test_scene_invalid_tolerance_surfaces_on_run() {
        let scene = Scene {
            tolerance: 0.0,
            figure: Locus::circle(Point::ORIGIN, 1.0).into(),
            ..Scene::default()
        };
        assert!(matches!(scene.run(), Err(Error::InvalidTolerance(_))));
    }

    #[test]
    fn test_scene_round_trip_yaml() {
        let scene = Scene {
            title: Some("round trip".to_string()),
            metric: MetricKind::PNorm { p: 3.0 },
            figure: Locus::ellipse(Point::new(1.0, 0.0), Point::new(-1.0, 0.0), 4.0).into(),
            ..Scene::default()
        };
        let yaml = scene.to_yaml().unwrap();
        assert_eq!(Scene::parse(&yaml).unwrap(), scene);
    }

    #[test]
    fn test_scene_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "metric: {{ name: hamming }}").unwrap();
        let scene = Scene::load(file.path()).unwrap();
        assert_eq!(scene.metric, MetricKind::Hamming);
    }

    #[test]
    fn test_scene_load_missing() {
        assert!(matches!(Scene::load("/nonexistent/scene.yaml"), Err(Error::ConfigNotFound(_))));
        assert_eq!(Scene::load_or_default("/nonexistent/scene.yaml"), Scene::default());
    }
}
