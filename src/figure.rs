//! Traced results and the renderer interface that consumes them.
//!
//! The sampling core hands over plain data: an ordered [`PointSet`] with
//! labeled [`Marker`]s, or a [`ScalarField`]. How it is drawn is up to the
//! [`Renderer`].

use crate::contour::ScalarField;
use crate::error::Result;
use crate::geometry::Point;
use crate::grid::Domain;
use crate::locus::Locus;

/// A labeled reference point (center, focus, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Legend text.
    pub label: String,
    /// Position.
    pub point: Point,
}

impl Marker {
    /// Create a marker.
    #[must_use]
    pub fn new(label: impl Into<String>, point: Point) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }
}

/// Accepted points in scan order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Create an empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty point set with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// X coordinates, for renderers that take separate columns.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y coordinates, for renderers that take separate columns.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A traced locus ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct LocusFigure {
    /// Figure title.
    pub title: String,
    /// What was traced.
    pub locus: Locus,
    /// Sampling domain, used as the plot extent.
    pub domain: Domain,
    /// Accepted points.
    pub points: PointSet,
    /// Reference points.
    pub markers: Vec<Marker>,
}

impl LocusFigure {
    /// Bundle a traced point set with its locus markers.
    #[must_use]
    pub fn new(title: impl Into<String>, locus: Locus, domain: Domain, points: PointSet) -> Self {
        Self {
            title: title.into(),
            markers: locus.markers(),
            locus,
            domain,
            points,
        }
    }
}

/// A distance field ready for contour drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourFigure {
    /// Figure title.
    pub title: String,
    /// Evaluated field.
    pub field: ScalarField,
    /// Reference point the distances are measured from.
    pub reference: Marker,
}

/// Any figure a scene can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    /// Traced locus.
    Locus(LocusFigure),
    /// Distance contour field.
    Contour(ContourFigure),
}

impl Figure {
    /// Figure title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Locus(f) => &f.title,
            Self::Contour(f) => &f.title,
        }
    }

    /// Draw with `renderer`.
    ///
    /// # Errors
    ///
    /// Propagates renderer errors.
    pub fn render_with<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<R::Output> {
        match self {
            Self::Locus(f) => renderer.render_locus(f),
            Self::Contour(f) => renderer.render_contour(f),
        }
    }
}

/// Draws figures. An empty point set must render as an empty plot.
pub trait Renderer {
    /// What a rendered figure becomes (document text, pixels, ...).
    type Output;

    /// Draw a traced locus.
    fn render_locus(&mut self, figure: &LocusFigure) -> Result<Self::Output>;

    /// Draw a distance field.
    fn render_contour(&mut self, figure: &ContourFigure) -> Result<Self::Output>;
}
