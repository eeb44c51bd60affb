//! SVG renderer for locus and contour figures.
//!
//! Produces a standalone vector document: traced points as dots, markers as
//! labeled crosses, distance fields as shaded cells.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::figure::{ContourFigure, Figure, LocusFigure, Marker, Renderer};
use crate::geometry::Point;

const BACKGROUND: &str = "rgb(255,255,255)";
const AXIS: &str = "rgb(160,160,160)";
const POINT: &str = "rgb(31,119,180)";
const MARKER: &str = "rgb(214,39,40)";
const TEXT: &str = "rgb(40,40,40)";

/// Maps data coordinates into the plot area, flipping y.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn new(x: (f64, f64), y: (f64, f64), left: f64, top: f64, width: f64, height: f64) -> Self {
        let span = |(lo, hi): (f64, f64)| if hi > lo { hi - lo } else { 1.0 };
        Self {
            x_min: x.0,
            x_span: span(x),
            y_min: y.0,
            y_span: span(y),
            left,
            top,
            width,
            height,
        }
    }

    fn map(&self, p: Point) -> (f64, f64) {
        let px = self.left + (p.x - self.x_min) / self.x_span * self.width;
        let py = self.top + self.height - (p.y - self.y_min) / self.y_span * self.height;
        (px, py)
    }
}

/// SVG renderer configuration.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
    margin: u32,
    point_radius: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(600, 600)
    }
}

impl SvgRenderer {
    /// Create a renderer with the given document size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: 40,
            point_radius: 1.5,
        }
    }

    /// Set the margin around the plot area.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the dot radius for traced points.
    #[must_use]
    pub fn point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    /// Render `figure` and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&mut self, figure: &Figure, path: P) -> Result<()> {
        let svg = figure.render_with(self)?;
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }

    fn area(&self, x: (f64, f64), y: (f64, f64)) -> PlotArea {
        let m = f64::from(self.margin);
        let w = f64::from(self.width.saturating_sub(2 * self.margin).max(1));
        let h = f64::from(self.height.saturating_sub(2 * self.margin).max(1));
        PlotArea::new(x, y, m, m, w, h)
    }

    fn open(&self, svg: &mut String, title: &str) {
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{BACKGROUND}"/>"#);
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="14" fill="{TEXT}" text-anchor="middle">{}</text>"#,
            self.width / 2,
            self.margin / 2 + 5,
            escape(title)
        );
    }

    fn axes(svg: &mut String, area: &PlotArea) {
        let _ = writeln!(
            svg,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{AXIS}" stroke-width="1"/>"#,
            area.left, area.top, area.width, area.height
        );
    }

    fn marker(&self, svg: &mut String, area: &PlotArea, marker: &Marker) {
        let (x, y) = area.map(marker.point);
        let s = self.point_radius * 3.0;
        let _ = writeln!(
            svg,
            r#"  <path d="M{:.2} {:.2}L{:.2} {:.2}M{:.2} {:.2}L{:.2} {:.2}" stroke="{MARKER}" stroke-width="2"/>"#,
            x - s,
            y - s,
            x + s,
            y + s,
            x - s,
            y + s,
            x + s,
            y - s
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="11" fill="{MARKER}">{}</text>"#,
            x + s + 2.0,
            y - s,
            escape(&marker.label)
        );
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render_locus(&mut self, figure: &LocusFigure) -> Result<String> {
        let domain = figure.domain;
        let area = self.area((domain.x.min, domain.x.max), (domain.y.min, domain.y.max));

        let mut svg = String::with_capacity(4096 + figure.points.len() * 64);
        self.open(&mut svg, &figure.title);
        Self::axes(&mut svg, &area);

        for p in &figure.points {
            let (x, y) = area.map(*p);
            let _ = writeln!(
                svg,
                r#"  <circle cx="{x:.2}" cy="{y:.2}" r="{}" fill="{POINT}"/>"#,
                self.point_radius
            );
        }
        for marker in &figure.markers {
            self.marker(&mut svg, &area, marker);
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    fn render_contour(&mut self, figure: &ContourFigure) -> Result<String> {
        let field = &figure.field;
        let bounds = |axis: &[f64]| {
            (axis.first().copied().unwrap_or(0.0), axis.last().copied().unwrap_or(1.0))
        };
        let area = self.area(bounds(field.x_axis()), bounds(field.y_axis()));

        let mut svg = String::with_capacity(4096 + field.values().len() * 96);
        self.open(&mut svg, &figure.title);

        let (lo, hi) = field.extent().unwrap_or((0.0, 1.0));
        let range = if hi > lo { hi - lo } else { 1.0 };
        let cell_w = area.width / field.col_count().max(1) as f64;
        let cell_h = area.height / field.row_count().max(1) as f64;

        for (row, values) in field.rows().enumerate() {
            for (col, value) in values.iter().enumerate() {
                if !value.is_finite() {
                    continue;
                }
                // Near is dark, far is light.
                let shade = (((value - lo) / range).clamp(0.0, 1.0) * 255.0) as u8;
                let x = area.left + col as f64 * cell_w;
                let y = area.top + area.height - (row as f64 + 1.0) * cell_h;
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{x:.2}" y="{y:.2}" width="{cell_w:.2}" height="{cell_h:.2}" fill="rgb({shade},{shade},{shade})"/>"#
                );
            }
        }

        Self::axes(&mut svg, &area);
        self.marker(&mut svg, &area, &figure.reference);

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::{ContourEvaluator, ContourGrid};
    use crate::engine::LocusEngine;
    use crate::figure::PointSet;
    use crate::grid::Domain;
    use crate::locus::Locus;
    use crate::metric::{Euclidean, Taxicab};

    #[test]
    fn test_render_locus() {
        let figure = LocusEngine::new(&Taxicab)
            .domain(Domain::square(-2.0, 1.0, 2.0))
            .figure("diamond", &Locus::circle(Point::ORIGIN, 2.0))
            .unwrap();
        let svg = SvgRenderer::default().render_locus(&figure).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches("<circle").count(), figure.points.len());
        assert!(svg.contains("center"));
        assert!(svg.contains("diamond"));
    }

    #[test]
    fn test_render_empty_locus() {
        let figure = LocusFigure::new(
            "nothing",
            Locus::circle(Point::ORIGIN, 10.0),
            Domain::square(-1.0, 0.5, 1.0),
            PointSet::new(),
        );
        let svg = SvgRenderer::default().render_locus(&figure).unwrap();
        assert_eq!(svg.matches("<circle").count(), 0);
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_render_contour() {
        let field = ContourEvaluator::new(ContourGrid::new(-1.0, 1.0, 5))
            .evaluate(&Euclidean, Point::ORIGIN)
            .unwrap();
        let figure = ContourFigure {
            title: "field".to_string(),
            field,
            reference: Marker::new("reference", Point::ORIGIN),
        };
        let svg = SvgRenderer::new(200, 200).render_contour(&figure).unwrap();
        // Background, frame, and 25 cells.
        assert_eq!(svg.matches("<rect").count(), 27);
        assert!(svg.contains("rgb(0,0,0)"));
        assert!(svg.contains("rgb(255,255,255)"));
    }

    #[test]
    fn test_escape_title() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn test_plot_area_flips_y() {
        let area = PlotArea::new((0.0, 10.0), (0.0, 10.0), 0.0, 0.0, 100.0, 100.0);
        assert_eq!(area.map(Point::new(0.0, 0.0)), (0.0, 100.0));
        assert_eq!(area.map(Point::new(10.0, 10.0)), (100.0, 0.0));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.svg");
        let figure = Figure::Locus(LocusFigure::new(
            "file",
            Locus::circle(Point::ORIGIN, 1.0),
            Domain::square(-1.0, 1.0, 1.0),
            PointSet::new(),
        ));
        SvgRenderer::default().write_to_file(&figure, &path).unwrap();
        assert!(std::fs::read_to_string(path).unwrap().contains("file"));
    }
}
