//! Terminal renderer (ASCII).
//!
//! Locus figures become a character grid with `*` for traced points and `o`
//! for markers. Distance fields use the grayscale ramp ` .:-=+*#%@`, near to
//! far, with `?` for non-finite values.

use std::fmt::Write as FmtWrite;

use crate::error::Result;
use crate::figure::{ContourFigure, LocusFigure, Renderer};
use crate::geometry::Point;

const POINT: char = '*';
const MARKER: char = 'o';
const UNDEFINED: char = '?';

/// Terminal renderer configuration.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    width: usize,
    height: usize,
    invert: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a renderer for an 80x40 character canvas.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 80,
            height: 40,
            invert: false,
        }
    }

    /// Set the canvas width in characters.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Set the canvas height in lines.
    #[must_use]
    pub fn height(mut self, height: usize) -> Self {
        self.height = height.max(1);
        self
    }

    /// Reverse the ramp (far is dark).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    fn cell(&self, p: Point, x: (f64, f64), y: (f64, f64)) -> Option<(usize, usize)> {
        let fx = (p.x - x.0) / (x.1 - x.0);
        let fy = (p.y - y.0) / (y.1 - y.0);
        if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) {
            return None;
        }
        let col = (fx * (self.width - 1) as f64).round() as usize;
        let line = ((1.0 - fy) * (self.height - 1) as f64).round() as usize;
        Some((line, col))
    }

    fn ramp(&self, t: f64) -> char {
        let last = Self::ASCII_RAMP.len() - 1;
        let t = if self.invert { 1.0 - t } else { t };
        Self::ASCII_RAMP[(t.clamp(0.0, 1.0) * last as f64).round() as usize]
    }
}

fn join(canvas: Vec<Vec<char>>, title: &str) -> String {
    let row_len = canvas.first().map_or(0, Vec::len) + 1;
    let mut out = String::with_capacity(canvas.len() * row_len + title.len() + 1);
    let _ = writeln!(out, "{title}");
    for line in canvas {
        out.extend(line);
        out.push('\n');
    }
    out
}

impl Renderer for TerminalRenderer {
    type Output = String;

    fn render_locus(&mut self, figure: &LocusFigure) -> Result<String> {
        let x = (figure.domain.x.min, figure.domain.x.max);
        let y = (figure.domain.y.min, figure.domain.y.max);
        let mut canvas = vec![vec![' '; self.width]; self.height];

        for p in &figure.points {
            if let Some((line, col)) = self.cell(*p, x, y) {
                canvas[line][col] = POINT;
            }
        }
        for marker in &figure.markers {
            if let Some((line, col)) = self.cell(marker.point, x, y) {
                canvas[line][col] = MARKER;
            }
        }

        Ok(join(canvas, &figure.title))
    }

    fn render_contour(&mut self, figure: &ContourFigure) -> Result<String> {
        let field = &figure.field;
        let (lo, hi) = field.extent().unwrap_or((0.0, 1.0));
        let range = if hi > lo { hi - lo } else { 1.0 };
        let rows = field.row_count().max(1);
        let cols = field.col_count().max(1);

        let mut canvas = vec![vec![UNDEFINED; self.width]; self.height];
        for (line, out) in canvas.iter_mut().enumerate() {
            // Top line is the largest y.
            let row = rows - 1 - line * rows / self.height;
            for (col_out, ch) in out.iter_mut().enumerate() {
                let col = col_out * cols / self.width;
                if let Some(value) = field.get(row, col).filter(|v| v.is_finite()) {
                    *ch = self.ramp((value - lo) / range);
                }
            }
        }

        Ok(join(canvas, &figure.title))
    }
}
