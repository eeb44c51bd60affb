//! Plain-text tables for downstream tools.

use std::io::Write;

use crate::contour::ScalarField;
use crate::error::Result;
use crate::figure::{Figure, PointSet};

/// Write traced points as `x,y` rows under a header.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_points<W: Write>(points: &PointSet, mut out: W) -> Result<()> {
    writeln!(out, "x,y")?;
    for p in points {
        writeln!(out, "{},{}", p.x, p.y)?;
    }
    Ok(())
}

/// Write a distance field as `x,y,distance` rows in row-major order.
///
/// Non-finite values are written as Rust formats them (`NaN`, `inf`).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_field<W: Write>(field: &ScalarField, mut out: W) -> Result<()> {
    writeln!(out, "x,y,distance")?;
    for (row, values) in field.rows().enumerate() {
        let y = field.y_axis()[row];
        for (x, value) in field.x_axis().iter().zip(values) {
            writeln!(out, "{x},{y},{value}")?;
        }
    }
    Ok(())
}

/// Write whichever table fits `figure`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_figure<W: Write>(figure: &Figure, out: W) -> Result<()> {
    match figure {
        Figure::Locus(locus) => write_points(&locus.points, out),
        Figure::Contour(contour) => write_field(&contour.field, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::{ContourEvaluator, ContourGrid};
    use crate::geometry::Point;
    use crate::metric::Taxicab;

    #[test]
    fn test_write_points() {
        let points: PointSet = [Point::new(1.0, -0.5), Point::new(0.0, 2.0)].into_iter().collect();
        let mut buf = Vec::new();
        write_points(&points, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x,y\n1,-0.5\n0,2\n");
    }

    #[test]
    fn test_write_empty_points() {
        let mut buf = Vec::new();
        write_points(&PointSet::new(), &mut buf).unwrap();
        assert_eq!(buf, b"x,y\n");
    }

    #[test]
    fn test_write_field() {
        let field = ContourEvaluator::new(ContourGrid::new(0.0, 1.0, 2))
            .evaluate(&Taxicab, Point::ORIGIN)
            .unwrap();
        let mut buf = Vec::new();
        write_field(&field, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "x,y,distance\n0,0,0\n1,0,1\n0,1,1\n1,1,2\n"
        );
    }
}
