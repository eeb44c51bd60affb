//! Falsifiable claims about locus tracing and distance fields.
//!
//! Each test states one property of the public API that a broken sampler,
//! predicate or estimator would violate.
//!
//! Run: cargo test --test locus_properties_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::collections::HashSet;
use std::time::Instant;

use approx::assert_relative_eq;
use proptest::prelude::*;

use metric_loci::locus::{on_circle, on_ellipse};
use metric_loci::output::csv;
use metric_loci::prelude::*;

fn key(p: Point) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

// ============================================================================
// CIRCLES
// ============================================================================

/// Claim 1: the Euclidean circle of radius 2 passes through the axis points
/// and (1.414, 1.414), and not through the center or (3, 0).
#[test]
fn claim_01_euclidean_circle_membership() {
    let accept = |x, y| on_circle(&Euclidean, 0.05, Point::new(x, y), Point::ORIGIN, 2.0);
    assert!(accept(2.0, 0.0));
    assert!(accept(0.0, 2.0));
    assert!(accept(-2.0, 0.0));
    assert!(accept(1.414, 1.414));
    assert!(!accept(0.0, 0.0));
    assert!(!accept(3.0, 0.0));
}

/// Claim 2: a traced Euclidean circle is non-empty and every point is
/// within tolerance of the radius.
#[test]
fn claim_02_traced_circle_is_sound() {
    let points = trace_locus(
        &Locus::circle(Point::ORIGIN, 2.0),
        &Euclidean,
        Domain::square(-3.0, 0.1, 3.0),
        0.05,
    )
    .unwrap();
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| (p.norm() - 2.0).abs() < 0.05));
}

/// Claim 3: tracing is deterministic; the same inputs give the same
/// sequence.
#[test]
fn claim_03_trace_is_idempotent() {
    let engine = LocusEngine::new(&MetricKind::BritishRail).domain(Domain::square(-3.0, 0.1, 3.0));
    let circle = Locus::circle(Point::new(0.5, 0.5), 1.5);
    assert_eq!(engine.trace(&circle).unwrap(), engine.trace(&circle).unwrap());
}

/// Claim 4: distances are measured from the candidate to the center, so a
/// one-way metric sees the argument order.
#[test]
fn claim_04_predicate_argument_order() {
    let one_way = |a: Point, b: Point| (a.x - b.x).max(0.0);
    assert!(on_circle(&one_way, 0.05, Point::new(2.0, 0.0), Point::ORIGIN, 2.0));
    assert!(!on_circle(&one_way, 0.05, Point::new(-2.0, 0.0), Point::ORIGIN, 2.0));
}

// ============================================================================
// ELLIPSES AND PARABOLAS
// ============================================================================

/// Claim 5: (2, 0) has focal sum 4 for foci (±1, 0); the origin has 2.
#[test]
fn claim_05_ellipse_membership() {
    let (f1, f2) = (Point::new(1.0, 0.0), Point::new(-1.0, 0.0));
    assert!(on_ellipse(&Euclidean, 0.05, Point::new(2.0, 0.0), f1, f2, 4.0));
    assert!(!on_ellipse(&Euclidean, 0.05, Point::ORIGIN, f1, f2, 4.0));
}

/// Claim 6: the Euclidean parabola with focus (0, 1) and directrix y = -1
/// passes through its vertex and through (±2, 1).
#[test]
fn claim_06_parabola_vertex_and_latus_rectum() {
    let points = LocusEngine::new(&Euclidean)
        .domain(Domain::square(-2.0, 0.5, 2.0))
        .trace(&Locus::parabola(Point::new(0.0, 1.0), Line::horizontal(-1.0)))
        .unwrap();
    for expected in [Point::ORIGIN, Point::new(2.0, 1.0), Point::new(-2.0, 1.0)] {
        assert!(points.as_slice().contains(&expected), "missing {expected:?}");
    }
}

// ============================================================================
// DISTANCE FIELDS
// ============================================================================

/// Claim 7: the Euclidean field vanishes at its reference and is unchanged
/// by a quarter turn.
#[test]
fn claim_07_euclidean_field_symmetry() {
    let field = ContourEvaluator::new(ContourGrid::new(-5.0, 5.0, 41))
        .evaluate(&Euclidean, Point::ORIGIN)
        .unwrap();
    assert_eq!(field.get(20, 20), Some(0.0));
    for (a, b) in field.values().iter().zip(field.rotate_quarter().values()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-9);
    }
}

/// Claim 8: away from the origin the Los Angeles field is not
/// quarter-turn symmetric.
#[test]
fn claim_08_los_angeles_field_is_anisotropic() {
    let field = ContourEvaluator::new(ContourGrid::new(-5.0, 5.0, 41))
        .evaluate(&LosAngeles, Point::new(1.0, 1.0))
        .unwrap();
    let rotated = field.rotate_quarter();
    let differs = field
        .values()
        .iter()
        .zip(rotated.values())
        .any(|(a, b)| (a - b).abs() > 1e-6);
    assert!(differs);
}

// ============================================================================
// CANCELLATION AND OUTPUT
// ============================================================================

/// Claim 9: an expired deadline stops the trace before any point is kept.
#[test]
fn claim_09_expired_deadline_cancels() {
    let deadline = Deadline(Instant::now());
    let result = LocusEngine::new(&Euclidean)
        .cancel(&deadline)
        .trace(&Locus::parabola(Point::new(0.0, 1.0), Line::horizontal(-1.0)));
    assert!(matches!(result, Err(Error::Cancelled { accepted: 0 })));
}

/// Claim 10: a scene runs end to end into SVG and CSV.
#[test]
fn claim_10_scene_to_outputs() {
    let scene = Scene::parse(
        r#"
metric: { name: post_office }
domain: { min: -2, step: 0.5, max: 2 }
figure:
  circle:
    center: { x: 0, y: 0 }
    radius: 1
"#,
    )
    .unwrap();
    let figure = scene.run().unwrap();
    assert_eq!(figure.title(), "post office circle");

    let Figure::Locus(locus) = &figure else {
        panic!("expected a locus figure");
    };
    // Post office distance from the origin is the Euclidean norm.
    assert!(locus.points.iter().all(|p| (p.norm() - 1.0).abs() < 0.05));

    let svg = figure.render_with(&mut SvgRenderer::default()).unwrap();
    assert_eq!(svg.matches("<circle").count(), locus.points.len());

    let mut table = Vec::new();
    csv::write_figure(&figure, &mut table).unwrap();
    let table = String::from_utf8(table).unwrap();
    assert_eq!(table.lines().count(), locus.points.len() + 1);
}

/// Claim 11: an empty trace still renders as a plot.
#[test]
fn claim_11_empty_trace_renders() {
    let figure = LocusEngine::new(&Hamming)
        .domain(Domain::square(-1.0, 0.5, 1.0))
        .figure("empty", &Locus::circle(Point::ORIGIN, 7.0))
        .unwrap();
    assert!(figure.points.is_empty());
    let svg = SvgRenderer::default().render_locus(&figure).unwrap();
    assert!(svg.contains("</svg>"));
    let text = TerminalRenderer::new().width(10).height(5).render_locus(&figure).unwrap();
    assert_eq!(text.lines().count(), 6);
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Accepted circle points are grid samples within tolerance, for every
    /// catalog metric.
    #[test]
    fn prop_circle_trace_sound(
        metric in prop::sample::select(MetricKind::ALL.to_vec()),
        cx in -2.0f64..2.0,
        cy in -2.0f64..2.0,
        radius in 0.5f64..3.0,
        eps in 0.01f64..0.2
    ) {
        let domain = Domain::square(-4.0, 0.25, 4.0);
        let center = Point::new(cx, cy);
        let points = trace_locus(&Locus::circle(center, radius), &metric, domain, eps).unwrap();

        let grid: HashSet<_> = domain.samples().map(key).collect();
        for p in &points {
            prop_assert!(grid.contains(&key(*p)));
            prop_assert!((metric.distance(*p, center) - radius).abs() < eps);
        }
    }

    /// Widening the tolerance never drops a point.
    #[test]
    fn prop_circle_trace_monotone_in_tolerance(
        metric in prop::sample::select(MetricKind::ALL.to_vec()),
        radius in 0.5f64..3.0,
        eps in 0.01f64..0.1
    ) {
        let domain = Domain::square(-3.0, 0.25, 3.0);
        let circle = Locus::circle(Point::ORIGIN, radius);
        let narrow = trace_locus(&circle, &metric, domain, eps).unwrap();
        let wide: HashSet<_> = trace_locus(&circle, &metric, domain, eps * 2.0)
            .unwrap()
            .into_iter()
            .map(key)
            .collect();
        for p in &narrow {
            prop_assert!(wide.contains(&key(*p)));
        }
    }
}
