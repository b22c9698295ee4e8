//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point2;
use uconic::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// True when both sequences have the same length and every pair of points
/// lies within `eps` of each other.
pub fn points_approx_eq(lhs: &[Point2<Real>], rhs: &[Point2<Real>], eps: Real) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs)
            .all(|(p, q)| approx_eq(p.x, q.x, eps) && approx_eq(p.y, q.y, eps))
}

/// A handful of points scattered over all four quadrants.
pub fn scattered_points() -> Vec<Point2<Real>> {
    vec![
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 2.5),
        Point2::new(-3.0, 4.0),
        Point2::new(-0.5, -7.25),
        Point2::new(6.0, -1.0),
        Point2::new(0.0, 0.0),
    ]
}
