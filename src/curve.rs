//! The ordered point sequence every sampler returns.

use crate::errors::ConicError;
use crate::float_types::{Real, tolerance};
use crate::rotation;
use geo::{Coord, LineString};
use nalgebra::Point2;

/// An ordered run of sampled `(x, y)` points.
///
/// Produced fresh by every sampler and owned entirely by the caller. Points on
/// directions an open curve never reaches are stored as `NaN` so that the
/// sequence stays aligned with the angle sweep that produced it; use
/// [`branches`](Curve::branches) to get the continuous pieces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<Point2<Real>>,
}

impl Curve {
    pub const fn new(points: Vec<Point2<Real>>) -> Self {
        Curve { points }
    }

    /// Zips split coordinate sequences into a curve, truncating to the shorter one.
    pub fn from_xy(xs: &[Real], ys: &[Real]) -> Self {
        Curve::new(xs.iter().zip(ys).map(|(&x, &y)| Point2::new(x, y)).collect())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2<Real>> {
        self.points
    }

    pub fn xs(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Splits into the `(xs, ys)` pair that plotting code consumes.
    pub fn into_xy(self) -> (Vec<Real>, Vec<Real>) {
        self.points.into_iter().map(|p| (p.x, p.y)).unzip()
    }

    /// Returns a new curve rotated about the origin by `angle_degrees`.
    ///
    /// # Errors
    /// [`ConicError::InvalidParameter`] if the angle is not finite.
    pub fn rotate(&self, angle_degrees: Real) -> Result<Self, ConicError> {
        Ok(Curve::new(rotation::rotate(&self.points, angle_degrees)?))
    }

    /// Same points, opposite order.
    pub fn reversed(&self) -> Self {
        Curve::new(self.points.iter().rev().copied().collect())
    }

    /// True when the first and last points coincide within [`tolerance`],
    /// scaled by the curve's extent.
    pub fn is_closed(&self) -> bool {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return false;
        };
        if !(is_finite(first) && is_finite(last)) {
            return false;
        }
        let scale = self
            .bounding_box()
            .map(|(min, max)| (max - min).norm())
            .unwrap_or(0.0)
            .max(1.0);
        (first - last).norm() <= tolerance() * scale
    }

    /// Axis-aligned `(min, max)` corners over the finite points, or `None` if there are none.
    pub fn bounding_box(&self) -> Option<(Point2<Real>, Point2<Real>)> {
        let mut finite = self.points.iter().filter(|p| is_finite(p));
        let first = *finite.next()?;
        Some(finite.fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// Splits the curve at non-finite samples into its continuous pieces.
    ///
    /// A closed curve yields one branch. An open curve swept over several turns
    /// yields one piece per visit of each branch, in sweep order.
    pub fn branches(&self) -> Vec<Curve> {
        self.points
            .split(|p| !is_finite(p))
            .filter(|run| !run.is_empty())
            .map(|run| Curve::new(run.to_vec()))
            .collect()
    }

    /// Converts to a `geo::LineString`, dropping non-finite samples.
    pub fn to_line_string(&self) -> LineString<Real> {
        LineString::new(
            self.points
                .iter()
                .filter(|p| is_finite(p))
                .map(|p| Coord { x: p.x, y: p.y })
                .collect(),
        )
    }
}

impl From<Vec<Point2<Real>>> for Curve {
    fn from(points: Vec<Point2<Real>>) -> Self {
        Curve::new(points)
    }
}

#[inline]
fn is_finite(p: &Point2<Real>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
