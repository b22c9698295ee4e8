//! Rigid 2D rotation of ordered point sequences about the origin.

use crate::errors::{ConicError, ensure_finite};
use crate::float_types::Real;
use nalgebra::{Point2, Rotation2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Returns the rotation matrix for `angle_degrees` (counter-clockwise).
///
/// # Errors
/// [`ConicError::InvalidParameter`] if the angle is not finite.
#[inline]
fn rotation_from_degrees(angle_degrees: Real) -> Result<Rotation2<Real>, ConicError> {
    ensure_finite("angle_degrees", angle_degrees)?;
    Ok(Rotation2::new(angle_degrees.to_radians()))
}

/// Rotates a single point about the origin by `angle_degrees`.
///
/// # Errors
/// [`ConicError::InvalidParameter`] if the angle is not finite.
pub fn rotate_point(point: &Point2<Real>, angle_degrees: Real) -> Result<Point2<Real>, ConicError> {
    Ok(rotation_from_degrees(angle_degrees)? * point)
}

/// Applies the 2D rotation matrix to every point and returns a new sequence.
///
/// ```text
/// [x']   [cos θ  -sin θ] [x]
/// [y'] = [sin θ   cos θ] [y]
/// ```
///
/// The input is left untouched and order is preserved. A zero angle gives the
/// identity matrix, so `rotate(p, 0.0) == p` holds exactly; composition and
/// inversion hold within floating tolerance.
///
/// # Errors
/// [`ConicError::InvalidParameter`] if the angle is not finite.
#[cfg(not(feature = "parallel"))]
pub fn rotate(points: &[Point2<Real>], angle_degrees: Real) -> Result<Vec<Point2<Real>>, ConicError> {
    let rot = rotation_from_degrees(angle_degrees)?;
    Ok(points.iter().map(|p| rot * p).collect())
}

/// Applies the 2D rotation matrix to every point and returns a new sequence.
///
/// ```text
/// [x']   [cos θ  -sin θ] [x]
/// [y'] = [sin θ   cos θ] [y]
/// ```
///
/// The input is left untouched and order is preserved. A zero angle gives the
/// identity matrix, so `rotate(p, 0.0) == p` holds exactly; composition and
/// inversion hold within floating tolerance.
///
/// # Errors
/// [`ConicError::InvalidParameter`] if the angle is not finite.
#[cfg(feature = "parallel")]
pub fn rotate(points: &[Point2<Real>], angle_degrees: Real) -> Result<Vec<Point2<Real>>, ConicError> {
    let rot = rotation_from_degrees(angle_degrees)?;
    Ok(points.par_iter().map(|p| rot * p).collect())
}

/// Rotates split coordinate sequences, for callers holding `xs`/`ys` rather
/// than points.
///
/// # Errors
/// [`ConicError::InvalidParameter`] when the sequences differ in length or the
/// angle is not finite.
pub fn rotate_xy(
    xs: &[Real],
    ys: &[Real],
    angle_degrees: Real,
) -> Result<(Vec<Real>, Vec<Real>), ConicError> {
    if xs.len() != ys.len() {
        return Err(ConicError::invalid_parameter(
            "ys.len",
            ys.len() as Real,
            "must match xs.len",
        ));
    }
    let points: Vec<Point2<Real>> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| Point2::new(x, y))
        .collect();
    Ok(rotate(&points, angle_degrees)?
        .into_iter()
        .map(|p| (p.x, p.y))
        .unzip())
}
