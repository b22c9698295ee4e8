//! Conversion between the axis view `{a, b}` and the shape view `{R0, Ue}` of one conic.
//!
//! The mapping used throughout the crate:
//!
//! ```text
//! toShapeParameter:  R0 = b,   Ue = √(1 − (b/a)²)
//! toAxes:            b  = R0,  a  = R0 / √(1 − Ue²)      (0 ≤ Ue < 1)
//! ```
//!
//! `Ue` is strictly decreasing in the ratio `b/a`, zero for a circle and tending
//! to 1 as the ellipse flattens. `R0` is the closest approach of the curve to
//! its centre, which for a centred ellipse is the semi-minor axis. Both square
//! roots are taken in the factored form `√((1 − q)(1 + q))`.
//!
//! Near `Ue → 1` the recovered `a` loses precision as `ε/(b/a)²`. Axis pairs
//! too thin to survive the round trip within [`tolerance`] are refused rather
//! than mapped onto the open `Ue = 1` curve.

use crate::errors::{ConicError, ensure_finite};
use crate::float_types::{Real, tolerance};

/// Validates an axis pair: both finite, `a ≥ b ≥ 0`.
///
/// `a = b = 0` passes; callers needing a positive scale check that themselves.
pub(crate) fn validate_axes(a: Real, b: Real) -> Result<(), ConicError> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    if a < 0.0 || b < 0.0 {
        return Err(ConicError::invalid_shape(a, b, "semi-axes must be non-negative"));
    }
    if b > a {
        return Err(ConicError::invalid_shape(a, b, "semi-minor axis b must not exceed semi-major axis a"));
    }
    Ok(())
}

/// Validates a shape pair: both finite, `R0 > 0`, `Ue ≥ 0`.
pub(crate) fn validate_shape(r0: Real, ue: Real) -> Result<(), ConicError> {
    ensure_finite("r0", r0)?;
    if r0 <= 0.0 {
        return Err(ConicError::invalid_parameter("r0", r0, "scale radius must be positive"));
    }
    crate::trig::validate_shape_parameter(ue)?;
    Ok(())
}

/// `√(1 − q²)` computed as `√((1 − q)(1 + q))`.
#[inline]
fn complement(q: Real) -> Real {
    ((1.0 - q) * (1.0 + q)).max(0.0).sqrt()
}

/// Converts semi-axes `(a, b)` into `(R0, Ue)`.
///
/// # Errors
/// - [`ConicError::InvalidParameter`] if either axis is not finite.
/// - [`ConicError::InvalidShape`] if an axis is negative, `b > a`, or `b = 0`
///   (a flat segment has no positive scale radius).
/// - [`ConicError::InvalidShape`] if `b/a` is below the resolvable limit:
///   `Ue` rounds to 1, or [`to_axes`] would not recover `a` within
///   [`tolerance`] (relative). On success `Ue < 1` always holds.
///
/// # Example
/// ```
/// let (r0, ue) = uconic::shape::to_shape_parameter(5.0, 3.0).unwrap();
/// assert_eq!(r0, 3.0);
/// assert!((ue - 0.8).abs() < 1e-12);
/// ```
pub fn to_shape_parameter(a: Real, b: Real) -> Result<(Real, Real), ConicError> {
    validate_axes(a, b)?;
    if b == 0.0 {
        return Err(ConicError::invalid_shape(a, b, "flat ellipse (b = 0) has no positive scale radius"));
    }
    let ue = complement(b / a);
    if ue >= 1.0 || (b / complement(ue) - a).abs() > tolerance() * a {
        return Err(ConicError::invalid_shape(a, b, "axis ratio b/a below resolvable limit"));
    }
    Ok((b, ue))
}

/// Recovers semi-axes `(a, b)` from `(R0, Ue)`; the inverse of [`to_shape_parameter`].
///
/// # Errors
/// - [`ConicError::InvalidParameter`] for non-finite input, `R0 ≤ 0` or `Ue < 0`.
/// - [`ConicError::UndefinedAxes`] for `Ue ≥ 1`: the curve is open.
pub fn to_axes(r0: Real, ue: Real) -> Result<(Real, Real), ConicError> {
    validate_shape(r0, ue)?;
    if ue >= 1.0 {
        return Err(ConicError::UndefinedAxes { ue });
    }
    Ok((r0 / complement(ue), r0))
}

/// Centre-to-focus distance `√(a² − b²)` of a closed ellipse.
///
/// # Errors
/// Same axis checks as [`to_shape_parameter`], except `b = 0` is allowed.
pub fn focal_distance(a: Real, b: Real) -> Result<Real, ConicError> {
    validate_axes(a, b)?;
    Ok(a * complement(if a == 0.0 { 1.0 } else { b / a }))
}

/// Which conic family a shape parameter lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConicKind {
    Circle,
    Ellipse,
    Parabolic,
    Hyperbolic,
}

impl ConicKind {
    /// Classifies `Ue`, snapping values within [`tolerance`] of 0 or 1 onto the boundary cases.
    pub fn from_shape_parameter(ue: Real) -> Self {
        let tol = tolerance();
        if ue.abs() <= tol {
            ConicKind::Circle
        } else if (ue - 1.0).abs() <= tol {
            ConicKind::Parabolic
        } else if ue < 1.0 {
            ConicKind::Ellipse
        } else {
            ConicKind::Hyperbolic
        }
    }

    /// True for the families that close on themselves within one turn.
    pub const fn is_closed(self) -> bool {
        matches!(self, ConicKind::Circle | ConicKind::Ellipse)
    }
}

/// One conic in either of its two equivalent descriptions.
///
/// Neither form owns the other; [`to_axes`](ConicShape::to_axes) and
/// [`to_focal`](ConicShape::to_focal) recompute on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConicShape {
    /// Semi-major `a` and semi-minor `b`, `a ≥ b ≥ 0`.
    Axes { a: Real, b: Real },
    /// Scale radius `r0 > 0` and shape parameter `ue ≥ 0`.
    Focal { r0: Real, ue: Real },
}

impl ConicShape {
    /// Builds the axis form from two lengths in any order, swapping so that `a ≥ b`.
    ///
    /// # Errors
    /// [`ConicError::InvalidShape`] / [`ConicError::InvalidParameter`] for
    /// negative or non-finite lengths.
    pub fn from_unordered_axes(x: Real, y: Real) -> Result<Self, ConicError> {
        let (a, b) = if x >= y { (x, y) } else { (y, x) };
        validate_axes(a, b)?;
        Ok(ConicShape::Axes { a, b })
    }

    /// Builds the shape form after validating it.
    pub fn focal(r0: Real, ue: Real) -> Result<Self, ConicError> {
        validate_shape(r0, ue)?;
        Ok(ConicShape::Focal { r0, ue })
    }

    /// Returns `(a, b)`, converting from the shape form when needed.
    pub fn to_axes(&self) -> Result<(Real, Real), ConicError> {
        match *self {
            ConicShape::Axes { a, b } => {
                validate_axes(a, b)?;
                Ok((a, b))
            },
            ConicShape::Focal { r0, ue } => to_axes(r0, ue),
        }
    }

    /// Returns `(R0, Ue)`, converting from the axis form when needed.
    pub fn to_focal(&self) -> Result<(Real, Real), ConicError> {
        match *self {
            ConicShape::Axes { a, b } => to_shape_parameter(a, b),
            ConicShape::Focal { r0, ue } => {
                validate_shape(r0, ue)?;
                Ok((r0, ue))
            },
        }
    }

    /// Classifies the conic.
    pub fn kind(&self) -> Result<ConicKind, ConicError> {
        let (_, ue) = self.to_focal()?;
        Ok(ConicKind::from_shape_parameter(ue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn complement_handles_both_ends() {
        assert_eq!(complement(0.0), 1.0);
        assert_eq!(complement(1.0), 0.0);
        assert_relative_eq!(complement(0.6), 0.8, epsilon = 1e-15);
    }

    #[test]
    fn shape_parameter_is_strictly_decreasing_in_ratio() {
        let mut last = Real::INFINITY;
        for i in 1..=100 {
            let b = i as Real / 100.0;
            let (_, ue) = to_shape_parameter(1.0, b).unwrap();
            assert!(ue < last, "Ue must fall as b/a rises (b = {})", b);
            last = ue;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn flat_ellipse_is_rejected() {
        let err = to_shape_parameter(4.0, 0.0).unwrap_err();
        assert!(err.is_invalid_shape());
    }
}
