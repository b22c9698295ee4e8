//! Curve samplers: sweep an angle range and evaluate a conic at each angle.

use crate::curve::Curve;
use crate::errors::{ConicError, ensure_finite};
use crate::float_types::{FULL_TURN_DEGREES, Real, default_samples};
use crate::shape::{to_shape_parameter, validate_axes, validate_shape};
use crate::trig::{map_angles, sin_cos_u};
use nalgebra::Point2;

/// A linear sweep of `sample_count` angles from `start_degrees` to
/// `end_degrees`, both ends included.
///
/// The sweep may run backwards (`start > end`) or cover several turns
/// (e.g. `-1800°..1800°`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    start_degrees: Real,
    end_degrees: Real,
    sample_count: usize,
}

impl AngleRange {
    /// # Errors
    /// - [`ConicError::InvalidParameter`] if either end is not finite.
    /// - [`ConicError::DegenerateSample`] if `start == end` and more than one sample is requested.
    ///
    /// One sample yields just `start`; zero samples yields an empty sweep.
    pub fn new(start_degrees: Real, end_degrees: Real, sample_count: usize) -> Result<Self, ConicError> {
        ensure_finite("start_degrees", start_degrees)?;
        ensure_finite("end_degrees", end_degrees)?;
        if start_degrees == end_degrees && sample_count > 1 {
            return Err(ConicError::DegenerateSample {
                start: start_degrees,
                end: end_degrees,
                count: sample_count,
            });
        }
        Ok(AngleRange { start_degrees, end_degrees, sample_count })
    }

    /// `0°..360°` with `sample_count` samples; the first and last sample coincide on the curve.
    pub fn full_turn(sample_count: usize) -> Self {
        AngleRange { start_degrees: 0.0, end_degrees: FULL_TURN_DEGREES, sample_count }
    }

    /// Symmetric sweep over `turns` full turns each way: `-360·turns .. 360·turns`.
    ///
    /// # Errors
    /// [`ConicError::DegenerateSample`] for `turns == 0` with more than one sample.
    pub fn turns(turns: u32, sample_count: usize) -> Result<Self, ConicError> {
        let half_span = FULL_TURN_DEGREES * turns as Real;
        AngleRange::new(-half_span, half_span, sample_count)
    }

    pub const fn start_degrees(&self) -> Real {
        self.start_degrees
    }

    pub const fn end_degrees(&self) -> Real {
        self.end_degrees
    }

    pub const fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Signed sweep `end − start`.
    pub fn span_degrees(&self) -> Real {
        self.end_degrees - self.start_degrees
    }

    /// The same sweep run the other way.
    pub const fn reversed(&self) -> Self {
        AngleRange {
            start_degrees: self.end_degrees,
            end_degrees: self.start_degrees,
            sample_count: self.sample_count,
        }
    }

    /// Sample angles in degrees, in sweep order.
    ///
    /// Sample `i` sits at fraction `i / (n − 1)` of the sweep and the last
    /// sample is exactly `end_degrees`.
    pub fn degrees(&self) -> Vec<Real> {
        let n = self.sample_count;
        match n {
            0 => Vec::new(),
            1 => vec![self.start_degrees],
            _ => {
                let last = n - 1;
                let step = self.span_degrees() / last as Real;
                (0..n)
                    .map(|i| {
                        if i == last {
                            self.end_degrees
                        } else {
                            self.start_degrees + step * i as Real
                        }
                    })
                    .collect()
            },
        }
    }

    /// Sample angles in radians, in sweep order.
    pub fn radians(&self) -> Vec<Real> {
        self.degrees().into_iter().map(Real::to_radians).collect()
    }
}

/// Samples the generalized conic `(R0·cosU(α, Ue), R0·sinU(α, Ue))` over `range`.
///
/// Order follows the sweep. For open curves (`Ue ≥ 1`) the directions the
/// curve never reaches come back as `NaN` points; a multi-turn sweep visits
/// each branch once per turn.
///
/// # Errors
/// [`ConicError::InvalidParameter`] for non-finite input, `R0 ≤ 0` or `Ue < 0`.
pub fn sample_by_shape_parameter(r0: Real, ue: Real, range: &AngleRange) -> Result<Curve, ConicError> {
    validate_shape(r0, ue)?;
    log::trace!(
        "sampling generalized conic r0={} ue={} over {}°..{}° ({} samples)",
        r0,
        ue,
        range.start_degrees,
        range.end_degrees,
        range.sample_count
    );

    let points = map_angles(&range.radians(), |alpha| {
        let (s, c) = sin_cos_u(alpha, ue);
        Point2::new(r0 * c, r0 * s)
    });

    if log::log_enabled!(log::Level::Debug) {
        let unreached = points.iter().filter(|p| p.x.is_nan()).count();
        if unreached > 0 {
            log::debug!(
                "{} of {} sampled directions lie outside the open curve (ue={})",
                unreached,
                points.len(),
                ue
            );
        }
    }
    Ok(Curve::new(points))
}

/// Samples one full turn of the generalized conic with semi-axes `(a, b)` and
/// rotates the whole curve by `rotation_degrees` about the origin.
///
/// The rotation places the closed curve at an angular offset, e.g. one petal
/// of a repeated arrangement; it is applied after sampling.
///
/// # Errors
/// Whatever [`to_shape_parameter`] rejects.
pub fn sample_by_axes(a: Real, b: Real, rotation_degrees: Real) -> Result<Curve, ConicError> {
    sample_by_axes_over(a, b, rotation_degrees, &AngleRange::full_turn(default_samples()))
}

/// [`sample_by_axes`] over an explicit range.
pub fn sample_by_axes_over(
    a: Real,
    b: Real,
    rotation_degrees: Real,
    range: &AngleRange,
) -> Result<Curve, ConicError> {
    ensure_finite("rotation_degrees", rotation_degrees)?;
    let (r0, ue) = to_shape_parameter(a, b)?;
    sample_by_shape_parameter(r0, ue, range)?.rotate(rotation_degrees)
}

/// Samples one full turn of the plain parametric ellipse `x = a·cos θ, y = b·sin θ`
/// and rotates it by `rotation_degrees`. Baseline for comparison with [`sample_by_axes`].
///
/// # Errors
/// [`ConicError::InvalidShape`] / [`ConicError::InvalidParameter`] for a
/// negative, non-finite or mis-ordered axis pair. `b = 0` is allowed.
pub fn sample_standard_ellipse(a: Real, b: Real, rotation_degrees: Real) -> Result<Curve, ConicError> {
    sample_standard_ellipse_over(a, b, rotation_degrees, &AngleRange::full_turn(default_samples()))
}

/// [`sample_standard_ellipse`] over an explicit range.
pub fn sample_standard_ellipse_over(
    a: Real,
    b: Real,
    rotation_degrees: Real,
    range: &AngleRange,
) -> Result<Curve, ConicError> {
    validate_axes(a, b)?;
    ensure_finite("rotation_degrees", rotation_degrees)?;
    log::trace!(
        "sampling standard ellipse a={} b={} rotated {}° ({} samples)",
        a,
        b,
        rotation_degrees,
        range.sample_count
    );

    let points = map_angles(&range.radians(), |theta| {
        let (s, c) = theta.sin_cos();
        Point2::new(a * c, b * s)
    });
    Curve::new(points).rotate(rotation_degrees)
}
