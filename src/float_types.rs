//! Scalar precision, angle constants and the write-once tolerance and sample-count settings.

#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Comparison slack for conic geometry, relative to the scale of what is compared.
///
/// It decides when `Ue` counts as a circle or as the parabolic boundary
/// ([`ConicKind`](crate::shape::ConicKind)), when a sampled curve's ends meet
/// ([`Curve::is_closed`](crate::curve::Curve::is_closed)), and how thin an
/// ellipse may get before its axis pair stops surviving the `(R0, Ue)` round trip.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Sample count used by the full-turn samplers that take no explicit range.
static SAMPLES_CELL: OnceLock<usize> = OnceLock::new();

/// Fewest samples a full-turn sweep may use (start and end of the turn).
pub const MIN_SAMPLES: usize = 2;

#[inline]
fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// Returns the conic comparison tolerance.
///
/// Fixed on first use: a prior [`set_tolerance`] wins, then the build-time
/// `UCONIC_TOLERANCE` (parsed as the active `Real`), then `1e-9` for f64 and
/// `1e-4` for f32. Never below `Real::EPSILON`.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("UCONIC_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Fixes the tolerance before any conversion or sampling has read it; ignored afterwards.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Returns the number of samples a full-turn sweep uses when the caller
/// gives no [`AngleRange`](crate::sampling::AngleRange).
///
/// Resolution order mirrors [`tolerance`]: runtime [`set_default_samples`],
/// then build-time `UCONIC_SAMPLES`, then 1000.
pub fn default_samples() -> usize {
    *SAMPLES_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("UCONIC_SAMPLES") {
            if let Ok(value) = usize::from_str(environment_variable) {
                return value.max(MIN_SAMPLES);
            }
        }
        1000
    })
}

/// Set the default sample count once (subsequent calls are ignored).
pub fn set_default_samples(count: usize) {
    let _ = SAMPLES_CELL.set(count.max(MIN_SAMPLES));
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Degrees in one full turn.
pub const FULL_TURN_DEGREES: Real = 360.0;
