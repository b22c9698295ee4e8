//! **Mathematical Foundation: Generalized Conic Trigonometry**
//!
//! A cosine/sine pair parameterized by one shape scalar `Ue ≥ 0` that spans
//! every conic type without switching equations:
//!
//! ```text
//! ρ(α, Ue) = 1 / √(1 − Ue²·cos²α)
//! cosU(α, Ue) = ρ·cos α
//! sinU(α, Ue) = ρ·sin α
//! ```
//!
//! `(cosU, sinU)` is the point at polar angle `α` on the centred conic
//! `(1 − Ue²)·x² + y² = 1`, whose closest approach to the origin is exactly 1:
//!
//! | Ue          | curve traced                                              |
//! |-------------|-----------------------------------------------------------|
//! | `0`         | unit circle, `cosU ≡ cos`, `sinU ≡ sin` bit for bit        |
//! | `(0, 1)`    | ellipse with semi-axes `1/√(1−Ue²)` along x and `1` along y, 2π-periodic |
//! | `1`         | the parallel lines `y = ±1`, the open limit of an ellipse stretched to infinity |
//! | `> 1`       | hyperbola `y² − (Ue²−1)·x² = 1`, two branches crossing the y-axis |
//!
//! For `Ue ≥ 1` the curve never reaches directions with `Ue²·cos²α ≥ 1`
//! (the asymptote cone). There the pair evaluates to `NaN`, which sampled
//! curves use as a branch separator (see [`Curve::branches`](crate::curve::Curve::branches)).
//! Everywhere else both functions are continuous in `α` and in `Ue`.

use crate::errors::{ConicError, ensure_finite};
use crate::float_types::Real;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Radial scale `ρ(α, Ue)`, or `None` when the direction lies inside the
/// asymptote cone of an open curve.
#[inline]
fn radial_scale(cos_alpha: Real, ue: Real) -> Option<Real> {
    let denom = 1.0 - ue * ue * cos_alpha * cos_alpha;
    if denom > 0.0 {
        Some(1.0 / denom.sqrt())
    } else {
        None
    }
}

/// Evaluates `(sinU, cosU)` together, sharing one `sin_cos` and one square root.
///
/// Returns `(NaN, NaN)` where the curve does not reach direction `alpha`.
#[inline]
pub fn sin_cos_u(alpha: Real, ue: Real) -> (Real, Real) {
    let (sin_a, cos_a) = alpha.sin_cos();
    match radial_scale(cos_a, ue) {
        Some(rho) => (rho * sin_a, rho * cos_a),
        None => (Real::NAN, Real::NAN),
    }
}

/// Generalized cosine. `cos_u(alpha, 0.0) == alpha.cos()`.
#[inline]
pub fn cos_u(alpha: Real, ue: Real) -> Real {
    sin_cos_u(alpha, ue).1
}

/// Generalized sine. `sin_u(alpha, 0.0) == alpha.sin()`.
#[inline]
pub fn sin_u(alpha: Real, ue: Real) -> Real {
    sin_cos_u(alpha, ue).0
}

/// Checks a shape parameter before it is broadcast over an angle sequence.
pub(crate) fn validate_shape_parameter(ue: Real) -> Result<Real, ConicError> {
    ensure_finite("ue", ue)?;
    if ue < 0.0 {
        return Err(ConicError::invalid_parameter("ue", ue, "must be non-negative"));
    }
    Ok(ue)
}

/// Maps `f` over `alphas`, keeping order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn map_angles<T, F>(alphas: &[Real], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(Real) -> T + Sync + Send,
{
    alphas.iter().map(|&alpha| f(alpha)).collect()
}

/// Maps `f` over `alphas`, keeping order.
#[cfg(feature = "parallel")]
pub(crate) fn map_angles<T, F>(alphas: &[Real], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(Real) -> T + Sync + Send,
{
    alphas.par_iter().map(|&alpha| f(alpha)).collect()
}

/// Elementwise [`cos_u`] over radian angles, broadcasting one `ue`.
///
/// # Errors
/// [`ConicError::InvalidParameter`] if `ue` is negative or not finite.
pub fn cos_u_all(alphas: &[Real], ue: Real) -> Result<Vec<Real>, ConicError> {
    let ue = validate_shape_parameter(ue)?;
    Ok(map_angles(alphas, |alpha| cos_u(alpha, ue)))
}

/// Elementwise [`sin_u`] over radian angles, broadcasting one `ue`.
///
/// # Errors
/// [`ConicError::InvalidParameter`] if `ue` is negative or not finite.
pub fn sin_u_all(alphas: &[Real], ue: Real) -> Result<Vec<Real>, ConicError> {
    let ue = validate_shape_parameter(ue)?;
    Ok(map_angles(alphas, |alpha| sin_u(alpha, ue)))
}
