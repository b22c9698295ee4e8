//! Precondition errors

use crate::float_types::Real;

/// All the ways a conic computation can refuse its input.
///
/// Every operation in this crate is a deterministic closed-form evaluation,
/// so an error here is always a caller-side precondition violation: retrying
/// the same call fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConicError {
    /// (InvalidShape) The axis pair does not describe a conic: a negative axis,
    /// `b > a`, or a collapsed axis where a positive one is required.
    #[error("(InvalidShape) a = {a}, b = {b}: {reason}")]
    InvalidShape { a: Real, b: Real, reason: &'static str },

    /// (InvalidParameter) A numeric argument is out of its domain or not finite.
    #[error("(InvalidParameter) {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },

    /// (UndefinedAxes) Axis recovery requested for an open curve (Ue ≥ 1),
    /// which has no finite bounding ellipse.
    #[error("(UndefinedAxes) Ue = {ue} describes an open curve with no finite semi-axes")]
    UndefinedAxes { ue: Real },

    /// (DegenerateSample) The sweep collapses to one angle but several samples were asked for.
    #[error("(DegenerateSample) range {start}°..{end}° is a single angle but {count} samples were requested")]
    DegenerateSample { start: Real, end: Real, count: usize },
}

impl ConicError {
    pub(crate) const fn invalid_shape(a: Real, b: Real, reason: &'static str) -> Self {
        ConicError::InvalidShape { a, b, reason }
    }

    pub(crate) const fn invalid_parameter(
        name: &'static str,
        value: Real,
        reason: &'static str,
    ) -> Self {
        ConicError::InvalidParameter { name, value, reason }
    }

    /// Check if this is an [`InvalidShape`](ConicError::InvalidShape) error.
    pub const fn is_invalid_shape(&self) -> bool {
        matches!(self, ConicError::InvalidShape { .. })
    }

    /// Check if this is an [`InvalidParameter`](ConicError::InvalidParameter) error.
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self, ConicError::InvalidParameter { .. })
    }

    /// Check if this is an [`UndefinedAxes`](ConicError::UndefinedAxes) error.
    pub const fn is_undefined_axes(&self) -> bool {
        matches!(self, ConicError::UndefinedAxes { .. })
    }

    /// Check if this is a [`DegenerateSample`](ConicError::DegenerateSample) error.
    pub const fn is_degenerate_sample(&self) -> bool {
        matches!(self, ConicError::DegenerateSample { .. })
    }
}

/// Rejects NaN and infinities with [`ConicError::InvalidParameter`].
pub(crate) fn ensure_finite(name: &'static str, value: Real) -> Result<Real, ConicError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConicError::invalid_parameter(name, value, "must be finite"))
    }
}
