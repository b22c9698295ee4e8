//! Sampled points along a **generalized conic family** driven by one continuous
//! shape parameter `Ue`: circle, closed ellipse, the open parabolic boundary
//! and hyperbola-like branches all come out of the same cosine/sine pair.
//!
//! # Components
//! - [`trig`]: the generalized pair `cosU(α, Ue)`, `sinU(α, Ue)`
//! - [`shape`]: conversion between semi-axes `(a, b)` and `(R0, Ue)`
//! - [`sampling`]: angle sweeps and the curve samplers built on the two above
//! - [`rotation`]: rigid 2D rotation of point sequences
//! - [`curve`]: the [`Curve`] value every sampler returns
//!
//! Everything is a pure function over immutable input; the only global state
//! is the write-once configuration in [`float_types`].
//!
//! # Example
//! ```
//! use uconic::{sampling, shape};
//!
//! let (r0, ue) = shape::to_shape_parameter(5.0, 3.0).unwrap();
//! let range = sampling::AngleRange::full_turn(361);
//! let (xs, ys) = sampling::sample_by_shape_parameter(r0, ue, &range).unwrap().into_xy();
//! assert!(xs.iter().all(|x| x.abs() <= 5.0 + 1e-9));
//! assert!(ys.iter().all(|y| y.abs() <= 3.0 + 1e-9));
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for the elementwise maps over angles and points

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod curve;
pub mod errors;
pub mod float_types;
pub mod rotation;
pub mod sampling;
pub mod shape;
pub mod trig;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use curve::Curve;
pub use errors::ConicError;
pub use sampling::AngleRange;
pub use shape::{ConicKind, ConicShape};

/// Result type for conic operations.
pub type Result<T> = std::result::Result<T, ConicError>;
