//! Generic numeric vectors with randomized orthogonal-complement
//! construction.
//!
//! `orthovec` provides [`Vector<T>`], an owned, fixed-length sequence of
//! numeric elements with value semantics, and [`random_orthogonal`], a
//! routine that produces a random unit vector perpendicular to a given
//! direction via projection and subtraction.
//!
//! # Operations
//!
//! | Operation | Contract |
//! |-----------|----------|
//! | [`Vector::fill`], [`Vector::zeros`] | allocate `len` copies of a value |
//! | [`Vector::random`] | independent uniform draws over `[low, high]` |
//! | [`Vector::get`], [`Vector::set`] | bounds-checked, no silent clamping |
//! | [`Vector::add`], [`Vector::sub`], [`Vector::component_mul`] | elementwise, lengths must agree |
//! | [`Vector::scale`], [`Vector::div_scalar`] | scalar multiply / checked divide |
//! | [`Vector::dot`], [`Vector::dot_conj`] | inner products (real, complex-conjugated) |
//! | [`Vector::normalize`] | in-place unit scaling, zero vectors rejected |
//! | [`random_orthogonal`] | random unit vector with `v . a = 0` |
//!
//! Every length or domain violation surfaces as a [`VectorError`]; no
//! operation leaves its operands partially mutated on failure.
//!
//! # Element types
//!
//! Operations are generic over a small trait ladder (see [`scalar`]):
//! [`Scalar`] for arithmetic, [`FloatScalar`] for norms, and
//! [`RandomScalar`] for uniform sampling. Random construction over an
//! unsupported element type is rejected at compile time by the
//! [`RandomScalar`] bound rather than at run time.
//!
//! # Randomness
//!
//! Default entry points draw from process-wide entropy and make no
//! reproducibility promise. Every randomized operation has a `_with`
//! variant taking `&mut impl Rng` for seeded, deterministic use.
//!
//! # Example
//!
//! ```rust
//! use orthovec::{random_orthogonal, Vector};
//!
//! let a = Vector::from_slice(&[1.0_f64, 0.0, 0.0]);
//!
//! // A random unit vector perpendicular to `a`.
//! let o = random_orthogonal(&a)?;
//! assert!((o.norm() - 1.0).abs() < 1e-5);
//! assert!(o.dot(&a)?.abs() < 1e-5);
//! # Ok::<(), orthovec::VectorError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod orthogonal;
pub mod scalar;
mod vector;

pub use error::{Result, VectorError};
pub use orthogonal::{random_orthogonal, random_orthogonal_with};
pub use scalar::{FloatScalar, RandomScalar, Scalar};
pub use vector::Vector;

/// Absolute tolerance used by vector equality.
///
/// Two elements are considered equal when they differ by at most this
/// much. Loose enough to absorb accumulated rounding from chains of
/// elementwise operations, tight enough to separate genuinely distinct
/// coordinates.
pub const TOLERANCE: f64 = 1e-5;
