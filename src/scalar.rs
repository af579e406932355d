//! Element trait hierarchy.
//!
//! Three layers, each a blanket impl over `num-traits` bounds:
//!
//! | Trait | Adds | Required by |
//! |-------|------|-------------|
//! | [`Scalar`] | arithmetic, casts | every vector |
//! | [`FloatScalar`] | `sqrt`, exact zero test | norms, normalization |
//! | [`RandomScalar`] | uniform sampling | random construction |
//!
//! [`RandomScalar`] is the type-level fence around random construction:
//! only primitive integers and floats implement `SampleUniform`, so a
//! `Vector<Wrapper>` with some non-numeric element type fails to compile
//! instead of failing at the first random draw.

use std::fmt;

use num_traits::{Float, Num, NumCast};
use rand::distributions::uniform::SampleUniform;

/// Any element type a [`Vector`](crate::Vector) accepts.
///
/// Satisfied by the primitive signed/unsigned integers and floats.
pub trait Scalar: Copy + PartialOrd + fmt::Debug + fmt::Display + Num + NumCast {}

impl<T> Scalar for T where T: Copy + PartialOrd + fmt::Debug + fmt::Display + Num + NumCast {}

/// Element types with real square roots, required by the norm-based
/// operations (`f32`, `f64`).
pub trait FloatScalar: Scalar + Float {}

impl<T> FloatScalar for T where T: Scalar + Float {}

/// Element types that can be drawn uniformly from a closed range.
pub trait RandomScalar: Scalar + SampleUniform {}

impl<T> RandomScalar for T where T: Scalar + SampleUniform {}
