//! Randomized orthogonal-complement construction.
//!
//! Produces a unit vector orthogonal to a given direction by drawing a
//! random vector and subtracting its projection (one Gram-Schmidt step):
//!
//! ```text
//! unit  = a / |a|
//! b     = uniform draw over [-1, 1]^n
//! orth  = b - (b . unit) unit
//! out   = orth / |orth|
//! ```
//!
//! The draw is rejected with [`VectorError::ZeroVector`] in the
//! degenerate case where `b` lands parallel to `a`. For length-1 vectors
//! that case is certain, since the whole line is spanned by `a`.

use num_traits::One;
use rand::Rng;

use crate::error::Result;
use crate::scalar::{FloatScalar, RandomScalar};
use crate::vector::Vector;

#[cfg(doc)]
use crate::error::VectorError;

/// A random unit vector orthogonal to `a`, seeded from process-wide
/// entropy.
///
/// Draws are independent across calls; use
/// [`random_orthogonal_with`] and a seeded generator when determinism is
/// needed.
///
/// # Errors
///
/// [`VectorError::ZeroVector`] when `a` is the zero vector, or when the
/// random draw is parallel to `a` (certain for length-1 vectors).
///
/// # Example
///
/// ```rust
/// use orthovec::{random_orthogonal, Vector};
///
/// let a = Vector::from_slice(&[1.0_f64, 0.0, 0.0]);
/// let o = random_orthogonal(&a)?;
///
/// assert!((o.norm() - 1.0).abs() < 1e-5);
/// assert!(o.dot(&a)?.abs() < 1e-5);
/// # Ok::<(), orthovec::VectorError>(())
/// ```
pub fn random_orthogonal<T>(a: &Vector<T>) -> Result<Vector<T>>
where
    T: FloatScalar + RandomScalar,
{
    random_orthogonal_with(a, &mut rand::thread_rng())
}

/// Same construction as [`random_orthogonal`], drawing from an injected
/// generator.
///
/// # Errors
///
/// [`VectorError::ZeroVector`] when `a` is the zero vector, or when the
/// random draw is parallel to `a`.
pub fn random_orthogonal_with<T, R>(a: &Vector<T>, rng: &mut R) -> Result<Vector<T>>
where
    T: FloatScalar + RandomScalar,
    R: Rng + ?Sized,
{
    let unit = a.normalized()?;
    let b = Vector::random_with(a.len(), -T::one(), T::one(), rng);

    // Scalar projection coefficient, then subtract the projection.
    let coeff = b.dot(&unit)?;
    let orth = b.sub(&unit.scale(coeff))?;

    orth.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn result_is_unit_and_orthogonal_across_trials() {
        let a = Vector::from_slice(&[1.0_f64, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            let o = random_orthogonal_with(&a, &mut rng).unwrap();
            assert!((o.norm() - 1.0).abs() < 1e-5);
            assert!(o.dot(&a).unwrap().abs() < 1e-5);
        }
    }

    #[test]
    fn works_against_arbitrary_directions() {
        let a = Vector::from_slice(&[3.0_f64, -4.0, 12.0, 0.5]);
        let unit = a.normalized().unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..100 {
            let o = random_orthogonal_with(&a, &mut rng).unwrap();
            assert!((o.norm() - 1.0).abs() < 1e-5);
            assert!(o.dot(&unit).unwrap().abs() < 1e-5);
        }
    }

    #[test]
    fn zero_input_is_rejected() {
        let zero: Vector<f64> = Vector::zeros(3);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            random_orthogonal_with(&zero, &mut rng),
            Err(VectorError::ZeroVector)
        ));
    }

    #[test]
    fn one_dimensional_input_always_degenerates() {
        // In one dimension every draw is parallel to `a`, so the
        // projection removes everything and normalization fails.
        let a = Vector::from_slice(&[2.5_f64]);
        let mut rng = StdRng::seed_from_u64(4);
        assert!(matches!(
            random_orthogonal_with(&a, &mut rng),
            Err(VectorError::ZeroVector)
        ));
    }
}
