//! The owned numeric vector type.
//!
//! [`Vector<T>`] is a fixed-length, heap-allocated sequence of scalar
//! elements with value semantics: `Clone` deep-copies the buffer, every
//! instance exclusively owns its storage, and drop releases it.
//!
//! Length-checked operations (`add`, `sub`, `component_mul`, `dot`,
//! `dot_conj`) return fresh vectors or a typed error and never touch
//! their operands on failure. In-place normalization validates before
//! mutating, so a failed call leaves the vector intact.

use std::fmt;
use std::io::BufRead;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use num_complex::Complex64;
use num_traits::{ToPrimitive, Zero};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{Result, VectorError};
use crate::scalar::{FloatScalar, RandomScalar, Scalar};
use crate::TOLERANCE;

/// Widen a scalar for tolerance comparisons. Every primitive element
/// type converts; a failed conversion yields NaN, which compares unequal.
#[inline]
fn widen<T: Scalar>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Tolerance comparison with representation slack, so a difference
/// written as exactly `1e-5` still matches after literal rounding.
#[inline]
fn within_tolerance(a: f64, b: f64) -> bool {
    let diff = (a - b).abs();
    diff <= TOLERANCE + f64::EPSILON * a.abs().max(b.abs())
}

/// A contiguous, owned numeric vector.
///
/// # Example
///
/// ```rust
/// use orthovec::Vector;
///
/// let a = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// let b = Vector::from_slice(&[4.0_f64, 5.0, 6.0]);
///
/// let sum = a.add(&b)?;
/// assert_eq!(sum.as_slice(), &[5.0, 7.0, 9.0]);
///
/// let d = a.dot(&b)?;
/// assert!((d - 32.0).abs() < 1e-12);
/// # Ok::<(), orthovec::VectorError>(())
/// ```
#[derive(Clone, Default)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    /// An empty vector: length 0, no buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Adopt an existing buffer without copying.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when the vector holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the vector, returning the underlying buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn ensure_same_len(&self, other_len: usize) -> Result<()> {
        if self.data.len() == other_len {
            Ok(())
        } else {
            Err(VectorError::DimensionMismatch {
                left: self.data.len(),
                right: other_len,
            })
        }
    }
}

// ============================================================
// Construction
// ============================================================

impl<T: Scalar> Vector<T> {
    /// `len` copies of `value`.
    #[must_use]
    pub fn fill(len: usize, value: T) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::fill(len, T::zero())
    }

    /// Copy the elements of a slice.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }
}

impl<T: RandomScalar> Vector<T> {
    /// `len` elements drawn independently and uniformly from
    /// `[low, high]`, seeded from process-wide entropy.
    ///
    /// The range is closed: inclusive at both ends for integer element
    /// types, continuous uniform over `[low, high]` for float types.
    /// Draws are independent across calls; there is no reproducibility
    /// contract. Use [`Vector::random_with`] and a seeded generator when
    /// determinism is needed.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use orthovec::Vector;
    ///
    /// let v: Vector<i32> = Vector::random(8, -3, 3);
    /// assert_eq!(v.len(), 8);
    /// assert!(v.iter().all(|&x| (-3..=3).contains(&x)));
    /// ```
    #[must_use]
    pub fn random(len: usize, low: T, high: T) -> Self {
        Self::random_with(len, low, high, &mut rand::thread_rng())
    }

    /// Same draw as [`Vector::random`], from an injected generator.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(len: usize, low: T, high: T, rng: &mut R) -> Self {
        let dist = Uniform::new_inclusive(low, high);
        Self {
            data: (0..len).map(|_| dist.sample(rng)).collect(),
        }
    }
}

impl<T: Clone> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Scalar> From<&[T]> for Vector<T> {
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

// ============================================================
// Checked element access
// ============================================================

impl<T: Scalar> Vector<T> {
    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`] when `index >= len`. No silent
    /// clamping.
    ///
    /// ```rust
    /// use orthovec::{Vector, VectorError};
    ///
    /// let v = Vector::from_slice(&[1.0_f64, 2.0]);
    /// assert_eq!(v.get(1).unwrap(), 2.0);
    /// assert!(matches!(v.get(2), Err(VectorError::IndexOutOfRange { .. })));
    /// ```
    pub fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Overwrite the element at `index`.
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`] when `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VectorError::IndexOutOfRange { index, len }),
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// Unchecked-feel convenience indexing.
    ///
    /// Panics on an out-of-range index; use [`Vector::get`] for the
    /// error-returning form.
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

// ============================================================
// Arithmetic
// ============================================================

impl<T: Scalar> Vector<T> {
    /// Elementwise sum, as a new vector.
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionMismatch`] unless lengths agree.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_len(other.len())?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a + b)
                .collect(),
        })
    }

    /// Elementwise difference, as a new vector.
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionMismatch`] unless lengths agree.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_len(other.len())?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a - b)
                .collect(),
        })
    }

    /// Elementwise product, as a new vector.
    ///
    /// Distinct from [`Vector::dot`] (which sums the products) and from
    /// [`Vector::scale`] (scalar multiply).
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionMismatch`] unless lengths agree.
    pub fn component_mul(&self, other: &Self) -> Result<Self> {
        self.ensure_same_len(other.len())?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a * b)
                .collect(),
        })
    }

    /// Every element multiplied by `scalar`, as a new vector.
    #[must_use]
    pub fn scale(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * scalar).collect(),
        }
    }

    /// Every element divided by `scalar`, as a new vector.
    ///
    /// # Errors
    ///
    /// [`VectorError::DivideByZero`] when `scalar` is the zero value of
    /// the element type.
    pub fn div_scalar(&self, scalar: T) -> Result<Self> {
        if scalar == T::zero() {
            return Err(VectorError::DivideByZero);
        }
        Ok(Self {
            data: self.data.iter().map(|&x| x / scalar).collect(),
        })
    }

    /// Dot product: `Σ self[i] * other[i]`.
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionMismatch`] unless lengths agree.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.ensure_same_len(other.len())?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Inner product against a complex vector with conjugation:
    /// `Σ self[i] * conj(other[i])`, as a complex double.
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionMismatch`] unless lengths agree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use num_complex::Complex64;
    /// use orthovec::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0_f64, 2.0]);
    /// let c = Vector::from_vec(vec![
    ///     Complex64::new(1.0, 1.0),
    ///     Complex64::new(0.0, -2.0),
    /// ]);
    /// assert_eq!(a.dot_conj(&c)?, Complex64::new(1.0, 3.0));
    /// # Ok::<(), orthovec::VectorError>(())
    /// ```
    pub fn dot_conj(&self, other: &Vector<Complex64>) -> Result<Complex64> {
        self.ensure_same_len(other.len())?;
        let mut acc = Complex64::zero();
        for (&x, c) in self.data.iter().zip(&other.data) {
            acc = acc + c.conj() * widen(x);
        }
        Ok(acc)
    }

    /// Sum of squared elements.
    #[must_use]
    pub fn norm_squared(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x * x)
    }
}

// ============================================================
// Norm-based operations
// ============================================================

impl<T: FloatScalar> Vector<T> {
    /// Elementwise non-negative square root, as a new vector.
    ///
    /// Negative inputs follow IEEE `sqrt` and produce NaN; callers that
    /// need a domain check must apply one before calling.
    ///
    /// ```rust
    /// use orthovec::Vector;
    ///
    /// let v = Vector::from_slice(&[4.0_f64, 9.0]);
    /// assert_eq!(v.sqrt_elements().as_slice(), &[2.0, 3.0]);
    ///
    /// let w = Vector::from_slice(&[-1.0_f64]);
    /// assert!(w.sqrt_elements()[0].is_nan());
    /// ```
    #[must_use]
    pub fn sqrt_elements(&self) -> Self {
        Self {
            data: self.data.iter().map(|x| x.sqrt()).collect(),
        }
    }

    /// Euclidean norm: `sqrt(Σ self[i]²)`.
    #[must_use]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Scale in place to unit Euclidean length.
    ///
    /// The squared norm is validated first, so on failure no element has
    /// been touched.
    ///
    /// # Errors
    ///
    /// [`VectorError::ZeroVector`] when the squared norm is zero.
    ///
    /// ```rust
    /// use orthovec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// v.normalize()?;
    /// assert_eq!(v, Vector::from_slice(&[0.6, 0.8]));
    /// # Ok::<(), orthovec::VectorError>(())
    /// ```
    pub fn normalize(&mut self) -> Result<()> {
        let length_squared = self.norm_squared();
        if length_squared == T::zero() {
            return Err(VectorError::ZeroVector);
        }
        let length = length_squared.sqrt();
        for x in &mut self.data {
            *x = *x / length;
        }
        Ok(())
    }

    /// A unit-length copy of this vector.
    ///
    /// # Errors
    ///
    /// [`VectorError::ZeroVector`] when the squared norm is zero.
    pub fn normalized(&self) -> Result<Self> {
        let mut out = self.clone();
        out.normalize()?;
        Ok(out)
    }
}

// ============================================================
// Text input
// ============================================================

/// Incremental whitespace-separated token reader over a `BufRead` source.
struct TokenReader<R> {
    input: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            pos: 0,
        }
    }

    fn next_token(&mut self, what: &'static str) -> Result<&str> {
        loop {
            // ASCII whitespace bytes are always char boundaries, so the
            // slice below stays valid for non-ASCII token content.
            let bytes = self.line.as_bytes();
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.line.len() {
                let start = self.pos;
                let bytes = self.line.as_bytes();
                while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
                    self.pos += 1;
                }
                return Ok(&self.line[start..self.pos]);
            }
            self.line.clear();
            self.pos = 0;
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(VectorError::UnexpectedEof(what));
            }
        }
    }

    fn parse_next<V: FromStr>(&mut self, what: &'static str) -> Result<V> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| VectorError::Parse {
            token: token.to_string(),
            what,
        })
    }
}

impl<T: Scalar> Vector<T> {
    /// Discard the current contents and re-read the vector from a
    /// token-oriented text source: one length token, then that many
    /// element tokens, in index order.
    ///
    /// Every token is parsed before the buffer is replaced, so on any
    /// failure the vector keeps its previous contents. There is no
    /// validation beyond what the scalar parser provides.
    ///
    /// # Errors
    ///
    /// - [`VectorError::Parse`] for a malformed token
    /// - [`VectorError::UnexpectedEof`] when the source ends early
    /// - [`VectorError::Io`] when the source fails
    ///
    /// # Example
    ///
    /// ```rust
    /// use orthovec::Vector;
    ///
    /// let mut v: Vector<f64> = Vector::new();
    /// v.populate_from("3 1.5 2.5 3.5".as_bytes())?;
    /// assert_eq!(v.as_slice(), &[1.5, 2.5, 3.5]);
    /// # Ok::<(), orthovec::VectorError>(())
    /// ```
    pub fn populate_from<R: BufRead>(&mut self, input: R) -> Result<()>
    where
        T: FromStr,
    {
        let mut tokens = TokenReader::new(input);
        let len: usize = tokens.parse_next("vector length")?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len {
            data.push(tokens.parse_next::<T>("vector element")?);
        }
        self.data = data;
        Ok(())
    }
}

// ============================================================
// Equality, formatting
// ============================================================

/// Tolerance equality: equal iff lengths match exactly and every element
/// pair differs by at most [`TOLERANCE`](crate::TOLERANCE) in absolute
/// value (compared in `f64`).
///
/// For integer element types the tolerance is below one unit, so this
/// degenerates to exact equality.
impl<T: Scalar> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| within_tolerance(widen(a), widen(b)))
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:?})", self.data)
    }
}

/// Elements in index order, space-separated, no trailing separator.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

// ============================================================
// Tests
// ============================================================
