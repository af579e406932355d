//! Numerical and input edge cases.
//!
//! Targets the places where floating-point or a hostile input stream can
//! bend the contracts: underflowing norms, NaN propagation, truncated or
//! malformed text input.

use num_complex::Complex64;
use orthovec::{random_orthogonal, Vector, VectorError};

// =============================================================================
// Underflow and NaN
// =============================================================================

#[test]
fn squared_norm_underflow_reads_as_zero_vector() {
    // Elements near 1e-200 square to below the subnormal floor, so the
    // squared norm rounds to exactly zero and normalization refuses.
    let mut v = Vector::from_slice(&[1e-200_f64, -1e-200]);
    assert!(matches!(v.normalize(), Err(VectorError::ZeroVector)));
    assert_eq!(v.get(0).unwrap(), 1e-200);
}

#[test]
fn nan_elements_never_compare_equal() {
    let v = Vector::from_slice(&[f64::NAN]);
    assert_ne!(v, v.clone());
}

#[test]
fn sqrt_of_negative_elements_is_nan_not_a_panic() {
    let v = Vector::from_slice(&[-4.0_f64, 16.0]);
    let s = v.sqrt_elements();
    assert!(s.get(0).unwrap().is_nan());
    assert_eq!(s.get(1).unwrap(), 4.0);
}

// =============================================================================
// Empty and tiny vectors
// =============================================================================

#[test]
fn empty_vector_has_no_valid_index() {
    let v: Vector<f64> = Vector::new();
    assert!(matches!(
        v.get(0),
        Err(VectorError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn empty_vectors_are_equal_and_their_norm_refuses() {
    let a: Vector<f64> = Vector::new();
    let b: Vector<f64> = Vector::new();
    assert_eq!(a, b);
    assert!(matches!(a.normalized(), Err(VectorError::ZeroVector)));
}

#[test]
fn one_dimensional_orthogonal_complement_cannot_exist() {
    let a = Vector::from_slice(&[1.0_f64]);
    assert!(matches!(
        random_orthogonal(&a),
        Err(VectorError::ZeroVector)
    ));
}

#[test]
#[should_panic]
fn convenience_indexing_panics_past_the_end() {
    let v = Vector::from_slice(&[1.0_f64]);
    let _ = v[1];
}

// =============================================================================
// Complex-conjugate inner product
// =============================================================================

#[test]
fn dot_conj_works_for_integer_element_vectors() {
    let a = Vector::from_slice(&[2_i32, 3]);
    let c = Vector::from_vec(vec![Complex64::new(1.0, 2.0), Complex64::new(-1.0, 0.5)]);
    // 2*(1 - 2i) + 3*(-1 - 0.5i) = -1 - 5.5i
    assert_eq!(a.dot_conj(&c).unwrap(), Complex64::new(-1.0, -5.5));
}

#[test]
fn dot_conj_of_empty_vectors_is_zero() {
    let a: Vector<f64> = Vector::new();
    let c: Vector<Complex64> = Vector::from_vec(Vec::new());
    assert_eq!(a.dot_conj(&c).unwrap(), Complex64::new(0.0, 0.0));
}

// =============================================================================
// Text input
// =============================================================================

#[test]
fn populate_accepts_tokens_split_across_lines() {
    let mut v: Vector<i64> = Vector::new();
    v.populate_from("3\n10\n20 30\n".as_bytes()).unwrap();
    assert_eq!(v.as_slice(), &[10, 20, 30]);
}

#[test]
fn populate_with_zero_length_empties_the_vector() {
    let mut v = Vector::from_slice(&[1.0_f64, 2.0]);
    v.populate_from("0".as_bytes()).unwrap();
    assert!(v.is_empty());
}

#[test]
fn populate_ignores_tokens_past_the_declared_length() {
    let mut v: Vector<f64> = Vector::new();
    v.populate_from("2 1.0 2.0 3.0 4.0".as_bytes()).unwrap();
    assert_eq!(v.as_slice(), &[1.0, 2.0]);
}

#[test]
fn populate_rejects_a_malformed_length_token() {
    let mut v: Vector<f64> = Vector::new();
    let err = v.populate_from("many 1.0".as_bytes()).unwrap_err();
    assert!(matches!(err, VectorError::Parse { ref token, .. } if token == "many"));
}

#[test]
fn populate_rejects_a_malformed_element_token() {
    let mut v = Vector::from_slice(&[7_i32]);
    let err = v.populate_from("2 1 two".as_bytes()).unwrap_err();
    assert!(matches!(err, VectorError::Parse { ref token, .. } if token == "two"));
    // Failed repopulation leaves the previous contents in place.
    assert_eq!(v.as_slice(), &[7]);
}

#[test]
fn populate_rejects_a_truncated_stream() {
    let mut v: Vector<f64> = Vector::new();
    assert!(matches!(
        v.populate_from("".as_bytes()),
        Err(VectorError::UnexpectedEof(_))
    ));
    assert!(matches!(
        v.populate_from("5 1.0 2.0".as_bytes()),
        Err(VectorError::UnexpectedEof(_))
    ));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_round_trips_through_populate() {
    let v = Vector::from_slice(&[1.5_f64, -2.25, 0.0]);
    let rendered = format!("{} {}", v.len(), v);

    let mut parsed: Vector<f64> = Vector::new();
    parsed.populate_from(rendered.as_bytes()).unwrap();
    assert_eq!(parsed, v);
}
