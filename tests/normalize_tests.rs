//! Integration tests for unitnorm normalization

use ndarray::{array, Array1, Array2};
use serde_json::json;
use unitnorm::error::NormError;
use unitnorm::harness::{builtin_checks, run_checks, DEFAULT_ATOL};
use unitnorm::{l2_norm, normalize, normalize_array, normalize_rows, to_vector};

fn norm_of(v: &Array1<f64>) -> f64 {
    l2_norm(v.as_slice().unwrap())
}

fn assert_close(a: &Array1<f64>, b: &Array1<f64>, atol: f64) {
    assert_eq!(a.len(), b.len(), "length mismatch: {} vs {}", a, b);
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < atol, "Arrays not equal: {} vs {}", a, b);
    }
}

// ===== Concrete scenarios =====

#[test]
fn test_normalize_nonzero_vector() {
    let x = array![3.0, 4.0];
    let y = normalize(&x).unwrap();
    assert!((norm_of(&y) - 1.0).abs() < 1e-8);
    assert_close(&y, &array![0.6, 0.8], 1e-8);
}

#[test]
fn test_normalize_zero_vector() {
    let x = array![0.0, 0.0];
    let y = normalize(&x).unwrap();
    assert_eq!(y, x);
    assert_eq!(norm_of(&y), 0.0);
}

#[test]
fn test_normalize_list_input() {
    let y = normalize(vec![1, 0, 0]).unwrap();
    assert_close(&y, &array![1.0, 0.0, 0.0], 1e-8);
}

#[test]
fn test_list_and_array_inputs_agree() {
    let from_list = normalize([1, 0, 0]).unwrap();
    let from_array = normalize(&array![1.0, 0.0, 0.0]).unwrap();
    assert_eq!(from_list, from_array);
    assert_eq!(from_list, array![1.0, 0.0, 0.0]);
}

// ===== Degenerate inputs =====

#[test]
fn test_zero_vectors_of_any_length() {
    for len in 0..20 {
        let x = Array1::<f64>::zeros(len);
        let y = normalize(&x).unwrap();
        assert_eq!(y, x, "zero vector of length {} should be unchanged", len);
        assert_eq!(norm_of(&y), 0.0);
    }
}

#[test]
fn test_negative_zero_is_degenerate() {
    let y = normalize([-0.0, 0.0]).unwrap();
    assert_eq!(norm_of(&y), 0.0);
    assert!(y[0].is_sign_negative(), "input returned as-is, sign kept");
}

#[test]
fn test_integer_zero_vector() {
    let y = normalize(vec![0u8; 4]).unwrap();
    assert_eq!(y, Array1::<f64>::zeros(4));
}

// ===== Coercion =====

#[test]
fn test_mixed_json_input() {
    let input = vec![json!(3), json!("4")];
    let y = normalize(&input).unwrap();
    assert_close(&y, &array![0.6, 0.8], 1e-12);
}

#[test]
fn test_non_numeric_element_errors() {
    let err = normalize(["3", "four"]).unwrap_err();
    assert_eq!(
        err,
        NormError::NonNumeric {
            index: 1,
            value: "\"four\"".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Non-numeric element at index 1: \"four\"");
}

#[test]
fn test_to_vector_keeps_values() {
    let v = to_vector([2, -3]).unwrap();
    assert_eq!(v, array![2.0, -3.0]);
}

// ===== Batch =====

#[test]
fn test_normalize_rows_matches_per_row() {
    let m: Array2<f64> = Array2::from_shape_fn((8, 5), |(i, j)| (i as f64 - 3.0) * (j as f64 + 1.0));
    let out = normalize_rows(&m);

    for (i, row) in m.rows().into_iter().enumerate() {
        let expected = normalize_array(&row);
        let actual = out.row(i).to_owned();
        assert_close(&actual, &expected, 1e-12);
    }
    // row 3 is all zeros
    assert!(out.row(3).iter().all(|&x| x == 0.0));
}

// ===== Seeded random vectors =====

#[test]
fn test_random_vectors_unit_norm_and_parallel() {
    use rand::prelude::*;

    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let dim = rng.gen_range(1..256);
        let v: Vec<f64> = (0..dim).map(|_| rng.gen::<f64>() * 200.0 - 100.0).collect();
        if v.iter().all(|&x| x == 0.0) {
            continue;
        }

        let y = normalize(&v).unwrap();
        assert!(
            (norm_of(&y) - 1.0).abs() < 1e-8,
            "norm {} for dim {}",
            norm_of(&y),
            dim
        );

        let n = l2_norm(&v);
        for (a, b) in v.iter().zip(y.iter()) {
            assert!((b * n - a).abs() < 1e-9 * n.max(1.0));
        }
    }
}

// ===== Harness =====

#[test]
fn test_builtin_checks_exit_zero() {
    let mut out = Vec::new();
    let report = run_checks(&builtin_checks(), DEFAULT_ATOL, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(report.exit_code(), 0, "report:\n{}", text);
    assert_eq!(report.results.len(), 3);
    assert_eq!(text.matches("Running: ").count(), 3);
    assert_eq!(text.matches("PASS: ").count(), 3);
}
