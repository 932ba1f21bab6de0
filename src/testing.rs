// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and fuzz targets.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical float comparisons so every suite uses the same
//! tolerance rules.

#![doc(hidden)]

use crate::numeric::Matrix;

/// Relative closeness: `|a - b| <= rel_tol * max(|a|, |b|)`, or exactly
/// equal (which covers matching infinities).
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    a == b || (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// Elementwise `|a - b| <= atol + rtol * |b|`.
///
/// Slices of different length are never close.
pub fn allclose(a: &[f64], b: &[f64], rtol: f64, atol: f64) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(&x, &y)| x == y || (x - y).abs() <= atol + rtol * y.abs())
}

/// [`allclose`] for matrices; shapes must match.
pub fn matrix_allclose(a: &Matrix, b: &Matrix, rtol: f64, atol: f64) -> bool {
    a.rows() == b.rows() && a.cols() == b.cols() && allclose(a.as_slice(), b.as_slice(), rtol, atol)
}

/// Reverse a string by `char`.
pub fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

/// Sort a string's `char`s.
pub fn sorted(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
