// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Numerically stable softmax.

/// Softmax of a 1-D array.
///
/// Computes `exp(x_i - max(x)) / Σ exp(x_j - max(x))`. Subtracting the
/// maximum keeps every exponent at or below zero, so nothing overflows and
/// the largest term is exactly 1.
///
/// An empty input gives an empty output.
///
/// ```
/// use pbt_toolkit::softmax;
///
/// let y = softmax(&[1.0, 1.0]);
/// assert_eq!(y, vec![0.5, 0.5]);
/// ```
pub fn softmax(x: &[f64]) -> Vec<f64> {
    if x.is_empty() {
        return Vec::new();
    }

    let max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = x.iter().map(|&v| (v - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    let out: Vec<f64> = exps.into_iter().map(|e| e / total).collect();

    if cfg!(debug_assertions) && x.iter().all(|v| v.is_finite()) {
        crate::contracts::check_softmax_distribution(&out);
    }
    out
}
