// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pairwise Euclidean distances between two point sets.

use super::Matrix;
use crate::error::PreconditionError;

/// Euclidean distance between every row of `x` and every row of `y`.
///
/// `x` is `M x D`, `y` is `N x D`, the result is `M x N`. Distances come from
/// the expansion `‖xᵢ‖² + ‖yⱼ‖² − 2·xᵢ·yⱼ`; cancellation can push that a hair
/// below zero for near-identical points, so it is clipped at zero before the
/// square root.
///
/// Coordinates past about `1e154` overflow the squared norms. Those pairs
/// fall back to a scaled difference-of-coordinates sum, so finite points
/// always get a non-negative, non-NaN distance.
///
/// ```
/// use pbt_toolkit::{pairwise_dists, Matrix};
///
/// let x = Matrix::from_rows(vec![vec![0.0, 0.0]], 2).unwrap();
/// let y = Matrix::from_rows(vec![vec![3.0, 4.0], vec![0.0, 0.0]], 2).unwrap();
///
/// let d = pairwise_dists(&x, &y).unwrap();
/// assert_eq!(d.to_rows(), vec![vec![5.0, 0.0]]);
/// ```
pub fn pairwise_dists(x: &Matrix, y: &Matrix) -> Result<Matrix, PreconditionError> {
    if x.cols() != y.cols() {
        return Err(PreconditionError::DimensionMismatch {
            x_dim: x.cols(),
            y_dim: y.cols(),
        });
    }

    let mut dists = Matrix::zeros(x.rows(), y.rows())?;

    let x_norms: Vec<f64> = x.iter_rows().map(|row| dot(row, row)).collect();
    let y_norms: Vec<f64> = y.iter_rows().map(|row| dot(row, row)).collect();

    for (i, xi) in x.iter_rows().enumerate() {
        for (j, yj) in y.iter_rows().enumerate() {
            let squared = x_norms[i] + y_norms[j] - 2.0 * dot(xi, yj);
            let dist = if squared.is_finite() {
                // Not `f64::max`: that would turn NaN into 0.
                let clipped = if squared < 0.0 { 0.0 } else { squared };
                clipped.sqrt()
            } else {
                scaled_distance(xi, yj)
            };
            dists.set(i, j, dist);
        }
    }

    if cfg!(debug_assertions) && x.as_slice().iter().chain(y.as_slice()).all(|v| v.is_finite()) {
        crate::contracts::check_dists_shape(x, y, &dists);
    }
    Ok(dists)
}

/// `‖a − b‖` computed as `m·‖(a − b)/m‖` with `m` the largest coordinate
/// gap, so squaring never overflows. Infinite gaps give infinity and NaN
/// gaps give NaN.
fn scaled_distance(a: &[f64], b: &[f64]) -> f64 {
    let mut scale = 0.0_f64;
    for (p, q) in a.iter().zip(b) {
        let gap = (p - q).abs();
        if gap.is_nan() {
            return f64::NAN;
        }
        scale = scale.max(gap);
    }
    if scale == 0.0 || scale.is_infinite() {
        return scale;
    }

    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(p, q)| {
            let r = (p - q) / scale;
            r * r
        })
        .sum();
    scale * sum.sqrt()
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(p, q)| p * q).sum()
}
