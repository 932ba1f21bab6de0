// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dense row-major `f64` matrix.
//!
//! Just enough matrix for point sets: shape, row access, and the elementwise
//! shift and scale the metamorphic properties need. Shape is stored
//! explicitly so a `3 x 0` or `0 x 5` matrix keeps both dimensions.

use crate::error::PreconditionError;

/// A `rows x cols` grid of `f64`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build from flat row-major data; `data.len()` must equal `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, PreconditionError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(PreconditionError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from rows, each of length `cols`.
    ///
    /// `cols` is explicit because an empty row list cannot say how wide its
    /// points are.
    pub fn from_rows(rows: Vec<Vec<f64>>, cols: usize) -> Result<Self, PreconditionError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(PreconditionError::RaggedRows {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n,
            cols,
            data,
        })
    }

    /// All-zero matrix. Fails when `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, PreconditionError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(PreconditionError::ShapeMismatch { rows, cols, len: 0 })?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.rows {
            Some(&self.data[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    /// Iterate rows in order. Yields `rows()` slices even when `cols() == 0`.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Copy as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    /// Apply `f` to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Add `c` to every element.
    pub fn shifted(&self, c: f64) -> Self {
        self.map(|v| v + c)
    }

    /// Multiply every element by `s`.
    pub fn scaled(&self, s: f64) -> Self {
        self.map(|v| v * s)
    }
}
