// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Numeric utilities: a small dense matrix, pairwise distances, softmax.
//!
//! Both algorithms carry a numerical-stability step that is part of their
//! contract, not an optimization: pairwise distances clip the squared
//! distance at zero before the square root, softmax subtracts the maximum
//! before exponentiating.

mod distance;
mod matrix;
mod softmax;

pub use distance::pairwise_dists;
pub use matrix::Matrix;
pub use softmax::softmax;
