// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Softmax over arbitrary finite vectors.
//!
//! Every weight is a probability and the weights sum to one, no matter how
//! far apart the inputs are.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pbt_toolkit::softmax;

fuzz_target!(|values: Vec<f64>| {
    let x: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).take(256).collect();
    let y = softmax(&x);

    assert_eq!(y.len(), x.len());
    if y.is_empty() {
        return;
    }
    assert!(y.iter().all(|p| (0.0..=1.0).contains(p)), "{:?} -> {:?}", x, y);
    let total: f64 = y.iter().sum();
    assert!((total - 1.0).abs() <= 1e-9, "{:?} sums to {}", x, total);
});
