// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pairwise distances over arbitrary finite point sets, up to `f64::MAX`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pbt_toolkit::{pairwise_dists, Matrix};

#[derive(Debug, Arbitrary)]
struct PointSets {
    m: u8,
    n: u8,
    d: u8,
    values: Vec<f64>,
}

fuzz_target!(|input: PointSets| {
    let (m, n, d) = (usize::from(input.m % 8), usize::from(input.n % 8), usize::from(input.d % 8));
    let mut values = input
        .values
        .iter()
        .map(|&v| if v.is_finite() { v } else { 0.0 })
        .chain(std::iter::repeat(0.0));

    let x = Matrix::new(m, d, values.by_ref().take(m * d).collect()).expect("shape is exact");
    let y = Matrix::new(n, d, values.by_ref().take(n * d).collect()).expect("shape is exact");

    let dists = pairwise_dists(&x, &y).expect("dimensions match");
    assert_eq!((dists.rows(), dists.cols()), (m, n));
    // Finite points never give NaN; only gaps beyond f64::MAX reach infinity.
    assert!(dists.as_slice().iter().all(|&v| v >= 0.0), "{:?}", dists);
});
