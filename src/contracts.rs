// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the utility functions.
//!
//! Debug-mode assertions that re-check, on every call, the properties the
//! property suites check on generated inputs. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Catch a broken postcondition at the call that broke it, not three
//!    assertions later in a test
//! 3. State each property in exactly one place
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every function here is a postcondition of a public operation. A contract
//! firing means a bug in this crate, never bad caller input; bad input is a
//! [`PreconditionError`](crate::PreconditionError).
//!
//! # Property Correspondence
//!
//! | Contract Function              | Property                                      |
//! |--------------------------------|-----------------------------------------------|
//! | `check_vowel_count_bounded`    | `0 <= count_vowels(s) <= len(s)`              |
//! | `check_leftpad_shape`          | margin is all fill, suffix is the input       |
//! | `check_rle_stream_canonical`   | counts only follow a doubled character, >= 2 |
//! | `check_merge_covers_inputs`    | key union, values dominate both inputs        |
//! | `check_softmax_distribution`   | entries in [0, 1], sum within 1e-9 of 1       |
//! | `check_dists_shape`            | `M x N` result, non-negative entries          |

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::numeric::Matrix;
use crate::text::{RleToken, VOWELS, Y_VOWELS};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The vowel tables hold both cases of each letter.
const _: () = {
    assert!(VOWELS.len() == 10);
    assert!(Y_VOWELS.len() == 2);
};

/// Tolerance for the softmax sum-to-one check.
pub const SOFTMAX_SUM_TOLERANCE: f64 = 1e-9;

// ============================================================================
// TEXT CONTRACTS
// ============================================================================

/// A vowel count never exceeds the number of characters.
#[inline]
pub fn check_vowel_count_bounded(count: usize, input: &str) {
    debug_assert!(
        count <= input.chars().count(),
        "Contract violation: vowel count {} exceeds length {}",
        count,
        input.chars().count()
    );
}

/// Padding either returned the input untouched or prefixed exactly the
/// missing number of fill characters.
#[inline]
pub fn check_leftpad_shape(input: &str, width: usize, fill: char, padded: &str) {
    debug_assert!(
        padded.ends_with(input),
        "Contract violation: leftpad output {:?} does not end with input {:?}",
        padded,
        input
    );
    debug_assert!(
        padded.chars().count() == width.max(input.chars().count()),
        "Contract violation: leftpad output has {} chars, expected {}",
        padded.chars().count(),
        width.max(input.chars().count())
    );
    debug_assert!(
        padded[..padded.len() - input.len()].chars().all(|c| c == fill),
        "Contract violation: leftpad margin of {:?} is not all {:?}",
        padded,
        fill
    );
}

/// Encoder output is canonical: every count is at least 2 and directly
/// follows two copies of one character.
#[inline]
pub fn check_rle_stream_canonical(tokens: &[RleToken]) {
    for (i, token) in tokens.iter().enumerate() {
        if let RleToken::Count(count) = *token {
            debug_assert!(
                count >= 2,
                "Contract violation: run length {} at position {} is below 2",
                count,
                i
            );
            debug_assert!(
                i >= 2
                    && matches!(
                        (tokens[i - 2], tokens[i - 1]),
                        (RleToken::Char(a), RleToken::Char(b)) if a == b
                    ),
                "Contract violation: count at position {} does not follow a doubled character",
                i
            );
        }
    }
}

// ============================================================================
// MAPPING CONTRACTS
// ============================================================================

/// The merge holds exactly the union of keys and no input value exceeds the
/// merged value for its key.
#[inline]
pub fn check_merge_covers_inputs<K, V>(
    dict1: &HashMap<K, V>,
    dict2: &HashMap<K, V>,
    merged: &HashMap<K, V>,
) where
    K: Eq + Hash,
    V: PartialOrd,
{
    debug_assert!(
        merged
            .keys()
            .all(|k| dict1.contains_key(k) || dict2.contains_key(k)),
        "Contract violation: merge introduced a key absent from both inputs"
    );

    for input in [dict1, dict2] {
        for (key, value) in input {
            debug_assert!(
                merged
                    .get(key)
                    .is_some_and(|m| m.partial_cmp(value) != Some(Ordering::Less)),
                "Contract violation: merge lost a key or kept a smaller value"
            );
        }
    }
}

// ============================================================================
// NUMERIC CONTRACTS
// ============================================================================

/// Softmax output is a probability distribution.
///
/// Only meaningful for finite input; callers skip it otherwise.
#[inline]
pub fn check_softmax_distribution(probs: &[f64]) {
    for (i, &p) in probs.iter().enumerate() {
        debug_assert!(
            (0.0..=1.0).contains(&p),
            "Contract violation: softmax[{}] = {} outside [0, 1]",
            i,
            p
        );
    }
    if !probs.is_empty() {
        let total: f64 = probs.iter().sum();
        debug_assert!(
            (total - 1.0).abs() <= SOFTMAX_SUM_TOLERANCE,
            "Contract violation: softmax sums to {}",
            total
        );
    }
}

/// Distance matrix is `x.rows() x y.rows()` with non-negative entries.
///
/// Only meaningful for finite input; callers skip it otherwise.
#[inline]
pub fn check_dists_shape(x: &Matrix, y: &Matrix, dists: &Matrix) {
    debug_assert!(
        dists.rows() == x.rows() && dists.cols() == y.rows(),
        "Contract violation: distance matrix is {} x {}, expected {} x {}",
        dists.rows(),
        dists.cols(),
        x.rows(),
        y.rows()
    );
    debug_assert!(
        dists.as_slice().iter().all(|&d| d >= 0.0),
        "Contract violation: negative or NaN distance"
    );
}
