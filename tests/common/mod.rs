//! Shared test utilities and strategies.

#![allow(dead_code)]

use pbt_toolkit::{MappingValue, Matrix, RleToken};
use proptest::prelude::*;
use std::collections::HashMap;

// Re-export canonical test utilities from pbt_toolkit::testing
pub use pbt_toolkit::testing::{allclose, is_close, matrix_allclose, reversed, sorted};

// ============================================================================
// TOLERANCES
// ============================================================================

/// Softmax must sum to one within this.
pub const SOFTMAX_TOL: f64 = 1e-9;

/// Relative and absolute tolerance for distance metamorphic properties.
pub const DIST_TOL: f64 = 1e-3;

// ============================================================================
// TEXT STRATEGIES
// ============================================================================

/// Digits, ASCII letters, punctuation and whitespace.
pub const PRINTABLE: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n\r\x0b\x0c";

/// Strings over [`PRINTABLE`] with up to `max_len` characters.
pub fn printable_string(max_len: usize) -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = PRINTABLE.chars().collect();
    prop::collection::vec(prop::sample::select(alphabet), 0..=max_len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Arbitrary Unicode strings with up to `max_len` characters.
pub fn unicode_string(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=max_len).prop_map(|chars| chars.into_iter().collect())
}

/// Strings that are mostly runs: a small alphabet or anything at all.
pub fn rle_input() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-d]{0,40}").unwrap(),
        unicode_string(40),
    ]
}

/// Token streams that may or may not be well formed.
///
/// Counts stay small so a decode never allocates much.
pub fn token_stream() -> impl Strategy<Value = Vec<RleToken>> {
    let token = prop_oneof![
        3 => prop::char::range('a', 'e').prop_map(RleToken::Char),
        1 => (0usize..64).prop_map(RleToken::Count),
    ];
    prop::collection::vec(token, 0..30)
}

// ============================================================================
// MAPPING STRATEGIES
// ============================================================================

/// Integers or non-NaN floats.
pub fn mapping_value() -> impl Strategy<Value = MappingValue> {
    prop_oneof![
        any::<i64>().prop_map(MappingValue::Int),
        any::<f64>()
            .prop_filter("NaN is not comparable", |f| !f.is_nan())
            .prop_map(MappingValue::Float),
    ]
}

/// Mappings with short keys so the two sides share keys often.
pub fn mapping() -> impl Strategy<Value = HashMap<String, MappingValue>> {
    prop::collection::hash_map(
        prop::string::string_regex("[a-f]{0,2}").unwrap(),
        mapping_value(),
        0..12,
    )
}

// ============================================================================
// NUMERIC STRATEGIES
// ============================================================================

/// Non-empty vectors of finite floats across the whole range.
pub fn finite_vector() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        any::<f64>().prop_filter("finite", |f| f.is_finite()),
        1..50,
    )
}

/// Two point sets of a shared dimension: `M x D` and `N x D`, with
/// `M, N, D` in `0..=5` and elements in `-bound..bound`.
pub fn point_sets(bound: f64) -> impl Strategy<Value = (Matrix, Matrix)> {
    (0usize..=5, 0usize..=5, 0usize..=5).prop_flat_map(move |(m, n, d)| {
        (
            prop::collection::vec(-bound..bound, m * d),
            prop::collection::vec(-bound..bound, n * d),
        )
            .prop_map(move |(xs, ys)| {
                (
                    Matrix::new(m, d, xs).unwrap(),
                    Matrix::new(n, d, ys).unwrap(),
                )
            })
    })
}

// ============================================================================
// HELPERS
// ============================================================================

/// Build a `HashMap<String, MappingValue>` from literal pairs.
pub fn map_of(pairs: &[(&str, MappingValue)]) -> HashMap<String, MappingValue> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}
