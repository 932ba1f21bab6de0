// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Max-merging of mappings.
//!
//! [`merge_max_mappings`] is generic over any `PartialOrd` value. The CLI and
//! the property suites use [`MappingValue`], which holds either an integer or
//! a float and orders the two against each other exactly.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Merge two mappings, keeping the larger value for shared keys.
///
/// Keys present in only one input are copied over. For shared keys the value
/// from `dict2` wins only if it compares strictly greater, so ties and
/// incomparable pairs (NaN) keep `dict1`'s value. Neither input is modified.
///
/// ```
/// use std::collections::HashMap;
/// use pbt_toolkit::merge_max_mappings;
///
/// let x = HashMap::from([("a", 1), ("b", 2)]);
/// let y = HashMap::from([("b", 100), ("c", -1)]);
///
/// let merged = merge_max_mappings(&x, &y);
/// assert_eq!(merged, HashMap::from([("a", 1), ("b", 100), ("c", -1)]));
/// ```
pub fn merge_max_mappings<K, V>(dict1: &HashMap<K, V>, dict2: &HashMap<K, V>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialOrd + Clone,
{
    let mut merged = dict1.clone();
    for (key, value) in dict2 {
        match merged.get_mut(key) {
            Some(current) => {
                if value > current {
                    *current = value.clone();
                }
            }
            None => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    crate::contracts::check_merge_covers_inputs(dict1, dict2, &merged);
    merged
}

/// A numeric mapping value: integer or float.
///
/// Deserializes from any JSON number; integers that fit in `i64` become
/// [`MappingValue::Int`], everything else [`MappingValue::Float`].
///
/// Equality and ordering are numeric across the two variants, so
/// `Int(1) == Float(1.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappingValue {
    Int(i64),
    Float(f64),
}

impl MappingValue {
    /// Lossy view as `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            MappingValue::Int(i) => i as f64,
            MappingValue::Float(f) => f,
        }
    }
}

impl PartialEq for MappingValue {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for MappingValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (MappingValue::Int(a), MappingValue::Int(b)) => Some(a.cmp(&b)),
            (MappingValue::Float(a), MappingValue::Float(b)) => a.partial_cmp(&b),
            (MappingValue::Int(a), MappingValue::Float(b)) => cmp_int_float(a, b),
            (MappingValue::Float(a), MappingValue::Int(b)) => {
                cmp_int_float(b, a).map(Ordering::reverse)
            }
        }
    }
}

impl From<i64> for MappingValue {
    fn from(value: i64) -> Self {
        MappingValue::Int(value)
    }
}

impl From<f64> for MappingValue {
    fn from(value: f64) -> Self {
        MappingValue::Float(value)
    }
}

impl fmt::Display for MappingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingValue::Int(i) => write!(f, "{}", i),
            MappingValue::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// 2^63 as `f64`; every finite float below it in magnitude truncates into `i64`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Compare an integer with a float without rounding the integer.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if float < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }

    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        ord => Some(ord),
    }
}
