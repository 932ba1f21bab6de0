// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Max-merging arbitrary maps of numbers.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pbt_toolkit::{merge_max_mappings, MappingValue};
use std::collections::HashMap;

#[derive(Debug, Arbitrary)]
enum Number {
    Int(i64),
    Float(f64),
}

impl From<Number> for MappingValue {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => MappingValue::Int(i),
            Number::Float(f) => MappingValue::Float(f),
        }
    }
}

fn to_map(pairs: Vec<(u8, Number)>) -> HashMap<u8, MappingValue> {
    pairs.into_iter().map(|(k, v)| (k, v.into())).collect()
}

fuzz_target!(|input: (Vec<(u8, Number)>, Vec<(u8, Number)>)| {
    let a = to_map(input.0);
    let b = to_map(input.1);
    let merged = merge_max_mappings(&a, &b);

    assert_eq!(merged.len(), a.keys().chain(b.keys()).collect::<std::collections::HashSet<_>>().len());
    for (k, v) in &merged {
        // Bitwise identity: NaN never equals itself, so compare by origin.
        let from_a = a.get(k).is_some_and(|x| same(x, v));
        let from_b = b.get(k).is_some_and(|x| same(x, v));
        assert!(from_a || from_b, "{} -> {} came from nowhere", k, v);
    }
});

fn same(x: &MappingValue, y: &MappingValue) -> bool {
    match (x, y) {
        (MappingValue::Int(p), MappingValue::Int(q)) => p == q,
        (MappingValue::Float(p), MappingValue::Float(q)) => p.to_bits() == q.to_bits(),
        _ => false,
    }
}
