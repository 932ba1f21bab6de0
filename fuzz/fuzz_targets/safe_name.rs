// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best-effort naming never fails.
//!
//! Whatever capabilities a value offers, the result is one of the names it
//! offered or the unknown placeholder.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pbt_toolkit::{safe_name, Symbol, UNKNOWN_NAME};

#[derive(Debug, Arbitrary)]
enum Input {
    Path(String),
    Named(String),
    Value(String),
    Opaque,
}

fuzz_target!(|input: (Input, bool)| {
    let (input, repr_allowed) = input;
    let symbol = match input {
        Input::Path(p) => Symbol::from_path(&p),
        Input::Named(n) => Symbol::Named(n),
        Input::Value(v) => Symbol::Value(v),
        Input::Opaque => Symbol::Opaque,
    };

    let name = safe_name(&symbol, repr_allowed);
    match &symbol {
        Symbol::Item { path, .. } => assert_eq!(&name, path),
        Symbol::Named(n) => assert_eq!(&name, n),
        Symbol::Value(v) if repr_allowed => assert_eq!(&name, v),
        Symbol::Value(_) | Symbol::Opaque => assert_eq!(name, UNKNOWN_NAME),
    }
});
