// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run-length round trip over arbitrary UTF-8.
//!
//! Both layouts must give back exactly the input: the doubled token stream
//! and the run pairs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pbt_toolkit::{decode_runs, encode_runs, run_length_decoder, run_length_encoder, runs_from_tokens};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let tokens = run_length_encoder(&text);
    let decoded = run_length_decoder(&tokens).expect("encoder output must decode");
    assert_eq!(decoded, text);

    let runs = encode_runs(&text);
    assert_eq!(decode_runs(&runs).expect("runs of the input must decode"), text);
    assert_eq!(runs_from_tokens(&tokens).expect("encoder output must parse"), runs);
});
