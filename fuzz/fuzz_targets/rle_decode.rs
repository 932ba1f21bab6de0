// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decoding hostile token streams.
//!
//! Counts in the wrong place are errors, not panics. Counts are capped so a
//! single token can't ask for gigabytes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pbt_toolkit::{decode_runs, run_length_decoder, runs_from_tokens, RleToken};

#[derive(Debug, Arbitrary)]
enum Token {
    Char(char),
    Count(u8),
}

fuzz_target!(|tokens: Vec<Token>| {
    let tokens: Vec<RleToken> = tokens
        .into_iter()
        .map(|t| match t {
            Token::Char(c) => RleToken::Char(c),
            Token::Count(n) => RleToken::Count(usize::from(n)),
        })
        .collect();

    match (run_length_decoder(&tokens), runs_from_tokens(&tokens)) {
        (Ok(text), Ok(runs)) => assert_eq!(decode_runs(&runs), Ok(text)),
        (Err(a), Err(b)) => assert_eq!(a, b),
        (a, b) => panic!("decoder and run parser disagree: {:?} vs {:?}", a, b),
    }
});
