// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text utilities: counting, padding, run-length coding.
//!
//! All of these measure strings in `char`s, not bytes. A string of three
//! Telugu letters has length three here, the way a reader would count it,
//! even though it is nine bytes of UTF-8.

mod pad;
mod rle;
mod vowels;

pub use pad::{leftpad, try_leftpad};
pub use rle::{
    decode_runs, encode_runs, run_length_decoder, run_length_encoder, runs_from_tokens,
    RleToken, Run,
};
pub use vowels::{count_vowels, is_vowel, VOWELS, Y_VOWELS};
