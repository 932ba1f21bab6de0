// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vowel counting over arbitrary UTF-8.
//!
//! The count is bounded by the character count and never changes when the
//! string is reversed.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pbt_toolkit::count_vowels;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let reversed: String = text.chars().rev().collect();

    for include_y in [false, true] {
        let n = count_vowels(&text, include_y);
        assert!(n <= text.chars().count());
        assert_eq!(count_vowels(&reversed, include_y), n);
    }

    assert!(count_vowels(&text, true) >= count_vowels(&text, false));
});
