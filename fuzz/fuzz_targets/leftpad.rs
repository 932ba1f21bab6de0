// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Left-padding with arbitrary text, width and fill.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pbt_toolkit::{leftpad, try_leftpad};

#[derive(Debug, Arbitrary)]
struct PadInput {
    text: String,
    /// Kept small so a padded string never gets huge.
    width: u16,
    fill: char,
    raw_width: i64,
    raw_fill: String,
}

fuzz_target!(|input: PadInput| {
    let width = usize::from(input.width);
    let padded = leftpad(&input.text, width, input.fill);
    let len = input.text.chars().count();

    assert_eq!(padded.chars().count(), len.max(width));
    assert!(padded.ends_with(&input.text));
    let margin = width.saturating_sub(len);
    assert!(padded.chars().take(margin).all(|c| c == input.fill));

    // The checked entry point either agrees or rejects; it never panics.
    let raw_width = input.raw_width.clamp(i64::MIN, 1 << 16);
    if let Ok(padded) = try_leftpad(&input.text, raw_width, &input.raw_fill) {
        assert!(padded.ends_with(&input.text));
    }
});
