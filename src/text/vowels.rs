// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vowel counting.

/// The five vowels, both cases.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'];

/// The extra vowels counted when `include_y` is set.
pub const Y_VOWELS: &[char] = &['y', 'Y'];

/// Whether `c` counts as a vowel.
#[inline]
pub fn is_vowel(c: char, include_y: bool) -> bool {
    VOWELS.contains(&c) || (include_y && Y_VOWELS.contains(&c))
}

/// Count the vowels in `x`, optionally treating `y`/`Y` as a vowel.
///
/// Only the ASCII vowels count. Accented letters like `é` are not vowels
/// here; normalize first if that matters.
///
/// ```
/// use pbt_toolkit::count_vowels;
///
/// assert_eq!(count_vowels("happy", false), 1);
/// assert_eq!(count_vowels("happy", true), 2);
/// ```
pub fn count_vowels(x: &str, include_y: bool) -> usize {
    let count = x.chars().filter(|&c| is_vowel(c, include_y)).count();
    crate::contracts::check_vowel_count_bounded(count, x);
    count
}
