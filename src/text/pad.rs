// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Left-padding.
//!
//! Two entry points. [`leftpad`] takes a `usize` width and a `char` fill, so
//! both preconditions hold by construction and there is nothing to fail.
//! [`try_leftpad`] is for callers holding untyped input (the CLI, JSON) and
//! checks the preconditions itself.

use crate::error::PreconditionError;

/// Left-pad `string` with `fillchar` until it is `width` characters long.
///
/// Strings already at least `width` characters long come back unchanged.
///
/// ```
/// use pbt_toolkit::leftpad;
///
/// assert_eq!(leftpad("cat", 5, 'Z'), "ZZcat");
/// assert_eq!(leftpad("Dog", 2, 'Z'), "Dog");
/// ```
pub fn leftpad(string: &str, width: usize, fillchar: char) -> String {
    let len = string.chars().count();
    let margin = width.saturating_sub(len);

    let mut padded = String::with_capacity(margin * fillchar.len_utf8() + string.len());
    padded.extend(std::iter::repeat(fillchar).take(margin));
    padded.push_str(string);

    crate::contracts::check_leftpad_shape(string, width, fillchar, &padded);
    padded
}

/// Checked variant of [`leftpad`] for untyped input.
///
/// Rejects a negative `width` and any `fillchar` that is not exactly one
/// `char`.
pub fn try_leftpad(string: &str, width: i64, fillchar: &str) -> Result<String, PreconditionError> {
    let width = usize::try_from(width).map_err(|_| PreconditionError::NegativeWidth { width })?;

    let mut chars = fillchar.chars();
    match (chars.next(), chars.next()) {
        (Some(fill), None) => Ok(leftpad(string, width, fill)),
        _ => Err(PreconditionError::FillNotSingleChar {
            chars: fillchar.chars().count(),
        }),
    }
}
