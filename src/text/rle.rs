// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run-length coding.
//!
//! The token layout is a little odd: a run of two or more emits the character
//! *twice* and then the run length.
//!
//! ```text
//! "aaaaabbcbc"  →  a a 5 b b 2 c b c
//!                  └─┬─┘ └─┬─┘ └─┬─┘
//!                   run   run  singles
//! ```
//!
//! The doubled character lets the decoder treat every token locally: a
//! character is appended, a count appends the previous token `count - 2`
//! more times (it was already written twice). Existing outputs use this
//! layout, so [`run_length_encoder`] keeps it bit for bit.
//!
//! [`Run`] is the plain `(char, len)` form. [`encode_runs`] and
//! [`decode_runs`] work on it directly, and [`runs_from_tokens`] /
//! [`Run::tokens`] convert between the two.

use serde::{Deserialize, Serialize};

use crate::error::PreconditionError;

/// One element of a run-length token stream.
///
/// Serializes untagged, so a stream is a JSON array mixing one-character
/// strings and integers: `["a","a",5,"b"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RleToken {
    Char(char),
    Count(usize),
}

/// A maximal run of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub ch: char,
    pub len: usize,
}

impl Run {
    /// Tokens for this run in the doubled layout.
    pub fn tokens(&self) -> Vec<RleToken> {
        match self.len {
            0 => Vec::new(),
            1 => vec![RleToken::Char(self.ch)],
            n => vec![RleToken::Char(self.ch), RleToken::Char(self.ch), RleToken::Count(n)],
        }
    }
}

/// Split `input` into maximal runs of identical characters.
pub fn encode_runs(input: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for ch in input.chars() {
        match runs.last_mut() {
            Some(run) if run.ch == ch => run.len += 1,
            _ => runs.push(Run { ch, len: 1 }),
        }
    }
    runs
}

/// Expand runs back into a string.
///
/// Fails with [`PreconditionError::OutputTooLarge`] when a run (counted by
/// its index) cannot be allocated.
pub fn decode_runs(runs: &[Run]) -> Result<String, PreconditionError> {
    let mut out = String::new();
    for (position, run) in runs.iter().enumerate() {
        push_repeated(&mut out, run.ch, run.len, position)?;
    }
    Ok(out)
}

/// Encode `in_string` in the doubled-character layout.
///
/// ```
/// use pbt_toolkit::{run_length_encoder, RleToken::{Char, Count}};
///
/// assert_eq!(
///     run_length_encoder("aaaaabbcbc"),
///     vec![Char('a'), Char('a'), Count(5), Char('b'), Char('b'), Count(2),
///          Char('c'), Char('b'), Char('c')],
/// );
/// ```
pub fn run_length_encoder(in_string: &str) -> Vec<RleToken> {
    let tokens: Vec<RleToken> = encode_runs(in_string).iter().flat_map(Run::tokens).collect();
    crate::contracts::check_rle_stream_canonical(&tokens);
    tokens
}

/// Decode a doubled-layout token stream.
///
/// Characters are appended as-is. A count appends the token before it
/// `count - 2` more times. A count with no character before it, or a count
/// below 2, is a malformed stream. A count too large to allocate is
/// [`PreconditionError::OutputTooLarge`].
pub fn run_length_decoder(in_list: &[RleToken]) -> Result<String, PreconditionError> {
    let mut out = String::new();
    let mut previous: Option<char> = None;

    for (position, token) in in_list.iter().enumerate() {
        match *token {
            RleToken::Char(ch) => {
                out.push(ch);
                previous = Some(ch);
            }
            RleToken::Count(count) => {
                let ch = previous.ok_or(PreconditionError::CountWithoutCharacter { position })?;
                if count < 2 {
                    return Err(PreconditionError::CountTooSmall { position, count });
                }
                push_repeated(&mut out, ch, count - 2, position)?;
                previous = None;
            }
        }
    }

    Ok(out)
}

/// Recover [`Run`]s from a doubled-layout token stream.
///
/// Accepts the same token grammar as [`run_length_decoder`] and describes the
/// same string. Adjacent pieces of the same character are merged, so the
/// result is the canonical run list of the decoded string. Nothing is
/// expanded, so only a merged run longer than `usize::MAX` is too large.
pub fn runs_from_tokens(tokens: &[RleToken]) -> Result<Vec<Run>, PreconditionError> {
    let mut runs: Vec<Run> = Vec::new();
    let mut previous: Option<char> = None;

    for (position, token) in tokens.iter().enumerate() {
        match *token {
            RleToken::Char(ch) => {
                extend_runs(&mut runs, ch, 1, position)?;
                previous = Some(ch);
            }
            RleToken::Count(count) => {
                let ch = previous.ok_or(PreconditionError::CountWithoutCharacter { position })?;
                if count < 2 {
                    return Err(PreconditionError::CountTooSmall { position, count });
                }
                extend_runs(&mut runs, ch, count - 2, position)?;
                previous = None;
            }
        }
    }

    Ok(runs)
}

fn extend_runs(
    runs: &mut Vec<Run>,
    ch: char,
    len: usize,
    position: usize,
) -> Result<(), PreconditionError> {
    if len == 0 {
        return Ok(());
    }
    match runs.last_mut() {
        Some(run) if run.ch == ch => {
            run.len = run
                .len
                .checked_add(len)
                .ok_or(PreconditionError::OutputTooLarge { position })?;
        }
        _ => runs.push(Run { ch, len }),
    }
    Ok(())
}

/// Append `n` copies of `ch`, reserving first so a huge count is an error
/// instead of an allocation panic.
fn push_repeated(
    out: &mut String,
    ch: char,
    n: usize,
    position: usize,
) -> Result<(), PreconditionError> {
    let too_large = || PreconditionError::OutputTooLarge { position };
    let bytes = n.checked_mul(ch.len_utf8()).ok_or_else(too_large)?;
    out.try_reserve(bytes).map_err(|_| too_large())?;
    out.extend(std::iter::repeat(ch).take(n));
    Ok(())
}
