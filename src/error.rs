// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Precondition errors.
//!
//! Every function in this crate is pure. The only way one of them refuses to
//! produce a value is a caller handing it input outside its documented
//! domain: a negative pad width, a token stream with a count in the wrong
//! place, point sets of different dimension. Those come back as a
//! [`PreconditionError`] instead of a panic, and nothing is retried.
//!
//! Where the type system can carry the precondition (`usize` widths, `char`
//! fill characters) the typed entry point has no error path at all.

use std::fmt;

/// A caller violated a documented input constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// `leftpad` width was negative.
    NegativeWidth { width: i64 },
    /// `leftpad` fill was not exactly one character.
    FillNotSingleChar { chars: usize },
    /// A count token had no character token immediately before it.
    CountWithoutCharacter { position: usize },
    /// A count token was below 2; counts only describe runs of two or more.
    CountTooSmall { position: usize, count: usize },
    /// Expanding the run at `position` would not fit in memory.
    OutputTooLarge { position: usize },
    /// Flat matrix data does not match the requested shape.
    ShapeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
    /// A row of a point set has a different length than the others.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Point sets passed to `pairwise_dists` have different dimensions.
    DimensionMismatch { x_dim: usize, y_dim: usize },
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreconditionError::NegativeWidth { width } => {
                write!(f, "width must be non-negative, got {}", width)
            }
            PreconditionError::FillNotSingleChar { chars } => {
                write!(f, "fill must be exactly one character, got {}", chars)
            }
            PreconditionError::CountWithoutCharacter { position } => {
                write!(
                    f,
                    "count token at position {} has no preceding character",
                    position
                )
            }
            PreconditionError::CountTooSmall { position, count } => {
                write!(
                    f,
                    "count token at position {} is {}, runs are at least 2",
                    position, count
                )
            }
            PreconditionError::OutputTooLarge { position } => {
                write!(
                    f,
                    "run at position {} expands past what a string can hold",
                    position
                )
            }
            PreconditionError::ShapeMismatch { rows, cols, len } => {
                match rows.checked_mul(*cols) {
                    Some(needed) => {
                        write!(f, "{} x {} matrix needs {} values, got {}", rows, cols, needed, len)
                    }
                    None => write!(f, "{} x {} matrix is too large, got {} values", rows, cols, len),
                }
            }
            PreconditionError::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "row {} has {} columns, expected {}",
                    row, found, expected
                )
            }
            PreconditionError::DimensionMismatch { x_dim, y_dim } => {
                write!(
                    f,
                    "point dimensions differ: x has {}, y has {}",
                    x_dim, y_dim
                )
            }
        }
    }
}

impl std::error::Error for PreconditionError {}
