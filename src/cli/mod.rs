// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI argument definitions for the pbt binary.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pbt",
    about = "Run the property-tested text, mapping and numeric utilities from the shell",
    version
)]
pub struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the vowels in TEXT
    Vowels {
        text: String,

        /// Count y/Y as a vowel
        #[arg(short = 'y', long)]
        include_y: bool,
    },

    /// Merge two JSON objects of numbers, keeping the larger value per key
    Merge {
        /// First mapping, e.g. '{"a": 1, "b": 2}'
        first: String,

        /// Second mapping, e.g. '{"b": 100, "c": -1}'
        second: String,
    },

    /// Left-pad TEXT to WIDTH characters
    Leftpad {
        text: String,

        /// Minimum output width in characters
        #[arg(short, long, allow_hyphen_values = true)]
        width: i64,

        /// Single fill character
        #[arg(short, long, default_value = " ")]
        fill: String,
    },

    /// Run-length encode or decode
    Rle {
        #[command(subcommand)]
        action: RleAction,
    },

    /// Softmax of a list of numbers
    Softmax {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<f64>,
    },

    /// Pairwise Euclidean distances between two JSON point sets
    Dists {
        /// Rows of the first point set, e.g. '[[0, 0], [1, 1]]'
        x: String,

        /// Rows of the second point set
        y: String,
    },

    /// Best-effort name of a JSON value's type
    Name {
        /// Any JSON value
        value: String,

        /// Do not fall back to the value's debug representation
        #[arg(long)]
        no_repr: bool,
    },
}

#[derive(Subcommand)]
pub enum RleAction {
    /// Encode TEXT as a token stream like ["a","a",5,"b"]
    Encode {
        text: String,

        /// Emit [{"ch":"a","len":5}, ...] runs instead of tokens
        #[arg(long)]
        pairs: bool,
    },

    /// Decode a JSON token stream back into text
    Decode {
        /// Token stream, e.g. '["a","a",5,"b"]'
        tokens: String,
    },
}
