// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the pbt CLI.
//!
//! Results go to stdout as JSON and are never coloured, so they pipe cleanly
//! into `jq`. Diagnostics go to stderr and get a red label when stderr is a
//! terminal. Respects `NO_COLOR` for the purists.

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

/// Check if stderr diagnostics should be coloured (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Apply multiple styles
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Format a fatal error line.
pub fn error_line(message: &str) -> String {
    format!("{} {}", styled(&[BOLD, RED], "error:"), message)
}

/// Format a follow-up hint line.
pub fn hint_line(message: &str) -> String {
    styled(&[DIM], &format!("  hint: {}", message))
}
