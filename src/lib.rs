//! Small utilities characterized by their properties.
//!
//! A handful of pure functions (vowel counting, max-merging of maps,
//! left-padding, run-length coding, best-effort naming, pairwise distances,
//! softmax) and the invariants that define them. Each function is checked
//! three ways: debug-build contracts on every call (`contracts`), proptest
//! suites on generated inputs (`tests/property`), and cargo-fuzz targets on
//! arbitrary bytes (`fuzz/`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐
//! │   text/     │  │  mapping.rs  │  │  numeric/    │  │  naming.rs  │
//! │ count_vowels│  │ merge_max_   │  │ softmax,     │  │ safe_name,  │
//! │ leftpad, rle│  │ mappings     │  │ pairwise_dists│ │ Symbol      │
//! └──────┬──────┘  └──────┬───────┘  └──────┬───────┘  └─────────────┘
//!        │                │                 │
//!        ▼                ▼                 ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                     │
//! │   (debug_assert! postconditions for every call)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Properties
//!
//! | Function               | Key Properties                               |
//! |------------------------|----------------------------------------------|
//! | `count_vowels`         | bounded, linear under repetition, case/order invariant |
//! | `merge_max_mappings`   | key union, fixed point, values from inputs   |
//! | `leftpad`              | margin all fill, suffix is input             |
//! | `run_length_*`         | `decode(encode(s)) == s`                     |
//! | `softmax`              | in [0, 1], sums to 1, shift invariant        |
//! | `pairwise_dists`       | translation invariant, scale linear          |
//! | `safe_name`            | total, priority-ordered fallback             |
//!
//! # Usage
//!
//! ```
//! use pbt_toolkit::{count_vowels, leftpad, run_length_decoder, run_length_encoder};
//!
//! assert_eq!(count_vowels("happy", true), 2);
//! assert_eq!(leftpad("cat", 5, 'Z'), "ZZcat");
//!
//! let tokens = run_length_encoder("aaaaabbcbc");
//! assert_eq!(run_length_decoder(&tokens).unwrap(), "aaaaabbcbc");
//! ```

// Module declarations
pub mod contracts;
mod error;
mod mapping;
mod naming;
pub mod numeric;
pub mod testing;
pub mod text;

// Re-exports for public API
pub use error::PreconditionError;
pub use mapping::{merge_max_mappings, MappingValue};
pub use naming::{safe_name, Named, Symbol, UNKNOWN_NAME};
pub use numeric::{pairwise_dists, softmax, Matrix};
pub use text::{
    count_vowels, decode_runs, encode_runs, leftpad, run_length_decoder, run_length_encoder,
    runs_from_tokens, try_leftpad, RleToken, Run,
};
