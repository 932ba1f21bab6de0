// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best-effort names for values.
//!
//! Some things know their fully qualified path, some only a short name, some
//! can only print a debug representation, and some offer nothing at all.
//! [`Named`] exposes those three capabilities as optional methods and
//! [`safe_name`] walks them in priority order, ending at [`UNKNOWN_NAME`].
//!
//! ```text
//! qualified_name ──None──▶ simple_name ──None──▶ repr (if allowed) ──None──▶ "<unknown>"
//! ```

use std::borrow::Cow;
use std::fmt;

/// Returned by [`safe_name`] when nothing better is available.
pub const UNKNOWN_NAME: &str = "<unknown>";

/// Optional naming capabilities. Every method defaults to `None`.
pub trait Named {
    /// Fully qualified name, e.g. `alloc::vec::Vec<i32>`.
    fn qualified_name(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Short name, e.g. `Vec<i32>`.
    fn simple_name(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Debug representation.
    fn repr(&self) -> Option<String> {
        None
    }
}

/// Best available name for `obj`, never failing.
///
/// Tries the qualified name, then the simple name, then (when `repr_allowed`)
/// the debug representation, then falls back to `"<unknown>"`.
///
/// ```
/// use pbt_toolkit::{safe_name, Symbol};
///
/// assert_eq!(safe_name(&Symbol::of::<u8>(), true), "u8");
/// assert_eq!(safe_name(&Symbol::value(&42), true), "42");
/// assert_eq!(safe_name(&Symbol::value(&42), false), "<unknown>");
/// ```
pub fn safe_name(obj: &dyn Named, repr_allowed: bool) -> String {
    if let Some(name) = obj.qualified_name() {
        return name.into_owned();
    }
    if let Some(name) = obj.simple_name() {
        return name.into_owned();
    }
    if repr_allowed {
        if let Some(repr) = obj.repr() {
            return repr;
        }
    }
    UNKNOWN_NAME.to_string()
}

/// The closed set of things [`safe_name`] is asked about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A path-addressable item: a type, function or module.
    Item { path: String, name: String },
    /// Something with only a short name.
    Named(String),
    /// A value that can only describe itself.
    Value(String),
    /// Nothing to go on.
    Opaque,
}

impl Symbol {
    /// Symbol for the type `T`.
    pub fn of<T: ?Sized>() -> Self {
        Symbol::from_path(std::any::type_name::<T>())
    }

    /// Symbol for a path such as `core::option::Option<u8>`.
    ///
    /// The short name drops the module prefix but keeps generic arguments:
    /// `core::option::Option<u8>` becomes `Option<u8>`.
    pub fn from_path(path: &str) -> Self {
        Symbol::Item {
            path: path.to_string(),
            name: short_name(path).to_string(),
        }
    }

    /// Symbol for a value, described by its `Debug` output.
    pub fn value<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Symbol::Value(format!("{:?}", value))
    }
}

impl Named for Symbol {
    fn qualified_name(&self) -> Option<Cow<'_, str>> {
        match self {
            Symbol::Item { path, .. } => Some(Cow::Borrowed(path)),
            _ => None,
        }
    }

    fn simple_name(&self) -> Option<Cow<'_, str>> {
        match self {
            Symbol::Item { name, .. } | Symbol::Named(name) => Some(Cow::Borrowed(name)),
            _ => None,
        }
    }

    fn repr(&self) -> Option<String> {
        match self {
            Symbol::Value(repr) => Some(repr.clone()),
            _ => None,
        }
    }
}

/// Last path segment before any generic arguments, plus those arguments.
fn short_name(path: &str) -> &str {
    let generics_at = path.find('<').unwrap_or(path.len());
    match path[..generics_at].rfind("::") {
        Some(sep) => &path[sep + 2..],
        None => path,
    }
}
