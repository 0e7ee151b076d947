// mallow-parser - Symbol type
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are the identifiers of Mallow source code.
//!
//! A symbol is a cheaply clonable, reference-counted name. There is no global
//! interner: two symbols are equal when their names are equal, so symbols
//! created by independent interpreters never share state.
//!
//! Two names are reserved by the evaluator: `&` marks the variadic tail of a
//! binding pattern, and `...` marks an argument to be spread into a call.

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

/// The variadic marker inside binding patterns.
pub const VARIADIC_MARKER: &str = "&";

/// The spread marker inside call argument lists.
pub const SPREAD_MARKER: &str = "...";

/// A symbol naming a binding.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    name: Rc<str>,
}

impl Symbol {
    /// Create a new symbol.
    pub fn new(name: &str) -> Self {
        Symbol { name: name.into() }
    }

    /// Get the symbol's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the `&` variadic marker.
    pub fn is_variadic_marker(&self) -> bool {
        &*self.name == VARIADIC_MARKER
    }

    /// True for the `...` spread marker.
    pub fn is_spread_marker(&self) -> bool {
        &*self.name == SPREAD_MARKER
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.name)
    }
}
