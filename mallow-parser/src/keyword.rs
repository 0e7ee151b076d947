// mallow-parser - Keyword type
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Keywords are self-evaluating identifiers, printed with a leading colon.
//!
//! Keywords live in their own namespace: the keyword `:x` never equals the
//! symbol `x` or the string `"x"`.

use std::fmt;
use std::rc::Rc;

/// A keyword. The stored name excludes the leading `:`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keyword {
    name: Rc<str>,
}

impl Keyword {
    /// Create a keyword from its name (without the colon).
    pub fn new(name: &str) -> Self {
        Keyword { name: name.into() }
    }

    /// Get the keyword's name (without the colon).
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name)
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyword(:{})", self.name)
    }
}
