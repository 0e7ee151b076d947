// mallow-parser - Printer for Mallow values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Readable and display printing of `MallowVal`.
//!
//! The readable form round-trips through the reader: strings are quoted and
//! escaped. The display form writes strings raw and is used by `str` and
//! `println`. Elements of collections are printed in the same mode as their
//! container.

use std::cell::RefCell;
use std::fmt;

use crate::value::MallowVal;

/// A value paired with a print mode, for use with `{}` formatting.
pub struct Printed<'a> {
    value: &'a MallowVal,
    readable: bool,
}

impl MallowVal {
    /// Print this value to a string in readable or display mode.
    pub fn pr_str(&self, readable: bool) -> String {
        Printed {
            value: self,
            readable,
        }
        .to_string()
    }

    /// Format this value in display mode (strings unquoted).
    pub fn display(&self) -> Printed<'_> {
        Printed {
            value: self,
            readable: false,
        }
    }
}

/// `{}` on a `MallowVal` prints its readable form.
impl fmt::Display for MallowVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Writer::new(f, true).value(self)
    }
}

impl fmt::Display for Printed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Writer::new(f, self.readable).value(self.value)
    }
}

/// Tracks the atoms currently being printed so a cell that contains itself
/// prints as `(atom ...)` instead of recursing forever.
struct Writer<'f, 'a> {
    f: &'f mut fmt::Formatter<'a>,
    readable: bool,
    open_atoms: Vec<*const RefCell<MallowVal>>,
}

impl<'f, 'a> Writer<'f, 'a> {
    fn new(f: &'f mut fmt::Formatter<'a>, readable: bool) -> Self {
        Writer {
            f,
            readable,
            open_atoms: Vec::new(),
        }
    }

    fn value(&mut self, value: &MallowVal) -> fmt::Result {
        match value {
            MallowVal::Nil => write!(self.f, "nil"),
            MallowVal::Bool(b) => write!(self.f, "{}", b),
            MallowVal::Int(n) => write!(self.f, "{}", n),
            MallowVal::String(s) if self.readable => write!(self.f, "\"{}\"", escape_string(s)),
            MallowVal::String(s) => write!(self.f, "{}", s),
            MallowVal::Symbol(sym) => write!(self.f, "{}", sym),
            MallowVal::Keyword(kw) => write!(self.f, "{}", kw),
            MallowVal::List(items) => self.seq(items.iter(), "(", ")"),
            MallowVal::Vector(items) => self.seq(items.iter(), "[", "]"),
            MallowVal::Pair(pair) => {
                write!(self.f, "(")?;
                self.value(&pair.0)?;
                write!(self.f, " . ")?;
                self.value(&pair.1)?;
                write!(self.f, ")")
            }
            MallowVal::HashMap(map) => {
                write!(self.f, "{{")?;
                for (i, (key, val)) in map.values().enumerate() {
                    if i > 0 {
                        write!(self.f, " ")?;
                    }
                    self.value(key)?;
                    write!(self.f, " ")?;
                    self.value(val)?;
                }
                write!(self.f, "}}")
            }
            MallowVal::Builtin(b) => write!(self.f, "#<builtin {}>", b.name),
            MallowVal::Closure(c) => {
                let kind = if c.is_macro { "macro" } else { "fn" };
                match c.display_name() {
                    Some(name) => write!(self.f, "#<{} {}>", kind, name),
                    None => write!(self.f, "#<{}>", kind),
                }
            }
            MallowVal::Atom(a) => {
                let cell = a.as_ptr();
                if self.open_atoms.contains(&cell) {
                    return write!(self.f, "(atom ...)");
                }
                self.open_atoms.push(cell);
                write!(self.f, "(atom ")?;
                self.value(&a.deref())?;
                self.open_atoms.pop();
                write!(self.f, ")")
            }
        }
    }

    fn seq<'v>(
        &mut self,
        items: impl Iterator<Item = &'v MallowVal>,
        open: &str,
        close: &str,
    ) -> fmt::Result {
        write!(self.f, "{}", open)?;
        for (i, item) in items.enumerate() {
            if i > 0 {
                write!(self.f, " ")?;
            }
            self.value(item)?;
        }
        write!(self.f, "{}", close)
    }
}

/// Escape a string for its readable form.
pub fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}
