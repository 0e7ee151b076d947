// mallow-parser - Value types for Mallow
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Mallow.
//!
//! `MallowVal` is the closed set of runtime values. Code and data share this
//! representation: the reader produces `MallowVal` trees and the evaluator
//! consumes them.
//!
//! Every variant except `Atom` is immutable. Values are reference counted and
//! cloning is cheap: sequences use persistent vectors with structural sharing.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use im::{OrdMap, Vector};

use crate::keyword::Keyword;
use crate::symbol::Symbol;

/// Hash map storage: entries are keyed by the readable printed form of the
/// key, and keep the original key value alongside the mapped value.
pub type KeyedMap = OrdMap<Rc<str>, (MallowVal, MallowVal)>;

/// The core value type for Mallow.
#[derive(Clone)]
pub enum MallowVal {
    /// The nil value
    Nil,
    /// Boolean true or false
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// Immutable string (stored unescaped)
    String(Rc<str>),
    /// Symbol
    Symbol(Symbol),
    /// Keyword (self-evaluating)
    Keyword(Keyword),
    /// List, printed with parentheses
    List(Vector<MallowVal>),
    /// Vector, printed with brackets
    Vector(Vector<MallowVal>),
    /// Dotted pair built by `cons` onto a non-sequence
    Pair(Rc<(MallowVal, MallowVal)>),
    /// String-keyed hash map
    HashMap(KeyedMap),
    /// Native (Rust) function
    Builtin(MallowBuiltin),
    /// User-defined function or macro
    Closure(Rc<MallowClosure>),
    /// Mutable cell
    Atom(MallowAtom),
}

// ============================================================================
// Function Types
// ============================================================================

/// A validated binding pattern: fixed names followed by an optional rest name.
///
/// `[a b & more]` has fixed names `a`, `b` and rest name `more`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BindingPattern {
    /// Names bound positionally
    pub fixed: Vec<Symbol>,
    /// Name bound to the remaining values, if variadic
    pub rest: Option<Symbol>,
}

impl BindingPattern {
    /// Create a pattern from its parts.
    pub fn new(fixed: Vec<Symbol>, rest: Option<Symbol>) -> Self {
        BindingPattern { fixed, rest }
    }

    /// Whether this pattern ends in `& rest`.
    pub fn is_variadic(&self) -> bool {
        self.rest.is_some()
    }

    /// Minimum number of values this pattern accepts.
    pub fn min_arity(&self) -> usize {
        self.fixed.len()
    }

    /// Check if this pattern accepts the given number of values.
    pub fn accepts(&self, count: usize) -> bool {
        if self.is_variadic() {
            count >= self.fixed.len()
        } else {
            count == self.fixed.len()
        }
    }
}

/// A user-defined function (closure).
///
/// The environment is type-erased to avoid a dependency on mallow-core, where
/// the environment type lives.
#[derive(Clone)]
pub struct MallowClosure {
    /// Display name, assigned when an anonymous closure is first bound by `def!`
    pub name: Option<Rc<str>>,
    /// Parameter pattern
    pub pattern: BindingPattern,
    /// Body form
    pub body: MallowVal,
    /// Captured defining environment (type-erased)
    pub env: Rc<dyn Any>,
    /// Whether this closure is a macro
    pub is_macro: bool,
}

impl MallowClosure {
    /// Create a new anonymous, non-macro closure.
    pub fn new(pattern: BindingPattern, body: MallowVal, env: Rc<dyn Any>) -> Self {
        MallowClosure {
            name: None,
            pattern,
            body,
            env,
            is_macro: false,
        }
    }

    /// Return a copy of this closure carrying the given display name.
    #[must_use]
    pub fn named(&self, name: &str) -> Self {
        MallowClosure {
            name: Some(name.into()),
            ..self.clone()
        }
    }

    /// Return a copy of this closure flagged as a macro.
    #[must_use]
    pub fn as_macro(&self) -> Self {
        MallowClosure {
            is_macro: true,
            ..self.clone()
        }
    }

    /// The name used when printing this closure, if it has one.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Debug for MallowClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_name() {
            Some(name) => write!(f, "#<closure {}>", name),
            None => write!(f, "#<closure>"),
        }
    }
}

/// A native (Rust) function.
#[derive(Clone)]
pub struct MallowBuiltin {
    /// Function name for display
    pub name: &'static str,
    /// The actual function (type-erased)
    func: Rc<dyn Any>,
}

impl MallowBuiltin {
    /// Create a new builtin with a type-erased function.
    pub fn new(name: &'static str, func: Rc<dyn Any>) -> Self {
        MallowBuiltin { name, func }
    }

    /// Get the function name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the inner function reference.
    pub fn func(&self) -> &Rc<dyn Any> {
        &self.func
    }
}

impl fmt::Debug for MallowBuiltin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<builtin {}>", self.name)
    }
}

// ============================================================================
// Atom Type
// ============================================================================

/// A mutable cell. The only value whose contents change after construction.
#[derive(Clone)]
pub struct MallowAtom {
    value: Rc<RefCell<MallowVal>>,
}

impl MallowAtom {
    /// Create an atom holding an initial value.
    pub fn new(value: MallowVal) -> Self {
        MallowAtom {
            value: Rc::new(RefCell::new(value)),
        }
    }

    /// Get the current value.
    pub fn deref(&self) -> MallowVal {
        self.value.borrow().clone()
    }

    /// Replace the current value, returning the new value.
    pub fn reset(&self, new_val: MallowVal) -> MallowVal {
        *self.value.borrow_mut() = new_val.clone();
        new_val
    }

    /// Whether two handles refer to the same cell.
    pub fn ptr_eq(&self, other: &MallowAtom) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }

    /// Address of the shared cell, stable for the cell's lifetime.
    pub fn as_ptr(&self) -> *const RefCell<MallowVal> {
        Rc::as_ptr(&self.value)
    }
}

impl fmt::Debug for MallowAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<atom>")
    }
}

// ============================================================================
// Constructors and accessors
// ============================================================================

impl MallowVal {
    /// Create a nil value
    pub fn nil() -> Self {
        MallowVal::Nil
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        MallowVal::Bool(b)
    }

    /// Create an integer value
    pub fn int(n: i64) -> Self {
        MallowVal::Int(n)
    }

    /// Create a string value
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        MallowVal::String(s.into())
    }

    /// Create a symbol value
    pub fn symbol(name: &str) -> Self {
        MallowVal::Symbol(Symbol::new(name))
    }

    /// Create a keyword value from its name (without the colon)
    pub fn keyword(name: &str) -> Self {
        MallowVal::Keyword(Keyword::new(name))
    }

    /// Create an empty list
    pub fn empty_list() -> Self {
        MallowVal::List(Vector::new())
    }

    /// Create a list from elements
    pub fn list(elements: Vec<MallowVal>) -> Self {
        MallowVal::List(elements.into_iter().collect())
    }

    /// Create a vector from elements
    pub fn vector(elements: Vec<MallowVal>) -> Self {
        MallowVal::Vector(elements.into_iter().collect())
    }

    /// Create a dotted pair
    pub fn pair(head: MallowVal, tail: MallowVal) -> Self {
        MallowVal::Pair(Rc::new((head, tail)))
    }

    /// Create a hash map from key-value pairs. Later duplicates win.
    pub fn hash_map(pairs: Vec<(MallowVal, MallowVal)>) -> Self {
        let mut map = KeyedMap::new();
        for (k, v) in pairs {
            map.insert(k.hash_key(), (k, v));
        }
        MallowVal::HashMap(map)
    }

    /// Create an atom holding a value
    pub fn atom(value: MallowVal) -> Self {
        MallowVal::Atom(MallowAtom::new(value))
    }

    /// Wrap a closure
    pub fn closure(closure: MallowClosure) -> Self {
        MallowVal::Closure(Rc::new(closure))
    }

    /// Check if this value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, MallowVal::Nil)
    }

    /// Check if this value is truthy (not nil and not false)
    pub fn is_truthy(&self) -> bool {
        !matches!(self, MallowVal::Nil | MallowVal::Bool(false))
    }

    /// Check if this value is the symbol with the given name
    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self, MallowVal::Symbol(sym) if sym.name() == name)
    }

    /// Check if this value is a macro closure
    pub fn is_macro(&self) -> bool {
        matches!(self, MallowVal::Closure(c) if c.is_macro)
    }

    /// Elements of a List or Vector, or None for any other value
    pub fn as_seq(&self) -> Option<&Vector<MallowVal>> {
        match self {
            MallowVal::List(items) | MallowVal::Vector(items) => Some(items),
            _ => None,
        }
    }

    /// The key under which this value is stored in a hash map.
    pub fn hash_key(&self) -> Rc<str> {
        self.pr_str(true).into()
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            MallowVal::Nil => "nil",
            MallowVal::Bool(_) => "bool",
            MallowVal::Int(_) => "int",
            MallowVal::String(_) => "string",
            MallowVal::Symbol(_) => "symbol",
            MallowVal::Keyword(_) => "keyword",
            MallowVal::List(_) => "list",
            MallowVal::Vector(_) => "vector",
            MallowVal::Pair(_) => "pair",
            MallowVal::HashMap(_) => "hash-map",
            MallowVal::Builtin(_) => "fn",
            MallowVal::Closure(c) if c.is_macro => "macro",
            MallowVal::Closure(_) => "fn",
            MallowVal::Atom(_) => "atom",
        }
    }
}

// ============================================================================
// Equality
// ============================================================================

impl PartialEq for MallowVal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MallowVal::Nil, MallowVal::Nil) => true,
            (MallowVal::Bool(a), MallowVal::Bool(b)) => a == b,
            (MallowVal::Int(a), MallowVal::Int(b)) => a == b,
            (MallowVal::String(a), MallowVal::String(b)) => a == b,
            (MallowVal::Symbol(a), MallowVal::Symbol(b)) => a == b,
            (MallowVal::Keyword(a), MallowVal::Keyword(b)) => a == b,
            // Lists and vectors are interchangeable for equality
            (
                MallowVal::List(a) | MallowVal::Vector(a),
                MallowVal::List(b) | MallowVal::Vector(b),
            ) => a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y),
            (MallowVal::Atom(a), MallowVal::Atom(b)) => a.ptr_eq(b),
            (MallowVal::Pair(_), MallowVal::Pair(_))
            | (MallowVal::HashMap(_), MallowVal::HashMap(_))
            | (MallowVal::Builtin(_), MallowVal::Builtin(_))
            | (MallowVal::Closure(_), MallowVal::Closure(_)) => {
                self.pr_str(true) == other.pr_str(true)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for MallowVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
