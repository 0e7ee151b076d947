// mallow-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use mallow_parser::{MallowVal, Symbol};

use crate::error::{Error, Result};

/// A lexical environment for variable bindings.
///
/// Environments form a chain through parent references, enabling
/// lexical scoping. Frames are shared: closures keep a handle to the
/// frame they were created in rather than a copy of it.
///
/// # Examples
///
/// ```
/// use mallow_core::Env;
/// use mallow_parser::{MallowVal, Symbol};
///
/// let env = Env::new();
/// env.define(Symbol::new("x"), MallowVal::int(42));
///
/// let child = env.child();
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), MallowVal::int(42));
///
/// child.define(Symbol::new("x"), MallowVal::int(100));
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), MallowVal::int(100));
/// assert_eq!(env.lookup(&Symbol::new("x")).unwrap(), MallowVal::int(42));
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<Symbol, MallowVal>,
    parent: Option<Env>,
}

impl Env {
    /// Create a new root environment with no parent.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: None,
            })),
        }
    }

    /// Create a child environment with this environment as parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Create a child frame binding `names` to `values` pairwise.
    ///
    /// Fails with an arity mismatch unless both have the same length.
    pub fn new_frame(parent: &Env, names: &[Symbol], values: Vec<MallowVal>) -> Result<Env> {
        if names.len() != values.len() {
            return Err(Error::arity(names.len(), values.len()));
        }
        let frame = parent.child();
        {
            let mut inner = frame.inner.borrow_mut();
            for (name, value) in names.iter().zip(values) {
                inner.bindings.insert(name.clone(), value);
            }
        }
        Ok(frame)
    }

    /// Define a binding in this environment (not parent).
    pub fn define(&self, sym: Symbol, val: MallowVal) {
        self.inner.borrow_mut().bindings.insert(sym, val);
    }

    /// Look up a symbol in this environment or parent chain.
    /// Uses iterative traversal to avoid stack overflow on deep environments.
    pub fn lookup(&self, sym: &Symbol) -> Result<MallowVal> {
        self.get(sym)
            .ok_or_else(|| Error::UnboundSymbol(sym.clone()))
    }

    /// Look up a symbol, returning None when it is unbound.
    pub fn get(&self, sym: &Symbol) -> Option<MallowVal> {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if let Some(val) = inner.bindings.get(sym) {
                return Some(val.clone());
            }
            let parent = inner.parent.clone();
            drop(inner);
            current = parent?;
        }
    }

    /// Check if a symbol is defined in this environment or parent chain.
    #[must_use]
    pub fn is_defined(&self, sym: &Symbol) -> bool {
        self.get(sym).is_some()
    }

    /// Remove every binding from this frame.
    ///
    /// Closures stored in a frame hold the frame itself, so clearing it is
    /// what releases them once the owner is done with the environment.
    pub fn clear(&self) {
        let bindings = std::mem::take(&mut self.inner.borrow_mut().bindings);
        drop(bindings);
    }

    /// Number of bindings in this frame (not parents).
    pub fn len(&self) -> usize {
        self.inner.borrow().bindings.len()
    }

    /// Whether this frame has no bindings of its own.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
