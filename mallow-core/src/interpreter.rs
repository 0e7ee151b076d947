// mallow-core - Interpreter context
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The interpreter context.
//!
//! An `Interpreter` owns the global environment. It is passed to every
//! builtin so that builtins such as `swap!`, `apply` and `eval` can reenter
//! the evaluator. Independent interpreters share no state.

use std::path::Path;

use mallow_parser::{MallowVal, Reader, Symbol};

use crate::builtins::register_builtins;
use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval;

/// Embedded prelude source (definitions written in Mallow itself).
const PRELUDE: &str = include_str!("prelude.mal");

/// A Mallow interpreter: a global environment with builtins and the prelude.
///
/// # Examples
///
/// ```
/// use mallow_core::Interpreter;
///
/// let interp = Interpreter::new().unwrap();
/// assert_eq!(interp.rep("(+ 1 2)").unwrap(), "3");
/// ```
pub struct Interpreter {
    global: Env,
}

impl Interpreter {
    /// Create an interpreter with builtins registered and the prelude loaded.
    pub fn new() -> Result<Self> {
        let interp = Interpreter::bare();
        register_builtins(&interp.global);
        interp.read_eval(PRELUDE)?;
        log::debug!(
            "interpreter ready with {} global bindings",
            interp.global.len()
        );
        Ok(interp)
    }

    /// Create an interpreter with an empty global environment.
    pub fn bare() -> Self {
        Interpreter { global: Env::new() }
    }

    /// The global environment.
    pub fn global(&self) -> &Env {
        &self.global
    }

    /// Bind a name in the global environment.
    pub fn define(&self, name: &str, val: MallowVal) {
        self.global.define(Symbol::new(name), val);
    }

    /// Evaluate a form in the global environment.
    pub fn eval(&self, ast: &MallowVal) -> Result<MallowVal> {
        eval::eval(self, ast, &self.global)
    }

    /// Evaluate a form in the given environment.
    pub fn eval_in(&self, ast: &MallowVal, env: &Env) -> Result<MallowVal> {
        eval::eval(self, ast, env)
    }

    /// Apply a callable to already-evaluated arguments.
    pub fn apply(&self, func: &MallowVal, args: &[MallowVal]) -> Result<MallowVal> {
        eval::apply(self, func, args)
    }

    /// Fully macro-expand a form without evaluating it.
    pub fn macroexpand(&self, form: &MallowVal) -> Result<MallowVal> {
        eval::macroexpand(self, form)
    }

    /// Read and evaluate every form in `source`, returning the last value.
    ///
    /// Source containing no forms evaluates to nil.
    pub fn read_eval(&self, source: &str) -> Result<MallowVal> {
        let mut reader = Reader::new(source);
        let mut result = MallowVal::Nil;
        while let Some(form) = reader.next_form()? {
            result = self.eval(&form)?;
        }
        Ok(result)
    }

    /// Read, evaluate and print one line, as the REPL does.
    ///
    /// A line holding no form (blank or only a comment) prints as "".
    pub fn rep(&self, line: &str) -> Result<String> {
        let mut reader = Reader::new(line);
        let mut printed = String::new();
        while let Some(form) = reader.next_form()? {
            printed = self.eval(&form)?.pr_str(true);
        }
        Ok(printed)
    }

    /// Load and evaluate a source file through the `load-file` definition.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<MallowVal> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::runtime(format!("Path is not valid UTF-8: {}", path.display())))?;
        log::debug!("loading file {}", path_str);

        let load = self.global.lookup(&Symbol::new("load-file"))?;
        self.apply(&load, &[MallowVal::string(path_str)])
    }
}

impl Drop for Interpreter {
    fn drop(&mut self) {
        log::debug!("releasing {} global bindings", self.global.len());
        self.global.clear();
    }
}
