// mallow-core - Runtime and evaluator for the Mallow language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # mallow-core
//!
//! Runtime and evaluator for the Mallow language.
//! Provides a trampolined interpreter for `MallowVal` expressions, the
//! lexical environment model and the builtin function library.

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod interpreter;

pub use builtins::{EnvExt, register_builtins};
pub use env::Env;
pub use error::{AritySpec, Error, Result};
pub use eval::{Step, apply, eval, is_macro_call, macroexpand, make_native_fn, quasiquote};
pub use interpreter::Interpreter;

// Re-export parser types for convenience
pub use mallow_parser::{Keyword, MallowVal, Symbol};
