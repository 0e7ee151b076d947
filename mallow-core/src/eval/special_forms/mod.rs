// mallow-core - Special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Special forms for the Mallow evaluator.
//!
//! Each form receives its unevaluated arguments and returns a [`Step`]:
//! forms with a tail position hand it back to the trampoline instead of
//! evaluating it themselves.
//!
//! [`Step`]: crate::eval::Step

pub mod binding;
pub mod control;
pub mod definitions;
pub mod utility;

pub use binding::{eval_if_let, eval_let};
pub use control::{eval_cond, eval_do, eval_if};
pub use definitions::{eval_def, eval_defmacro, eval_fn};
pub use utility::{
    eval_macroexpand, eval_quasiquote, eval_quasiquoteexpand, eval_quote, eval_time,
};
