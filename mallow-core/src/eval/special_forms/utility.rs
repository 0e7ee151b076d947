// mallow-core - Utility special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Quoting, expansion and timing special forms.

use std::time::Instant;

use mallow_parser::MallowVal;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::{Step, eval, macroexpand, quasiquote};
use crate::interpreter::Interpreter;

/// (quote form) - return form unevaluated
pub fn eval_quote(args: &[MallowVal]) -> Result<Step> {
    if args.len() != 1 {
        return Err(Error::syntax("quote", "requires exactly 1 argument"));
    }
    Ok(Step::Done(args[0].clone()))
}

/// (quasiquote form) - expand the template, then evaluate the expansion
pub fn eval_quasiquote(args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() != 1 {
        return Err(Error::syntax("quasiquote", "requires exactly 1 argument"));
    }
    Ok(Step::TailCall(quasiquote(&args[0]), env.clone()))
}

/// (quasiquoteexpand form) - the expansion without evaluating it
pub fn eval_quasiquoteexpand(args: &[MallowVal]) -> Result<Step> {
    if args.len() != 1 {
        return Err(Error::syntax(
            "quasiquoteexpand",
            "requires exactly 1 argument",
        ));
    }
    Ok(Step::Done(quasiquote(&args[0])))
}

/// (macroexpand form) - the full macro expansion without evaluating it
pub fn eval_macroexpand(interp: &Interpreter, args: &[MallowVal]) -> Result<Step> {
    if args.len() != 1 {
        return Err(Error::syntax("macroexpand", "requires exactly 1 argument"));
    }
    Ok(Step::Done(macroexpand(interp, &args[0])?))
}

/// (time expr) - evaluate expr and report how long it took
pub fn eval_time(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() != 1 {
        return Err(Error::syntax("time", "requires exactly 1 expression"));
    }

    let start = Instant::now();
    eval(interp, &args[0], env)?;
    let elapsed = start.elapsed();

    Ok(Step::Done(MallowVal::string(format!(
        "Elapsed time: {} microseconds.",
        elapsed.as_micros()
    ))))
}
