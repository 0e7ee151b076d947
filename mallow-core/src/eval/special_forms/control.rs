// mallow-core - Control flow special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Control flow special forms: if, cond, do.

use mallow_parser::MallowVal;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::{Step, eval};
use crate::interpreter::Interpreter;

/// (if test then else?) - conditional evaluation
pub fn eval_if(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() < 2 || args.len() > 3 {
        return Err(Error::syntax("if", "requires 2 or 3 arguments"));
    }

    let test = eval(interp, &args[0], env)?;

    if test.is_truthy() {
        Ok(Step::TailCall(args[1].clone(), env.clone()))
    } else if args.len() == 3 {
        Ok(Step::TailCall(args[2].clone(), env.clone()))
    } else {
        Ok(Step::Done(MallowVal::Nil))
    }
}

/// (cond [test body] ...) - multi-way conditional
///
/// The body of the first clause whose test is truthy is evaluated in tail
/// position. No matching clause yields nil.
pub fn eval_cond(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.is_empty() {
        return Err(Error::syntax("cond", "requires at least one clause"));
    }

    for clause in args {
        let pair = match clause.as_seq() {
            Some(items) if items.len() == 2 => items,
            _ => {
                return Err(Error::syntax(
                    "cond",
                    format!("each clause must be a [test body] pair, got {}", clause),
                ));
            }
        };

        if eval(interp, &pair[0], env)?.is_truthy() {
            return Ok(Step::TailCall(pair[1].clone(), env.clone()));
        }
    }

    Ok(Step::Done(MallowVal::Nil))
}

/// (do exprs*) - evaluate expressions in sequence, the last in tail position
pub fn eval_do(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    let Some((last, init)) = args.split_last() else {
        return Ok(Step::Done(MallowVal::Nil));
    };
    for expr in init {
        eval(interp, expr, env)?;
    }
    Ok(Step::TailCall(last.clone(), env.clone()))
}
