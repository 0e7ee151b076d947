// mallow-core - Local binding special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Local binding special forms: let*, if-let.

use mallow_parser::MallowVal;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::destructuring::{PatternSite, bind_into, compile_pattern};
use crate::eval::{Step, eval};
use crate::interpreter::Interpreter;

/// (let* [name expr ...] body) - sequential local bindings
///
/// Each target is a symbol or a binding pattern; later bindings see earlier
/// ones. The body is evaluated in tail position.
pub fn eval_let(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::syntax(
            "let*",
            "requires a binding list and a single body form",
        ));
    }

    let bindings: Vec<MallowVal> = match args[0].as_seq() {
        Some(items) => items.iter().cloned().collect(),
        None => {
            return Err(Error::syntax(
                "let*",
                "first argument must be a binding list or vector",
            ));
        }
    };

    if bindings.len() % 2 != 0 {
        return Err(Error::syntax(
            "let*",
            "binding list must have an even number of forms",
        ));
    }

    let let_env = env.child();

    for pair in bindings.chunks(2) {
        match &pair[0] {
            MallowVal::Symbol(sym) => {
                let val = eval(interp, &pair[1], &let_env)?;
                let_env.define(sym.clone(), val);
            }
            target @ (MallowVal::List(_) | MallowVal::Vector(_)) => {
                let pattern = compile_pattern(target, PatternSite::Definition)?;
                let val = eval(interp, &pair[1], &let_env)?;
                let items: Vec<MallowVal> = match val.as_seq() {
                    Some(items) => items.iter().cloned().collect(),
                    None => {
                        return Err(Error::type_error_in(
                            "let* destructuring",
                            "list or vector",
                            val.type_name(),
                        ));
                    }
                };
                bind_into(&pattern, &items, &let_env)?;
            }
            other => {
                return Err(Error::type_error_in(
                    "let*",
                    "symbol or binding pattern",
                    other.type_name(),
                ));
            }
        }
    }

    Ok(Step::TailCall(args[1].clone(), let_env))
}

/// (if-let [name expr] then else?) - bind name when expr is truthy
pub fn eval_if_let(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() < 2 || args.len() > 3 {
        return Err(Error::syntax("if-let", "requires 2 or 3 arguments"));
    }

    let binding = match args[0].as_seq() {
        Some(items) if items.len() == 2 => items,
        _ => {
            return Err(Error::syntax(
                "if-let",
                "binding must be a [name expr] pair",
            ));
        }
    };
    let sym = match &binding[0] {
        MallowVal::Symbol(s) => s.clone(),
        other => {
            return Err(Error::type_error_in("if-let", "symbol", other.type_name()));
        }
    };

    let val = eval(interp, &binding[1], env)?;
    if val.is_truthy() {
        let branch_env = env.child();
        branch_env.define(sym, val);
        Ok(Step::TailCall(args[1].clone(), branch_env))
    } else if args.len() == 3 {
        Ok(Step::TailCall(args[2].clone(), env.clone()))
    } else {
        Ok(Step::Done(MallowVal::Nil))
    }
}
