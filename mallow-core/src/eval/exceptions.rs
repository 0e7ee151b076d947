// mallow-core - Exception handling
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Exception handling special forms: throw, try*/catch*.

use mallow_parser::{MallowVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::{Step, eval};
use crate::interpreter::Interpreter;

/// (throw expr) - throw an exception
pub fn eval_throw(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() != 1 {
        return Err(Error::syntax("throw", "requires exactly 1 argument"));
    }

    let val = eval(interp, &args[0], env)?;
    Err(Error::Thrown(val))
}

/// (try* body (catch* name handler)?)
///
/// A thrown value is bound to `name` as is; any other error is bound as its
/// message string. The handler runs in tail position.
pub fn eval_try(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.is_empty() || args.len() > 2 {
        return Err(Error::syntax("try*", "requires a body and at most one catch* clause"));
    }

    let handler = args.get(1).map(parse_catch).transpose()?;

    match eval(interp, &args[0], env) {
        Ok(val) => Ok(Step::Done(val)),
        Err(err) => match handler {
            None => Err(err),
            Some((binding, body)) => {
                let caught = match err {
                    Error::Thrown(val) => val,
                    other => MallowVal::string(other.to_string()),
                };
                let catch_env = env.child();
                catch_env.define(binding, caught);
                Ok(Step::TailCall(body, catch_env))
            }
        },
    }
}

/// Parse `(catch* name handler)` into its binding and handler form.
fn parse_catch(clause: &MallowVal) -> Result<(Symbol, MallowVal)> {
    let items = match clause {
        MallowVal::List(items) if items.front().is_some_and(|h| h.is_symbol("catch*")) => items,
        _ => {
            return Err(Error::syntax(
                "try*",
                format!("expected a (catch* name handler) clause, got {}", clause),
            ));
        }
    };

    if items.len() != 3 {
        return Err(Error::syntax("try*", "catch* requires a name and a handler"));
    }

    match &items[1] {
        MallowVal::Symbol(sym) => Ok((sym.clone(), items[2].clone())),
        other => Err(Error::syntax(
            "try*",
            format!("catch* binding must be a symbol, got {}", other.type_name()),
        )),
    }
}
