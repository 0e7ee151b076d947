// mallow-core - Definition special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Definition special forms: def!, defmacro!, fn*.

use mallow_parser::{MallowVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::apply::make_closure;
use crate::eval::destructuring::{PatternSite, bind_into, compile_pattern};
use crate::eval::{Step, eval};
use crate::interpreter::Interpreter;

/// Give an anonymous closure the name it is first bound to.
fn name_closure(val: MallowVal, name: &Symbol) -> MallowVal {
    match &val {
        MallowVal::Closure(c) if c.name.is_none() => MallowVal::closure(c.named(name.name())),
        _ => val,
    }
}

/// (def! name value) or (def! [a b & rest] seq) - bind in the current environment
pub fn eval_def(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::syntax("def!", "requires exactly 2 arguments"));
    }

    match &args[0] {
        MallowVal::Symbol(sym) => {
            let val = name_closure(eval(interp, &args[1], env)?, sym);
            env.define(sym.clone(), val.clone());
            Ok(Step::Done(val))
        }
        target @ (MallowVal::List(_) | MallowVal::Vector(_)) => {
            let pattern = compile_pattern(target, PatternSite::Definition)?;
            let val = eval(interp, &args[1], env)?;
            let items = val.as_seq().ok_or_else(|| {
                Error::type_error_in("def! destructuring", "list or vector", val.type_name())
            })?;
            let items: Vec<MallowVal> = items.iter().cloned().collect();
            bind_into(&pattern, &items, env)?;
            Ok(Step::Done(val))
        }
        other => Err(Error::type_error_in(
            "def!",
            "symbol or binding pattern",
            other.type_name(),
        )),
    }
}

/// (defmacro! name fn-expr) - bind a macro built from a closure
pub fn eval_defmacro(interp: &Interpreter, args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::syntax("defmacro!", "requires exactly 2 arguments"));
    }

    let sym = match &args[0] {
        MallowVal::Symbol(s) => s.clone(),
        other => {
            return Err(Error::type_error_in(
                "defmacro!",
                "symbol",
                other.type_name(),
            ));
        }
    };

    let mac = match eval(interp, &args[1], env)? {
        MallowVal::Closure(c) => {
            let mac = c.as_macro();
            if mac.name.is_none() {
                MallowVal::closure(mac.named(sym.name()))
            } else {
                MallowVal::closure(mac)
            }
        }
        other => {
            return Err(Error::type_error_in(
                "defmacro!",
                "fn",
                other.type_name(),
            ));
        }
    };

    env.define(sym, mac.clone());
    Ok(Step::Done(mac))
}

/// (fn* [params] body) - create a closure over the current environment
pub fn eval_fn(args: &[MallowVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::syntax(
            "fn*",
            "requires a parameter pattern and a single body form",
        ));
    }

    let pattern = compile_pattern(&args[0], PatternSite::Parameters)?;
    Ok(Step::Done(make_closure(pattern, args[1].clone(), env)))
}
