// mallow-core - Trampolined evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Evaluator for Mallow expressions.
//!
//! Evaluation is a loop over `(ast, env)` states. Each step either finishes
//! with a value or hands back the next form and environment to evaluate in
//! tail position, so tail calls (closure bodies, the last form of `do`, the
//! arms of `if` and `cond`, `let*` bodies) never grow the native stack.
//! Sub-expressions that are not in tail position recurse through [`eval`].

// Submodules
pub mod apply;
pub mod destructuring;
pub mod exceptions;
pub mod macros;
pub mod quasiquote;
pub mod special_forms;

// Re-exports from submodules
pub use apply::{NativeFnImpl, apply, make_native_fn};
pub use destructuring::{PatternSite, compile_pattern, destructure};
pub use macros::{is_macro_call, macroexpand};
pub use quasiquote::quasiquote;

use mallow_parser::{KeyedMap, MallowVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::interpreter::Interpreter;

use exceptions::{eval_throw, eval_try};
use special_forms::{
    eval_cond, eval_def, eval_defmacro, eval_do, eval_fn, eval_if, eval_if_let, eval_let,
    eval_macroexpand, eval_quasiquote, eval_quasiquoteexpand, eval_quote, eval_time,
};

/// The outcome of one evaluation step.
pub enum Step {
    /// Evaluation finished with a value
    Done(MallowVal),
    /// Continue by evaluating this form in this environment
    TailCall(MallowVal, Env),
}

/// Evaluate an expression in an environment.
pub fn eval(interp: &Interpreter, expr: &MallowVal, env: &Env) -> Result<MallowVal> {
    let mut ast = expr.clone();
    let mut env = env.clone();
    loop {
        match eval_step(interp, &ast, &env)? {
            Step::Done(val) => return Ok(val),
            Step::TailCall(next, next_env) => {
                log::trace!("tail call: {}", next);
                ast = next;
                env = next_env;
            }
        }
    }
}

/// Perform one step of evaluation.
fn eval_step(interp: &Interpreter, expr: &MallowVal, env: &Env) -> Result<Step> {
    match expr {
        MallowVal::Symbol(sym) => lookup_symbol(sym, env).map(Step::Done),

        // Lists - empty lists are self-evaluating, others are calls
        MallowVal::List(items) if items.is_empty() => Ok(Step::Done(expr.clone())),
        MallowVal::List(items) => {
            let items_vec: Vec<MallowVal> = items.iter().cloned().collect();
            eval_list(interp, expr, &items_vec, env)
        }

        // Vectors evaluate their elements
        MallowVal::Vector(items) => {
            let evaluated: Result<Vec<_>> = items.iter().map(|e| eval(interp, e, env)).collect();
            Ok(Step::Done(MallowVal::vector(evaluated?)))
        }

        // Maps evaluate their values; keys are taken literally
        MallowVal::HashMap(map) => {
            let mut result = KeyedMap::new();
            for (hash_key, (key, val)) in map.iter() {
                result.insert(hash_key.clone(), (key.clone(), eval(interp, val, env)?));
            }
            Ok(Step::Done(MallowVal::HashMap(result)))
        }

        // Everything else is self-evaluating
        _ => Ok(Step::Done(expr.clone())),
    }
}

/// Look up a symbol. An unbound `-name` evaluates to the negation of `name`.
fn lookup_symbol(sym: &Symbol, env: &Env) -> Result<MallowVal> {
    if let Some(val) = env.get(sym) {
        return Ok(val);
    }

    let negated = sym
        .name()
        .strip_prefix('-')
        .filter(|rest| !rest.is_empty())
        .and_then(|rest| env.get(&Symbol::new(rest)));

    match negated {
        Some(MallowVal::Int(n)) => n
            .checked_neg()
            .map(MallowVal::int)
            .ok_or_else(|| Error::runtime(format!("Integer overflow negating {}", n))),
        Some(other) => Err(Error::type_error_in(
            format!("negation of {}", sym),
            "int",
            other.type_name(),
        )),
        None => Err(Error::UnboundSymbol(sym.clone())),
    }
}

/// Evaluate a non-empty list form (special form, macro call or application).
fn eval_list(interp: &Interpreter, form: &MallowVal, items: &[MallowVal], env: &Env) -> Result<Step> {
    // Check for special forms
    if let MallowVal::Symbol(sym) = &items[0] {
        let args = &items[1..];
        let special = match sym.name() {
            "def!" => Some(eval_def(interp, args, env)),
            "defmacro!" => Some(eval_defmacro(interp, args, env)),
            "let*" => Some(eval_let(interp, args, env)),
            "if-let" => Some(eval_if_let(interp, args, env)),
            "cond" => Some(eval_cond(interp, args, env)),
            "if" => Some(eval_if(interp, args, env)),
            "do" => Some(eval_do(interp, args, env)),
            "fn*" => Some(eval_fn(args, env)),
            "quote" => Some(eval_quote(args)),
            "quasiquote" => Some(eval_quasiquote(args, env)),
            "quasiquoteexpand" => Some(eval_quasiquoteexpand(args)),
            "macroexpand" => Some(eval_macroexpand(interp, args)),
            "time" => Some(eval_time(interp, args, env)),
            "throw" => Some(eval_throw(interp, args, env)),
            "try*" => Some(eval_try(interp, args, env)),
            _ => None,
        };
        if let Some(step) = special {
            log::trace!("special form: {}", sym);
            return step;
        }

        // Macro calls expand, then the expansion is evaluated in their place
        if is_macro_call(interp, form) {
            let expanded = macroexpand(interp, form)?;
            return Ok(Step::TailCall(expanded, env.clone()));
        }
    }

    // Regular function call - evaluate all forms then apply
    let func = eval(interp, &items[0], env)?;
    let args = eval_args(interp, &items[1..], env)?;
    apply::apply_step(interp, &func, &args)
}

/// Evaluate call arguments, splicing in the elements of any argument
/// preceded by the `...` marker.
fn eval_args(interp: &Interpreter, forms: &[MallowVal], env: &Env) -> Result<Vec<MallowVal>> {
    let mut args = Vec::with_capacity(forms.len());
    let mut iter = forms.iter();

    while let Some(form) = iter.next() {
        if !matches!(form, MallowVal::Symbol(sym) if sym.is_spread_marker()) {
            args.push(eval(interp, form, env)?);
            continue;
        }

        let Some(spread_form) = iter.next() else {
            return Err(Error::runtime(
                "Spread marker '...' must be followed by an argument",
            ));
        };
        let spread = eval(interp, spread_form, env)?;
        match spread.as_seq() {
            Some(items) => args.extend(items.iter().cloned()),
            None => {
                return Err(Error::runtime(format!(
                    "Spread marker '...' expects a list or vector, got {}",
                    spread.type_name()
                )));
            }
        }
    }

    Ok(args)
}
