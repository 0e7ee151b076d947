// mallow-core - Reflection built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Code-as-data operations: eval, apply, read-string, symbol, keyword, with-meta

use mallow_parser::MallowVal;

use crate::error::{Error, Result};
use crate::interpreter::Interpreter;

use super::{check_arity, seq_items};

fn expect_string<'a>(name: &'static str, val: &'a MallowVal) -> Result<&'a str> {
    match val {
        MallowVal::String(s) => Ok(s),
        other => Err(Error::type_error_in(name, "string", other.type_name())),
    }
}

/// (eval form) - evaluate in the global environment
pub(crate) fn builtin_eval(interp: &Interpreter, args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("eval", args, 1)?;
    interp.eval(&args[0])
}

/// (apply f x y ... coll) - call f with the leading arguments then the elements of coll
pub(crate) fn builtin_apply(interp: &Interpreter, args: &[MallowVal]) -> Result<MallowVal> {
    let [func, middle @ .., last] = args else {
        return Err(Error::arity_at_least("apply", 2, args.len()));
    };
    let mut call_args = middle.to_vec();
    call_args.extend(seq_items("apply", last)?);
    interp.apply(func, &call_args)
}

/// (read-string s) - the first form in s, or nil when there is none
pub(crate) fn builtin_read_string(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("read-string", args, 1)?;
    let source = expect_string("read-string", &args[0])?;
    Ok(mallow_parser::read(source)?.unwrap_or(MallowVal::Nil))
}

/// (symbol s)
pub(crate) fn builtin_symbol(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("symbol", args, 1)?;
    Ok(MallowVal::symbol(expect_string("symbol", &args[0])?))
}

/// (keyword s) - a keyword argument is returned unchanged
pub(crate) fn builtin_keyword(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("keyword", args, 1)?;
    if let MallowVal::Keyword(_) = &args[0] {
        return Ok(args[0].clone());
    }
    Ok(MallowVal::keyword(expect_string("keyword", &args[0])?))
}

/// (with-meta obj meta) - metadata is accepted and discarded
pub(crate) fn builtin_with_meta(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("with-meta", args, 2)?;
    Ok(args[0].clone())
}
