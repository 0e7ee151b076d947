// mallow-core - Comparison built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparison operations: =, <, <=, >, >=

use std::cmp::Ordering;

use mallow_parser::MallowVal;

use crate::error::{Result, expect_int};

use super::check_arity;

/// (= a b) - structural equality; lists and vectors compare across kinds
pub(crate) fn builtin_eq(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("=", args, 2)?;
    Ok(MallowVal::bool(args[0] == args[1]))
}

fn compare_ints(name: &'static str, args: &[MallowVal], accept: fn(Ordering) -> bool) -> Result<MallowVal> {
    check_arity(name, args, 2)?;
    let lhs = expect_int(&args[0], name)?;
    let rhs = expect_int(&args[1], name)?;
    Ok(MallowVal::bool(accept(lhs.cmp(&rhs))))
}

pub(crate) fn builtin_lt(args: &[MallowVal]) -> Result<MallowVal> {
    compare_ints("<", args, Ordering::is_lt)
}

pub(crate) fn builtin_le(args: &[MallowVal]) -> Result<MallowVal> {
    compare_ints("<=", args, Ordering::is_le)
}

pub(crate) fn builtin_gt(args: &[MallowVal]) -> Result<MallowVal> {
    compare_ints(">", args, Ordering::is_gt)
}

pub(crate) fn builtin_ge(args: &[MallowVal]) -> Result<MallowVal> {
    compare_ints(">=", args, Ordering::is_ge)
}
