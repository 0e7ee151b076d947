// mallow-core - Logic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Logical operations: and, or, not
//!
//! `and` and `or` are ordinary functions over booleans: both operands are
//! evaluated before the call, and non-boolean operands are a type error.

use mallow_parser::MallowVal;

use crate::error::{Error, Result};

use super::check_arity;

fn bool_args(name: &'static str, args: &[MallowVal]) -> Result<(bool, bool)> {
    check_arity(name, args, 2)?;
    match (&args[0], &args[1]) {
        (MallowVal::Bool(a), MallowVal::Bool(b)) => Ok((*a, *b)),
        (MallowVal::Bool(_), other) | (other, _) => {
            Err(Error::type_error_in(name, "bool", other.type_name()))
        }
    }
}

/// (and a b) - boolean conjunction
pub(crate) fn builtin_and(args: &[MallowVal]) -> Result<MallowVal> {
    let (a, b) = bool_args("and", args)?;
    Ok(MallowVal::bool(a && b))
}

/// (or a b) - boolean disjunction
pub(crate) fn builtin_or(args: &[MallowVal]) -> Result<MallowVal> {
    let (a, b) = bool_args("or", args)?;
    Ok(MallowVal::bool(a || b))
}

/// (not x) - true when x is nil or false
pub(crate) fn builtin_not(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("not", args, 1)?;
    Ok(MallowVal::bool(!args[0].is_truthy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(v: bool) -> MallowVal {
        MallowVal::bool(v)
    }

    #[test]
    fn test_and_or() {
        assert_eq!(builtin_and(&[b(true), b(false)]).unwrap(), b(false));
        assert_eq!(builtin_and(&[b(true), b(true)]).unwrap(), b(true));
        assert_eq!(builtin_or(&[b(false), b(true)]).unwrap(), b(true));
        assert_eq!(builtin_or(&[b(false), b(false)]).unwrap(), b(false));
    }

    #[test]
    fn test_non_boolean_operands() {
        let err = builtin_and(&[b(true), MallowVal::int(1)]).unwrap_err();
        assert_eq!(err.to_string(), "and: expected bool, got int");
        let err = builtin_or(&[MallowVal::nil(), b(true)]).unwrap_err();
        assert_eq!(err.to_string(), "or: expected bool, got nil");
    }

    #[test]
    fn test_not() {
        assert_eq!(builtin_not(&[MallowVal::nil()]).unwrap(), b(true));
        assert_eq!(builtin_not(&[MallowVal::int(0)]).unwrap(), b(false));
    }
}
