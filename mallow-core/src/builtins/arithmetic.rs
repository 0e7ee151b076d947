// mallow-core - Arithmetic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic operations: +, -, *, /, **
//!
//! ## Integer Overflow Behaviour
//!
//! All arithmetic is on 64-bit integers and checked: an operation that would
//! overflow is a runtime error rather than a wrapped result.

use mallow_parser::MallowVal;

use crate::error::{Error, Result, expect_int};

fn overflow(op: &str) -> Error {
    Error::runtime(format!("Integer overflow in '{}'", op))
}

/// Fold integer arguments left to right with a checked operation.
fn fold_ints(
    name: &'static str,
    args: &[MallowVal],
    op: fn(i64, i64) -> Option<i64>,
) -> Result<MallowVal> {
    let (first, rest) = match args.split_first() {
        Some(split) => split,
        None => {
            return Err(Error::arity_at_least(name, 1, 0));
        }
    };
    let mut acc = expect_int(first, name)?;
    for arg in rest {
        let n = expect_int(arg, name)?;
        acc = op(acc, n).ok_or_else(|| overflow(name))?;
    }
    Ok(MallowVal::int(acc))
}

/// (+ & args) - integer sum, or concatenation when the first argument is a string
pub(crate) fn builtin_add(args: &[MallowVal]) -> Result<MallowVal> {
    match args.first() {
        None => Ok(MallowVal::int(0)),
        Some(MallowVal::String(_)) => {
            let mut result = String::new();
            for arg in args {
                match arg {
                    MallowVal::String(s) => result.push_str(s),
                    other => return Err(Error::type_error_in("+", "string", other.type_name())),
                }
            }
            Ok(MallowVal::string(result))
        }
        Some(_) => fold_ints("+", args, i64::checked_add),
    }
}

/// (- x) negates; (- x y & more) subtracts left to right
pub(crate) fn builtin_sub(args: &[MallowVal]) -> Result<MallowVal> {
    if let [only] = args {
        let n = expect_int(only, "-")?;
        return n.checked_neg().map(MallowVal::int).ok_or_else(|| overflow("-"));
    }
    fold_ints("-", args, i64::checked_sub)
}

/// (* & args) - integer product
pub(crate) fn builtin_mul(args: &[MallowVal]) -> Result<MallowVal> {
    if args.is_empty() {
        return Ok(MallowVal::int(1));
    }
    fold_ints("*", args, i64::checked_mul)
}

/// (/ x y & more) - truncating integer division
pub(crate) fn builtin_div(args: &[MallowVal]) -> Result<MallowVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("/", 2, args.len()));
    }
    let mut acc = expect_int(&args[0], "/")?;
    for arg in &args[1..] {
        let n = expect_int(arg, "/")?;
        if n == 0 {
            return Err(Error::DivisionByZero);
        }
        acc = acc.checked_div(n).ok_or_else(|| overflow("/"))?;
    }
    Ok(MallowVal::int(acc))
}

/// (** base exponent) - integer power with a non-negative exponent
pub(crate) fn builtin_pow(args: &[MallowVal]) -> Result<MallowVal> {
    super::check_arity("**", args, 2)?;
    let base = expect_int(&args[0], "**")?;
    let exp = expect_int(&args[1], "**")?;
    let exp = u32::try_from(exp)
        .map_err(|_| Error::runtime(format!("'**' exponent out of range: {}", exp)))?;
    base.checked_pow(exp)
        .map(MallowVal::int)
        .ok_or_else(|| overflow("**"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(ns: &[i64]) -> Vec<MallowVal> {
        ns.iter().copied().map(MallowVal::int).collect()
    }

    #[test]
    fn test_add() {
        assert_eq!(builtin_add(&ints(&[1, 2, 3])).unwrap(), MallowVal::int(6));
        assert_eq!(builtin_add(&[]).unwrap(), MallowVal::int(0));
    }

    #[test]
    fn test_add_strings() {
        let args = vec![MallowVal::string("ab"), MallowVal::string("cd")];
        assert_eq!(builtin_add(&args).unwrap(), MallowVal::string("abcd"));
        let mixed = vec![MallowVal::string("ab"), MallowVal::int(1)];
        assert_eq!(builtin_add(&mixed).unwrap_err().kind_name(), "TypeError");
    }

    #[test]
    fn test_sub() {
        assert_eq!(builtin_sub(&ints(&[5])).unwrap(), MallowVal::int(-5));
        assert_eq!(builtin_sub(&ints(&[10, 3, 2])).unwrap(), MallowVal::int(5));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            builtin_add(&ints(&[i64::MAX, 1])).unwrap_err().kind_name(),
            "RuntimeError"
        );
        assert_eq!(
            builtin_sub(&ints(&[i64::MIN])).unwrap_err().kind_name(),
            "RuntimeError"
        );
        assert_eq!(
            builtin_mul(&ints(&[i64::MAX, 2])).unwrap_err().kind_name(),
            "RuntimeError"
        );
    }

    #[test]
    fn test_div() {
        assert_eq!(builtin_div(&ints(&[7, 2])).unwrap(), MallowVal::int(3));
        assert_eq!(builtin_div(&ints(&[-7, 2])).unwrap(), MallowVal::int(-3));
        assert!(matches!(
            builtin_div(&ints(&[1, 0])).unwrap_err(),
            Error::DivisionByZero
        ));
    }

    #[test]
    fn test_pow() {
        assert_eq!(builtin_pow(&ints(&[2, 10])).unwrap(), MallowVal::int(1024));
        assert_eq!(builtin_pow(&ints(&[5, 0])).unwrap(), MallowVal::int(1));
        assert!(builtin_pow(&ints(&[2, -1])).is_err());
        assert!(builtin_pow(&ints(&[2, 64])).is_err());
    }
}
