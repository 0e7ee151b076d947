// mallow-core - Sequence built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Sequence operations: list, vector, vec, count, cons, concat, first, rest, nth
//!
//! Lists and vectors share one persistent representation, so conversions and
//! `rest` are O(1) structural slices rather than copies. Nil behaves as the
//! empty sequence wherever a sequence is read.

use im::Vector;
use mallow_parser::MallowVal;

use crate::error::{Error, Result, expect_int};

use super::{check_arity, seq_items};

/// (list & items)
pub(crate) fn builtin_list(args: &[MallowVal]) -> Result<MallowVal> {
    Ok(MallowVal::list(args.to_vec()))
}

/// (vector & items)
pub(crate) fn builtin_vector(args: &[MallowVal]) -> Result<MallowVal> {
    Ok(MallowVal::vector(args.to_vec()))
}

/// (vec coll) - vector with the elements of a list, vector or nil
pub(crate) fn builtin_vec(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("vec", args, 1)?;
    Ok(MallowVal::Vector(seq_items("vec", &args[0])?))
}

/// (count coll)
pub(crate) fn builtin_count(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("count", args, 1)?;
    let n = match &args[0] {
        MallowVal::Nil => 0,
        MallowVal::List(items) | MallowVal::Vector(items) => items.len(),
        MallowVal::HashMap(map) => map.len(),
        MallowVal::String(s) => s.chars().count(),
        other => return Err(Error::type_error_in("count", "collection", other.type_name())),
    };
    // Collections are bounded by memory, far below i64::MAX
    Ok(MallowVal::int(n as i64))
}

/// (cons x coll) - prepend to a sequence; any other tail builds a pair
pub(crate) fn builtin_cons(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("cons", args, 2)?;
    let head = args[0].clone();
    match &args[1] {
        MallowVal::Nil => Ok(MallowVal::list(vec![head])),
        MallowVal::List(items) | MallowVal::Vector(items) => {
            let mut items = items.clone();
            items.push_front(head);
            Ok(MallowVal::List(items))
        }
        tail => Ok(MallowVal::pair(head, tail.clone())),
    }
}

/// (concat & colls) - a list of all elements in order
pub(crate) fn builtin_concat(args: &[MallowVal]) -> Result<MallowVal> {
    let mut result = Vector::new();
    for arg in args {
        result.append(seq_items("concat", arg)?);
    }
    Ok(MallowVal::List(result))
}

/// (first coll) - nil for an empty sequence or nil
pub(crate) fn builtin_first(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("first", args, 1)?;
    if let MallowVal::Pair(pair) = &args[0] {
        return Ok(pair.0.clone());
    }
    let items = seq_items("first", &args[0])?;
    Ok(items.front().cloned().unwrap_or(MallowVal::Nil))
}

/// (rest coll) - always a list, empty when there is nothing left
pub(crate) fn builtin_rest(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("rest", args, 1)?;
    if let MallowVal::Pair(pair) = &args[0] {
        return Ok(pair.1.clone());
    }
    let items = seq_items("rest", &args[0])?;
    if items.is_empty() {
        return Ok(MallowVal::empty_list());
    }
    Ok(MallowVal::List(items.skip(1)))
}

/// (nth coll index)
pub(crate) fn builtin_nth(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("nth", args, 2)?;
    let items = seq_items("nth", &args[0])?;
    let index = expect_int(&args[1], "nth")?;
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i).cloned())
        .ok_or_else(|| {
            Error::runtime(format!(
                "nth: index {} out of bounds for sequence of length {}",
                index,
                items.len()
            ))
        })
}
