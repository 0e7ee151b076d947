// mallow-core - Spread marker integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for splicing call arguments with `...`.

mod common;

use common::{MallowVal, eval_all, eval_err};

#[test]
fn test_spread_list() {
    assert_eval!("(+ 1 ... (list 2 3))", MallowVal::int(6));
}

#[test]
fn test_spread_vector_in_middle() {
    assert_eval!("(list 0 ... [1 2] 3)", MallowVal::list(vec![
        MallowVal::int(0),
        MallowVal::int(1),
        MallowVal::int(2),
        MallowVal::int(3),
    ]));
}

#[test]
fn test_spread_empty() {
    assert_eval!("(+ ... [])", MallowVal::int(0));
}

#[test]
fn test_multiple_spreads() {
    assert_eval!("(+ ... [1 2] ... (list 3 4))", MallowVal::int(10));
}

#[test]
fn test_spread_into_closure() {
    let result = eval_all(&["(def! f (fn* [a b c] (- a b c)))", "(f 10 ... [2 3])"]);
    assert_eq!(result.unwrap(), MallowVal::int(5));
}

#[test]
fn test_spread_as_last_argument() {
    let err = eval_err("(+ 1 ...)");
    assert_eq!(err.kind_name(), "RuntimeError");
}

#[test]
fn test_spread_of_non_sequence() {
    let err = eval_err("(+ 1 ... 2)");
    assert_eq!(err.kind_name(), "RuntimeError");
    assert!(err.to_string().contains("got int"), "{}", err);
}
