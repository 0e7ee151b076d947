// mallow-core - Builtin library integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for the builtin functions, exercised through the
//! evaluator.

mod common;

use common::{MallowVal, eval_all, eval_str, new_interp};

fn printed(src: &str) -> String {
    eval_str(src).unwrap().pr_str(true)
}

// =============================================================================
// Arithmetic and comparison
// =============================================================================

#[test]
fn test_arithmetic() {
    assert_eval!("(+ 1 2 3)", MallowVal::int(6));
    assert_eval!("(- 10 4)", MallowVal::int(6));
    assert_eval!("(- 3)", MallowVal::int(-3));
    assert_eval!("(* 2 3 4)", MallowVal::int(24));
    assert_eval!("(/ 20 3)", MallowVal::int(6));
    assert_eval!("(** 3 3)", MallowVal::int(27));
}

#[test]
fn test_string_concatenation_with_plus() {
    assert_eval!("(+ \"ab\" \"cd\")", MallowVal::string("abcd"));
}

#[test]
fn test_arithmetic_errors() {
    assert_eval_err_contains!("(+ 1 :a)", "expected int, got keyword");
    assert_eval_err_contains!("(/ 1 0)", "division by zero");
    assert_eval_err_contains!("(* 9223372036854775807 2)", "overflow");
}

#[test]
fn test_comparison() {
    assert_eval!("(< 1 2)", MallowVal::bool(true));
    assert_eval!("(>= 1 2)", MallowVal::bool(false));
    assert_eval_err!("(< 1 \"2\")");
}

#[test]
fn test_logic() {
    assert_eval!("(and true false)", MallowVal::bool(false));
    assert_eval!("(or false true)", MallowVal::bool(true));
    assert_eval!("(not nil)", MallowVal::bool(true));
    assert_eval!("(! true)", MallowVal::bool(false));
    assert_eval_err!("(and 1 true)");
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_sequence_construction() {
    assert_eq!(printed("(list 1 2)"), "(1 2)");
    assert_eq!(printed("(vector 1 2)"), "[1 2]");
    assert_eq!(printed("(vec (list 1 2))"), "[1 2]");
    assert_eq!(printed("(cons 0 [1 2])"), "(0 1 2)");
    assert_eq!(printed("(cons 1 2)"), "(1 . 2)");
    assert_eq!(printed("(concat [1] (list 2) nil [3])"), "(1 2 3)");
}

#[test]
fn test_sequence_access() {
    assert_eval!("(count [1 2 3])", MallowVal::int(3));
    assert_eval!("(count nil)", MallowVal::int(0));
    assert_eval!("(count \"abc\")", MallowVal::int(3));
    assert_eval!("(first [7 8])", MallowVal::int(7));
    assert_eval!("(first (list))", MallowVal::Nil);
    assert_eq!(printed("(rest [7 8 9])"), "(8 9)");
    assert_eq!(printed("(rest nil)"), "()");
    assert_eval!("(nth [7 8 9] 2)", MallowVal::int(9));
    assert_eval_err_contains!("(nth [7] 3)", "out of bounds");
}

#[test]
fn test_predicates() {
    assert_eval!("(list? (list))", MallowVal::bool(true));
    assert_eval!("(list? [])", MallowVal::bool(false));
    assert_eval!("(vector? [])", MallowVal::bool(true));
    assert_eval!("(sequential? [])", MallowVal::bool(true));
    assert_eval!("(empty? [])", MallowVal::bool(true));
    assert_eval!("(nil? nil)", MallowVal::bool(true));
    assert_eval!("(string? \"s\")", MallowVal::bool(true));
    assert_eval!("(number? 1)", MallowVal::bool(true));
    assert_eval!("(keyword? :k)", MallowVal::bool(true));
    assert_eval!("(symbol? 'k)", MallowVal::bool(true));
    assert_eval!("(map? {})", MallowVal::bool(true));
    assert_eval!("(fn? +)", MallowVal::bool(true));
    assert_eval!("(fn? (fn* [] 1))", MallowVal::bool(true));
}

// =============================================================================
// Hash maps
// =============================================================================

#[test]
fn test_hash_maps() {
    assert_eval!("(get {:a 1} :a)", MallowVal::int(1));
    assert_eval!("(get {:a 1} :b)", MallowVal::Nil);
    assert_eval!("(get (assoc {} \"k\" 2) \"k\")", MallowVal::int(2));
    assert_eval!("(contains? (hash-map :a nil) :a)", MallowVal::bool(true));
    assert_eq!(printed("(keys {:a 1})"), "(:a)");
    assert_eq!(printed("(vals {:a 1})"), "(1)");
    assert_eval_err!("(hash-map :a)");
}

// =============================================================================
// Reflection and strings
// =============================================================================

#[test]
fn test_eval_and_read_string() {
    assert_eval!("(eval (read-string \"(+ 1 2)\"))", MallowVal::int(3));
    assert_eval!("(eval (list + 1 2))", MallowVal::int(3));
}

#[test]
fn test_eval_uses_global_environment() {
    let result = eval_all(&["(def! x 1)", "(let* [x 2] (eval 'x))"]);
    assert_eq!(result.unwrap(), MallowVal::int(1));
}

#[test]
fn test_apply() {
    assert_eval!("(apply + 1 2 [3 4])", MallowVal::int(10));
    assert_eval!("(apply (fn* [& xs] (count xs)) (list 1 2))", MallowVal::int(2));
}

#[test]
fn test_symbol_and_keyword_constructors() {
    assert_eval!("(symbol \"abc\")", MallowVal::symbol("abc"));
    assert_eval!("(keyword \"abc\")", MallowVal::keyword("abc"));
}

#[test]
fn test_with_meta_returns_object() {
    assert_eq!(printed("^{:doc \"x\"} [1 2]"), "[1 2]");
}

#[test]
fn test_string_builtins() {
    assert_eval!("(str \"a\" 1 :k nil)", MallowVal::string("a1:knil"));
    assert_eval!("(pr-str \"a\" [1])", MallowVal::string("\"a\" [1]"));
    assert_eval!("(println)", MallowVal::Nil);
    assert_eval!("(prn)", MallowVal::Nil);
}

#[test]
fn test_builtins_print_with_names() {
    assert_eq!(new_interp().rep("+").unwrap(), "#<builtin +>");
}

#[test]
fn test_not_callable() {
    assert_eval_err_contains!("(1 2)", "cannot call value: 1");
    assert_eval_err_contains!("(\"f\")", "cannot call value");
}
