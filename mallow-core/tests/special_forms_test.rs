// mallow-core - Special form integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for the special forms: def!, let*, if-let, cond, if,
//! do, fn*, quote and time.

mod common;

use common::{MallowVal, eval_all, eval_err, eval_str, new_interp};

// =============================================================================
// def!
// =============================================================================

#[test]
fn test_def_returns_value() {
    assert_eval!("(def! x 10)", MallowVal::int(10));
    assert_eq!(eval_all(&["(def! x 10)", "(+ x 1)"]).unwrap(), MallowVal::int(11));
}

#[test]
fn test_def_names_anonymous_closure() {
    let interp = new_interp();
    assert_eq!(interp.rep("(def! inc (fn* [x] (+ x 1)))").unwrap(), "#<fn inc>");
    assert_eq!(interp.rep("(fn* [x] x)").unwrap(), "#<fn>");
}

#[test]
fn test_def_keeps_first_name() {
    let interp = new_interp();
    interp.rep("(def! inc (fn* [x] (+ x 1)))").unwrap();
    assert_eq!(interp.rep("(def! plus-one inc)").unwrap(), "#<fn inc>");
}

#[test]
fn test_def_requires_symbol_or_pattern() {
    assert_eq!(eval_err("(def! 1 2)").kind_name(), "TypeError");
    assert_eq!(eval_err("(def! x)").kind_name(), "InvalidSyntax");
}

#[test]
fn test_failed_def_does_not_bind() {
    let interp = new_interp();
    assert!(interp.rep("(def! y (undefined-thing))").is_err());
    assert_eq!(interp.rep("y").unwrap_err().kind_name(), "UnboundSymbol");
}

// =============================================================================
// let*
// =============================================================================

#[test]
fn test_let_shadowing() {
    assert_eval!("(let* [a 1] (let* [a 2] a))", MallowVal::int(2));
    assert_eq!(
        eval_all(&["(def! a 1)", "(let* [a 2] a)", "a"]).unwrap(),
        MallowVal::int(1)
    );
}

#[test]
fn test_let_sequential_bindings() {
    assert_eval!("(let* (a 1 b (+ a 1)) (* a b))", MallowVal::int(2));
}

#[test]
fn test_let_does_not_leak() {
    let interp = new_interp();
    interp.rep("(let* [z 5] z)").unwrap();
    assert_eq!(interp.rep("z").unwrap_err().kind_name(), "UnboundSymbol");
}

#[test]
fn test_let_odd_bindings() {
    assert_eq!(eval_err("(let* [a] a)").kind_name(), "InvalidSyntax");
}

#[test]
fn test_if_let() {
    assert_eval!("(if-let [x 5] (+ x 1) 0)", MallowVal::int(6));
    assert_eval!("(if-let [x nil] x 0)", MallowVal::int(0));
    assert_eval!("(if-let [x false] x)", MallowVal::Nil);
}

// =============================================================================
// if, cond, do
// =============================================================================

#[test]
fn test_if_falsiness() {
    assert_eval!("(if nil 1 2)", MallowVal::int(2));
    assert_eval!("(if false 1 2)", MallowVal::int(2));
    assert_eval!("(if 0 1 2)", MallowVal::int(1));
    assert_eval!("(if \"\" 1 2)", MallowVal::int(1));
    assert_eval!("(if (list) 1 2)", MallowVal::int(1));
    assert_eval!("(if false 1)", MallowVal::Nil);
}

#[test]
fn test_if_arity() {
    assert_eq!(eval_err("(if true)").kind_name(), "InvalidSyntax");
    assert_eq!(eval_err("(if true 1 2 3)").kind_name(), "InvalidSyntax");
}

#[test]
fn test_cond() {
    assert_eval!("(cond [false 1] [nil 2] [true 3])", MallowVal::int(3));
    assert_eval!("(cond (false 1) ((= 1 1) :yes))", MallowVal::keyword("yes"));
    assert_eval!("(cond [false 1])", MallowVal::Nil);
}

#[test]
fn test_cond_evaluates_only_selected_body() {
    assert_eval!("(cond [true 1] [true (undefined)])", MallowVal::int(1));
}

#[test]
fn test_cond_malformed_clause() {
    assert_eq!(eval_err("(cond [true])").kind_name(), "InvalidSyntax");
    assert_eq!(eval_err("(cond)").kind_name(), "InvalidSyntax");
}

#[test]
fn test_do() {
    assert_eval!("(do 1 2 3)", MallowVal::int(3));
    assert_eval!("(do)", MallowVal::Nil);
    assert_eq!(eval_all(&["(do (def! q 7) nil)", "q"]).unwrap(), MallowVal::int(7));
}

// =============================================================================
// fn* and quote
// =============================================================================

#[test]
fn test_closure_captures_environment() {
    let result = eval_all(&[
        "(def! make-adder (fn* [n] (fn* [x] (+ x n))))",
        "(def! add5 (make-adder 5))",
        "(add5 10)",
    ]);
    assert_eq!(result.unwrap(), MallowVal::int(15));
}

#[test]
fn test_fn_requires_single_body() {
    assert_eq!(eval_err("(fn* [x])").kind_name(), "InvalidSyntax");
}

#[test]
fn test_quote() {
    assert_eq!(eval_str("(quote (a b))").unwrap().pr_str(true), "(a b)");
    assert_eq!(eval_str("'undefined-name").unwrap(), MallowVal::symbol("undefined-name"));
}

#[test]
fn test_empty_list_self_evaluates() {
    assert_eval!("()", MallowVal::empty_list());
}

#[test]
fn test_keywords_self_evaluate() {
    assert_eval!(":k", MallowVal::keyword("k"));
}

#[test]
fn test_collections_evaluate_elements() {
    assert_eq!(eval_str("[(+ 1 1) 3]").unwrap().pr_str(true), "[2 3]");
    assert_eq!(eval_str("{:a (+ 1 1)}").unwrap().pr_str(true), "{:a 2}");
}

#[test]
fn test_negated_symbol() {
    assert_eq!(eval_all(&["(def! n 4)", "-n"]).unwrap(), MallowVal::int(-4));
    assert_eq!(eval_err("-undefined").kind_name(), "UnboundSymbol");
    assert_eq!(eval_err("(do (def! s \"x\") -s)").kind_name(), "TypeError");
}

#[test]
fn test_time_reports_elapsed() {
    let result = eval_str("(time (+ 1 2))").unwrap();
    let MallowVal::String(s) = result else {
        panic!("expected string, got {:?}", result);
    };
    assert!(s.starts_with("Elapsed time: "));
    assert!(s.ends_with(" microseconds."));
}
