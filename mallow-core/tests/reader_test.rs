// mallow-core - Reader integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for reading source text into values.
//!
//! Tests for: literal round-trips, quoting sugar, metadata, comments and
//! reader errors surfaced through the interpreter.

mod common;

use common::{Error, MallowVal, eval_str, form, new_interp, read};
use mallow_parser::ReadErrorKind;

// =============================================================================
// Round-trip
// =============================================================================

#[test]
fn test_literal_round_trip() {
    for literal in ["nil", "true", "42", "\"a\\nb\"", ":kw", "(1 2 3)", "[1 2 3]"] {
        let printed = form(literal).pr_str(true);
        assert_eq!(printed, literal, "round-trip of {}", literal);
    }
}

#[test]
fn test_nested_round_trip() {
    let src = "(def! f [a \"q\\\"uote\" {:k [1 -2]}])";
    assert_eq!(form(src).pr_str(true), src);
}

#[test]
fn test_commas_are_whitespace() {
    assert_eq!(form("[1, 2,3]").pr_str(true), "[1 2 3]");
}

// =============================================================================
// Sugar
// =============================================================================

#[test]
fn test_quote_sugar() {
    assert_eq!(form("'x").pr_str(true), "(quote x)");
    assert_eq!(form("`x").pr_str(true), "(quasiquote x)");
    assert_eq!(form("~x").pr_str(true), "(unquote x)");
    assert_eq!(form("~@x").pr_str(true), "(splice-unquote x)");
    assert_eq!(form("@a").pr_str(true), "(deref a)");
}

#[test]
fn test_metadata_sugar() {
    assert_eq!(form("^{:a 1} [1]").pr_str(true), "(with-meta [1] {:a 1})");
}

#[test]
fn test_metadata_requires_map() {
    let err = read("^:a [1]").unwrap_err();
    assert_eq!(err.kind, ReadErrorKind::InvalidLiteral);
}

#[test]
fn test_negative_numbers_and_minus_symbol() {
    assert_eq!(form("-12"), MallowVal::int(-12));
    assert_eq!(form("-"), MallowVal::symbol("-"));
    assert_eq!(form("-abc"), MallowVal::symbol("-abc"));
    assert_eq!(form("-1:x"), MallowVal::symbol("-"));
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn test_comment_only_source_reads_nothing() {
    assert!(read("; just a comment").unwrap().is_none());
    assert_eq!(eval_str("; nothing here").unwrap(), MallowVal::Nil);
}

#[test]
fn test_comment_between_forms() {
    assert_eq!(eval_str("1 ; skip me\n2").unwrap(), MallowVal::int(2));
}

#[test]
fn test_rep_of_comment_is_empty() {
    assert_eq!(new_interp().rep(";; hi").unwrap(), "");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unclosed_list_is_unbalanced() {
    let err = new_interp().read_eval("(1 2").unwrap_err();
    assert!(matches!(err, Error::UnbalancedInput(_)), "got {:?}", err);
}

#[test]
fn test_unclosed_string_is_unbalanced() {
    let err = new_interp().read_eval("\"abc").unwrap_err();
    assert!(matches!(err, Error::UnbalancedInput(_)), "got {:?}", err);
}

#[test]
fn test_unclosed_map_is_unbalanced() {
    let err = new_interp().read_eval("{:a 1").unwrap_err();
    assert_eq!(err.kind_name(), "UnbalancedInput");
}

#[test]
fn test_integer_overflow_is_invalid_literal() {
    let err = new_interp().read_eval("99999999999999999999").unwrap_err();
    assert_eq!(err.kind_name(), "InvalidLiteral");
}
