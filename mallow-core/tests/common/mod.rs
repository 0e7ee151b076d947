// mallow-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers and utilities for Mallow integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`eval_str`] - Evaluate code in a fresh interpreter
//! - [`eval_str_with`] - Evaluate code in an existing interpreter
//! - [`eval_all`] - Evaluate every form in a string, returning the last
//! - [`eval_err`] - Evaluate code expected to fail, returning the error
//! - [`new_interp`] - Create a new interpreter with builtins and prelude
//!
//! # Macros
//!
//! - [`assert_eval!`] - Assert that code evaluates to an expected value
//! - [`assert_eval_err!`] - Assert that code produces an error
//! - [`assert_eval_err_contains!`] - Assert that an error message mentions a substring

// Re-export common types for convenience
#[allow(unused_imports)]
pub use mallow_core::{Error, Interpreter};
#[allow(unused_imports)]
pub use mallow_parser::{Keyword, MallowVal, read};

/// Create a new interpreter with builtins and the prelude loaded.
///
/// # Panics
///
/// Panics if the prelude fails to load.
#[must_use]
pub fn new_interp() -> Interpreter {
    Interpreter::new().expect("Failed to create interpreter")
}

/// Evaluate a Mallow expression string in a fresh interpreter.
///
/// # Returns
///
/// Returns the value of the last form, or an error message string.
#[must_use]
pub fn eval_str(s: &str) -> Result<MallowVal, String> {
    let interp = new_interp();
    eval_str_with(s, &interp)
}

/// Evaluate a Mallow expression string in the given interpreter.
#[must_use]
pub fn eval_str_with(s: &str, interp: &Interpreter) -> Result<MallowVal, String> {
    interp.read_eval(s).map_err(|e| e.to_string())
}

/// Evaluate each string in turn in one fresh interpreter, returning the last result.
///
/// Useful when definitions must be in place before the final expression.
#[must_use]
#[allow(dead_code)]
pub fn eval_all(strs: &[&str]) -> Result<MallowVal, String> {
    let interp = new_interp();
    let mut result = MallowVal::Nil;
    for s in strs {
        result = eval_str_with(s, &interp)?;
    }
    Ok(result)
}

/// Evaluate code that is expected to fail and return the error itself.
///
/// # Panics
///
/// Panics if evaluation succeeds.
#[must_use]
#[allow(dead_code)]
pub fn eval_err(s: &str) -> Error {
    match new_interp().read_eval(s) {
        Ok(val) => panic!("Expected error for '{}' but got {}", s, val),
        Err(e) => e,
    }
}

/// Read a single form, for building expected values from source text.
#[must_use]
#[allow(dead_code)]
pub fn form(s: &str) -> MallowVal {
    read(s)
        .expect("Failed to read form")
        .expect("Source held no form")
}

/// Assert that evaluating `input` produces the expected value.
///
/// # Example
///
/// ```ignore
/// assert_eval!("(+ 1 2)", MallowVal::int(3));
/// ```
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error.
///
/// # Example
///
/// ```ignore
/// assert_eval_err!("(+ 1 :not-a-number)");
/// ```
#[macro_export]
macro_rules! assert_eval_err {
    ($input:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
    };
}

/// Assert that evaluating `input` fails with a message containing `needle`
/// (case-insensitive).
///
/// # Example
///
/// ```ignore
/// assert_eval_err_contains!("(/ 1 0)", "division by zero");
/// ```
#[macro_export]
macro_rules! assert_eval_err_contains {
    ($input:expr, $needle:expr) => {
        let result = $crate::common::eval_str($input);
        match result {
            Ok(val) => panic!("Expected error for '{}' but got {:?}", $input, val),
            Err(msg) => assert!(
                msg.to_lowercase().contains(&$needle.to_lowercase()),
                "Error for '{}' was '{}', expected it to contain '{}'",
                $input,
                msg,
                $needle
            ),
        }
    };
}
