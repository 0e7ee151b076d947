// mallow-core - Property-based tests for destructuring
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for binding patterns.
//!
//! Tests the following properties:
//! - Fixed patterns bind each name to the value at its position
//! - Variadic patterns collect every surplus value into the rest list
//! - Patterns reject value sequences of the wrong length

mod common;

use common::{MallowVal, eval_str};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating values
// =============================================================================

/// Generate small integers for destructuring tests
fn arb_small_int() -> impl Strategy<Value = i64> {
    -100i64..100i64
}

fn source_list(ns: &[i64]) -> String {
    let parts: Vec<String> = ns.iter().map(i64::to_string).collect();
    format!("[{}]", parts.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// [x y z] against three values binds positionally
    #[test]
    fn fixed_pattern_binds_positionally(a in arb_small_int(), b in arb_small_int(), c in arb_small_int()) {
        let code = format!("(let* [[x y z] [{} {} {}]] (list z y x))", a, b, c);
        let result = eval_str(&code).unwrap();
        prop_assert_eq!(
            result,
            MallowVal::list(vec![MallowVal::int(c), MallowVal::int(b), MallowVal::int(a)])
        );
    }

    /// [h & t] splits any non-empty sequence into its head and tail
    #[test]
    fn variadic_pattern_collects_surplus(values in prop::collection::vec(arb_small_int(), 1..20)) {
        let code = format!("(let* [[h & t] {}] (cons h t))", source_list(&values));
        let result = eval_str(&code).unwrap();
        let expected = MallowVal::list(values.iter().copied().map(MallowVal::int).collect());
        prop_assert_eq!(result, expected);
    }

    /// A closure with n fixed parameters accepts exactly n arguments
    #[test]
    fn fixed_arity_is_enforced(n in 0usize..6, given in 0usize..6) {
        let params: Vec<String> = (0..n).map(|i| format!("p{}", i)).collect();
        let args: Vec<String> = (0..given).map(|i| i.to_string()).collect();
        let code = format!("((fn* [{}] nil) {})", params.join(" "), args.join(" "));
        let result = eval_str(&code);
        if n == given {
            prop_assert_eq!(result.unwrap(), MallowVal::Nil);
        } else {
            prop_assert!(result.unwrap_err().contains("Wrong number of arguments"));
        }
    }

    /// The rest list holds exactly the values past the fixed prefix
    #[test]
    fn rest_length_matches_surplus(fixed in 0usize..4, extra in 0usize..8) {
        let mut params: Vec<String> = (0..fixed).map(|i| format!("p{}", i)).collect();
        params.push("&".to_string());
        params.push("more".to_string());
        let args: Vec<String> = (0..fixed + extra).map(|i| i.to_string()).collect();
        let code = format!("((fn* [{}] (count more)) {})", params.join(" "), args.join(" "));
        prop_assert_eq!(eval_str(&code).unwrap(), MallowVal::int(extra as i64));
    }
}
