// mallow-core - Quasiquote expansion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Rewrites a quasiquoted template into the expression that builds it.
//!
//! `(quasiquote (1 (unquote x) (splice-unquote ys)))` expands to
//! `(cons 1 (cons x (concat ys ())))`. Vector templates are wrapped in
//! `(vec ...)` so the result stays a vector.

use mallow_parser::{MallowVal, Vector};

/// Expand a quasiquoted form.
pub fn quasiquote(ast: &MallowVal) -> MallowVal {
    match ast {
        MallowVal::Symbol(_) | MallowVal::HashMap(_) => {
            MallowVal::list(vec![MallowVal::symbol("quote"), ast.clone()])
        }
        MallowVal::List(items) => match unwrap_call(items, "unquote") {
            Some(inner) => inner.clone(),
            None => expand_seq(items),
        },
        MallowVal::Vector(items) => MallowVal::list(vec![MallowVal::symbol("vec"), expand_seq(items)]),
        other => other.clone(),
    }
}

/// Fold the elements right to left into nested `cons`/`concat` calls.
fn expand_seq(items: &Vector<MallowVal>) -> MallowVal {
    let mut acc = MallowVal::empty_list();
    for elt in items.iter().rev() {
        let spliced = match elt {
            MallowVal::List(inner) => unwrap_call(inner, "splice-unquote"),
            _ => None,
        };
        acc = match spliced {
            Some(seq) => MallowVal::list(vec![MallowVal::symbol("concat"), seq.clone(), acc]),
            None => MallowVal::list(vec![MallowVal::symbol("cons"), quasiquote(elt), acc]),
        };
    }
    acc
}

/// If `items` is exactly `(name x)`, return `x`. Any other shape, such as
/// `(unquote)` or `(unquote a b)`, is an ordinary list to be quoted.
fn unwrap_call<'a>(items: &'a Vector<MallowVal>, name: &str) -> Option<&'a MallowVal> {
    match (items.front(), items.len()) {
        (Some(head), 2) if head.is_symbol(name) => items.get(1),
        _ => None,
    }
}
