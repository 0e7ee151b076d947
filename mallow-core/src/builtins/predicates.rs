// mallow-core - Type predicate built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Type predicates: nil?, true?, false?, symbol?, keyword?, string?, number?,
//! list?, vector?, sequential?, map?, fn?, macro?, atom?, empty?

use mallow_parser::MallowVal;

use crate::error::{Error, Result};

use super::check_arity;

/// Define a one-argument predicate from a pattern over the argument.
macro_rules! predicate {
    ($fn_name:ident, $name:literal, $pattern:pat) => {
        pub(crate) fn $fn_name(args: &[MallowVal]) -> Result<MallowVal> {
            check_arity($name, args, 1)?;
            Ok(MallowVal::bool(matches!(&args[0], $pattern)))
        }
    };
}

predicate!(builtin_nil_p, "nil?", MallowVal::Nil);
predicate!(builtin_true_p, "true?", MallowVal::Bool(true));
predicate!(builtin_false_p, "false?", MallowVal::Bool(false));
predicate!(builtin_symbol_p, "symbol?", MallowVal::Symbol(_));
predicate!(builtin_keyword_p, "keyword?", MallowVal::Keyword(_));
predicate!(builtin_string_p, "string?", MallowVal::String(_));
predicate!(builtin_number_p, "number?", MallowVal::Int(_));
predicate!(builtin_list_p, "list?", MallowVal::List(_));
predicate!(builtin_vector_p, "vector?", MallowVal::Vector(_));
predicate!(
    builtin_sequential_p,
    "sequential?",
    MallowVal::List(_) | MallowVal::Vector(_)
);
predicate!(builtin_map_p, "map?", MallowVal::HashMap(_));
predicate!(builtin_atom_p, "atom?", MallowVal::Atom(_));

/// (fn? x) - builtins and non-macro closures
pub(crate) fn builtin_fn_p(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("fn?", args, 1)?;
    Ok(MallowVal::bool(match &args[0] {
        MallowVal::Builtin(_) => true,
        MallowVal::Closure(c) => !c.is_macro,
        _ => false,
    }))
}

/// (macro? x)
pub(crate) fn builtin_macro_p(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("macro?", args, 1)?;
    Ok(MallowVal::bool(args[0].is_macro()))
}

/// (empty? coll) - true for an empty list, vector, map or string, and nil
pub(crate) fn builtin_empty_p(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("empty?", args, 1)?;
    let empty = match &args[0] {
        MallowVal::Nil => true,
        MallowVal::List(items) | MallowVal::Vector(items) => items.is_empty(),
        MallowVal::HashMap(map) => map.is_empty(),
        MallowVal::String(s) => s.is_empty(),
        other => {
            return Err(Error::type_error_in(
                "empty?",
                "collection",
                other.type_name(),
            ));
        }
    };
    Ok(MallowVal::bool(empty))
}
