// mallow-core - Built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions for Mallow.

mod arithmetic;
mod atoms;
mod comparison;
mod io;
mod logic;
mod maps;
mod predicates;
mod reflection;
mod sequences;

use mallow_parser::{MallowVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::make_native_fn;
use crate::interpreter::Interpreter;

use arithmetic::{builtin_add, builtin_div, builtin_mul, builtin_pow, builtin_sub};
use atoms::{builtin_atom, builtin_deref, builtin_reset, builtin_swap};
use comparison::{builtin_eq, builtin_ge, builtin_gt, builtin_le, builtin_lt};
use io::{builtin_pr_str, builtin_println, builtin_prn, builtin_slurp, builtin_str};
use logic::{builtin_and, builtin_not, builtin_or};
use maps::{
    builtin_assoc, builtin_contains_p, builtin_get, builtin_hash_map, builtin_keys, builtin_vals,
};
use predicates::{
    builtin_atom_p, builtin_empty_p, builtin_false_p, builtin_fn_p, builtin_keyword_p,
    builtin_list_p, builtin_macro_p, builtin_map_p, builtin_nil_p, builtin_number_p,
    builtin_sequential_p, builtin_string_p, builtin_symbol_p, builtin_true_p, builtin_vector_p,
};
use reflection::{
    builtin_apply, builtin_eval, builtin_keyword, builtin_read_string, builtin_symbol,
    builtin_with_meta,
};
use sequences::{
    builtin_concat, builtin_cons, builtin_count, builtin_first, builtin_list, builtin_nth,
    builtin_rest, builtin_vec, builtin_vector,
};

/// Register all built-in functions in the given environment.
pub fn register_builtins(env: &Env) {
    // Arithmetic
    env.define_native("+", builtin_add);
    env.define_native("-", builtin_sub);
    env.define_native("*", builtin_mul);
    env.define_native("/", builtin_div);
    env.define_native("**", builtin_pow);

    // Comparison
    env.define_native("=", builtin_eq);
    env.define_native("<", builtin_lt);
    env.define_native("<=", builtin_le);
    env.define_native(">", builtin_gt);
    env.define_native(">=", builtin_ge);

    // Logic
    env.define_native("and", builtin_and);
    env.define_native("or", builtin_or);
    env.define_native("not", builtin_not);

    // Type predicates
    env.define_native("nil?", builtin_nil_p);
    env.define_native("true?", builtin_true_p);
    env.define_native("false?", builtin_false_p);
    env.define_native("symbol?", builtin_symbol_p);
    env.define_native("keyword?", builtin_keyword_p);
    env.define_native("string?", builtin_string_p);
    env.define_native("number?", builtin_number_p);
    env.define_native("list?", builtin_list_p);
    env.define_native("vector?", builtin_vector_p);
    env.define_native("sequential?", builtin_sequential_p);
    env.define_native("map?", builtin_map_p);
    env.define_native("fn?", builtin_fn_p);
    env.define_native("macro?", builtin_macro_p);
    env.define_native("atom?", builtin_atom_p);
    env.define_native("empty?", builtin_empty_p);

    // Sequences
    env.define_native("list", builtin_list);
    env.define_native("vector", builtin_vector);
    env.define_native("vec", builtin_vec);
    env.define_native("count", builtin_count);
    env.define_native("cons", builtin_cons);
    env.define_native("concat", builtin_concat);
    env.define_native("first", builtin_first);
    env.define_native("rest", builtin_rest);
    env.define_native("nth", builtin_nth);

    // Hash maps
    env.define_native("hash-map", builtin_hash_map);
    env.define_native("get", builtin_get);
    env.define_native("assoc", builtin_assoc);
    env.define_native("contains?", builtin_contains_p);
    env.define_native("keys", builtin_keys);
    env.define_native("vals", builtin_vals);

    // Symbols and keywords
    env.define_native("symbol", builtin_symbol);
    env.define_native("keyword", builtin_keyword);

    // Atoms
    env.define_native("atom", builtin_atom);
    env.define_native("deref", builtin_deref);
    env.define_native("reset!", builtin_reset);
    env.define_reentrant("swap!", builtin_swap);

    // Metadata
    env.define_native("with-meta", builtin_with_meta);

    // Reflection
    env.define_reentrant("eval", builtin_eval);
    env.define_reentrant("apply", builtin_apply);
    env.define_native("read-string", builtin_read_string);

    // I/O and strings
    env.define_native("str", builtin_str);
    env.define_native("pr-str", builtin_pr_str);
    env.define_native("prn", builtin_prn);
    env.define_native("println", builtin_println);
    env.define_native("slurp", builtin_slurp);
}

/// Helper trait to define native functions more easily.
pub trait EnvExt {
    /// Define a builtin that only looks at its arguments.
    fn define_native(&self, name: &'static str, func: fn(&[MallowVal]) -> Result<MallowVal>);

    /// Define a builtin that calls back into the interpreter.
    fn define_reentrant(
        &self,
        name: &'static str,
        func: fn(&Interpreter, &[MallowVal]) -> Result<MallowVal>,
    );
}

impl EnvExt for Env {
    fn define_native(&self, name: &'static str, func: fn(&[MallowVal]) -> Result<MallowVal>) {
        let native = make_native_fn(name, move |_, args| func(args));
        self.define(Symbol::new(name), MallowVal::Builtin(native));
    }

    fn define_reentrant(
        &self,
        name: &'static str,
        func: fn(&Interpreter, &[MallowVal]) -> Result<MallowVal>,
    ) {
        let native = make_native_fn(name, func);
        self.define(Symbol::new(name), MallowVal::Builtin(native));
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Check an exact argument count.
pub(crate) fn check_arity(name: &'static str, args: &[MallowVal], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::arity_named(name, expected, args.len()));
    }
    Ok(())
}

/// Elements of a list or vector argument, or nil as the empty sequence.
pub(crate) fn seq_items(name: &'static str, val: &MallowVal) -> Result<im::Vector<MallowVal>> {
    match val {
        MallowVal::Nil => Ok(im::Vector::new()),
        MallowVal::List(items) | MallowVal::Vector(items) => Ok(items.clone()),
        other => Err(Error::type_error_in(name, "list or vector", other.type_name())),
    }
}
