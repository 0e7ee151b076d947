// mallow-core - Atom built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Mutable cells: atom, deref, reset!, swap!

use mallow_parser::{MallowAtom, MallowVal};

use crate::error::{Error, Result};
use crate::interpreter::Interpreter;

use super::check_arity;

fn expect_atom<'a>(name: &'static str, val: &'a MallowVal) -> Result<&'a MallowAtom> {
    match val {
        MallowVal::Atom(atom) => Ok(atom),
        other => Err(Error::type_error_in(name, "atom", other.type_name())),
    }
}

/// (atom x)
pub(crate) fn builtin_atom(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("atom", args, 1)?;
    Ok(MallowVal::atom(args[0].clone()))
}

/// (deref a), also written @a
pub(crate) fn builtin_deref(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("deref", args, 1)?;
    Ok(expect_atom("deref", &args[0])?.deref())
}

/// (reset! a x) - returns x
pub(crate) fn builtin_reset(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("reset!", args, 2)?;
    Ok(expect_atom("reset!", &args[0])?.reset(args[1].clone()))
}

/// (swap! a f & args) - sets the atom to (f @a args...) and returns it
///
/// The current value is read before `f` runs. If `f` fails the atom is left
/// unchanged.
pub(crate) fn builtin_swap(interp: &Interpreter, args: &[MallowVal]) -> Result<MallowVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("swap!", 2, args.len()));
    }
    let atom = expect_atom("swap!", &args[0])?;
    let mut call_args = Vec::with_capacity(args.len() - 1);
    call_args.push(atom.deref());
    call_args.extend_from_slice(&args[2..]);
    let new_val = interp.apply(&args[1], &call_args)?;
    Ok(atom.reset(new_val))
}
