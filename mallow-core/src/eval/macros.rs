// mallow-core - Macro expansion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Macro detection and expansion.
//!
//! A call is a macro call when its head is a symbol bound, in the global
//! environment, to a closure flagged as a macro. Expansion applies the macro
//! to the unevaluated argument forms and repeats until the result is no
//! longer a macro call.

use mallow_parser::MallowVal;

use super::apply::apply;
use crate::error::Result;
use crate::interpreter::Interpreter;

/// The macro a form would invoke, if it is a macro call.
fn macro_for(interp: &Interpreter, form: &MallowVal) -> Option<MallowVal> {
    let MallowVal::List(items) = form else {
        return None;
    };
    let Some(MallowVal::Symbol(sym)) = items.front() else {
        return None;
    };
    interp.global().get(sym).filter(MallowVal::is_macro)
}

/// Whether `form` is a call to a macro.
pub fn is_macro_call(interp: &Interpreter, form: &MallowVal) -> bool {
    macro_for(interp, form).is_some()
}

/// Expand `form` until it is no longer a macro call.
pub fn macroexpand(interp: &Interpreter, form: &MallowVal) -> Result<MallowVal> {
    let mut form = form.clone();
    while let Some(mac) = macro_for(interp, &form) {
        let args: Vec<MallowVal> = match &form {
            MallowVal::List(items) => items.iter().skip(1).cloned().collect(),
            _ => Vec::new(),
        };
        let expanded = apply(interp, &mac, &args)?;
        log::debug!("macroexpand: {} => {}", form, expanded);
        form = expanded;
    }
    Ok(form)
}
