// mallow-core - Destructuring support
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Binding patterns for `def!`, `let*` and function parameters.
//!
//! A pattern is a list or vector of symbols, optionally ending in `& rest`:
//! `[a b]` binds exactly two values, `[a b & more]` binds two or more and
//! collects the surplus into a list bound to `more`.

use mallow_parser::{BindingPattern, MallowVal, Symbol};

use crate::env::Env;
use crate::error::{AritySpec, Error, Result};

/// Result of destructuring: a list of (symbol, value) bindings
pub type Bindings = Vec<(Symbol, MallowVal)>;

/// Where a pattern appears. Parameter lists may consist of `& rest` alone;
/// `def!` and `let*` targets may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSite {
    Definition,
    Parameters,
}

/// Validate a pattern form and compile it into a `BindingPattern`.
pub fn compile_pattern(form: &MallowVal, site: PatternSite) -> Result<BindingPattern> {
    let items = form
        .as_seq()
        .ok_or_else(|| Error::type_error_in("binding pattern", "list or vector", form.type_name()))?;

    let mut names = Vec::with_capacity(items.len());
    for item in items.iter() {
        match item {
            MallowVal::Symbol(sym) => names.push(sym.clone()),
            other => {
                return Err(Error::type_error_in(
                    "binding pattern",
                    "symbol",
                    other.type_name(),
                ));
            }
        }
    }

    let len = names.len();
    let mut rest = None;
    for (i, name) in names.iter().enumerate() {
        if !name.is_variadic_marker() {
            continue;
        }
        if len < 2 || i != len - 2 || names[len - 1].is_variadic_marker() {
            return Err(Error::InvalidVariadic(format!(
                "'&' must be followed by exactly one name in {}",
                form
            )));
        }
        rest = Some(names[len - 1].clone());
    }

    let fixed: Vec<Symbol> = if rest.is_some() {
        names[..len - 2].to_vec()
    } else {
        names
    };

    if rest.is_some() && fixed.is_empty() && site == PatternSite::Definition {
        return Err(Error::InvalidVariadic(format!(
            "{} binds nothing positionally; bind the value to the name directly",
            form
        )));
    }

    let mut seen: Vec<&Symbol> = Vec::with_capacity(fixed.len() + 1);
    for name in fixed.iter().chain(rest.iter()) {
        if seen.contains(&name) {
            return Err(Error::DuplicateBinding(name.clone()));
        }
        seen.push(name);
    }

    Ok(BindingPattern::new(fixed, rest))
}

/// Pair each name of `pattern` with its value.
///
/// `name` is used in arity errors, for instance the name of the function
/// being applied.
pub fn destructure(
    pattern: &BindingPattern,
    values: &[MallowVal],
    name: Option<&str>,
) -> Result<Bindings> {
    if !pattern.accepts(values.len()) {
        let expected = if pattern.is_variadic() {
            AritySpec::AtLeast(pattern.min_arity())
        } else {
            AritySpec::Exact(pattern.min_arity())
        };
        return Err(Error::ArityMismatch {
            expected,
            got: values.len(),
            name: name.map(str::to_string),
        });
    }

    let fixed_count = pattern.fixed.len();
    let mut bindings: Bindings = pattern
        .fixed
        .iter()
        .cloned()
        .zip(values.iter().cloned())
        .collect();

    if let Some(rest) = &pattern.rest {
        let surplus = values[fixed_count..].to_vec();
        bindings.push((rest.clone(), MallowVal::list(surplus)));
    }

    Ok(bindings)
}

/// Bind `values` against `pattern` in a new child frame of `parent`.
pub fn bind_frame(
    pattern: &BindingPattern,
    values: &[MallowVal],
    parent: &Env,
    name: Option<&str>,
) -> Result<Env> {
    let (names, vals): (Vec<Symbol>, Vec<MallowVal>) =
        destructure(pattern, values, name)?.into_iter().unzip();
    Env::new_frame(parent, &names, vals)
}

/// Bind `values` against `pattern` directly in `env`.
pub fn bind_into(pattern: &BindingPattern, values: &[MallowVal], env: &Env) -> Result<()> {
    for (sym, val) in destructure(pattern, values, None)? {
        env.define(sym, val);
    }
    Ok(())
}
