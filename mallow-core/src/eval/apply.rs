// mallow-core - Function application
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Function application for Mallow.

use std::any::Any;
use std::rc::Rc;

use mallow_parser::{MallowBuiltin, MallowClosure, MallowVal};

use super::destructuring::bind_frame;
use super::{Step, eval};
use crate::env::Env;
use crate::error::{Error, Result};
use crate::interpreter::Interpreter;

/// Type alias for native function signature.
pub type NativeFnImpl = dyn Fn(&Interpreter, &[MallowVal]) -> Result<MallowVal>;

/// Apply a function to arguments, running any tail call to completion.
pub fn apply(interp: &Interpreter, func: &MallowVal, args: &[MallowVal]) -> Result<MallowVal> {
    match apply_step(interp, func, args)? {
        Step::Done(val) => Ok(val),
        Step::TailCall(body, env) => eval(interp, &body, &env),
    }
}

/// Apply a function, leaving a closure body for the trampoline to run.
pub(crate) fn apply_step(
    interp: &Interpreter,
    func: &MallowVal,
    args: &[MallowVal],
) -> Result<Step> {
    match func {
        MallowVal::Builtin(f) => apply_native(interp, f, args).map(Step::Done),
        MallowVal::Closure(f) => {
            let frame = closure_frame(f, args)?;
            Ok(Step::TailCall(f.body.clone(), frame))
        }
        other => Err(Error::NotCallable(other.to_string())),
    }
}

/// Bind a closure's parameters in a child of its captured environment.
pub(crate) fn closure_frame(func: &MallowClosure, args: &[MallowVal]) -> Result<Env> {
    let captured_env = func
        .env
        .downcast_ref::<Env>()
        .ok_or_else(|| Error::Internal("Function environment has invalid type".into()))?;
    bind_frame(&func.pattern, args, captured_env, func.display_name())
}

/// Apply a native function.
pub(crate) fn apply_native(
    interp: &Interpreter,
    func: &MallowBuiltin,
    args: &[MallowVal],
) -> Result<MallowVal> {
    let f = func
        .func()
        .downcast_ref::<Rc<NativeFnImpl>>()
        .ok_or_else(|| Error::Internal("Native function has invalid type".into()))?;
    f(interp, args)
}

/// Create a native function value.
pub fn make_native_fn(
    name: &'static str,
    func: impl Fn(&Interpreter, &[MallowVal]) -> Result<MallowVal> + 'static,
) -> MallowBuiltin {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    let func_any: Rc<dyn Any> = Rc::new(func_rc);
    MallowBuiltin::new(name, func_any)
}

/// Create a closure value capturing `env`.
pub(crate) fn make_closure(
    pattern: mallow_parser::BindingPattern,
    body: MallowVal,
    env: &Env,
) -> MallowVal {
    let env_any: Rc<dyn Any> = Rc::new(env.clone());
    MallowVal::closure(MallowClosure::new(pattern, body, env_any))
}
