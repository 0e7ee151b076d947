// mallow-core - I/O and string built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Printing and string conversion: str, pr-str, prn, println, slurp

use mallow_parser::MallowVal;

use crate::error::{Error, Result};

use super::check_arity;

fn join(args: &[MallowVal], readable: bool, sep: &str) -> String {
    args.iter()
        .map(|arg| arg.pr_str(readable))
        .collect::<Vec<_>>()
        .join(sep)
}

/// (str & args) - display forms concatenated
pub(crate) fn builtin_str(args: &[MallowVal]) -> Result<MallowVal> {
    Ok(MallowVal::string(join(args, false, "")))
}

/// (pr-str & args) - readable forms joined by spaces
pub(crate) fn builtin_pr_str(args: &[MallowVal]) -> Result<MallowVal> {
    Ok(MallowVal::string(join(args, true, " ")))
}

/// (prn & args) - print readable forms and a newline
pub(crate) fn builtin_prn(args: &[MallowVal]) -> Result<MallowVal> {
    println!("{}", join(args, true, " "));
    Ok(MallowVal::Nil)
}

/// (println & args) - print display forms and a newline
pub(crate) fn builtin_println(args: &[MallowVal]) -> Result<MallowVal> {
    println!("{}", join(args, false, " "));
    Ok(MallowVal::Nil)
}

/// (slurp path) - the contents of a file as a string
pub(crate) fn builtin_slurp(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("slurp", args, 1)?;
    let MallowVal::String(path) = &args[0] else {
        return Err(Error::type_error_in("slurp", "string", args[0].type_name()));
    };
    log::debug!("slurp {}", path);
    std::fs::read_to_string(&**path)
        .map(MallowVal::string)
        .map_err(|e| Error::runtime(format!("slurp: cannot read '{}': {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_uses_display_forms() {
        let args = [MallowVal::string("a\"b"), MallowVal::int(1), MallowVal::nil()];
        assert_eq!(builtin_str(&args).unwrap(), MallowVal::string("a\"b1nil"));
    }

    #[test]
    fn test_pr_str_uses_readable_forms() {
        let args = [MallowVal::string("a\nb"), MallowVal::keyword("k")];
        assert_eq!(builtin_pr_str(&args).unwrap(), MallowVal::string("\"a\\nb\" :k"));
        assert_eq!(builtin_pr_str(&[]).unwrap(), MallowVal::string(""));
    }

    #[test]
    fn test_slurp_missing_file() {
        let err = builtin_slurp(&[MallowVal::string("/nonexistent/mallow/file.mal")]).unwrap_err();
        assert_eq!(err.kind_name(), "RuntimeError");
        assert!(builtin_slurp(&[MallowVal::int(1)]).is_err());
    }
}
