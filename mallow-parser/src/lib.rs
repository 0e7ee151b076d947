// mallow-parser - Lexer and reader for the Mallow programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # mallow-parser
//!
//! Value model, lexer, reader and printer for the Mallow programming language.
//! Produces `MallowVal` forms from source code strings.

pub mod keyword;
pub mod lexer;
pub mod printer;
pub mod reader;
pub mod symbol;
pub mod value;

pub use im::{OrdMap, Vector};
pub use keyword::Keyword;
pub use lexer::{Lexer, Spanned, Token};
pub use printer::{Printed, escape_string};
pub use reader::{Read, ReadError, ReadErrorKind, Reader, read, read_all};
pub use symbol::Symbol;
pub use value::{BindingPattern, KeyedMap, MallowAtom, MallowBuiltin, MallowClosure, MallowVal};
