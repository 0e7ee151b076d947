// mallow-parser - Reader for Mallow
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Recursive descent reader for Mallow source code.
//!
//! Converts tokens into `MallowVal` forms. Reading one token stream yields one
//! value per top-level form; a top-level comment yields [`Read::Skip`] and the
//! end of input yields `None`, so neither is confused with `nil` or an error.

use std::fmt;

use crate::lexer::{Lexer, Spanned, Token};
use crate::value::MallowVal;

/// The two ways reading can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadErrorKind {
    /// Input ended inside a form, or a closing delimiter had no opener
    UnbalancedInput,
    /// A token that cannot be turned into a value
    InvalidLiteral,
}

/// Reader error with position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    pub kind: ReadErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Read error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ReadError {}

/// The outcome of reading one top-level token run.
#[derive(Debug, Clone, PartialEq)]
pub enum Read {
    /// A complete form
    Form(MallowVal),
    /// A comment: no value was produced, but input remains
    Skip,
}

/// The reader converts tokens into `MallowVal` forms.
pub struct Reader<'a> {
    lexer: Lexer<'a>,
    current: Option<Spanned<'a>>,
}

impl<'a> Reader<'a> {
    /// Create a new reader for the given source code.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Reader { lexer, current }
    }

    /// Read one top-level item.
    ///
    /// Returns `None` at end of input and `Some(Read::Skip)` for a comment.
    pub fn read_form(&mut self) -> Result<Option<Read>, ReadError> {
        let Some(spanned) = self.current else {
            return Ok(None);
        };
        if let Token::Comment(_) = spanned.token {
            self.advance();
            return Ok(Some(Read::Skip));
        }
        Ok(Some(Read::Form(self.read_value()?)))
    }

    /// Read the next form, skipping comments. Returns None at end of input.
    pub fn next_form(&mut self) -> Result<Option<MallowVal>, ReadError> {
        loop {
            match self.read_form()? {
                Some(Read::Form(form)) => return Ok(Some(form)),
                Some(Read::Skip) => continue,
                None => return Ok(None),
            }
        }
    }

    /// Read all remaining forms.
    pub fn read_all(&mut self) -> Result<Vec<MallowVal>, ReadError> {
        let mut forms = Vec::new();
        while let Some(form) = self.next_form()? {
            forms.push(form);
        }
        Ok(forms)
    }

    // ========================================================================
    // Internal reading methods
    // ========================================================================

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn error(&self, kind: ReadErrorKind, message: impl Into<String>) -> ReadError {
        let (line, column) = match self.current {
            Some(spanned) => (spanned.line, spanned.column),
            None => (self.lexer.line(), self.lexer.column()),
        };
        ReadError {
            kind,
            message: message.into(),
            line,
            column,
        }
    }

    fn skip_comments(&mut self) {
        while let Some(Spanned {
            token: Token::Comment(_),
            ..
        }) = self.current
        {
            self.advance();
        }
    }

    /// Read a form that must be present: comments are skipped and the end of
    /// input is an error.
    fn read_value(&mut self) -> Result<MallowVal, ReadError> {
        self.skip_comments();
        let Some(spanned) = self.current else {
            return Err(self.error(ReadErrorKind::UnbalancedInput, "Unexpected end of input"));
        };

        match spanned.token {
            // Collections
            Token::LParen => Ok(MallowVal::List(self.read_seq(Token::RParen)?)),
            Token::LBracket => Ok(MallowVal::Vector(self.read_seq(Token::RBracket)?)),
            Token::LBrace => self.read_hashmap(),

            // Reader macros
            Token::Quote => self.read_quoted("quote"),
            Token::Quasiquote => self.read_quoted("quasiquote"),
            Token::Unquote => self.read_quoted("unquote"),
            Token::SpliceUnquote => self.read_quoted("splice-unquote"),
            Token::Deref => self.read_quoted("deref"),
            Token::Meta => self.read_meta(),

            // Atoms
            Token::Str(text) => {
                let val = read_string(text).map_err(|message| ReadError {
                    kind: ReadErrorKind::UnbalancedInput,
                    message,
                    line: spanned.line,
                    column: spanned.column,
                })?;
                self.advance();
                Ok(val)
            }
            Token::Atom(text) => {
                let val = read_atom(text).map_err(|message| ReadError {
                    kind: ReadErrorKind::InvalidLiteral,
                    message,
                    line: spanned.line,
                    column: spanned.column,
                })?;
                self.advance();
                Ok(val)
            }

            // Unexpected tokens
            Token::RParen | Token::RBracket | Token::RBrace => Err(self.error(
                ReadErrorKind::UnbalancedInput,
                format!("Unexpected '{}'", spanned.token),
            )),
            Token::Comment(_) => Err(self.error(
                ReadErrorKind::UnbalancedInput,
                "Unexpected comment",
            )),
        }
    }

    fn read_seq(&mut self, close: Token<'a>) -> Result<im::Vector<MallowVal>, ReadError> {
        self.advance(); // consume the opener
        let mut elements = im::Vector::new();

        loop {
            self.skip_comments();
            match self.current {
                None => {
                    return Err(self.error(
                        ReadErrorKind::UnbalancedInput,
                        format!("Expected '{}', got end of input", close),
                    ))
                }
                Some(spanned) if spanned.token == close => {
                    self.advance();
                    return Ok(elements);
                }
                Some(_) => elements.push_back(self.read_value()?),
            }
        }
    }

    fn read_hashmap(&mut self) -> Result<MallowVal, ReadError> {
        self.advance(); // consume {
        let mut pairs = Vec::new();

        loop {
            self.skip_comments();
            match self.current {
                None => {
                    return Err(self.error(
                        ReadErrorKind::UnbalancedInput,
                        "Expected '}', got end of input",
                    ))
                }
                Some(Spanned {
                    token: Token::RBrace,
                    ..
                }) => {
                    self.advance();
                    return Ok(MallowVal::hash_map(pairs));
                }
                Some(_) => {
                    let key = self.read_value()?;
                    self.skip_comments();
                    if matches!(
                        self.current,
                        None | Some(Spanned {
                            token: Token::RBrace,
                            ..
                        })
                    ) {
                        return Err(self.error(
                            ReadErrorKind::UnbalancedInput,
                            format!("Map key {} has no value", key),
                        ));
                    }
                    let value = self.read_value()?;
                    pairs.push((key, value));
                }
            }
        }
    }

    fn read_quoted(&mut self, name: &str) -> Result<MallowVal, ReadError> {
        self.advance(); // consume the quote token
        let form = self.read_value()?;
        Ok(MallowVal::list(vec![MallowVal::symbol(name), form]))
    }

    /// `^{meta} obj` reads as `(with-meta obj {meta})`.
    fn read_meta(&mut self) -> Result<MallowVal, ReadError> {
        self.advance(); // consume ^
        if !matches!(
            self.current,
            Some(Spanned {
                token: Token::LBrace,
                ..
            })
        ) {
            return Err(self.error(
                ReadErrorKind::InvalidLiteral,
                "Metadata must be a hash-map literal",
            ));
        }
        let meta = self.read_hashmap()?;
        let obj = self.read_value()?;
        Ok(MallowVal::list(vec![
            MallowVal::symbol("with-meta"),
            obj,
            meta,
        ]))
    }
}

/// Decode a string token (including its quotes).
fn read_string(text: &str) -> Result<MallowVal, String> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().skip(1);

    while let Some(c) = chars.next() {
        match c {
            '"' => return Ok(MallowVal::string(result)),
            '\\' => match chars.next() {
                Some('n') => result.push('\n'),
                Some(escaped) => result.push(escaped),
                None => break,
            },
            _ => result.push(c),
        }
    }

    Err("Unterminated string".to_string())
}

/// Interpret an atom token: keyword, literal constant, integer or symbol.
fn read_atom(text: &str) -> Result<MallowVal, String> {
    if let Some(name) = text.strip_prefix(':') {
        return Ok(MallowVal::keyword(name));
    }

    match text {
        "nil" => return Ok(MallowVal::nil()),
        "true" => return Ok(MallowVal::bool(true)),
        "false" => return Ok(MallowVal::bool(false)),
        _ => {}
    }

    let digits = text.strip_prefix('-').unwrap_or(text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<i64>()
            .map(MallowVal::int)
            .map_err(|_| format!("Integer literal out of range: {}", text));
    }

    if text.starts_with('-') && text.contains(':') {
        return Ok(MallowVal::symbol("-"));
    }

    Ok(MallowVal::symbol(text))
}

/// Read the first form of a string, skipping leading comments.
pub fn read(source: &str) -> Result<Option<MallowVal>, ReadError> {
    Reader::new(source).next_form()
}

/// Read every form of a string.
pub fn read_all(source: &str) -> Result<Vec<MallowVal>, ReadError> {
    Reader::new(source).read_all()
}

// ============================================================================
// Tests
// ============================================================================
