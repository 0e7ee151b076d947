// mallow-parser - Lexer for Mallow
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Lexer (tokeniser) for Mallow source code.
//!
//! Tokens borrow their text from the source string. The lexer never fails:
//! an unterminated string is returned as-is and rejected by the reader, and
//! comments are returned as `Token::Comment` so the reader can skip them.

use std::fmt;

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    // Delimiters
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    // Reader macros
    Quote,         // '
    Quasiquote,    // `
    Unquote,       // ~
    SpliceUnquote, // ~@
    Deref,         // @
    Meta,          // ^

    /// String literal including its quotes, possibly unterminated
    Str(&'a str),
    /// `;` comment up to (not including) the end of the line
    Comment(&'a str),
    /// Anything else: numbers, symbols, keywords, nil/true/false
    Atom(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Quote => write!(f, "'"),
            Token::Quasiquote => write!(f, "`"),
            Token::Unquote => write!(f, "~"),
            Token::SpliceUnquote => write!(f, "~@"),
            Token::Deref => write!(f, "@"),
            Token::Meta => write!(f, "^"),
            Token::Str(s) | Token::Comment(s) | Token::Atom(s) => write!(f, "{}", s),
        }
    }
}

/// A token with the position of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub line: usize,
    pub column: usize,
}

/// The lexer converts source code into tokens.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the next token, or None at end of input.
    pub fn next_token(&mut self) -> Option<Spanned<'a>> {
        self.skip_separators();

        let (line, column) = (self.line, self.column);
        let start = self.pos;
        let c = self.peek()?;

        let token = match c {
            '(' => self.single(Token::LParen),
            ')' => self.single(Token::RParen),
            '[' => self.single(Token::LBracket),
            ']' => self.single(Token::RBracket),
            '{' => self.single(Token::LBrace),
            '}' => self.single(Token::RBrace),
            '\'' => self.single(Token::Quote),
            '`' => self.single(Token::Quasiquote),
            '@' => self.single(Token::Deref),
            '^' => self.single(Token::Meta),
            '~' => {
                self.advance();
                if self.peek() == Some('@') {
                    self.advance();
                    Token::SpliceUnquote
                } else {
                    Token::Unquote
                }
            }
            '"' => {
                self.read_string();
                Token::Str(&self.source[start..self.pos])
            }
            ';' => {
                self.read_comment();
                Token::Comment(&self.source[start..self.pos])
            }
            _ => {
                self.read_atom();
                Token::Atom(&self.source[start..self.pos])
            }
        };

        Some(Spanned {
            token,
            line,
            column,
        })
    }

    /// Collect all tokens into a vector.
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while let Some(spanned) = self.next_token() {
            tokens.push(spanned.token);
        }
        tokens
    }

    /// Get the current line number (1-indexed).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the current column number (1-indexed).
    pub fn column(&self) -> usize {
        self.column
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn single(&mut self, token: Token<'a>) -> Token<'a> {
        self.advance();
        token
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == ',' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_string(&mut self) {
        self.advance(); // consume opening "
        while let Some(c) = self.advance() {
            match c {
                '"' => return,
                '\\' => {
                    self.advance();
                }
                _ => {}
            }
        }
    }

    fn read_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn read_atom(&mut self) {
        while let Some(c) = self.peek() {
            if is_atom_char(c) {
                self.advance();
            } else {
                break;
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Spanned<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Characters that may appear inside an atom token.
fn is_atom_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '[' | ']' | '{' | '}' | '(' | ')' | '\'' | '`' | '~' | '^' | '@' | '"' | ',' | ';')
}

/// Tokenize a string (convenience function).
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// Tests
// ============================================================================
