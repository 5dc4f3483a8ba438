//! Request language - lexer and grammar
//!
//! A request is written as:
//!
//! ```text
//! METHOD URL [NAME : VALUE]* [-FLAG]*
//! ```
//!
//! Values are bare words or double-quoted strings, `#` starts a comment that
//! runs to the end of the line, and line breaks only separate tokens.

pub mod grammar;
pub mod lexer;

use thiserror::Error;

pub use grammar::parse;
pub use lexer::{Lexer, Token};

/// What went wrong while reading a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `"` was never closed
    UnterminatedQuote,
    /// Input ended where another token was required
    UnexpectedEof { expected: &'static str },
    /// A token of the wrong kind sat in a required slot
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    /// A header entry followed a flag
    HeaderAfterFlag,
    /// The URL was given as `""`
    EmptyUrl,
}

/// Syntax error with the byte offset it was detected at
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at byte {offset}: {kind:?}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        ParseError { kind, offset }
    }
}
