//! Grammar for the request language
//!
//! ```text
//! request := WORD(method) (WORD | QUOTED)(url) header* flag* EOF
//! header  := WORD(name) ':' (WORD | QUOTED)(value)
//! flag    := '-' name
//! ```
//!
//! Flags come last: once a flag has been read, another header is an error.

use indexmap::IndexMap;
use std::collections::BTreeSet;

use super::lexer::{Lexer, Token};
use super::{ParseError, ParseErrorKind};
use crate::models::ParsedRequest;

/// Parse request text into a [`ParsedRequest`]
pub fn parse(input: &str) -> Result<ParsedRequest, ParseError> {
    Parser {
        lexer: Lexer::new(input),
    }
    .request()
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn request(&mut self) -> Result<ParsedRequest, ParseError> {
        let method = match self.next()? {
            Token::Word(method) => method,
            other => return Err(self.unexpected("method", other)),
        };

        let url = self.value("url")?;
        if url.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyUrl,
                self.lexer.token_start(),
            ));
        }

        let mut headers = IndexMap::new();
        let mut flags = BTreeSet::new();

        loop {
            match self.next()? {
                Token::Word(_) if !flags.is_empty() => {
                    return Err(ParseError::new(
                        ParseErrorKind::HeaderAfterFlag,
                        self.lexer.token_start(),
                    ));
                }
                Token::Word(name) => {
                    match self.next()? {
                        Token::Colon => {}
                        other => return Err(self.unexpected("`:` after header name", other)),
                    }
                    let value = self.value("header value")?;
                    headers.insert(name.to_string(), value.to_string());
                }
                Token::Flag(flag) => {
                    flags.insert(flag.to_string());
                }
                Token::Eof => break,
                other => return Err(self.unexpected("header name or flag", other)),
            }
        }

        Ok(ParsedRequest::new(method, url, headers, flags))
    }

    /// A slot that takes either a bare word or a quoted string
    fn value(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        match self.next()? {
            Token::Word(value) | Token::Quoted(value) => Ok(value),
            other => Err(self.unexpected(expected, other)),
        }
    }

    fn next(&mut self) -> Result<Token<'a>, ParseError> {
        self.lexer.next_token()
    }

    fn unexpected(&self, expected: &'static str, found: Token<'_>) -> ParseError {
        let kind = match found {
            Token::Eof => ParseErrorKind::UnexpectedEof { expected },
            other => ParseErrorKind::UnexpectedToken {
                expected,
                found: other.describe(),
            },
        };
        ParseError::new(kind, self.lexer.token_start())
    }
}
