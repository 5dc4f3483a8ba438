//! Tokenizer for the request language
//!
//! Tokens borrow from the input; the quoted-string rule has no escapes, so
//! every value is a plain slice of the source text.

use super::{ParseError, ParseErrorKind};

/// Tokens produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Bare text up to whitespace, `:` or end of input
    Word(&'a str),
    /// Text between double quotes, taken verbatim
    Quoted(&'a str),
    /// `-name`, stored without the leading dash
    Flag(&'a str),
    /// Header name/value separator
    Colon,
    /// End of input
    Eof,
}

impl Token<'_> {
    /// Short description used in error reports
    pub fn describe(&self) -> String {
        match self {
            Token::Word(w) => format!("word `{}`", w),
            Token::Quoted(s) => format!("quoted string \"{}\"", s),
            Token::Flag(f) => format!("flag `-{}`", f),
            Token::Colon => String::from("`:`"),
            Token::Eof => String::from("end of input"),
        }
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

/// Cursor over the request text
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    token_start: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            token_start: 0,
        }
    }

    /// Byte offset of the next unread character
    pub fn position(&self) -> usize {
        self.position
    }

    /// Byte offset where the most recent token started
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Produce the next token, skipping whitespace and comments first
    pub fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        loop {
            self.token_start = self.position;
            let Some(c) = self.input[self.position..].chars().next() else {
                return Ok(Token::Eof);
            };

            match c {
                c if is_blank(c) => self.position += c.len_utf8(),
                '#' => self.skip_comment(),
                ':' => {
                    self.position += 1;
                    return Ok(Token::Colon);
                }
                '"' => return self.quoted(),
                '-' => {
                    self.position += 1;
                    return Ok(Token::Flag(self.take_while(|c| !is_blank(c))));
                }
                _ => return Ok(Token::Word(self.take_while(|c| !is_blank(c) && c != ':'))),
            }
        }
    }

    /// Discard everything up to and including the next newline
    fn skip_comment(&mut self) {
        let rest = &self.input[self.position..];
        self.position += match rest.find('\n') {
            Some(idx) => idx + 1,
            None => rest.len(),
        };
    }

    fn quoted(&mut self) -> Result<Token<'a>, ParseError> {
        let input: &'a str = self.input;
        let start = self.position + 1;
        match input[start..].find('"') {
            Some(len) => {
                self.position = start + len + 1;
                Ok(Token::Quoted(&input[start..start + len]))
            }
            None => {
                self.position = input.len();
                Err(ParseError::new(
                    ParseErrorKind::UnterminatedQuote,
                    self.token_start,
                ))
            }
        }
    }

    /// Consume characters while `keep` holds; the stopping character stays unread
    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let input: &'a str = self.input;
        let rest = &input[self.position..];
        let len = rest.find(|c: char| !keep(c)).unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }
}
