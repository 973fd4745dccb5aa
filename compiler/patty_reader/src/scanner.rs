//! Token scanner.
//!
//! Produces one [`Token`] per call, skipping whitespace and `#` line comments
//! first. Token text borrows from the source; string tokens carry their
//! payload without the surrounding quotes and with escapes left as written.

use std::fmt;

use crate::cursor::Cursor;
use crate::errors::ReadError;

/// Punctuation allowed in symbols alongside ASCII letters and digits.
const SYMBOL_PUNCTUATION: &[u8] = b"+-*/%$@!^&[]:;<>,.|=";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Str,
    Int,
    Symbol,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::Str => "string",
            TokenKind::Int => "int",
            TokenKind::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-open byte range `[start, end)` in the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Covers the whole lexeme, quotes included for strings.
    pub span: Span,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span.to_string();
        write!(f, "{span:<10} {:<7} {}", self.kind.name(), self.text)
    }
}

#[inline]
fn is_space(b: u8) -> bool {
    // `\v` is not in `u8::is_ascii_whitespace`.
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

#[inline]
fn is_symbol_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || SYMBOL_PUNCTUATION.contains(&b)
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
        }
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Next token, or `None` once only whitespace and comments remain.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, ReadError> {
        self.skip_trivia();

        let start = self.cursor.pos();
        let Some(b) = self.cursor.current() else {
            return Ok(None);
        };

        let kind = match b {
            b'(' => {
                self.cursor.advance();
                TokenKind::LParen
            }
            b')' => {
                self.cursor.advance();
                TokenKind::RParen
            }
            b'"' => return self.string(start).map(Some),
            b'-' if self.cursor.peek().is_some_and(|next| next.is_ascii_digit()) => {
                self.cursor.advance();
                self.cursor.eat_while(|b| b.is_ascii_digit());
                TokenKind::Int
            }
            b'0'..=b'9' => {
                self.cursor.eat_while(|b| b.is_ascii_digit());
                TokenKind::Int
            }
            b if is_symbol_byte(b) => {
                self.cursor.eat_while(is_symbol_byte);
                TokenKind::Symbol
            }
            _ => {
                return Err(ReadError::UnexpectedChar {
                    ch: self.cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER),
                    offset: start,
                })
            }
        };

        Ok(Some(Token {
            kind,
            text: self.cursor.slice_from(start),
            span: Span::new(start, self.cursor.pos()),
        }))
    }

    fn skip_trivia(&mut self) {
        loop {
            self.cursor.eat_while(is_space);
            if self.cursor.current() == Some(b'#') {
                self.cursor.skip_line();
            } else {
                return;
            }
        }
    }

    /// String literal: runs to the first `"` not preceded by `\`.
    fn string(&mut self, start: usize) -> Result<Token<'a>, ReadError> {
        self.cursor.advance();
        let body = self.cursor.rest();
        let bytes = body.as_bytes();

        let close = (0..bytes.len())
            .find(|&i| bytes[i] == b'"' && (i == 0 || bytes[i - 1] != b'\\'))
            .ok_or(ReadError::UnterminatedString { offset: start })?;

        let text = &body[..close];
        self.cursor.jump_to(start + 1 + close + 1);
        Ok(Token {
            kind: TokenKind::Str,
            text,
            span: Span::new(start, self.cursor.pos()),
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Every token in `source`, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ReadError> {
    Scanner::new(source).collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests unwrap for brevity")]
mod tests;
