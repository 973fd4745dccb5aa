//! S-expression reader.
//!
//! `(` opens a list, which collects elements until a read returns `Nil`.
//! Both `)` and end of input read as `Nil`, so unbalanced input is accepted:
//! missing closers end the list at end of input, and a stray `)` reads as an
//! empty expression.

use patty_stack::ensure_sufficient_stack;
use patty_value::Value;

use crate::errors::ReadError;
use crate::scanner::{Scanner, Token, TokenKind};

pub struct Reader<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Reader<'a> {
    pub fn new(source: &'a str) -> Self {
        Reader {
            scanner: Scanner::new(source),
        }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.scanner.offset()
    }

    /// Read the next expression.
    pub fn read(&mut self) -> Result<Value, ReadError> {
        ensure_sufficient_stack(|| {
            let Some(token) = self.scanner.next_token()? else {
                return Ok(Value::Nil);
            };
            match token.kind {
                TokenKind::LParen => self.list(),
                TokenKind::RParen => Ok(Value::Nil),
                TokenKind::Str => Ok(Value::string(token.text)),
                TokenKind::Int => integer(&token),
                TokenKind::Symbol => Ok(Value::symbol(token.text)),
            }
        })
    }

    fn list(&mut self) -> Result<Value, ReadError> {
        let mut items = Vec::new();
        loop {
            match self.read()? {
                Value::Nil => return Ok(Value::list(items)),
                item => items.push(item),
            }
        }
    }
}

fn integer(token: &Token<'_>) -> Result<Value, ReadError> {
    token
        .text
        .parse::<i64>()
        .map(Value::int)
        .map_err(|_| ReadError::IntegerOutOfRange {
            text: token.text.to_string(),
            offset: token.span.start,
        })
}

/// Read one expression from the front of `source` and advance `source` past
/// it. On error `source` is left unchanged.
pub fn read(source: &mut &str) -> Result<Value, ReadError> {
    let text = *source;
    let mut reader = Reader::new(text);
    let value = reader.read()?;
    *source = &text[reader.offset()..];
    Ok(value)
}
