//! Patty Reader - turns source text into `Value` expression trees.
//!
//! Layers, lowest first:
//! - [`Cursor`]: byte position over the source text
//! - [`Scanner`]: skips whitespace and `#` comments, yields [`Token`]s
//! - [`Reader`]: builds one `Value` per call from the token stream
//!
//! The reader consumes a *prefix* of its input per call. A `)` or the end of
//! input reads as `Nil`, which is also how a list knows it is finished.
//! Malformed input is reported as a [`ReadError`]; nothing is recovered.

mod cursor;
mod errors;
mod reader;
mod scanner;

pub use cursor::Cursor;
pub use errors::ReadError;
pub use reader::{read, Reader};
pub use scanner::{tokenize, Scanner, Span, Token, TokenKind};
