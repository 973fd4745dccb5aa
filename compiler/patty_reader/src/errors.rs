//! Reader errors. Offsets are byte offsets into the text being read.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString { offset: usize },

    #[error("unexpected character {ch:?} at byte {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("integer literal {text} at byte {offset} does not fit in 64 bits")]
    IntegerOutOfRange { text: String, offset: usize },
}
