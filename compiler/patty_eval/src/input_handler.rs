//! Where `read` gets its input.
//!
//! Input is consumed as whitespace-delimited tokens. A token must parse as a
//! whole; `12abc` is malformed rather than `12` followed by `abc`.

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::Arc;

use parking_lot::Mutex;

use patty_value::EngineError;

/// Reads tokens from the process's standard input, one line at a time.
#[derive(Default)]
pub struct StdinInputHandler {
    pending: Mutex<VecDeque<String>>,
}

impl StdinInputHandler {
    pub fn next_token(&self) -> Result<Option<String>, EngineError> {
        let mut pending = self.pending.lock();
        loop {
            if let Some(token) = pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            let read = std::io::stdin()
                .lock()
                .read_line(&mut line)
                .map_err(|e| EngineError::Input(e.to_string()))?;
            if read == 0 {
                return Ok(None);
            }
            pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Serves tokens from text supplied up front.
#[derive(Default)]
pub struct BufferInputHandler {
    tokens: Mutex<VecDeque<String>>,
}

impl BufferInputHandler {
    pub fn new(text: &str) -> Self {
        let handler = Self::default();
        handler.push_str(text);
        handler
    }

    /// Append more input after whatever is still unread.
    pub fn push_str(&self, text: &str) {
        self.tokens
            .lock()
            .extend(text.split_whitespace().map(str::to_string));
    }

    pub fn next_token(&self) -> Option<String> {
        self.tokens.lock().pop_front()
    }
}

pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Buffer(BufferInputHandler),
}

impl InputHandlerImpl {
    /// Next whitespace-delimited token, or `None` at end of input.
    pub fn next_token(&self) -> Result<Option<String>, EngineError> {
        match self {
            Self::Stdin(h) => h.next_token(),
            Self::Buffer(h) => Ok(h.next_token()),
        }
    }

    pub fn read_int(&self) -> Result<i64, EngineError> {
        let token = self
            .next_token()?
            .ok_or_else(|| EngineError::Input("unexpected end of input".to_string()))?;
        token
            .parse()
            .map_err(|_| EngineError::Input(format!("expected an integer, got {token:?}")))
    }
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_input() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler::default()))
}

pub fn buffer_input(text: &str) -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Buffer(BufferInputHandler::new(text)))
}
