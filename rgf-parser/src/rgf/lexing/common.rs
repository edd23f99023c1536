//! Errors raised while tokenizing an argument list

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A string literal was opened and the input ended before it was closed
    #[error("unterminated string starting at byte {offset} in argument list: {input}")]
    UnterminatedString { input: String, offset: usize },
}
