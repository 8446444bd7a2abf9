//! Error types for the leaderboard core.

use thiserror::Error;

/// Errors raised while decoding command arguments or encoded records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },

    #[error("{0} trailing bytes after arguments")]
    TrailingBytes(usize),

    #[error("invalid boolean byte: {0:#04x}")]
    InvalidBool(u8),

    #[error("invalid record length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
