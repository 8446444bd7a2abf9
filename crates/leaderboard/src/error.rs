//! Error types for the leaderboard.

use leaderboard_core::DecodeError;
use leaderboard_store::StoreError;
use thiserror::Error;

/// Errors that abort a command. The host discards every write the command
/// buffered before the error surfaced.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// Arguments were malformed.
    #[error("malformed input: {0}")]
    Decode(#[from] DecodeError),

    /// The durable store failed. Surfaced unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A counter would have exceeded 256 bits.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// A command arrived before the lifecycle hook ran.
    #[error("leaderboard has not been deployed")]
    NotDeployed,

    /// The lifecycle hook was invoked a second time.
    #[error("leaderboard is already deployed")]
    AlreadyDeployed,

    /// The blocking task running a command panicked or was cancelled.
    #[error("command task failed: {0}")]
    TaskFailed(String),
}

/// Result type for leaderboard operations.
pub type Result<T> = std::result::Result<T, LeaderboardError>;
