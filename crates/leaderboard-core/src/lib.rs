//! # Leaderboard Core
//!
//! Pure primitives for the leaderboard: identities, scores, command selectors,
//! storage addressing, the calldata codec, and the notification layout.
//!
//! This crate contains no I/O and no storage. Everything here is a pure
//! function over bytes.
//!
//! ## Key Types
//!
//! - [`Identity`] - Fixed-width participant identifier supplied by the host
//! - [`Score`] - 256-bit unsigned score (re-exported `U256`)
//! - [`Selector`] - 4-byte command code derived from a method signature
//! - [`StorageKey`] - Slot-namespaced key derived with Blake3
//! - [`ScoreSubmitted`] - The fixed-layout record published on every accepted score
//!
//! ## Wire Layout
//!
//! All integers are unsigned, big-endian, 32 bytes wide. Identities are 32 bytes.
//! See [`codec`] for argument decoding and result encoding.

pub mod addressing;
pub mod codec;
pub mod error;
pub mod event;
pub mod types;

pub use addressing::{Slot, StorageKey, StorageValue};
pub use codec::{BytesWriter, Calldata};
pub use error::{DecodeError, Result};
pub use event::{Notification, ScoreSubmitted};
pub use types::{Identity, Score, Selector, IDENTITY_LEN, U256, WORD_LEN};
