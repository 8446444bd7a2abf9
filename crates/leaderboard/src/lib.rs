//! # Leaderboard
//!
//! A persistent high-score table. It keeps each player's best score, the
//! single highest score across all players, and the number of distinct
//! players, and publishes a notification whenever a player beats their
//! own best.
//!
//! ## Overview
//!
//! - **Commands** arrive as a 4-byte selector plus fixed-width arguments and
//!   are routed by [`Router`].
//! - **Updates** follow one rule ([`rule::submit`]): only a strictly higher
//!   score is accepted, and it can raise the top score and the player count
//!   but never lower anything.
//! - **Notifications** are `ScoreSubmitted` records published through an
//!   [`EventSink`] after the command's writes commit.
//! - **Hosting**: [`Host`] runs each command atomically against a
//!   [`Store`](leaderboard_store::Store), and [`LeaderboardService`] shares a
//!   host across async tasks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use leaderboard::{Host, HostConfig, Identity, Score};
//! use leaderboard::store::SqliteStore;
//!
//! let store = SqliteStore::open("leaderboard.db").unwrap();
//! let mut host = Host::new(store, Vec::new(), HostConfig::default());
//! host.deploy().unwrap();
//!
//! let alice = Identity::from_bytes([0xa1; 32]);
//! assert!(host.submit_score(alice, Score::from(100u64)).unwrap());
//! assert_eq!(host.top_score().unwrap(), Score::from(100u64));
//! ```
//!
//! ## Re-exports
//!
//! - `leaderboard::core` - Primitives (Identity, Score, Selector, codec)
//! - `leaderboard::store` - Storage trait and backends

pub mod aggregates;
pub mod emitter;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod router;
pub mod rule;
pub mod service;

// Re-export component crates
pub use leaderboard_core as core;
pub use leaderboard_store as store;

// Re-export main types for convenience
pub use aggregates::Aggregates;
pub use emitter::{emit_score_submitted, BroadcastSink, EventSink};
pub use error::{LeaderboardError, Result};
pub use host::{Host, HostConfig};
pub use router::{CallContext, Command, Router};
pub use service::LeaderboardService;

// Re-export commonly used core types
pub use leaderboard_core::{Identity, Notification, Score, ScoreSubmitted, Selector, U256};
