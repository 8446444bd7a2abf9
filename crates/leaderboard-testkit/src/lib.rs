//! # Leaderboard Testkit
//!
//! Testing utilities for the leaderboard.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed selectors and notification encodings that every
//!   build must reproduce byte for byte
//! - **Generators**: Proptest strategies for identities, scores, and submission histories
//! - **Fixtures**: A deployed in-memory host with named players
//!
//! ## Golden Vectors
//!
//! ```rust
//! use leaderboard_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, got) in verify_all_vectors() {
//!     assert!(ok, "{}: {}", name, got);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use leaderboard_testkit::generators::history;
//!
//! proptest! {
//!     #[test]
//!     fn top_is_max(submissions in history(4, 32)) {
//!         // replay and check the aggregates
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use leaderboard_testkit::fixtures::TestFixture;
//! use leaderboard::Score;
//!
//! let mut fixture = TestFixture::new();
//! let alice = fixture.player(0);
//! assert!(fixture.host.submit_score(alice, Score::from(100u64)).unwrap());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_player_identities, TestFixture};
pub use generators::{history, Submission};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
