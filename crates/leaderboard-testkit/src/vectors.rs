//! Golden test vectors for deterministic verification.
//!
//! Selectors and notification records are consumed by external indexers, so
//! their bytes are pinned here. Storage keys are pinned only against
//! themselves (determinism and distinctness); any change to them is a
//! breaking migration of persisted data.

use serde::{Deserialize, Serialize};

use leaderboard::core::{Slot, StorageKey};
use leaderboard::{Command, Identity, Score, ScoreSubmitted};

/// What a golden vector exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VectorInput {
    /// Selector derived from a method signature.
    Selector { signature: String },
    /// `ScoreSubmitted` encoding for a player byte pattern and a score.
    Notification { player_byte: u8, score: u64 },
}

/// A golden test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: String,
    pub input: VectorInput,
    /// Expected output (hex).
    pub expected_hex: String,
}

fn selector_vector(command: Command, expected_hex: &str) -> GoldenVector {
    GoldenVector {
        name: format!("selector {}", command.signature()),
        input: VectorInput::Selector {
            signature: command.signature().to_string(),
        },
        expected_hex: expected_hex.to_string(),
    }
}

fn notification_vector(name: &str, player_byte: u8, score: u64) -> GoldenVector {
    let mut expected = hex::encode([player_byte; 32]);
    expected.push_str(&format!("{:064x}", score));
    GoldenVector {
        name: name.to_string(),
        input: VectorInput::Notification { player_byte, score },
        expected_hex: expected,
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        selector_vector(Command::SubmitScore, "52e25690"),
        selector_vector(Command::GetScore, "0d0100d4"),
        selector_vector(Command::GetTopScore, "9636a45d"),
        selector_vector(Command::GetTotalPlayers, "d0d61a5e"),
        notification_vector("first score", 0x11, 100),
        notification_vector("zero-byte player", 0x00, 1),
        notification_vector("large score", 0xff, u64::MAX),
    ]
}

/// Compute the output for a vector's input.
pub fn compute(input: &VectorInput) -> String {
    match input {
        VectorInput::Selector { signature } => {
            hex::encode(leaderboard::Selector::from_signature(signature).to_be_bytes())
        }
        VectorInput::Notification { player_byte, score } => {
            let event = ScoreSubmitted::new(Identity::from_bytes([*player_byte; 32]), Score::from(*score));
            hex::encode(event.encode())
        }
    }
}

/// Verify all golden vectors. Returns `(name, matches, computed_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let got = compute(&v.input);
            (v.name.clone(), got == v.expected_hex, got)
        })
        .collect()
}

/// Render the vector set as pretty JSON for other implementations.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}

/// The storage keys of the fixed slots, for persisted-layout checks.
pub fn slot_keys() -> Vec<(Slot, StorageKey)> {
    [
        Slot::HOST_METADATA,
        Slot::PLAYER_SCORE,
        Slot::TOP_SCORE,
        Slot::TOTAL_PLAYERS,
    ]
    .into_iter()
    .map(|slot| (slot, StorageKey::singleton(slot)))
    .collect()
}
