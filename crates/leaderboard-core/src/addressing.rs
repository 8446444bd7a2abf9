//! Storage addressing: slot identifiers and key derivation.
//!
//! Every persisted aggregate lives under a [`StorageKey`] derived from a
//! [`Slot`] and an optional sub-key (an identity's raw bytes). Slot values and
//! the derivation are part of the persisted layout and must never change.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Identity, Score, WORD_LEN};

/// Domain tag mixed into every key derivation.
const KEY_DOMAIN: &[u8] = b"leaderboard-slot-v0:";

/// A logical storage partition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot(pub u16);

impl Slot {
    /// Reserved for the host adapter (deployment marker).
    pub const HOST_METADATA: Self = Self(0);
    /// Per-identity best score, keyed by identity bytes.
    pub const PLAYER_SCORE: Self = Self(1);
    /// Global top score (singleton).
    pub const TOP_SCORE: Self = Self(2);
    /// Number of distinct participants (singleton).
    pub const TOTAL_PLAYERS: Self = Self(3);
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// A 32-byte storage key.
///
/// Derived as `Blake3(KEY_DOMAIN || slot_be16 || sub_key)`. The slot is fixed
/// width, so distinct `(slot, sub_key)` pairs have distinct pre-images.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StorageKey(pub [u8; 32]);

impl StorageKey {
    /// Derive the key for a slot and sub-key. Singletons pass an empty sub-key.
    pub fn derive(slot: Slot, sub_key: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(KEY_DOMAIN);
        hasher.update(&slot.0.to_be_bytes());
        hasher.update(sub_key);
        Self(*hasher.finalize().as_bytes())
    }

    /// Key for a singleton slot.
    pub fn singleton(slot: Slot) -> Self {
        Self::derive(slot, &[])
    }

    /// Key for an identity's entry within a keyed slot.
    pub fn for_identity(slot: Slot, identity: &Identity) -> Self {
        Self::derive(slot, identity.as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorageKey({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for StorageKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 32-byte stored word: a big-endian 256-bit unsigned integer.
///
/// The all-zero value doubles as the "absent" sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageValue(pub [u8; WORD_LEN]);

impl StorageValue {
    /// The zero word.
    pub const ZERO: Self = Self([0u8; WORD_LEN]);

    /// Encode a 256-bit integer.
    pub fn from_u256(value: Score) -> Self {
        let mut bytes = [0u8; WORD_LEN];
        value.to_big_endian(&mut bytes);
        Self(bytes)
    }

    /// Decode as a 256-bit integer.
    pub fn to_u256(&self) -> Score {
        Score::from_big_endian(&self.0)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; WORD_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; WORD_LEN] {
        &self.0
    }
}

impl fmt::Debug for StorageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorageValue({})", self.to_u256())
    }
}

impl From<Score> for StorageValue {
    fn from(value: Score) -> Self {
        Self::from_u256(value)
    }
}

impl From<StorageValue> for Score {
    fn from(value: StorageValue) -> Self {
        value.to_u256()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        let id = Identity::from_bytes([7; 32]);
        assert_eq!(
            StorageKey::for_identity(Slot::PLAYER_SCORE, &id),
            StorageKey::for_identity(Slot::PLAYER_SCORE, &id)
        );
    }

    #[test]
    fn test_slots_do_not_collide() {
        let keys = [
            StorageKey::singleton(Slot::HOST_METADATA),
            StorageKey::singleton(Slot::PLAYER_SCORE),
            StorageKey::singleton(Slot::TOP_SCORE),
            StorageKey::singleton(Slot::TOTAL_PLAYERS),
        ];
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn test_identity_key_differs_from_singleton() {
        let zero_id = Identity::from_bytes([0; 32]);
        assert_ne!(
            StorageKey::for_identity(Slot::PLAYER_SCORE, &zero_id),
            StorageKey::singleton(Slot::PLAYER_SCORE)
        );
    }

    #[test]
    fn test_distinct_identities_distinct_keys() {
        let a = Identity::from_bytes([1; 32]);
        let b = Identity::from_bytes([2; 32]);
        assert_ne!(
            StorageKey::for_identity(Slot::PLAYER_SCORE, &a),
            StorageKey::for_identity(Slot::PLAYER_SCORE, &b)
        );
    }

    #[test]
    fn test_value_big_endian_layout() {
        let value = StorageValue::from_u256(Score::from(0x0102u64));
        assert_eq!(value.0[30], 0x01);
        assert_eq!(value.0[31], 0x02);
        assert!(value.0[..30].iter().all(|b| *b == 0));
        assert_eq!(value.to_u256(), Score::from(0x0102u64));
    }

    #[test]
    fn test_zero_value_is_zero_score() {
        assert!(StorageValue::ZERO.to_u256().is_zero());
        assert_eq!(StorageValue::from_u256(Score::zero()), StorageValue::ZERO);
    }
}
