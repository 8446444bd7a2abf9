//! Strong type definitions for the leaderboard.
//!
//! Identities and selectors are newtypes so they cannot be confused with
//! arbitrary byte strings or integers.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

pub use primitive_types::U256;

/// A 256-bit unsigned score. Compared with unsigned total order.
pub type Score = U256;

/// Width in bytes of an encoded [`Identity`].
pub const IDENTITY_LEN: usize = 32;

/// Width in bytes of an encoded 256-bit word.
pub const WORD_LEN: usize = 32;

/// A 32-byte participant identity.
///
/// Identities are supplied by the host (the authenticated caller of a command,
/// or an explicit argument to a read). The core never mints them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity(pub [u8; IDENTITY_LEN]);

impl Identity {
    /// The all-zero identity. Hosts use it as the caller of read-only commands.
    pub const ZERO: Self = Self([0u8; IDENTITY_LEN]);

    /// Create an identity from raw bytes.
    pub const fn from_bytes(bytes: [u8; IDENTITY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; IDENTITY_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != IDENTITY_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; IDENTITY_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; IDENTITY_LEN]> for Identity {
    fn from(bytes: [u8; IDENTITY_LEN]) -> Self {
        Self(bytes)
    }
}

/// A 4-byte command code.
///
/// Codes are the first four bytes of SHA-256 over the human-readable method
/// signature, read big-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector(pub u32);

impl Selector {
    /// Derive the selector for a method signature such as `"getTopScore()"`.
    pub fn from_signature(signature: &str) -> Self {
        let digest = Sha256::digest(signature.as_bytes());
        Self(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
    }

    /// Create from a raw code.
    pub const fn from_u32(code: u32) -> Self {
        Self(code)
    }

    /// Big-endian byte form.
    pub const fn to_be_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({:#010x})", self.0)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for Selector {
    fn from(code: u32) -> Self {
        Self(code)
    }
}
