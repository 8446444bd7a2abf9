//! Notification records published for external observers.
//!
//! A [`ScoreSubmitted`] record is emitted exactly once for every accepted
//! score. Its encoding is fixed:
//!
//! ```text
//! [ 32 bytes: player identity ][ 32 bytes: score, big-endian ]
//! ```

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::codec::{BytesWriter, Calldata};
use crate::error::{DecodeError, Result};
use crate::types::{Identity, Score, IDENTITY_LEN, WORD_LEN};

/// A tagged, encoded record handed to the host's notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identifying tag; never equal to a command signature.
    pub name: String,
    /// Fixed-layout payload.
    pub data: Bytes,
}

/// Published when a player sets a new personal best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmitted {
    pub player: Identity,
    pub score: Score,
}

impl ScoreSubmitted {
    pub const EVENT_NAME: &'static str = "ScoreSubmitted";

    /// Encoded width: identity followed by a 32-byte word.
    pub const ENCODED_LEN: usize = IDENTITY_LEN + WORD_LEN;

    pub fn new(player: Identity, score: Score) -> Self {
        Self { player, score }
    }

    /// Serialize into the fixed 64-byte layout.
    pub fn encode(&self) -> Bytes {
        let mut writer = BytesWriter::with_capacity(Self::ENCODED_LEN);
        writer.write_identity(&self.player).write_u256(self.score);
        writer.into_bytes()
    }

    /// Parse the fixed layout. Used by indexers and tests.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != Self::ENCODED_LEN {
            return Err(DecodeError::InvalidLength {
                expected: Self::ENCODED_LEN,
                got: data.len(),
            });
        }
        let mut reader = Calldata::new(data);
        let player = reader.read_identity()?;
        let score = reader.read_u256()?;
        Ok(Self { player, score })
    }

    /// Wrap into a tagged notification.
    pub fn to_notification(&self) -> Notification {
        Notification {
            name: Self::EVENT_NAME.to_string(),
            data: self.encode(),
        }
    }
}

impl TryFrom<&Notification> for ScoreSubmitted {
    type Error = DecodeError;

    fn try_from(notification: &Notification) -> Result<Self> {
        Self::decode(&notification.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_layout() {
        let event = ScoreSubmitted::new(Identity::from_bytes([0x11; 32]), Score::from(200u64));
        let data = event.encode();

        assert_eq!(data.len(), 64);
        assert_eq!(&data[..32], &[0x11; 32]);
        assert!(data[32..62].iter().all(|b| *b == 0));
        assert_eq!(data[62], 0x00);
        assert_eq!(data[63], 200);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!(
            ScoreSubmitted::decode(&[0u8; 52]),
            Err(DecodeError::InvalidLength {
                expected: 64,
                got: 52
            })
        );
    }

    #[test]
    fn test_notification_tag() {
        let event = ScoreSubmitted::new(Identity::from_bytes([1; 32]), Score::one());
        let notification = event.to_notification();
        assert_eq!(notification.name, "ScoreSubmitted");
        assert_eq!(ScoreSubmitted::try_from(&notification).unwrap(), event);
    }

    #[test]
    fn test_notification_serde_json() {
        let notification =
            ScoreSubmitted::new(Identity::from_bytes([2; 32]), Score::from(5u64)).to_notification();
        let json = serde_json::to_string(&notification).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, notification);
    }
}
