//! Calldata codec: fixed-width argument decoding and result encoding.
//!
//! ## Layout
//!
//! | Type | Width | Encoding |
//! |---|---|---|
//! | `uint256` | 32 | unsigned big-endian |
//! | `address` | 32 | raw identity bytes |
//! | `bool` | 1 | `0x00` or `0x01` |
//!
//! Arguments are concatenated with no padding or length prefixes.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{DecodeError, Result};
use crate::types::{Identity, Score, IDENTITY_LEN, WORD_LEN};

/// A read cursor over encoded arguments.
#[derive(Debug, Clone)]
pub struct Calldata<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Calldata<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(DecodeError::UnexpectedEnd { needed, remaining });
        }
        let slice = &self.bytes[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(slice)
    }

    /// Read a 32-byte big-endian unsigned integer.
    pub fn read_u256(&mut self) -> Result<Score> {
        Ok(Score::from_big_endian(self.take(WORD_LEN)?))
    }

    /// Read a 32-byte identity.
    pub fn read_identity(&mut self) -> Result<Identity> {
        let mut arr = [0u8; IDENTITY_LEN];
        arr.copy_from_slice(self.take(IDENTITY_LEN)?);
        Ok(Identity(arr))
    }

    /// Read a single-byte boolean. Anything other than 0 or 1 is rejected.
    pub fn read_bool(&mut self) -> Result<bool> {
        match self.take(1)?[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::InvalidBool(other)),
        }
    }

    /// Fail if any bytes remain unread.
    pub fn finish(self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(DecodeError::TrailingBytes(n)),
        }
    }
}

/// A growable writer for results and client-side calldata.
#[derive(Debug, Default)]
pub struct BytesWriter {
    buf: BytesMut,
}

impl BytesWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub fn write_u256(&mut self, value: Score) -> &mut Self {
        let mut word = [0u8; WORD_LEN];
        value.to_big_endian(&mut word);
        self.buf.put_slice(&word);
        self
    }

    pub fn write_identity(&mut self, identity: &Identity) -> &mut Self {
        self.buf.put_slice(identity.as_bytes());
        self
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.buf.put_u8(u8::from(value));
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Freeze into immutable bytes.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u256_big_endian() {
        let mut word = [0u8; 32];
        word[31] = 100;
        let mut calldata = Calldata::new(&word);
        assert_eq!(calldata.read_u256().unwrap(), Score::from(100u64));
        assert_eq!(calldata.remaining(), 0);
    }

    #[test]
    fn test_short_input_is_rejected() {
        let mut calldata = Calldata::new(&[0u8; 31]);
        assert_eq!(
            calldata.read_u256(),
            Err(DecodeError::UnexpectedEnd {
                needed: 32,
                remaining: 31
            })
        );
    }

    #[test]
    fn test_short_read_does_not_advance() {
        let mut calldata = Calldata::new(&[0u8; 10]);
        assert!(calldata.read_identity().is_err());
        assert_eq!(calldata.remaining(), 10);
    }

    #[test]
    fn test_finish_reports_trailing_bytes() {
        let bytes = [0u8; 33];
        let mut calldata = Calldata::new(&bytes);
        calldata.read_u256().unwrap();
        assert_eq!(calldata.finish(), Err(DecodeError::TrailingBytes(1)));
    }

    #[test]
    fn test_invalid_bool() {
        let mut calldata = Calldata::new(&[2]);
        assert_eq!(calldata.read_bool(), Err(DecodeError::InvalidBool(2)));
    }

    #[test]
    fn test_writer_layout() {
        let id = Identity::from_bytes([0xaa; 32]);
        let mut writer = BytesWriter::new();
        writer
            .write_identity(&id)
            .write_u256(Score::from(1u64))
            .write_bool(true);
        let bytes = writer.into_bytes();

        assert_eq!(bytes.len(), 65);
        assert_eq!(&bytes[..32], &[0xaa; 32]);
        assert_eq!(bytes[63], 1);
        assert_eq!(bytes[64], 1);
    }

    #[test]
    fn test_max_score_survives_codec() {
        let mut writer = BytesWriter::new();
        writer.write_u256(Score::MAX);
        let bytes = writer.into_bytes();
        assert!(bytes.iter().all(|b| *b == 0xff));
        assert_eq!(Calldata::new(&bytes).read_u256().unwrap(), Score::MAX);
    }

    proptest::proptest! {
        #[test]
        fn test_reader_never_overruns(bytes in proptest::collection::vec(proptest::num::u8::ANY, 0..80)) {
            let mut calldata = Calldata::new(&bytes);
            let mut consumed = 0;
            while calldata.read_u256().is_ok() {
                consumed += WORD_LEN;
            }
            proptest::prop_assert_eq!(consumed, bytes.len() / WORD_LEN * WORD_LEN);
            proptest::prop_assert_eq!(calldata.remaining(), bytes.len() % WORD_LEN);
        }
    }
}
