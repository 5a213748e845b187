//! The 38-bit common header: message id (6), repeat indicator (2), source MMSI (30).

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    bits::BitSequence,
    errors::{DecodeError, EncodeError},
};

pub const HEADER_BITS: usize = 38;
pub const MESSAGE_ID_BITS: usize = 6;

/// Header fields kept by every message value. The message id is implied by the
/// [`crate::Message`] variant and is not stored here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    pub repeat_indicator: u8,
    pub mmsi: u32,
}

impl Header {
    pub const fn new(mmsi: u32) -> Self {
        Header {
            repeat_indicator: 0,
            mmsi,
        }
    }

    /// Reads the message id without a cursor.
    pub fn peek_message_id(bits: &BitSequence) -> Result<u8, DecodeError> {
        Ok(bits.read_bits_at(0, MESSAGE_ID_BITS)? as u8)
    }

    /// Reads the whole header, returning the message id alongside it.
    pub fn decode(cursor: &mut BitCursor<'_>) -> Result<(u8, Self), DecodeError> {
        let message_id = cursor.read_u8(MESSAGE_ID_BITS)?;
        let header = Header {
            repeat_indicator: cursor.read_u8(2)?,
            mmsi: cursor.read_u32(30)?,
        };
        Ok((message_id, header))
    }

    pub fn encode(&self, message_id: u8, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(message_id), MESSAGE_ID_BITS)?;
        writer.append_unsigned(u64::from(self.repeat_indicator), 2)?;
        writer.append_unsigned(u64::from(self.mmsi), 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_round_trip() {
        let header = Header {
            repeat_indicator: 3,
            mmsi: 123_456_789,
        };
        let mut writer = BitWriter::new();
        header.encode(18, &mut writer).unwrap();
        let bits = writer.into_bits();
        assert_eq!(bits.len(), HEADER_BITS);
        assert_eq!(Header::peek_message_id(&bits).unwrap(), 18);

        let mut cursor = BitCursor::new(&bits);
        assert_eq!(Header::decode(&mut cursor).unwrap(), (18, header));
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_header_overflow() {
        let mut writer = BitWriter::new();
        assert!(matches!(
            Header::new(1 << 30).encode(1, &mut writer),
            Err(EncodeError::FieldOverflow { width: 30, .. })
        ));
        assert!(matches!(
            Header::new(1).encode(64, &mut BitWriter::new()),
            Err(EncodeError::FieldOverflow { width: 6, .. })
        ));
    }

    #[test]
    fn test_peek_short_payload() {
        let bits = BitSequence::from_armored("1", 2).unwrap();
        assert!(matches!(
            Header::peek_message_id(&bits),
            Err(DecodeError::TruncatedPayload {
                needed: 6,
                remaining: 4,
                ..
            })
        ));
    }
}
