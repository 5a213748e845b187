//! Error types for decoding wire payloads and encoding message values.
//!
//! The two enums are deliberately separate: a [`DecodeError`] describes bad wire
//! data and is expected for individual messages in any real feed, while an
//! [`EncodeError`] means the caller handed the encoder a value it cannot emit.

use crate::layout::PayloadLength;

/// Errors produced while turning a bit sequence (or armored text) into a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The cursor ran out of bits before the layout was complete.
    #[error("truncated at bit {position}: {needed} needed, {remaining} left")]
    TruncatedPayload {
        position: usize,
        needed: usize,
        remaining: usize,
    },
    /// The declared bit length does not match what the message type allows.
    #[error("message {message_id} has {actual} bits (expected {expected})")]
    WrongPayloadLength {
        message_id: u8,
        actual: usize,
        expected: PayloadLength,
    },
    /// The message identifier has no layout.
    #[error("unsupported message type {0}")]
    UnsupportedMessageType(u8),
    /// A character outside the six-bit wire alphabet.
    #[error("invalid armor character {character:?} at offset {offset}")]
    InvalidArmor { character: char, offset: usize },
    /// Fill bit count outside 0..=5 or larger than the armored payload.
    #[error("invalid fill bit count {0}")]
    InvalidFillBits(u8),
    /// A read of zero bits, or of more than 64 bits into an integer.
    #[error("invalid field width {0}")]
    InvalidWidth(usize),
}

/// Errors produced while building a payload from a message value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The value does not fit in the field width under its signedness.
    #[error("value {value} does not fit in {width} bits")]
    FieldOverflow { value: i128, width: usize },
    /// Append attempted after the writer was finalized.
    #[error("writer already finalized")]
    WriterFinalized,
    /// A write of zero bits, or of more than 64 bits from an integer.
    #[error("invalid field width {0}")]
    InvalidWidth(usize),
    /// A character that has no six-bit text encoding.
    #[error("character {0:?} has no six-bit text encoding")]
    InvalidCharacter(char),
    /// The emitted payload does not fit the lengths the message type allows.
    #[error("message {message_id} encodes to {actual} bits (expected {expected})")]
    WrongPayloadLength {
        message_id: u8,
        actual: usize,
        expected: PayloadLength,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::TruncatedPayload {
            position: 160,
            needed: 19,
            remaining: 8,
        };
        assert_eq!(err.to_string(), "truncated at bit 160: 19 needed, 8 left");

        let err = DecodeError::WrongPayloadLength {
            message_id: 18,
            actual: 162,
            expected: PayloadLength::Exact(168),
        };
        assert_eq!(err.to_string(), "message 18 has 162 bits (expected 168)");

        let err = DecodeError::UnsupportedMessageType(42);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::FieldOverflow {
            value: 1024,
            width: 10,
        };
        assert_eq!(err.to_string(), "value 1024 does not fit in 10 bits");

        let err = EncodeError::InvalidCharacter('a');
        assert!(err.to_string().contains("'a'"));
    }
}
