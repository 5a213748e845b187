//! Messages 12 (addressed) and 14 (broadcast): safety related text.
//!
//! The text runs to the end of the payload, six bits per character. A payload
//! whose text region is not a whole number of characters leaves bits unread and
//! is rejected by the dispatcher.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::Body,
    sixbit,
};

pub const ADDRESSED_LAYOUT: Layout = Layout {
    name: "addressed_safety",
    message_ids: &[12],
    length: PayloadLength::Range { min: 72, max: 1008 },
    fields: &[
        FieldSpec::unsigned("sequence_number", 2),
        FieldSpec::unsigned("destination_mmsi", 30),
        FieldSpec::unsigned("retransmitted", 1),
        FieldSpec::unsigned("spare", 1),
    ],
};

pub const BROADCAST_LAYOUT: Layout = Layout {
    name: "safety_broadcast",
    message_ids: &[14],
    length: PayloadLength::Range { min: 40, max: 1008 },
    fields: &[FieldSpec::unsigned("spare", 2)],
};

fn read_trailing_text(cursor: &mut BitCursor<'_>) -> Result<String, DecodeError> {
    cursor.read_text(cursor.remaining() / 6)
}

fn write_text(text: &str, writer: &mut BitWriter) -> Result<(), EncodeError> {
    writer.append_text(text, text.chars().count())
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressedSafety {
    pub header: Header,
    pub sequence_number: u8,
    pub destination_mmsi: u32,
    pub retransmitted: bool,
    pub spare: bool,
    pub text: String,
}

impl AddressedSafety {
    pub fn trimmed_text(&self) -> &str {
        sixbit::trim_text(&self.text)
    }
}

impl Body for AddressedSafety {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            sequence_number: cursor.read_u8(2)?,
            destination_mmsi: cursor.read_u32(30)?,
            retransmitted: cursor.read_bool()?,
            spare: cursor.read_bool()?,
            text: read_trailing_text(cursor)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.sequence_number), 2)?;
        writer.append_unsigned(u64::from(self.destination_mmsi), 30)?;
        writer.append_bool(self.retransmitted)?;
        writer.append_bool(self.spare)?;
        write_text(&self.text, writer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyBroadcast {
    pub header: Header,
    pub spare: u8,
    pub text: String,
}

impl SafetyBroadcast {
    pub fn trimmed_text(&self) -> &str {
        sixbit::trim_text(&self.text)
    }
}

impl Body for SafetyBroadcast {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            spare: cursor.read_u8(2)?,
            text: read_trailing_text(cursor)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        write_text(&self.text, writer)
    }
}
