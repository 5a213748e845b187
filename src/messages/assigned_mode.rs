//! Message 16: assigned mode command for one or two stations.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::Body,
};

pub const LAYOUT: Layout = Layout {
    name: "assigned_mode_command",
    message_ids: &[16],
    length: PayloadLength::OneOf(&[96, 144]),
    fields: &[
        FieldSpec::unsigned("spare", 2),
        FieldSpec::unsigned("destination_a", 30),
        FieldSpec::unsigned("offset_a", 12),
        FieldSpec::unsigned("increment_a", 10),
    ],
};

/// Destination, slot offset and increment for one assigned station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotAssignment {
    pub destination_mmsi: u32,
    pub offset: u16,
    pub increment: u16,
}

impl SlotAssignment {
    const BITS: usize = 52;

    fn decode(cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            destination_mmsi: cursor.read_u32(30)?,
            offset: cursor.read_u16(12)?,
            increment: cursor.read_u16(10)?,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.destination_mmsi), 30)?;
        writer.append_unsigned(u64::from(self.offset), 12)?;
        writer.append_unsigned(u64::from(self.increment), 10)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignedModeCommand {
    pub header: Header,
    pub spare: u8,
    pub station_a: SlotAssignment,
    pub station_b: Option<SlotAssignment>,
    /// The 4 spare bits that pad the single-station form to 96 bits.
    pub trailing_spare: u8,
}

impl Body for AssignedModeCommand {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        let spare = cursor.read_u8(2)?;
        let station_a = SlotAssignment::decode(cursor)?;
        let (station_b, trailing_spare) = if cursor.remaining() >= SlotAssignment::BITS {
            (Some(SlotAssignment::decode(cursor)?), 0)
        } else {
            (None, cursor.read_u8(4)?)
        };
        Ok(Self {
            header,
            spare,
            station_a,
            station_b,
            trailing_spare,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        self.station_a.encode(writer)?;
        match &self.station_b {
            Some(station_b) => station_b.encode(writer),
            None => writer.append_unsigned(u64::from(self.trailing_spare), 4),
        }
    }
}
