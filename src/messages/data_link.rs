//! Message 20: data link management, reserving up to four slot blocks.

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
    name: "data_link_management",
    message_ids: &[20],
    length: PayloadLength::OneOf(&[72, 104, 136, 160]),
    fields: &[
        FieldSpec::unsigned("spare", 2),
        FieldSpec::unsigned("offset_1", 12),
        FieldSpec::unsigned("slots_1", 4),
        FieldSpec::unsigned("timeout_1", 3),
        FieldSpec::unsigned("increment_1", 11),
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotReservation {
    pub offset: u16,
    pub slots: u8,
    /// Minutes.
    pub timeout: u8,
    pub increment: u16,
}

impl SlotReservation {
    const BITS: usize = 30;

    fn decode(cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            offset: cursor.read_u16(12)?,
            slots: cursor.read_u8(4)?,
            timeout: cursor.read_u8(3)?,
            increment: cursor.read_u16(11)?,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.offset), 12)?;
        writer.append_unsigned(u64::from(self.slots), 4)?;
        writer.append_unsigned(u64::from(self.timeout), 3)?;
        writer.append_unsigned(u64::from(self.increment), 11)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataLinkManagement {
    pub header: Header,
    pub spare: u8,
    /// One to four reservations.
    pub reservations: Vec<SlotReservation>,
    /// Spare bits that pad the payload to a byte boundary.
    pub trailing_spare: u8,
}

impl DataLinkManagement {
    pub const MAX_RESERVATIONS: usize = 4;

    /// Width of the byte-alignment spare after `count` reservations.
    pub fn trailing_spare_width(count: usize) -> usize {
        match count {
            1 => 2,
            2 => 4,
            3 => 6,
            _ => 0,
        }
    }
}

impl Body for DataLinkManagement {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        let spare = cursor.read_u8(2)?;
        let mut reservations = Vec::with_capacity(Self::MAX_RESERVATIONS);
        while reservations.len() < Self::MAX_RESERVATIONS
            && cursor.remaining() >= SlotReservation::BITS
        {
            reservations.push(SlotReservation::decode(cursor)?);
        }
        let trailing_spare = match Self::trailing_spare_width(reservations.len()) {
            0 => 0,
            width => cursor.read_u8(width)?,
        };
        Ok(Self {
            header,
            spare,
            reservations,
            trailing_spare,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        for reservation in &self.reservations {
            reservation.encode(writer)?;
        }
        match Self::trailing_spare_width(self.reservations.len()) {
            0 => Ok(()),
            width => writer.append_unsigned(u64::from(self.trailing_spare), width),
        }
    }
}
