//! Messages 4 and 11: base station report and UTC/date response.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::Body,
    position::{Position, Precision},
};

pub const LAYOUT: Layout = Layout {
    name: "base_station_report",
    message_ids: &[4, 11],
    length: PayloadLength::Exact(168),
    fields: &[
        FieldSpec::unsigned("year", 14),
        FieldSpec::unsigned("month", 4),
        FieldSpec::unsigned("day", 5),
        FieldSpec::unsigned("hour", 5),
        FieldSpec::unsigned("minute", 6),
        FieldSpec::unsigned("second", 6),
        FieldSpec::unsigned("position_accuracy", 1),
        FieldSpec::signed("longitude", 28),
        FieldSpec::signed("latitude", 27),
        FieldSpec::unsigned("epfd", 4),
        FieldSpec::unsigned("spare", 10),
        FieldSpec::unsigned("raim", 1),
        FieldSpec::unsigned("comm_state", 19),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStationReport {
    pub header: Header,
    /// UTC year, 0 not available.
    pub year: u16,
    /// 1..=12, 0 not available.
    pub month: u8,
    /// 1..=31, 0 not available.
    pub day: u8,
    /// 0..=23, 24 not available.
    pub hour: u8,
    /// 0..=59, 60 not available.
    pub minute: u8,
    /// 0..=59, 60 not available.
    pub second: u8,
    pub position_accuracy: bool,
    pub position: Position,
    pub epfd: u8,
    pub spare: u16,
    pub raim: bool,
    pub comm_state: u32,
}

impl BaseStationReport {
    pub fn is_position_valid(&self) -> bool {
        self.position.is_available()
    }

    /// Whether every date and time field carries a value.
    pub fn is_time_valid(&self) -> bool {
        self.year != 0
            && (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }
}

impl Body for BaseStationReport {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            year: cursor.read_u16(14)?,
            month: cursor.read_u8(4)?,
            day: cursor.read_u8(5)?,
            hour: cursor.read_u8(5)?,
            minute: cursor.read_u8(6)?,
            second: cursor.read_u8(6)?,
            position_accuracy: cursor.read_bool()?,
            position: Position::decode(cursor, Precision::High)?,
            epfd: cursor.read_u8(4)?,
            spare: cursor.read_u16(10)?,
            raim: cursor.read_bool()?,
            comm_state: cursor.read_u32(19)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.year), 14)?;
        writer.append_unsigned(u64::from(self.month), 4)?;
        writer.append_unsigned(u64::from(self.day), 5)?;
        writer.append_unsigned(u64::from(self.hour), 5)?;
        writer.append_unsigned(u64::from(self.minute), 6)?;
        writer.append_unsigned(u64::from(self.second), 6)?;
        writer.append_bool(self.position_accuracy)?;
        self.position.encode(writer)?;
        writer.append_unsigned(u64::from(self.epfd), 4)?;
        writer.append_unsigned(u64::from(self.spare), 10)?;
        writer.append_bool(self.raim)?;
        writer.append_unsigned(u64::from(self.comm_state), 19)
    }
}
