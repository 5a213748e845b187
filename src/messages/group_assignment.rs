//! Message 23: group assignment command for the stations inside an area.

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
    name: "group_assignment_command",
    message_ids: &[23],
    length: PayloadLength::Exact(160),
    fields: &[
        FieldSpec::unsigned("spare", 2),
        FieldSpec::signed("ne_longitude", 18),
        FieldSpec::signed("ne_latitude", 17),
        FieldSpec::signed("sw_longitude", 18),
        FieldSpec::signed("sw_latitude", 17),
        FieldSpec::unsigned("station_type", 4),
        FieldSpec::unsigned("ship_type", 8),
        FieldSpec::unsigned("spare_2", 22),
        FieldSpec::unsigned("tx_rx_mode", 2),
        FieldSpec::unsigned("report_interval", 4),
        FieldSpec::unsigned("quiet_time", 4),
        FieldSpec::unsigned("spare_3", 6),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupAssignmentCommand {
    pub header: Header,
    pub spare: u8,
    pub north_east: Position,
    pub south_west: Position,
    pub station_type: u8,
    pub ship_type: u8,
    pub spare_2: u32,
    pub tx_rx_mode: u8,
    pub report_interval: u8,
    /// Minutes, 0 means none.
    pub quiet_time: u8,
    pub spare_3: u8,
}

impl Body for GroupAssignmentCommand {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            spare: cursor.read_u8(2)?,
            north_east: Position::decode(cursor, Precision::Low)?,
            south_west: Position::decode(cursor, Precision::Low)?,
            station_type: cursor.read_u8(4)?,
            ship_type: cursor.read_u8(8)?,
            spare_2: cursor.read_u32(22)?,
            tx_rx_mode: cursor.read_u8(2)?,
            report_interval: cursor.read_u8(4)?,
            quiet_time: cursor.read_u8(4)?,
            spare_3: cursor.read_u8(6)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        self.north_east.encode(writer)?;
        self.south_west.encode(writer)?;
        writer.append_unsigned(u64::from(self.station_type), 4)?;
        writer.append_unsigned(u64::from(self.ship_type), 8)?;
        writer.append_unsigned(u64::from(self.spare_2), 22)?;
        writer.append_unsigned(u64::from(self.tx_rx_mode), 2)?;
        writer.append_unsigned(u64::from(self.report_interval), 4)?;
        writer.append_unsigned(u64::from(self.quiet_time), 4)?;
        writer.append_unsigned(u64::from(self.spare_3), 6)
    }
}
