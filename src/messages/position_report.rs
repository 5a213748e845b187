//! Messages 1, 2 and 3: Class A position reports (scheduled, assigned, response
//! to interrogation). All three share one 168-bit layout.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::Body,
    navigation::{self, TimeStamp},
    position::{Position, Precision},
};

pub const LAYOUT: Layout = Layout {
    name: "position_report",
    message_ids: &[1, 2, 3],
    length: PayloadLength::Exact(168),
    fields: &[
        FieldSpec::unsigned("navigation_status", 4),
        FieldSpec::signed("rate_of_turn", 8),
        FieldSpec::unsigned("sog", 10),
        FieldSpec::unsigned("position_accuracy", 1),
        FieldSpec::signed("longitude", 28),
        FieldSpec::signed("latitude", 27),
        FieldSpec::unsigned("cog", 12),
        FieldSpec::unsigned("true_heading", 9),
        FieldSpec::unsigned("utc_second", 6),
        FieldSpec::unsigned("special_maneuver", 2),
        FieldSpec::unsigned("spare", 3),
        FieldSpec::unsigned("raim", 1),
        FieldSpec::unsigned("comm_state", 19),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionReport {
    pub header: Header,
    /// 0 under way using engine, 1 at anchor, ..., 15 not defined.
    pub navigation_status: u8,
    /// Raw ROT indicator; -128 not available, +-127 turning without indicator.
    pub rate_of_turn: i8,
    pub sog: u16,
    pub position_accuracy: bool,
    pub position: Position,
    pub cog: u16,
    pub true_heading: u16,
    pub utc_second: u8,
    pub special_maneuver: u8,
    pub spare: u8,
    pub raim: bool,
    /// SOTDMA (types 1, 2) or ITDMA (type 3) state, not decomposed.
    pub comm_state: u32,
}

impl PositionReport {
    pub fn is_sog_valid(&self) -> bool {
        navigation::is_sog_valid(self.sog)
    }

    pub fn is_cog_valid(&self) -> bool {
        navigation::is_cog_valid(self.cog)
    }

    pub fn is_heading_valid(&self) -> bool {
        navigation::is_heading_valid(self.true_heading)
    }

    pub fn is_position_valid(&self) -> bool {
        self.position.is_available()
    }

    pub fn is_rate_of_turn_available(&self) -> bool {
        self.rate_of_turn != navigation::ROT_NOT_AVAILABLE
    }

    pub fn speed_knots(&self) -> Option<f64> {
        navigation::speed_knots(self.sog)
    }

    pub fn course_degrees(&self) -> Option<f64> {
        navigation::course_degrees(self.cog)
    }

    pub fn time_stamp(&self) -> TimeStamp {
        TimeStamp::from_raw(self.utc_second)
    }
}

impl Body for PositionReport {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            navigation_status: cursor.read_u8(4)?,
            rate_of_turn: cursor.read_signed(8)? as i8,
            sog: cursor.read_u16(10)?,
            position_accuracy: cursor.read_bool()?,
            position: Position::decode(cursor, Precision::High)?,
            cog: cursor.read_u16(12)?,
            true_heading: cursor.read_u16(9)?,
            utc_second: cursor.read_u8(6)?,
            special_maneuver: cursor.read_u8(2)?,
            spare: cursor.read_u8(3)?,
            raim: cursor.read_bool()?,
            comm_state: cursor.read_u32(19)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.navigation_status), 4)?;
        writer.append_signed(i64::from(self.rate_of_turn), 8)?;
        writer.append_unsigned(u64::from(self.sog), 10)?;
        writer.append_bool(self.position_accuracy)?;
        self.position.encode(writer)?;
        writer.append_unsigned(u64::from(self.cog), 12)?;
        writer.append_unsigned(u64::from(self.true_heading), 9)?;
        writer.append_unsigned(u64::from(self.utc_second), 6)?;
        writer.append_unsigned(u64::from(self.special_maneuver), 2)?;
        writer.append_unsigned(u64::from(self.spare), 3)?;
        writer.append_bool(self.raim)?;
        writer.append_unsigned(u64::from(self.comm_state), 19)
    }
}
