//! Message 9: standard SAR aircraft position report.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::{Body, CommStateKind},
    navigation::{self, TimeStamp},
    position::{Position, Precision},
};

pub const LAYOUT: Layout = Layout {
    name: "sar_aircraft_position",
    message_ids: &[9],
    length: PayloadLength::Exact(168),
    fields: &[
        FieldSpec::unsigned("altitude", 12),
        FieldSpec::unsigned("sog", 10),
        FieldSpec::unsigned("position_accuracy", 1),
        FieldSpec::signed("longitude", 28),
        FieldSpec::signed("latitude", 27),
        FieldSpec::unsigned("cog", 12),
        FieldSpec::unsigned("utc_second", 6),
        FieldSpec::unsigned("regional", 8),
        FieldSpec::unsigned("dte", 1),
        FieldSpec::unsigned("spare", 3),
        FieldSpec::unsigned("assigned", 1),
        FieldSpec::unsigned("raim", 1),
        FieldSpec::unsigned("comm_state_selector", 1),
        FieldSpec::unsigned("comm_state", 19),
    ],
};

/// Altitude in metres; this value means not available.
pub const ALTITUDE_NOT_AVAILABLE: u16 = 4095;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SarAircraftPosition {
    pub header: Header,
    /// Metres, 4094 means 4094 or higher.
    pub altitude: u16,
    /// Knots (not tenths), 1022 means 1022 or higher.
    pub sog: u16,
    pub position_accuracy: bool,
    pub position: Position,
    pub cog: u16,
    pub utc_second: u8,
    pub regional: u8,
    pub dte: bool,
    pub spare: u8,
    pub assigned: bool,
    pub raim: bool,
    pub comm_state_selector: bool,
    pub comm_state: u32,
}

impl SarAircraftPosition {
    pub fn altitude_metres(&self) -> Option<u16> {
        (self.altitude != ALTITUDE_NOT_AVAILABLE).then_some(self.altitude)
    }

    pub fn is_sog_valid(&self) -> bool {
        navigation::is_sog_valid(self.sog)
    }

    pub fn is_cog_valid(&self) -> bool {
        navigation::is_cog_valid(self.cog)
    }

    pub fn is_position_valid(&self) -> bool {
        self.position.is_available()
    }

    pub fn time_stamp(&self) -> TimeStamp {
        TimeStamp::from_raw(self.utc_second)
    }

    pub fn comm_state_kind(&self) -> CommStateKind {
        CommStateKind::from_selector(self.comm_state_selector)
    }
}

impl Body for SarAircraftPosition {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            altitude: cursor.read_u16(12)?,
            sog: cursor.read_u16(10)?,
            position_accuracy: cursor.read_bool()?,
            position: Position::decode(cursor, Precision::High)?,
            cog: cursor.read_u16(12)?,
            utc_second: cursor.read_u8(6)?,
            regional: cursor.read_u8(8)?,
            dte: cursor.read_bool()?,
            spare: cursor.read_u8(3)?,
            assigned: cursor.read_bool()?,
            raim: cursor.read_bool()?,
            comm_state_selector: cursor.read_bool()?,
            comm_state: cursor.read_u32(19)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.altitude), 12)?;
        writer.append_unsigned(u64::from(self.sog), 10)?;
        writer.append_bool(self.position_accuracy)?;
        self.position.encode(writer)?;
        writer.append_unsigned(u64::from(self.cog), 12)?;
        writer.append_unsigned(u64::from(self.utc_second), 6)?;
        writer.append_unsigned(u64::from(self.regional), 8)?;
        writer.append_bool(self.dte)?;
        writer.append_unsigned(u64::from(self.spare), 3)?;
        writer.append_bool(self.assigned)?;
        writer.append_bool(self.raim)?;
        writer.append_bool(self.comm_state_selector)?;
        writer.append_unsigned(u64::from(self.comm_state), 19)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::test_util::round_trip;

    #[test]
    fn test_round_trip() {
        let report = SarAircraftPosition {
            header: Header::new(111_232_511),
            altitude: 303,
            sog: 42,
            position_accuracy: true,
            position: Position::from_degrees(-6.278_8, 58.144, Precision::High),
            cog: 1544,
            utc_second: 15,
            regional: 0,
            dte: true,
            spare: 0,
            assigned: false,
            raim: false,
            comm_state_selector: false,
            comm_state: 33_392,
        };
        let (decoded, bits) = round_trip(9, report.header, &report);
        assert_eq!(decoded, report);
        assert_eq!(bits.len(), 168);
        assert_eq!(decoded.altitude_metres(), Some(303));
        assert_eq!(decoded.time_stamp(), TimeStamp::Second(15));
        assert_eq!(decoded.comm_state_kind(), CommStateKind::Sotdma);
    }

    #[test]
    fn test_altitude_not_available() {
        let report = SarAircraftPosition {
            header: Header::new(1),
            altitude: ALTITUDE_NOT_AVAILABLE,
            sog: 1023,
            position_accuracy: false,
            position: Position::not_available(Precision::High),
            cog: 3600,
            utc_second: 60,
            regional: 0,
            dte: true,
            spare: 0,
            assigned: false,
            raim: false,
            comm_state_selector: true,
            comm_state: 0,
        };
        let (decoded, _) = round_trip(9, report.header, &report);
        assert_eq!(decoded.altitude_metres(), None);
        assert!(!decoded.is_sog_valid());
        assert!(!decoded.is_cog_valid());
        assert!(!decoded.is_position_valid());
    }
}
