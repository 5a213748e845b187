//! Message 27: long range AIS broadcast.

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
    name: "long_range_broadcast",
    message_ids: &[27],
    length: PayloadLength::Exact(96),
    fields: &[
        FieldSpec::unsigned("position_accuracy", 1),
        FieldSpec::unsigned("raim", 1),
        FieldSpec::unsigned("navigation_status", 4),
        FieldSpec::signed("longitude", 18),
        FieldSpec::signed("latitude", 17),
        FieldSpec::unsigned("sog", 6),
        FieldSpec::unsigned("cog", 9),
        FieldSpec::unsigned("gnss_position_status", 1),
        FieldSpec::unsigned("spare", 1),
    ],
};

/// Knots; this value means not available.
pub const SOG_NOT_AVAILABLE: u8 = 63;
/// Degrees; this value means not available.
pub const COG_NOT_AVAILABLE: u16 = 511;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongRangeBroadcast {
    pub header: Header,
    pub position_accuracy: bool,
    pub raim: bool,
    pub navigation_status: u8,
    pub position: Position,
    /// Whole knots, 0..=62.
    pub sog: u8,
    /// Whole degrees, 0..=359.
    pub cog: u16,
    /// False when the position is current GNSS output.
    pub gnss_position_status: bool,
    pub spare: bool,
}

impl LongRangeBroadcast {
    pub fn is_sog_valid(&self) -> bool {
        self.sog < SOG_NOT_AVAILABLE
    }

    pub fn is_cog_valid(&self) -> bool {
        self.cog < 360
    }

    pub fn is_position_valid(&self) -> bool {
        self.position.is_available()
    }
}

impl Body for LongRangeBroadcast {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            position_accuracy: cursor.read_bool()?,
            raim: cursor.read_bool()?,
            navigation_status: cursor.read_u8(4)?,
            position: Position::decode(cursor, Precision::Low)?,
            sog: cursor.read_u8(6)?,
            cog: cursor.read_u16(9)?,
            gnss_position_status: cursor.read_bool()?,
            spare: cursor.read_bool()?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_bool(self.position_accuracy)?;
        writer.append_bool(self.raim)?;
        writer.append_unsigned(u64::from(self.navigation_status), 4)?;
        self.position.encode(writer)?;
        writer.append_unsigned(u64::from(self.sog), 6)?;
        writer.append_unsigned(u64::from(self.cog), 9)?;
        writer.append_bool(self.gnss_position_status)?;
        writer.append_bool(self.spare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bits::BitSequence, messages::test_util::round_trip};

    #[test]
    fn test_decode_long_range() {
        let bits = BitSequence::from_armored("KC5E2b@U19PFdLbL", 0).unwrap();
        assert_eq!(bits.len(), 96);
        let mut cursor = BitCursor::new(&bits);
        let (id, header) = Header::decode(&mut cursor).unwrap();
        let report = LongRangeBroadcast::decode_body(header, &mut cursor).unwrap();

        assert_eq!(id, 27);
        assert_eq!(report.header.repeat_indicator, 1);
        assert_eq!(report.header.mmsi, 206_914_217);
        assert!(!report.position_accuracy);
        assert_eq!(report.navigation_status, 2);
        assert_eq!(report.position.raw_longitude(), 82_214);
        assert_eq!(report.position.raw_latitude(), 2904);
        assert_eq!(report.sog, 57);
        assert_eq!(report.cog, 167);
        assert!(!report.gnss_position_status);
        assert!(report.is_sog_valid());
    }

    #[test]
    fn test_not_available_round_trip() {
        let report = LongRangeBroadcast {
            header: Header::new(1),
            position_accuracy: false,
            raim: false,
            navigation_status: 15,
            position: Position::not_available(Precision::Low),
            sog: SOG_NOT_AVAILABLE,
            cog: COG_NOT_AVAILABLE,
            gnss_position_status: true,
            spare: false,
        };
        let (decoded, bits) = round_trip(27, report.header, &report);
        assert_eq!(decoded, report);
        assert_eq!(bits.len(), 96);
        assert!(!decoded.is_sog_valid());
        assert!(!decoded.is_cog_valid());
        assert!(!decoded.is_position_valid());
    }
}
