//! Message 17: GNSS broadcast binary message (DGNSS corrections).

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    bits::BitSequence,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::Body,
    position::{Position, Precision},
};

pub const LAYOUT: Layout = Layout {
    name: "dgnss_broadcast",
    message_ids: &[17],
    length: PayloadLength::Range { min: 80, max: 816 },
    fields: &[
        FieldSpec::unsigned("spare", 2),
        FieldSpec::signed("longitude", 18),
        FieldSpec::signed("latitude", 17),
        FieldSpec::unsigned("spare_2", 5),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DgnssBroadcast {
    pub header: Header,
    pub spare: u8,
    /// Reference station position in 1/10 minute.
    pub position: Position,
    pub spare_2: u8,
    /// Correction data, up to 736 bits.
    pub data: BitSequence,
}

impl Body for DgnssBroadcast {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            spare: cursor.read_u8(2)?,
            position: Position::decode(cursor, Precision::Low)?,
            spare_2: cursor.read_u8(5)?,
            data: cursor.read_remaining()?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        self.position.encode(writer)?;
        writer.append_unsigned(u64::from(self.spare_2), 5)?;
        writer.append_sequence(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::test_util::round_trip;

    #[test]
    fn test_round_trip_with_corrections() {
        let message = DgnssBroadcast {
            header: Header::new(2_734_450),
            spare: 0,
            position: Position::from_degrees(29.13, 59.987, Precision::Low),
            spare_2: 0,
            data: (0..120).map(|i| i % 5 < 2).collect(),
        };
        let (decoded, bits) = round_trip(17, message.header, &message);
        assert_eq!(decoded, message);
        assert_eq!(bits.len(), 200);
        assert_eq!(decoded.position.raw_longitude(), 17_478);
        assert_eq!(decoded.position.raw_latitude(), 35_992);
    }

    #[test]
    fn test_low_precision_not_available() {
        let message = DgnssBroadcast {
            header: Header::new(1),
            spare: 0,
            position: Position::not_available(Precision::Low),
            spare_2: 0,
            data: BitSequence::new(),
        };
        let (decoded, bits) = round_trip(17, message.header, &message);
        assert_eq!(bits.len(), 80);
        assert!(!decoded.position.is_available());
    }
}
