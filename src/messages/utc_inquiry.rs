//! Message 10: UTC and date inquiry.

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
    name: "utc_inquiry",
    message_ids: &[10],
    length: PayloadLength::Exact(72),
    fields: &[
        FieldSpec::unsigned("spare", 2),
        FieldSpec::unsigned("destination_mmsi", 30),
        FieldSpec::unsigned("spare_2", 2),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtcInquiry {
    pub header: Header,
    pub spare: u8,
    pub destination_mmsi: u32,
    pub spare_2: u8,
}

impl Body for UtcInquiry {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            spare: cursor.read_u8(2)?,
            destination_mmsi: cursor.read_u32(30)?,
            spare_2: cursor.read_u8(2)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        writer.append_unsigned(u64::from(self.destination_mmsi), 30)?;
        writer.append_unsigned(u64::from(self.spare_2), 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::test_util::round_trip;

    #[test]
    fn test_round_trip() {
        let inquiry = UtcInquiry {
            header: Header::new(366_814_480),
            spare: 0,
            destination_mmsi: 366_832_740,
            spare_2: 0,
        };
        let (decoded, bits) = round_trip(10, inquiry.header, &inquiry);
        assert_eq!(decoded, inquiry);
        assert_eq!(bits.len(), 72);
    }

    #[test]
    fn test_destination_overflow() {
        let inquiry = UtcInquiry {
            header: Header::new(1),
            spare: 0,
            destination_mmsi: 1 << 30,
            spare_2: 0,
        };
        let mut writer = BitWriter::new();
        assert_eq!(
            inquiry.encode_body(&mut writer).unwrap_err(),
            EncodeError::FieldOverflow {
                value: 1 << 30,
                width: 30
            }
        );
    }
}
