//! Messages 7 and 13: binary and safety related acknowledge.

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
    name: "acknowledge",
    message_ids: &[7, 13],
    length: PayloadLength::OneOf(&[72, 104, 136, 168]),
    fields: &[
        FieldSpec::unsigned("spare", 2),
        FieldSpec::unsigned("destination_mmsi_1", 30),
        FieldSpec::unsigned("sequence_number_1", 2),
    ],
};

/// One acknowledged station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcknowledgedStation {
    pub mmsi: u32,
    pub sequence_number: u8,
}

impl AcknowledgedStation {
    const BITS: usize = 32;
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Acknowledge {
    pub header: Header,
    pub spare: u8,
    /// One to four stations, in transmission order.
    pub stations: Vec<AcknowledgedStation>,
}

impl Acknowledge {
    pub const MAX_STATIONS: usize = 4;
}

impl Body for Acknowledge {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        let spare = cursor.read_u8(2)?;
        let mut stations = Vec::with_capacity(Self::MAX_STATIONS);
        while stations.len() < Self::MAX_STATIONS
            && cursor.remaining() >= AcknowledgedStation::BITS
        {
            stations.push(AcknowledgedStation {
                mmsi: cursor.read_u32(30)?,
                sequence_number: cursor.read_u8(2)?,
            });
        }
        Ok(Self {
            header,
            spare,
            stations,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        for station in &self.stations {
            writer.append_unsigned(u64::from(station.mmsi), 30)?;
            writer.append_unsigned(u64::from(station.sequence_number), 2)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::test_util::round_trip;

    #[test]
    fn test_round_trip_each_count() {
        for count in 1..=Acknowledge::MAX_STATIONS {
            let message = Acknowledge {
                header: Header::new(2_655_651),
                spare: 0,
                stations: (0..count)
                    .map(|i| AcknowledgedStation {
                        mmsi: 265_538_450 + i as u32,
                        sequence_number: i as u8,
                    })
                    .collect(),
            };
            let (decoded, bits) = round_trip(7, message.header, &message);
            assert_eq!(decoded, message);
            assert_eq!(bits.len(), 40 + 32 * count);
            assert!(LAYOUT.length.accepts(bits.len()));
        }
    }

    #[test]
    fn test_partial_block_left_unread() {
        let mut writer = BitWriter::new();
        Header::new(1).encode(13, &mut writer).unwrap();
        writer.append_unsigned(0, 2).unwrap();
        writer.append_unsigned(123, 30).unwrap();
        writer.append_unsigned(1, 2).unwrap();
        writer.append_unsigned(0, 16).unwrap();
        let bits = writer.into_bits();

        let mut cursor = BitCursor::new(&bits);
        let (_, header) = Header::decode(&mut cursor).unwrap();
        let message = Acknowledge::decode_body(header, &mut cursor).unwrap();
        assert_eq!(message.stations.len(), 1);
        assert_eq!(cursor.remaining(), 16);
    }
}
