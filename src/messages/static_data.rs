//! Message 24: Class B static data report, sent in two parts.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    bits::BitSequence,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::Body,
    navigation::Dimensions,
    sixbit,
};

pub const LAYOUT: Layout = Layout {
    name: "static_data_report",
    message_ids: &[24],
    length: PayloadLength::OneOf(&[160, 168]),
    fields: &[FieldSpec::unsigned("part_number", 2)],
};

/// Part-specific content, selected by the 2-bit part number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaticDataPart {
    /// Part 0: vessel name, optionally followed by 8 spare bits.
    A { name: String, spare: Option<u8> },
    /// Part 1: type, vendor, call sign and dimensions.
    B {
        ship_type: u8,
        /// 7 characters.
        vendor_id: String,
        /// 7 characters.
        call_sign: String,
        /// Holds the mothership MMSI for auxiliary craft.
        dimensions: Dimensions,
        spare: u8,
    },
    /// Part numbers 2 and 3 are not defined; the rest of the payload is kept.
    Reserved { part_number: u8, data: BitSequence },
}

impl StaticDataPart {
    pub fn part_number(&self) -> u8 {
        match self {
            StaticDataPart::A { .. } => 0,
            StaticDataPart::B { .. } => 1,
            StaticDataPart::Reserved { part_number, .. } => *part_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticDataReport {
    pub header: Header,
    pub part: StaticDataPart,
}

impl StaticDataReport {
    /// Auxiliary craft use MMSIs of the form 98XXXYYYY.
    pub fn is_auxiliary(&self) -> bool {
        self.header.mmsi / 10_000_000 == 98
    }

    pub fn trimmed_name(&self) -> Option<&str> {
        match &self.part {
            StaticDataPart::A { name, .. } => Some(sixbit::trim_text(name)),
            _ => None,
        }
    }

    /// For an auxiliary craft's part B, the dimension bits read as the MMSI of
    /// its mothership.
    pub fn mothership_mmsi(&self) -> Option<u32> {
        match &self.part {
            StaticDataPart::B { dimensions, .. } if self.is_auxiliary() => {
                Some(dimensions.packed())
            }
            _ => None,
        }
    }
}

impl Body for StaticDataReport {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        let part = match cursor.read_u8(2)? {
            0 => {
                let name = cursor.read_text(20)?;
                let spare = if cursor.remaining() >= 8 {
                    Some(cursor.read_u8(8)?)
                } else {
                    None
                };
                StaticDataPart::A { name, spare }
            }
            1 => StaticDataPart::B {
                ship_type: cursor.read_u8(8)?,
                vendor_id: cursor.read_text(7)?,
                call_sign: cursor.read_text(7)?,
                dimensions: Dimensions::decode(cursor)?,
                spare: cursor.read_u8(6)?,
            },
            part_number => StaticDataPart::Reserved {
                part_number,
                data: cursor.read_remaining()?,
            },
        };
        Ok(Self { header, part })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.part.part_number()), 2)?;
        match &self.part {
            StaticDataPart::A { name, spare } => {
                writer.append_text(name, 20)?;
                if let Some(spare) = spare {
                    writer.append_unsigned(u64::from(*spare), 8)?;
                }
                Ok(())
            }
            StaticDataPart::B {
                ship_type,
                vendor_id,
                call_sign,
                dimensions,
                spare,
            } => {
                writer.append_unsigned(u64::from(*ship_type), 8)?;
                writer.append_text(vendor_id, 7)?;
                writer.append_text(call_sign, 7)?;
                dimensions.encode(writer)?;
                writer.append_unsigned(u64::from(*spare), 6)
            }
            StaticDataPart::Reserved { data, .. } => writer.append_sequence(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::test_util::round_trip;

    #[test]
    fn test_decode_part_a() {
        let bits = BitSequence::from_armored("H42O55i18tMET00000000000000", 2).unwrap();
        assert_eq!(bits.len(), 160);
        let mut cursor = BitCursor::new(&bits);
        let (id, header) = Header::decode(&mut cursor).unwrap();
        let report = StaticDataReport::decode_body(header, &mut cursor).unwrap();

        assert_eq!(id, 24);
        assert_eq!(report.header.mmsi, 271_041_815);
        assert_eq!(
            report.part,
            StaticDataPart::A {
                name: "PROGUY@@@@@@@@@@@@@@".to_string(),
                spare: None
            }
        );
        assert_eq!(report.trimmed_name(), Some("PROGUY"));

        let mut writer = BitWriter::new();
        header.encode(24, &mut writer).unwrap();
        report.encode_body(&mut writer).unwrap();
        let armored = writer.finalize();
        assert_eq!(armored.text, "H42O55i18tMET00000000000000");
        assert_eq!(armored.fill_bits, 2);
    }

    #[test]
    fn test_part_a_with_spare() {
        let report = StaticDataReport {
            header: Header::new(338_085_237),
            part: StaticDataPart::A {
                name: "SEA BREEZE".to_string(),
                spare: Some(0),
            },
        };
        let (decoded, bits) = round_trip(24, report.header, &report);
        assert_eq!(bits.len(), 168);
        assert_eq!(decoded.trimmed_name(), Some("SEA BREEZE"));
    }

    #[test]
    fn test_part_b_round_trip() {
        let report = StaticDataReport {
            header: Header::new(338_085_237),
            part: StaticDataPart::B {
                ship_type: 37,
                vendor_id: "SRTAA9B".to_string(),
                call_sign: "WDE3370".to_string(),
                dimensions: Dimensions {
                    to_bow: 5,
                    to_stern: 4,
                    to_port: 2,
                    to_starboard: 2,
                },
                spare: 0,
            },
        };
        let (decoded, bits) = round_trip(24, report.header, &report);
        assert_eq!(decoded, report);
        assert_eq!(bits.len(), 168);
        assert!(!decoded.is_auxiliary());
        assert_eq!(decoded.mothership_mmsi(), None);
        assert_eq!(decoded.trimmed_name(), None);
    }

    #[test]
    fn test_auxiliary_mothership() {
        let mothership = 244_123_456u32;
        let report = StaticDataReport {
            header: Header::new(982_441_234),
            part: StaticDataPart::B {
                ship_type: 0,
                vendor_id: String::new(),
                call_sign: String::new(),
                dimensions: Dimensions {
                    to_bow: (mothership >> 21) as u16,
                    to_stern: ((mothership >> 12) & 0x1ff) as u16,
                    to_port: ((mothership >> 6) & 0x3f) as u8,
                    to_starboard: (mothership & 0x3f) as u8,
                },
                spare: 0,
            },
        };
        let (decoded, _) = round_trip(24, report.header, &report);
        assert!(decoded.is_auxiliary());
        assert_eq!(decoded.mothership_mmsi(), Some(mothership));
    }

    #[test]
    fn test_reserved_part_kept() {
        let report = StaticDataReport {
            header: Header::new(1),
            part: StaticDataPart::Reserved {
                part_number: 2,
                data: (0..120).map(|i| i % 2 == 0).collect(),
            },
        };
        let (decoded, bits) = round_trip(24, report.header, &report);
        assert_eq!(decoded, report);
        assert_eq!(bits.len(), 160);
    }
}
