//! Message 5: static and voyage related data.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::Body,
    navigation::{Dimensions, Eta},
    sixbit,
};

pub const LAYOUT: Layout = Layout {
    name: "static_voyage_data",
    message_ids: &[5],
    length: PayloadLength::Exact(424),
    fields: &[
        FieldSpec::unsigned("ais_version", 2),
        FieldSpec::unsigned("imo", 30),
        FieldSpec::unsigned("call_sign", 42),
        FieldSpec::unsigned("name", 120),
        FieldSpec::unsigned("ship_type", 8),
        FieldSpec::unsigned("dimensions", 30),
        FieldSpec::unsigned("epfd", 4),
        FieldSpec::unsigned("eta", 20),
        FieldSpec::unsigned("draught", 8),
        FieldSpec::unsigned("destination", 120),
        FieldSpec::unsigned("dte", 1),
        FieldSpec::unsigned("spare", 1),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticVoyageData {
    pub header: Header,
    pub ais_version: u8,
    pub imo: u32,
    /// 7 characters.
    pub call_sign: String,
    /// 20 characters.
    pub name: String,
    pub ship_type: u8,
    pub dimensions: Dimensions,
    pub epfd: u8,
    pub eta: Eta,
    /// Maximum present static draught in 1/10 m.
    pub draught: u8,
    /// 20 characters.
    pub destination: String,
    pub dte: bool,
    pub spare: bool,
}

impl StaticVoyageData {
    pub fn trimmed_call_sign(&self) -> &str {
        sixbit::trim_text(&self.call_sign)
    }

    pub fn trimmed_name(&self) -> &str {
        sixbit::trim_text(&self.name)
    }

    pub fn trimmed_destination(&self) -> &str {
        sixbit::trim_text(&self.destination)
    }

    /// Draught in metres; zero means not available.
    pub fn draught_metres(&self) -> Option<f64> {
        (self.draught != 0).then(|| f64::from(self.draught) / 10.0)
    }
}

impl Body for StaticVoyageData {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            ais_version: cursor.read_u8(2)?,
            imo: cursor.read_u32(30)?,
            call_sign: cursor.read_text(7)?,
            name: cursor.read_text(20)?,
            ship_type: cursor.read_u8(8)?,
            dimensions: Dimensions::decode(cursor)?,
            epfd: cursor.read_u8(4)?,
            eta: Eta::decode(cursor)?,
            draught: cursor.read_u8(8)?,
            destination: cursor.read_text(20)?,
            dte: cursor.read_bool()?,
            spare: cursor.read_bool()?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.ais_version), 2)?;
        writer.append_unsigned(u64::from(self.imo), 30)?;
        writer.append_text(&self.call_sign, 7)?;
        writer.append_text(&self.name, 20)?;
        writer.append_unsigned(u64::from(self.ship_type), 8)?;
        self.dimensions.encode(writer)?;
        writer.append_unsigned(u64::from(self.epfd), 4)?;
        self.eta.encode(writer)?;
        writer.append_unsigned(u64::from(self.draught), 8)?;
        writer.append_text(&self.destination, 20)?;
        writer.append_bool(self.dte)?;
        writer.append_bool(self.spare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitSequence;

    const PAYLOAD: &str = "55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp888888888880";

    #[test]
    fn test_decode_static_voyage() {
        let bits = BitSequence::from_armored(PAYLOAD, 2).unwrap();
        assert_eq!(bits.len(), 424);
        let mut cursor = BitCursor::new(&bits);
        let (id, header) = Header::decode(&mut cursor).unwrap();
        let data = StaticVoyageData::decode_body(header, &mut cursor).unwrap();
        assert_eq!(cursor.remaining(), 0);

        assert_eq!(id, 5);
        assert_eq!(data.header.mmsi, 351_759_000);
        assert_eq!(data.imo, 9_134_270);
        assert_eq!(data.call_sign, "3FOF8  ");
        assert_eq!(data.trimmed_call_sign(), "3FOF8");
        assert_eq!(data.trimmed_name(), "EVER DIADEM");
        assert_eq!(data.ship_type, 70);
        assert_eq!(data.dimensions.to_bow, 225);
        assert_eq!(data.dimensions.to_stern, 70);
        assert_eq!(data.dimensions.to_port, 1);
        assert_eq!(data.dimensions.to_starboard, 31);
        assert_eq!(data.epfd, 1);
        assert_eq!(
            data.eta,
            Eta {
                month: 5,
                day: 15,
                hour: 14,
                minute: 0
            }
        );
        assert_eq!(data.draught_metres(), Some(12.2));
        assert_eq!(data.trimmed_destination(), "NEW YORK");
        assert!(!data.dte);

        let mut writer = BitWriter::new();
        header.encode(5, &mut writer).unwrap();
        data.encode_body(&mut writer).unwrap();
        let armored = writer.finalize();
        assert_eq!(armored.text, PAYLOAD);
        assert_eq!(armored.fill_bits, 2);
    }

    #[test]
    fn test_short_strings_are_padded() {
        let data = StaticVoyageData {
            header: Header::new(1),
            ais_version: 0,
            imo: 0,
            call_sign: "AB".to_string(),
            name: String::new(),
            ship_type: 0,
            dimensions: Dimensions::default(),
            epfd: 0,
            eta: Eta::default(),
            draught: 0,
            destination: "X".to_string(),
            dte: true,
            spare: false,
        };
        let mut writer = BitWriter::new();
        data.encode_body(&mut writer).unwrap();
        let bits = writer.into_bits();
        assert_eq!(bits.len(), 424 - 38);

        let decoded =
            StaticVoyageData::decode_body(data.header, &mut BitCursor::new(&bits)).unwrap();
        assert_eq!(decoded.call_sign, "AB@@@@@");
        assert_eq!(decoded.trimmed_name(), "");
        assert_eq!(decoded.trimmed_destination(), "X");
        assert_eq!(decoded.draught_metres(), None);
    }
}
