//! Message 21: aid-to-navigation report.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    bits::BitSequence,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::Body,
    navigation::{Dimensions, TimeStamp},
    position::{Position, Precision},
    sixbit,
};

pub const LAYOUT: Layout = Layout {
    name: "aid_to_navigation_report",
    message_ids: &[21],
    length: PayloadLength::Range { min: 272, max: 360 },
    fields: &[
        FieldSpec::unsigned("aid_type", 5),
        FieldSpec::unsigned("name", 120),
        FieldSpec::unsigned("position_accuracy", 1),
        FieldSpec::signed("longitude", 28),
        FieldSpec::signed("latitude", 27),
        FieldSpec::unsigned("dimensions", 30),
        FieldSpec::unsigned("epfd", 4),
        FieldSpec::unsigned("utc_second", 6),
        FieldSpec::unsigned("off_position", 1),
        FieldSpec::unsigned("regional", 8),
        FieldSpec::unsigned("raim", 1),
        FieldSpec::unsigned("virtual_aid", 1),
        FieldSpec::unsigned("assigned", 1),
        FieldSpec::unsigned("spare", 1),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AidToNavigationReport {
    pub header: Header,
    pub aid_type: u8,
    /// 20 characters.
    pub name: String,
    pub position_accuracy: bool,
    pub position: Position,
    pub dimensions: Dimensions,
    pub epfd: u8,
    pub utc_second: u8,
    pub off_position: bool,
    pub regional: u8,
    pub raim: bool,
    pub virtual_aid: bool,
    pub assigned: bool,
    pub spare: bool,
    /// Up to 14 more name characters.
    pub name_extension: String,
    /// Bits after the extension that do not make up a whole character.
    pub extension_padding: BitSequence,
}

impl AidToNavigationReport {
    pub const MAX_EXTENSION_CHARS: usize = 14;

    /// Name and extension joined, without padding.
    pub fn full_name(&self) -> String {
        let mut name = sixbit::trim_text(&self.name).to_string();
        name.push_str(sixbit::trim_text(&self.name_extension));
        name
    }

    pub fn is_position_valid(&self) -> bool {
        self.position.is_available()
    }

    pub fn time_stamp(&self) -> TimeStamp {
        TimeStamp::from_raw(self.utc_second)
    }
}

impl Body for AidToNavigationReport {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        let mut report = Self {
            header,
            aid_type: cursor.read_u8(5)?,
            name: cursor.read_text(20)?,
            position_accuracy: cursor.read_bool()?,
            position: Position::decode(cursor, Precision::High)?,
            dimensions: Dimensions::decode(cursor)?,
            epfd: cursor.read_u8(4)?,
            utc_second: cursor.read_u8(6)?,
            off_position: cursor.read_bool()?,
            regional: cursor.read_u8(8)?,
            raim: cursor.read_bool()?,
            virtual_aid: cursor.read_bool()?,
            assigned: cursor.read_bool()?,
            spare: cursor.read_bool()?,
            name_extension: String::new(),
            extension_padding: BitSequence::new(),
        };
        report.name_extension = cursor.read_text(cursor.remaining() / 6)?;
        report.extension_padding = cursor.read_remaining()?;
        Ok(report)
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.aid_type), 5)?;
        writer.append_text(&self.name, 20)?;
        writer.append_bool(self.position_accuracy)?;
        self.position.encode(writer)?;
        self.dimensions.encode(writer)?;
        writer.append_unsigned(u64::from(self.epfd), 4)?;
        writer.append_unsigned(u64::from(self.utc_second), 6)?;
        writer.append_bool(self.off_position)?;
        writer.append_unsigned(u64::from(self.regional), 8)?;
        writer.append_bool(self.raim)?;
        writer.append_bool(self.virtual_aid)?;
        writer.append_bool(self.assigned)?;
        writer.append_bool(self.spare)?;
        writer.append_text(&self.name_extension, self.name_extension.chars().count())?;
        writer.append_sequence(&self.extension_padding)
    }
}
