//! Messages 18 and 19: Class B position reports.
//!
//! Message 18 is the standard report of a Class B transponder. Its payload is
//! always exactly 168 bits:
//!
//! | field                 | bits | notes                                   |
//! |-----------------------|------|-----------------------------------------|
//! | header                | 38   | id, repeat indicator, MMSI              |
//! | spare after id        | 8    | reserved                                |
//! | speed over ground     | 10   | 1/10 knot, 1023 not available           |
//! | position accuracy     | 1    | 1 = high (<= 10 m)                      |
//! | longitude, latitude   | 28+27| 1/10000 minute, signed                  |
//! | course over ground    | 12   | 1/10 degree, >= 3600 not available      |
//! | true heading          | 9    | degrees, >= 360 not available           |
//! | UTC second            | 6    | 60..=63 are status codes                |
//! | spare                 | 2    |                                         |
//! | class B flags         | 6    | unit, display, DSC, band, msg 22, mode  |
//! | RAIM                  | 1    |                                         |
//! | comm state selector   | 1    | 0 = SOTDMA, 1 = ITDMA                   |
//! | comm state            | 19   | opaque                                  |
//!
//! Message 19 is the extended report carrying static data as well.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::{Body, CommStateKind},
    navigation::{self, Dimensions, TimeStamp},
    position::{Position, Precision},
    sixbit,
};

pub const LAYOUT: Layout = Layout {
    name: "class_b_position_report",
    message_ids: &[18],
    length: PayloadLength::Exact(168),
    fields: &[
        FieldSpec::unsigned("spare_after_id", 8),
        FieldSpec::unsigned("sog", 10),
        FieldSpec::unsigned("position_accuracy", 1),
        FieldSpec::signed("longitude", 28),
        FieldSpec::signed("latitude", 27),
        FieldSpec::unsigned("cog", 12),
        FieldSpec::unsigned("true_heading", 9),
        FieldSpec::unsigned("utc_second", 6),
        FieldSpec::unsigned("spare", 2),
        FieldSpec::unsigned("class_b_unit_flag", 1),
        FieldSpec::unsigned("class_b_display_flag", 1),
        FieldSpec::unsigned("class_b_dsc_flag", 1),
        FieldSpec::unsigned("class_b_band_flag", 1),
        FieldSpec::unsigned("class_b_msg22_flag", 1),
        FieldSpec::unsigned("mode_flag", 1),
        FieldSpec::unsigned("raim", 1),
        FieldSpec::unsigned("comm_state_selector", 1),
        FieldSpec::unsigned("comm_state", 19),
    ],
};

pub const EXTENDED_LAYOUT: Layout = Layout {
    name: "extended_class_b_position_report",
    message_ids: &[19],
    length: PayloadLength::Exact(312),
    fields: &[
        FieldSpec::unsigned("spare_after_id", 8),
        FieldSpec::unsigned("sog", 10),
        FieldSpec::unsigned("position_accuracy", 1),
        FieldSpec::signed("longitude", 28),
        FieldSpec::signed("latitude", 27),
        FieldSpec::unsigned("cog", 12),
        FieldSpec::unsigned("true_heading", 9),
        FieldSpec::unsigned("utc_second", 6),
        FieldSpec::unsigned("regional", 4),
        FieldSpec::unsigned("name", 120),
        FieldSpec::unsigned("ship_type", 8),
        FieldSpec::unsigned("dimensions", 30),
        FieldSpec::unsigned("epfd", 4),
        FieldSpec::unsigned("raim", 1),
        FieldSpec::unsigned("dte", 1),
        FieldSpec::unsigned("assigned_mode", 1),
        FieldSpec::unsigned("spare", 4),
    ],
};

/// Message 18: standard Class B position report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassBPositionReport {
    pub header: Header,
    /// Reserved, carried through unchanged.
    pub spare_after_id: u8,
    /// Speed over ground in 1/10 knot.
    pub sog: u16,
    /// True for high accuracy (<= 10 m).
    pub position_accuracy: bool,
    pub position: Position,
    /// Course over ground in 1/10 degree.
    pub cog: u16,
    /// True heading in degrees.
    pub true_heading: u16,
    /// Raw UTC second; see [`ClassBPositionReport::time_stamp`].
    pub utc_second: u8,
    pub spare: u8,
    /// False for a SOTDMA unit, true for a carrier-sense unit.
    pub class_b_unit_flag: bool,
    pub class_b_display_flag: bool,
    pub class_b_dsc_flag: bool,
    pub class_b_band_flag: bool,
    pub class_b_msg22_flag: bool,
    /// False for autonomous mode, true for assigned mode.
    pub mode_flag: bool,
    pub raim: bool,
    pub comm_state_selector: bool,
    /// 19-bit communication state, not decomposed.
    pub comm_state: u32,
}

impl ClassBPositionReport {
    /// The communication state pattern Class B CS units are required to send.
    pub const CS_COMM_STATE: u32 = 0b1100000000000000110;

    /// A report with every field set to its not-available or default value.
    pub fn new(header: Header) -> Self {
        Self {
            header,
            spare_after_id: 0,
            sog: navigation::SOG_NOT_AVAILABLE,
            position_accuracy: false,
            position: Position::not_available(Precision::High),
            cog: navigation::COG_NOT_AVAILABLE,
            true_heading: navigation::HEADING_NOT_AVAILABLE,
            utc_second: TimeStamp::NotAvailable.raw(),
            spare: 0,
            class_b_unit_flag: true,
            class_b_display_flag: false,
            class_b_dsc_flag: false,
            class_b_band_flag: false,
            class_b_msg22_flag: false,
            mode_flag: false,
            raim: false,
            comm_state_selector: true,
            comm_state: Self::CS_COMM_STATE,
        }
    }

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

    pub fn speed_knots(&self) -> Option<f64> {
        navigation::speed_knots(self.sog)
    }

    pub fn course_degrees(&self) -> Option<f64> {
        navigation::course_degrees(self.cog)
    }

    pub fn heading_degrees(&self) -> Option<u16> {
        navigation::heading_degrees(self.true_heading)
    }

    pub fn time_stamp(&self) -> TimeStamp {
        TimeStamp::from_raw(self.utc_second)
    }

    pub fn comm_state_kind(&self) -> CommStateKind {
        CommStateKind::from_selector(self.comm_state_selector)
    }
}

impl Body for ClassBPositionReport {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            spare_after_id: cursor.read_u8(8)?,
            sog: cursor.read_u16(10)?,
            position_accuracy: cursor.read_bool()?,
            position: Position::decode(cursor, Precision::High)?,
            cog: cursor.read_u16(12)?,
            true_heading: cursor.read_u16(9)?,
            utc_second: cursor.read_u8(6)?,
            spare: cursor.read_u8(2)?,
            class_b_unit_flag: cursor.read_bool()?,
            class_b_display_flag: cursor.read_bool()?,
            class_b_dsc_flag: cursor.read_bool()?,
            class_b_band_flag: cursor.read_bool()?,
            class_b_msg22_flag: cursor.read_bool()?,
            mode_flag: cursor.read_bool()?,
            raim: cursor.read_bool()?,
            comm_state_selector: cursor.read_bool()?,
            comm_state: cursor.read_u32(19)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare_after_id), 8)?;
        writer.append_unsigned(u64::from(self.sog), 10)?;
        writer.append_bool(self.position_accuracy)?;
        self.position.encode(writer)?;
        writer.append_unsigned(u64::from(self.cog), 12)?;
        writer.append_unsigned(u64::from(self.true_heading), 9)?;
        writer.append_unsigned(u64::from(self.utc_second), 6)?;
        writer.append_unsigned(u64::from(self.spare), 2)?;
        writer.append_bool(self.class_b_unit_flag)?;
        writer.append_bool(self.class_b_display_flag)?;
        writer.append_bool(self.class_b_dsc_flag)?;
        writer.append_bool(self.class_b_band_flag)?;
        writer.append_bool(self.class_b_msg22_flag)?;
        writer.append_bool(self.mode_flag)?;
        writer.append_bool(self.raim)?;
        writer.append_bool(self.comm_state_selector)?;
        writer.append_unsigned(u64::from(self.comm_state), 19)
    }
}

/// Message 19: extended Class B position report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedClassBPositionReport {
    pub header: Header,
    pub spare_after_id: u8,
    pub sog: u16,
    pub position_accuracy: bool,
    pub position: Position,
    pub cog: u16,
    pub true_heading: u16,
    pub utc_second: u8,
    pub regional: u8,
    /// 20 text characters, padding kept.
    pub name: String,
    pub ship_type: u8,
    pub dimensions: Dimensions,
    /// Type of electronic position fixing device.
    pub epfd: u8,
    pub raim: bool,
    /// Data terminal equipment; false when ready.
    pub dte: bool,
    pub assigned_mode: bool,
    pub spare: u8,
}

impl ExtendedClassBPositionReport {
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

    pub fn time_stamp(&self) -> TimeStamp {
        TimeStamp::from_raw(self.utc_second)
    }

    pub fn trimmed_name(&self) -> &str {
        sixbit::trim_text(&self.name)
    }
}

impl Body for ExtendedClassBPositionReport {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            spare_after_id: cursor.read_u8(8)?,
            sog: cursor.read_u16(10)?,
            position_accuracy: cursor.read_bool()?,
            position: Position::decode(cursor, Precision::High)?,
            cog: cursor.read_u16(12)?,
            true_heading: cursor.read_u16(9)?,
            utc_second: cursor.read_u8(6)?,
            regional: cursor.read_u8(4)?,
            name: cursor.read_text(20)?,
            ship_type: cursor.read_u8(8)?,
            dimensions: Dimensions::decode(cursor)?,
            epfd: cursor.read_u8(4)?,
            raim: cursor.read_bool()?,
            dte: cursor.read_bool()?,
            assigned_mode: cursor.read_bool()?,
            spare: cursor.read_u8(4)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare_after_id), 8)?;
        writer.append_unsigned(u64::from(self.sog), 10)?;
        writer.append_bool(self.position_accuracy)?;
        self.position.encode(writer)?;
        writer.append_unsigned(u64::from(self.cog), 12)?;
        writer.append_unsigned(u64::from(self.true_heading), 9)?;
        writer.append_unsigned(u64::from(self.utc_second), 6)?;
        writer.append_unsigned(u64::from(self.regional), 4)?;
        writer.append_text(&self.name, 20)?;
        writer.append_unsigned(u64::from(self.ship_type), 8)?;
        self.dimensions.encode(writer)?;
        writer.append_unsigned(u64::from(self.epfd), 4)?;
        writer.append_bool(self.raim)?;
        writer.append_bool(self.dte)?;
        writer.append_bool(self.assigned_mode)?;
        writer.append_unsigned(u64::from(self.spare), 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bits::BitSequence, messages::test_util::round_trip};

    fn decode(text: &str) -> ClassBPositionReport {
        let bits = BitSequence::from_armored(text, 0).unwrap();
        let mut cursor = BitCursor::new(&bits);
        let (id, header) = Header::decode(&mut cursor).unwrap();
        assert_eq!(id, 18);
        let report = ClassBPositionReport::decode_body(header, &mut cursor).unwrap();
        assert_eq!(cursor.remaining(), 0);
        report
    }

    #[test]
    fn test_decode_class_b() {
        let report = decode("B52K>;h00Fc>jpUlNV@ikwpUoP06");
        assert_eq!(report.header.mmsi, 338_087_471);
        assert_eq!(report.sog, 1);
        assert!(!report.position_accuracy);
        assert_eq!(report.position.raw_longitude(), -44_443_279);
        assert_eq!(report.position.raw_latitude(), 24_410_724);
        assert_eq!(report.cog, 796);
        assert_eq!(report.true_heading, 511);
        assert_eq!(report.utc_second, 49);
        assert!(report.class_b_unit_flag);
        assert!(!report.class_b_display_flag);
        assert!(report.class_b_dsc_flag);
        assert!(report.class_b_band_flag);
        assert!(report.class_b_msg22_flag);
        assert!(!report.mode_flag);
        assert!(report.raim);
        assert!(report.comm_state_selector);
        assert_eq!(report.comm_state, 393_222);

        assert_eq!(report.speed_knots(), Some(0.1));
        assert_eq!(report.course_degrees(), Some(79.6));
        assert_eq!(report.heading_degrees(), None);
        assert_eq!(report.time_stamp(), TimeStamp::Second(49));
        assert_eq!(report.comm_state_kind(), CommStateKind::Itdma);
        assert!((report.position.longitude() - -74.072_131_666).abs() < 1e-6);
        assert!((report.position.latitude() - 40.684_54).abs() < 1e-6);
    }

    #[test]
    fn test_sentinel_report() {
        let mut report = ClassBPositionReport::new(Header::new(123_456_789));
        report.sog = 0;
        report.position_accuracy = true;
        report.utc_second = 60;
        report.class_b_unit_flag = false;

        let (decoded, bits) = round_trip(18, report.header, &report);
        assert_eq!(bits.len(), 168);
        assert_eq!(decoded, report);
        assert!(decoded.is_sog_valid());
        assert!(!decoded.is_cog_valid());
        assert!(!decoded.is_heading_valid());
        assert!(!decoded.is_position_valid());
        assert_eq!(decoded.time_stamp(), TimeStamp::NotAvailable);
        assert_eq!(bits.to_armored().text, "B1mg=5@00;?8mP=18D3Q3wv03P06");
    }

    #[test]
    fn test_validity_boundaries() {
        let mut report = ClassBPositionReport::new(Header::new(1));
        report.sog = 1022;
        report.cog = 3599;
        report.true_heading = 359;
        assert!(report.is_sog_valid());
        assert!(report.is_cog_valid());
        assert!(report.is_heading_valid());

        report.sog = 1023;
        report.cog = 3600;
        report.true_heading = 360;
        assert!(!report.is_sog_valid());
        assert!(!report.is_cog_valid());
        assert!(!report.is_heading_valid());
    }

    #[test]
    fn test_encode_overflow() {
        let mut report = ClassBPositionReport::new(Header::new(1));
        report.sog = 1024;
        let mut writer = BitWriter::new();
        assert_eq!(
            report.encode_body(&mut writer).unwrap_err(),
            EncodeError::FieldOverflow {
                value: 1024,
                width: 10
            }
        );
    }

    #[test]
    fn test_extended_round_trip() {
        let report = ExtendedClassBPositionReport {
            header: Header::new(367_059_850),
            spare_after_id: 0,
            sog: 87,
            position_accuracy: false,
            position: Position::from_degrees(-88.810_394, 29.543_695, Precision::High),
            cog: 335,
            true_heading: 511,
            utc_second: 46,
            regional: 0,
            name: "CAPT.J.RIMES".to_string(),
            ship_type: 70,
            dimensions: Dimensions {
                to_bow: 5,
                to_stern: 21,
                to_port: 4,
                to_starboard: 4,
            },
            epfd: 1,
            raim: false,
            dte: true,
            assigned_mode: false,
            spare: 0,
        };

        let (decoded, bits) = round_trip(19, report.header, &report);
        assert_eq!(bits.len(), 312);
        assert_eq!(decoded.name, "CAPT.J.RIMES@@@@@@@@");
        assert_eq!(decoded.trimmed_name(), "CAPT.J.RIMES");
        assert_eq!(decoded.position, report.position);
        assert_eq!(decoded.dimensions.length(), Some(26));
        assert!(decoded.is_sog_valid());
        assert!(!decoded.is_heading_valid());
    }
}
