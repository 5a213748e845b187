//! The message dispatcher: one enum variant per message identifier.
//!
//! Decoding peeks the 6-bit identifier, checks the payload length against the
//! layout for that identifier, then hands the cursor to the typed body. A payload
//! with bits left over after the body is rejected, so every accepted payload
//! re-encodes to the same bits.

use tracing::{debug, trace};

use crate::{
    bit_cursor::BitCursor,
    bit_writer::{ArmoredPayload, BitWriter},
    bits::BitSequence,
    errors::{DecodeError, EncodeError},
    header::Header,
    layout::Layout,
    messages::{self, Body},
    position::Position,
};

macro_rules! message_types {
    ($($id:literal => $variant:ident($body:ty, $layout:path)),+ $(,)?) => {
        /// A decoded AIS message.
        ///
        /// Identifiers that share a layout (1/2/3, 4/11, 7/13) share a body type
        /// but keep distinct variants so the identifier survives a round trip.
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Message {
            $($variant($body),)+
        }

        impl Message {
            pub fn message_id(&self) -> u8 {
                match self {
                    $(Message::$variant(_) => $id,)+
                }
            }

            pub fn header(&self) -> &Header {
                match self {
                    $(Message::$variant(body) => &body.header,)+
                }
            }

            pub fn layout(&self) -> &'static Layout {
                match self {
                    $(Message::$variant(_) => &$layout,)+
                }
            }

            fn decode_body(
                message_id: u8,
                header: Header,
                cursor: &mut BitCursor<'_>,
            ) -> Result<Self, DecodeError> {
                match message_id {
                    $($id => Ok(Message::$variant(<$body>::decode_body(header, cursor)?)),)+
                    _ => Err(DecodeError::UnsupportedMessageType(message_id)),
                }
            }

            fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
                match self {
                    $(Message::$variant(body) => body.encode_body(writer),)+
                }
            }
        }
    };
}

message_types! {
    1 => PositionReportScheduled(messages::PositionReport, messages::position_report::LAYOUT),
    2 => PositionReportAssigned(messages::PositionReport, messages::position_report::LAYOUT),
    3 => PositionReportResponse(messages::PositionReport, messages::position_report::LAYOUT),
    4 => BaseStationReport(messages::BaseStationReport, messages::base_station::LAYOUT),
    5 => StaticVoyageData(messages::StaticVoyageData, messages::static_voyage::LAYOUT),
    6 => AddressedBinary(messages::AddressedBinary, messages::binary::ADDRESSED_LAYOUT),
    7 => BinaryAcknowledge(messages::Acknowledge, messages::acknowledge::LAYOUT),
    8 => BinaryBroadcast(messages::BinaryBroadcast, messages::binary::BROADCAST_LAYOUT),
    9 => SarAircraftPosition(messages::SarAircraftPosition, messages::sar_aircraft::LAYOUT),
    10 => UtcInquiry(messages::UtcInquiry, messages::utc_inquiry::LAYOUT),
    11 => UtcResponse(messages::BaseStationReport, messages::base_station::LAYOUT),
    12 => AddressedSafety(messages::AddressedSafety, messages::safety::ADDRESSED_LAYOUT),
    13 => SafetyAcknowledge(messages::Acknowledge, messages::acknowledge::LAYOUT),
    14 => SafetyBroadcast(messages::SafetyBroadcast, messages::safety::BROADCAST_LAYOUT),
    15 => Interrogation(messages::Interrogation, messages::interrogation::LAYOUT),
    16 => AssignedModeCommand(messages::AssignedModeCommand, messages::assigned_mode::LAYOUT),
    17 => DgnssBroadcast(messages::DgnssBroadcast, messages::dgnss::LAYOUT),
    18 => ClassBPositionReport(messages::ClassBPositionReport, messages::class_b::LAYOUT),
    19 => ExtendedClassBPositionReport(
        messages::ExtendedClassBPositionReport,
        messages::class_b::EXTENDED_LAYOUT
    ),
    20 => DataLinkManagement(messages::DataLinkManagement, messages::data_link::LAYOUT),
    21 => AidToNavigationReport(
        messages::AidToNavigationReport,
        messages::aid_to_navigation::LAYOUT
    ),
    22 => ChannelManagement(messages::ChannelManagement, messages::channel_management::LAYOUT),
    23 => GroupAssignmentCommand(
        messages::GroupAssignmentCommand,
        messages::group_assignment::LAYOUT
    ),
    24 => StaticDataReport(messages::StaticDataReport, messages::static_data::LAYOUT),
    25 => SingleSlotBinary(messages::SingleSlotBinary, messages::binary::SINGLE_SLOT_LAYOUT),
    26 => MultiSlotBinary(messages::MultiSlotBinary, messages::binary::MULTI_SLOT_LAYOUT),
    27 => LongRangeBroadcast(messages::LongRangeBroadcast, messages::long_range::LAYOUT),
}

impl Message {
    /// Decodes a message from its payload bits (fill bits already removed).
    pub fn decode(bits: &BitSequence) -> Result<Self, DecodeError> {
        match Self::decode_checked(bits) {
            Ok(message) => {
                trace!(
                    message_id = message.message_id(),
                    bits = bits.len(),
                    "decoded message"
                );
                Ok(message)
            }
            Err(err) => {
                debug!(bits = bits.len(), %err, "rejected payload");
                Err(err)
            }
        }
    }

    /// Dearmors `text`, drops `fill_bits` trailing bits and decodes the result.
    pub fn decode_armored(text: &str, fill_bits: u8) -> Result<Self, DecodeError> {
        let bits = BitSequence::from_armored(text, fill_bits).inspect_err(|err| {
            debug!(chars = text.len(), fill_bits, %err, "rejected armored payload");
        })?;
        Self::decode(&bits)
    }

    fn decode_checked(bits: &BitSequence) -> Result<Self, DecodeError> {
        let message_id = Header::peek_message_id(bits)?;
        let layout = Layout::for_message_id(message_id)
            .ok_or(DecodeError::UnsupportedMessageType(message_id))?;
        layout.check_length(message_id, bits.len())?;

        let mut cursor = BitCursor::new(bits);
        let (_, header) = Header::decode(&mut cursor)?;
        let message = Self::decode_body(message_id, header, &mut cursor)?;

        if cursor.remaining() != 0 {
            return Err(DecodeError::WrongPayloadLength {
                message_id,
                actual: bits.len(),
                expected: layout.length,
            });
        }
        Ok(message)
    }

    /// Encodes the message into payload bits without fill padding.
    pub fn encode(&self) -> Result<BitSequence, EncodeError> {
        Ok(self.write()?.into_bits())
    }

    /// Encodes and armors the message.
    pub fn to_armored(&self) -> Result<ArmoredPayload, EncodeError> {
        Ok(self.write()?.finalize())
    }

    fn write(&self) -> Result<BitWriter, EncodeError> {
        let message_id = self.message_id();
        let layout = self.layout();
        let mut writer = BitWriter::with_capacity(layout.length.min());
        self.header().encode(message_id, &mut writer)?;
        self.encode_body(&mut writer)?;

        if !layout.length.accepts(writer.len()) {
            let err = EncodeError::WrongPayloadLength {
                message_id,
                actual: writer.len(),
                expected: layout.length,
            };
            debug!(message_id, %err, "refused to encode message");
            return Err(err);
        }

        trace!(message_id, bits = writer.len(), "encoded message");
        Ok(writer)
    }

    pub fn mmsi(&self) -> u32 {
        self.header().mmsi
    }

    pub fn repeat_indicator(&self) -> u8 {
        self.header().repeat_indicator
    }

    /// The reported position for types that carry a single one.
    pub fn position(&self) -> Option<Position> {
        match self {
            Message::PositionReportScheduled(report)
            | Message::PositionReportAssigned(report)
            | Message::PositionReportResponse(report) => Some(report.position),
            Message::BaseStationReport(report) | Message::UtcResponse(report) => {
                Some(report.position)
            }
            Message::SarAircraftPosition(report) => Some(report.position),
            Message::DgnssBroadcast(report) => Some(report.position),
            Message::ClassBPositionReport(report) => Some(report.position),
            Message::ExtendedClassBPositionReport(report) => Some(report.position),
            Message::AidToNavigationReport(report) => Some(report.position),
            Message::LongRangeBroadcast(report) => Some(report.position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::PayloadLength,
        messages::{Acknowledge, ClassBPositionReport, acknowledge::AcknowledgedStation},
        position::Precision,
    };

    #[test]
    fn test_class_b_end_to_end() {
        let message = Message::decode_armored("B52K>;h00Fc>jpUlNV@ikwpUoP06", 0).unwrap();
        assert_eq!(message.message_id(), 18);
        assert_eq!(message.mmsi(), 338_087_471);
        assert_eq!(message.layout().name, "class_b_position_report");

        let position = message.position().unwrap();
        assert_eq!(position.raw_longitude(), -44_443_279);
        assert_eq!(position.raw_latitude(), 24_410_724);

        let armored = message.to_armored().unwrap();
        assert_eq!(armored.text, "B52K>;h00Fc>jpUlNV@ikwpUoP06");
        assert_eq!(armored.fill_bits, 0);
    }

    #[test]
    fn test_unsupported_identifiers() {
        for id in [0u8, 28, 63] {
            let mut writer = BitWriter::new();
            writer.append_unsigned(u64::from(id), 6).unwrap();
            for width in [64, 64, 34] {
                writer.append_unsigned(0, width).unwrap();
            }
            assert_eq!(
                Message::decode(writer.bits()).unwrap_err(),
                DecodeError::UnsupportedMessageType(id)
            );
        }
    }

    #[test]
    fn test_wrong_length_rejected_before_fields() {
        let bits = BitSequence::from_armored("B52K>;h00Fc>jpUlNV@ikwpUoP0", 0).unwrap();
        assert_eq!(
            Message::decode(&bits).unwrap_err(),
            DecodeError::WrongPayloadLength {
                message_id: 18,
                actual: 162,
                expected: PayloadLength::Exact(168),
            }
        );
    }

    #[test]
    fn test_part_b_at_part_a_length_is_truncated() {
        let mut writer = BitWriter::new();
        Header::new(338_085_237).encode(24, &mut writer).unwrap();
        writer.append_unsigned(1, 2).unwrap();
        for _ in 0..2 {
            writer.append_unsigned(0, 60).unwrap();
        }
        assert_eq!(writer.len(), 160);
        assert!(matches!(
            Message::decode(writer.bits()),
            Err(DecodeError::TruncatedPayload { .. })
        ));
    }

    #[test]
    fn test_leftover_bits_rejected() {
        let mut writer = BitWriter::new();
        Header::new(1).encode(14, &mut writer).unwrap();
        writer.append_unsigned(0, 2).unwrap();
        writer.append_text("HI", 2).unwrap();
        writer.append_unsigned(0, 3).unwrap();
        assert!(matches!(
            Message::decode(writer.bits()),
            Err(DecodeError::WrongPayloadLength {
                message_id: 14,
                actual: 55,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_payload() {
        assert!(matches!(
            Message::decode(&BitSequence::new()),
            Err(DecodeError::TruncatedPayload { .. })
        ));
    }

    #[test]
    fn test_invalid_armor() {
        assert_eq!(
            Message::decode_armored("B52K!", 0).unwrap_err(),
            DecodeError::InvalidArmor {
                character: '!',
                offset: 4
            }
        );
    }

    #[test]
    fn test_shared_body_keeps_identifier() {
        let ack = Acknowledge {
            header: Header::new(2_655_651),
            spare: 0,
            stations: vec![AcknowledgedStation {
                mmsi: 265_538_450,
                sequence_number: 0,
            }],
        };
        for message in [
            Message::BinaryAcknowledge(ack.clone()),
            Message::SafetyAcknowledge(ack.clone()),
        ] {
            let bits = message.encode().unwrap();
            assert_eq!(bits.len(), 72);
            let decoded = Message::decode(&bits).unwrap();
            assert_eq!(decoded, message);
        }
    }

    #[test]
    fn test_encode_refuses_bad_length() {
        let ack = Acknowledge {
            header: Header::new(1),
            spare: 0,
            stations: Vec::new(),
        };
        assert_eq!(
            Message::BinaryAcknowledge(ack).encode().unwrap_err(),
            EncodeError::WrongPayloadLength {
                message_id: 7,
                actual: 40,
                expected: messages::acknowledge::LAYOUT.length,
            }
        );
    }

    #[test]
    fn test_layout_matches_lookup() {
        let mut report = ClassBPositionReport::new(Header::new(1));
        report.position = Position::from_degrees(10.0, 20.0, Precision::High);
        let message = Message::ClassBPositionReport(report);
        assert_eq!(
            Some(message.layout()),
            Layout::for_message_id(message.message_id())
        );
        assert!(message.position().unwrap().is_available());
    }

    #[test]
    fn test_position_absent_for_non_positional_types() {
        let message = Message::decode_armored(">5?Per18=HB1U:1@E=B0m<L", 2).unwrap();
        assert_eq!(message.message_id(), 14);
        assert_eq!(message.position(), None);
    }
}
