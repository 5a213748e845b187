//! Binary payload messages: 6 (addressed), 8 (broadcast), 25 (single slot) and
//! 26 (multi slot). The application data itself is kept as an opaque
//! [`BitSequence`]; its meaning depends on the application identifier.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    bits::BitSequence,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::{Body, CommStateKind},
};

pub const ADDRESSED_LAYOUT: Layout = Layout {
    name: "addressed_binary",
    message_ids: &[6],
    length: PayloadLength::Range { min: 88, max: 1008 },
    fields: &[
        FieldSpec::unsigned("sequence_number", 2),
        FieldSpec::unsigned("destination_mmsi", 30),
        FieldSpec::unsigned("retransmitted", 1),
        FieldSpec::unsigned("spare", 1),
        FieldSpec::unsigned("dac", 10),
        FieldSpec::unsigned("fid", 6),
    ],
};

pub const BROADCAST_LAYOUT: Layout = Layout {
    name: "binary_broadcast",
    message_ids: &[8],
    length: PayloadLength::Range { min: 56, max: 1008 },
    fields: &[
        FieldSpec::unsigned("spare", 2),
        FieldSpec::unsigned("dac", 10),
        FieldSpec::unsigned("fid", 6),
    ],
};

pub const SINGLE_SLOT_LAYOUT: Layout = Layout {
    name: "single_slot_binary",
    message_ids: &[25],
    length: PayloadLength::Range { min: 40, max: 168 },
    fields: &[
        FieldSpec::unsigned("addressed", 1),
        FieldSpec::unsigned("structured", 1),
    ],
};

pub const MULTI_SLOT_LAYOUT: Layout = Layout {
    name: "multi_slot_binary",
    message_ids: &[26],
    length: PayloadLength::Range { min: 60, max: 1064 },
    fields: &[
        FieldSpec::unsigned("addressed", 1),
        FieldSpec::unsigned("structured", 1),
    ],
};

/// Designated area code and function identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationId {
    pub dac: u16,
    pub fid: u8,
}

impl ApplicationId {
    pub const BITS: usize = 16;

    pub fn decode(cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            dac: cursor.read_u16(10)?,
            fid: cursor.read_u8(6)?,
        })
    }

    pub fn encode(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.dac), 10)?;
        writer.append_unsigned(u64::from(self.fid), 6)
    }
}

/// Message 6: addressed binary message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressedBinary {
    pub header: Header,
    pub sequence_number: u8,
    pub destination_mmsi: u32,
    pub retransmitted: bool,
    pub spare: bool,
    pub application_id: ApplicationId,
    pub data: BitSequence,
}

impl Body for AddressedBinary {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            sequence_number: cursor.read_u8(2)?,
            destination_mmsi: cursor.read_u32(30)?,
            retransmitted: cursor.read_bool()?,
            spare: cursor.read_bool()?,
            application_id: ApplicationId::decode(cursor)?,
            data: cursor.read_remaining()?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.sequence_number), 2)?;
        writer.append_unsigned(u64::from(self.destination_mmsi), 30)?;
        writer.append_bool(self.retransmitted)?;
        writer.append_bool(self.spare)?;
        self.application_id.encode(writer)?;
        writer.append_sequence(&self.data)
    }
}

/// Message 8: binary broadcast message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryBroadcast {
    pub header: Header,
    pub spare: u8,
    pub application_id: ApplicationId,
    pub data: BitSequence,
}

impl Body for BinaryBroadcast {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            spare: cursor.read_u8(2)?,
            application_id: ApplicationId::decode(cursor)?,
            data: cursor.read_remaining()?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        self.application_id.encode(writer)?;
        writer.append_sequence(&self.data)
    }
}

/// Addressing and application id shared by messages 25 and 26. The flags are
/// implied by which options are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotBinaryAddressing {
    /// Destination MMSI and the 2 spare bits after it, when addressed.
    pub destination: Option<(u32, u8)>,
    /// Present when the data is structured.
    pub application_id: Option<ApplicationId>,
}

impl SlotBinaryAddressing {
    fn decode(cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        let addressed = cursor.read_bool()?;
        let structured = cursor.read_bool()?;
        let destination = if addressed {
            Some((cursor.read_u32(30)?, cursor.read_u8(2)?))
        } else {
            None
        };
        let application_id = if structured {
            Some(ApplicationId::decode(cursor)?)
        } else {
            None
        };
        Ok(Self {
            destination,
            application_id,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_bool(self.destination.is_some())?;
        writer.append_bool(self.application_id.is_some())?;
        if let Some((mmsi, spare)) = self.destination {
            writer.append_unsigned(u64::from(mmsi), 30)?;
            writer.append_unsigned(u64::from(spare), 2)?;
        }
        if let Some(application_id) = &self.application_id {
            application_id.encode(writer)?;
        }
        Ok(())
    }
}

/// Message 25: single slot binary message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleSlotBinary {
    pub header: Header,
    pub addressing: SlotBinaryAddressing,
    pub data: BitSequence,
}

impl Body for SingleSlotBinary {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            addressing: SlotBinaryAddressing::decode(cursor)?,
            data: cursor.read_remaining()?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        self.addressing.encode(writer)?;
        writer.append_sequence(&self.data)
    }
}

/// Message 26: multiple slot binary message with communication state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiSlotBinary {
    pub header: Header,
    pub addressing: SlotBinaryAddressing,
    pub data: BitSequence,
    pub comm_state_selector: bool,
    pub comm_state: u32,
}

impl MultiSlotBinary {
    const COMM_STATE_BITS: usize = 20;

    pub fn comm_state_kind(&self) -> CommStateKind {
        CommStateKind::from_selector(self.comm_state_selector)
    }
}

impl Body for MultiSlotBinary {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        let addressing = SlotBinaryAddressing::decode(cursor)?;
        let data_len = cursor.remaining().saturating_sub(Self::COMM_STATE_BITS);
        Ok(Self {
            header,
            addressing,
            data: cursor.read_sequence(data_len)?,
            comm_state_selector: cursor.read_bool()?,
            comm_state: cursor.read_u32(19)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        self.addressing.encode(writer)?;
        writer.append_sequence(&self.data)?;
        writer.append_bool(self.comm_state_selector)?;
        writer.append_unsigned(u64::from(self.comm_state), 19)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::test_util::round_trip;

    fn data(len: usize) -> BitSequence {
        (0..len).map(|i| i % 3 == 0).collect()
    }

    #[test]
    fn test_addressed_binary_round_trip() {
        let message = AddressedBinary {
            header: Header::new(2_655_651),
            sequence_number: 1,
            destination_mmsi: 265_538_450,
            retransmitted: false,
            spare: false,
            application_id: ApplicationId { dac: 1, fid: 12 },
            data: data(72),
        };
        let (decoded, bits) = round_trip(6, message.header, &message);
        assert_eq!(decoded, message);
        assert_eq!(bits.len(), 88 + 72);
    }

    #[test]
    fn test_binary_broadcast_empty_data() {
        let message = BinaryBroadcast {
            header: Header::new(366_999_712),
            spare: 0,
            application_id: ApplicationId { dac: 366, fid: 56 },
            data: BitSequence::new(),
        };
        let (decoded, bits) = round_trip(8, message.header, &message);
        assert_eq!(decoded, message);
        assert_eq!(bits.len(), 56);
    }

    #[test]
    fn test_single_slot_variants() {
        let cases = [
            (None, None, 40),
            (Some((123_456_789, 0)), None, 72),
            (None, Some(ApplicationId { dac: 1, fid: 0 }), 56),
            (Some((1, 3)), Some(ApplicationId { dac: 235, fid: 10 }), 88),
        ];
        for (destination, application_id, prefix) in cases {
            let message = SingleSlotBinary {
                header: Header::new(440_006_460),
                addressing: SlotBinaryAddressing {
                    destination,
                    application_id,
                },
                data: data(24),
            };
            let (decoded, bits) = round_trip(25, message.header, &message);
            assert_eq!(decoded, message);
            assert_eq!(bits.len(), prefix + 24);
        }
    }

    #[test]
    fn test_multi_slot_comm_state_at_end() {
        let message = MultiSlotBinary {
            header: Header::new(1),
            addressing: SlotBinaryAddressing {
                destination: Some((2, 0)),
                application_id: None,
            },
            data: data(30),
            comm_state_selector: true,
            comm_state: 0x7_ffff,
        };
        let (decoded, bits) = round_trip(26, message.header, &message);
        assert_eq!(decoded, message);
        assert_eq!(bits.len(), 40 + 32 + 30 + 20);
        assert_eq!(decoded.comm_state_kind(), CommStateKind::Itdma);
    }

    #[test]
    fn test_multi_slot_too_short_for_comm_state() {
        let mut writer = BitWriter::new();
        Header::new(1).encode(26, &mut writer).unwrap();
        writer.append_unsigned(0, 2).unwrap();
        writer.append_unsigned(0, 10).unwrap();
        let bits = writer.into_bits();

        let mut cursor = BitCursor::new(&bits);
        let (_, header) = Header::decode(&mut cursor).unwrap();
        assert!(matches!(
            MultiSlotBinary::decode_body(header, &mut cursor),
            Err(DecodeError::TruncatedPayload { .. })
        ));
    }
}
