//! Message 15: interrogation of one or two stations.
//!
//! The payload is 88 bits for a single request, 110 bits when the first station
//! is asked for a second message and 160 bits when a second station is
//! interrogated as well.

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
    name: "interrogation",
    message_ids: &[15],
    length: PayloadLength::OneOf(&[88, 110, 160]),
    fields: &[
        FieldSpec::unsigned("spare", 2),
        FieldSpec::unsigned("station_1_mmsi", 30),
        FieldSpec::unsigned("message_1_1", 6),
        FieldSpec::unsigned("slot_offset_1_1", 12),
    ],
};

const SECOND_REQUEST_BITS: usize = 22;
const SECOND_STATION_BITS: usize = 50;

/// A requested message id and the slot offset for the reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterrogationRequest {
    pub message_id: u8,
    pub slot_offset: u16,
}

impl InterrogationRequest {
    fn decode(cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            message_id: cursor.read_u8(6)?,
            slot_offset: cursor.read_u16(12)?,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.message_id), 6)?;
        writer.append_unsigned(u64::from(self.slot_offset), 12)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interrogation {
    pub header: Header,
    pub spare: u8,
    pub station_1_mmsi: u32,
    pub request_1_1: InterrogationRequest,
    /// Second request to the first station. Written as zeros when absent but a
    /// second station is present.
    pub request_1_2: Option<InterrogationRequest>,
    pub station_2: Option<(u32, InterrogationRequest)>,
    /// Spare bits after the first station block and after the second request
    /// and second station; zero when the block is absent.
    pub trailing_spares: [u8; 3],
}

impl Interrogation {
    pub fn new(header: Header, station_1_mmsi: u32, request: InterrogationRequest) -> Self {
        Self {
            header,
            spare: 0,
            station_1_mmsi,
            request_1_1: request,
            request_1_2: None,
            station_2: None,
            trailing_spares: [0; 3],
        }
    }
}

impl Body for Interrogation {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        let mut message = Self::new(header, 0, InterrogationRequest::default());
        message.spare = cursor.read_u8(2)?;
        message.station_1_mmsi = cursor.read_u32(30)?;
        message.request_1_1 = InterrogationRequest::decode(cursor)?;

        if cursor.remaining() >= SECOND_REQUEST_BITS {
            message.trailing_spares[0] = cursor.read_u8(2)?;
            message.request_1_2 = Some(InterrogationRequest::decode(cursor)?);
            message.trailing_spares[1] = cursor.read_u8(2)?;
        }
        if cursor.remaining() >= SECOND_STATION_BITS {
            let mmsi = cursor.read_u32(30)?;
            message.station_2 = Some((mmsi, InterrogationRequest::decode(cursor)?));
            message.trailing_spares[2] = cursor.read_u8(2)?;
        }
        Ok(message)
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        writer.append_unsigned(u64::from(self.station_1_mmsi), 30)?;
        self.request_1_1.encode(writer)?;

        if self.request_1_2.is_some() || self.station_2.is_some() {
            writer.append_unsigned(u64::from(self.trailing_spares[0]), 2)?;
            self.request_1_2.unwrap_or_default().encode(writer)?;
            writer.append_unsigned(u64::from(self.trailing_spares[1]), 2)?;
        }
        if let Some((mmsi, request)) = &self.station_2 {
            writer.append_unsigned(u64::from(*mmsi), 30)?;
            request.encode(writer)?;
            writer.append_unsigned(u64::from(self.trailing_spares[2]), 2)?;
        }
        Ok(())
    }
}
