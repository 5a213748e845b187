//! Message 22: channel management.
//!
//! The two 35-bit halves in the middle of the message hold either a rectangular
//! area (north-east and south-west corners at 1/10 minute) or two addressed
//! stations. Which one is announced by the `addressed` flag that follows them,
//! so both halves are read raw first and interpreted afterwards.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    bits::sign_extend,
    errors::{DecodeError, EncodeError},
    field::FieldSpec,
    header::Header,
    layout::{Layout, PayloadLength},
    messages::Body,
    position::{Position, Precision},
};

pub const LAYOUT: Layout = Layout {
    name: "channel_management",
    message_ids: &[22],
    length: PayloadLength::Exact(168),
    fields: &[
        FieldSpec::unsigned("spare", 2),
        FieldSpec::unsigned("channel_a", 12),
        FieldSpec::unsigned("channel_b", 12),
        FieldSpec::unsigned("tx_rx_mode", 4),
        FieldSpec::unsigned("power", 1),
        FieldSpec::unsigned("target_1", 35),
        FieldSpec::unsigned("target_2", 35),
        FieldSpec::unsigned("addressed", 1),
        FieldSpec::unsigned("band_a", 1),
        FieldSpec::unsigned("band_b", 1),
        FieldSpec::unsigned("zone_size", 3),
        FieldSpec::unsigned("spare_2", 23),
    ],
};

const HALF_BITS: usize = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelManagementTarget {
    /// Corners in low precision.
    Area {
        north_east: Position,
        south_west: Position,
    },
    /// Destination MMSIs, each followed by 5 spare bits.
    Addressed {
        station_1: (u32, u8),
        station_2: (u32, u8),
    },
}

impl ChannelManagementTarget {
    fn from_halves(addressed: bool, halves: [u64; 2]) -> Self {
        if addressed {
            let station = |half: u64| ((half >> 5) as u32, (half & 0x1f) as u8);
            ChannelManagementTarget::Addressed {
                station_1: station(halves[0]),
                station_2: station(halves[1]),
            }
        } else {
            let corner = |half: u64| {
                Position::from_raw(
                    sign_extend(half >> 17, 18) as i32,
                    sign_extend(half & 0x1_ffff, 17) as i32,
                    Precision::Low,
                )
            };
            ChannelManagementTarget::Area {
                north_east: corner(halves[0]),
                south_west: corner(halves[1]),
            }
        }
    }

    pub fn is_addressed(&self) -> bool {
        matches!(self, ChannelManagementTarget::Addressed { .. })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        match self {
            ChannelManagementTarget::Area {
                north_east,
                south_west,
            } => {
                north_east.encode(writer)?;
                south_west.encode(writer)
            }
            ChannelManagementTarget::Addressed {
                station_1,
                station_2,
            } => {
                for (mmsi, spare) in [station_1, station_2] {
                    writer.append_unsigned(u64::from(*mmsi), 30)?;
                    writer.append_unsigned(u64::from(*spare), 5)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelManagement {
    pub header: Header,
    pub spare: u8,
    pub channel_a: u16,
    pub channel_b: u16,
    pub tx_rx_mode: u8,
    /// High power when false.
    pub low_power: bool,
    pub target: ChannelManagementTarget,
    pub band_a: bool,
    pub band_b: bool,
    pub zone_size: u8,
    pub spare_2: u32,
}

impl Body for ChannelManagement {
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        let spare = cursor.read_u8(2)?;
        let channel_a = cursor.read_u16(12)?;
        let channel_b = cursor.read_u16(12)?;
        let tx_rx_mode = cursor.read_u8(4)?;
        let low_power = cursor.read_bool()?;
        let halves = [
            cursor.read_unsigned(HALF_BITS)?,
            cursor.read_unsigned(HALF_BITS)?,
        ];
        let addressed = cursor.read_bool()?;
        Ok(Self {
            header,
            spare,
            channel_a,
            channel_b,
            tx_rx_mode,
            low_power,
            target: ChannelManagementTarget::from_halves(addressed, halves),
            band_a: cursor.read_bool()?,
            band_b: cursor.read_bool()?,
            zone_size: cursor.read_u8(3)?,
            spare_2: cursor.read_u32(23)?,
        })
    }

    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.spare), 2)?;
        writer.append_unsigned(u64::from(self.channel_a), 12)?;
        writer.append_unsigned(u64::from(self.channel_b), 12)?;
        writer.append_unsigned(u64::from(self.tx_rx_mode), 4)?;
        writer.append_bool(self.low_power)?;
        self.target.encode(writer)?;
        writer.append_bool(self.target.is_addressed())?;
        writer.append_bool(self.band_a)?;
        writer.append_bool(self.band_b)?;
        writer.append_unsigned(u64::from(self.zone_size), 3)?;
        writer.append_unsigned(u64::from(self.spare_2), 23)
    }
}
