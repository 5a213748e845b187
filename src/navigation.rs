//! Sentinels and unit conversions shared by the navigation fields of several
//! message types.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
};

/// Speed over ground in 1/10 knot; this value means not available.
pub const SOG_NOT_AVAILABLE: u16 = 1023;
/// Course over ground in 1/10 degree; this and anything above is not available.
pub const COG_NOT_AVAILABLE: u16 = 3600;
/// True heading in degrees; the canonical not-available value. Anything from
/// 360 up is not available.
pub const HEADING_NOT_AVAILABLE: u16 = 511;
/// Rate of turn; this raw value means not available.
pub const ROT_NOT_AVAILABLE: i8 = -128;

pub fn is_sog_valid(sog: u16) -> bool {
    sog < SOG_NOT_AVAILABLE
}

pub fn is_cog_valid(cog: u16) -> bool {
    cog < COG_NOT_AVAILABLE
}

pub fn is_heading_valid(heading: u16) -> bool {
    heading < 360
}

pub fn speed_knots(sog: u16) -> Option<f64> {
    is_sog_valid(sog).then(|| f64::from(sog) / 10.0)
}

pub fn course_degrees(cog: u16) -> Option<f64> {
    is_cog_valid(cog).then(|| f64::from(cog) / 10.0)
}

pub fn heading_degrees(heading: u16) -> Option<u16> {
    is_heading_valid(heading).then_some(heading)
}

/// Status of the 6-bit UTC second field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeStamp {
    /// The second of the minute the report was generated (0..=59).
    Second(u8),
    /// 60: time stamp not available.
    NotAvailable,
    /// 61: positioning system in manual input mode.
    ManualInput,
    /// 62: positioning system in estimated (dead reckoning) mode.
    DeadReckoning,
    /// 63: positioning system inoperative.
    Inoperative,
}

impl TimeStamp {
    pub fn from_raw(raw: u8) -> Self {
        match raw & 0x3f {
            60 => TimeStamp::NotAvailable,
            61 => TimeStamp::ManualInput,
            62 => TimeStamp::DeadReckoning,
            63 => TimeStamp::Inoperative,
            second => TimeStamp::Second(second),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            TimeStamp::Second(second) => second,
            TimeStamp::NotAvailable => 60,
            TimeStamp::ManualInput => 61,
            TimeStamp::DeadReckoning => 62,
            TimeStamp::Inoperative => 63,
        }
    }

    pub fn second(self) -> Option<u8> {
        match self {
            TimeStamp::Second(second) => Some(second),
            _ => None,
        }
    }
}

/// Reference point dimensions in metres: bow 9, stern 9, port 6, starboard 6 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u8,
    pub to_starboard: u8,
}

impl Dimensions {
    pub const BITS: usize = 30;

    pub fn decode(cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            to_bow: cursor.read_u16(9)?,
            to_stern: cursor.read_u16(9)?,
            to_port: cursor.read_u8(6)?,
            to_starboard: cursor.read_u8(6)?,
        })
    }

    pub fn encode(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.to_bow), 9)?;
        writer.append_unsigned(u64::from(self.to_stern), 9)?;
        writer.append_unsigned(u64::from(self.to_port), 6)?;
        writer.append_unsigned(u64::from(self.to_starboard), 6)
    }

    /// Overall length in metres, when both ends are known.
    pub fn length(&self) -> Option<u32> {
        (self.to_bow > 0 && self.to_stern > 0)
            .then(|| u32::from(self.to_bow) + u32::from(self.to_stern))
    }

    /// Overall beam in metres, when both sides are known.
    pub fn beam(&self) -> Option<u16> {
        (self.to_port > 0 && self.to_starboard > 0)
            .then(|| u16::from(self.to_port) + u16::from(self.to_starboard))
    }

    /// The 30 bits read back as a single value, used where the field carries a
    /// mothership MMSI instead.
    pub fn packed(&self) -> u32 {
        (u32::from(self.to_bow) << 21)
            | (u32::from(self.to_stern) << 12)
            | (u32::from(self.to_port) << 6)
            | u32::from(self.to_starboard)
    }
}

/// Estimated time of arrival as carried by message 5. Zero fields mean not available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eta {
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl Eta {
    pub fn decode(cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            month: cursor.read_u8(4)?,
            day: cursor.read_u8(5)?,
            hour: cursor.read_u8(5)?,
            minute: cursor.read_u8(6)?,
        })
    }

    pub fn encode(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_unsigned(u64::from(self.month), 4)?;
        writer.append_unsigned(u64::from(self.day), 5)?;
        writer.append_unsigned(u64::from(self.hour), 5)?;
        writer.append_unsigned(u64::from(self.minute), 6)
    }
}
