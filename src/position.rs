//! Fixed-point longitude/latitude codec shared by every position-bearing message.
//!
//! Longitude is always emitted before latitude.

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
};

/// Resolution of an encoded position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// 28/27 bits in 1/10000 minute.
    High,
    /// 18/17 bits in 1/10 minute.
    Low,
}

impl Precision {
    pub const fn longitude_bits(self) -> usize {
        match self {
            Precision::High => 28,
            Precision::Low => 18,
        }
    }

    pub const fn latitude_bits(self) -> usize {
        match self {
            Precision::High => 27,
            Precision::Low => 17,
        }
    }

    /// Raw units per degree.
    pub const fn scale(self) -> f64 {
        match self {
            Precision::High => 600_000.0,
            Precision::Low => 600.0,
        }
    }

    /// Raw longitude meaning "not available" (181 degrees).
    pub const fn longitude_sentinel(self) -> i32 {
        match self {
            Precision::High => 108_600_000,
            Precision::Low => 108_600,
        }
    }

    /// Raw latitude meaning "not available" (91 degrees).
    pub const fn latitude_sentinel(self) -> i32 {
        match self {
            Precision::High => 54_600_000,
            Precision::Low => 54_600,
        }
    }
}

/// A raw fixed-point position. Degrees are derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    raw_longitude: i32,
    raw_latitude: i32,
    precision: Precision,
}

impl Position {
    pub const fn from_raw(raw_longitude: i32, raw_latitude: i32, precision: Precision) -> Self {
        Self {
            raw_longitude,
            raw_latitude,
            precision,
        }
    }

    /// Builds a position from degrees, rounding to the nearest raw unit.
    pub fn from_degrees(longitude: f64, latitude: f64, precision: Precision) -> Self {
        let scale = precision.scale();
        Self {
            raw_longitude: (longitude * scale).round() as i32,
            raw_latitude: (latitude * scale).round() as i32,
            precision,
        }
    }

    /// The sentinel position (181, 91).
    pub const fn not_available(precision: Precision) -> Self {
        Self::from_raw(
            precision.longitude_sentinel(),
            precision.latitude_sentinel(),
            precision,
        )
    }

    /// Replaces the whole raw longitude.
    pub const fn with_raw_longitude(self, raw_longitude: i32) -> Self {
        Self {
            raw_longitude,
            ..self
        }
    }

    /// Replaces the whole raw latitude.
    pub const fn with_raw_latitude(self, raw_latitude: i32) -> Self {
        Self {
            raw_latitude,
            ..self
        }
    }

    pub const fn raw_longitude(&self) -> i32 {
        self.raw_longitude
    }

    pub const fn raw_latitude(&self) -> i32 {
        self.raw_latitude
    }

    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        f64::from(self.raw_longitude) / self.precision.scale()
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        f64::from(self.raw_latitude) / self.precision.scale()
    }

    /// False only for the sentinel pair.
    pub fn is_available(&self) -> bool {
        !(self.raw_longitude == self.precision.longitude_sentinel()
            && self.raw_latitude == self.precision.latitude_sentinel())
    }

    /// Whether the degrees lie on the globe.
    pub fn is_in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude()) && (-90.0..=90.0).contains(&self.latitude())
    }

    /// `(latitude, longitude)` in degrees when the position is usable.
    pub fn geo_location(&self) -> Option<(f64, f64)> {
        (self.is_available() && self.is_in_range()).then(|| (self.latitude(), self.longitude()))
    }

    /// Reads longitude then latitude.
    pub fn decode(cursor: &mut BitCursor<'_>, precision: Precision) -> Result<Self, DecodeError> {
        let raw_longitude = cursor.read_i32(precision.longitude_bits())?;
        let raw_latitude = cursor.read_i32(precision.latitude_bits())?;
        Ok(Self::from_raw(raw_longitude, raw_latitude, precision))
    }

    /// Writes longitude then latitude.
    pub fn encode(&self, writer: &mut BitWriter) -> Result<(), EncodeError> {
        writer.append_signed(
            i64::from(self.raw_longitude),
            self.precision.longitude_bits(),
        )?;
        writer.append_signed(i64::from(self.raw_latitude), self.precision.latitude_bits())
    }
}
