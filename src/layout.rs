//! Layout tables: the ordered fixed fields of each message type and the payload
//! lengths it may have.

use std::fmt;

use crate::{
    bit_cursor::BitCursor,
    bits::BitSequence,
    errors::DecodeError,
    field::{FieldSpec, HEADER_FIELDS, Value},
    header::HEADER_BITS,
    messages,
};

/// Payload lengths in bits a message type may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PayloadLength {
    Exact(usize),
    Range { min: usize, max: usize },
    OneOf(&'static [usize]),
}

impl PayloadLength {
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            PayloadLength::Exact(n) => len == n,
            PayloadLength::Range { min, max } => (min..=max).contains(&len),
            PayloadLength::OneOf(lens) => lens.contains(&len),
        }
    }

    pub fn min(&self) -> usize {
        match *self {
            PayloadLength::Exact(n) => n,
            PayloadLength::Range { min, .. } => min,
            PayloadLength::OneOf(lens) => lens.iter().copied().min().unwrap_or(0),
        }
    }
}

impl fmt::Display for PayloadLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadLength::Exact(n) => write!(f, "{n}"),
            PayloadLength::Range { min, max } => write!(f, "{min}..={max}"),
            PayloadLength::OneOf(lens) => {
                let lens: Vec<String> = lens.iter().map(ToString::to_string).collect();
                write!(f, "one of {}", lens.join(", "))
            }
        }
    }
}

/// Static description of one message type.
///
/// `fields` lists the fields that follow the common header at fixed positions.
/// Variable tails (binary data, text, repeated blocks) are not listed; for
/// fixed-length types the table covers the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layout {
    pub name: &'static str,
    pub message_ids: &'static [u8],
    pub length: PayloadLength,
    pub fields: &'static [FieldSpec],
}

impl Layout {
    /// Looks up the layout for a message identifier.
    pub fn for_message_id(message_id: u8) -> Option<&'static Layout> {
        let layout = match message_id {
            1..=3 => &messages::position_report::LAYOUT,
            4 | 11 => &messages::base_station::LAYOUT,
            5 => &messages::static_voyage::LAYOUT,
            6 => &messages::binary::ADDRESSED_LAYOUT,
            7 | 13 => &messages::acknowledge::LAYOUT,
            8 => &messages::binary::BROADCAST_LAYOUT,
            9 => &messages::sar_aircraft::LAYOUT,
            10 => &messages::utc_inquiry::LAYOUT,
            12 => &messages::safety::ADDRESSED_LAYOUT,
            14 => &messages::safety::BROADCAST_LAYOUT,
            15 => &messages::interrogation::LAYOUT,
            16 => &messages::assigned_mode::LAYOUT,
            17 => &messages::dgnss::LAYOUT,
            18 => &messages::class_b::LAYOUT,
            19 => &messages::class_b::EXTENDED_LAYOUT,
            20 => &messages::data_link::LAYOUT,
            21 => &messages::aid_to_navigation::LAYOUT,
            22 => &messages::channel_management::LAYOUT,
            23 => &messages::group_assignment::LAYOUT,
            24 => &messages::static_data::LAYOUT,
            25 => &messages::binary::SINGLE_SLOT_LAYOUT,
            26 => &messages::binary::MULTI_SLOT_LAYOUT,
            27 => &messages::long_range::LAYOUT,
            _ => return None,
        };
        Some(layout)
    }

    /// Bits covered by the header and the fixed fields.
    pub fn fixed_bits(&self) -> usize {
        HEADER_BITS + self.fields.iter().map(|field| field.width).sum::<usize>()
    }

    pub fn check_length(&self, message_id: u8, len: usize) -> Result<(), DecodeError> {
        if !self.length.accepts(len) {
            return Err(DecodeError::WrongPayloadLength {
                message_id,
                actual: len,
                expected: self.length,
            });
        }
        Ok(())
    }

    /// Reads the header and fixed fields in table order.
    ///
    /// The payload length is checked first. Useful for inspecting a payload field
    /// by field without building a typed message.
    pub fn read_fields(
        &self,
        bits: &BitSequence,
    ) -> Result<Vec<(&'static str, Value)>, DecodeError> {
        let message_id = crate::header::Header::peek_message_id(bits)?;
        self.check_length(message_id, bits.len())?;

        let mut cursor = BitCursor::new(bits);
        let mut values = Vec::with_capacity(HEADER_FIELDS.len() + self.fields.len());
        for field in HEADER_FIELDS.iter().chain(self.fields) {
            let value = if field.signed {
                Value::I64(cursor.read_signed(field.width)?)
            } else {
                Value::U64(cursor.read_unsigned(field.width)?)
            };
            values.push((field.name, value));
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_identifier_has_a_layout() {
        for id in 1..=27u8 {
            let layout = Layout::for_message_id(id).unwrap();
            assert!(layout.message_ids.contains(&id), "{id}");
        }
        assert!(Layout::for_message_id(0).is_none());
        assert!(Layout::for_message_id(28).is_none());
        assert!(Layout::for_message_id(63).is_none());
    }

    #[test]
    fn test_fixed_fields_fit_minimum_length() {
        for id in 1..=27u8 {
            let layout = Layout::for_message_id(id).unwrap();
            assert!(
                layout.fixed_bits() <= layout.length.min(),
                "{} fixed {} > min {}",
                layout.name,
                layout.fixed_bits(),
                layout.length.min()
            );
            if let PayloadLength::Exact(n) = layout.length {
                assert_eq!(layout.fixed_bits(), n, "{}", layout.name);
            }
        }
    }

    #[test]
    fn test_class_b_table() {
        let layout = Layout::for_message_id(18).unwrap();
        assert_eq!(layout.length, PayloadLength::Exact(168));
        assert_eq!(layout.fields.len(), 18);
        assert_eq!(layout.fields[0], FieldSpec::unsigned("spare_after_id", 8));
        assert_eq!(layout.fields[3], FieldSpec::signed("longitude", 28));
        assert_eq!(layout.fields[4], FieldSpec::signed("latitude", 27));
    }

    #[test]
    fn test_read_fields() {
        let bits = BitSequence::from_armored("B52K>;h00Fc>jpUlNV@ikwpUoP06", 0).unwrap();
        let layout = Layout::for_message_id(18).unwrap();
        let values = layout.read_fields(&bits).unwrap();
        assert_eq!(values.len(), 21);
        assert_eq!(values[0], ("message_id", Value::U64(18)));
        assert_eq!(values[2], ("mmsi", Value::U64(338_087_471)));
        assert_eq!(values[6], ("longitude", Value::I64(-44_443_279)));
        assert_eq!(values[7], ("latitude", Value::I64(24_410_724)));
        assert_eq!(values[20], ("comm_state", Value::U64(393_222)));
    }

    #[test]
    fn test_read_fields_checks_length() {
        let bits = BitSequence::from_armored("B52K>;h00Fc>jpUlNV@ikwpUoP0", 0).unwrap();
        let layout = Layout::for_message_id(18).unwrap();
        assert_eq!(
            layout.read_fields(&bits).unwrap_err(),
            DecodeError::WrongPayloadLength {
                message_id: 18,
                actual: 162,
                expected: PayloadLength::Exact(168)
            }
        );
    }

    #[test]
    fn test_payload_length_display() {
        assert_eq!(PayloadLength::Exact(168).to_string(), "168");
        let range = PayloadLength::Range { min: 56, max: 1008 };
        assert_eq!(range.to_string(), "56..=1008");
        assert_eq!(
            PayloadLength::OneOf(&[160, 168]).to_string(),
            "one of 160, 168"
        );
    }
}
