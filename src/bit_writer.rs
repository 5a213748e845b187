//! Append-only bit buffer and six-bit armoring.

use crate::{bits::BitSequence, errors::EncodeError, sixbit};

/// Six-bit armored payload ready for the transport layer to wrap in a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmoredPayload {
    pub text: String,
    /// Zero bits appended to reach a multiple of six (0..=5).
    pub fill_bits: u8,
}

/// Accumulates fixed-width fields MSB-first in write order.
///
/// One writer serves exactly one encode call. After [`BitWriter::finalize`] the
/// writer is frozen and every append fails with [`EncodeError::WriterFinalized`].
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bits: BitSequence,
    finalized: bool,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        let mut writer = Self::new();
        writer.bits = BitSequence::with_capacity(bits);
        writer
    }

    /// Number of bits written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Appends `value` as an unsigned field of `width` bits (1..=64).
    pub fn append_unsigned(&mut self, value: u64, width: usize) -> Result<(), EncodeError> {
        self.check_open(width)?;
        if width < 64 && value >> width != 0 {
            return Err(EncodeError::FieldOverflow {
                value: i128::from(value),
                width,
            });
        }

        self.push_bits(value, width);
        Ok(())
    }

    /// Appends `value` as a two's-complement field of `width` bits (1..=64).
    pub fn append_signed(&mut self, value: i64, width: usize) -> Result<(), EncodeError> {
        self.check_open(width)?;
        let min = -(1i128 << (width - 1));
        let max = (1i128 << (width - 1)) - 1;
        if !(min..=max).contains(&i128::from(value)) {
            return Err(EncodeError::FieldOverflow {
                value: i128::from(value),
                width,
            });
        }

        self.push_bits(value as u64, width);
        Ok(())
    }

    pub fn append_bool(&mut self, value: bool) -> Result<(), EncodeError> {
        self.append_unsigned(u64::from(value), 1)
    }

    /// Appends `text` as `chars` six-bit text characters, padding with `@`.
    pub fn append_text(&mut self, text: &str, chars: usize) -> Result<(), EncodeError> {
        if self.finalized {
            return Err(EncodeError::WriterFinalized);
        }

        let count = text.chars().count();
        if count > chars {
            return Err(EncodeError::FieldOverflow {
                value: count as i128,
                width: chars * 6,
            });
        }

        let values = text
            .chars()
            .map(|c| sixbit::text_value(c).ok_or(EncodeError::InvalidCharacter(c)))
            .collect::<Result<Vec<u8>, _>>()?;

        for value in values {
            self.push_bits(u64::from(value), 6);
        }
        for _ in count..chars {
            self.push_bits(0, 6);
        }

        Ok(())
    }

    /// Appends every bit of `sequence` as-is.
    pub fn append_sequence(&mut self, sequence: &BitSequence) -> Result<(), EncodeError> {
        if self.finalized {
            return Err(EncodeError::WriterFinalized);
        }

        self.push_sequence(sequence);
        Ok(())
    }

    /// Freezes the writer and armors its contents.
    ///
    /// The buffer is padded with zero bits up to a multiple of six; the pad count
    /// is returned as `fill_bits`. Calling this again returns the same payload.
    pub fn finalize(&mut self) -> ArmoredPayload {
        self.finalized = true;

        let len = self.bits.len();
        let fill_bits = (6 - len % 6) % 6;
        let mut text = String::with_capacity(len.div_ceil(6));

        for pos in (0..len).step_by(6) {
            // Positions past the end are the zero fill bits.
            let value = (pos..pos + 6).fold(0u8, |value, bit| {
                (value << 1) | u8::from(self.bits.bit(bit).unwrap_or(false))
            });
            text.push(sixbit::armor_char(value));
        }

        ArmoredPayload {
            text,
            fill_bits: fill_bits as u8,
        }
    }

    /// Returns the written bits without fill padding.
    pub fn into_bits(self) -> BitSequence {
        self.bits
    }

    pub fn bits(&self) -> &BitSequence {
        &self.bits
    }

    pub(crate) fn push_sequence(&mut self, sequence: &BitSequence) {
        for bit in sequence.iter() {
            self.bits.push(bit);
        }
    }

    fn check_open(&self, width: usize) -> Result<(), EncodeError> {
        if self.finalized {
            return Err(EncodeError::WriterFinalized);
        }
        if width == 0 || width > 64 {
            return Err(EncodeError::InvalidWidth(width));
        }
        Ok(())
    }

    fn push_bits(&mut self, value: u64, width: usize) {
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }
}
