//! Forward-only bit cursor over a [`BitSequence`].

use crate::{
    bits::{BitSequence, sign_extend},
    errors::DecodeError,
    sixbit,
};

/// Reads fixed-width fields MSB-first from a borrowed bit sequence.
///
/// The position only advances. A caller that needs lookahead clones the cursor.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a BitSequence,
    bit_pos: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(data: &'a BitSequence) -> Self {
        Self { data, bit_pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.bit_pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.bit_pos
    }

    /// Extracts `width` bits (1..=64) as an unsigned integer.
    pub fn read_unsigned(&mut self, width: usize) -> Result<u64, DecodeError> {
        let value = self.data.read_bits_at(self.bit_pos, width)?;
        self.bit_pos += width;
        Ok(value)
    }

    /// Extracts `width` bits (1..=64) as a two's-complement integer.
    pub fn read_signed(&mut self, width: usize) -> Result<i64, DecodeError> {
        let value = self.read_unsigned(width)?;
        Ok(sign_extend(value, width))
    }

    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        Ok(self.read_unsigned(1)? == 1)
    }

    pub fn read_u8(&mut self, width: usize) -> Result<u8, DecodeError> {
        debug_assert!(width <= 8);
        Ok(self.read_unsigned(width)? as u8)
    }

    pub fn read_u16(&mut self, width: usize) -> Result<u16, DecodeError> {
        debug_assert!(width <= 16);
        Ok(self.read_unsigned(width)? as u16)
    }

    pub fn read_u32(&mut self, width: usize) -> Result<u32, DecodeError> {
        debug_assert!(width <= 32);
        Ok(self.read_unsigned(width)? as u32)
    }

    pub fn read_i32(&mut self, width: usize) -> Result<i32, DecodeError> {
        debug_assert!(width <= 32);
        Ok(self.read_signed(width)? as i32)
    }

    /// Extracts `chars` six-bit text characters, keeping `@` padding.
    pub fn read_text(&mut self, chars: usize) -> Result<String, DecodeError> {
        self.ensure(chars * 6)?;
        let mut text = String::with_capacity(chars);
        for _ in 0..chars {
            text.push(sixbit::text_char(self.read_u8(6)?));
        }
        Ok(text)
    }

    /// Extracts the next `len` bits as an opaque sequence.
    pub fn read_sequence(&mut self, len: usize) -> Result<BitSequence, DecodeError> {
        self.ensure(len)?;
        let sequence = (self.bit_pos..self.bit_pos + len)
            .filter_map(|pos| self.data.bit(pos))
            .collect();
        self.bit_pos += len;
        Ok(sequence)
    }

    /// Extracts everything that is left.
    pub fn read_remaining(&mut self) -> Result<BitSequence, DecodeError> {
        self.read_sequence(self.remaining())
    }

    fn ensure(&self, needed: usize) -> Result<(), DecodeError> {
        if needed > self.remaining() {
            return Err(DecodeError::TruncatedPayload {
                position: self.bit_pos,
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }
}
