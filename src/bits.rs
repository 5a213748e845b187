//! Packed bit sequences and low-level bit helpers.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first byte.

use crate::{
    bit_writer::{ArmoredPayload, BitWriter},
    errors::DecodeError,
    sixbit,
};

/// An immutable sequence of bits with an explicit length.
///
/// Storage is packed MSB-first; bits past `len` in the last byte are always zero,
/// so two sequences compare equal exactly when their bits do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBitSequence"))]
pub struct BitSequence {
    bytes: Vec<u8>,
    len: usize,
}

/// Unchecked wire form; goes through [`BitSequence::from_bytes`] on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBitSequence {
    bytes: Vec<u8>,
    len: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBitSequence> for BitSequence {
    type Error = DecodeError;

    fn try_from(raw: RawBitSequence) -> Result<Self, Self::Error> {
        Self::from_bytes(&raw.bytes, raw.len)
    }
}

impl BitSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the first `len` bits of `bytes`. Fails if `bytes` holds fewer bits.
    pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Self, DecodeError> {
        if len > bytes.len() * 8 {
            return Err(DecodeError::TruncatedPayload {
                position: 0,
                needed: len,
                remaining: bytes.len() * 8,
            });
        }

        let mut bytes = bytes[..len.div_ceil(8)].to_vec();
        if len % 8 != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xffu8 << (8 - len % 8);
            }
        }

        Ok(Self { bytes, len })
    }

    /// Builds a sequence from individual bits, first bit first.
    pub fn from_bits<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        let mut sequence = Self::new();
        for bit in bits {
            sequence.push(bit);
        }
        sequence
    }

    /// Dearmors a six-bit wire payload, dropping `fill_bits` padding bits from the end.
    pub fn from_armored(text: &str, fill_bits: u8) -> Result<Self, DecodeError> {
        if fill_bits > 5 {
            return Err(DecodeError::InvalidFillBits(fill_bits));
        }

        let mut sequence = Self::with_capacity(text.len() * 6);
        for (offset, character) in text.chars().enumerate() {
            let value = sixbit::dearmor_char(character)
                .ok_or(DecodeError::InvalidArmor { character, offset })?;
            for shift in (0..6).rev() {
                sequence.push((value >> shift) & 1 == 1);
            }
        }

        let fill = usize::from(fill_bits);
        if fill > sequence.len {
            return Err(DecodeError::InvalidFillBits(fill_bits));
        }
        sequence.truncate(sequence.len - fill);

        Ok(sequence)
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed bytes, MSB-first; the last byte is zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the bit at `pos`, or `None` past the end.
    pub fn bit(&self, pos: usize) -> Option<bool> {
        (pos < self.len).then(|| (self.bytes[pos / 8] >> (7 - pos % 8)) & 1 == 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|pos| (self.bytes[pos / 8] >> (7 - pos % 8)) & 1 == 1)
    }

    /// Armors the sequence into six-bit wire text plus fill bit count.
    pub fn to_armored(&self) -> ArmoredPayload {
        let mut writer = BitWriter::with_capacity(self.len);
        writer.push_sequence(self);
        writer.finalize()
    }

    /// Reads `n` bits starting at `pos` as an unsigned value (1..=64 bits). MSB-first.
    pub fn read_bits_at(&self, pos: usize, n: usize) -> Result<u64, DecodeError> {
        if n == 0 || n > 64 {
            return Err(DecodeError::InvalidWidth(n));
        }

        if pos.checked_add(n).is_none_or(|end| end > self.len) {
            return Err(DecodeError::TruncatedPayload {
                position: pos,
                needed: n,
                remaining: self.len.saturating_sub(pos),
            });
        }

        let mut value = 0u64;
        for offset in pos..pos + n {
            let bit = (self.bytes[offset / 8] >> (7 - offset % 8)) & 1;
            value = (value << 1) | u64::from(bit);
        }

        Ok(value)
    }

    pub(crate) fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - self.len % 8);
        }
        self.len += 1;
    }

    fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        self.bytes.truncate(len.div_ceil(8));
        if len % 8 != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= 0xffu8 << (8 - len % 8);
            }
        }
        self.len = len;
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bits(iter)
    }
}

/// Sign-extends the low `bits` of `value` to a full `i64`.
pub fn sign_extend(value: u64, bits: usize) -> i64 {
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}
