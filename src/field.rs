//! Field descriptors used by message layout tables.

/// One fixed-width field in a layout: name, width in bits, signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSpec {
    /// Name used in the field dump.
    pub name: &'static str,
    pub width: usize,
    /// If true, the value is two's-complement and sign-extended on read.
    pub signed: bool,
}

impl FieldSpec {
    pub const fn unsigned(name: &'static str, width: usize) -> Self {
        FieldSpec {
            name,
            width,
            signed: false,
        }
    }

    pub const fn signed(name: &'static str, width: usize) -> Self {
        FieldSpec {
            name,
            width,
            signed: true,
        }
    }
}

/// A raw value read through a [`FieldSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    I64(i64),
    U64(u64),
}

impl Value {
    pub fn as_i64(self) -> i64 {
        match self {
            Value::I64(value) => value,
            Value::U64(value) => value as i64,
        }
    }
}

/// The common header every message starts with.
pub const HEADER_FIELDS: [FieldSpec; 3] = [
    FieldSpec::unsigned("message_id", 6),
    FieldSpec::unsigned("repeat_indicator", 2),
    FieldSpec::unsigned("mmsi", 30),
];
