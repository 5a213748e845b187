//! # aiscraft
//!
//! Bit-level decoding and encoding of AIS (ITU-R M.1371) message payloads.
//!
//! A payload arrives as six-bit armored text plus a fill bit count. It is
//! dearmored into a [`bits::BitSequence`], read field by field with a
//! [`bit_cursor::BitCursor`] according to the layout of its message type, and
//! can be written back with a [`bit_writer::BitWriter`] to the identical text.
//! Sentence framing, checksums and multi-sentence reassembly are left to the
//! transport layer.
//!
//! ## Example
//!
//! ```
//! use aiscraft::Message;
//!
//! let message = Message::decode_armored("B52K>;h00Fc>jpUlNV@ikwpUoP06", 0).unwrap();
//! assert_eq!(message.message_id(), 18);
//! assert_eq!(message.mmsi(), 338_087_471);
//!
//! let position = message.position().unwrap();
//! assert!(position.is_available());
//! assert!((position.longitude() - -74.072_131_666).abs() < 1e-6);
//!
//! let armored = message.to_armored().unwrap();
//! assert_eq!(armored.text, "B52K>;h00Fc>jpUlNV@ikwpUoP06");
//! assert_eq!(armored.fill_bits, 0);
//! ```
//!
//! Fixed fields can also be read straight from the layout tables without
//! building a typed message:
//!
//! ```
//! use aiscraft::{bits::BitSequence, field::Value, layout::Layout};
//!
//! let bits = BitSequence::from_armored("B52K>;h00Fc>jpUlNV@ikwpUoP06", 0).unwrap();
//! let layout = Layout::for_message_id(18).unwrap();
//! let fields = layout.read_fields(&bits).unwrap();
//! assert_eq!(fields[2], ("mmsi", Value::U64(338_087_471)));
//! ```

pub mod bit_cursor;
pub mod bit_writer;
pub mod bits;
pub mod errors;
pub mod field;
pub mod header;
pub mod layout;
pub mod message;
pub mod messages;
pub mod navigation;
pub mod position;
pub mod sixbit;

pub use bit_cursor::BitCursor;
pub use bit_writer::{ArmoredPayload, BitWriter};
pub use bits::BitSequence;
pub use errors::{DecodeError, EncodeError};
pub use header::Header;
pub use layout::{Layout, PayloadLength};
pub use message::Message;
pub use position::{Position, Precision};
