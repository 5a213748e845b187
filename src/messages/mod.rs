//! Typed message bodies, one module per message family.
//!
//! Every body holds the [`Header`] it was decoded with plus the fields that
//! follow it. A body only knows how to read and write the bits after the header;
//! the header itself and the length checks belong to [`crate::Message`].

use crate::{
    bit_cursor::BitCursor,
    bit_writer::BitWriter,
    errors::{DecodeError, EncodeError},
    header::Header,
};

pub mod acknowledge;
pub mod aid_to_navigation;
pub mod assigned_mode;
pub mod base_station;
pub mod binary;
pub mod channel_management;
pub mod class_b;
pub mod data_link;
pub mod dgnss;
pub mod group_assignment;
pub mod interrogation;
pub mod long_range;
pub mod position_report;
pub mod safety;
pub mod sar_aircraft;
pub mod static_data;
pub mod static_voyage;
pub mod utc_inquiry;

pub use acknowledge::Acknowledge;
pub use aid_to_navigation::AidToNavigationReport;
pub use assigned_mode::{AssignedModeCommand, SlotAssignment};
pub use base_station::BaseStationReport;
pub use binary::{
    AddressedBinary, ApplicationId, BinaryBroadcast, MultiSlotBinary, SingleSlotBinary,
    SlotBinaryAddressing,
};
pub use channel_management::{ChannelManagement, ChannelManagementTarget};
pub use class_b::{ClassBPositionReport, ExtendedClassBPositionReport};
pub use data_link::{DataLinkManagement, SlotReservation};
pub use dgnss::DgnssBroadcast;
pub use group_assignment::GroupAssignmentCommand;
pub use interrogation::{Interrogation, InterrogationRequest};
pub use long_range::LongRangeBroadcast;
pub use position_report::PositionReport;
pub use safety::{AddressedSafety, SafetyBroadcast};
pub use sar_aircraft::SarAircraftPosition;
pub use static_data::{StaticDataPart, StaticDataReport};
pub use static_voyage::StaticVoyageData;
pub use utc_inquiry::UtcInquiry;

/// Decode/encode pair for the part of a message after the common header.
pub(crate) trait Body: Sized {
    /// Reads the body; the cursor sits right after the header and the payload
    /// length has already been checked against the layout.
    fn decode_body(header: Header, cursor: &mut BitCursor<'_>) -> Result<Self, DecodeError>;

    /// Writes the body in the same order `decode_body` reads it.
    fn encode_body(&self, writer: &mut BitWriter) -> Result<(), EncodeError>;
}

/// Communication state flavour announced by the selector bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommStateKind {
    Sotdma,
    Itdma,
}

impl CommStateKind {
    pub fn from_selector(selector: bool) -> Self {
        if selector {
            CommStateKind::Itdma
        } else {
            CommStateKind::Sotdma
        }
    }
}
