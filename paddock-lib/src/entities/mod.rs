//! Domain entities for Paddock.
//!
//! These types represent the records managed by the dashboard pages: crops,
//! staff members, fields, vehicles, equipment, and activity logs. Each record
//! carries a locally generated [`EntityId`] and otherwise plain field data.
//! References between record kinds (`field_id`, `staff_id`) are free text
//! with no integrity checks; a record naming a field that was never created
//! is not an error.

use std::fmt::Debug;

use derive_more::Display;
use strum::{Display as EnumDisplay, EnumIter, EnumString};
use uuid::Uuid;

mod crop;
mod equipment;
mod field;
mod log_entry;
mod staff;
mod vehicle;

pub use crop::Crop;
pub use equipment::{Equipment, EquipmentKind};
pub use field::{Field, FieldImages, Location};
pub use log_entry::LogEntry;
pub use staff::{Address, Gender, Staff, StaffRole};
pub use vehicle::Vehicle;

/// Identifies one record within a store.
///
/// Ids are generated locally when a record is first created and reused
/// verbatim across edits. They make no claim to global uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Allocate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A record managed by a [`Store`](crate::store::Store).
pub trait Entity: Clone + Debug {
    fn id(&self) -> EntityId;
}

/// Whether a vehicle or piece of equipment can currently be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumDisplay, EnumIter, EnumString)]
#[strum(serialize_all = "title_case")]
pub enum Availability {
    Available,
    Unavailable,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(EntityId::generate(), EntityId::generate());
    }

    #[test]
    fn test_availability_round_trip() {
        let parsed: Availability = Availability::Available.to_string().parse().unwrap();

        assert_eq!(parsed, Availability::Available);
    }
}
