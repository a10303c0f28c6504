//! Core domain library for Paddock, a farm-management dashboard.
//!
//! Everything the dashboard pages manipulate lives here: the record types
//! (crops, staff, fields, vehicles, equipment, activity logs), a generic
//! in-memory [`Store`] they are kept in, the [`EditCursor`] that decides
//! whether a form submission creates or updates a record, and the validated
//! [`Form`] decode step that turns raw submitted text into typed records.
//! The rendering layer owns none of this logic and can be tested against it
//! in isolation.
//!
//! Record state is deliberately ephemeral. A store lives exactly as long as
//! the page that owns it; nothing is written to disk and nothing survives a
//! view switch.

pub mod account;
pub mod binder;
pub mod cursor;
pub mod entities;
pub mod form;
pub mod fs;
pub mod notice;
pub mod store;
pub mod view;

pub use account::{Account, Credentials};
pub use cursor::EditCursor;
pub use entities::{
    Address, Availability, Crop, Entity, EntityId, Equipment, EquipmentKind, Field, Gender,
    LogEntry, Staff, StaffRole, Vehicle,
};
pub use form::{DecodeError, Form, FromForm};
pub use notice::Notice;
pub use store::Store;
pub use view::View;
