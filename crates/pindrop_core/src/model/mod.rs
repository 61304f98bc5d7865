//! Domain records for location-bound reminders.
//!
//! # Invariants
//! - Every record is identified by a stable `ReminderId`.
//! - Records are replaced whole on save; there is no partial mutation.

pub mod reminder;
