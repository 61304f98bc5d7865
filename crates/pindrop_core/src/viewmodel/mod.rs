//! UI-state coordinators over the reminder data source.
//!
//! # Responsibility
//! - Hold the observable flags and one-shot signals a host UI renders.
//! - Orchestrate data-source calls without blocking the caller.
//!
//! # Invariants
//! - Each coordinator exclusively owns its state senders.
//! - Dependencies arrive through the constructor; there is no global
//!   registry handing out shared instances.

pub mod reminders_list;
pub mod save_reminder;
