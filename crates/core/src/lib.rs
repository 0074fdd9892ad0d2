//! # Carelink Core
//!
//! Core domain logic for the Carelink wellness appointments client.
//!
//! This crate contains pure data types and transformations:
//! - The appointment domain model and its status classification
//! - The client failure taxonomy and user-facing message translation
//! - Display formatting (cards) and per-screen view-state reducers
//! - Runtime configuration resolved once at startup
//!
//! **No network concerns**: HTTP, the session token, and endpoint wiring
//! belong in `carelink-client`.

pub mod appointment;
pub mod config;
pub mod error;
pub mod screens;
pub mod view;

pub use appointment::{Appointment, AppointmentStatus};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use screens::{AppointmentsScreen, LoginScreen};
pub use view::{cards_for_status, AppointmentCard};
