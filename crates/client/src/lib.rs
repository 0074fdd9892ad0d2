//! # Carelink Client
//!
//! HTTP data layer for the Carelink wellness service.
//!
//! Handles:
//! - Bearer-token session state and optional on-disk persistence
//! - Request decoration with the `Authorization` header
//! - The `signin` and `appointments` endpoints, translated to domain types
//!
//! Pure domain logic (models, formatting, view state) lives in
//! `carelink-core`.

#![warn(rust_2018_idioms)]

pub mod appointments;
pub mod auth;
pub mod http;
pub mod token;

pub use appointments::AppointmentsApi;
pub use auth::AuthGate;
pub use http::ApiClient;
pub use token::{TokenCell, TokenStore};
