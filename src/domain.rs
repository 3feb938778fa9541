//! Domain models for requirement traceability.
//!
//! This module contains the core types: scanned records, ticket references,
//! and configuration.

/// Scanned requirement records.
pub mod record;
pub use record::{Record, Requirement};

mod config;
pub use config::Config;

/// Ticket references and canonical URL expansion.
pub mod ticket;
pub use ticket::Ticket;
