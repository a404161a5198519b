//! CommBank Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for goals and the users that own
//! them. It is database-agnostic and defines the repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod goals;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
