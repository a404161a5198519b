//! SQLite storage implementation for the CommBank goals service.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `commbank-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users and goals
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! ```text
//!   core (domain, traits)
//!            │
//!            ▼
//!   storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod goals;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, ping, run_migrations, DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from commbank-core for convenience
pub use commbank_core::errors::{DatabaseError, Error, Result};
