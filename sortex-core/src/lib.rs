//! Mission ledger and availability core for the Sortex fleet tracker.
//!
//! This crate owns the persistence layer: the SQLite store, the repository
//! ports the server calls through, and the seed roster installed into an
//! empty database. HTTP concerns live in `sortex-server`; shared data types
//! live in `sortex-model`.

pub mod database;
pub mod error;
pub mod seed;

pub use database::{FleetUnitOfWork, connect};
pub use error::{FleetError, Result};

/// Embedded schema migrations, applied at startup and by the test harness.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
