//! HTTP surface of the Sortex fleet tracker.
//!
//! Exposes the mission ledger (create, list, complete, delete) and the
//! availability queries over a small axum router. Persistence lives in
//! `sortex-core`; this crate only translates HTTP to port calls.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_app;
pub use state::AppState;
