//! Request handlers, grouped by resource.

pub mod availability;
pub mod missions;
pub mod status;
