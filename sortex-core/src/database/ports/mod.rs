//! Repository ports. The server depends on these traits; the concrete
//! SQLite implementations live in [`crate::database::sqlite`].

pub mod availability;
pub mod missions;
