//! Core data model definitions shared across Sortex crates.

pub mod driver;
pub mod engineer;
pub mod mission;
pub mod vehicle;

pub use driver::Driver;
pub use engineer::Engineer;
pub use mission::{
    Mission, MissionDetails, MissionEngineer, MissionStatus, NewMission,
    decode_snapshot, encode_snapshot,
};
pub use vehicle::Vehicle;
