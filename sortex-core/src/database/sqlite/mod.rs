//! SQLite implementations of the repository ports.

pub mod availability;
pub mod missions;

use sortex_model::{MissionEngineer, decode_snapshot};
use tracing::warn;

/// Decode a stored crew snapshot, treating unreadable JSON as an empty crew.
///
/// Snapshots are written by [`sortex_model::encode_snapshot`] and should
/// always parse, but rows patched by hand or written by older builds must
/// not take down reads that merely pass over them.
pub(crate) fn decode_snapshot_lenient(mission_id: i64, raw: &str) -> Vec<MissionEngineer> {
    match decode_snapshot(raw) {
        Ok(engineers) => engineers,
        Err(err) => {
            warn!(mission_id, error = %err, "skipping unreadable engineer snapshot");
            Vec::new()
        }
    }
}
