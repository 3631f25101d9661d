use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle state of a mission.
///
/// The transition is one-way: a mission is `Active` from creation until it
/// is completed, and never returns to `Active`. Stored and serialized as
/// lowercase text (`"active"` / `"completed"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MissionStatus {
    Active,
    Completed,
}

/// One engineer as captured on a mission at creation time.
///
/// Snapshot schema: a JSON object holding at least an integer `id`; any
/// further fields (typically `name` and `branch`) are carried verbatim in
/// `details` and round-trip untouched. Only `id` is authoritative, since the
/// live engineers table may have changed since the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionEngineer {
    pub id: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl MissionEngineer {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            details: Map::new(),
        }
    }
}

/// Encode an engineer crew for storage in the `missions.engineers` column.
pub fn encode_snapshot(engineers: &[MissionEngineer]) -> serde_json::Result<String> {
    serde_json::to_string(engineers)
}

/// Decode a stored crew snapshot back into structured entries.
///
/// Callers decide what a failure means; the repositories treat an unreadable
/// snapshot as an empty contribution rather than an error.
pub fn decode_snapshot(raw: &str) -> serde_json::Result<Vec<MissionEngineer>> {
    serde_json::from_str(raw)
}

/// A mission as stored: one driver, one vehicle, an engineer crew, and a
/// caller-supplied time window.
///
/// `start_time`/`end_time` are opaque timestamp strings; the tracker never
/// parses or validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: i64,
    pub driver_id: i64,
    pub vehicle_id: i64,
    pub engineers: Vec<MissionEngineer>,
    pub start_time: String,
    pub end_time: String,
    pub status: MissionStatus,
}

/// A mission enriched with the joined driver name and vehicle plate, as
/// returned by the listing endpoint.
///
/// Serializes flat: the mission fields plus `driver_name` and `plate_number`
/// at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDetails {
    #[serde(flatten)]
    pub mission: Mission,
    pub driver_name: String,
    pub plate_number: String,
}

/// Input for creating a mission.
///
/// The referenced driver/vehicle ids are not checked for existence and the
/// crew may be empty; availability is advisory, so double-booking a resource
/// here is legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMission {
    pub driver_id: i64,
    pub vehicle_id: i64,
    #[serde(default)]
    pub engineers: Vec<MissionEngineer>,
    pub start_time: String,
    pub end_time: String,
}
