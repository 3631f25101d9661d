use async_trait::async_trait;

use sortex_model::{MissionDetails, NewMission};

use crate::error::Result;

/// Persistence port for the mission ledger.
#[async_trait]
pub trait MissionsRepository: Send + Sync {
    /// Insert a mission with status `active` and return its id.
    ///
    /// The engineer list is serialized into the row as a JSON snapshot;
    /// whatever extra fields the caller sent come back unchanged on reads.
    async fn create(&self, mission: NewMission) -> Result<i64>;

    /// Every mission, newest first, joined with the driver name and vehicle
    /// plate. Missions whose driver or vehicle no longer exists are absent
    /// from the result.
    async fn list(&self) -> Result<Vec<MissionDetails>>;

    /// Mark a mission completed. Returns the number of rows touched; an
    /// unknown id matches zero rows and is not an error.
    async fn complete(&self, id: i64) -> Result<u64>;

    /// Remove a mission outright. Returns the number of rows touched; an
    /// unknown id matches zero rows and is not an error.
    async fn delete(&self, id: i64) -> Result<u64>;
}
