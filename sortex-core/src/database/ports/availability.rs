use async_trait::async_trait;

use sortex_model::{Driver, Engineer, Vehicle};

use crate::error::Result;

/// Read-only port answering "who is free right now".
///
/// A resource is unavailable while any `active` mission claims it; completed
/// and deleted missions release their resources immediately.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Drivers not assigned to any active mission.
    async fn available_drivers(&self) -> Result<Vec<Driver>>;

    /// Vehicles not assigned to any active mission.
    async fn available_vehicles(&self) -> Result<Vec<Vehicle>>;

    /// Engineers whose id appears in no active mission's crew snapshot.
    async fn available_engineers(&self) -> Result<Vec<Engineer>>;
}
