//! SQLite-backed persistence for the fleet tracker.

pub mod ports;
pub mod sqlite;

use std::any::type_name_of_val;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::database::ports::availability::AvailabilityRepository;
use crate::database::ports::missions::MissionsRepository;
use crate::database::sqlite::availability::SqliteAvailabilityRepository;
use crate::database::sqlite::missions::SqliteMissionsRepository;
use crate::error::{FleetError, Result};

/// Open the single-file mission store, creating the file if it is missing.
pub async fn connect(path: &Path) -> Result<SqlitePool> {
    info!(path = %path.display(), "opening mission store");

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| FleetError::Internal(format!("Failed to open mission store: {e}")))
}

/// Aggregates the repository ports behind shared handles so the server can
/// carry one value in its state.
#[derive(Clone)]
pub struct FleetUnitOfWork {
    pub missions: Arc<dyn MissionsRepository>,
    pub availability: Arc<dyn AvailabilityRepository>,
}

impl FleetUnitOfWork {
    /// Wire both ports to their SQLite implementations over one pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            missions: Arc::new(SqliteMissionsRepository::new(pool.clone())),
            availability: Arc::new(SqliteAvailabilityRepository::new(pool)),
        }
    }
}

impl fmt::Debug for FleetUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FleetUnitOfWork")
            .field("missions", &type_name_of_val(self.missions.as_ref()))
            .field("availability", &type_name_of_val(self.availability.as_ref()))
            .finish()
    }
}
