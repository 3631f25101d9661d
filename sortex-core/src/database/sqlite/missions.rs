use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use sortex_model::{Mission, MissionDetails, MissionStatus, NewMission, encode_snapshot};

use crate::database::ports::missions::MissionsRepository;
use crate::database::sqlite::decode_snapshot_lenient;
use crate::error::{FleetError, Result};

/// SQLite implementation of the mission ledger.
#[derive(Debug, Clone)]
pub struct SqliteMissionsRepository {
    pool: SqlitePool,
}

impl SqliteMissionsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn map_row(row: &SqliteRow) -> Result<MissionDetails> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| FleetError::Internal(format!("Failed to read mission id: {e}")))?;
        let driver_id: i64 = row
            .try_get("driver_id")
            .map_err(|e| FleetError::Internal(format!("Failed to read driver id: {e}")))?;
        let vehicle_id: i64 = row
            .try_get("vehicle_id")
            .map_err(|e| FleetError::Internal(format!("Failed to read vehicle id: {e}")))?;
        let snapshot: String = row
            .try_get("engineers")
            .map_err(|e| FleetError::Internal(format!("Failed to read engineer snapshot: {e}")))?;
        let start_time: String = row
            .try_get("start_time")
            .map_err(|e| FleetError::Internal(format!("Failed to read start time: {e}")))?;
        let end_time: String = row
            .try_get("end_time")
            .map_err(|e| FleetError::Internal(format!("Failed to read end time: {e}")))?;
        let status: MissionStatus = row
            .try_get("status")
            .map_err(|e| FleetError::Internal(format!("Failed to read mission status: {e}")))?;
        let driver_name: String = row
            .try_get("driver_name")
            .map_err(|e| FleetError::Internal(format!("Failed to read driver name: {e}")))?;
        let plate_number: String = row
            .try_get("plate_number")
            .map_err(|e| FleetError::Internal(format!("Failed to read vehicle plate: {e}")))?;

        Ok(MissionDetails {
            mission: Mission {
                id,
                driver_id,
                vehicle_id,
                engineers: decode_snapshot_lenient(id, &snapshot),
                start_time,
                end_time,
                status,
            },
            driver_name,
            plate_number,
        })
    }
}

#[async_trait]
impl MissionsRepository for SqliteMissionsRepository {
    async fn create(&self, mission: NewMission) -> Result<i64> {
        let snapshot = encode_snapshot(&mission.engineers)?;

        let result = sqlx::query(
            r#"
            INSERT INTO missions (driver_id, vehicle_id, engineers, start_time, end_time, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(mission.driver_id)
        .bind(mission.vehicle_id)
        .bind(snapshot)
        .bind(&mission.start_time)
        .bind(&mission.end_time)
        .bind(MissionStatus::Active)
        .execute(self.pool())
        .await
        .map_err(|e| FleetError::Internal(format!("Failed to insert mission: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> Result<Vec<MissionDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT
                missions.id,
                missions.driver_id,
                missions.vehicle_id,
                missions.engineers,
                missions.start_time,
                missions.end_time,
                missions.status,
                drivers.name AS driver_name,
                vehicles.plate AS plate_number
            FROM missions
            JOIN drivers ON drivers.id = missions.driver_id
            JOIN vehicles ON vehicles.id = missions.vehicle_id
            ORDER BY missions.id DESC
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| FleetError::Internal(format!("Failed to list missions: {e}")))?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn complete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("UPDATE missions SET status = ?1 WHERE id = ?2")
            .bind(MissionStatus::Completed)
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| FleetError::Internal(format!("Failed to complete mission {id}: {e}")))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM missions WHERE id = ?1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| FleetError::Internal(format!("Failed to delete mission {id}: {e}")))?;

        Ok(result.rows_affected())
    }
}
