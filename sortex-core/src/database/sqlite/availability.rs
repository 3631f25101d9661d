use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use sortex_model::{Driver, Engineer, MissionStatus, Vehicle};

use crate::database::ports::availability::AvailabilityRepository;
use crate::database::sqlite::decode_snapshot_lenient;
use crate::error::{FleetError, Result};

/// SQLite implementation of the availability queries.
///
/// Drivers and vehicles are filtered with a `NOT IN` subquery over active
/// missions. Engineers are filtered in memory instead: their assignment
/// lives inside the JSON crew snapshots, so the active snapshots are decoded
/// and the committed ids subtracted from the roster.
#[derive(Debug, Clone)]
pub struct SqliteAvailabilityRepository {
    pool: SqlitePool,
}

impl SqliteAvailabilityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Engineer ids claimed by at least one active mission.
    async fn committed_engineer_ids(&self) -> Result<HashSet<i64>> {
        let rows = sqlx::query("SELECT id, engineers FROM missions WHERE status = ?1")
            .bind(MissionStatus::Active)
            .fetch_all(self.pool())
            .await
            .map_err(|e| FleetError::Internal(format!("Failed to load active crews: {e}")))?;

        let mut committed = HashSet::new();
        for row in &rows {
            let mission_id: i64 = row
                .try_get("id")
                .map_err(|e| FleetError::Internal(format!("Failed to read mission id: {e}")))?;
            let snapshot: String = row.try_get("engineers").map_err(|e| {
                FleetError::Internal(format!("Failed to read engineer snapshot: {e}"))
            })?;
            for engineer in decode_snapshot_lenient(mission_id, &snapshot) {
                committed.insert(engineer.id);
            }
        }

        Ok(committed)
    }
}

#[async_trait]
impl AvailabilityRepository for SqliteAvailabilityRepository {
    async fn available_drivers(&self) -> Result<Vec<Driver>> {
        sqlx::query_as::<_, Driver>(
            r#"
            SELECT id, name
            FROM drivers
            WHERE id NOT IN (SELECT driver_id FROM missions WHERE status = ?1)
            "#,
        )
        .bind(MissionStatus::Active)
        .fetch_all(self.pool())
        .await
        .map_err(|e| FleetError::Internal(format!("Failed to load available drivers: {e}")))
    }

    async fn available_vehicles(&self) -> Result<Vec<Vehicle>> {
        sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, plate
            FROM vehicles
            WHERE id NOT IN (SELECT vehicle_id FROM missions WHERE status = ?1)
            "#,
        )
        .bind(MissionStatus::Active)
        .fetch_all(self.pool())
        .await
        .map_err(|e| FleetError::Internal(format!("Failed to load available vehicles: {e}")))
    }

    async fn available_engineers(&self) -> Result<Vec<Engineer>> {
        let roster = sqlx::query_as::<_, Engineer>("SELECT id, name, branch FROM engineers")
            .fetch_all(self.pool())
            .await
            .map_err(|e| FleetError::Internal(format!("Failed to load engineers: {e}")))?;

        let committed = self.committed_engineer_ids().await?;

        Ok(roster
            .into_iter()
            .filter(|engineer| !committed.contains(&engineer.id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ports::missions::MissionsRepository;
    use crate::database::sqlite::missions::SqliteMissionsRepository;
    use sortex_model::{MissionEngineer, NewMission};

    async fn insert_driver(pool: &SqlitePool, name: &str) -> i64 {
        sqlx::query("INSERT INTO drivers (name) VALUES (?1)")
            .bind(name)
            .execute(pool)
            .await
            .expect("insert driver")
            .last_insert_rowid()
    }

    async fn insert_vehicle(pool: &SqlitePool, plate: &str) -> i64 {
        sqlx::query("INSERT INTO vehicles (plate) VALUES (?1)")
            .bind(plate)
            .execute(pool)
            .await
            .expect("insert vehicle")
            .last_insert_rowid()
    }

    async fn insert_engineer(pool: &SqlitePool, name: &str, branch: &str) -> i64 {
        sqlx::query("INSERT INTO engineers (name, branch) VALUES (?1, ?2)")
            .bind(name)
            .bind(branch)
            .execute(pool)
            .await
            .expect("insert engineer")
            .last_insert_rowid()
    }

    fn new_mission(driver_id: i64, vehicle_id: i64, engineers: Vec<MissionEngineer>) -> NewMission {
        NewMission {
            driver_id,
            vehicle_id,
            engineers,
            start_time: "2024-03-01T08:00:00Z".to_string(),
            end_time: "2024-03-01T17:00:00Z".to_string(),
        }
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn active_missions_pin_drivers_and_vehicles(pool: SqlitePool) {
        let missions = SqliteMissionsRepository::new(pool.clone());
        let availability = SqliteAvailabilityRepository::new(pool.clone());

        let busy_driver = insert_driver(&pool, "Ahmet Demir").await;
        let free_driver = insert_driver(&pool, "Ayşe Kaya").await;
        let only_vehicle = insert_vehicle(&pool, "06 XYZ 42").await;

        let id = missions
            .create(new_mission(busy_driver, only_vehicle, Vec::new()))
            .await
            .expect("create mission");

        let drivers = availability.available_drivers().await.expect("drivers");
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].id, free_driver);
        assert!(
            availability
                .available_vehicles()
                .await
                .expect("vehicles")
                .is_empty()
        );

        missions.complete(id).await.expect("complete mission");

        assert_eq!(availability.available_drivers().await.expect("drivers").len(), 2);
        let vehicles = availability.available_vehicles().await.expect("vehicles");
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].id, only_vehicle);
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn engineers_in_active_snapshots_are_unavailable(pool: SqlitePool) {
        let missions = SqliteMissionsRepository::new(pool.clone());
        let availability = SqliteAvailabilityRepository::new(pool.clone());

        let driver = insert_driver(&pool, "Mehmet Şahin").await;
        let vehicle = insert_vehicle(&pool, "35 DEF 77").await;
        let first = insert_engineer(&pool, "Ali Yıldız", "Çevre").await;
        let second = insert_engineer(&pool, "Zeynep Acar", "İnşaat").await;
        let third = insert_engineer(&pool, "Murat Koç", "Elektrik").await;

        let id = missions
            .create(new_mission(
                driver,
                vehicle,
                vec![MissionEngineer::new(first), MissionEngineer::new(third)],
            ))
            .await
            .expect("create mission");

        let free = availability.available_engineers().await.expect("engineers");
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].id, second);

        missions.complete(id).await.expect("complete mission");
        assert_eq!(availability.available_engineers().await.expect("engineers").len(), 3);
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn unreadable_snapshot_commits_no_engineers(pool: SqlitePool) {
        let missions = SqliteMissionsRepository::new(pool.clone());
        let availability = SqliteAvailabilityRepository::new(pool.clone());

        let driver = insert_driver(&pool, "Hasan Çelik").await;
        let vehicle = insert_vehicle(&pool, "01 GHJ 101").await;
        let claimed = insert_engineer(&pool, "Ali Yıldız", "Çevre").await;
        let untouched = insert_engineer(&pool, "Murat Koç", "Elektrik").await;

        let corrupted = missions
            .create(new_mission(driver, vehicle, Vec::new()))
            .await
            .expect("create corrupted mission");
        sqlx::query("UPDATE missions SET engineers = ?1 WHERE id = ?2")
            .bind("{\"oops\"")
            .bind(corrupted)
            .execute(&pool)
            .await
            .expect("corrupt snapshot");

        missions
            .create(new_mission(driver, vehicle, vec![MissionEngineer::new(claimed)]))
            .await
            .expect("create healthy mission");

        let free = availability.available_engineers().await.expect("engineers");
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].id, untouched);
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn dangling_driver_reference_still_pins_the_vehicle(pool: SqlitePool) {
        let missions = SqliteMissionsRepository::new(pool.clone());
        let availability = SqliteAvailabilityRepository::new(pool.clone());

        let vehicle = insert_vehicle(&pool, "42 KLM 99").await;

        // Driver id 500 does not exist; the mission still claims the vehicle.
        missions
            .create(new_mission(500, vehicle, Vec::new()))
            .await
            .expect("create mission");

        assert!(missions.list().await.expect("list").is_empty());
        assert!(
            availability
                .available_vehicles()
                .await
                .expect("vehicles")
                .is_empty()
        );
    }
}
