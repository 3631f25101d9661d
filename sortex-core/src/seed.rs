//! Default roster installed into an empty store.
//!
//! A fresh deployment has nothing to dispatch, so startup seeds a small
//! fleet. The gate checks the drivers table alone: a store with drivers is
//! considered populated, whatever the other rosters hold.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{FleetError, Result};

const DRIVERS: [&str; 10] = [
    "Ahmet Demir",
    "Mehmet Yıldız",
    "Mustafa Kara",
    "Zeynep Yılmaz",
    "Ali Şahin",
    "Hasan Aydın",
    "Emre Çelik",
    "Murat Koç",
    "Fatma Arslan",
    "Ramazan Güneş",
];

const VEHICLES: [&str; 12] = [
    "06 ABC 123",
    "34 XYZ 987",
    "06 KTR 529",
    "34 YDZ 218",
    "35 HLM 803",
    "01 BKC 740",
    "16 NAR 651",
    "42 RMT 374",
    "07 ZPL 986",
    "21 DKN 123",
    "55 EYT 430",
    "61 VSK 209",
];

const ENGINEERS: [(&str, &str); 6] = [
    ("Ali Yıldız", "Çevre"),
    ("Mehmet Koç", "İnşaat"),
    ("Ayşe Güneş", "Ziraat"),
    ("Abdullah Turgut", "Elektrik-Elektronik"),
    ("Serkan Aydınlı", "Maden"),
    ("Hasan Demir", "Bilgisayar"),
];

/// Populate an empty store with the default fleet roster. Does nothing when
/// any driver already exists.
pub async fn seed_default_fleet(pool: &SqlitePool) -> Result<()> {
    let drivers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM drivers")
        .fetch_one(pool)
        .await
        .map_err(|e| FleetError::Internal(format!("Failed to count drivers: {e}")))?;

    if drivers > 0 {
        return Ok(());
    }

    info!("empty store detected, seeding the default fleet roster");

    for name in DRIVERS {
        sqlx::query("INSERT INTO drivers (name) VALUES (?1)")
            .bind(name)
            .execute(pool)
            .await
            .map_err(|e| FleetError::Internal(format!("Failed to seed drivers: {e}")))?;
    }

    for plate in VEHICLES {
        sqlx::query("INSERT INTO vehicles (plate) VALUES (?1)")
            .bind(plate)
            .execute(pool)
            .await
            .map_err(|e| FleetError::Internal(format!("Failed to seed vehicles: {e}")))?;
    }

    for (name, branch) in ENGINEERS {
        sqlx::query("INSERT INTO engineers (name, branch) VALUES (?1, ?2)")
            .bind(name)
            .bind(branch)
            .execute(pool)
            .await
            .map_err(|e| FleetError::Internal(format!("Failed to seed engineers: {e}")))?;
    }

    info!(
        drivers = DRIVERS.len(),
        vehicles = VEHICLES.len(),
        engineers = ENGINEERS.len(),
        "fleet roster seeded"
    );

    Ok(())
}
