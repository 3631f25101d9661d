//! Shared helpers for the HTTP tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::SqlitePool;

use sortex_core::FleetUnitOfWork;
use sortex_server::config::{Config, CorsConfig, DatabaseConfig, ServerConfig};
use sortex_server::{AppState, create_app};

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        // The pool is injected directly, so this path is never opened.
        database: DatabaseConfig {
            path: "sortex-test.db".into(),
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        env_file_loaded: false,
    }
}

/// Full router over the given pool, served in-process.
pub fn spawn_app(pool: SqlitePool) -> TestServer {
    let state = AppState::new(
        Arc::new(FleetUnitOfWork::from_pool(pool)),
        Arc::new(test_config()),
    );
    TestServer::new(create_app(state)).expect("failed to start test server")
}

pub async fn insert_driver(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO drivers (name) VALUES (?1)")
        .bind(name)
        .execute(pool)
        .await
        .expect("insert driver")
        .last_insert_rowid()
}

pub async fn insert_vehicle(pool: &SqlitePool, plate: &str) -> i64 {
    sqlx::query("INSERT INTO vehicles (plate) VALUES (?1)")
        .bind(plate)
        .execute(pool)
        .await
        .expect("insert vehicle")
        .last_insert_rowid()
}

pub async fn insert_engineer(pool: &SqlitePool, name: &str, branch: &str) -> i64 {
    sqlx::query("INSERT INTO engineers (name, branch) VALUES (?1, ?2)")
        .bind(name)
        .bind(branch)
        .execute(pool)
        .await
        .expect("insert engineer")
        .last_insert_rowid()
}

/// Request body for `POST /missions` with fixed times.
pub fn mission_body(driver_id: i64, vehicle_id: i64, engineers: Value) -> Value {
    json!({
        "driver_id": driver_id,
        "vehicle_id": vehicle_id,
        "engineers": engineers,
        "start_time": "2024-03-01T08:00:00Z",
        "end_time": "2024-03-01T17:00:00Z",
    })
}
