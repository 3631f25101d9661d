use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::error;

use crate::state::AppState;

/// `GET /ping`. Process liveness, no dependencies touched.
pub async fn ping() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Sortex fleet tracker is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /health`. Readiness: verifies the mission store answers a real
/// query, reporting 503 when it does not.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.unit_of_work.availability.available_drivers().await {
        Ok(drivers) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "version": env!("CARGO_PKG_VERSION"),
                "checks": {
                    "database": {
                        "status": "healthy",
                        "available_drivers": drivers.len(),
                    }
                }
            })),
        ),
        Err(err) => {
            error!(error = %err, "health check failed to query the mission store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                    "version": env!("CARGO_PKG_VERSION"),
                    "checks": {
                        "database": {
                            "status": "unhealthy",
                            "error": err.to_string(),
                        }
                    }
                })),
            )
        }
    }
}
