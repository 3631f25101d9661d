use axum::Json;
use axum::extract::State;

use sortex_model::{Driver, Engineer, Vehicle};

use crate::errors::AppResult;
use crate::state::AppState;

/// `GET /available-drivers`. Drivers not assigned to any active mission.
pub async fn available_drivers(State(state): State<AppState>) -> AppResult<Json<Vec<Driver>>> {
    let drivers = state.unit_of_work.availability.available_drivers().await?;
    Ok(Json(drivers))
}

/// `GET /available-vehicles`. Vehicles not assigned to any active mission.
pub async fn available_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = state.unit_of_work.availability.available_vehicles().await?;
    Ok(Json(vehicles))
}

/// `GET /available-engineers`. Engineers absent from every active mission's
/// crew snapshot.
pub async fn available_engineers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Engineer>>> {
    let engineers = state.unit_of_work.availability.available_engineers().await?;
    Ok(Json(engineers))
}
