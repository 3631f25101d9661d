use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use tracing::{debug, info};

use sortex_model::{MissionDetails, NewMission};

use crate::errors::AppResult;
use crate::state::AppState;

/// Body returned by mission creation.
#[derive(Debug, Serialize)]
pub struct MissionCreated {
    pub id: i64,
}

/// Body returned by the complete and delete operations.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// `POST /missions`. The new mission starts `active` and immediately claims
/// its driver, vehicle, and crew.
pub async fn create_mission(
    State(state): State<AppState>,
    Json(request): Json<NewMission>,
) -> AppResult<(StatusCode, Json<MissionCreated>)> {
    let id = state.unit_of_work.missions.create(request).await?;
    info!(mission_id = id, "mission created");
    Ok((StatusCode::CREATED, Json(MissionCreated { id })))
}

/// `GET /missions`. Every mission newest first, enriched with the driver
/// name and vehicle plate.
pub async fn list_missions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MissionDetails>>> {
    let missions = state.unit_of_work.missions.list().await?;
    Ok(Json(missions))
}

/// `PUT /missions/{id}/complete`. Marks the mission completed, releasing its
/// resources. Unknown ids still report success.
pub async fn complete_mission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SuccessResponse>> {
    let affected = state.unit_of_work.missions.complete(id).await?;
    if affected == 0 {
        debug!(mission_id = id, "complete matched no mission row");
    }
    Ok(Json(SuccessResponse { success: true }))
}

/// `DELETE /missions/{id}`. Removes the mission outright. Unknown ids still
/// report success.
pub async fn delete_mission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SuccessResponse>> {
    let affected = state.unit_of_work.missions.delete(id).await?;
    if affected == 0 {
        debug!(mission_id = id, "delete matched no mission row");
    }
    Ok(Json(SuccessResponse { success: true }))
}
