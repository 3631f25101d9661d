//! Router assembly.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router with every fleet endpoint wired.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .route("/ping", get(handlers::status::ping))
        .route("/health", get(handlers::status::health))
        .route("/missions", post(handlers::missions::create_mission))
        .route("/missions", get(handlers::missions::list_missions))
        .route("/missions/{id}", delete(handlers::missions::delete_mission))
        .route(
            "/missions/{id}/complete",
            put(handlers::missions::complete_mission),
        )
        .route(
            "/available-drivers",
            get(handlers::availability::available_drivers),
        )
        .route(
            "/available-vehicles",
            get(handlers::availability::available_vehicles),
        )
        .route(
            "/available-engineers",
            get(handlers::availability::available_engineers),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wide open unless origins are configured; the tracker fronts a browser
/// dashboard served from elsewhere.
fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    }
}
