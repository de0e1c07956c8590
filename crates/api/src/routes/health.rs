//! Liveness and readiness probes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::dto::HealthResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness probe. Always `UP` while the process serves requests.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

/// Readiness probe. 503 when the database does not answer.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.check_ready().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
