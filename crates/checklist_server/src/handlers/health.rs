//! Liveness and readiness checks.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health`: process is up; the store is not consulted.
pub async fn health_check() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        version: checklist_core::core_version(),
    })
}

/// `GET /health/ready`: `200` when the store answers, `503` otherwise.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state
        .run(|service| service.ping())
        .await
        .map_err(|err| AppError::unavailable("checklist store unavailable").with_source(err))?;
    Ok(StatusCode::OK)
}
