//! `/lists` handlers.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// `GET /lists` → `200` with a JSON array of checklist names.
pub async fn list_checklists(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let names = state.run(|service| service.list_checklist_names()).await?;
    Ok(Json(names))
}

/// `POST /lists` with a JSON string body → `201`, or `409` when the name is taken.
pub async fn create_checklist(
    State(state): State<AppState>,
    Json(name): Json<String>,
) -> Result<StatusCode, AppError> {
    state
        .run(move |service| service.create_checklist(&name))
        .await?;
    Ok(StatusCode::CREATED)
}

/// `DELETE /lists/{name}` → `200`, or `404` when no such checklist exists.
///
/// Items filed under the name are deleted with it.
pub async fn delete_checklist(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .run(move |service| service.delete_checklist(&name))
        .await?;
    Ok(StatusCode::OK)
}
