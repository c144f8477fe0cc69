//! `/lists/{name}/items` handlers.
//!
//! Items are addressed by `(checklist name, item id)`; an id under the wrong
//! checklist name is treated as missing.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use checklist_core::{ItemId, ItemSummary};

/// `GET /lists/{name}/items` → `200` with `[{"Name", "Checked"}]`.
///
/// An unknown checklist yields an empty array.
pub async fn list_items(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<ItemSummary>>, AppError> {
    let items = state
        .run(move |service| service.list_items(&name))
        .await?;
    Ok(Json(items))
}

/// `POST /lists/{name}/items` with a JSON string body → `201` with the new id.
pub async fn create_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(item_name): Json<String>,
) -> Result<(StatusCode, Json<ItemId>), AppError> {
    let id = state
        .run(move |service| service.create_item(&name, &item_name))
        .await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// `PATCH /lists/{name}/items/{id}` with a JSON bool body → `202`, or `404`.
pub async fn set_item_checked(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, ItemId)>,
    Json(checked): Json<bool>,
) -> Result<StatusCode, AppError> {
    state
        .run(move |service| service.set_item_checked(&name, id, checked))
        .await?;
    Ok(StatusCode::ACCEPTED)
}

/// `DELETE /lists/{name}/items/{id}` → `200`, or `404`.
pub async fn delete_item(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, ItemId)>,
) -> Result<StatusCode, AppError> {
    state
        .run(move |service| service.delete_item(&name, id))
        .await?;
    Ok(StatusCode::OK)
}
