//! HTTP surface of the checklist service.
//!
//! Routes map one-to-one onto [`checklist_core::ChecklistService`] calls:
//!
//! | Method & path | Success | Failure |
//! |---|---|---|
//! | `GET /lists` | 200 names | |
//! | `POST /lists` | 201 | 409 taken |
//! | `DELETE /lists/:name` | 200 | 404 |
//! | `GET /lists/:name/items` | 200 items | |
//! | `POST /lists/:name/items` | 201 id | |
//! | `PATCH /lists/:name/items/:id` | 202 | 404 |
//! | `DELETE /lists/:name/items/:id` | 200 | 404 |

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    middleware::from_fn,
    routing::{delete, get, patch},
    Router,
};
use handlers::{health, items, lists};

pub use config::ServerConfig;
pub use error::AppError;
pub use state::AppState;

/// Builds the full router over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/lists",
            get(lists::list_checklists).post(lists::create_checklist),
        )
        .route("/lists/:name", delete(lists::delete_checklist))
        .route(
            "/lists/:name/items",
            get(items::list_items).post(items::create_item),
        )
        .route(
            "/lists/:name/items/:id",
            patch(items::set_item_checked).delete(items::delete_item),
        )
        .layer(from_fn(middleware::request_context))
        .with_state(state)
}
