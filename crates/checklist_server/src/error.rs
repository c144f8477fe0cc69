//! HTTP error mapping.
//!
//! # Responsibility
//! - Translate store errors into status codes.
//! - Log server-side failures with their source before responding.
//!
//! # Invariants
//! - `404` and `409` carry no body; other errors carry `{"code","message"}`.
//! - Internal details never reach the response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use checklist_core::RepoError;
use log::error;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// Error returned by request handlers.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: &'static str,
    message: String,
    bare: bool,
    source: Option<BoxedSource>,
}

impl AppError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            bare: false,
            source: None,
        }
    }

    /// Attaches the underlying failure for logging.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// 404 with an empty body.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            bare: true,
            ..Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
        }
    }

    /// 409 with an empty body.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            bare: true,
            ..Self::new(StatusCode::CONFLICT, "CONFLICT", message)
        }
    }

    /// 500; the message is replaced by a generic one on the wire.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            message,
        )
    }

    /// 503 with a JSON error body.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            message,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn Error + 'static))
    }
}

impl From<RepoError> for AppError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::ChecklistConflict(_) => Self::conflict(value.to_string()),
            RepoError::ChecklistNotFound(_) | RepoError::ItemNotFound { .. } => {
                Self::not_found(value.to_string())
            }
            RepoError::Db(_) | RepoError::InvalidData(_) => {
                Self::internal("checklist store failure").with_source(value)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => error!(
                    "event=http_error module=server status=error code={} message={} error={}",
                    self.code, self.message, source
                ),
                None => error!(
                    "event=http_error module=server status=error code={} message={}",
                    self.code, self.message
                ),
            }
        }

        if self.bare {
            return self.status.into_response();
        }

        let message = if self.status == StatusCode::INTERNAL_SERVER_ERROR {
            "an internal error occurred"
        } else {
            self.message.as_str()
        };
        let body = ErrorBody {
            code: self.code,
            message,
        };
        (self.status, Json(body)).into_response()
    }
}
