use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vela_core::error::CoreError;

/// Which content store operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Fetch,
    Update,
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreAction::Fetch => "fetch",
            StoreAction::Update => "update",
        })
    }
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the content store failure.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vela_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing the content document failed.
    #[error("Failed to {action} content")]
    ContentStore {
        action: StoreAction,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` on repository calls.
    pub fn store(action: StoreAction) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::ContentStore { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::MalformedDocument(msg) | CoreError::InvalidTransition(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::ContentStore { action, source } => {
                tracing::error!(error = %source, %action, "Content store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONTENT_STORE_ERROR",
                    format!("Failed to {action} content"),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
