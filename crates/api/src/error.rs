use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use petcare_core::error::CoreError;
use petcare_core::types::now_rfc3339;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error", "code", "timestamp" }`. Not-found is the exception:
/// it is returned as a bare 404 with an empty body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `petcare_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store call failed while performing `action` (e.g. "create pet").
    #[error("Failed to {action}: {source}")]
    Store {
        action: &'static str,
        source: sqlx::Error,
    },

    /// A request body that could not be read as the expected JSON shape.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` that tags a store error with the failed action.
    ///
    /// ```ignore
    /// state.store.count().await.map_err(AppError::store("count pets"))?;
    /// ```
    pub fn store(action: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Store { action, source }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    return StatusCode::NOT_FOUND.into_response();
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store { action, source } => {
                tracing::error!(error = %source, action, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("Failed to {action}"),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Request body rejected");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
            "timestamp": now_rfc3339(),
        });

        (status, axum::Json(body)).into_response()
    }
}
