//! Manual debugging endpoints under `/pets`.
//!
//! Both respond with plain text rather than the JSON error envelope so they
//! can be read directly in a browser or with curl.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::state::AppState;

/// Body returned by a successful echo.
pub const ECHO_OK: &str = "Test successful! Backend is working.";

/// JSON type name of a value, as logged by [`echo`].
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// POST /api/pets/test
///
/// Logs the received object and the type of each field.
pub async fn echo(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<&'static str, (StatusCode, String)> {
    let Json(data) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Echo payload rejected");
        (
            StatusCode::BAD_REQUEST,
            format!("Test failed: {}", rejection.body_text()),
        )
    })?;

    let received = Value::Object(data.clone());
    tracing::info!(fields = data.len(), payload = %received, "Echo endpoint hit");
    for (key, value) in &data {
        tracing::info!(key = %key, value = %value, kind = json_type_name(value), "Echo field");
    }

    Ok(ECHO_OK)
}

/// GET /api/pets/check-db
///
/// Reports the stored pet count, or the store error with a 500.
pub async fn check_db(State(state): State<AppState>) -> (StatusCode, String) {
    match state.store.count().await {
        Ok(count) => (
            StatusCode::OK,
            format!("Database connected. Total pets: {count}"),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Database check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {err}"),
            )
        }
    }
}
