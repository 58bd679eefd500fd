//! Request extractors whose rejections use the API error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json<T>` whose rejection is an [`AppError::BadRequest`].
///
/// Malformed JSON, wrong field types and a missing `Content-Type` all come
/// back as 400 with `{ "error", "code", "timestamp" }` instead of axum's
/// plain-text 400/415/422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
