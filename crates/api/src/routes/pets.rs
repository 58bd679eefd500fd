//! Route definitions for the `/pets` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{diagnostics, pet};
use crate::state::AppState;

/// Routes mounted at `/pets`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
///
/// POST   /test          -> echo
/// GET    /check-db      -> check_db
/// ```
///
/// The static segments take priority over `/{id}` in the matcher.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pet::list).post(pet::create))
        .route("/test", post(diagnostics::echo))
        .route("/check-db", get(diagnostics::check_db))
        .route(
            "/{id}",
            get(pet::get_by_id).put(pet::update).delete(pet::delete),
        )
}
