pub mod assets;
pub mod health;
pub mod pets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /pets                  list, create
/// /pets/{id}             get, update, delete
/// /pets/test             echo (POST)
/// /pets/check-db         store check (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/pets", pets::router())
}
