//! Read-only file serving for `/uploads` and `/static`.

use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::Router;
use tower::Layer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// `Cache-Control` value for uploaded files.
fn uploads_cache_control(max_age_secs: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={max_age_secs}"))
        .expect("formatted cache-control is a valid header value")
}

/// Mount the two asset prefixes.
///
/// ```text
/// /uploads/**  -> config.uploads_dir  (Cache-Control: public, max-age=N)
/// /static/**   -> config.static_dir
/// ```
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let uploads = SetResponseHeaderLayer::overriding(
        CACHE_CONTROL,
        uploads_cache_control(config.uploads_cache_secs),
    )
    .layer(ServeDir::new(&config.uploads_dir));

    Router::new()
        .nest_service("/uploads", uploads)
        .nest_service("/static", ServeDir::new(&config.static_dir))
}
