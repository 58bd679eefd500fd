//! Shared helpers for API integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot`, backed
//! by [`MemoryPetStore`] or a [`FailingStore`] instead of PostgreSQL.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use petcare_api::config::{LogFormat, ServerConfig, StoreBackend};
use petcare_api::router::build_app_router;
use petcare_api::state::AppState;
use petcare_core::types::DbId;
use petcare_db::models::pet::{Pet, PetFields};
use petcare_db::repositories::MemoryPetStore;
use petcare_db::PetStore;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and asset directories that do not exist unless a test creates them.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        uploads_dir: PathBuf::from("target/test-missing-uploads"),
        uploads_cache_secs: 3600,
        static_dir: PathBuf::from("target/test-missing-static"),
        store: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<dyn PetStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: Arc<dyn PetStore>, config: ServerConfig) -> Router {
    let state = AppState { store };
    build_app_router(state, &config)
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> Arc<dyn PetStore> {
    Arc::new(MemoryPetStore::new())
}

/// A store whose every call fails as if the pool were exhausted.
pub struct FailingStore;

#[async_trait]
impl PetStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Pet>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn save(&self, _id: Option<DbId>, _fields: &PetFields) -> Result<Pet, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update_by_id(&self, _id: DbId, _fields: &PetFields) -> Result<Option<Pet>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn exists_by_id(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

pub fn failing_store() -> Arc<dyn PetStore> {
    Arc::new(FailingStore)
}

/// A store that claims every id exists while holding no rows, as if each
/// pet were deleted right after the existence check.
pub struct StaleExistsStore(pub MemoryPetStore);

#[async_trait]
impl PetStore for StaleExistsStore {
    async fn find_all(&self) -> Result<Vec<Pet>, sqlx::Error> {
        self.0.find_all().await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        self.0.find_by_id(id).await
    }

    async fn save(&self, id: Option<DbId>, fields: &PetFields) -> Result<Pet, sqlx::Error> {
        self.0.save(id, fields).await
    }

    async fn update_by_id(&self, id: DbId, fields: &PetFields) -> Result<Option<Pet>, sqlx::Error> {
        self.0.update_by_id(id, fields).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.0.delete_by_id(id).await
    }

    async fn exists_by_id(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Ok(true)
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        self.0.count().await
    }
}

pub fn stale_exists_store() -> Arc<dyn PetStore> {
    Arc::new(StaleExistsStore(MemoryPetStore::new()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// POST a raw string body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON string without any `Content-Type` header.
pub async fn post_without_content_type(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
