use std::sync::Arc;

use petcare_db::PetStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Pet persistence gateway (PostgreSQL or in-memory).
    pub store: Arc<dyn PetStore>,
}
