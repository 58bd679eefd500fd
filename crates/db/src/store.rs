//! The persistence gateway used by the HTTP layer.

use async_trait::async_trait;
use petcare_core::types::DbId;

use crate::models::pet::{Pet, PetFields};

/// Collection operations over stored pets.
///
/// Each call touches at most one row and is atomic at that level; no
/// multi-record transactions are coordinated here. Implementations are
/// shared across request tasks as `Arc<dyn PetStore>`.
#[async_trait]
pub trait PetStore: Send + Sync {
    /// Every stored pet, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Pet>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Pet>, sqlx::Error>;

    /// Insert or overwrite a pet.
    ///
    /// With `id = None` a new row is inserted and the store assigns its id.
    /// With `Some(id)` the row with that id is replaced, or inserted under
    /// that id when absent.
    async fn save(&self, id: Option<DbId>, fields: &PetFields) -> Result<Pet, sqlx::Error>;

    /// Overwrite every column of an existing pet.
    ///
    /// Returns `None` without writing anything when no row has `id`, so a
    /// concurrent delete is never undone.
    async fn update_by_id(&self, id: DbId, fields: &PetFields) -> Result<Option<Pet>, sqlx::Error>;

    /// Remove a pet. Returns `true` if a row was deleted.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Total number of stored pets.
    async fn count(&self) -> Result<i64, sqlx::Error>;
}
