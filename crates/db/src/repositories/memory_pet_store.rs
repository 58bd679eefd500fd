//! In-process pet store.
//!
//! Backs `PET_STORE=memory` deployments and the API integration tests.
//! Contents are lost when the process exits.

use std::collections::BTreeMap;

use async_trait::async_trait;
use petcare_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::pet::{Pet, PetFields};
use crate::store::PetStore;

struct Inner {
    rows: BTreeMap<DbId, Pet>,
    /// Next id handed out by an insert. Never moves backwards, so deleted
    /// ids are not reused.
    next_id: DbId,
}

/// Pet store kept in a `BTreeMap` behind an async `RwLock`.
pub struct MemoryPetStore {
    inner: RwLock<Inner>,
}

impl MemoryPetStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryPetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PetStore for MemoryPetStore {
    async fn find_all(&self) -> Result<Vec<Pet>, sqlx::Error> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, id: Option<DbId>, fields: &PetFields) -> Result<Pet, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let id = match id {
            Some(id) => {
                inner.next_id = inner.next_id.max(id + 1);
                id
            }
            None => {
                let id = inner.next_id;
                inner.next_id += 1;
                id
            }
        };
        let pet = fields.clone().with_id(id);
        inner.rows.insert(id, pet.clone());
        Ok(pet)
    }

    async fn update_by_id(&self, id: DbId, fields: &PetFields) -> Result<Option<Pet>, sqlx::Error> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|row| {
            *row = fields.clone().with_id(id);
            row.clone()
        }))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.read().await.rows.contains_key(&id))
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        Ok(self.inner.read().await.rows.len() as i64)
    }
}
