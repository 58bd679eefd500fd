//! Repository for the `pets` table.

use async_trait::async_trait;
use petcare_core::types::DbId;
use sqlx::PgPool;

use crate::models::pet::{Pet, PetFields};
use crate::store::PetStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, name, "type", age, breed, owner_name, image_url"#;

/// PostgreSQL-backed pet store.
///
/// Cheap to clone; the inner pool is reference counted.
#[derive(Clone)]
pub struct PetRepo {
    pool: PgPool,
}

impl PetRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new pet, letting the sequence assign its id.
    async fn insert(&self, fields: &PetFields) -> Result<Pet, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO pets (name, "type", age, breed, owner_name, image_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(&fields.name)
            .bind(&fields.pet_type)
            .bind(fields.age)
            .bind(&fields.breed)
            .bind(&fields.owner_name)
            .bind(&fields.image_url)
            .fetch_one(&self.pool)
            .await
    }

    /// Overwrite every column of the row with `id`, inserting it under that
    /// id when it does not exist.
    ///
    /// An explicit insert bypasses the id sequence, so the sequence is moved
    /// past `id` in the same transaction.
    async fn upsert(&self, id: DbId, fields: &PetFields) -> Result<Pet, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO pets (id, name, "type", age, breed, owner_name, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                "type" = EXCLUDED."type",
                age = EXCLUDED.age,
                breed = EXCLUDED.breed,
                owner_name = EXCLUDED.owner_name,
                image_url = EXCLUDED.image_url
             RETURNING {COLUMNS}"#
        );

        let mut tx = self.pool.begin().await?;
        let pet = sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&fields.name)
            .bind(&fields.pet_type)
            .bind(fields.age)
            .bind(&fields.breed)
            .bind(&fields.owner_name)
            .bind(&fields.image_url)
            .fetch_one(&mut *tx)
            .await?;
        sqlx::query("SELECT setval('pets_id_seq', GREATEST($1, (SELECT last_value FROM pets_id_seq)))")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(pet_id = pet.id, "Pet row written by id");
        Ok(pet)
    }
}

#[async_trait]
impl PetStore for PetRepo {
    /// List all pets ordered by id.
    async fn find_all(&self) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets ORDER BY id");
        sqlx::query_as::<_, Pet>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save(&self, id: Option<DbId>, fields: &PetFields) -> Result<Pet, sqlx::Error> {
        match id {
            None => self.insert(fields).await,
            Some(id) => self.upsert(id, fields).await,
        }
    }

    async fn update_by_id(&self, id: DbId, fields: &PetFields) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            r#"UPDATE pets SET
                name = $2,
                "type" = $3,
                age = $4,
                breed = $5,
                owner_name = $6,
                image_url = $7
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&fields.name)
            .bind(&fields.pet_type)
            .bind(fields.age)
            .bind(&fields.breed)
            .bind(&fields.owner_name)
            .bind(&fields.image_url)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pets WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pets")
            .fetch_one(&self.pool)
            .await
    }
}
