//! Handlers for the `/pets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use petcare_core::error::CoreError;
use petcare_core::pet::PET_ENTITY;
use petcare_core::types::DbId;
use petcare_db::models::pet::{Pet, PetPayload};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: PET_ENTITY,
        id,
    })
}

/// GET /api/pets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Pet>>> {
    let pets = state
        .store
        .find_all()
        .await
        .map_err(AppError::store("list pets"))?;
    Ok(Json(pets))
}

/// POST /api/pets
///
/// Requires `name` and `type`; a missing image URL is replaced with the
/// placeholder image.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<PetPayload>,
) -> AppResult<Json<Pet>> {
    tracing::info!(
        name = ?input.name,
        image_url = ?input.image_url,
        "Creating pet"
    );

    let fields = input.into_new()?;
    let pet = state
        .store
        .save(None, &fields)
        .await
        .map_err(AppError::store("create pet"))?;

    tracing::info!(pet_id = pet.id, "Pet saved");
    Ok(Json(pet))
}

/// GET /api/pets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Pet>> {
    let pet = state
        .store
        .find_by_id(id)
        .await
        .map_err(AppError::store("load pet"))?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(pet))
}

/// PUT /api/pets/{id}
///
/// Full replacement: every column is overwritten from the payload, so
/// omitted optional fields are cleared.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<PetPayload>,
) -> AppResult<Json<Pet>> {
    let exists = state
        .store
        .exists_by_id(id)
        .await
        .map_err(AppError::store("update pet"))?;
    if !exists {
        return Err(not_found(id));
    }

    let fields = input.into_replacement()?;
    // The row may have been deleted since the check above; that is a 404,
    // not an insert.
    let pet = state
        .store
        .update_by_id(id, &fields)
        .await
        .map_err(AppError::store("update pet"))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(pet_id = pet.id, "Pet updated");
    Ok(Json(pet))
}

/// DELETE /api/pets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = state
        .store
        .delete_by_id(id)
        .await
        .map_err(AppError::store("delete pet"))?;
    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(pet_id = id, "Pet deleted");
    Ok(StatusCode::OK)
}
