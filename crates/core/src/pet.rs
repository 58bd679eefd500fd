//! Pet profile rules: required-field checks and image URL defaulting.
//!
//! These are pure functions over raw payload values so both the API layer
//! and tests can apply them without touching the store.

use crate::error::CoreError;

/// Entity name used in not-found errors and log fields.
pub const PET_ENTITY: &str = "Pet";

/// Placeholder image stored when a new pet is submitted without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=400&h=300&fit=crop";

/// Returns `true` when the value is absent or contains only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Check that a pet's required fields are present.
///
/// `name` is checked before `pet_type`, so a payload missing both reports
/// the name. Returns the values as submitted (untrimmed) on success.
pub fn validate_required<'a>(
    name: Option<&'a str>,
    pet_type: Option<&'a str>,
) -> Result<(&'a str, &'a str), CoreError> {
    let name = match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(CoreError::Validation("Pet name is required".to_string())),
    };
    let pet_type = match pet_type {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(CoreError::Validation("Pet type is required".to_string())),
    };
    Ok((name, pet_type))
}

/// Image URL to store for a newly created pet.
///
/// Blank or missing URLs fall back to [`DEFAULT_IMAGE_URL`].
pub fn resolve_image_url(image_url: Option<&str>) -> String {
    match image_url {
        Some(url) if !is_blank(Some(url)) => url.to_string(),
        _ => DEFAULT_IMAGE_URL.to_string(),
    }
}
