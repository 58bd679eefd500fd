//! Pet entity model and DTOs.

use petcare_core::error::CoreError;
use petcare_core::pet::{resolve_image_url, validate_required};
use petcare_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A pet row from the `pets` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub pet_type: String,
    pub age: i32,
    pub breed: Option<String>,
    pub owner_name: Option<String>,
    pub image_url: Option<String>,
}

/// Every stored column of a pet except its identity.
///
/// Produced from a [`PetPayload`] after validation and handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetFields {
    pub name: String,
    pub pet_type: String,
    pub age: i32,
    pub breed: Option<String>,
    pub owner_name: Option<String>,
    pub image_url: Option<String>,
}

impl PetFields {
    /// Attach an identity to these fields.
    pub fn with_id(self, id: DbId) -> Pet {
        Pet {
            id,
            name: self.name,
            pet_type: self.pet_type,
            age: self.age,
            breed: self.breed,
            owner_name: self.owner_name,
            image_url: self.image_url,
        }
    }
}

/// Request body for creating or replacing a pet.
///
/// All fields are optional at the wire level; required-field checks happen
/// in [`PetPayload::into_new`] and [`PetPayload::into_replacement`]. Unknown
/// keys (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetPayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    /// Absent or `null` is stored as 0.
    pub age: Option<i32>,
    pub breed: Option<String>,
    pub owner_name: Option<String>,
    pub image_url: Option<String>,
}

impl PetPayload {
    /// Validate a create request, substituting the placeholder image when
    /// none was given.
    pub fn into_new(self) -> Result<PetFields, CoreError> {
        let image_url = Some(resolve_image_url(self.image_url.as_deref()));
        let mut fields = self.into_replacement()?;
        fields.image_url = image_url;
        Ok(fields)
    }

    /// Validate an update request. Every field is taken as sent; missing
    /// optional values become `None` and a missing age becomes 0.
    pub fn into_replacement(self) -> Result<PetFields, CoreError> {
        validate_required(self.name.as_deref(), self.pet_type.as_deref())?;
        Ok(PetFields {
            name: self.name.unwrap_or_default(),
            pet_type: self.pet_type.unwrap_or_default(),
            age: self.age.unwrap_or(0),
            breed: self.breed,
            owner_name: self.owner_name,
            image_url: self.image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use petcare_core::pet::DEFAULT_IMAGE_URL;

    fn payload(json: &str) -> PetPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn payload_reads_camel_case_keys() {
        let p = payload(
            r#"{"id": 99, "name": "Rex", "type": "Dog", "age": 3,
                "breed": "Lab", "ownerName": "Sam", "imageUrl": "http://x/y.png"}"#,
        );
        assert_eq!(p.name.as_deref(), Some("Rex"));
        assert_eq!(p.pet_type.as_deref(), Some("Dog"));
        assert_eq!(p.age, Some(3));
        assert_eq!(p.owner_name.as_deref(), Some("Sam"));
        assert_eq!(p.image_url.as_deref(), Some("http://x/y.png"));
    }

    #[test]
    fn null_age_is_zero() {
        let fields = payload(r#"{"name": "Rex", "type": "Dog", "age": null}"#)
            .into_replacement()
            .unwrap();
        assert_eq!(fields.age, 0);
    }

    #[test]
    fn new_pet_gets_default_image() {
        let fields = payload(r#"{"name": "Rex", "type": "Dog", "imageUrl": ""}"#)
            .into_new()
            .unwrap();
        assert_eq!(fields.image_url.as_deref(), Some(DEFAULT_IMAGE_URL));
    }

    #[test]
    fn replacement_clears_absent_fields() {
        let fields = payload(r#"{"name": "Rex", "type": "Dog"}"#)
            .into_replacement()
            .unwrap();
        assert_eq!(fields.breed, None);
        assert_eq!(fields.owner_name, None);
        assert_eq!(fields.image_url, None);
    }

    #[test]
    fn blank_type_rejected() {
        assert_matches!(
            payload(r#"{"name": "Rex", "type": " "}"#).into_new(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn pet_serializes_with_wire_names() {
        let pet = PetFields {
            name: "Rex".into(),
            pet_type: "Dog".into(),
            age: 3,
            breed: None,
            owner_name: Some("Sam".into()),
            image_url: None,
        }
        .with_id(7);
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["type"], "Dog");
        assert_eq!(json["ownerName"], "Sam");
        assert!(json["imageUrl"].is_null());
    }
}
