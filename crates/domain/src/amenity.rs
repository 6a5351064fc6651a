//! Amenity — a feature a place can offer (Wifi, Pool, …).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::AmenityId;
use crate::record::{self, Attributes, BASE_PROTECTED, Field, Record};
use crate::time::{self, Timestamp};

/// A named amenity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    #[serde(with = "time::serde_format")]
    pub created_at: Timestamp,
    #[serde(with = "time::serde_format")]
    pub updated_at: Timestamp,
    pub name: Field<String>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl Amenity {
    /// Create an amenity with a fresh id and timestamps.
    #[must_use]
    pub fn new(name: impl Into<Field<String>>) -> Self {
        let ts = time::now();
        Self {
            id: AmenityId::new(),
            created_at: ts,
            updated_at: ts,
            name: name.into(),
            extra: Attributes::new(),
        }
    }

    /// Build an amenity from a request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn from_body(mut body: Attributes) -> Result<Self, ValidationError> {
        let name = record::require(&mut body, "name")?;
        let mut amenity = Self::new(Field::from_value(name));
        amenity.apply(body);
        Ok(amenity)
    }
}

impl Record for Amenity {
    type Id = AmenityId;

    const KIND: &'static str = "Amenity";
    const COLLECTION: &'static str = "amenities";
    const PROTECTED: &'static [&'static str] = &BASE_PROTECTED;

    fn id(&self) -> AmenityId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }

    fn set_attribute(&mut self, key: &str, value: Value) {
        match key {
            "name" => self.name = Field::from_value(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }
}
