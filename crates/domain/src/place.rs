//! Place — a rentable listing in a [`City`](crate::city::City), hosted by a
//! [`User`](crate::user::User); owns reviews.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::city::City;
use crate::error::ValidationError;
use crate::id::{CityId, PlaceId, UserId};
use crate::record::{self, Attributes, Field, Owned, Record};
use crate::time::{self, Timestamp};

/// A listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    #[serde(with = "time::serde_format")]
    pub created_at: Timestamp,
    #[serde(with = "time::serde_format")]
    pub updated_at: Timestamp,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: Field<String>,
    #[serde(default)]
    pub description: Field<String>,
    #[serde(default)]
    pub number_rooms: Field<u32>,
    #[serde(default)]
    pub number_bathrooms: Field<u32>,
    #[serde(default)]
    pub max_guest: Field<u32>,
    #[serde(default)]
    pub price_by_night: Field<u32>,
    #[serde(default)]
    pub latitude: Field<f64>,
    #[serde(default)]
    pub longitude: Field<f64>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl Place {
    /// Create a place with a fresh id and timestamps; numeric fields start at zero.
    #[must_use]
    pub fn new(city_id: CityId, user_id: UserId, name: impl Into<Field<String>>) -> Self {
        let ts = time::now();
        Self {
            id: PlaceId::new(),
            created_at: ts,
            updated_at: ts,
            city_id,
            user_id,
            name: name.into(),
            description: Field::default(),
            number_rooms: Field::default(),
            number_bathrooms: Field::default(),
            max_guest: Field::default(),
            price_by_night: Field::default(),
            latitude: Field::default(),
            longitude: Field::default(),
            extra: Attributes::new(),
        }
    }

    /// Build a place in `city_id` hosted by `user_id` from a request body.
    /// Any `city_id` or `user_id` left in the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn from_body(
        city_id: CityId,
        user_id: UserId,
        mut body: Attributes,
    ) -> Result<Self, ValidationError> {
        let name = record::require(&mut body, "name")?;
        let mut place = Self::new(city_id, user_id, Field::from_value(name));
        place.apply(body);
        Ok(place)
    }
}

impl Record for Place {
    type Id = PlaceId;

    const KIND: &'static str = "Place";
    const COLLECTION: &'static str = "places";
    const PROTECTED: &'static [&'static str] =
        &["id", "created_at", "updated_at", "city_id", "user_id"];

    fn id(&self) -> PlaceId {
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
            "description" => self.description = Field::from_value(value),
            "number_rooms" => self.number_rooms = Field::from_value(value),
            "number_bathrooms" => self.number_bathrooms = Field::from_value(value),
            "max_guest" => self.max_guest = Field::from_value(value),
            "price_by_night" => self.price_by_night = Field::from_value(value),
            "latitude" => self.latitude = Field::from_value(value),
            "longitude" => self.longitude = Field::from_value(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }
}

impl Owned for Place {
    type Parent = City;

    const PARENT_KEY: &'static str = "city_id";

    fn parent_id(&self) -> CityId {
        self.city_id
    }
}
