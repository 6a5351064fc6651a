//! City — belongs to a [`State`](crate::state::State); owns places.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::{CityId, StateId};
use crate::record::{self, Attributes, Field, Owned, Record};
use crate::state::State;
use crate::time::{self, Timestamp};

/// A city within a state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    #[serde(with = "time::serde_format")]
    pub created_at: Timestamp,
    #[serde(with = "time::serde_format")]
    pub updated_at: Timestamp,
    pub state_id: StateId,
    pub name: Field<String>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl City {
    /// Create a city with a fresh id and timestamps.
    #[must_use]
    pub fn new(state_id: StateId, name: impl Into<Field<String>>) -> Self {
        let ts = time::now();
        Self {
            id: CityId::new(),
            created_at: ts,
            updated_at: ts,
            state_id,
            name: name.into(),
            extra: Attributes::new(),
        }
    }

    /// Build a city under `state_id` from a request body. Any `state_id` in
    /// the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn from_body(state_id: StateId, mut body: Attributes) -> Result<Self, ValidationError> {
        let name = record::require(&mut body, "name")?;
        let mut city = Self::new(state_id, Field::from_value(name));
        city.apply(body);
        Ok(city)
    }
}

impl Record for City {
    type Id = CityId;

    const KIND: &'static str = "City";
    const COLLECTION: &'static str = "cities";
    const PROTECTED: &'static [&'static str] = &["id", "created_at", "updated_at", "state_id"];

    fn id(&self) -> CityId {
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

impl Owned for City {
    type Parent = State;

    const PARENT_KEY: &'static str = "state_id";

    fn parent_id(&self) -> StateId {
        self.state_id
    }
}
