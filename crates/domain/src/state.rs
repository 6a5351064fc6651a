//! State — top-level geographic grouping; owns cities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::StateId;
use crate::record::{self, Attributes, BASE_PROTECTED, Field, Record};
use crate::time::{self, Timestamp};

/// A state, such as `California`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    #[serde(with = "time::serde_format")]
    pub created_at: Timestamp,
    #[serde(with = "time::serde_format")]
    pub updated_at: Timestamp,
    pub name: Field<String>,
    /// Client-supplied attributes with no dedicated field.
    #[serde(flatten)]
    pub extra: Attributes,
}

impl State {
    /// Create a state with a fresh id and timestamps.
    #[must_use]
    pub fn new(name: impl Into<Field<String>>) -> Self {
        let ts = time::now();
        Self {
            id: StateId::new(),
            created_at: ts,
            updated_at: ts,
            name: name.into(),
            extra: Attributes::new(),
        }
    }

    /// Build a state from a request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn from_body(mut body: Attributes) -> Result<Self, ValidationError> {
        let name = record::require(&mut body, "name")?;
        let mut state = Self::new(Field::from_value(name));
        state.apply(body);
        Ok(state)
    }
}

impl Record for State {
    type Id = StateId;

    const KIND: &'static str = "State";
    const COLLECTION: &'static str = "states";
    const PROTECTED: &'static [&'static str] = &BASE_PROTECTED;

    fn id(&self) -> StateId {
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
