//! User — an account that hosts places and writes reviews.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::UserId;
use crate::record::{self, Attributes, BASE_PROTECTED, Field, Record};
use crate::time::{self, Timestamp};

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(with = "time::serde_format")]
    pub created_at: Timestamp,
    #[serde(with = "time::serde_format")]
    pub updated_at: Timestamp,
    pub email: Field<String>,
    pub password: Field<String>,
    #[serde(default)]
    pub first_name: Field<String>,
    #[serde(default)]
    pub last_name: Field<String>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl User {
    /// Create a user with a fresh id and timestamps.
    #[must_use]
    pub fn new(email: impl Into<Field<String>>, password: impl Into<Field<String>>) -> Self {
        let ts = time::now();
        Self {
            id: UserId::new(),
            created_at: ts,
            updated_at: ts,
            email: email.into(),
            password: password.into(),
            first_name: Field::default(),
            last_name: Field::default(),
            extra: Attributes::new(),
        }
    }

    /// Build a user from a request body. `email` is checked before `password`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first absent required
    /// field.
    pub fn from_body(mut body: Attributes) -> Result<Self, ValidationError> {
        let email = record::require(&mut body, "email")?;
        let password = record::require(&mut body, "password")?;
        let mut user = Self::new(
            Field::from_value(email),
            Field::from_value(password),
        );
        user.apply(body);
        Ok(user)
    }
}

impl Record for User {
    type Id = UserId;

    const KIND: &'static str = "User";
    const COLLECTION: &'static str = "users";
    const PROTECTED: &'static [&'static str] = &BASE_PROTECTED;

    fn id(&self) -> UserId {
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
            "email" => self.email = Field::from_value(value),
            "password" => self.password = Field::from_value(value),
            "first_name" => self.first_name = Field::from_value(value),
            "last_name" => self.last_name = Field::from_value(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }
}
