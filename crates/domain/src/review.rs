//! Review — a [`User`](crate::user::User)'s comment on a
//! [`Place`](crate::place::Place).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::{PlaceId, ReviewId, UserId};
use crate::place::Place;
use crate::record::{self, Attributes, Field, Owned, Record};
use crate::time::{self, Timestamp};

/// A review of a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(with = "time::serde_format")]
    pub created_at: Timestamp,
    #[serde(with = "time::serde_format")]
    pub updated_at: Timestamp,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub text: Field<String>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl Review {
    /// Create a review with a fresh id and timestamps.
    #[must_use]
    pub fn new(place_id: PlaceId, user_id: UserId, text: impl Into<Field<String>>) -> Self {
        let ts = time::now();
        Self {
            id: ReviewId::new(),
            created_at: ts,
            updated_at: ts,
            place_id,
            user_id,
            text: text.into(),
            extra: Attributes::new(),
        }
    }

    /// Build a review of `place_id` written by `user_id` from a request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `text` is absent.
    pub fn from_body(
        place_id: PlaceId,
        user_id: UserId,
        mut body: Attributes,
    ) -> Result<Self, ValidationError> {
        let text = record::require(&mut body, "text")?;
        let mut review = Self::new(place_id, user_id, Field::from_value(text));
        review.apply(body);
        Ok(review)
    }
}

impl Record for Review {
    type Id = ReviewId;

    const KIND: &'static str = "Review";
    const COLLECTION: &'static str = "reviews";
    const PROTECTED: &'static [&'static str] =
        &["id", "created_at", "updated_at", "place_id", "user_id"];

    fn id(&self) -> ReviewId {
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
            "text" => self.text = Field::from_value(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }
}

impl Owned for Review {
    type Parent = Place;

    const PARENT_KEY: &'static str = "place_id";

    fn parent_id(&self) -> PlaceId {
        self.place_id
    }
}
