//! Record — the shared shape of every stored object.
//!
//! A record has an immutable identity, creation/update timestamps, a set of
//! named fields, and a bag of extra attributes accepted from clients. Writes
//! coming from clients go through [`Record::apply`], which skips the keys in
//! [`Record::PROTECTED`] and routes everything else through
//! [`Record::set_attribute`]. No value is ever rejected for its JSON type.

use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::time::Timestamp;

/// Flat key/value map, as received in a request body.
pub type Attributes = serde_json::Map<String, Value>;

/// Keys no client write may touch, shared by every record type.
pub const BASE_PROTECTED: [&str; 3] = ["id", "created_at", "updated_at"];

/// A named field: typed when the value fits `T`, kept verbatim otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field<T> {
    Typed(T),
    Json(Value),
}

impl<T: DeserializeOwned> Field<T> {
    /// Wrap a client-supplied value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match T::deserialize(&value) {
            Ok(typed) => Self::Typed(typed),
            Err(_) => Self::Json(value),
        }
    }
}

impl<T> Field<T> {
    /// The typed value, if the stored value fits `T`.
    pub fn typed(&self) -> Option<&T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Json(_) => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Typed(value)
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Self::Typed(value.to_string())
    }
}

impl<T: Default> Default for Field<T> {
    fn default() -> Self {
        Self::Typed(T::default())
    }
}

impl PartialEq<&str> for Field<String> {
    fn eq(&self, other: &&str) -> bool {
        self.typed().is_some_and(|value| value == other)
    }
}

/// A persisted object with identity and timestamps.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Typed identifier.
    type Id: Copy + Eq + Hash + Display + FromStr + Serialize + Send + Sync + 'static;

    /// Type name, used in error messages and storage keys.
    const KIND: &'static str;

    /// Plural collection name, used for table names and stats keys.
    const COLLECTION: &'static str;

    /// Keys excluded from client writes.
    const PROTECTED: &'static [&'static str];

    fn id(&self) -> Self::Id;

    fn created_at(&self) -> Timestamp;

    fn updated_at(&self) -> Timestamp;

    /// Mark the record as modified at `at`.
    fn touch(&mut self, at: Timestamp);

    /// Overwrite a single attribute. Unknown keys are kept as extra attributes.
    fn set_attribute(&mut self, key: &str, value: Value);

    /// Apply every non-protected key of `body`, in body order.
    fn apply(&mut self, body: Attributes) {
        for (key, value) in body {
            if Self::PROTECTED.contains(&key.as_str()) {
                continue;
            }
            self.set_attribute(&key, value);
        }
    }
}

/// A record that belongs to a parent record (City → State, Place → City, …).
pub trait Owned: Record {
    type Parent: Record;

    /// Name of the attribute holding the parent's id.
    const PARENT_KEY: &'static str;

    fn parent_id(&self) -> <Self::Parent as Record>::Id;
}

/// Take a required field out of `body`. A present `null` counts as given.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when `key` is absent.
pub fn require(body: &mut Attributes, key: &'static str) -> Result<Value, ValidationError> {
    body.remove(key).ok_or(ValidationError::MissingField(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_type_field_when_value_fits() {
        let field: Field<u32> = Field::from_value(json!(4));
        assert_eq!(field, Field::Typed(4));
        assert_eq!(field.typed(), Some(&4));
    }

    #[test]
    fn should_keep_value_verbatim_when_type_mismatches() {
        let field: Field<u32> = Field::from_value(json!("four"));
        assert_eq!(field, Field::Json(json!("four")));
        assert_eq!(field.typed(), None);
    }

    #[test]
    fn should_serialize_either_variant_as_plain_value() {
        assert_eq!(serde_json::to_value(Field::<String>::from("Loft")).unwrap(), json!("Loft"));
        assert_eq!(
            serde_json::to_value(Field::<String>::Json(Value::Null)).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn should_read_back_mistyped_value_from_storage() {
        let field: Field<String> = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(field, Field::Json(json!(5)));
        let field: Field<String> = serde_json::from_value(json!("Oakland")).unwrap();
        assert_eq!(field, "Oakland");
    }

    #[test]
    fn should_take_required_field_out_of_body() {
        let mut body = Attributes::new();
        body.insert("name".to_string(), json!("California"));
        let value = require(&mut body, "name").unwrap();
        assert_eq!(value, json!("California"));
        assert!(body.is_empty());
    }

    #[test]
    fn should_accept_null_as_present() {
        let mut body = Attributes::new();
        body.insert("name".to_string(), Value::Null);
        assert_eq!(require(&mut body, "name"), Ok(Value::Null));
    }

    #[test]
    fn should_report_missing_field() {
        let mut body = Attributes::new();
        assert_eq!(
            require(&mut body, "email"),
            Err(ValidationError::MissingField("email"))
        );
    }
}
