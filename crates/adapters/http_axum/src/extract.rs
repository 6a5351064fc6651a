//! Request body extraction.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

use hbnb_domain::error::ValidationError;
use hbnb_domain::record::Attributes;

use crate::error::ApiError;

/// A request body that parsed as a JSON object.
///
/// Unlike [`axum::Json`], the `Content-Type` header is not inspected: any
/// body that is not a JSON object, including an empty one, is rejected with
/// `400 {"error": "Not a JSON"}`.
pub struct JsonObject(pub Attributes);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ValidationError::NotAJson)?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            _ => Err(ValidationError::NotAJson.into()),
        }
    }
}
