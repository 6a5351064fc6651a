//! JSON REST handlers for amenities.

use axum::Json;
use axum::extract::State;

use hbnb_app::ports::Storage;
use hbnb_domain::amenity::Amenity;

use crate::api::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// `POST /amenities`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    JsonObject(body): JsonObject,
) -> Result<CreateResponse<Amenity>, ApiError>
where
    S: Storage + Send + Sync + 'static,
{
    let amenity = state.resource_service.create_amenity(body).await?;
    Ok(CreateResponse::Created(Json(amenity)))
}
