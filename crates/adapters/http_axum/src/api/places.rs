//! JSON REST handlers for places.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::Storage;
use hbnb_domain::place::Place;

use crate::api::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// `POST /cities/{id}/places`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Path(city_id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<CreateResponse<Place>, ApiError>
where
    S: Storage + Send + Sync + 'static,
{
    let place = state.resource_service.create_place(&city_id, body).await?;
    Ok(CreateResponse::Created(Json(place)))
}
