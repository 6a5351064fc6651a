//! JSON REST handlers for cities.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::Storage;
use hbnb_domain::city::City;

use crate::api::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// `POST /states/{id}/cities`
///
/// The path's state id overrides any `state_id` in the body.
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Path(state_id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<CreateResponse<City>, ApiError>
where
    S: Storage + Send + Sync + 'static,
{
    let city = state.resource_service.create_city(&state_id, body).await?;
    Ok(CreateResponse::Created(Json(city)))
}
