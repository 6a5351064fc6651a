//! JSON REST handlers for states.

use axum::Json;
use axum::extract::State;

use hbnb_app::ports::Storage;

use crate::api::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// `POST /states`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    JsonObject(body): JsonObject,
) -> Result<CreateResponse<hbnb_domain::state::State>, ApiError>
where
    S: Storage + Send + Sync + 'static,
{
    let created = state.resource_service.create_state(body).await?;
    Ok(CreateResponse::Created(Json(created)))
}
