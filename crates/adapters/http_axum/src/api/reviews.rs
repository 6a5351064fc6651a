//! JSON REST handlers for reviews.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::Storage;
use hbnb_domain::review::Review;

use crate::api::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// `POST /places/{id}/reviews`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Path(place_id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<CreateResponse<Review>, ApiError>
where
    S: Storage + Send + Sync + 'static,
{
    let review = state.resource_service.create_review(&place_id, body).await?;
    Ok(CreateResponse::Created(Json(review)))
}
