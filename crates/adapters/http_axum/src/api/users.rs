//! JSON REST handlers for users.

use axum::Json;
use axum::extract::State;

use hbnb_app::ports::Storage;
use hbnb_domain::user::User;

use crate::api::records::CreateResponse;
use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// `POST /users`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    JsonObject(body): JsonObject,
) -> Result<CreateResponse<User>, ApiError>
where
    S: Storage + Send + Sync + 'static,
{
    let user = state.resource_service.create_user(body).await?;
    Ok(CreateResponse::Created(Json(user)))
}
