//! Service status and object counts.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use hbnb_app::ports::Storage;
use hbnb_domain::stats::Stats;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct StatusBody {
    status: &'static str,
}

/// `GET /status`
pub async fn status() -> Json<StatusBody> {
    Json(StatusBody { status: "OK" })
}

/// `GET /stats`
pub async fn stats<S>(State(state): State<AppState<S>>) -> Result<Json<Stats>, ApiError>
where
    S: Storage + Send + Sync + 'static,
{
    let stats = state.resource_service.stats().await?;
    Ok(Json(stats))
}
