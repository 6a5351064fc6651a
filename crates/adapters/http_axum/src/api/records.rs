//! Handlers shared by every record type.
//!
//! Each handler is generic over the storage `S` and the record type `T`; the
//! router instantiates them once per collection.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_app::ports::Storage;
use hbnb_domain::record::{Attributes, Owned, Record};

use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// Possible responses from a list endpoint.
pub enum ListResponse<T> {
    Ok(Json<Vec<T>>),
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a get or update endpoint.
pub enum GetResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for GetResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a create endpoint.
pub enum CreateResponse<T> {
    Created(Json<T>),
}

impl<T: Serialize> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from a delete endpoint.
pub enum DeleteResponse {
    /// `200` with an empty JSON object.
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(Attributes::new()).into_response(),
        }
    }
}

/// `GET /<collection>`
pub async fn list<S, T>(State(state): State<AppState<S>>) -> Result<ListResponse<T>, ApiError>
where
    S: Storage + Send + Sync + 'static,
    T: Record,
{
    let records = state.resource_service.list::<T>().await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `GET /<parent collection>/{id}/<collection>`
pub async fn list_children<S, T>(
    State(state): State<AppState<S>>,
    Path(parent_id): Path<String>,
) -> Result<ListResponse<T>, ApiError>
where
    S: Storage + Send + Sync + 'static,
    T: Owned,
{
    let records = state.resource_service.list_children::<T>(&parent_id).await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `GET /<collection>/{id}`
pub async fn get<S, T>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse<T>, ApiError>
where
    S: Storage + Send + Sync + 'static,
    T: Record,
{
    let record = state.resource_service.get::<T>(&id).await?;
    Ok(GetResponse::Ok(Json(record)))
}

/// `PUT /<collection>/{id}`
pub async fn update<S, T>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<GetResponse<T>, ApiError>
where
    S: Storage + Send + Sync + 'static,
    T: Record,
{
    let record = state.resource_service.update::<T>(&id, body).await?;
    Ok(GetResponse::Ok(Json(record)))
}

/// `DELETE /<collection>/{id}`
pub async fn delete<S, T>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: Storage + Send + Sync + 'static,
    T: Record,
{
    state.resource_service.delete::<T>(&id).await?;
    Ok(DeleteResponse::Ok)
}
