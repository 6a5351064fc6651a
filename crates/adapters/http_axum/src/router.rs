//! Axum router assembly.

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::Storage;
use hbnb_domain::error::{HbnbError, NotFoundError};

use crate::error::{ApiError, error_response};
use crate::state::AppState;

/// The complete HTTP service: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

/// Build the top-level HTTP service.
///
/// Serves the API routes at the root, answers unknown paths with
/// `404 {"error": "Not found"}` and unsupported methods with
/// `405 {"error": "Method not allowed"}`, and wraps everything in a
/// [`TraceLayer`] (each request/response is logged at `DEBUG`) and a
/// permissive [`CorsLayer`].
///
/// Trailing slashes are trimmed before routing, so `/states/` and `/states`
/// reach the same handler.
pub fn build<S>(state: AppState<S>) -> App
where
    S: Storage + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .merge(crate::api::routes::<S>())
        .fallback(unknown_route)
        .method_not_allowed_fallback(unsupported_method)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

async fn unknown_route(uri: Uri) -> ApiError {
    HbnbError::from(NotFoundError {
        entity: "Route",
        id: uri.path().to_string(),
    })
    .into()
}

async fn unsupported_method() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
