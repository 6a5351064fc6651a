//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::Storage;
use hbnb_app::services::resource_service::ResourceService;

/// Application state shared across all axum handlers.
///
/// Generic over the storage type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the storage itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Record CRUD service.
    pub resource_service: Arc<ResourceService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            resource_service: Arc::clone(&self.resource_service),
        }
    }
}

impl<S> AppState<S>
where
    S: Storage + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(resource_service: ResourceService<S>) -> Self {
        Self {
            resource_service: Arc::new(resource_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with other tasks before the HTTP
    /// state is constructed.
    pub fn from_arc(resource_service: Arc<ResourceService<S>>) -> Self {
        Self { resource_service }
    }
}
