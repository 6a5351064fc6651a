//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod cities;
#[allow(clippy::missing_errors_doc)]
pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod records;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod states;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use hbnb_app::ports::Storage;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::state::AppState;

/// Build the API router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: Storage + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(index::status))
        .route("/stats", get(index::stats::<S>))
        // States
        .route(
            "/states",
            get(records::list::<S, State>).post(states::create::<S>),
        )
        .route(
            "/states/{id}",
            get(records::get::<S, State>)
                .put(records::update::<S, State>)
                .delete(records::delete::<S, State>),
        )
        // Cities
        .route(
            "/states/{id}/cities",
            get(records::list_children::<S, City>).post(cities::create::<S>),
        )
        .route(
            "/cities/{id}",
            get(records::get::<S, City>)
                .put(records::update::<S, City>)
                .delete(records::delete::<S, City>),
        )
        // Places
        .route(
            "/cities/{id}/places",
            get(records::list_children::<S, Place>).post(places::create::<S>),
        )
        .route(
            "/places/{id}",
            get(records::get::<S, Place>)
                .put(records::update::<S, Place>)
                .delete(records::delete::<S, Place>),
        )
        // Reviews
        .route(
            "/places/{id}/reviews",
            get(records::list_children::<S, Review>).post(reviews::create::<S>),
        )
        .route(
            "/reviews/{id}",
            get(records::get::<S, Review>)
                .put(records::update::<S, Review>)
                .delete(records::delete::<S, Review>),
        )
        // Users
        .route(
            "/users",
            get(records::list::<S, User>).post(users::create::<S>),
        )
        .route(
            "/users/{id}",
            get(records::get::<S, User>)
                .put(records::update::<S, User>)
                .delete(records::delete::<S, User>),
        )
        // Amenities
        .route(
            "/amenities",
            get(records::list::<S, Amenity>).post(amenities::create::<S>),
        )
        .route(
            "/amenities/{id}",
            get(records::get::<S, Amenity>)
                .put(records::update::<S, Amenity>)
                .delete(records::delete::<S, Amenity>),
        )
}
