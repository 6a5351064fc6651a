//! # hbnb-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for states, cities, places, reviews, users
//!   and amenities, plus `/status` and `/stats`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses; every error body
//!   has the shape `{"error": "<message>"}`
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits and services) and `hbnb-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
