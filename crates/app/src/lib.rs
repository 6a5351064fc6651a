//! # hbnb-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the [`Storage`](ports::Storage) port that persistence adapters
//!   implement (get, all, children, insert, update, delete, count)
//! - Define the driving use-cases in
//!   [`ResourceService`](services::resource_service::ResourceService): list,
//!   get, create, update and delete for every record type, plus stats
//! - Decide the order in which request checks run, so every adapter reports
//!   the same error for the same request
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
