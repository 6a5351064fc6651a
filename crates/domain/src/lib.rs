//! # hbnb-domain
//!
//! Pure domain model for the hbnb rental listing API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - The [`Record`](record::Record) contract shared by every stored object
//! - Define **States** and their **Cities**
//! - Define **Places** (listings in a city, hosted by a user) and their **Reviews**
//! - Define **Users** and **Amenities**
//! - Enforce which attributes a client may write
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod record;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod stats;
pub mod user;
