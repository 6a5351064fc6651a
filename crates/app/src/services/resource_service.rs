//! Resource service — list/get/create/update/delete for every record type.
//!
//! Identifiers arrive as raw strings from the driving adapter. A record is
//! found only under the exact string it was created with: a string that does
//! not parse as the record's id type, or that parses but is spelled
//! differently (uppercase, braced, `urn:uuid:`), is reported as
//! [`NotFoundError`] rather than as a validation failure.

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::UserId;
use hbnb_domain::place::Place;
use hbnb_domain::record::{self, Attributes, Owned, Record};
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::stats::Stats;
use hbnb_domain::time::now;
use hbnb_domain::user::User;
use serde_json::Value;

use crate::ports::Storage;

fn not_found<T: Record>(id: &str) -> HbnbError {
    NotFoundError {
        entity: T::KIND,
        id: id.to_string(),
    }
    .into()
}

/// Application service for record CRUD operations.
pub struct ResourceService<S> {
    storage: S,
}

impl<S: Storage> ResourceService<S> {
    /// Create a new service backed by the given storage.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Look up a record by raw id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no record with `id` exists,
    /// or a storage error from the backend.
    pub async fn get<T: Record>(&self, id: &str) -> Result<T, HbnbError> {
        let Some(typed) = id
            .parse::<T::Id>()
            .ok()
            .filter(|typed| typed.to_string() == id)
        else {
            return Err(not_found::<T>(id));
        };
        self.storage
            .get::<T>(typed)
            .await?
            .ok_or_else(|| not_found::<T>(id))
    }

    /// List every record of type `T`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the backend.
    pub async fn list<T: Record>(&self) -> Result<Vec<T>, HbnbError> {
        self.storage.all::<T>().await
    }

    /// List the records of type `T` owned by the parent with id `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the parent does not exist,
    /// or a storage error from the backend.
    pub async fn list_children<T: Owned>(&self, parent_id: &str) -> Result<Vec<T>, HbnbError> {
        let parent: T::Parent = self.get(parent_id).await?;
        self.storage.children::<T>(parent.id()).await
    }

    /// Overwrite the non-protected attributes of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the record does not exist,
    /// or a storage error from the backend.
    pub async fn update<T: Record>(&self, id: &str, body: Attributes) -> Result<T, HbnbError> {
        let mut record: T = self.get(id).await?;
        record.apply(body);
        record.touch(now());
        self.storage.update(record).await
    }

    /// Delete an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the record does not exist,
    /// or a storage error from the backend.
    pub async fn delete<T: Record>(&self, id: &str) -> Result<(), HbnbError> {
        let record: T = self.get(id).await?;
        self.storage.delete::<T>(record.id()).await?;
        tracing::debug!(kind = T::KIND, id = %record.id(), "record deleted");
        Ok(())
    }

    /// Create a state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is missing,
    /// or a storage error from the backend.
    pub async fn create_state(&self, body: Attributes) -> Result<State, HbnbError> {
        let state = State::from_body(body)?;
        self.insert(state).await
    }

    /// Create a city in the state `state_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist,
    /// [`HbnbError::Validation`] when `name` is missing,
    /// or a storage error from the backend.
    pub async fn create_city(&self, state_id: &str, body: Attributes) -> Result<City, HbnbError> {
        let state: State = self.get(state_id).await?;
        let city = City::from_body(state.id, body)?;
        self.insert(city).await
    }

    /// Create a place in the city `city_id`, hosted by the body's `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city or the user does not
    /// exist, [`HbnbError::Validation`] when `user_id` or `name` is missing,
    /// or a storage error from the backend.
    pub async fn create_place(
        &self,
        city_id: &str,
        mut body: Attributes,
    ) -> Result<Place, HbnbError> {
        let city: City = self.get(city_id).await?;
        let user_id = self.resolve_user(&mut body).await?;
        let place = Place::from_body(city.id, user_id, body)?;
        self.insert(place).await
    }

    /// Create a review of the place `place_id`, written by the body's `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place or the user does not
    /// exist, [`HbnbError::Validation`] when `user_id` or `text` is missing,
    /// or a storage error from the backend.
    pub async fn create_review(
        &self,
        place_id: &str,
        mut body: Attributes,
    ) -> Result<Review, HbnbError> {
        let place: Place = self.get(place_id).await?;
        let user_id = self.resolve_user(&mut body).await?;
        let review = Review::from_body(place.id, user_id, body)?;
        self.insert(review).await
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `email` or `password` is
    /// missing, or a storage error from the backend.
    pub async fn create_user(&self, body: Attributes) -> Result<User, HbnbError> {
        let user = User::from_body(body)?;
        self.insert(user).await
    }

    /// Create an amenity.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is missing,
    /// or a storage error from the backend.
    pub async fn create_amenity(&self, body: Attributes) -> Result<Amenity, HbnbError> {
        let amenity = Amenity::from_body(body)?;
        self.insert(amenity).await
    }

    /// Count stored objects of every type.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the backend.
    pub async fn stats(&self) -> Result<Stats, HbnbError> {
        Ok(Stats {
            amenities: self.storage.count::<Amenity>().await?,
            cities: self.storage.count::<City>().await?,
            places: self.storage.count::<Place>().await?,
            reviews: self.storage.count::<Review>().await?,
            states: self.storage.count::<State>().await?,
            users: self.storage.count::<User>().await?,
        })
    }

    async fn insert<T: Record>(&self, record: T) -> Result<T, HbnbError> {
        let created = self.storage.insert(record).await?;
        tracing::debug!(kind = T::KIND, id = %created.id(), "record created");
        Ok(created)
    }

    /// Take `user_id` out of `body` and check that it names a stored user.
    async fn resolve_user(&self, body: &mut Attributes) -> Result<UserId, HbnbError> {
        let user: User = match record::require(body, "user_id")? {
            Value::String(raw) => self.get(&raw).await?,
            other => return Err(not_found::<User>(&other.to_string())),
        };
        Ok(user.id)
    }
}
