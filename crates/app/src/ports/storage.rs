//! Storage port — persistence for every [`Record`] type.
//!
//! One implementation serves all record types: methods are generic over the
//! record and adapters key their data by [`Record::KIND`] or
//! [`Record::COLLECTION`]. Every write is durable once its future resolves;
//! there is no separate flush step and no cross-record transaction.

use std::future::Future;

use hbnb_domain::error::HbnbError;
use hbnb_domain::record::{Owned, Record};

/// Object persistence keyed by record type and identifier.
pub trait Storage {
    /// Get a record by its unique identifier.
    fn get<T: Record>(
        &self,
        id: T::Id,
    ) -> impl Future<Output = Result<Option<T>, HbnbError>> + Send;

    /// Get every record of type `T`, oldest first.
    fn all<T: Record>(&self) -> impl Future<Output = Result<Vec<T>, HbnbError>> + Send;

    /// Get every `T` owned by the given parent, oldest first.
    fn children<T: Owned>(
        &self,
        parent_id: <T::Parent as Record>::Id,
    ) -> impl Future<Output = Result<Vec<T>, HbnbError>> + Send;

    /// Persist a new record.
    fn insert<T: Record>(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send;

    /// Persist changes to an existing record.
    fn update<T: Record>(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send;

    /// Remove a record. Removing an absent record is not an error.
    fn delete<T: Record>(&self, id: T::Id) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Count stored records of type `T`.
    fn count<T: Record>(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}
