//! # hbnb-adapter-storage-memory
//!
//! In-process implementation of the [`Storage`] port.
//!
//! Records are kept serialized, keyed by `<Kind>.<id>`, in a shared
//! [`DashMap`]. Nothing survives a restart: use it for tests and throwaway
//! instances, and the `SQLite` adapter for anything else.
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits) and `hbnb-domain` (for domain types).

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

use hbnb_app::ports::Storage;
use hbnb_domain::error::HbnbError;
use hbnb_domain::record::{Owned, Record};

/// Errors raised while (de)serializing stored records.
#[derive(Debug, thiserror::Error)]
pub enum MemoryStorageError {
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
}

impl From<MemoryStorageError> for HbnbError {
    fn from(err: MemoryStorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

fn key<T: Record>(id: T::Id) -> String {
    format!("{}.{id}", T::KIND)
}

/// Cloneable handle to a process-local object map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    objects: Arc<DashMap<String, Value>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn load<T: Record>(&self) -> Result<Vec<T>, MemoryStorageError> {
        let prefix = format!("{}.", T::KIND);
        let mut records = self
            .objects
            .iter()
            .filter(|entry| entry.key().starts_with(&prefix))
            .map(|entry| serde_json::from_value::<T>(entry.value().clone()))
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by(|a, b| {
            (a.created_at(), a.id().to_string()).cmp(&(b.created_at(), b.id().to_string()))
        });
        Ok(records)
    }

    fn save<T: Record>(&self, record: &T) -> Result<(), MemoryStorageError> {
        let value = serde_json::to_value(record)?;
        self.objects.insert(key::<T>(record.id()), value);
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get<T: Record>(
        &self,
        id: T::Id,
    ) -> impl Future<Output = Result<Option<T>, HbnbError>> + Send {
        let result = self
            .objects
            .get(&key::<T>(id))
            .map(|entry| serde_json::from_value::<T>(entry.value().clone()))
            .transpose()
            .map_err(MemoryStorageError::from);
        async { Ok(result?) }
    }

    fn all<T: Record>(&self) -> impl Future<Output = Result<Vec<T>, HbnbError>> + Send {
        let result = self.load::<T>();
        async { Ok(result?) }
    }

    fn children<T: Owned>(
        &self,
        parent_id: <T::Parent as Record>::Id,
    ) -> impl Future<Output = Result<Vec<T>, HbnbError>> + Send {
        let result = self.load::<T>().map(|records| {
            records
                .into_iter()
                .filter(|record| record.parent_id() == parent_id)
                .collect::<Vec<_>>()
        });
        async { Ok(result?) }
    }

    fn insert<T: Record>(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send {
        let result = self.save(&record).map(|()| record);
        async { Ok(result?) }
    }

    fn update<T: Record>(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send {
        let result = self.save(&record).map(|()| record);
        async { Ok(result?) }
    }

    fn delete<T: Record>(&self, id: T::Id) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.objects.remove(&key::<T>(id));
        async { Ok(()) }
    }

    fn count<T: Record>(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let prefix = format!("{}.", T::KIND);
        let count = self
            .objects
            .iter()
            .filter(|entry| entry.key().starts_with(&prefix))
            .count();
        async move { Ok(u64::try_from(count).unwrap_or_default()) }
    }
}
