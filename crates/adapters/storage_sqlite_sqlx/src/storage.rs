//! `SQLite` implementation of [`Storage`].
//!
//! Every collection lives in its own table named after
//! [`Record::COLLECTION`]. Rows keep the record's id and timestamps in
//! dedicated columns for ordering, and the full serialized record in `data`.

use std::future::Future;

use sqlx::SqlitePool;

use hbnb_app::ports::Storage;
use hbnb_domain::error::HbnbError;
use hbnb_domain::record::{Owned, Record};
use hbnb_domain::time;

use crate::error::StorageError;

fn decode<T: Record>(data: &str) -> Result<T, StorageError> {
    Ok(serde_json::from_str(data)?)
}

fn decode_all<T: Record>(rows: Vec<String>) -> Result<Vec<T>, StorageError> {
    rows.iter().map(|data| decode(data)).collect()
}

/// `SQLite`-backed storage for every record type.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Create a new storage using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Storage for SqliteStorage {
    fn get<T: Record>(
        &self,
        id: T::Id,
    ) -> impl Future<Output = Result<Option<T>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!("SELECT data FROM {} WHERE id = ?", T::COLLECTION);
            let row: Option<String> = sqlx::query_scalar(&sql)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.as_deref().map(decode).transpose()?)
        }
    }

    fn all<T: Record>(&self) -> impl Future<Output = Result<Vec<T>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!(
                "SELECT data FROM {} ORDER BY created_at, id",
                T::COLLECTION
            );
            let rows: Vec<String> = sqlx::query_scalar(&sql)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(decode_all(rows)?)
        }
    }

    fn children<T: Owned>(
        &self,
        parent_id: <T::Parent as Record>::Id,
    ) -> impl Future<Output = Result<Vec<T>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!(
                "SELECT data FROM {} WHERE json_extract(data, '$.{}') = ? ORDER BY created_at, id",
                T::COLLECTION,
                T::PARENT_KEY
            );
            let rows: Vec<String> = sqlx::query_scalar(&sql)
                .bind(parent_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(decode_all(rows)?)
        }
    }

    fn insert<T: Record>(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!(
                "INSERT INTO {} (id, created_at, updated_at, data) VALUES (?, ?, ?, ?)",
                T::COLLECTION
            );
            let data = serde_json::to_string(&record).map_err(StorageError::from)?;
            sqlx::query(&sql)
                .bind(record.id().to_string())
                .bind(time::format(&record.created_at()))
                .bind(time::format(&record.updated_at()))
                .bind(data)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(record)
        }
    }

    fn update<T: Record>(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!(
                "UPDATE {} SET updated_at = ?, data = ? WHERE id = ?",
                T::COLLECTION
            );
            let data = serde_json::to_string(&record).map_err(StorageError::from)?;
            sqlx::query(&sql)
                .bind(time::format(&record.updated_at()))
                .bind(data)
                .bind(record.id().to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(record)
        }
    }

    fn delete<T: Record>(&self, id: T::Id) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!("DELETE FROM {} WHERE id = ?", T::COLLECTION);
            sqlx::query(&sql)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn count<T: Record>(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!("SELECT COUNT(*) FROM {}", T::COLLECTION);
            let count: i64 = sqlx::query_scalar(&sql)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(u64::try_from(count).unwrap_or_default())
        }
    }
}
