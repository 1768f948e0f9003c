use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::ResultRecord;

// Port for result persistence used by the history use cases.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn insert(&self, record: ResultRecord) -> Result<(), String>;
    // Records ordered by timestamp, most recent first.
    async fn list_newest_first(&self) -> Result<Vec<ResultRecord>, String>;
    // Returns the number of removed records.
    async fn clear(&self) -> Result<u64, String>;
}

#[async_trait]
impl<T> ResultStore for Arc<T>
where
    T: ResultStore + ?Sized,
{
    async fn insert(&self, record: ResultRecord) -> Result<(), String> {
        (**self).insert(record).await
    }

    async fn list_newest_first(&self) -> Result<Vec<ResultRecord>, String> {
        (**self).list_newest_first().await
    }

    async fn clear(&self) -> Result<u64, String> {
        (**self).clear().await
    }
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
