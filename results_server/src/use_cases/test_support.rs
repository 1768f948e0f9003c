use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::ResultRecord;
use crate::domain::ports::{Clock, ResultStore};
use crate::interface_adapters::protocol::SaveResultRequest;

pub(crate) type RecordTable = Arc<Mutex<Vec<ResultRecord>>>;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_epoch_seconds(seconds: i64) -> Self {
        Self(
            Utc.timestamp_opt(seconds, 0)
                .single()
                .expect("valid test timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub list: bool,
    pub clear: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    records: RecordTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_record(&self, record: ResultRecord) {
        let mut guard = self.records.lock().expect("records mutex poisoned");
        guard.push(record);
    }

    pub(crate) fn stored_records(&self) -> Vec<ResultRecord> {
        let guard = self.records.lock().expect("records mutex poisoned");
        guard.clone()
    }
}

#[async_trait]
impl ResultStore for RecordingStore {
    async fn insert(&self, record: ResultRecord) -> Result<(), String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.records.lock().expect("records mutex poisoned");
        guard.push(record);
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<ResultRecord>, String> {
        if self.failures.list {
            return Err("list failed".to_string());
        }

        let guard = self.records.lock().expect("records mutex poisoned");
        let mut records: Vec<ResultRecord> = guard.iter().rev().cloned().collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    async fn clear(&self) -> Result<u64, String> {
        if self.failures.clear {
            return Err("clear failed".to_string());
        }

        let mut guard = self.records.lock().expect("records mutex poisoned");
        let removed = guard.len() as u64;
        guard.clear();
        Ok(removed)
    }
}

// Record with a fixed id and timestamp for seeding stores.
pub(crate) fn sample_record(id: &str, epoch_seconds: i64, scored: bool) -> ResultRecord {
    ResultRecord {
        id: id.to_string(),
        angle: 45.0,
        speed: 20.0,
        max_height: 10.2,
        range: 40.8,
        time: 2.89,
        scored,
        timestamp: Utc
            .timestamp_opt(epoch_seconds, 0)
            .single()
            .expect("valid test timestamp"),
    }
}

// Fully populated save request matching the reference 45 degree shot.
pub(crate) fn miss_request() -> SaveResultRequest {
    SaveResultRequest {
        angle: Some(45.0.into()),
        speed: Some(20.0.into()),
        max_height: Some(10.2.into()),
        range: Some(40.8.into()),
        time: Some(2.89.into()),
        scored: Some(false),
    }
}
