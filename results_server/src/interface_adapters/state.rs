use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::ResultRecord;
use crate::domain::ports::{Clock, ResultStore};

// Application state holding the result store backend.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResultStore>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(InMemoryResultStore::default()),
        }
    }

    pub fn postgres(db: PgPool) -> Self {
        Self {
            store: Arc::new(PostgresResultStore { db }),
        }
    }
}

// In-memory result store adapter for tests and local runs.
#[derive(Clone, Default)]
pub struct InMemoryResultStore {
    pub records: Arc<Mutex<Vec<ResultRecord>>>,
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn insert(&self, record: ResultRecord) -> Result<(), String> {
        let mut records = self.records.lock().await;
        records.push(record);
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<ResultRecord>, String> {
        let records = self.records.lock().await;
        // Reverse first so equal timestamps keep newest-insert-first after the stable sort.
        let mut listed: Vec<ResultRecord> = records.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(listed)
    }

    async fn clear(&self) -> Result<u64, String> {
        let mut records = self.records.lock().await;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }
}

// PostgreSQL-backed result store for persistence.
#[derive(Clone)]
pub struct PostgresResultStore {
    pub db: PgPool,
}

#[derive(FromRow)]
struct ResultRow {
    id: Uuid,
    angle: f64,
    speed: f64,
    max_height: f64,
    range_m: f64,
    flight_time: f64,
    scored: bool,
    recorded_at: DateTime<Utc>,
}

impl From<ResultRow> for ResultRecord {
    fn from(row: ResultRow) -> Self {
        Self {
            id: row.id.to_string(),
            angle: row.angle,
            speed: row.speed,
            max_height: row.max_height,
            range: row.range_m,
            time: row.flight_time,
            scored: row.scored,
            timestamp: row.recorded_at,
        }
    }
}

#[async_trait]
impl ResultStore for PostgresResultStore {
    async fn insert(&self, record: ResultRecord) -> Result<(), String> {
        let id = Uuid::parse_str(&record.id).map_err(|e| e.to_string())?;

        sqlx::query(
            r#"
            INSERT INTO simulation_results
                (id, angle, speed, max_height, range_m, flight_time, scored, recorded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(record.angle)
        .bind(record.speed)
        .bind(record.max_height)
        .bind(record.range)
        .bind(record.time)
        .bind(record.scored)
        .bind(record.timestamp)
        .execute(&self.db)
        .await
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<ResultRecord>, String> {
        let rows = sqlx::query_as::<_, ResultRow>(
            r#"
            SELECT id, angle, speed, max_height, range_m, flight_time, scored, recorded_at
            FROM simulation_results
            ORDER BY recorded_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| e.to_string())?;

        Ok(rows.into_iter().map(ResultRecord::from).collect())
    }

    async fn clear(&self) -> Result<u64, String> {
        let result = sqlx::query("DELETE FROM simulation_results")
            .execute(&self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(result.rows_affected())
    }
}

// System clock adapter used by the save use case.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
