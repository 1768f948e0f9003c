use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::FlightSummary;

// Body posted to the results service for a finished run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResultPayload {
    pub angle: f64,
    pub speed: f64,
    pub max_height: f64,
    pub range: f64,
    pub time: f64,
    pub scored: bool,
}

impl From<&FlightSummary> for SaveResultPayload {
    fn from(summary: &FlightSummary) -> Self {
        Self {
            angle: summary.angle,
            speed: summary.speed,
            max_height: summary.max_height,
            range: summary.range,
            time: summary.time,
            scored: summary.scored,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveAck {
    pub message: String,
    pub status: String,
    pub id: String,
}

// One stored run as listed by the results service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: String,
    pub angle: f64,
    pub speed: f64,
    pub max_height: f64,
    pub range: f64,
    pub time: f64,
    pub scored: bool,
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn summary(&self) -> FlightSummary {
        FlightSummary {
            angle: self.angle,
            speed: self.speed,
            max_height: self.max_height,
            range: self.range,
            time: self.time,
            scored: self.scored,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAck {
    pub message: String,
    pub deleted_count: u64,
}

// Error envelope returned by the results service.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
}
