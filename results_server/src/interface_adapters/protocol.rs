use serde::{Deserialize, Serialize};

use crate::domain::entities::ResultRecord;

// Numeric field as sent by the browser: a JSON number or a numeric string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    // Finite value or None; "NaN" and infinities are rejected here.
    pub fn to_finite(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

// Request payload for saving a completed run.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResultRequest {
    pub angle: Option<NumericInput>,
    pub speed: Option<NumericInput>,
    pub max_height: Option<NumericInput>,
    pub range: Option<NumericInput>,
    pub time: Option<NumericInput>,
    pub scored: Option<bool>,
}

// Response payload for a saved run.
#[derive(Debug, Serialize)]
pub struct SaveResultResponse {
    pub message: String,
    pub status: String,
    pub id: String,
}

// History is served as the bare record list.
pub type HistoryResponse = Vec<ResultRecord>;

// Response payload for clearing the history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearHistoryResponse {
    pub message: String,
    pub deleted_count: u64,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
