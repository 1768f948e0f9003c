use async_trait::async_trait;
use reqwest::Response;
use std::fmt;
use std::time::Duration;

use crate::domain::FlightSummary;
use crate::domain::ports::ResultSink;
use crate::interface_adapters::protocol::{
    ClearAck, ErrorResponse, HistoryRecord, SaveAck, SaveResultPayload,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsClientError {
    // 4xx: the service refused the payload.
    Rejected(String),
    // 5xx: the service could not reach its storage.
    StorageFailure(String),
    // Transport failure, timeout or an unreadable body.
    Unavailable(String),
}

impl fmt::Display for ResultsClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(message) => write!(f, "results service rejected the request: {message}"),
            Self::StorageFailure(message) => write!(f, "results service storage failure: {message}"),
            Self::Unavailable(message) => write!(f, "results service unavailable: {message}"),
        }
    }
}

impl std::error::Error for ResultsClientError {}

// Thin reqwest client for the results service.
#[derive(Clone)]
pub struct ResultsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ResultsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn save_result(&self, summary: &FlightSummary) -> Result<SaveAck, ResultsClientError> {
        let url = format!("{}/api/save-result", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&SaveResultPayload::from(summary))
            .send()
            .await
            .map_err(unavailable)?;

        decode(response).await
    }

    pub async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ResultsClientError> {
        let url = format!("{}/api/history", self.base_url);
        let response = self.http.get(url).send().await.map_err(unavailable)?;

        decode(response).await
    }

    // Returns how many records the service deleted.
    pub async fn clear_history(&self) -> Result<u64, ResultsClientError> {
        let url = format!("{}/api/history", self.base_url);
        let response = self.http.delete(url).send().await.map_err(unavailable)?;

        let ack: ClearAck = decode(response).await?;
        Ok(ack.deleted_count)
    }
}

#[async_trait]
impl ResultSink for ResultsClient {
    async fn record(&self, summary: FlightSummary) -> Result<String, String> {
        self.save_result(&summary)
            .await
            .map(|ack| ack.id)
            .map_err(|error| error.to_string())
    }
}

fn unavailable(error: reqwest::Error) -> ResultsClientError {
    ResultsClientError::Unavailable(error.to_string())
}

async fn decode<T>(response: Response) -> Result<T, ResultsClientError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(unavailable);
    }

    // Prefer the service's own message; fall back to the status line.
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => match body.error {
            Some(cause) => format!("{}: {cause}", body.message),
            None => body.message,
        },
        Err(_) => status.to_string(),
    };

    if status.is_client_error() {
        Err(ResultsClientError::Rejected(message))
    } else if status.is_server_error() {
        Err(ResultsClientError::StorageFailure(message))
    } else {
        Err(ResultsClientError::Unavailable(message))
    }
}
