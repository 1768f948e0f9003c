use async_trait::async_trait;

use crate::domain::state::FlightSummary;

// Port receiving finished runs; returns the stored record id.
#[async_trait]
pub trait ResultSink: Send + Sync + 'static {
    async fn record(&self, summary: FlightSummary) -> Result<String, String>;
}
