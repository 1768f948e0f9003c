use uuid::Uuid;

use crate::domain::entities::{NewResult, ResultRecord, ShotStatus};
use crate::domain::errors::ResultsError;
use crate::domain::ports::{Clock, ResultStore};
use crate::interface_adapters::protocol::{NumericInput, SaveResultRequest};

// Response returned by the save use case.
pub struct SaveResultResponse {
    pub id: String,
    pub status: ShotStatus,
}

// Save use case with injected dependencies.
pub struct SaveResultUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> SaveResultUseCase<C, S>
where
    C: Clock,
    S: ResultStore,
{
    pub async fn execute(
        &self,
        payload: SaveResultRequest,
    ) -> Result<SaveResultResponse, ResultsError> {
        let result = validate_request(payload)?;

        let record = ResultRecord {
            id: Uuid::new_v4().to_string(),
            angle: result.angle,
            speed: result.speed,
            max_height: result.max_height,
            range: result.range,
            time: result.time,
            scored: result.scored,
            timestamp: self.clock.now(),
        };
        let id = record.id.clone();
        let status = record.status();

        self.store
            .insert(record)
            .await
            .map_err(ResultsError::StorageFailure)?;

        Ok(SaveResultResponse { id, status })
    }
}

fn validate_request(payload: SaveResultRequest) -> Result<NewResult, ResultsError> {
    let (Some(angle), Some(speed), Some(scored)) = (payload.angle, payload.speed, payload.scored)
    else {
        return Err(ResultsError::MissingRequiredFields);
    };

    Ok(NewResult {
        angle: finite(Some(angle), "angle")?,
        speed: finite(Some(speed), "speed")?,
        max_height: finite(payload.max_height, "maxHeight")?,
        range: finite(payload.range, "range")?,
        time: finite(payload.time, "time")?,
        scored,
    })
}

fn finite(value: Option<NumericInput>, field: &'static str) -> Result<f64, ResultsError> {
    value
        .as_ref()
        .and_then(NumericInput::to_finite)
        .ok_or(ResultsError::InvalidNumber(field))
}
