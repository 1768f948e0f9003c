use crate::domain::errors::ResultsError;
use crate::interface_adapters::protocol::{
    ClearHistoryResponse, ErrorResponse, HistoryResponse, SaveResultRequest, SaveResultResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::clear_history::ClearHistoryUseCase;
use crate::use_cases::list_history::ListHistoryUseCase;
use crate::use_cases::save_result::SaveResultUseCase;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{error, info};

type ErrorReply = (StatusCode, Json<ErrorResponse>);

// Handler for persisting a completed simulation run.
#[tracing::instrument(name = "save_result", skip_all)]
pub async fn save_result(
    State(state): State<AppState>,
    payload: Result<Json<SaveResultRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResultResponse>), ErrorReply> {
    let payload = read_save_body(payload)?;
    let use_case = SaveResultUseCase {
        clock: SystemClock,
        store: state.store.clone(),
    };

    let result = use_case
        .execute(payload)
        .await
        .map_err(|err| map_results_error(err, ResultsErrorContext::Save))?;

    info!(id = %result.id, status = result.status.label(), "result saved");

    Ok((
        StatusCode::CREATED,
        Json(SaveResultResponse {
            message: "Result saved successfully!".to_string(),
            status: result.status.label().to_string(),
            id: result.id,
        }),
    ))
}

// Handler for listing every saved run, newest first.
#[tracing::instrument(name = "list_history", skip_all)]
pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, ErrorReply> {
    let use_case = ListHistoryUseCase {
        store: state.store.clone(),
    };

    let history = use_case
        .execute()
        .await
        .map_err(|err| map_results_error(err, ResultsErrorContext::List))?;

    Ok(Json(history))
}

// Handler for removing the whole history.
#[tracing::instrument(name = "clear_history", skip_all)]
pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Json<ClearHistoryResponse>, ErrorReply> {
    let use_case = ClearHistoryUseCase {
        store: state.store.clone(),
    };

    let result = use_case
        .execute()
        .await
        .map_err(|err| map_results_error(err, ResultsErrorContext::Clear))?;

    info!(deleted_count = result.deleted_count, "history cleared");

    Ok(Json(ClearHistoryResponse {
        message: "All history cleared successfully!".to_string(),
        deleted_count: result.deleted_count,
    }))
}

// A body without a JSON content type is read as `{}`; other body errors keep
// axum's status and text inside the JSON envelope.
fn read_save_body(
    payload: Result<Json<SaveResultRequest>, JsonRejection>,
) -> Result<SaveResultRequest, ErrorReply> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(SaveResultRequest::default()),
        Err(rejection) => Err(error_response(
            rejection.status(),
            &rejection.body_text(),
            None,
        )),
    }
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str, cause: Option<String>) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
            error: cause,
        }),
    )
}

// Maps domain errors to HTTP responses by endpoint context.
enum ResultsErrorContext {
    Save,
    List,
    Clear,
}

fn map_results_error(err: ResultsError, context: ResultsErrorContext) -> ErrorReply {
    match err {
        ResultsError::MissingRequiredFields => {
            error_response(StatusCode::BAD_REQUEST, "Missing required fields.", None)
        }
        ResultsError::InvalidNumber(field) => error_response(
            StatusCode::BAD_REQUEST,
            &format!("{field} must be a number"),
            None,
        ),
        ResultsError::StorageFailure(cause) => {
            let message = match context {
                ResultsErrorContext::Save => "Failed to save result",
                ResultsErrorContext::List => "Failed to fetch history",
                ResultsErrorContext::Clear => "Failed to clear history",
            };
            error!(error = %cause, "{message}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message, Some(cause))
        }
    }
}
