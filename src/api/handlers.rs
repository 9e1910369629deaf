use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::databricks::ForwardError;
use crate::AppState;

use super::models::{ChatRequest, ErrorResponse};

pub async fn chat(State(state): State<AppState>, Json(payload): Json<ChatRequest>) -> Response {
    match state.forwarder.forward(&payload.prompt).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

/// Translate a forwarding failure into its status code and fixed client
/// message. Internal detail stays in the server log.
fn error_response(err: &ForwardError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match err {
        ForwardError::MissingPrompt => (StatusCode::BAD_REQUEST, "Prompt is required"),
        ForwardError::EmptyDownstreamResponse => (StatusCode::NOT_FOUND, "No data found"),
        ForwardError::DownstreamUnavailable(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Sorry something went wrong.")
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
