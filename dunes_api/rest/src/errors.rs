use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{contact::ApiIssue, ApiError};

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    server_error(err.into(), "Internal server error")
}

/// A contact message could not be stored. The cause is logged, never returned.
pub fn send_message_failed(err: impl Into<anyhow::Error>) -> Response {
    server_error(err.into(), "Failed to send message")
}

pub fn invalid_form_data(details: Vec<ApiIssue>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            error: "Invalid form data",
            details: Some(details),
        }),
    )
        .into_response()
}

fn server_error(err: anyhow::Error, message: &'static str) -> Response {
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn error(code: StatusCode, message: &'static str) -> Response {
    (
        code,
        Json(ApiError {
            error: message,
            details: None,
        }),
    )
        .into_response()
}
