//! The JSON envelope shared by every API response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The body of every API response.
///
/// Successful responses carry `data` (unless there is nothing to return) and
/// never `error`; error responses carry `error` and never `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The HTTP status code as a string, e.g. "200".
    pub code: String,
    /// A short, human readable summary of the outcome.
    pub message: String,
    /// The payload of a successful response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// What went wrong, for error responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Respond with `data` wrapped in an [ApiResponse].
#[inline]
pub fn render<T: Serialize>(status_code: StatusCode, message: &str, data: T) -> Response {
    respond(status_code, message, Some(data), None)
}

/// Respond with an [ApiResponse] that has neither data nor an error.
#[inline]
pub fn render_message(status_code: StatusCode, message: &str) -> Response {
    respond::<()>(status_code, message, None, None)
}

/// Respond with an [ApiResponse] describing an error.
#[inline]
pub fn render_error(status_code: StatusCode, message: &str, error: &str) -> Response {
    respond::<()>(status_code, message, None, Some(error.to_owned()))
}

fn respond<T: Serialize>(
    status_code: StatusCode,
    message: &str,
    data: Option<T>,
    error: Option<String>,
) -> Response {
    let body = ApiResponse {
        code: status_code.as_u16().to_string(),
        message: message.to_owned(),
        data,
        error,
    };

    (status_code, Json(body)).into_response()
}
