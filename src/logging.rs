//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{AUTHORIZATION, CONTENT_LENGTH},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{Error, response::render_error};

/// Bodies longer than this many bytes are truncated in `info` level logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Requests with a body larger than this many bytes are rejected with 413
/// before they reach any handler.
///
/// Matches axum's default body limit for extractors.
pub const REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

const REDACTED: &str = "********";

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and logged in full at the `debug` level.
///
/// The value of the `authorization` header is never logged.
///
/// Request bodies are read into memory, so requests whose body is larger than
/// [REQUEST_BODY_LIMIT] bytes are answered with 413 without being passed on.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    if declared_body_length(&parts.headers).is_some_and(|length| length > REQUEST_BODY_LIMIT) {
        tracing::warn!(
            "Rejected {} {}: declared body is larger than {REQUEST_BODY_LIMIT} bytes",
            parts.method,
            parts.uri
        );
        return Error::PayloadTooLarge.into_response();
    }

    let body = match to_bytes(body, REQUEST_BODY_LIMIT).await {
        Ok(body) => body,
        Err(error) => {
            tracing::warn!(
                "Rejected {} {}: could not read body within {REQUEST_BODY_LIMIT} bytes: {error}",
                parts.method,
                parts.uri
            );
            return Error::PayloadTooLarge.into_response();
        }
    };

    log_message(
        &format!("Received request: {} {}", parts.method, parts.uri),
        &parts.headers,
        &body,
    );

    let request = Request::from_parts(parts, Body::from(body));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return render_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "An unexpected error occurred, check the server logs for more details.",
            );
        }
    };

    log_message(
        &format!("Sending response: {}", parts.status),
        &parts.headers,
        &body,
    );

    Response::from_parts(parts, Body::from(body))
}

fn log_message(summary: &str, headers: &HeaderMap, body: &Bytes) {
    let headers = redact_headers(headers);
    let body = String::from_utf8_lossy(body);

    match truncate_body(&body) {
        Some(truncated) => {
            tracing::info!("{summary}\nheaders: {headers:#?}\nbody: {truncated}...");
            tracing::debug!("Full body: {body:?}");
        }
        None => tracing::info!("{summary}\nheaders: {headers:#?}\nbody: {body:?}"),
    }
}

fn declared_body_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

fn redact_headers(headers: &HeaderMap) -> HeaderMap {
    let mut headers = headers.clone();

    if let Some(value) = headers.get_mut(AUTHORIZATION) {
        *value = HeaderValue::from_static(REDACTED);
    }

    headers
}

/// The first [LOG_BODY_LENGTH_LIMIT] bytes of `body`, rounded down to a
/// character boundary, or `None` if `body` is short enough to log in full.
fn truncate_body(body: &str) -> Option<&str> {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return None;
    }

    let end = (0..=LOG_BODY_LENGTH_LIMIT)
        .rev()
        .find(|&index| body.is_char_boundary(index))
        .unwrap_or(0);

    Some(&body[..end])
}
