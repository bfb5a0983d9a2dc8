//! The fallback response for requests that match no route.

use axum::{http::StatusCode, response::Response};

use crate::response::render_error;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    render_error(
        StatusCode::NOT_FOUND,
        "Not found",
        "the requested route does not exist",
    )
}
