//! Middleware that rejects requests without the configured token.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{Error, app_state::AuthState};

/// Middleware function that checks the `authorization` header against the
/// server's token.
///
/// The request is executed normally if the header matches exactly, otherwise
/// a 401 response is returned and the request never reaches its handler.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if token != Some(state.auth_token.as_str()) {
        tracing::warn!(
            "Rejected {} {}: missing or invalid token",
            request.method(),
            request.uri()
        );
        return Error::Unauthorized.into_response();
    }

    next.run(request).await
}
