//! A JSON REST API for managing a collection of transactions.
//!
//! Transactions are kept in a single JSON file. Every operation loads the
//! whole collection from the file, works on it in memory and, if it changed
//! anything, writes the whole collection back.
//!
//! The layers, from the file up:
//! - a [Store] reads and writes the collection,
//! - a [TransactionRepository] runs the load, mutate, persist cycles,
//! - a [TransactionService] assigns IDs and filters search results,
//! - the router from [build_router] exposes the service over HTTP.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod auth;
mod database_id;
mod endpoints;
mod logging;
mod not_found;
mod response;
mod routing;
mod stores;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::TransactionId;
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware};
pub use response::ApiResponse;
pub use routing::build_router;
pub use stores::{JsonFileStore, Store, StoreError};
pub use transaction::{
    Transaction, TransactionFields, TransactionFilter, TransactionRepository, TransactionService,
};

use crate::response::render_error;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transactions could not be loaded from the store.
    ///
    /// This covers both a missing or unreadable store file and a store file
    /// with invalid contents.
    #[error("could not read from the store: {0}")]
    Read(StoreError),

    /// The transactions could not be saved to the store.
    ///
    /// The change that was being saved is lost. The store keeps whatever it
    /// held before the failed write.
    #[error("could not write to the store: {0}")]
    Write(StoreError),

    /// A query matched no transactions.
    ///
    /// Note that an empty store is reported as this error too, rather than as
    /// an empty list.
    #[error("no transactions were found")]
    Empty,

    /// No transaction has the requested ID.
    #[error("the transaction {0} could not be found")]
    NotFound(TransactionId),

    /// The request path, query or body could not be used.
    ///
    /// The string describes what was wrong and is safe to show to clients.
    #[error("{0}")]
    InvalidRequest(String),

    /// The request body is larger than [REQUEST_BODY_LIMIT] bytes.
    #[error("the request body must not be larger than {} bytes", REQUEST_BODY_LIMIT)]
    PayloadTooLarge,

    /// The request did not carry the expected authorization token.
    #[error("missing or invalid authorization token")]
    Unauthorized,

    /// Could not acquire the store lock
    #[error("could not acquire the store lock")]
    StoreLockError,

    /// The largest ID in the store is already the largest possible ID, so no
    /// new transaction can be given one.
    #[error("no transaction IDs are left after {0}")]
    IdsExhausted(TransactionId),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            Error::Empty => (StatusCode::NOT_FOUND, "No transactions were found"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "The transaction could not be found"),
            Error::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "The request is not valid"),
            Error::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "The request is too large"),
            Error::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "You do not have permission to make this request",
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                return render_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                );
            }
        };

        render_error(status_code, message, &self.to_string())
    }
}
