//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error, app_state::TransactionState, database_id::TransactionId, response::render_message,
    transaction::form::path_transaction_id,
};

/// A route handler for deleting a transaction.
///
/// Deleting is not idempotent: deleting a transaction that has already been
/// deleted responds with 404.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Response, Error> {
    let transaction_id = path_transaction_id(path)?;

    state.lock_service()?.delete(transaction_id)?;
    tracing::info!("Deleted transaction {transaction_id}");

    Ok(render_message(
        StatusCode::OK,
        "Transaction deleted successfully",
    ))
}
