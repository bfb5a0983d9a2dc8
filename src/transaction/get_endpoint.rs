//! Defines the endpoint for getting a single transaction.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error, app_state::TransactionState, database_id::TransactionId, response::render,
    transaction::form::path_transaction_id,
};

/// A route handler for getting a transaction by its ID.
///
/// This function will return the status code 404 if the requested resource does not exist (e.g., not created yet).
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Response, Error> {
    let transaction_id = path_transaction_id(path)?;
    let transaction = state.lock_service()?.get_one(transaction_id)?;

    Ok(render(
        StatusCode::OK,
        "Transaction retrieved successfully",
        transaction,
    ))
}
