//! Defines the endpoints for replacing and patching a transaction.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Response,
};

use crate::{
    Error,
    app_state::TransactionState,
    database_id::TransactionId,
    response::render,
    transaction::form::{PatchTransactionForm, TransactionForm, json_body, path_transaction_id},
};

/// A route handler for replacing every field of a transaction.
///
/// Responds with 404 if there is no transaction with the ID in the path, in
/// which case nothing is written.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Response, Error> {
    let transaction_id = path_transaction_id(path)?;
    let fields = json_body(body)?.validate()?;

    let transaction = state.lock_service()?.update(transaction_id, fields)?;

    Ok(render(
        StatusCode::OK,
        "Transaction updated successfully",
        transaction,
    ))
}

/// A route handler for changing the code and amount of a transaction.
///
/// The other fields of the transaction are left as they are. Responds with
/// 404 if there is no transaction with the ID in the path.
pub async fn patch_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
    body: Result<Json<PatchTransactionForm>, JsonRejection>,
) -> Result<Response, Error> {
    let transaction_id = path_transaction_id(path)?;
    let (transaction_code, amount) = json_body(body)?.validate()?;

    let transaction = state
        .lock_service()?
        .patch(transaction_id, &transaction_code, amount)?;

    Ok(render(
        StatusCode::OK,
        "Transaction updated successfully",
        transaction,
    ))
}
