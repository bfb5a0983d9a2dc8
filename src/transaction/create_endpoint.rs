//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::TransactionState,
    endpoints::{self, format_endpoint},
    response::render,
    transaction::form::{TransactionForm, json_body},
};

/// A route handler for creating a new transaction.
///
/// The ID of the new transaction is assigned by the server. Responds with 201
/// and the new transaction, with its URI in the `Location` header.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    body: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Response, Error> {
    let fields = json_body(body)?.validate()?;
    let transaction = state.lock_service()?.create(fields)?;
    tracing::info!("Created transaction {}", transaction.id);

    let location = format_endpoint(endpoints::TRANSACTION, transaction.id);

    Ok((
        [(LOCATION, location)],
        render(
            StatusCode::CREATED,
            "Transaction created successfully",
            transaction,
        ),
    )
        .into_response())
}
