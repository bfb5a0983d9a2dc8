//! Defines the endpoints for listing and searching transactions.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error, app_state::TransactionState, response::render, transaction::TransactionFilter,
};

/// A route handler for getting every transaction.
///
/// Responds with 404 if there are no transactions.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Response, Error> {
    let transactions = state.lock_service()?.get_all()?;

    Ok(render(
        StatusCode::OK,
        "Transactions retrieved successfully",
        transactions,
    ))
}

/// A route handler for getting the transactions that match the query
/// parameters.
///
/// Every parameter is optional. Parameters that are missing, empty or zero do
/// not restrict the search. Responds with 404 if nothing matched.
pub async fn search_transactions_endpoint(
    State(state): State<TransactionState>,
    query: Result<Query<TransactionFilter>, QueryRejection>,
) -> Result<Response, Error> {
    let Query(filter) = query.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;
    tracing::debug!("Searching transactions with {filter:?}");

    let transactions = state.lock_service()?.filtered_search(&filter)?;

    Ok(render(
        StatusCode::OK,
        "Transactions retrieved successfully",
        transactions,
    ))
}
