//! Application router configuration.

use axum::{Router, middleware, routing::get};

use crate::{
    AppState,
    auth::auth_guard,
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, get_transactions_endpoint, patch_transaction_endpoint,
        search_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every transaction route requires the `authorization` header to hold the
/// token in `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::SEARCH_TRANSACTIONS,
            get(search_transactions_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .patch(patch_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard))
        .fallback(get_404_not_found)
        .with_state(state)
}
