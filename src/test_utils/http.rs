use axum::extract::FromRef;
use axum_test::TestServer;
use tempfile::TempDir;

use crate::{
    AppState, build_router,
    app_state::TransactionState,
    stores::{JsonFileStore, Store},
    transaction::Transaction,
};

pub(crate) const TEST_TOKEN: &str = "12345";

/// Create app state backed by a JSON file holding `transactions`.
///
/// The store file lives in the returned directory, which is deleted when
/// dropped, so keep it alive for as long as the state is used.
#[track_caller]
pub(crate) fn must_create_test_app_state(transactions: Vec<Transaction>) -> (AppState, TempDir) {
    let dir = TempDir::new().expect("could not create temporary directory");
    let store = JsonFileStore::new(dir.path().join("transactions.json"));
    store
        .write(&transactions)
        .expect("could not write test transactions");

    (AppState::new(TEST_TOKEN, store), dir)
}

#[track_caller]
pub(crate) fn must_create_test_state(
    transactions: Vec<Transaction>,
) -> (TransactionState, TempDir) {
    let (state, dir) = must_create_test_app_state(transactions);

    (TransactionState::from_ref(&state), dir)
}

#[track_caller]
pub(crate) fn must_create_test_server(transactions: Vec<Transaction>) -> (TestServer, TempDir) {
    let (state, dir) = must_create_test_app_state(transactions);
    let server = TestServer::try_new(build_router(state)).expect("Could not create test server.");

    (server, dir)
}
