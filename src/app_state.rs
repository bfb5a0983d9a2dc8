//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;

use crate::{
    Error,
    stores::JsonFileStore,
    transaction::{TransactionRepository, TransactionService},
};

/// The transaction service as shared between request handlers.
///
/// The service itself does no locking. The mutex makes this server process
/// the single writer of its store file. Other processes writing to the same
/// file are not guarded against.
pub type SharedTransactionService = Arc<Mutex<TransactionService<JsonFileStore>>>;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The token clients must send in the `authorization` header.
    pub auth_token: String,

    /// The service for managing [transactions](crate::Transaction).
    pub transaction_service: SharedTransactionService,
}

impl AppState {
    /// Create a new [AppState] serving the transactions in `store`.
    pub fn new(auth_token: &str, store: JsonFileStore) -> Self {
        let service = TransactionService::new(TransactionRepository::new(store));

        Self {
            auth_token: auth_token.to_owned(),
            transaction_service: Arc::new(Mutex::new(service)),
        }
    }
}

/// The state needed for the auth middleware
#[derive(Debug, Clone)]
pub struct AuthState {
    /// The token clients must send in the `authorization` header.
    pub auth_token: String,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            auth_token: state.auth_token.clone(),
        }
    }
}

/// The state needed to read or change transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The service for managing [transactions](crate::Transaction).
    pub transaction_service: SharedTransactionService,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_service: state.transaction_service.clone(),
        }
    }
}

impl TransactionState {
    /// Lock the transaction service for the duration of one operation.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if a previous holder of the lock
    /// panicked.
    pub fn lock_service(
        &self,
    ) -> Result<MutexGuard<'_, TransactionService<JsonFileStore>>, Error> {
        self.transaction_service.lock().map_err(|error| {
            tracing::error!("could not acquire the store lock: {error}");
            Error::StoreLockError
        })
    }
}
