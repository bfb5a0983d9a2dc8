#![allow(missing_docs)]

pub(crate) mod http;

use std::{
    io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{
    stores::{Store, StoreError},
    transaction::{Transaction, TransactionFields},
};

pub(crate) use http::{TEST_TOKEN, must_create_test_server, must_create_test_state};

pub(crate) fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            transaction_code: "ctr1".to_owned(),
            currency: "MXN".to_owned(),
            amount: 4000.0,
            issuer: "Brandon".to_owned(),
            receiver: "Juan".to_owned(),
            transaction_date: "21/04/2022".to_owned(),
        },
        Transaction {
            id: 2,
            transaction_code: "ctr2".to_owned(),
            currency: "USD".to_owned(),
            amount: 200.0,
            issuer: "Juan".to_owned(),
            receiver: "Brandon".to_owned(),
            transaction_date: "21/04/2022".to_owned(),
        },
    ]
}

pub(crate) fn sample_fields() -> TransactionFields {
    TransactionFields {
        transaction_code: "ctr new".to_owned(),
        currency: "USD".to_owned(),
        amount: 900.0,
        issuer: "Banamex".to_owned(),
        receiver: "Banxico".to_owned(),
        transaction_date: "23/04/2022".to_owned(),
    }
}

/// An in-memory store that counts reads and writes.
///
/// Clones share the same state, so a test can keep a clone to inspect the
/// store after handing one to a repository.
#[derive(Debug, Clone, Default)]
pub(crate) struct SpyStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl SpyStore {
    pub(crate) fn with(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(Mutex::new(transactions)),
            ..Default::default()
        }
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }

    /// Change the stored transactions without counting a write.
    pub(crate) fn replace(&self, transactions: Vec<Transaction>) {
        *self.transactions.lock().unwrap() = transactions;
    }

    pub(crate) fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Store for SpyStore {
    fn read(&self) -> Result<Vec<Transaction>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.transactions())
    }

    fn write(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.replace(transactions.to_vec());
        Ok(())
    }
}

/// A store whose file can never be read.
#[derive(Debug, Clone)]
pub(crate) struct FailingReadStore;

impl Store for FailingReadStore {
    fn read(&self) -> Result<Vec<Transaction>, StoreError> {
        Err(StoreError::NotFound {
            path: "missing.json".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }

    fn write(&self, _: &[Transaction]) -> Result<(), StoreError> {
        panic!("write must not be called after a failed read")
    }
}

/// A store that can be read but never written.
#[derive(Debug, Clone)]
pub(crate) struct FailingWriteStore {
    transactions: Vec<Transaction>,
}

impl FailingWriteStore {
    pub(crate) fn with(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl Store for FailingWriteStore {
    fn read(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.transactions.clone())
    }

    fn write(&self, _: &[Transaction]) -> Result<(), StoreError> {
        Err(StoreError::Write {
            path: "read-only.json".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        })
    }
}
