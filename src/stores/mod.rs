//! Contains the trait and implementations for objects that persist the
//! [transaction](crate::transaction::Transaction) collection.

mod json_file;

use std::{io, path::PathBuf};

pub use json_file::JsonFileStore;

use crate::transaction::Transaction;

/// Reads and writes the entire transaction collection as one document.
///
/// There are no partial reads or writes: every call operates on the whole
/// collection, in insertion order. Implementations do no locking.
pub trait Store {
    /// Load every transaction in the store.
    ///
    /// # Errors
    /// Returns [StoreError::NotFound] if the backing document is missing or
    /// unreadable, or [StoreError::Format] if it cannot be parsed.
    fn read(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Replace the contents of the store with `transactions`.
    ///
    /// # Errors
    /// Returns [StoreError::Write] if the collection could not be written.
    fn write(&self, transactions: &[Transaction]) -> Result<(), StoreError>;
}

/// The errors that may occur when accessing a [Store].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store document does not exist or could not be read.
    #[error("could not read the store file {path:?}: {source}")]
    NotFound {
        /// The path of the store document.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The store document is not a list of transactions.
    #[error("the store file {path:?} does not contain a valid list of transactions: {source}")]
    Format {
        /// The path of the store document.
        path: PathBuf,
        /// The underlying parsing error.
        source: serde_json::Error,
    },

    /// The collection could not be serialized or written.
    #[error("could not write to the store file {path:?}: {source}")]
    Write {
        /// The path of the store document.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}
