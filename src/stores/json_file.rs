//! Implements a store backed by a single JSON file.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    stores::{Store, StoreError},
    transaction::Transaction,
};

/// Permission bits for store files created by [JsonFileStore::write].
#[cfg(unix)]
const STORE_FILE_MODE: u32 = 0o644;

/// Stores transactions as a JSON array in a file.
///
/// Each read loads the whole file and each write overwrites it with a single
/// write call. Nothing is cached between calls, so the file is always the
/// source of truth.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the JSON file at `path`.
    ///
    /// The file is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty collection if the backing file does not exist yet.
    ///
    /// Returns `true` if the file was created. An existing file is left as is,
    /// even if its contents are not valid.
    ///
    /// # Errors
    /// Returns [StoreError::Write] if the file could not be created.
    pub fn create_if_missing(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }

        self.write(&[])?;

        Ok(true)
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for JsonFileStore {
    fn read(&self) -> Result<Vec<Transaction>, StoreError> {
        let content = fs::read(&self.path).map_err(|source| StoreError::NotFound {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_slice(&content).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        let content =
            serde_json::to_vec(transactions).map_err(|error| self.write_error(error.into()))?;

        open_for_overwrite(&self.path)
            .and_then(|mut file| file.write_all(&content))
            .map_err(|error| self.write_error(error))
    }
}

fn open_for_overwrite(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(STORE_FILE_MODE);
    }

    options.open(path)
}
