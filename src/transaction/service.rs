//! ID assignment and searching on top of [TransactionRepository].

use crate::{
    Error,
    database_id::TransactionId,
    stores::Store,
    transaction::{Transaction, TransactionFields, TransactionFilter, TransactionRepository},
};

/// The operations the API offers on transactions.
#[derive(Debug, Clone)]
pub struct TransactionService<S> {
    repository: TransactionRepository<S>,
}

impl<S: Store> TransactionService<S> {
    /// Create a service that works through `repository`.
    pub fn new(repository: TransactionRepository<S>) -> Self {
        Self { repository }
    }

    /// Get every transaction.
    ///
    /// # Errors
    /// See [TransactionRepository::get_all].
    pub fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.repository.get_all()
    }

    /// Get the transactions that match every criterion set in `filter`.
    ///
    /// # Errors
    /// Returns [Error::Empty] if nothing matched, including when the store is
    /// empty, or [Error::Read] if the store could not be read.
    pub fn filtered_search(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error> {
        let transactions: Vec<Transaction> = self
            .repository
            .get_all()?
            .into_iter()
            .filter(|transaction| filter.matches(transaction))
            .collect();

        if transactions.is_empty() {
            return Err(Error::Empty);
        }

        Ok(transactions)
    }

    /// Get the first transaction with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no transaction has the ID `id`, including
    /// when the store is empty, or [Error::Read] if the store could not be
    /// read.
    pub fn get_one(&self, id: TransactionId) -> Result<Transaction, Error> {
        let transactions = match self.repository.get_all() {
            Err(Error::Empty) => return Err(Error::NotFound(id)),
            result => result?,
        };

        transactions
            .into_iter()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Save a new transaction, giving it the ID after the current largest ID.
    ///
    /// Reading the last ID and storing the new transaction are two separate
    /// store operations. Callers running at the same time against one store
    /// may be given the same ID.
    ///
    /// # Errors
    /// Returns [Error::Read] or [Error::Write] if the store could not be read
    /// or written, or [Error::IdsExhausted] if the largest ID in the store is
    /// `i64::MAX`.
    pub fn create(&self, fields: TransactionFields) -> Result<Transaction, Error> {
        let last_id = self.repository.last_id()?;
        let id = last_id.checked_add(1).ok_or_else(|| {
            tracing::error!("Cannot create a transaction: the store already holds ID {last_id}");
            Error::IdsExhausted(last_id)
        })?;
        let transaction = self.repository.store(id, fields)?;
        tracing::debug!("Created transaction {id}");

        Ok(transaction)
    }

    /// Replace every field of the transaction with the ID `id`.
    ///
    /// # Errors
    /// See [TransactionRepository::update].
    pub fn update(
        &self,
        id: TransactionId,
        fields: TransactionFields,
    ) -> Result<Transaction, Error> {
        self.repository.update(id, fields)
    }

    /// Set the code and amount of the transaction with the ID `id`.
    ///
    /// # Errors
    /// See [TransactionRepository::patch].
    pub fn patch(
        &self,
        id: TransactionId,
        transaction_code: &str,
        amount: f64,
    ) -> Result<Transaction, Error> {
        self.repository.patch(id, transaction_code, amount)
    }

    /// Remove the transaction with the ID `id`.
    ///
    /// # Errors
    /// See [TransactionRepository::delete].
    pub fn delete(&self, id: TransactionId) -> Result<(), Error> {
        self.repository.delete(id)
    }
}
