//! Load, mutate and persist cycles over the transaction collection.

use crate::{
    Error,
    database_id::TransactionId,
    stores::Store,
    transaction::{Transaction, TransactionFields},
};

/// Reads and changes transactions in a [Store].
///
/// Every operation loads the whole collection from the store, works on that
/// copy and, for operations that change something, writes the whole
/// collection back. The loaded collection is dropped at the end of each call,
/// so nothing carries over from one operation to the next.
///
/// There is no locking: two callers working on the same store at the same
/// time can overwrite each other's changes.
#[derive(Debug, Clone)]
pub struct TransactionRepository<S> {
    store: S,
}

impl<S: Store> TransactionRepository<S> {
    /// Create a repository backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get every transaction, in insertion order.
    ///
    /// # Errors
    /// Returns [Error::Read] if the store could not be read, or [Error::Empty]
    /// if the store holds no transactions.
    pub fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let transactions = self.load()?;

        if transactions.is_empty() {
            return Err(Error::Empty);
        }

        Ok(transactions)
    }

    /// Append a new transaction with the ID `id` and save it.
    ///
    /// The caller is responsible for choosing an unused ID.
    ///
    /// # Errors
    /// Returns [Error::Read] or [Error::Write] if the store could not be read
    /// or written.
    pub fn store(
        &self,
        id: TransactionId,
        fields: TransactionFields,
    ) -> Result<Transaction, Error> {
        let mut transactions = self.load()?;
        let transaction = Transaction::new(id, fields);

        transactions.push(transaction.clone());
        self.persist(&transactions)?;

        Ok(transaction)
    }

    /// Replace every field of the transaction with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] without writing to the store if no
    /// transaction has the ID `id`, or [Error::Read] or [Error::Write] if the
    /// store could not be read or written.
    pub fn update(
        &self,
        id: TransactionId,
        fields: TransactionFields,
    ) -> Result<Transaction, Error> {
        let mut transactions = self.load()?;
        let updated = Transaction::new(id, fields);
        let mut was_updated = false;

        for transaction in transactions.iter_mut().filter(|t| t.id == id) {
            *transaction = updated.clone();
            was_updated = true;
        }

        if !was_updated {
            return Err(Error::NotFound(id));
        }

        self.persist(&transactions)?;

        Ok(updated)
    }

    /// Set the code and amount of the transaction with the ID `id`, leaving
    /// its other fields as they are.
    ///
    /// # Errors
    /// Returns [Error::NotFound] without writing to the store if no
    /// transaction has the ID `id`, or [Error::Read] or [Error::Write] if the
    /// store could not be read or written.
    pub fn patch(
        &self,
        id: TransactionId,
        transaction_code: &str,
        amount: f64,
    ) -> Result<Transaction, Error> {
        let mut transactions = self.load()?;
        let mut patched = None;

        for transaction in transactions.iter_mut().filter(|t| t.id == id) {
            transaction.transaction_code = transaction_code.to_owned();
            transaction.amount = amount;
            patched = Some(transaction.clone());
        }

        let patched = patched.ok_or(Error::NotFound(id))?;
        self.persist(&transactions)?;

        Ok(patched)
    }

    /// Remove the transaction with the ID `id`.
    ///
    /// Exactly one transaction is removed. If, despite the ID assignment
    /// policy, several transactions share `id`, the last one is removed.
    ///
    /// # Errors
    /// Returns [Error::NotFound] without writing to the store if no
    /// transaction has the ID `id`, or [Error::Read] or [Error::Write] if the
    /// store could not be read or written.
    pub fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let mut transactions = self.load()?;

        let index = transactions
            .iter()
            .rposition(|transaction| transaction.id == id)
            .ok_or(Error::NotFound(id))?;

        transactions.remove(index);
        self.persist(&transactions)
    }

    /// Get the largest ID in the store, or zero if the store is empty.
    ///
    /// Unlike [TransactionRepository::get_all], an empty store is not an
    /// error.
    ///
    /// # Errors
    /// Returns [Error::Read] if the store could not be read.
    pub fn last_id(&self) -> Result<TransactionId, Error> {
        let transactions = self.load()?;

        Ok(transactions
            .iter()
            .map(|transaction| transaction.id)
            .fold(0, TransactionId::max))
    }

    fn load(&self) -> Result<Vec<Transaction>, Error> {
        self.store.read().map_err(|error| {
            tracing::error!("Could not read transactions: {error}");
            Error::Read(error)
        })
    }

    fn persist(&self, transactions: &[Transaction]) -> Result<(), Error> {
        self.store.write(transactions).map_err(|error| {
            tracing::error!("Could not save {} transactions: {error}", transactions.len());
            Error::Write(error)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        test_utils::{FailingReadStore, FailingWriteStore, SpyStore, sample_fields, sample_transactions},
        transaction::Transaction,
    };

    use super::TransactionRepository;

    #[test]
    fn get_all_returns_every_transaction() {
        let repository = TransactionRepository::new(SpyStore::with(sample_transactions()));

        let transactions = repository.get_all().unwrap();

        assert_eq!(transactions, sample_transactions());
    }

    #[test]
    fn get_all_on_empty_store_is_empty_error() {
        let repository = TransactionRepository::new(SpyStore::default());

        let result = repository.get_all();

        assert!(matches!(result, Err(Error::Empty)), "got {result:?}");
    }

    #[test]
    fn get_all_fails_when_store_cannot_be_read() {
        let repository = TransactionRepository::new(FailingReadStore);

        let result = repository.get_all();

        assert!(matches!(result, Err(Error::Read(_))), "got {result:?}");
    }

    #[test]
    fn store_appends_and_writes_once() {
        let store = SpyStore::with(sample_transactions());
        let repository = TransactionRepository::new(store.clone());

        let transaction = repository.store(3, sample_fields()).unwrap();

        assert_eq!(transaction, Transaction::new(3, sample_fields()));
        let mut want = sample_transactions();
        want.push(transaction);
        assert_eq!(store.transactions(), want);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn store_into_empty_store() {
        let store = SpyStore::default();
        let repository = TransactionRepository::new(store.clone());

        let transaction = repository.store(1, sample_fields()).unwrap();

        assert_eq!(store.transactions(), vec![transaction]);
    }

    #[test]
    fn store_reports_write_failure() {
        let repository = TransactionRepository::new(FailingWriteStore::with(sample_transactions()));

        let result = repository.store(3, sample_fields());

        assert!(matches!(result, Err(Error::Write(_))), "got {result:?}");
    }

    #[test]
    fn update_reports_write_failure() {
        let repository = TransactionRepository::new(FailingWriteStore::with(sample_transactions()));

        let result = repository.update(1, sample_fields());

        assert!(matches!(result, Err(Error::Write(_))), "got {result:?}");
    }

    #[test]
    fn patch_reports_write_failure() {
        let repository = TransactionRepository::new(FailingWriteStore::with(sample_transactions()));

        let result = repository.patch(1, "ctr-new", 10.0);

        assert!(matches!(result, Err(Error::Write(_))), "got {result:?}");
    }

    #[test]
    fn delete_reports_write_failure() {
        let repository = TransactionRepository::new(FailingWriteStore::with(sample_transactions()));

        let result = repository.delete(1);

        assert!(matches!(result, Err(Error::Write(_))), "got {result:?}");
    }

    #[test]
    fn missing_id_is_reported_before_any_write_is_attempted() {
        let repository = TransactionRepository::new(FailingWriteStore::with(sample_transactions()));

        assert!(matches!(
            repository.update(42, sample_fields()),
            Err(Error::NotFound(42))
        ));
        assert!(matches!(
            repository.patch(42, "ctr-new", 10.0),
            Err(Error::NotFound(42))
        ));
        assert!(matches!(repository.delete(42), Err(Error::NotFound(42))));
    }

    #[test]
    fn store_does_not_write_when_read_fails() {
        let repository = TransactionRepository::new(FailingReadStore);

        let result = repository.store(3, sample_fields());

        assert!(matches!(result, Err(Error::Read(_))), "got {result:?}");
    }

    #[test]
    fn update_replaces_every_field() {
        let store = SpyStore::with(sample_transactions());
        let repository = TransactionRepository::new(store.clone());

        let updated = repository.update(2, sample_fields()).unwrap();

        let want = Transaction::new(2, sample_fields());
        assert_eq!(updated, want);
        assert_eq!(store.transactions(), vec![sample_transactions()[0].clone(), want]);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn update_missing_id_does_not_write() {
        let store = SpyStore::with(sample_transactions());
        let repository = TransactionRepository::new(store.clone());

        let result = repository.update(42, sample_fields());

        assert!(matches!(result, Err(Error::NotFound(42))), "got {result:?}");
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.transactions(), sample_transactions());
    }

    #[test]
    fn patch_changes_only_code_and_amount() {
        let store = SpyStore::with(sample_transactions());
        let repository = TransactionRepository::new(store.clone());

        let patched = repository.patch(1, "ctr-new", 123.45).unwrap();

        let original = &sample_transactions()[0];
        let want = Transaction {
            transaction_code: "ctr-new".to_owned(),
            amount: 123.45,
            ..original.clone()
        };
        assert_eq!(patched, want);
        assert_eq!(patched.currency, original.currency);
        assert_eq!(patched.issuer, original.issuer);
        assert_eq!(patched.receiver, original.receiver);
        assert_eq!(patched.transaction_date, original.transaction_date);
        assert_eq!(store.transactions()[0], want);
        assert_eq!(store.transactions()[1], sample_transactions()[1]);
    }

    #[test]
    fn patch_missing_id_does_not_write() {
        let store = SpyStore::with(sample_transactions());
        let repository = TransactionRepository::new(store.clone());

        let result = repository.patch(42, "ctr-new", 1.0);

        assert!(matches!(result, Err(Error::NotFound(42))), "got {result:?}");
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn delete_removes_one_and_keeps_order() {
        let mut transactions = sample_transactions();
        transactions.push(Transaction::new(3, sample_fields()));
        let store = SpyStore::with(transactions.clone());
        let repository = TransactionRepository::new(store.clone());

        repository.delete(2).unwrap();

        assert_eq!(
            store.transactions(),
            vec![transactions[0].clone(), transactions[2].clone()]
        );
    }

    #[test]
    fn delete_is_not_idempotent() {
        let store = SpyStore::with(sample_transactions());
        let repository = TransactionRepository::new(store.clone());

        repository.delete(1).unwrap();
        let result = repository.delete(1);

        assert!(matches!(result, Err(Error::NotFound(1))), "got {result:?}");
        assert_eq!(store.transactions(), vec![sample_transactions()[1].clone()]);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn delete_removes_last_duplicate() {
        let first = Transaction::new(1, sample_fields());
        let duplicate = Transaction {
            transaction_code: "duplicate".to_owned(),
            ..first.clone()
        };
        let store = SpyStore::with(vec![first.clone(), duplicate]);
        let repository = TransactionRepository::new(store.clone());

        repository.delete(1).unwrap();

        assert_eq!(store.transactions(), vec![first]);
    }

    #[test]
    fn last_id_is_largest_id() {
        let mut transactions = sample_transactions();
        transactions.insert(0, Transaction::new(7, sample_fields()));
        let repository = TransactionRepository::new(SpyStore::with(transactions));

        assert_eq!(repository.last_id().unwrap(), 7);
    }

    #[test]
    fn last_id_of_empty_store_is_zero() {
        let repository = TransactionRepository::new(SpyStore::default());

        assert_eq!(repository.last_id().unwrap(), 0);
    }

    #[test]
    fn last_id_fails_when_store_cannot_be_read() {
        let repository = TransactionRepository::new(FailingReadStore);

        let result = repository.last_id();

        assert!(matches!(result, Err(Error::Read(_))), "got {result:?}");
    }

    #[test]
    fn every_operation_reloads_the_store() {
        let store = SpyStore::with(sample_transactions());
        let repository = TransactionRepository::new(store.clone());

        repository.get_all().unwrap();
        store.replace(vec![]);

        assert!(matches!(repository.get_all(), Err(Error::Empty)));
        assert_eq!(store.read_count(), 2);
    }
}
