//! Record ID type definition.

/// Alias for the integer type used for transaction IDs.
///
/// IDs are assigned by the service when a transaction is created and are never
/// supplied by clients for new records. Zero is never assigned, which is what
/// lets search filters treat an ID of zero as "unset".
pub type TransactionId = i64;
