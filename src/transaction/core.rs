//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::database_id::TransactionId;

// ============================================================================
// MODELS
// ============================================================================

/// A transfer of money between an issuer and a receiver.
///
/// The serialized field names are the ones used by existing store files and
/// API clients and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, unique within the collection.
    pub id: TransactionId,
    /// A free-form label for the transaction.
    #[serde(rename = "codigo_transaccion")]
    pub transaction_code: String,
    /// The currency of `amount`, e.g. "USD". Not validated.
    #[serde(rename = "moneda")]
    pub currency: String,
    /// The amount of money transferred.
    #[serde(rename = "monto")]
    pub amount: f64,
    /// Who sent the money.
    #[serde(rename = "emisor")]
    pub issuer: String,
    /// Who received the money.
    #[serde(rename = "receptor")]
    pub receiver: String,
    /// When the transaction happened. Stored as given, not parsed.
    #[serde(rename = "fecha_transaccion")]
    pub transaction_date: String,
}

impl Transaction {
    /// Create a transaction with the ID `id` from `fields`.
    pub fn new(id: TransactionId, fields: TransactionFields) -> Self {
        Self {
            id,
            transaction_code: fields.transaction_code,
            currency: fields.currency,
            amount: fields.amount,
            issuer: fields.issuer,
            receiver: fields.receiver,
            transaction_date: fields.transaction_date,
        }
    }
}

/// Every field of a [Transaction] except its ID.
///
/// Used for creating and fully replacing transactions, where the ID is either
/// assigned by the service or taken from the request path.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    /// See [Transaction::transaction_code].
    pub transaction_code: String,
    /// See [Transaction::currency].
    pub currency: String,
    /// See [Transaction::amount].
    pub amount: f64,
    /// See [Transaction::issuer].
    pub issuer: String,
    /// See [Transaction::receiver].
    pub receiver: String,
    /// See [Transaction::transaction_date].
    pub transaction_date: String,
}

// ============================================================================
// FILTERING
// ============================================================================

/// Criteria for [TransactionService::filtered_search](super::TransactionService::filtered_search).
///
/// A criterion equal to its type's zero value (`0`, `""` or `0.0`) is unset
/// and matches every transaction. This means there is no way to search for
/// transactions whose amount is exactly zero or whose text fields are empty.
///
/// Deserializes from query strings using the same names as [Transaction].
/// An empty value for a numeric criterion, e.g. `?monto=`, is also unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    /// Match transactions with this ID.
    #[serde(deserialize_with = "empty_as_zero")]
    pub id: TransactionId,
    /// Match transactions with this code.
    #[serde(rename = "codigo_transaccion")]
    pub transaction_code: String,
    /// Match transactions in this currency.
    #[serde(rename = "moneda")]
    pub currency: String,
    /// Match transactions with exactly this amount.
    #[serde(rename = "monto", deserialize_with = "empty_as_zero")]
    pub amount: f64,
    /// Match transactions from this issuer.
    #[serde(rename = "emisor")]
    pub issuer: String,
    /// Match transactions to this receiver.
    #[serde(rename = "receptor")]
    pub receiver: String,
    /// Match transactions with this date string.
    #[serde(rename = "fecha_transaccion")]
    pub transaction_date: String,
}

impl TransactionFilter {
    /// Whether `transaction` satisfies every set criterion.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        (self.id == 0 || transaction.id == self.id)
            && text_matches(&self.transaction_code, &transaction.transaction_code)
            && text_matches(&self.currency, &transaction.currency)
            && (self.amount == 0.0 || transaction.amount == self.amount)
            && text_matches(&self.issuer, &transaction.issuer)
            && text_matches(&self.receiver, &transaction.receiver)
            && text_matches(&self.transaction_date, &transaction.transaction_date)
    }
}

#[inline]
fn text_matches(criterion: &str, value: &str) -> bool {
    criterion.is_empty() || criterion == value
}

/// A numeric criterion as it arrives from JSON (a number) or from a query
/// string (text).
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// Deserialize a number, treating an empty string as the zero value.
fn empty_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
    T::Err: Display,
{
    match NumberOrText::<T>::deserialize(deserializer)? {
        NumberOrText::Number(number) => Ok(number),
        NumberOrText::Text(text) if text.trim().is_empty() => Ok(T::default()),
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|error| de::Error::custom(format!("invalid number {text:?}: {error}"))),
    }
}
