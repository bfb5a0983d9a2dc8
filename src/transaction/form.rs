//! Request bodies and path parameters for the transaction endpoints, and
//! their validation.

use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId, transaction::TransactionFields};

/// The body for creating or replacing a transaction.
///
/// Fields left out of the JSON body take their zero value, which validation
/// then reports as missing. An `id` in the body is ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionForm {
    #[serde(rename = "codigo_transaccion")]
    pub transaction_code: String,
    #[serde(rename = "moneda")]
    pub currency: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "emisor")]
    pub issuer: String,
    #[serde(rename = "receptor")]
    pub receiver: String,
    #[serde(rename = "fecha_transaccion")]
    pub transaction_date: String,
}

impl TransactionForm {
    /// Check that every field is set and convert the form into
    /// [TransactionFields].
    ///
    /// # Errors
    /// Returns [Error::InvalidRequest] naming every field that is empty or
    /// zero.
    pub fn validate(self) -> Result<TransactionFields, Error> {
        let missing_fields: Vec<&str> = [
            ("codigo_transaccion", self.transaction_code.is_empty()),
            ("moneda", self.currency.is_empty()),
            ("monto", self.amount == 0.0),
            ("emisor", self.issuer.is_empty()),
            ("receptor", self.receiver.is_empty()),
            ("fecha_transaccion", self.transaction_date.is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect();

        if !missing_fields.is_empty() {
            return Err(Error::InvalidRequest(format!(
                "the field(s) {} are required",
                missing_fields.join(", ")
            )));
        }

        Ok(TransactionFields {
            transaction_code: self.transaction_code,
            currency: self.currency,
            amount: self.amount,
            issuer: self.issuer,
            receiver: self.receiver,
            transaction_date: self.transaction_date,
        })
    }
}

/// The body for changing the code and amount of a transaction.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchTransactionForm {
    #[serde(rename = "codigo_transaccion")]
    pub transaction_code: String,
    #[serde(rename = "monto")]
    pub amount: f64,
}

impl PatchTransactionForm {
    /// Check that the code is set and the amount is positive.
    ///
    /// # Errors
    /// Returns [Error::InvalidRequest] describing the first invalid field.
    pub fn validate(self) -> Result<(String, f64), Error> {
        if self.transaction_code.is_empty() {
            return Err(Error::InvalidRequest(
                "the field codigo_transaccion is required".to_owned(),
            ));
        }

        if self.amount <= 0.0 {
            return Err(Error::InvalidRequest(
                "the field monto must be greater than zero".to_owned(),
            ));
        }

        Ok((self.transaction_code, self.amount))
    }
}

/// Get the transaction ID from the request path, rejecting anything that is
/// not an integer with [Error::InvalidRequest].
pub fn path_transaction_id(
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<TransactionId, Error> {
    path.map(|Path(id)| id).map_err(|rejection| {
        Error::InvalidRequest(format!(
            "the transaction ID must be an integer: {}",
            rejection.body_text()
        ))
    })
}

/// Get the JSON request body, rejecting bodies that are not JSON objects of
/// the right shape with [Error::InvalidRequest].
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    body.map(|Json(body)| body)
        .map_err(|rejection| Error::InvalidRequest(rejection.body_text()))
}
