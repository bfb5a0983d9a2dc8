//! Transaction management.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the search filter
//! - The repository and service that load, change and save transactions
//! - The route handlers for the transaction API

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod get_endpoint;
mod list_endpoint;
mod repository;
mod service;

pub use core::{Transaction, TransactionFields, TransactionFilter};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::{edit_transaction_endpoint, patch_transaction_endpoint};
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::{get_transactions_endpoint, search_transactions_endpoint};
pub use repository::TransactionRepository;
pub use service::TransactionService;
