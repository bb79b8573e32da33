//! Core view-model types for the transaction list
//!
//! This crate owns everything the view layer reasons about:
//! - models: the `Transaction` wire model and the `TransactionDraft` payload
//! - store: the owned cache of the last-loaded transaction list
//! - types: row actions and amount display classes

pub mod error;
pub mod models;
pub mod store;
pub mod types;

pub use error::{CoreError, ErrorSeverity};
pub use models::{Transaction, TransactionDraft};
pub use store::{LoadToken, TransactionStore};
pub use types::{AmountClass, RowAction};
