//! Transaction routes - list, inline edit, create, update, delete
//!
//! The list container is always rebuilt wholesale from the cached store;
//! the inline edit flow swaps a single row for a pre-filled form and back.
//!
//! Structure:
//! - api.rs: JSON API and HTMX fragment endpoints
//! - page.rs: full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_transaction_detail, api_transactions, htmx_transaction_delete,
    htmx_transaction_edit_form, htmx_transaction_store, htmx_transaction_update,
    htmx_transactions_list,
};

pub use page::page_transactions;
