//! Route modules for the view server
//!
//! Each module follows a consistent structure:
//! - mod.rs: module declaration and exports
//! - api.rs: JSON API endpoints and HTMX fragments
//! - page.rs: full page rendering

pub mod transactions;
