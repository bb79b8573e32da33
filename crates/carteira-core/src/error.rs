//! Error types for carteira-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for carteira-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Transaction not found: {id}")]
    TransactionNotFound { id: i64 },

    #[error("Invalid amount: {value}")]
    InvalidAmount { value: String },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },
}

impl CoreError {
    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::TransactionNotFound { .. } => ErrorSeverity::Info,
            CoreError::InvalidAmount { .. } => ErrorSeverity::Warning,
            CoreError::InvalidDate { .. } => ErrorSeverity::Warning,
        }
    }
}

// ==================== Tests ====================
