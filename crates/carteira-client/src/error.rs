//! Error types for carteira-client

use thiserror::Error;

/// Main error type for carteira-client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a usable response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl ClientError {
    /// True when the failure came back as an HTTP status rather than a
    /// transport problem
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_rejection() {
        let error = ClientError::Rejected {
            status: 500,
            message: "Erro ao deletar transação".to_string(),
        };
        assert!(error.is_rejection());
    }
}
