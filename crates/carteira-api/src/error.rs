//! Error types for carteira-api

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Backend { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "erro": self.to_string() }).to_string();
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let error = ApiError::NotFound {
            resource: "transacao 9".to_string(),
        };
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);

        let error = ApiError::Backend {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::BadRequest {
            message: "Dados incompletos.".to_string(),
        };
        assert_eq!(error.to_string(), "Bad request: Dados incompletos.");
    }
}
