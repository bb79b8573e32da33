//! Outbound client for the backend transaction collection
//!
//! Speaks the REST contract of the transactions API:
//! - GET    /transacoes       -> JSON array of transactions
//! - POST   /transacoes       -> create from a draft payload
//! - PUT    /transacoes/{id}  -> update from a draft payload
//! - DELETE /transacoes/{id}  -> delete one transaction
//!
//! Failures are terminal for the triggering action: no retries, no timeouts.

pub mod error;

use async_trait::async_trait;
use carteira_core::{Transaction, TransactionDraft};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::sync::Arc;

pub use error::ClientError;

/// Shared client reference type
pub type ClientRef = Arc<dyn TransactionsApi + Send + Sync>;

/// Message body returned by the backend on mutations
///
/// Success bodies carry `mensagem`, failure bodies carry `erro`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub mensagem: Option<String>,
    pub erro: Option<String>,
}

/// Extract a human-readable message from a failure body
pub fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ApiMessage>(body) {
        Ok(msg) => msg
            .erro
            .or(msg.mensagem)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

/// Operations against the backend transaction collection
#[async_trait]
pub trait TransactionsApi {
    /// Fetch the full collection in server order
    async fn list(&self) -> Result<Vec<Transaction>, ClientError>;

    /// Create a new transaction; the response body is ignored on success
    async fn create(&self, draft: &TransactionDraft) -> Result<(), ClientError>;

    /// Update an existing transaction
    async fn update(&self, id: i64, draft: &TransactionDraft) -> Result<(), ClientError>;

    /// Delete a transaction
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

/// reqwest-backed transactions API client
pub struct LedgerClient {
    http: HttpClient,
    base_url: String,
}

impl LedgerClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the whole collection
    fn collection_url(&self) -> String {
        format!("{}/transacoes", self.base_url)
    }

    /// URL of one transaction
    fn item_url(&self, id: i64) -> String {
        format!("{}/transacoes/{}", self.base_url, id)
    }

    /// Turn a non-success response into a rejection error
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = rejection_message(&body);
        log::warn!("backend rejected request ({}): {}", status, message);
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TransactionsApi for LedgerClient {
    async fn list(&self) -> Result<Vec<Transaction>, ClientError> {
        let response = self.http.get(self.collection_url()).send().await?;
        let response = Self::check(response).await?;
        let transactions = response.json::<Vec<Transaction>>().await?;
        Ok(transactions)
    }

    async fn create(&self, draft: &TransactionDraft) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update(&self, id: i64, draft: &TransactionDraft) -> Result<(), ClientError> {
        let response = self.http.put(self.item_url(id)).json(draft).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

// ==================== Tests ====================
