//! HTTP view server with HTMX support
//!
//! Renders the transaction list page and the HTML fragments the page swaps
//! in: list contents, inline edit rows, and the create/update/delete action
//! results. All data comes from the backend transactions API; the last
//! loaded list is cached in [`AppState::store`] and fully replaced on every
//! reload.

pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use carteira_client::ClientRef;
use carteira_config::Config;
use carteira_core::TransactionStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub client: ClientRef,
    pub store: Arc<RwLock<TransactionStore>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::transactions::{
        api_transaction_detail, api_transactions, htmx_transaction_delete,
        htmx_transaction_edit_form, htmx_transaction_store, htmx_transaction_update,
        htmx_transactions_list, page_transactions,
    };

    Router::new()
        // JSON API endpoints
        .route("/api/health", get(health_check))
        .route("/api/transacoes", get(api_transactions))
        .route("/api/transacoes/:id", get(api_transaction_detail))
        // Page routes
        .route("/", get(page_transactions))
        .route("/transacoes", get(page_transactions))
        // HTMX fragment routes
        .route("/transacoes/lista", get(htmx_transactions_list))
        .route("/transacoes/:id/editar", get(htmx_transaction_edit_form))
        .route("/transacoes", post(htmx_transaction_store))
        .route("/transacoes/:id", put(htmx_transaction_update))
        .route("/transacoes/:id", delete(htmx_transaction_delete))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Carteira</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .valor.positivo {{ color: #16a34a; }}
        .valor.negativo {{ color: #dc2626; }}
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, inner_content: &str) -> String {
    let main = format!(r#"<main class='max-w-3xl mx-auto p-6'>{}</main>"#, inner_content);
    if is_htmx_request(headers) {
        main
    } else {
        base_html(title, &main)
    }
}

/// Start the HTTP server
///
/// This is the main entry point for the Carteira server. It creates the
/// router, binds to the configured address, and starts listening.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `client` - The backend transactions API client
/// * `store` - The shared transaction list cache
pub async fn start_server(
    config: Config,
    client: ClientRef,
    store: Arc<RwLock<TransactionStore>>,
) {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        client,
        store,
        config,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await.unwrap();
    eprintln!("[INFO] Starting Carteira server on http://{}", addr);
    eprintln!("[INFO] Available routes:");
    eprintln!("[INFO]   - / (Transações)");
    eprintln!("[INFO]   - /transacoes/lista (list fragment)");
    eprintln!("[INFO]   - /api/* (JSON API endpoints)");

    match axum::serve(listener, router).await {
        Ok(_) => eprintln!("[INFO] Server stopped gracefully"),
        Err(e) => eprintln!("[ERROR] Server error: {}", e),
    }
}
