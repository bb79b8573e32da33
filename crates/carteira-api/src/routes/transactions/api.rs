//! Transaction endpoints - JSON API and HTMX fragments
//!
//! Endpoints:
//! - api_transactions: refresh and return the list (JSON)
//! - api_transaction_detail: single cached transaction (JSON)
//! - htmx_transactions_list: list container contents (HTML fragment)
//! - htmx_transaction_edit_form: inline edit row (HTML fragment)
//! - htmx_transaction_store: create a transaction from the add form
//! - htmx_transaction_update: save an inline edit
//! - htmx_transaction_delete: delete one transaction

use crate::{ApiError, AppState};
use carteira_config::Config;
use carteira_core::{RowAction, Transaction, TransactionDraft};
use std::collections::HashMap;

/// Refresh the cache from the backend and return the list (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
) -> Result<String, ApiError> {
    let token = state.store.write().await.begin_load();
    let items = state.client.list().await.map_err(|e| ApiError::Backend {
        message: e.to_string(),
    })?;

    let mut store = state.store.write().await;
    store.install(token, items);
    Ok(serde_json::to_string(store.all()).unwrap_or_default())
}

/// Get a single cached transaction (JSON API)
pub async fn api_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> Result<String, ApiError> {
    let store = state.store.read().await;
    let id = path.0;

    match store.find(id) {
        Some(tx) => Ok(serde_json::to_string(tx).unwrap_or_default()),
        None => Err(ApiError::NotFound {
            resource: format!("transacao {}", id),
        }),
    }
}

/// HTMX: list container contents
///
/// Serves the initial load, every reload after a successful mutation, the
/// cancel of an inline edit, and the retry control of the error state.
pub async fn htmx_transactions_list(state: axum::extract::State<AppState>) -> String {
    reload_rows(&state).await
}

/// HTMX: swap one row for its inline edit form
pub async fn htmx_transaction_edit_form(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> String {
    let store = state.store.read().await;
    let id = path.0;

    match store.find(id) {
        Some(tx) => render_edit_row(tx),
        None => format!(
            "<li class='py-2'>{}</li>",
            render_error_banner("Transação não encontrada", &format!("ID {}", id))
        ),
    }
}

/// HTMX: create a transaction from the add form
///
/// On success the add form is reset and the list reloads. On failure the
/// backend message is rendered next to the form and the entered values stay.
pub async fn htmx_transaction_store(
    state: axum::extract::State<AppState>,
    body: String,
) -> String {
    let params = parse_form_body(&body);
    let descricao = params.get("descricao").cloned().unwrap_or_default();
    let valor = params.get("valor").cloned().unwrap_or_default();
    let data = params.get("data").cloned().unwrap_or_default();

    let draft = match TransactionDraft::from_form_fields(&descricao, &valor, &data) {
        Ok(draft) => draft,
        Err(e) => {
            log::warn!("rejected create form: {}", e);
            return render_error_banner("Não foi possível adicionar a transação.", &e.to_string());
        }
    };

    match state.client.create(&draft).await {
        Ok(()) => {
            r#"<div class='bg-green-50 border border-green-200 rounded-lg p-3'><div class='flex items-center gap-2'><span class='text-green-600'>✓</span><span class='font-medium text-green-800'>Transação adicionada</span></div></div><script>document.getElementById('add-transaction-form').reset(); htmx.ajax('GET', '/transacoes/lista', {target: '#transaction-list'});</script>"#
                .to_string()
        }
        Err(e) => {
            log::error!("failed to create transaction: {}", e);
            render_error_banner("Não foi possível adicionar a transação.", &e.to_string())
        }
    }
}

/// HTMX: save an inline edit
///
/// The response lands in the result slot of the edit form: on success a
/// reload replaces the whole list, on failure only a banner appears and the
/// form keeps the submitted values.
pub async fn htmx_transaction_update(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
    body: String,
) -> String {
    let id = path.0;
    let params = parse_form_body(&body);
    let descricao = params.get("descricao").cloned().unwrap_or_default();
    let valor = params.get("valor").cloned().unwrap_or_default();
    let data = params.get("data").cloned().unwrap_or_default();

    let draft = match TransactionDraft::from_form_fields(&descricao, &valor, &data) {
        Ok(draft) => draft,
        Err(e) => {
            log::warn!("rejected edit form for transaction {}: {}", id, e);
            return render_error_banner("Erro ao atualizar a transação.", &e.to_string());
        }
    };

    match state.client.update(id, &draft).await {
        Ok(()) => {
            r#"<script>htmx.ajax('GET', '/transacoes/lista', {target: '#transaction-list'});</script>"#
                .to_string()
        }
        Err(e) => {
            log::error!("failed to update transaction {}: {}", id, e);
            render_error_banner("Erro ao atualizar a transação.", &e.to_string())
        }
    }
}

/// HTMX: delete one transaction
///
/// The confirmation happens client-side via the control's confirm prompt;
/// this handler only runs once the user accepted it.
pub async fn htmx_transaction_delete(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> String {
    let id = path.0;

    match state.client.delete(id).await {
        Ok(()) => reload_rows(&state).await,
        Err(e) => {
            log::error!("failed to delete transaction {}: {}", id, e);
            let store = state.store.read().await;
            format!(
                "<li class='py-2'>{}</li>{}",
                render_error_banner("Erro ao deletar a transação.", &e.to_string()),
                render_rows(store.all(), &state.config)
            )
        }
    }
}

// ==================== Rendering ====================

/// Fetch the full collection and rebuild the list container
///
/// The load token invalidates any fetch still in flight, so a stale
/// response can never overwrite a newer list.
async fn reload_rows(state: &AppState) -> String {
    let token = state.store.write().await.begin_load();

    match state.client.list().await {
        Ok(items) => {
            let mut store = state.store.write().await;
            if !store.install(token, items) {
                log::debug!("discarding stale transaction list response");
            }
            render_rows(store.all(), &state.config)
        }
        Err(e) => {
            log::error!("failed to load transactions: {}", e);
            render_load_error()
        }
    }
}

/// Render the whole list container contents
fn render_rows(items: &[Transaction], config: &Config) -> String {
    if items.is_empty() {
        return "<li class='py-4 text-center text-gray-500'>Nenhuma transação encontrada.</li>"
            .to_string();
    }

    items
        .iter()
        .map(|tx| render_transaction_row(tx, config))
        .collect()
}

/// Render one transaction row in display state
fn render_transaction_row(tx: &Transaction, config: &Config) -> String {
    format!(
        r#"<li class='flex items-center justify-between py-3'>
    <div class='info flex flex-col'>
        <span>{}</span>
        <span class='data text-sm text-gray-500'>Data: {}</span>
    </div>
    <div class='flex items-center gap-3'>
        <span class='valor {} font-medium'>{}</span>
        <div class='acoes flex gap-1'>{}{}</div>
    </div>
</li>"#,
        escape_html(&tx.descricao),
        tx.data_display(&config.display.date_format),
        tx.amount_class().css_class(),
        tx.valor_display(&config.display.currency_symbol),
        action_button(RowAction::Edit, tx.id),
        action_button(RowAction::Delete, tx.id),
    )
}

/// Render one action control
///
/// This is the single place that maps a row action to the request it fires;
/// every control carries its marker class and the owning transaction id.
fn action_button(action: RowAction, id: i64) -> String {
    let marker = action.marker_class();
    match action {
        RowAction::Edit => format!(
            r#"<button class='{} px-2 py-1 rounded hover:bg-gray-100' data-id='{}' hx-get='/transacoes/{}/editar' hx-target='closest li' hx-swap='outerHTML'>✏️</button>"#,
            marker, id, id
        ),
        RowAction::Delete => format!(
            r#"<button class='{} px-2 py-1 rounded hover:bg-gray-100' data-id='{}' hx-delete='/transacoes/{}' hx-confirm='Tem certeza que deseja deletar a transação ID {}?' hx-target='#transaction-list' hx-swap='innerHTML'>🗑️</button>"#,
            marker, id, id, id
        ),
        RowAction::SaveEdit => format!(
            r#"<button type='submit' class='{} px-2 py-1 rounded hover:bg-gray-100' data-id='{}'>✔️</button>"#,
            marker, id
        ),
        RowAction::CancelEdit => format!(
            r#"<button type='button' class='{} px-2 py-1 rounded hover:bg-gray-100' data-id='{}' hx-get='/transacoes/lista' hx-target='#transaction-list' hx-swap='innerHTML'>❌</button>"#,
            marker, id
        ),
    }
}

/// Render one row in editing state, pre-filled with the current values
fn render_edit_row(tx: &Transaction) -> String {
    format!(
        r#"<li class='py-3'>
    <form class='edit-form flex flex-wrap items-center gap-2' hx-put='/transacoes/{}' hx-target='#edit-result-{}' hx-swap='innerHTML'>
        <input type='text' name='descricao' value='{}' required class='flex-1 px-2 py-1 border rounded'>
        <input type='number' step='0.01' name='valor' value='{}' required class='w-28 px-2 py-1 border rounded'>
        <input type='date' name='data' value='{}' required class='px-2 py-1 border rounded'>
        <div class='edit-actions flex gap-1'>{}{}</div>
        <div id='edit-result-{}' class='w-full'></div>
    </form>
</li>"#,
        tx.id,
        tx.id,
        escape_html(&tx.descricao),
        tx.valor,
        tx.data_iso(),
        action_button(RowAction::SaveEdit, tx.id),
        action_button(RowAction::CancelEdit, tx.id),
        tx.id,
    )
}

/// Error state for a failed list load, with a retry control
fn render_load_error() -> String {
    r#"<li class='py-4'><div class='bg-red-50 border border-red-200 rounded-lg p-3 text-center'><p class='text-red-800 font-medium'>Não foi possível carregar as transações.</p><button class='mt-2 px-3 py-1 border border-red-300 rounded text-red-700 hover:bg-red-100' hx-get='/transacoes/lista' hx-target='#transaction-list' hx-swap='innerHTML'>Tentar novamente</button></div></li>"#
        .to_string()
}

/// Red banner used for failed actions
fn render_error_banner(title: &str, detail: &str) -> String {
    format!(
        r#"<div class='bg-red-50 border border-red-200 rounded-lg p-3'><div class='flex items-center gap-2'><span class='text-red-600'>✗</span><span class='font-medium text-red-800'>{}</span></div><p class='text-sm text-red-600 mt-1'>{}</p></div>"#,
        escape_html(title),
        escape_html(detail)
    )
}

/// Parse a urlencoded form body into key/value pairs
fn parse_form_body(body: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in body.split('&') {
        let mut parts = pair.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            let key = urlencoding::decode(&key.replace('+', " "))
                .unwrap_or_default()
                .into_owned();
            let value = urlencoding::decode(&value.replace('+', " "))
                .unwrap_or_default()
                .into_owned();
            params.insert(key, value);
        }
    }
    params
}

/// Escape text for safe interpolation into HTML
fn escape_html(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use carteira_core::AmountClass;
    use chrono::NaiveDate;

    fn config() -> Config {
        Config::default()
    }

    fn tx(id: i64, descricao: &str, valor: f64, data: &str) -> Transaction {
        Transaction {
            id,
            descricao: descricao.to_string(),
            valor,
            data: NaiveDate::parse_from_str(data, "%Y-%m-%d").unwrap(),
        }
    }

    #[test]
    fn test_empty_list_renders_single_placeholder() {
        let html = render_rows(&[], &config());
        assert!(html.contains("Nenhuma transação encontrada."));
        assert_eq!(html.matches("<li").count(), 1);
        for action in RowAction::ALL {
            assert!(!html.contains(action.marker_class()));
        }
    }

    #[test]
    fn test_row_shows_formatted_fields() {
        let html = render_rows(&[tx(1, "Salary", 1000.0, "2024-01-05")], &config());
        assert!(html.contains("Salary"));
        assert!(html.contains("R$ 1000.00"));
        assert!(html.contains("Data: 05/01/2024"));
        assert!(html.contains(AmountClass::Positivo.css_class()));
        assert!(!html.contains("negativo"));
    }

    #[test]
    fn test_negative_amount_gets_negative_class() {
        let html = render_rows(&[tx(2, "Coffee", -4.5, "2024-02-01")], &config());
        assert!(html.contains("valor negativo"));
        assert!(html.contains("R$ -4.50"));
    }

    #[test]
    fn test_row_carries_action_controls_with_id() {
        let html = render_transaction_row(&tx(7, "Rent", -900.0, "2024-03-01"), &config());
        assert!(html.contains("edit-btn"));
        assert!(html.contains("delete-btn"));
        assert!(html.contains("data-id='7'"));
        assert!(html.contains("hx-delete='/transacoes/7'"));
        assert!(html.contains("Tem certeza que deseja deletar a transação ID 7?"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let items = vec![
            tx(1, "Salary", 1000.0, "2024-01-05"),
            tx(2, "Coffee", -4.5, "2024-02-01"),
        ];
        assert_eq!(
            render_rows(&items, &config()),
            render_rows(&items, &config())
        );
    }

    #[test]
    fn test_edit_row_is_prefilled() {
        let html = render_edit_row(&tx(3, "Groceries", -120.5, "2024-04-10"));
        assert!(html.contains("value='Groceries'"));
        assert!(html.contains("value='-120.5'"));
        assert!(html.contains("value='2024-04-10'"));
        assert!(html.contains("save-edit-btn"));
        assert!(html.contains("cancel-edit-btn"));
        assert!(html.contains("hx-put='/transacoes/3'"));
    }

    #[test]
    fn test_description_is_escaped() {
        let html = render_transaction_row(&tx(1, "Caf<e> & \"co\"", 1.0, "2024-01-05"), &config());
        assert!(html.contains("Caf&lt;e&gt; &amp; &quot;co&quot;"));
        assert!(!html.contains("Caf<e>"));
    }

    #[test]
    fn test_parse_form_body_decodes_fields() {
        let params = parse_form_body("descricao=Caf%C3%A9+da+manh%C3%A3&valor=-4.5&data=2024-02-01");
        assert_eq!(params.get("descricao").unwrap(), "Café da manhã");
        assert_eq!(params.get("valor").unwrap(), "-4.5");
        assert_eq!(params.get("data").unwrap(), "2024-02-01");
    }

    #[test]
    fn test_load_error_offers_retry() {
        let html = render_load_error();
        assert!(html.contains("Não foi possível carregar as transações."));
        assert!(html.contains("hx-get='/transacoes/lista'"));
    }
}
