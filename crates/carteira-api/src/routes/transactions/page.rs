//! Transactions page rendering - Full page endpoints
//!
//! Endpoints:
//! - page_transactions: the single page with the add form and the list

use crate::AppState;

/// Transactions page - add form plus the delegated list container
///
/// The list container starts with a loading row and pulls its contents from
/// the list fragment on load; every later change goes through the same
/// fragment endpoints.
pub async fn page_transactions(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let symbol = &state.config.display.currency_symbol;

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Controle Financeiro</h2></div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Nova transação</h3>
            <form id='add-transaction-form' hx-post='/transacoes' hx-target='#create-result' hx-swap='innerHTML' class='flex flex-wrap items-center gap-2'>
                <input type='text' id='descricao' name='descricao' placeholder='Descrição' required class='flex-1 px-3 py-2 border rounded-lg'>
                <input type='number' id='valor' name='valor' step='0.01' placeholder='Valor ({})' required class='w-32 px-3 py-2 border rounded-lg'>
                <input type='date' id='data' name='data' required class='px-3 py-2 border rounded-lg'>
                <button type='submit' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Adicionar</button>
            </form>
            <div id='create-result' class='mt-3'></div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Transações</h3>
            <ul id='transaction-list' hx-get='/transacoes/lista' hx-trigger='load' class='divide-y'>
                <li class='py-4 text-center text-gray-500'>Carregando...</li>
            </ul>
        </div>"#,
        symbol
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Controle Financeiro",
        &inner_content,
    ))
}

// ==================== Tests ====================
