// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_revenue,
        handlers::dashboard::get_latest_invoices,
        handlers::dashboard::get_card_summary,

        // --- Invoices ---
        handlers::invoices::search_invoices,
        handlers::invoices::count_invoice_pages,
        handlers::invoices::get_invoice_by_id,

        // --- Customers ---
        handlers::customers::list_customers,
        handlers::customers::search_customers,
    ),
    components(
        schemas(
            // --- Dashboard ---
            models::dashboard::Revenue,
            models::dashboard::LatestInvoice,
            models::dashboard::CardSummary,

            // --- Invoices ---
            models::invoice::InvoicesTable,
            models::invoice::InvoiceForm,

            // --- Customers ---
            models::customer::CustomerField,
            models::customer::CustomerTableRow,
        )
    ),
    tags(
        (name = "Dashboard", description = "Cards, gráfico de receita e últimas faturas"),
        (name = "Invoices", description = "Busca paginada e leitura de faturas"),
        (name = "Customers", description = "Listas e tabela de clientes"),
    )
)]
pub struct ApiDoc;
