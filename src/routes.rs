// src/routes.rs

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn router(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/revenue", get(handlers::dashboard::get_revenue))
        .route("/latest-invoices", get(handlers::dashboard::get_latest_invoices))
        .route("/cards", get(handlers::dashboard::get_card_summary));

    let invoice_routes = Router::new()
        .route("/", get(handlers::invoices::search_invoices))
        .route("/pages", get(handlers::invoices::count_invoice_pages))
        .route("/{id}", get(handlers::invoices::get_invoice_by_id));

    let customer_routes = Router::new()
        .route("/", get(handlers::customers::list_customers))
        .route("/table", get(handlers::customers::search_customers));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/invoices", invoice_routes)
        .nest("/api/customers", customer_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
