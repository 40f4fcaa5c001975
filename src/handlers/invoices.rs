// src/handlers/invoices.rs

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::ApiError, pagination::ITEMS_PER_PAGE},
    config::AppState,
    models::invoice::{InvoiceForm, InvoicesTable},
};

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSearchParams {
    /// Trecho do nome do cliente (sem diferenciar maiúsculas)
    #[serde(default)]
    pub query: String,

    #[validate(range(min = 1, max = 1_000_000, message = "A página vai de 1 a 1.000.000"))]
    #[serde(default = "first_page")]
    #[param(example = 1)]
    pub page: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InvoicePagesParams {
    #[serde(default)]
    pub query: String,
}

fn first_page() -> i64 {
    1
}

// GET /api/invoices?query=&page=
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Invoices",
    params(InvoiceSearchParams),
    responses(
        (status = 200, description = "Página de faturas", body = Vec<InvoicesTable>),
        (status = 400, description = "Parâmetros inválidos"),
        (status = 500, description = "Falha ao consultar o banco")
    )
)]
pub async fn search_invoices(
    State(app_state): State<AppState>,
    params: Result<Query<InvoiceSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    params.validate()?;

    let invoices = app_state
        .dashboard_service
        .search_invoices(&params.query, params.page, ITEMS_PER_PAGE)
        .await?;

    Ok((StatusCode::OK, Json(invoices)))
}

// GET /api/invoices/pages?query=
#[utoipa::path(
    get,
    path = "/api/invoices/pages",
    tag = "Invoices",
    params(InvoicePagesParams),
    responses(
        (status = 200, description = "Total de páginas para o filtro", body = i64),
        (status = 400, description = "Parâmetros inválidos"),
        (status = 500, description = "Falha ao consultar o banco")
    )
)]
pub async fn count_invoice_pages(
    State(app_state): State<AppState>,
    params: Result<Query<InvoicePagesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;

    let pages = app_state
        .dashboard_service
        .count_invoice_pages(&params.query, ITEMS_PER_PAGE)
        .await?;

    Ok((StatusCode::OK, Json(pages)))
}

// GET /api/invoices/{id}
#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = "Invoices",
    params(
        ("id" = Uuid, Path, description = "ID da fatura")
    ),
    responses(
        (status = 200, description = "Fatura com o valor em dólares", body = InvoiceForm),
        (status = 400, description = "ID não é um UUID"),
        (status = 404, description = "Fatura não encontrada"),
        (status = 500, description = "Falha ao consultar o banco")
    )
)]
pub async fn get_invoice_by_id(
    State(app_state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let invoice = app_state.dashboard_service.get_invoice_by_id(id).await?;

    Ok((StatusCode::OK, Json(invoice)))
}
