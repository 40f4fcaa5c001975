// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::ApiError, pagination::LATEST_INVOICES_LIMIT},
    config::AppState,
    models::dashboard::{CardSummary, LatestInvoice, Revenue},
};

// GET /api/dashboard/revenue
#[utoipa::path(
    get,
    path = "/api/dashboard/revenue",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Receita mensal, sem transformação", body = Vec<Revenue>),
        (status = 500, description = "Falha ao consultar o banco")
    )
)]
pub async fn get_revenue(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let revenue = app_state.dashboard_service.get_revenue().await?;

    Ok((StatusCode::OK, Json(revenue)))
}

// GET /api/dashboard/latest-invoices
#[utoipa::path(
    get,
    path = "/api/dashboard/latest-invoices",
    tag = "Dashboard",
    responses(
        (status = 200, description = "As cinco faturas mais recentes", body = Vec<LatestInvoice>),
        (status = 500, description = "Falha ao consultar o banco")
    )
)]
pub async fn get_latest_invoices(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let invoices = app_state
        .dashboard_service
        .get_latest_invoices(LATEST_INVOICES_LIMIT)
        .await?;

    Ok((StatusCode::OK, Json(invoices)))
}

// GET /api/dashboard/cards
#[utoipa::path(
    get,
    path = "/api/dashboard/cards",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Totais dos cards do topo", body = CardSummary),
        (status = 500, description = "Uma ou mais consultas falharam")
    )
)]
pub async fn get_card_summary(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = app_state.dashboard_service.get_card_summary().await?;

    Ok((StatusCode::OK, Json(summary)))
}
