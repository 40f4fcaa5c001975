// src/handlers/customers.rs

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::ApiError,
    config::AppState,
    models::customer::{CustomerField, CustomerTableRow},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomerSearchParams {
    /// Trecho do nome do cliente
    #[serde(default)]
    pub query: String,
}

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "Clientes (id e nome) por nome", body = Vec<CustomerField>),
        (status = 500, description = "Falha ao consultar o banco")
    )
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let customers = app_state.dashboard_service.get_customers_list().await?;

    Ok((StatusCode::OK, Json(customers)))
}

// GET /api/customers/table?query=
#[utoipa::path(
    get,
    path = "/api/customers/table",
    tag = "Customers",
    params(CustomerSearchParams),
    responses(
        (status = 200, description = "Clientes com totais", body = Vec<CustomerTableRow>),
        (status = 400, description = "Parâmetros inválidos"),
        (status = 500, description = "Falha ao consultar o banco")
    )
)]
pub async fn search_customers(
    State(app_state): State<AppState>,
    params: Result<Query<CustomerSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;

    let customers = app_state
        .dashboard_service
        .search_customers(&params.query)
        .await?;

    Ok((StatusCode::OK, Json(customers)))
}
