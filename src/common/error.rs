// src/common/error.rs

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Erro interno: guarda todo o detalhe para o log, nunca vai para o cliente.
#[derive(Debug, Error)]
pub enum AppError {
    // O banco reportou um erro
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Um resultado esperado (linha única, contagem) não veio
    #[error("Resultado esperado ausente: {0}")]
    NotFoundOrEmpty(String),

    // A linha veio, mas sem um campo obrigatório (ex: JOIN sem cliente)
    #[error("Linha inválida: {0}")]
    InvalidRow(String),

    // Uma ou mais consultas concorrentes falharam
    #[error("{} consulta(s) concorrente(s) falharam", .0.len())]
    AggregateError(Vec<AppError>),
}

/// Tipo da falha, sem nenhum detalhe do banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Store,
    NotFoundOrEmpty,
    Aggregate,
}

impl From<&AppError> for FailureKind {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::DatabaseError(_) => FailureKind::Store,
            AppError::NotFoundOrEmpty(_) | AppError::InvalidRow(_) => FailureKind::NotFoundOrEmpty,
            AppError::AggregateError(_) => FailureKind::Aggregate,
        }
    }
}

/// As operações do painel. Cada uma tem sua mensagem fixa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Revenue,
    LatestInvoices,
    CardData,
    FilteredInvoices,
    InvoicePages,
    InvoiceById,
    CustomersList,
    CustomerTable,
}

impl Operation {
    pub fn message(&self) -> &'static str {
        match self {
            Operation::Revenue => "Failed to fetch revenue data.",
            Operation::LatestInvoices => "Failed to fetch the latest invoices.",
            Operation::CardData => "Failed to fetch card data.",
            Operation::FilteredInvoices => "Failed to fetch invoices.",
            Operation::InvoicePages => "Failed to fetch total number of invoices.",
            Operation::InvoiceById => "Failed to fetch invoice.",
            Operation::CustomersList => "Failed to fetch all customers.",
            Operation::CustomerTable => "Failed to fetch customer table.",
        }
    }
}

// O erro que o chamador enxerga: operação + tipo, nada do banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .operation.message())]
pub struct DashboardError {
    pub operation: Operation,
    pub kind: FailureKind,
}

impl DashboardError {
    pub fn new(operation: Operation, kind: FailureKind) -> Self {
        Self { operation, kind }
    }
}

// Configuração de inicialização
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} deve ser definida")]
    MissingVar(&'static str),

    #[error("{name} inválida: {value}")]
    InvalidVar { name: &'static str, value: String },
}

// Resposta de erro da camada HTTP
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        let status = match (err.operation, err.kind) {
            (Operation::InvoiceById, FailureKind::NotFoundOrEmpty) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();

        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid parameters: {}", fields.join(", ")),
        }
    }
}

// Rejeições do axum viram JSON; o detalhe do parser fica só no log.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Query string rejeitada: {}", rejection.body_text());
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid query parameters.".to_string(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Caminho rejeitado: {}", rejection.body_text());
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid path parameters.".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
