// src/db/store.rs

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    common::{error::AppError, pagination::PageRange},
    models::{
        customer::{CustomerField, CustomerInvoicesRow},
        dashboard::{LatestInvoiceRow, Revenue},
        invoice::{InvoiceFormRow, InvoiceStatusRow, InvoicesTableRow},
    },
};

pub type DynDashboardStore = Arc<dyn DashboardStore + Send + Sync>;

/// Leituras cruas sobre o banco externo. Nenhuma formatação acontece aqui:
/// quem molda os dados para a tela é o `DashboardService`.
#[async_trait]
pub trait DashboardStore {
    async fn fetch_revenue(&self) -> Result<Vec<Revenue>, AppError>;

    /// Ordenadas por data, da mais recente para a mais antiga.
    async fn fetch_latest_invoices(&self, limit: i64) -> Result<Vec<LatestInvoiceRow>, AppError>;

    async fn count_invoices(&self) -> Result<Option<i64>, AppError>;

    async fn count_customers(&self) -> Result<Option<i64>, AppError>;

    async fn fetch_invoice_statuses(&self) -> Result<Vec<InvoiceStatusRow>, AppError>;

    /// Filtro ILIKE pelo nome do cliente, data decrescente, dentro de `range`.
    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        range: PageRange,
    ) -> Result<Vec<InvoicesTableRow>, AppError>;

    async fn count_filtered_invoices(&self, query: &str) -> Result<Option<i64>, AppError>;

    /// Retorna todas as linhas com o id (no máximo duas); quem valida a unicidade é o chamador.
    async fn fetch_invoice_by_id(&self, id: Uuid) -> Result<Vec<InvoiceFormRow>, AppError>;

    /// Ordenados por nome, crescente.
    async fn fetch_customers(&self) -> Result<Vec<CustomerField>, AppError>;

    async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerInvoicesRow>, AppError>;
}
