// src/models/customer.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::currency::format_currency,
    models::invoice::{InvoiceStatusRow, StatusTotals},
};

// Para selects do formulário de fatura
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerField {
    pub id: Uuid,

    #[schema(example = "Amy Burns")]
    pub name: String,
}

// customers LEFT JOIN invoices, uma linha por par cliente/fatura
#[derive(Debug, Clone, FromRow)]
pub struct CustomerInvoiceJoinRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub invoice_id: Option<Uuid>,
    pub status: Option<String>,
    pub amount: Option<i64>,
}

/// Cliente com as faturas já agrupadas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInvoicesRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub invoices: Vec<InvoiceStatusRow>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTableRow {
    pub id: Uuid,

    #[schema(example = "Amy Burns")]
    pub name: String,
    #[schema(example = "amy@burns.com")]
    pub email: String,
    #[schema(example = "/customers/amy-burns.png")]
    pub image_url: String,

    #[schema(example = 3)]
    pub total_invoices: i64,

    #[schema(example = "$1,234.56")]
    pub total_pending: String,
    #[schema(example = "$666.00")]
    pub total_paid: String,
}

impl From<CustomerInvoicesRow> for CustomerTableRow {
    fn from(row: CustomerInvoicesRow) -> Self {
        let totals = StatusTotals::from_rows(&row.invoices);

        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            // Conta todas as faturas, inclusive as de status desconhecido
            total_invoices: row.invoices.len() as i64,
            total_pending: format_currency(totals.pending),
            total_paid: format_currency(totals.paid),
        }
    }
}
