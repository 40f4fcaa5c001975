// src/models/dashboard.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::{currency::format_currency, error::AppError};

// 1. Gráfico de Receita (tabela já agregada por mês)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Revenue {
    #[schema(example = "Jan")]
    pub month: String,

    #[schema(example = 2000)]
    pub revenue: i64,
}

// 2. Últimas faturas (linha crua do JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct LatestInvoiceRow {
    pub id: Uuid,
    pub amount: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LatestInvoice {
    pub id: Uuid,

    #[schema(example = "$1,234.56")]
    pub amount: String, // Já formatado para exibição

    #[schema(example = "Delba de Oliveira")]
    pub name: String,
    #[schema(example = "delba@oliveira.com")]
    pub email: String,
    #[schema(example = "/customers/delba-de-oliveira.png")]
    pub image_url: String,
}

impl TryFrom<LatestInvoiceRow> for LatestInvoice {
    type Error = AppError;

    fn try_from(row: LatestInvoiceRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let missing =
            |field: &str| AppError::InvalidRow(format!("fatura {id} sem customers.{field}"));

        Ok(Self {
            id,
            amount: format_currency(row.amount),
            name: row.name.ok_or_else(|| missing("name"))?,
            email: row.email.ok_or_else(|| missing("email"))?,
            image_url: row.image_url.ok_or_else(|| missing("image_url"))?,
        })
    }
}

// 3. Cards do topo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    #[schema(example = 10)]
    pub number_of_customers: i64,
    #[schema(example = 15)]
    pub number_of_invoices: i64,
    #[schema(example = "$1,234.56")]
    pub total_paid_invoices: String,
    #[schema(example = "$200.00")]
    pub total_pending_invoices: String,
}
