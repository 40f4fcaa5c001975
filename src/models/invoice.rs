// src/models/invoice.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::{currency::minor_to_major, error::AppError};

// --- Status ---

// O banco guarda o status como texto livre. Só "pending" e "paid" entram nos totais.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// `None` para qualquer status não reconhecido (ex: "overdue")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }
}

/// Acumuladores de pago/pendente, em centavos.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusTotals {
    pub paid: i64,
    pub pending: i64,
}

impl StatusTotals {
    pub fn add(&mut self, status: &str, amount: i64) {
        match InvoiceStatus::parse(status) {
            Some(InvoiceStatus::Paid) => self.paid += amount,
            Some(InvoiceStatus::Pending) => self.pending += amount,
            // Outros status ficam fora das duas somas
            None => {}
        }
    }

    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a InvoiceStatusRow>,
    {
        let mut totals = Self::default();
        for row in rows {
            totals.add(&row.status, row.amount);
        }
        totals
    }
}

// --- Linhas do banco ---

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct InvoiceStatusRow {
    pub status: String,
    pub amount: i64,
}

// invoices JOIN customers. Os campos do cliente são Option para o mapeamento
// recusar a linha se algum vier nulo.
#[derive(Debug, Clone, FromRow)]
pub struct InvoicesTableRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub date: NaiveDate,
    pub status: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct InvoiceFormRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: String,
}

// --- View models ---

// Linha da tabela paginada de faturas. `amount` continua em centavos.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoicesTable {
    pub id: Uuid,
    pub customer_id: Uuid,

    #[schema(example = "Delba de Oliveira")]
    pub name: String,
    #[schema(example = "delba@oliveira.com")]
    pub email: String,
    #[schema(example = "/customers/delba-de-oliveira.png")]
    pub image_url: String,

    #[schema(value_type = String, format = Date, example = "2022-12-06")]
    pub date: NaiveDate,

    #[schema(example = 15795)]
    pub amount: i64,

    #[schema(example = "pending")]
    pub status: String,
}

impl TryFrom<InvoicesTableRow> for InvoicesTable {
    type Error = AppError;

    fn try_from(row: InvoicesTableRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let missing =
            |field: &str| AppError::InvalidRow(format!("fatura {id} sem customers.{field}"));

        Ok(Self {
            name: row.name.ok_or_else(|| missing("name"))?,
            email: row.email.ok_or_else(|| missing("email"))?,
            image_url: row.image_url.ok_or_else(|| missing("image_url"))?,
            id: row.id,
            customer_id: row.customer_id,
            date: row.date,
            amount: row.amount,
            status: row.status,
        })
    }
}

// Dados do formulário de edição. `amount` já na unidade maior (dólares).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,

    #[schema(example = "157.95")]
    pub amount: Decimal,

    #[schema(example = "pending")]
    pub status: String,
}

impl From<InvoiceFormRow> for InvoiceForm {
    fn from(row: InvoiceFormRow) -> Self {
        Self {
            id: row.id,
            customer_id: row.customer_id,
            amount: minor_to_major(row.amount),
            status: row.status,
        }
    }
}
