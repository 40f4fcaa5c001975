// src/db/dashboard_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::{
    common::{error::AppError, pagination::PageRange},
    db::store::DashboardStore,
    models::{
        customer::{CustomerField, CustomerInvoiceJoinRow, CustomerInvoicesRow},
        dashboard::{LatestInvoiceRow, Revenue},
        invoice::{InvoiceFormRow, InvoiceStatusRow, InvoicesTableRow},
    },
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Loga o erro do banco com o nome da consulta e converte para AppError
fn store_error(query: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        error!("❌ Falha na consulta '{query}': {e:?}");
        AppError::from(e)
    }
}

/// Monta o padrão `%termo%` para ILIKE, escapando os curingas do próprio termo.
pub(crate) fn ilike_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Agrupa as linhas do LEFT JOIN por cliente, mantendo a ordem de chegada.
/// As linhas de um mesmo cliente precisam vir juntas (ORDER BY ..., c.id).
pub(crate) fn group_customer_invoices(
    rows: Vec<CustomerInvoiceJoinRow>,
) -> Result<Vec<CustomerInvoicesRow>, AppError> {
    let mut customers: Vec<CustomerInvoicesRow> = Vec::new();

    for row in rows {
        let invoice = match row.invoice_id {
            Some(invoice_id) => {
                let status = row.status.ok_or_else(|| {
                    AppError::InvalidRow(format!("fatura {invoice_id} sem status"))
                })?;
                let amount = row.amount.ok_or_else(|| {
                    AppError::InvalidRow(format!("fatura {invoice_id} sem amount"))
                })?;
                Some(InvoiceStatusRow { status, amount })
            }
            // Cliente sem nenhuma fatura
            None => None,
        };

        if let Some(current) = customers.last_mut().filter(|c| c.id == row.id) {
            current.invoices.extend(invoice);
            continue;
        }

        customers.push(CustomerInvoicesRow {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            invoices: invoice.into_iter().collect(),
        });
    }

    Ok(customers)
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    async fn fetch_revenue(&self) -> Result<Vec<Revenue>, AppError> {
        sqlx::query_as::<_, Revenue>("SELECT month, revenue::BIGINT AS revenue FROM revenue")
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("revenue"))
    }

    async fn fetch_latest_invoices(&self, limit: i64) -> Result<Vec<LatestInvoiceRow>, AppError> {
        sqlx::query_as::<_, LatestInvoiceRow>(
            r#"
            SELECT i.id, i.amount::BIGINT AS amount, c.name, c.email, c.image_url
            FROM invoices i
            LEFT JOIN customers c ON c.id = i.customer_id
            ORDER BY i.date DESC
            LIMIT $1
            "#,
        )
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("latest_invoices"))
    }

    async fn count_invoices(&self) -> Result<Option<i64>, AppError> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("count_invoices"))
    }

    async fn count_customers(&self) -> Result<Option<i64>, AppError> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("count_customers"))
    }

    async fn fetch_invoice_statuses(&self) -> Result<Vec<InvoiceStatusRow>, AppError> {
        sqlx::query_as::<_, InvoiceStatusRow>(
            "SELECT status, amount::BIGINT AS amount FROM invoices",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("invoice_statuses"))
    }

    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        range: PageRange,
    ) -> Result<Vec<InvoicesTableRow>, AppError> {
        // i.id no ORDER BY deixa a paginação estável entre faturas do mesmo dia
        sqlx::query_as::<_, InvoicesTableRow>(
            r#"
            SELECT
                i.id, i.customer_id, i.amount::BIGINT AS amount, i.date, i.status,
                c.name, c.email, c.image_url
            FROM invoices i
            JOIN customers c ON c.id = i.customer_id
            WHERE c.name ILIKE $1
            ORDER BY i.date DESC, i.id
            LIMIT $2 OFFSET $3
            "#,
        )
            .bind(ilike_pattern(query))
            .bind(range.limit())
            .bind(range.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("filtered_invoices"))
    }

    async fn count_filtered_invoices(&self, query: &str) -> Result<Option<i64>, AppError> {
        sqlx::query_scalar::<_, Option<i64>>(
            r#"
            SELECT COUNT(*)
            FROM invoices i
            JOIN customers c ON c.id = i.customer_id
            WHERE c.name ILIKE $1
            "#,
        )
            .bind(ilike_pattern(query))
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("count_filtered_invoices"))
    }

    async fn fetch_invoice_by_id(&self, id: Uuid) -> Result<Vec<InvoiceFormRow>, AppError> {
        // LIMIT 2: basta para saber se veio mais de uma
        sqlx::query_as::<_, InvoiceFormRow>(
            r#"
            SELECT id, customer_id, amount::BIGINT AS amount, status
            FROM invoices
            WHERE id = $1
            LIMIT 2
            "#,
        )
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("invoice_by_id"))
    }

    async fn fetch_customers(&self) -> Result<Vec<CustomerField>, AppError> {
        sqlx::query_as::<_, CustomerField>("SELECT id, name FROM customers ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("customers"))
    }

    async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerInvoicesRow>, AppError> {
        let rows = sqlx::query_as::<_, CustomerInvoiceJoinRow>(
            r#"
            SELECT
                c.id, c.name, c.email, c.image_url,
                i.id AS invoice_id, i.status, i.amount::BIGINT AS amount
            FROM customers c
            LEFT JOIN invoices i ON i.customer_id = c.id
            WHERE c.name ILIKE $1
            ORDER BY c.name ASC, c.id
            "#,
        )
            .bind(ilike_pattern(query))
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("filtered_customers"))?;

        group_customer_invoices(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_row(
        id: Uuid,
        name: &str,
        invoice: Option<(&str, i64)>,
    ) -> CustomerInvoiceJoinRow {
        CustomerInvoiceJoinRow {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            image_url: format!("/customers/{}.png", name.to_lowercase()),
            invoice_id: invoice.map(|_| Uuid::new_v4()),
            status: invoice.map(|(status, _)| status.to_string()),
            amount: invoice.map(|(_, amount)| amount),
        }
    }

    #[test]
    fn ilike_pattern_wraps_and_escapes_wildcards() {
        assert_eq!(ilike_pattern(""), "%%");
        assert_eq!(ilike_pattern("lee"), "%lee%");
        assert_eq!(ilike_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(ilike_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn groups_consecutive_rows_per_customer() {
        let amy = Uuid::new_v4();
        let lee = Uuid::new_v4();
        let rows = vec![
            join_row(amy, "Amy", Some(("paid", 100))),
            join_row(amy, "Amy", Some(("pending", 50))),
            join_row(lee, "Lee", None),
        ];

        let grouped = group_customer_invoices(rows).unwrap();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].id, amy);
        assert_eq!(grouped[0].invoices.len(), 2);
        assert_eq!(grouped[1].id, lee);
        assert!(grouped[1].invoices.is_empty());
    }

    #[test]
    fn joined_invoice_without_status_is_rejected() {
        let mut row = join_row(Uuid::new_v4(), "Amy", Some(("paid", 100)));
        row.status = None;

        assert!(matches!(
            group_customer_invoices(vec![row]),
            Err(AppError::InvalidRow(_))
        ));
    }
}
