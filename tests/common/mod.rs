//! `DashboardStore` em memória compartilhado pelos testes de integração.

#![allow(dead_code)]

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use invoice_dashboard::{
    common::{error::AppError, pagination::PageRange},
    config::AppState,
    db::DashboardStore,
    models::{
        customer::{CustomerField, CustomerInvoicesRow},
        dashboard::{LatestInvoiceRow, Revenue},
        invoice::{InvoiceFormRow, InvoiceStatusRow, InvoicesTableRow},
    },
    services::DashboardService,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct InvoiceRecord {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}

#[derive(Default)]
pub struct MemoryStore {
    pub revenue: Vec<Revenue>,
    pub customers: Vec<CustomerRecord>,
    pub invoices: Vec<InvoiceRecord>,
    /// Nomes das chamadas do store que devem falhar.
    pub failing: HashSet<&'static str>,
    /// Intervalos recebidos por `fetch_filtered_invoices`.
    pub ranges: Mutex<Vec<PageRange>>,
    /// Faz as consultas de contagem devolverem NULL.
    pub null_counts: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer(mut self, name: &str) -> Self {
        let slug = name.to_lowercase().replace(' ', "-");
        self.customers.push(CustomerRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{slug}@example.com"),
            image_url: format!("/customers/{slug}.png"),
        });
        self
    }

    /// Adiciona uma fatura para o cliente com o nome dado.
    pub fn with_invoice(mut self, customer: &str, amount: i64, status: &str, date: &str) -> Self {
        let customer_id = self
            .customer_id(customer)
            .unwrap_or_else(|| panic!("unknown customer {customer}"));
        self.invoices.push(InvoiceRecord {
            id: Uuid::new_v4(),
            customer_id,
            amount,
            status: status.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("invalid date"),
        });
        self
    }

    pub fn with_revenue(mut self, month: &str, revenue: i64) -> Self {
        self.revenue.push(Revenue {
            month: month.to_string(),
            revenue,
        });
        self
    }

    pub fn failing(mut self, call: &'static str) -> Self {
        self.failing.insert(call);
        self
    }

    pub fn customer_id(&self, name: &str) -> Option<Uuid> {
        self.customers.iter().find(|c| c.name == name).map(|c| c.id)
    }

    pub fn into_service(self) -> DashboardService {
        DashboardService::new(Arc::new(self))
    }

    pub fn into_state(self) -> AppState {
        AppState::from_service(self.into_service())
    }

    fn check(&self, call: &'static str) -> Result<(), AppError> {
        if self.failing.contains(call) {
            return Err(AppError::DatabaseError(sqlx::Error::Protocol(format!(
                "simulated failure in {call}"
            ))));
        }
        Ok(())
    }

    fn customer(&self, id: Uuid) -> Option<&CustomerRecord> {
        self.customers.iter().find(|c| c.id == id)
    }

    fn name_matches(name: &str, query: &str) -> bool {
        name.to_lowercase().contains(&query.to_lowercase())
    }

    fn matching_invoices(&self, query: &str) -> Vec<(&InvoiceRecord, &CustomerRecord)> {
        let mut rows: Vec<_> = self
            .invoices
            .iter()
            .filter_map(|inv| self.customer(inv.customer_id).map(|c| (inv, c)))
            .filter(|(_, c)| Self::name_matches(&c.name, query))
            .collect();
        rows.sort_by(|(a, _), (b, _)| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        rows
    }
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn fetch_revenue(&self) -> Result<Vec<Revenue>, AppError> {
        self.check("revenue")?;
        Ok(self.revenue.clone())
    }

    async fn fetch_latest_invoices(&self, limit: i64) -> Result<Vec<LatestInvoiceRow>, AppError> {
        self.check("latest_invoices")?;
        let mut invoices: Vec<&InvoiceRecord> = self.invoices.iter().collect();
        invoices.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(invoices
            .into_iter()
            .take(limit as usize)
            .map(|inv| {
                let customer = self.customer(inv.customer_id);
                LatestInvoiceRow {
                    id: inv.id,
                    amount: inv.amount,
                    name: customer.map(|c| c.name.clone()),
                    email: customer.map(|c| c.email.clone()),
                    image_url: customer.map(|c| c.image_url.clone()),
                }
            })
            .collect())
    }

    async fn count_invoices(&self) -> Result<Option<i64>, AppError> {
        self.check("count_invoices")?;
        Ok((!self.null_counts).then_some(self.invoices.len() as i64))
    }

    async fn count_customers(&self) -> Result<Option<i64>, AppError> {
        self.check("count_customers")?;
        Ok((!self.null_counts).then_some(self.customers.len() as i64))
    }

    async fn fetch_invoice_statuses(&self) -> Result<Vec<InvoiceStatusRow>, AppError> {
        self.check("invoice_statuses")?;
        Ok(self
            .invoices
            .iter()
            .map(|inv| InvoiceStatusRow {
                status: inv.status.clone(),
                amount: inv.amount,
            })
            .collect())
    }

    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        range: PageRange,
    ) -> Result<Vec<InvoicesTableRow>, AppError> {
        self.check("filtered_invoices")?;
        self.ranges.lock().unwrap().push(range);

        Ok(self
            .matching_invoices(query)
            .into_iter()
            .skip(range.offset() as usize)
            .take(range.limit() as usize)
            .map(|(inv, c)| InvoicesTableRow {
                id: inv.id,
                customer_id: inv.customer_id,
                amount: inv.amount,
                date: inv.date,
                status: inv.status.clone(),
                name: Some(c.name.clone()),
                email: Some(c.email.clone()),
                image_url: Some(c.image_url.clone()),
            })
            .collect())
    }

    async fn count_filtered_invoices(&self, query: &str) -> Result<Option<i64>, AppError> {
        self.check("count_filtered_invoices")?;
        let count = self.matching_invoices(query).len() as i64;
        Ok((!self.null_counts).then_some(count))
    }

    async fn fetch_invoice_by_id(&self, id: Uuid) -> Result<Vec<InvoiceFormRow>, AppError> {
        self.check("invoice_by_id")?;
        Ok(self
            .invoices
            .iter()
            .filter(|inv| inv.id == id)
            .take(2)
            .map(|inv| InvoiceFormRow {
                id: inv.id,
                customer_id: inv.customer_id,
                amount: inv.amount,
                status: inv.status.clone(),
            })
            .collect())
    }

    async fn fetch_customers(&self) -> Result<Vec<CustomerField>, AppError> {
        self.check("customers")?;
        let mut customers: Vec<CustomerField> = self
            .customers
            .iter()
            .map(|c| CustomerField {
                id: c.id,
                name: c.name.clone(),
            })
            .collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }

    async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerInvoicesRow>, AppError> {
        self.check("filtered_customers")?;
        let mut customers: Vec<CustomerInvoicesRow> = self
            .customers
            .iter()
            .filter(|c| Self::name_matches(&c.name, query))
            .map(|c| CustomerInvoicesRow {
                id: c.id,
                name: c.name.clone(),
                email: c.email.clone(),
                image_url: c.image_url.clone(),
                invoices: self
                    .invoices
                    .iter()
                    .filter(|inv| inv.customer_id == c.id)
                    .map(|inv| InvoiceStatusRow {
                        status: inv.status.clone(),
                        amount: inv.amount,
                    })
                    .collect(),
            })
            .collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }
}

/// Sete faturas de três clientes, usadas pela maioria dos testes.
pub fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_customer("Delba de Oliveira")
        .with_customer("Lee Robinson")
        .with_customer("Amy Burns")
        .with_invoice("Delba de Oliveira", 15795, "pending", "2022-12-06")
        .with_invoice("Lee Robinson", 20348, "pending", "2022-11-14")
        .with_invoice("Amy Burns", 3040, "paid", "2022-10-29")
        .with_invoice("Delba de Oliveira", 44800, "paid", "2023-09-10")
        .with_invoice("Lee Robinson", 34577, "pending", "2023-08-05")
        .with_invoice("Amy Burns", 54246, "pending", "2023-07-16")
        .with_invoice("Amy Burns", 666, "overdue", "2023-06-27")
}
