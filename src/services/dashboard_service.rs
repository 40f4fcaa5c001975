// src/services/dashboard_service.rs

use tracing::{debug, error};
use uuid::Uuid;

use crate::{
    common::{
        currency::format_currency,
        error::{AppError, DashboardError, FailureKind, Operation},
        pagination::{page_count, PageRange},
    },
    db::DynDashboardStore,
    models::{
        customer::{CustomerField, CustomerTableRow},
        dashboard::{CardSummary, LatestInvoice, Revenue},
        invoice::{InvoiceForm, InvoicesTable, StatusTotals},
    },
};

#[derive(Clone)]
pub struct DashboardService {
    store: DynDashboardStore,
}

impl DashboardService {
    pub fn new(store: DynDashboardStore) -> Self {
        Self { store }
    }

    // Loga o detalhe e devolve só a mensagem fixa da operação
    fn fail(operation: Operation, err: AppError) -> DashboardError {
        match &err {
            AppError::AggregateError(errors) => {
                for inner in errors {
                    error!(?operation, "Falha em consulta concorrente: {inner}");
                }
            }
            _ => error!(?operation, "{err}"),
        }
        DashboardError::new(operation, FailureKind::from(&err))
    }

    pub async fn get_revenue(&self) -> Result<Vec<Revenue>, DashboardError> {
        let revenue = self
            .store
            .fetch_revenue()
            .await
            .map_err(|e| Self::fail(Operation::Revenue, e))?;

        debug!(rows = revenue.len(), "Receita carregada");
        Ok(revenue)
    }

    pub async fn get_latest_invoices(
        &self,
        limit: i64,
    ) -> Result<Vec<LatestInvoice>, DashboardError> {
        let op = Operation::LatestInvoices;

        let rows = self
            .store
            .fetch_latest_invoices(limit)
            .await
            .map_err(|e| Self::fail(op, e))?;

        rows.into_iter()
            .map(LatestInvoice::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Self::fail(op, e))
    }

    /// As três consultas saem juntas. Se qualquer uma falhar, o resumo inteiro falha.
    pub async fn get_card_summary(&self) -> Result<CardSummary, DashboardError> {
        let (invoice_count, customer_count, statuses) = tokio::join!(
            self.store.count_invoices(),
            self.store.count_customers(),
            self.store.fetch_invoice_statuses(),
        );

        let results = (invoice_count, customer_count, statuses);
        let (invoice_count, customer_count, statuses) = match results {
            (Ok(invoices), Ok(customers), Ok(statuses)) => (invoices, customers, statuses),
            (invoices, customers, statuses) => {
                let errors: Vec<AppError> = [invoices.err(), customers.err(), statuses.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                return Err(Self::fail(Operation::CardData, AppError::AggregateError(errors)));
            }
        };

        let totals = StatusTotals::from_rows(&statuses);

        Ok(CardSummary {
            number_of_customers: customer_count.unwrap_or(0),
            number_of_invoices: invoice_count.unwrap_or(0),
            total_paid_invoices: format_currency(totals.paid),
            total_pending_invoices: format_currency(totals.pending),
        })
    }

    pub async fn search_invoices(
        &self,
        query: &str,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<InvoicesTable>, DashboardError> {
        let op = Operation::FilteredInvoices;
        let range = PageRange::new(page, page_size);

        let rows = self
            .store
            .fetch_filtered_invoices(query, range)
            .await
            .map_err(|e| Self::fail(op, e))?;

        debug!(query, page, rows = rows.len(), "Faturas filtradas");

        rows.into_iter()
            // O banco não deveria mandar mais que o limite, mas a tela só comporta uma página
            .take(range.limit() as usize)
            .map(InvoicesTable::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Self::fail(op, e))
    }

    pub async fn count_invoice_pages(
        &self,
        query: &str,
        page_size: i64,
    ) -> Result<i64, DashboardError> {
        let op = Operation::InvoicePages;

        let count = self
            .store
            .count_filtered_invoices(query)
            .await
            .map_err(|e| Self::fail(op, e))?
            .ok_or_else(|| {
                Self::fail(op, AppError::NotFoundOrEmpty("contagem de faturas nula".into()))
            })?;

        Ok(page_count(count, page_size))
    }

    pub async fn get_invoice_by_id(&self, id: Uuid) -> Result<InvoiceForm, DashboardError> {
        let op = Operation::InvoiceById;

        let mut rows = self
            .store
            .fetch_invoice_by_id(id)
            .await
            .map_err(|e| Self::fail(op, e))?;

        // Exatamente uma linha; zero ou várias é erro
        match (rows.pop(), rows.is_empty()) {
            (Some(row), true) => Ok(InvoiceForm::from(row)),
            (None, _) => Err(Self::fail(
                op,
                AppError::NotFoundOrEmpty(format!("fatura {id} não encontrada")),
            )),
            (Some(_), false) => Err(Self::fail(
                op,
                AppError::NotFoundOrEmpty(format!("mais de uma fatura com id {id}")),
            )),
        }
    }

    pub async fn get_customers_list(&self) -> Result<Vec<CustomerField>, DashboardError> {
        self.store
            .fetch_customers()
            .await
            .map_err(|e| Self::fail(Operation::CustomersList, e))
    }

    pub async fn search_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerTableRow>, DashboardError> {
        let customers = self
            .store
            .fetch_filtered_customers(query)
            .await
            .map_err(|e| Self::fail(Operation::CustomerTable, e))?;

        debug!(query, rows = customers.len(), "Tabela de clientes");

        Ok(customers.into_iter().map(CustomerTableRow::from).collect())
    }
}
