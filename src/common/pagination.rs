// src/common/pagination.rs

/// Itens por página na tabela de faturas
pub const ITEMS_PER_PAGE: i64 = 6;

/// Quantidade de faturas no card "Últimas faturas"
pub const LATEST_INVOICES_LIMIT: i64 = 5;

/// Intervalo [from, to] inclusivo e baseado em zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub from: i64,
    pub to: i64,
}

impl PageRange {
    /// Página começa em 1. Valores menores que 1 são tratados como 1.
    /// Páginas muito altas saturam em i64::MAX (OFFSET além de qualquer linha).
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);

        let from = (page - 1).saturating_mul(page_size);
        let to = from.saturating_add(page_size - 1);

        Self { from, to }
    }

    pub fn offset(&self) -> i64 {
        self.from
    }

    pub fn limit(&self) -> i64 {
        self.to - self.from + 1
    }
}

/// ceil(total / page_size)
pub fn page_count(total: i64, page_size: i64) -> i64 {
    let total = total.max(0);
    let page_size = page_size.max(1);
    total / page_size + i64::from(total % page_size != 0)
}
