// src/common/currency.rs

use rust_decimal::Decimal;

/// Converte um valor em centavos (unidade menor) para a unidade maior.
/// `Decimal::new(v, 2)` é exatamente `v / 100`, sem arredondamento.
pub fn minor_to_major(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

/// Formata centavos como moeda em dólar, com separador de milhar.
/// Ex: 123456 -> "$1,234.56", -500 -> "-$5.00"
pub fn format_currency(amount: i64) -> String {
    let abs = amount.unsigned_abs();
    let major = abs / 100;
    let minor = abs % 100;

    let digits = major.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}${grouped}.{minor:02}")
}
