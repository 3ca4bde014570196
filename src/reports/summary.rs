//! Investment summary computation.
//!
//! Pure derivation over (catalog, holdings): no IO, no error conditions. An
//! empty holdings set yields a zero total and no lines.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Session;

/// One purchased position: quantity, unit price, and line total.
///
/// Serde renames match the CSV header row (`Stock,Quantity,Price,Total`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    #[serde(rename = "Stock")]
    pub symbol: String,
    #[serde(rename = "Quantity")]
    pub quantity: u64,
    #[serde(rename = "Price")]
    pub price: Decimal,
    #[serde(rename = "Total")]
    pub total: Decimal,
}

/// Complete investment summary: one line per symbol with a positive quantity,
/// in catalog insertion order, plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub lines: Vec<ReportLine>,
    pub total: Decimal,
}

impl SummaryReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Compute the investment summary for a session.
///
/// Symbols with zero quantity are skipped. Every symbol with a positive
/// quantity is guaranteed a catalog price by `Session::add_quantity`, so the
/// price lookup cannot miss; a defaulted zero would only ever hide a bug in
/// that invariant.
pub fn summarize(session: &Session) -> SummaryReport {
    let mut lines = Vec::new();
    let mut total = Decimal::ZERO;

    for symbol in session.catalog.symbols() {
        let quantity = session.holdings.quantity(symbol);
        if quantity == 0 {
            continue;
        }
        let price = session.catalog.price(symbol).unwrap_or(Decimal::ZERO);
        let line_total = price * Decimal::from(quantity);
        total += line_total;
        lines.push(ReportLine {
            symbol: symbol.to_string(),
            quantity,
            price,
            total: line_total,
        });
    }

    SummaryReport { lines, total }
}
