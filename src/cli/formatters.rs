//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of data calculation from presentation.

use colored::Colorize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::catalog::Session;
use crate::reports::SummaryReport;
use crate::utils::{format_amount, format_currency};

/// Format the catalog/holdings snapshot shown before every symbol prompt:
/// every catalog symbol with its price and current quantity, including zero
/// quantities, in catalog insertion order.
pub fn format_catalog_snapshot(session: &Session) -> String {
    #[derive(Tabled)]
    struct SnapshotRow {
        #[tabled(rename = "Symbol")]
        symbol: String,
        #[tabled(rename = "Price")]
        price: String,
        #[tabled(rename = "Quantity")]
        quantity: String,
    }

    let rows: Vec<SnapshotRow> = session
        .catalog
        .symbols()
        .map(|symbol| SnapshotRow {
            symbol: symbol.to_string(),
            price: format_currency(session.catalog.price(symbol).unwrap_or_default()),
            quantity: session.holdings.quantity(symbol).to_string(),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());

    format!(
        "\n{} Available Stocks\n{}\n",
        "📋".cyan().bold(),
        table
    )
}

/// Format the post-loop investment summary for the terminal.
pub fn format_summary(report: &SummaryReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{} Investment Summary\n\n", "📊".cyan().bold()));

    if report.is_empty() {
        output.push_str("No purchased stocks.\n");
    } else {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Stock")]
            symbol: String,
            #[tabled(rename = "Quantity")]
            quantity: u64,
            #[tabled(rename = "Price")]
            price: String,
            #[tabled(rename = "Total")]
            total: String,
        }

        let rows: Vec<SummaryRow> = report
            .lines
            .iter()
            .map(|line| SummaryRow {
                symbol: line.symbol.clone(),
                quantity: line.quantity,
                price: format_currency(line.price),
                total: format_currency(line.total),
            })
            .collect();

        let mut table = Table::new(&rows);
        table.with(Style::modern());
        table.modify(Columns::new(1..), Alignment::right());

        output.push_str(&table.to_string());
        output.push('\n');
    }

    output.push_str(&format!(
        "\n{} {} ${}\n",
        "💰".bold(),
        "Total Investment:".bold(),
        format_amount(report.total)
    ));

    output
}
