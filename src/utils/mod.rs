//! Utility functions for formatting and common operations
//!
//! This module provides centralized formatting utilities so the terminal
//! summary and the exported text report agree on how values look.

use rust_decimal::Decimal;

/// Format a Decimal with US locale conventions, no currency symbol:
/// thousands separated by `,`, two decimal places.
///
/// # Examples
/// ```
/// use tally::utils::format_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(1234.56)), "1,234.56");
/// assert_eq!(format_amount(dec!(0)), "0.00");
/// assert_eq!(format_amount(dec!(-500)), "-500.00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let is_negative = value < Decimal::ZERO;

    // Round to 2 decimal places and format
    let formatted = format!("{:.2}", value.abs());
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = parts.get(1).unwrap_or(&"00");

    // Add thousands separators (,) to integer part
    let with_separators: String = integer_part
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec![',', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let sign = if is_negative { "-" } else { "" };
    format!("{}{}.{}", sign, with_separators, decimal_part)
}

/// Format as US Dollars with symbol: "$1,234.56"
///
/// # Examples
/// ```
/// use tally::utils::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
/// assert_eq!(format_currency(dec!(-500)), "$-500.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("${}", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
        assert_eq!(format_currency(dec!(0.99)), "$0.99");
        assert_eq!(format_currency(dec!(1000000)), "$1,000,000.00");
    }

    #[test]
    fn test_format_currency_small_values() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(0.01)), "$0.01");
        assert_eq!(format_currency(dec!(1)), "$1.00");
        assert_eq!(format_currency(dec!(12)), "$12.00");
        assert_eq!(format_currency(dec!(123)), "$123.00");
        assert_eq!(format_currency(dec!(999.99)), "$999.99");
    }

    #[test]
    fn test_format_currency_large_values() {
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
        assert_eq!(format_currency(dec!(12345)), "$12,345.00");
        assert_eq!(format_currency(dec!(123456)), "$123,456.00");
        assert_eq!(format_currency(dec!(1234567)), "$1,234,567.00");
        assert_eq!(format_currency(dec!(12345678.90)), "$12,345,678.90");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1234.56)), "$-1,234.56");
        assert_eq!(format_currency(dec!(-0.01)), "$-0.01");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(1234.56)), "1,234.56");
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(-500)), "-500.00");
    }
}
