//! Summary statistics
//!
//! Record count and amount total shown on the Summary view.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::ResultSet;

/// Totals for one result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of rows
    pub record_count: usize,
    /// Sum of the amount column, or `None` when there is no such column
    pub total_amount: Option<Decimal>,
    /// Non-null amounts that could not be read as numbers
    pub skipped_amounts: usize,
}

impl Summary {
    /// Compute the summary of a (filtered) result set
    ///
    /// NULL and non-numeric amounts contribute nothing to the total; the
    /// non-numeric ones are counted in `skipped_amounts`.
    pub fn calculate(results: &ResultSet, amount_column: &str) -> Self {
        let mut skipped_amounts = 0;
        let total_amount = results.column_index(amount_column).map(|index| {
            let mut total = Decimal::ZERO;
            for value in results.column_values(index) {
                match value.as_decimal() {
                    Some(amount) => total += amount,
                    None if value.is_null() => {}
                    None => {
                        log::warn!("Amount '{}' is not a usable number; left out of the total", value);
                        skipped_amounts += 1;
                    }
                }
            }
            total
        });

        Self {
            record_count: results.len(),
            total_amount,
            skipped_amounts,
        }
    }

    /// Total formatted for display, e.g. `1,234.50`
    pub fn formatted_total(&self) -> Option<String> {
        self.total_amount.map(format_amount)
    }
}

/// Format an amount with thousands separators and two decimal places
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded);

    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatementRecord, Value};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn amounts(values: Vec<Value>) -> ResultSet {
        ResultSet::with_rows(
            vec!["POLICY_NO".into(), "AMOUNT".into()],
            values
                .into_iter()
                .map(|v| StatementRecord::new(vec![Value::Text("P".into()), v]))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_statement_example() {
        let results = amounts(vec![
            Value::Number(dec("100.00")),
            Value::Number(dec("250.50")),
            Value::Number(dec("49.50")),
        ]);

        let summary = Summary::calculate(&results, "AMOUNT");
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.formatted_total().as_deref(), Some("400.00"));
    }

    #[test]
    fn test_nulls_are_skipped() {
        let results = amounts(vec![
            Value::Number(dec("10")),
            Value::Null,
            Value::Text("12.5".into()),
            Value::Text("n/a".into()),
        ]);

        let summary = Summary::calculate(&results, "amount");
        assert_eq!(summary.record_count, 4);
        assert_eq!(summary.total_amount, Some(dec("22.5")));
        assert_eq!(summary.skipped_amounts, 1);
    }

    #[test]
    fn test_amount_beyond_decimal_range_is_counted_as_skipped() {
        let results = amounts(vec![
            Value::Number(dec("100.00")),
            Value::Text("1234567890123456789012345678901".into()),
        ]);

        let summary = Summary::calculate(&results, "AMOUNT");
        assert_eq!(summary.total_amount, Some(dec("100.00")));
        assert_eq!(summary.skipped_amounts, 1);
    }

    #[test]
    fn test_no_amount_column() {
        let results = amounts(vec![Value::Number(dec("10"))]);
        let summary = Summary::calculate(&results, "PREMIUM");
        assert_eq!(summary.record_count, 1);
        assert_eq!(summary.total_amount, None);
        assert_eq!(summary.formatted_total(), None);
    }

    #[test]
    fn test_empty_result() {
        let summary = Summary::calculate(&amounts(vec![]), "AMOUNT");
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.formatted_total().as_deref(), Some("0.00"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec("0")), "0.00");
        assert_eq!(format_amount(dec("999.995")), "1,000.00");
        assert_eq!(format_amount(dec("1234567.8")), "1,234,567.80");
        assert_eq!(format_amount(dec("-1234.5")), "-1,234.50");
        assert_eq!(format_amount(dec("123456")), "123,456.00");
    }
}
