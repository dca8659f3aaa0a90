//! Search result display formatting
//!
//! Formats result sets and summaries for terminal output.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::ResultSet;
use crate::reports::Summary;

/// Longest cell shown before truncation
const MAX_CELL_WIDTH: usize = 40;

/// Format a result set as a table
///
/// An empty result set still prints its header row.
pub fn format_results_table(results: &ResultSet) -> String {
    let mut builder = Builder::default();
    builder.push_record(results.columns().iter().cloned());
    for record in results.rows() {
        builder.push_record(
            record
                .values()
                .iter()
                .map(|value| truncate(&value.to_string(), MAX_CELL_WIDTH)),
        );
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// Format the summary metrics
pub fn format_summary(summary: &Summary) -> String {
    let mut output = format!("Total Records: {}", summary.record_count);
    if let Some(total) = summary.formatted_total() {
        output.push_str(&format!("\nTotal Amount: {}", total));
    }
    if summary.skipped_amounts > 0 {
        output.push_str(&format!(
            "\n({} non-numeric amount(s) left out of the total)",
            summary.skipped_amounts
        ));
    }
    output
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
