//! Document date filter
//!
//! Narrows a result set to an inclusive range of document dates after the
//! query has run.

use crate::models::{DateRange, ResultSet};

/// Keep only rows whose document date lies within `range`
///
/// A no-op when no range is given or the result set has no document-date
/// column. When the filter applies, rows with a missing or unreadable date
/// are dropped. Row order is preserved.
pub fn filter_by_document_date(
    mut results: ResultSet,
    range: Option<&DateRange>,
    date_column: &str,
) -> ResultSet {
    let Some(range) = range else {
        return results;
    };
    let Some(index) = results.column_index(date_column) else {
        log::debug!("No {} column; date filter skipped", date_column);
        return results;
    };

    if range.is_reversed() {
        log::warn!("Date range {} is reversed; no rows can match", range);
    }

    let before = results.len();
    results.retain(|row| {
        row.get(index)
            .and_then(|value| value.as_date())
            .map(|date| range.contains(date))
            .unwrap_or(false)
    });

    log::debug!(
        "Date filter {} kept {} of {} rows",
        range,
        results.len(),
        before
    );
    results
}
