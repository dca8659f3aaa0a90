//! CSV extract statement source
//!
//! Treats a CSV export of the statement view as the view itself, so the
//! portal can run without a database. The query's predicate and ordering are
//! evaluated in-process with the same semantics the database applies.

use std::cmp::Ordering;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use super::statement::StatementQuery;
use super::StatementSource;
use crate::config::ViewSettings;
use crate::error::{PortalError, PortalResult};
use crate::models::value::{parse_date_time, parse_decimal};
use crate::models::{ResultSet, StatementRecord, Value};

/// Statement source backed by a CSV extract of the view
pub struct CsvSource {
    path: PathBuf,
    view: ViewSettings,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, view: ViewSettings) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}

impl StatementSource for CsvSource {
    fn fetch(&self, query: &StatementQuery) -> PortalResult<ResultSet> {
        let file = File::open(&self.path).map_err(|e| {
            PortalError::Io(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        let extract = read_extract(file, &self.view)?;
        run_query(extract, query, &self.view)
    }

    fn describe(&self) -> String {
        format!("CSV extract {}", self.path.display())
    }
}

/// Read a whole extract, typing the date and amount columns
pub fn read_extract<R: Read>(reader: R, view: &ViewSettings) -> PortalResult<ResultSet> {
    let mut reader = csv::Reader::from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut extract = ResultSet::new(columns);

    let date_index = extract.column_index(&view.date_column);
    let amount_index = extract.column_index(&view.amount_column);

    for record in reader.records() {
        let record = record?;
        let values = record
            .iter()
            .enumerate()
            .map(|(i, field)| {
                if Some(i) == date_index {
                    typed_cell(field, |s| parse_date_time(s).map(Value::DateTime))
                } else if Some(i) == amount_index {
                    typed_cell(field, |s| parse_decimal(s).map(Value::Number))
                } else {
                    typed_cell(field, |_| None)
                }
            })
            .collect();
        extract.push(StatementRecord::new(values))?;
    }

    Ok(extract)
}

/// Empty fields are NULL; fields that don't parse as the column's type stay text
fn typed_cell<F>(field: &str, parse: F) -> Value
where
    F: Fn(&str) -> Option<Value>,
{
    if field.trim().is_empty() {
        Value::Null
    } else {
        parse(field).unwrap_or_else(|| Value::Text(field.to_string()))
    }
}

/// Apply a statement query to an extract
pub fn run_query(
    extract: ResultSet,
    query: &StatementQuery,
    view: &ViewSettings,
) -> PortalResult<ResultSet> {
    let filter_column = query.predicate.column(view);
    let filter_index = extract
        .column_index(filter_column)
        .ok_or_else(|| missing_column(filter_column))?;
    let date_index = extract
        .column_index(&view.date_column)
        .ok_or_else(|| missing_column(&view.date_column))?;

    let columns = extract.columns().to_vec();
    let mut rows: Vec<StatementRecord> = extract
        .rows()
        .iter()
        .filter(|row| {
            row.get(filter_index)
                .map(|cell| query.predicate.matches(cell))
                .unwrap_or(false)
        })
        .cloned()
        .collect();

    rows.sort_by(|a, b| descending_nulls_first(sort_key(a, date_index), sort_key(b, date_index)));

    ResultSet::with_rows(columns, rows)
}

fn sort_key(row: &StatementRecord, index: usize) -> Option<NaiveDateTime> {
    match row.get(index)? {
        Value::DateTime(dt) => Some(*dt),
        Value::Text(s) => parse_date_time(s),
        _ => None,
    }
}

/// `ORDER BY ... DESC` ordering: NULLs sort first, then newest to oldest
fn descending_nulls_first(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => b.cmp(&a),
    }
}

fn missing_column(name: &str) -> PortalError {
    PortalError::Query(format!("Column {} not found in extract", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SearchCriteria, SearchMode};
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXTRACT: &str = "\
POLICY_NO,INSURED_NAME,DOCUMENT_DATE,AMOUNT
G/001/07/3005/2020/0007,ACME LTD,2024-01-15,100.00
G/001/07/3005/2020/0008,Acme Holdings ,2024-02-01,75.25
G/001/07/3005/2020/0007,ACME LTD,2024-03-10 08:00:00,250.50
G/001/07/3005/2020/0007,ACME LTD,2023-12-31,49.50
G/002/01/1000/2021/0001,BETA MUTUAL,,12.00
";

    fn query(mode: SearchMode, value: &str) -> StatementQuery {
        let criteria = SearchCriteria::new(mode, value, None, None).unwrap();
        StatementQuery::build(&criteria, &ViewSettings::default())
    }

    fn extract() -> ResultSet {
        read_extract(EXTRACT.as_bytes(), &ViewSettings::default()).unwrap()
    }

    #[test]
    fn test_read_extract_types_columns() {
        let extract = extract();
        assert_eq!(extract.len(), 5);
        assert_eq!(
            extract.columns(),
            &["POLICY_NO", "INSURED_NAME", "DOCUMENT_DATE", "AMOUNT"]
        );

        let first = &extract.rows()[0];
        assert!(matches!(first.get(2), Some(Value::DateTime(_))));
        assert_eq!(first.get(3), Some(&Value::Number(Decimal::new(10000, 2))));
        assert_eq!(extract.rows()[4].get(2), Some(&Value::Null));
    }

    #[test]
    fn test_policy_query_exact_and_ordered() {
        let results = run_query(
            extract(),
            &query(SearchMode::PolicyId, "G/001/07/3005/2020/0007"),
            &ViewSettings::default(),
        )
        .unwrap();

        let dates: Vec<String> = results.column_values(2).map(|v| v.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2024-03-10 08:00:00", "2024-01-15", "2023-12-31"]
        );
    }

    #[test]
    fn test_name_query_substring() {
        let results = run_query(
            extract(),
            &query(SearchMode::CustomerName, "acme"),
            &ViewSettings::default(),
        )
        .unwrap();
        assert_eq!(results.len(), 4);

        let none = run_query(
            extract(),
            &query(SearchMode::CustomerName, "gamma"),
            &ViewSettings::default(),
        )
        .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_null_dates_sort_first() {
        let results = run_query(
            extract(),
            &query(SearchMode::CustomerName, "a"),
            &ViewSettings::default(),
        )
        .unwrap();
        assert_eq!(results.rows()[0].get(2), Some(&Value::Null));
    }

    #[test]
    fn test_missing_column() {
        let mut view = ViewSettings::default();
        view.policy_column = "POLICY_ID".into();
        let err = run_query(
            extract(),
            &StatementQuery::build(
                &SearchCriteria::new(SearchMode::PolicyId, "x", None, None).unwrap(),
                &view,
            ),
            &view,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Query error: Column POLICY_ID not found in extract");
    }

    #[test]
    fn test_fetch_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(EXTRACT.as_bytes()).unwrap();

        let source = CsvSource::new(file.path(), ViewSettings::default());
        let results = source
            .fetch(&query(SearchMode::PolicyId, "G/002/01/1000/2021/0001"))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(source.describe().starts_with("CSV extract"));
    }
}
