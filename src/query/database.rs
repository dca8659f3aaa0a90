//! Oracle-backed statement source
//!
//! A connection is opened for each search and closed again before returning,
//! whether or not the query succeeded. Nothing is pooled. Connection settings
//! are checked per search, so a missing variable surfaces as that search's
//! error rather than preventing start-up.

use chrono::NaiveDateTime;
use oracle::sql_type::OracleType;
use oracle::{Connection, SqlValue};

use super::statement::StatementQuery;
use super::StatementSource;
use crate::config::{DatabaseParams, DatabaseSettings};
use crate::error::PortalResult;
use crate::models::value::parse_decimal;
use crate::models::{ResultSet, StatementRecord, Value};

/// How a column's values are converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Number,
    DateTime,
    Text,
}

impl ColumnKind {
    fn of(oracle_type: &OracleType) -> Self {
        match oracle_type {
            OracleType::Number(_, _)
            | OracleType::Float(_)
            | OracleType::BinaryFloat
            | OracleType::BinaryDouble
            | OracleType::Int64
            | OracleType::UInt64 => Self::Number,
            OracleType::Date
            | OracleType::Timestamp(_)
            | OracleType::TimestampTZ(_)
            | OracleType::TimestampLTZ(_) => Self::DateTime,
            _ => Self::Text,
        }
    }
}

/// Statement source reading the live view over an Oracle connection
pub struct OracleSource {
    params: DatabaseParams,
}

impl OracleSource {
    pub fn new(params: DatabaseParams) -> Self {
        Self { params }
    }
}

impl StatementSource for OracleSource {
    fn fetch(&self, query: &StatementQuery) -> PortalResult<ResultSet> {
        let settings = DatabaseSettings::from_params(self.params.clone())?;

        log::debug!("Connecting to {}", settings.target());
        let conn = Connection::connect(
            &settings.user,
            settings.password(),
            settings.connect_descriptor(),
        )?;

        let result = fetch_rows(&conn, query);

        if let Err(e) = conn.close() {
            log::warn!("Failed to close database connection: {}", e);
        }

        result
    }

    fn describe(&self) -> String {
        match DatabaseSettings::from_params(self.params.clone()) {
            Ok(settings) => settings.target(),
            Err(_) => "unconfigured database".to_string(),
        }
    }
}

fn fetch_rows(conn: &Connection, query: &StatementQuery) -> PortalResult<ResultSet> {
    let bind = query.predicate.bind_value();
    let rows = conn.query(&query.sql, &[&bind])?;

    let columns: Vec<String> = rows
        .column_info()
        .iter()
        .map(|info| info.name().to_string())
        .collect();
    let kinds: Vec<ColumnKind> = rows
        .column_info()
        .iter()
        .map(|info| ColumnKind::of(info.oracle_type()))
        .collect();

    let mut results = ResultSet::new(columns);
    for row in rows {
        let row = row?;
        let values = row
            .sql_values()
            .iter()
            .zip(&kinds)
            .map(|(value, kind)| convert(value, *kind))
            .collect::<PortalResult<Vec<_>>>()?;
        results.push(StatementRecord::new(values))?;
    }

    Ok(results)
}

fn convert(value: &SqlValue, kind: ColumnKind) -> PortalResult<Value> {
    if value.is_null()? {
        return Ok(Value::Null);
    }

    let converted = match kind {
        ColumnKind::Number => {
            let text: String = value.get()?;
            match parse_decimal(&text) {
                Some(number) => Value::Number(number),
                None => Value::Text(text),
            }
        }
        ColumnKind::DateTime => Value::DateTime(value.get::<NaiveDateTime>()?),
        ColumnKind::Text => Value::Text(value.get::<String>()?),
    };

    Ok(converted)
}
