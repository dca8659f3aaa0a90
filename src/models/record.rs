//! Statement records and result sets
//!
//! A row's shape is whatever the statement view returns; the only invariant
//! kept here is that every row has exactly one value per column.

use super::value::Value;
use crate::error::{PortalError, PortalResult};

/// One row of the statement view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRecord {
    values: Vec<Value>,
}

impl StatementRecord {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Values in column order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at a column index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

/// Ordered rows returned for one search, together with their column names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<StatementRecord>,
}

impl ResultSet {
    /// Create an empty result set with the given columns
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a result set from rows, checking each row's width
    pub fn with_rows(columns: Vec<String>, rows: Vec<StatementRecord>) -> PortalResult<Self> {
        let mut set = Self::new(columns);
        for row in rows {
            set.push(row)?;
        }
        Ok(set)
    }

    /// Append a row
    pub fn push(&mut self, row: StatementRecord) -> PortalResult<()> {
        if row.values().len() != self.columns.len() {
            return Err(PortalError::Query(format!(
                "Row has {} values but the result has {} columns",
                row.values().len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[StatementRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, matched case-insensitively
    ///
    /// Oracle reports unquoted identifiers in upper case, while settings and
    /// CSV extracts may not.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Values of one column, in row order
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Keep only the rows matching a predicate, preserving order
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&StatementRecord) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }
}
