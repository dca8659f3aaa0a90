//! Query executor
//!
//! Builds the single statement query for a search and runs it against a
//! [`StatementSource`]: the live Oracle view, or a CSV extract of it.

pub mod database;
pub mod fixture;
pub mod statement;

pub use database::OracleSource;
pub use fixture::CsvSource;
pub use statement::{Predicate, StatementQuery};

use crate::error::PortalResult;
use crate::models::ResultSet;

/// Somewhere statement rows can be fetched from
pub trait StatementSource {
    /// Run a query and return every matching row with the column names
    ///
    /// Any connection or cursor opened here must be released before returning,
    /// on success and on error alike.
    fn fetch(&self, query: &StatementQuery) -> PortalResult<ResultSet>;

    /// Human-readable description of where rows come from
    fn describe(&self) -> String;
}
