//! Statement query construction
//!
//! Every search issues exactly one parameterized SELECT against the statement
//! view. The search value is always bound, never spliced into the SQL text.

use crate::config::ViewSettings;
use crate::models::{SearchCriteria, SearchMode, Value};

/// Escape character used in the LIKE clause
pub const LIKE_ESCAPE: char = '\\';

/// Row predicate of a statement query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Policy number equals the value exactly
    PolicyEquals(String),
    /// Trimmed, upper-cased name contains the value
    NameContains(String),
}

impl Predicate {
    /// Predicate for validated criteria
    pub fn for_criteria(criteria: &SearchCriteria) -> Self {
        let value = criteria.value.trim().to_string();
        match criteria.mode {
            SearchMode::PolicyId => Self::PolicyEquals(value),
            SearchMode::CustomerName => Self::NameContains(value),
        }
    }

    /// The column this predicate tests
    pub fn column<'a>(&self, view: &'a ViewSettings) -> &'a str {
        match self {
            Self::PolicyEquals(_) => &view.policy_column,
            Self::NameContains(_) => &view.name_column,
        }
    }

    /// Value bound to `:1`
    pub fn bind_value(&self) -> String {
        match self {
            Self::PolicyEquals(value) => value.clone(),
            Self::NameContains(value) => format!("%{}%", escape_like(value)),
        }
    }

    /// Evaluate the predicate against the tested column's value
    ///
    /// Mirrors what the database does with the SQL from [`StatementQuery::build`]:
    /// NULL never matches.
    pub fn matches(&self, cell: &Value) -> bool {
        let Some(text) = cell.as_text() else {
            return false;
        };

        match self {
            Self::PolicyEquals(value) => text == *value,
            Self::NameContains(value) => text
                .trim()
                .to_uppercase()
                .contains(&value.to_uppercase()),
        }
    }
}

/// A ready-to-run statement query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementQuery {
    pub predicate: Predicate,
    pub sql: String,
}

impl StatementQuery {
    /// Build the SELECT for some criteria
    ///
    /// The view and column names must already have passed
    /// [`ViewSettings::validate`].
    pub fn build(criteria: &SearchCriteria, view: &ViewSettings) -> Self {
        let predicate = Predicate::for_criteria(criteria);

        let condition = match predicate {
            Predicate::PolicyEquals(_) => format!("{} = :1", view.policy_column),
            Predicate::NameContains(_) => format!(
                "UPPER(TRIM({})) LIKE UPPER(:1) ESCAPE '{}'",
                view.name_column, LIKE_ESCAPE
            ),
        };

        let sql = format!(
            "SELECT * FROM {} WHERE {} ORDER BY {} DESC",
            view.view_name, condition, view.date_column
        );

        Self { predicate, sql }
    }
}

/// Escape LIKE wildcards so user text matches literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
