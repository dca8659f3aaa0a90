//! Search service
//!
//! Runs one search end to end: validation, the statement query, the document
//! date filter and the summary.

use chrono::NaiveDate;

use crate::config::ViewSettings;
use crate::error::PortalResult;
use crate::models::{ResultSet, SearchCriteria, SearchMode};
use crate::query::{StatementQuery, StatementSource};
use crate::reports::{filter_by_document_date, Summary};

/// What a completed search produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query matched no rows at all
    NoRecords,
    /// The query matched rows; `results` is already date-filtered
    Found { results: ResultSet, summary: Summary },
}

impl SearchOutcome {
    /// Rows to render and export, if any were found
    pub fn results(&self) -> Option<&ResultSet> {
        match self {
            Self::NoRecords => None,
            Self::Found { results, .. } => Some(results),
        }
    }

    pub fn summary(&self) -> Option<&Summary> {
        match self {
            Self::NoRecords => None,
            Self::Found { summary, .. } => Some(summary),
        }
    }

    /// One-line message describing the outcome
    pub fn message(&self) -> String {
        match self {
            Self::NoRecords => "No records found.".to_string(),
            Self::Found { results, .. } => format!("Found {} record(s).", results.len()),
        }
    }
}

/// Service for statement searches
pub struct SearchService<'a> {
    source: &'a dyn StatementSource,
    view: &'a ViewSettings,
}

impl<'a> SearchService<'a> {
    /// Create a new search service
    pub fn new(source: &'a dyn StatementSource, view: &'a ViewSettings) -> Self {
        Self { source, view }
    }

    /// Validate raw form input and run the search
    ///
    /// Blank values fail validation and no query is issued.
    pub fn submit(
        &self,
        mode: SearchMode,
        value: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> PortalResult<SearchOutcome> {
        let criteria = SearchCriteria::new(mode, value, start, end)?;
        self.search(&criteria)
    }

    /// Run a search for validated criteria
    pub fn search(&self, criteria: &SearchCriteria) -> PortalResult<SearchOutcome> {
        let query = StatementQuery::build(criteria, self.view);
        log::info!(
            "Searching by {} against {}",
            criteria.mode,
            self.source.describe()
        );
        log::debug!("Query: {} [{}]", query.sql, query.predicate.bind_value());

        let fetched = self.source.fetch(&query).map_err(|e| {
            log::error!("Search failed: {}", e);
            e
        })?;

        if fetched.is_empty() {
            log::info!("No records found");
            return Ok(SearchOutcome::NoRecords);
        }

        let fetched_count = fetched.len();
        let results = filter_by_document_date(
            fetched,
            criteria.date_range.as_ref(),
            &self.view.date_column,
        );
        let summary = Summary::calculate(&results, &self.view.amount_column);

        log::info!(
            "Fetched {} row(s), {} after date filter",
            fetched_count,
            results.len()
        );

        Ok(SearchOutcome::Found { results, summary })
    }
}
