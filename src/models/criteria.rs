//! Search criteria
//!
//! One `SearchCriteria` is built per submitted search and discarded once the
//! query has completed.

use chrono::NaiveDate;
use std::fmt;

use crate::error::{PortalError, PortalResult};

/// Which key the statement view is searched by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Exact match on the policy number
    #[default]
    PolicyId,
    /// Case-insensitive substring match on the insured name
    CustomerName,
}

impl SearchMode {
    /// All modes, in the order they are offered to the user
    pub const ALL: [SearchMode; 2] = [SearchMode::PolicyId, SearchMode::CustomerName];

    /// Label shown in the mode selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::PolicyId => "Policy ID",
            Self::CustomerName => "Customer Name",
        }
    }

    /// The other mode
    pub fn toggle(&self) -> Self {
        match self {
            Self::PolicyId => Self::CustomerName,
            Self::CustomerName => Self::PolicyId,
        }
    }

    /// Whether searches in this mode are expected to be slow
    pub fn is_slow(&self) -> bool {
        matches!(self, Self::CustomerName)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inclusive range of document dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range covering `start` through `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range exists only when both bounds are given
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::new(start, end)),
            _ => None,
        }
    }

    /// Check whether a date falls inside the range (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// A reversed range can never match anything
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub mode: SearchMode,
    /// Search value with surrounding whitespace removed, never empty
    pub value: String,
    pub date_range: Option<DateRange>,
}

impl SearchCriteria {
    /// Validate user input into criteria
    ///
    /// Blank values are rejected before any query is built.
    pub fn new(
        mode: SearchMode,
        value: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> PortalResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(PortalError::Validation(
                "Please enter a search value.".into(),
            ));
        }

        Ok(Self {
            mode,
            value: value.to_string(),
            date_range: DateRange::from_bounds(start, end),
        })
    }
}

/// Parse a `YYYY-MM-DD` date typed into a form field; blank means "not set"
pub fn parse_date_input(input: &str, field: &str) -> PortalResult<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            PortalError::Validation(format!(
                "{} must be a date in YYYY-MM-DD format, got '{}'",
                field, input
            ))
        })
}
