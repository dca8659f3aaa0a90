//! Core data models for the statement portal
//!
//! Search criteria, the values of the statement view, and the rows and result
//! sets a search produces.

pub mod criteria;
pub mod record;
pub mod value;

pub use criteria::{parse_date_input, DateRange, SearchCriteria, SearchMode};
pub use record::{ResultSet, StatementRecord};
pub use value::Value;
