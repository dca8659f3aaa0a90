//! Result post-processing
//!
//! Client-side work done on the rows a query returned:
//! - Document date filtering
//! - Summary statistics (record count and amount total)

pub mod date_filter;
pub mod summary;

pub use date_filter::filter_by_document_date;
pub use summary::{format_amount, Summary};
