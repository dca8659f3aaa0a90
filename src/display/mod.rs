//! Display formatting for terminal output
//!
//! Provides utilities for formatting search results and summaries for the
//! command-line interface.

pub mod results;

pub use results::{format_results_table, format_summary, truncate};
