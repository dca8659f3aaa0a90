//! Service layer for the statement portal
//!
//! The service layer ties the query executor to the result post-processing,
//! handling validation and outcome reporting for the CLI and TUI alike.

pub mod search;

pub use search::{SearchOutcome, SearchService};
