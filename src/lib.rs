//! Statement Portal - customer statement search and export
//!
//! This library provides the core functionality for the statement portal: it
//! looks up rows of the customer statement view by policy number or by
//! customer name, narrows them by document date, totals the amounts, and
//! exports the results as an Excel workbook.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, view settings and database connection settings
//! - `error`: Custom error types
//! - `models`: Search criteria, cell values and result sets
//! - `query`: SQL construction and statement sources (Oracle, CSV extract)
//! - `reports`: Date filtering and summary statistics
//! - `services`: The search workflow
//! - `export`: XLSX and CSV serialization
//! - `display`: Plain-text tables for the command line
//! - `cli`: Command handlers
//! - `tui`: The interactive portal
//!
//! # Example
//!
//! ```rust,ignore
//! use statement_portal::config::{PortalPaths, Settings};
//! use statement_portal::models::SearchMode;
//! use statement_portal::query::CsvSource;
//! use statement_portal::services::SearchService;
//!
//! let paths = PortalPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let source = CsvSource::new("statements.csv", settings.view.clone());
//! let outcome = SearchService::new(&source, &settings.view)
//!     .submit(SearchMode::PolicyId, "G/001/07/3005/2020/0007", None, None)?;
//! println!("{}", outcome.message());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod query;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::PortalError;
