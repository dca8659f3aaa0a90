//! Export module for the statement portal
//!
//! Serializes search results for download:
//! - XLSX: the single-sheet workbook offered by the Export view
//! - CSV: the same table as plain text, for scripting

pub mod csv;
pub mod xlsx;

pub use self::csv::export_results_csv;
pub use xlsx::{export_results_xlsx, write_results_xlsx, XLSX_MIME_TYPE};

use std::path::PathBuf;

use crate::config::{ExportSettings, PortalPaths};

/// Where the Export view writes its download
pub fn download_path(paths: &PortalPaths, settings: &ExportSettings) -> PathBuf {
    paths.export_dir().join(&settings.file_name)
}
