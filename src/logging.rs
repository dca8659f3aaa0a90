//! File logging
//!
//! The terminal belongs to the UI, so log records go to a file.

use std::path::Path;

use flexi_logger::writers::FileLogWriter;
use flexi_logger::{FileSpec, LogSpecification, Logger, LoggerHandle};
use log::LevelFilter;

use crate::error::{PortalError, PortalResult};

/// Start logging to `path` at `level`
///
/// The returned handle must be kept alive for as long as logging is wanted.
pub fn configure_logging(path: &Path, level: LevelFilter) -> PortalResult<LoggerHandle> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| PortalError::Io(format!("Failed to create log directory: {}", e)))?;
    }

    let log_specification = LogSpecification::builder().default(level).build();

    let file_spec = FileSpec::try_from(path)
        .map_err(|e| PortalError::Config(format!("Invalid log file {}: {}", path.display(), e)))?
        .suppress_timestamp();
    let file_log_writer = FileLogWriter::builder(file_spec)
        .append()
        .try_build()
        .map_err(|e| PortalError::Config(format!("Failed to open log file: {}", e)))?;

    Logger::with(log_specification)
        .format(flexi_logger::detailed_format)
        .log_to_writer(Box::new(file_log_writer))
        .start()
        .map_err(|e| PortalError::Config(format!("Failed to start logging: {}", e)))
}
