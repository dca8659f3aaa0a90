//! CSV Export functionality
//!
//! Writes a result set as CSV with the same header and rows as the workbook.

use std::io::Write;

use crate::error::PortalResult;
use crate::models::ResultSet;

/// Export a result set to CSV
pub fn export_results_csv<W: Write>(results: &ResultSet, writer: W) -> PortalResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(results.columns())?;
    for record in results.rows() {
        writer.write_record(record.values().iter().map(|value| value.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
