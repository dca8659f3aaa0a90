//! CLI command showing the resolved configuration

use crate::config::{PortalPaths, Settings};
use crate::error::PortalResult;
use crate::query::StatementSource;

/// Print paths, view schema and the statement source (never the password)
pub fn handle_config_command(
    paths: &PortalPaths,
    settings: &Settings,
    source: &dyn StatementSource,
) -> PortalResult<()> {
    println!("Statement Portal Configuration");
    println!("==============================");
    println!("Home directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Statement source: {}", source.describe());
    println!();
    println!("View:");
    println!("  Name:           {}", settings.view.view_name);
    println!("  Policy column:  {}", settings.view.policy_column);
    println!("  Name column:    {}", settings.view.name_column);
    println!("  Date column:    {}", settings.view.date_column);
    println!("  Amount column:  {}", settings.view.amount_column);
    println!();
    println!("Export:");
    println!("  File name:      {}", settings.export.file_name);
    println!("  Sheet name:     {}", settings.export.sheet_name);

    Ok(())
}
