//! CLI command for one-shot searches
//!
//! Runs a single search, prints the result table and summary, and optionally
//! exports the results.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{format_results_table, format_summary};
use crate::error::{PortalError, PortalResult};
use crate::export::{export_results_csv, write_results_xlsx};
use crate::models::SearchMode;
use crate::query::StatementSource;
use crate::services::{SearchOutcome, SearchService};

/// Search key options
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum SearchBy {
    /// Exact policy number
    #[default]
    Policy,
    /// Partial, case-insensitive customer name
    Name,
}

impl From<SearchBy> for SearchMode {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Policy => SearchMode::PolicyId,
            SearchBy::Name => SearchMode::CustomerName,
        }
    }
}

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ExportFormat {
    /// Excel workbook
    #[default]
    Xlsx,
    /// Comma-separated values
    Csv,
}

/// Arguments of the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Policy number or part of a customer name
    pub value: String,

    /// What the value is matched against
    #[arg(short, long, value_enum, default_value = "policy")]
    pub by: SearchBy,

    /// Earliest document date (YYYY-MM-DD); needs --end
    #[arg(short, long, requires = "end")]
    pub start: Option<NaiveDate>,

    /// Latest document date (YYYY-MM-DD); needs --start
    #[arg(short, long, requires = "start")]
    pub end: Option<NaiveDate>,

    /// Export results to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    pub format: ExportFormat,
}

/// Handle the search command
pub fn handle_search_command(
    source: &dyn StatementSource,
    settings: &Settings,
    args: SearchArgs,
) -> PortalResult<()> {
    let service = SearchService::new(source, &settings.view);
    let outcome = service.submit(args.by.into(), &args.value, args.start, args.end)?;

    println!("{}", outcome.message());

    let SearchOutcome::Found { results, summary } = outcome else {
        return Ok(());
    };

    println!();
    println!("{}", format_results_table(&results));
    println!();
    println!("{}", format_summary(&summary));

    if let Some(output) = args.output {
        match args.format {
            ExportFormat::Xlsx => {
                write_results_xlsx(&results, &settings.export.sheet_name, &output)?;
            }
            ExportFormat::Csv => {
                let file = File::create(&output).map_err(|e| {
                    PortalError::Export(format!(
                        "Failed to create file {}: {}",
                        output.display(),
                        e
                    ))
                })?;
                export_results_csv(&results, BufWriter::new(file))?;
            }
        }
        println!();
        println!("Exported {} record(s) to {}", results.len(), output.display());
    }

    Ok(())
}
