use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use statement_portal::cli::{handle_config_command, handle_search_command, SearchArgs, SourceArgs};
use statement_portal::config::{PortalPaths, Settings};
use statement_portal::logging::configure_logging;

#[derive(Parser)]
#[command(
    name = "statements",
    author = "Kaylee Beyene",
    version,
    about = "Search and export customer insurance statements",
    long_about = "Statement Portal looks up customer statements by policy number or \
                  customer name, narrows them by document date, totals the amounts, \
                  and exports the results to Excel."
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Write logs to this file instead of the default log location
    #[arg(long, env = "STATEMENT_PORTAL_LOG", global = true)]
    log_file: Option<PathBuf>,

    /// Minimum level of logged records
    #[arg(long, default_value = "info", global = true)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive portal (default)
    #[command(alias = "ui")]
    Tui,

    /// Run one search and print the results
    Search(SearchArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // A missing .env file is normal; the environment may already be set.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let paths = PortalPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        paths.ensure_directories()?;
        settings.save(&paths)?;
    }

    let log_file = cli.log_file.clone().unwrap_or_else(|| paths.log_file());
    let _logger = configure_logging(&log_file, cli.log_level)?;
    log::info!("Statement portal starting");

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let source = cli.source.open(&settings, true)?;
            statement_portal::tui::run_tui(source.as_ref(), &settings, &paths)?;
        }
        Commands::Search(args) => {
            let source = cli.source.open(&settings, true)?;
            handle_search_command(source.as_ref(), &settings, args)?;
        }
        Commands::Config => {
            let source = cli.source.open(&settings, false)?;
            handle_config_command(&paths, &settings, source.as_ref())?;
        }
    }

    log::info!("Statement portal exiting");
    Ok(())
}
