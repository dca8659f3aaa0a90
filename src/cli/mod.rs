//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod search;

pub use config::handle_config_command;
pub use search::{handle_search_command, SearchArgs};

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;
use zeroize::Zeroizing;

use crate::config::{DatabaseParams, Settings};
use crate::error::{PortalError, PortalResult};
use crate::query::{CsvSource, OracleSource, StatementSource};

/// Database connection arguments, normally taken from the environment
#[derive(Args, Clone, Default)]
pub struct DatabaseArgs {
    /// Database host
    #[arg(long = "db-host", env = "DB_HOST", global = true)]
    pub host: Option<String>,

    /// Database listener port
    #[arg(long = "db-port", env = "DB_PORT", global = true)]
    pub port: Option<u16>,

    /// Database service name
    #[arg(long = "db-service", env = "DB_SERVICE", global = true)]
    pub service: Option<String>,

    /// Database user
    #[arg(long = "db-user", env = "DB_USER", global = true)]
    pub user: Option<String>,

    /// Database password (prompted for when unset)
    #[arg(long = "db-pass", env = "DB_PASS", hide_env_values = true, global = true)]
    pub password: Option<String>,
}

impl DatabaseArgs {
    /// Connection values as given
    pub fn params(&self) -> DatabaseParams {
        DatabaseParams {
            host: self.host.clone(),
            port: self.port,
            service: self.service.clone(),
            user: self.user.clone(),
            password: self.password.clone().map(Zeroizing::new),
        }
    }

    /// Connection values, prompting for a missing password on a terminal
    pub fn params_interactive(&self) -> PortalResult<DatabaseParams> {
        let mut params = self.params();
        if params.password.is_none() && params.host.is_some() && std::io::stdin().is_terminal() {
            let password = rpassword::prompt_password("Database password: ")
                .map_err(|e| PortalError::Config(format!("Failed to read password: {}", e)))?;
            params.password = Some(Zeroizing::new(password));
        }
        Ok(params)
    }
}

/// Where statement rows are read from
#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// Read statements from a CSV extract of the view instead of the database
    #[arg(long, env = "STATEMENT_PORTAL_FIXTURE", global = true)]
    pub fixture: Option<PathBuf>,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl SourceArgs {
    /// Open the configured statement source
    ///
    /// With `interactive` set, a missing database password is prompted for.
    pub fn open(
        &self,
        settings: &Settings,
        interactive: bool,
    ) -> PortalResult<Box<dyn StatementSource>> {
        if let Some(path) = &self.fixture {
            return Ok(Box::new(CsvSource::new(path, settings.view.clone())));
        }

        let params = if interactive {
            self.database.params_interactive()?
        } else {
            self.database.params()
        };
        Ok(Box::new(OracleSource::new(params)))
    }
}
