//! Database connection settings
//!
//! Connection details come from the environment (`DB_HOST`, `DB_PORT`,
//! `DB_SERVICE`, `DB_USER`, `DB_PASS`), optionally seeded from a `.env` file.
//! They are only checked when a connection is actually needed, so offline
//! commands work without them.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::PortalError;

/// Default Oracle listener port
pub const DEFAULT_PORT: u16 = 1521;

/// Raw, possibly incomplete, connection values as read from the environment
#[derive(Default, Clone)]
pub struct DatabaseParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub service: Option<String>,
    pub user: Option<String>,
    pub password: Option<Zeroizing<String>>,
}

impl fmt::Debug for DatabaseParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("service", &self.service)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Complete connection settings for the statement database
#[derive(Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub service: String,
    pub user: String,
    password: Zeroizing<String>,
}

impl DatabaseSettings {
    /// Build settings from environment values, naming the first missing variable
    pub fn from_params(params: DatabaseParams) -> Result<Self, PortalError> {
        let host = required(params.host, "DB_HOST")?;
        let service = required(params.service, "DB_SERVICE")?;
        let user = required(params.user, "DB_USER")?;
        let password = params
            .password
            .ok_or_else(|| PortalError::Config("DB_PASS is not set".into()))?;

        Ok(Self {
            host,
            port: params.port.unwrap_or(DEFAULT_PORT),
            service,
            user,
            password,
        })
    }

    /// The account password
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Full TNS connect descriptor for the configured listener and service
    pub fn connect_descriptor(&self) -> String {
        format!(
            "(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST={})(PORT={}))(CONNECT_DATA=(SERVICE_NAME={})))",
            self.host, self.port, self.service
        )
    }

    /// Short `user@host:port/service` form for display and logs
    pub fn target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.service)
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("service", &self.service)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

fn required(value: Option<String>, name: &str) -> Result<String, PortalError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(PortalError::Config(format!("{} is not set", name))),
    }
}
