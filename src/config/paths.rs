//! Path management for the statement portal
//!
//! ## Path Resolution Order
//!
//! 1. `STATEMENT_PORTAL_HOME` environment variable (if set)
//! 2. The platform data directory (`~/.local/share/statement-portal` on Linux,
//!    `~/Library/Application Support/statement-portal` on macOS,
//!    `%APPDATA%\statement-portal\data` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PortalError;

/// Manages all paths used by the statement portal
#[derive(Debug, Clone)]
pub struct PortalPaths {
    /// Base directory for settings, exports and logs
    base_dir: PathBuf,
}

impl PortalPaths {
    /// Create a new PortalPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current user.
    pub fn new() -> Result<Self, PortalError> {
        let base_dir = if let Ok(custom) = std::env::var("STATEMENT_PORTAL_HOME") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PortalPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory that downloaded spreadsheets are written to
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Directory for log files
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Default log file
    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join("statements.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), PortalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PortalError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| PortalError::Io(format!("Failed to create export directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| PortalError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, PortalError> {
    ProjectDirs::from("", "", "statement-portal")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PortalError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
        assert_eq!(paths.log_file(), temp_dir.path().join("logs").join("statements.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("STATEMENT_PORTAL_HOME", custom_path);

        let paths = PortalPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("STATEMENT_PORTAL_HOME");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortalPaths::with_base_dir(temp_dir.path().join("portal"));

        paths.ensure_directories().unwrap();

        assert!(paths.export_dir().exists());
        assert!(paths.log_dir().exists());
    }

    #[test]
    fn test_settings_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }
}
