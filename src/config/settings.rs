//! User settings for the statement portal
//!
//! The statement view's schema is not fixed by this program. The view name and
//! the columns the portal relies on are read from the settings file so they
//! can follow whatever the database exposes.

use serde::{Deserialize, Serialize};

use super::paths::PortalPaths;
use crate::error::PortalError;

/// Names of the database view and the columns the portal queries by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// View (optionally schema-qualified) holding one row per statement line
    #[serde(default = "default_view_name")]
    pub view_name: String,

    /// Column matched exactly in Policy ID mode
    #[serde(default = "default_policy_column")]
    pub policy_column: String,

    /// Column matched as a substring in Customer Name mode
    #[serde(default = "default_name_column")]
    pub name_column: String,

    /// Column used for ordering and date filtering
    #[serde(default = "default_date_column")]
    pub date_column: String,

    /// Column summed on the Summary view
    #[serde(default = "default_amount_column")]
    pub amount_column: String,
}

fn default_view_name() -> String {
    "BI_CUSTOMER_STATEMENT_VIEW".to_string()
}

fn default_policy_column() -> String {
    "POLICY_NO".to_string()
}

fn default_name_column() -> String {
    "INSURED_NAME".to_string()
}

fn default_date_column() -> String {
    "DOCUMENT_DATE".to_string()
}

fn default_amount_column() -> String {
    "AMOUNT".to_string()
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            view_name: default_view_name(),
            policy_column: default_policy_column(),
            name_column: default_name_column(),
            date_column: default_date_column(),
            amount_column: default_amount_column(),
        }
    }
}

impl ViewSettings {
    /// Check that every configured name is a plain SQL identifier
    ///
    /// These names are interpolated into the query text, so anything other
    /// than `[A-Za-z_][A-Za-z0-9_$#]*` (dot-separated for the view) is refused.
    pub fn validate(&self) -> Result<(), PortalError> {
        if self.view_name.split('.').count() > 2
            || !self.view_name.split('.').all(is_identifier)
        {
            return Err(PortalError::Config(format!(
                "Invalid view name: '{}'",
                self.view_name
            )));
        }

        for (label, column) in [
            ("policy column", &self.policy_column),
            ("name column", &self.name_column),
            ("date column", &self.date_column),
            ("amount column", &self.amount_column),
        ] {
            if !is_identifier(column) {
                return Err(PortalError::Config(format!(
                    "Invalid {}: '{}'",
                    label, column
                )));
            }
        }

        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '#'))
}

/// Spreadsheet download settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// File name of the downloaded workbook
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Name of the single worksheet
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_file_name() -> String {
    "customer_statements.xlsx".to_string()
}

fn default_sheet_name() -> String {
    "Statements".to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            sheet_name: default_sheet_name(),
        }
    }
}

/// User settings for the statement portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Statement view schema
    #[serde(default)]
    pub view: ViewSettings,

    /// Spreadsheet download settings
    #[serde(default)]
    pub export: ExportSettings,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            view: ViewSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PortalPaths) -> Result<Self, PortalError> {
        let settings_path = paths.settings_file();

        let settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PortalError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str::<Settings>(&contents).map_err(|e| {
                PortalError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            // Don't save yet - let caller decide when to persist
            Settings::default()
        };

        settings.view.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PortalPaths) -> Result<(), PortalError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PortalError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PortalError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
