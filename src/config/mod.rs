//! Configuration module for the statement portal
//!
//! This module provides configuration management including:
//! - Path resolution for settings, exports and logs
//! - The statement view schema and export settings
//! - Database connection settings

pub mod database;
pub mod paths;
pub mod settings;

pub use database::{DatabaseParams, DatabaseSettings};
pub use paths::PortalPaths;
pub use settings::{ExportSettings, Settings, ViewSettings};
