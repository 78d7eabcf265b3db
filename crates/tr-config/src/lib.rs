//! Trend report configuration loading and resolution.
//!
//! This crate provides:
//! - Typed structs for the config file sections (database, server, report)
//! - Config resolution (explicit path → env → XDG → defaults)
//! - Environment injection for the database connection target
//!
//! The config file carries no secrets. The database path — the connection
//! target — can always be overridden from the environment so deployments
//! never have to write it to disk.

pub mod resolve;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use resolve::{resolve_config, ConfigPaths};

/// Environment variable overriding the database path.
pub const ENV_DB_PATH: &str = "TREND_DB_PATH";

/// Environment variable enabling the simulated row source.
pub const ENV_SIMULATE: &str = "TREND_SIMULATE";

/// Environment variable overriding the server bind address.
pub const ENV_BIND: &str = "TREND_BIND";

/// Complete resolved configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            server: ServerConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Row source connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the trend database file.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,

    /// Use the simulated source instead of the database.
    #[serde(default)]
    pub simulate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            simulate: false,
        }
    }
}

/// HTTP service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the report service.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default output path for the CLI `generate` command.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Color scheme name: "standard" or "legacy".
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            theme: default_theme(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("trend.db")
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("report.pdf")
}

fn default_theme() -> String {
    "standard".to_string()
}
