//! Config resolution: explicit path → environment → XDG → defaults.

use std::fs;
use std::path::PathBuf;

use tr_common::{Error, Result};

use crate::{Config, ENV_BIND, ENV_DB_PATH, ENV_SIMULATE};

/// Where to look for a config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Explicit path, typically from the CLI. Missing file is an error
    /// when set; the XDG fallback is skipped.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit: Some(path.into()),
        }
    }
}

/// Resolve the effective configuration.
///
/// Precedence, highest first: environment overrides, the config file
/// (explicit path or `$XDG_CONFIG_HOME/trend-report/config.json`),
/// built-in defaults. A missing XDG file is not an error.
pub fn resolve_config(paths: &ConfigPaths) -> Result<Config> {
    let mut config = match config_file(paths)? {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?
        }
        None => Config::default(),
    };

    apply_env_overrides(&mut config);
    validate(&config)?;
    Ok(config)
}

fn config_file(paths: &ConfigPaths) -> Result<Option<PathBuf>> {
    if let Some(explicit) = &paths.explicit {
        if !explicit.is_file() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                explicit.display()
            )));
        }
        return Ok(Some(explicit.clone()));
    }

    let xdg = dirs::config_dir().map(|dir| dir.join("trend-report").join("config.json"));
    Ok(xdg.filter(|path| path.is_file()))
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(path) = std::env::var(ENV_DB_PATH) {
        if !path.is_empty() {
            config.database.path = PathBuf::from(path);
        }
    }
    if let Ok(flag) = std::env::var(ENV_SIMULATE) {
        config.database.simulate = flag == "1" || flag.eq_ignore_ascii_case("true");
    }
    if let Ok(bind) = std::env::var(ENV_BIND) {
        if !bind.is_empty() {
            config.server.bind = bind;
        }
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.server.bind.parse::<std::net::SocketAddr>().is_err() {
        return Err(Error::Config(format!(
            "invalid bind address: {}",
            config.server.bind
        )));
    }
    match config.report.theme.as_str() {
        "standard" | "legacy" => Ok(()),
        other => Err(Error::Config(format!("unknown theme: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_file() {
        let config = resolve_config(&ConfigPaths::default()).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:5000");
        assert!(!config.database.simulate);
        assert_eq!(config.report.theme, "standard");
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"database": {{"path": "plant.db", "simulate": true}}}}"#
        )
        .unwrap();

        let config = resolve_config(&ConfigPaths::explicit(&path)).unwrap();
        assert_eq!(config.database.path, PathBuf::from("plant.db"));
        assert!(config.database.simulate);
        // Untouched sections fall back to defaults.
        assert_eq!(config.server.bind, "127.0.0.1:5000");
    }

    #[test]
    fn explicit_file_missing_is_an_error() {
        let err = resolve_config(&ConfigPaths::explicit("/nonexistent/config.json"))
            .unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let err = resolve_config(&ConfigPaths::explicit(&path)).unwrap_err();
        assert_eq!(err.code(), 10);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"report": {"theme": "neon"}}"#).unwrap();

        let err = resolve_config(&ConfigPaths::explicit(&path)).unwrap_err();
        assert!(err.to_string().contains("unknown theme"));
    }
}
