//! Configuration management for devhooks
//!
//! devhooks reads optional settings from ~/.devhooks/config.toml. The file is
//! never created implicitly; when it is missing every setting has a default.

use crate::line_filter::DEFAULT_MARKER;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV_VAR: &str = "DEVHOOKS_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Line filter settings
    #[serde(default)]
    pub filter: FilterConfig,

    /// Debug logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Marker text that gets a line removed
    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub debug: bool,

    /// Custom log file
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

/// Directory holding the config and the default log file
pub fn config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home_dir.join(".devhooks"))
}

/// Get the configuration file path, honouring `DEVHOOKS_CONFIG`
pub fn config_file_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.toml"))
}

/// Load configuration from the default location
pub fn load_config() -> Result<Config> {
    let config_path = config_file_path()?;
    load_config_from(&config_path)
}

/// Load configuration from `config_path`
///
/// A missing file yields the defaults. Unparsable or invalid files are errors.
pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    validate_config(&config)?;

    Ok(config)
}

/// Pick the marker: command-line flag, then config file, then the built-in
/// default (already folded into `config` by serde)
pub fn resolve_marker(flag: Option<String>, config: &Config) -> Result<String> {
    let marker = flag.unwrap_or_else(|| config.filter.marker.clone());
    if marker.is_empty() {
        anyhow::bail!("Marker must not be empty");
    }
    Ok(marker)
}

/// Validate configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.filter.marker.is_empty() {
        anyhow::bail!("Invalid marker: must not be empty (it would remove every line)");
    }

    if let Some(log_file) = &config.logging.log_file {
        if log_file.as_os_str().is_empty() {
            anyhow::bail!("Invalid log_file: must not be empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filter.marker, "claude");
        assert!(!config.logging.debug);
        assert_eq!(config.logging.log_file, None);
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_empty_marker() {
        let mut config = Config::default();
        config.filter.marker = String::new();
        assert!(validate_config(&config).is_err());

        config.filter.marker = " ".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.filter.marker, DEFAULT_MARKER);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[logging]\ndebug = true\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert!(config.logging.debug);
        assert_eq!(config.filter.marker, DEFAULT_MARKER);
    }

    #[test]
    fn test_custom_marker() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[filter]\nmarker = \"copilot\"\n").unwrap();

        assert_eq!(load_config_from(&path).unwrap().filter.marker, "copilot");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[filter\nmarker = ").unwrap();

        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_resolve_marker_precedence() {
        let mut config = Config::default();
        assert_eq!(resolve_marker(None, &config).unwrap(), DEFAULT_MARKER);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[filter]\nmarker = \"copilot\"\n").unwrap();
        config = load_config_from(&path).unwrap();
        assert_eq!(resolve_marker(None, &config).unwrap(), "copilot");
        assert_eq!(resolve_marker(Some("bot".to_string()), &config).unwrap(), "bot");
    }

    #[test]
    fn test_resolve_marker_rejects_empty() {
        let config = Config::default();
        assert!(resolve_marker(Some(String::new()), &config).is_err());
        assert_eq!(resolve_marker(Some(" ".to_string()), &config).unwrap(), " ");
    }
}
