//! Configuration
//!
//! Loaded from a TOML file with environment variable overrides:
//! - SALES_SOURCE
//! - SALES_LOG_LEVEL
//! - SALES_LOG_FILE

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::repository::file::DEFAULT_FILE_NAME;
use crate::repository::http::DEFAULT_TIMEOUT_SECS;

const APP_DIR: &str = "sales-dashboard";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// File path or http(s) URL of the sales document
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
}

fn default_source() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            http_timeout_secs: default_http_timeout(),
        }
    }
}

impl DataConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or `<data_local_dir>/sales-dashboard/sales.log`.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(file) => PathBuf::from(file),
            None => dirs::data_local_dir()
                .map(|p| p.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from("."))
                .join("sales.log"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Explicit path first, then the default locations, then built-in
    /// defaults. Environment overrides apply in every case.
    pub fn load_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => Self::default_paths()
                .into_iter()
                .find(|p| p.exists())
                .map(|p| Self::load(&p))
                .transpose()?
                .unwrap_or_default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(APP_DIR).join("config.toml"));
        }
        paths.push(PathBuf::from("./sales.toml"));
        paths
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(source) = var("SALES_SOURCE") {
            self.data.source = source;
        }
        if let Some(level) = var("SALES_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(file) = var("SALES_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.source, "satis_verileri.json");
        assert_eq!(config.data.http_timeout(), Duration::from_secs(30));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file_path().ends_with("sales.log"));
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse(
            r#"
            [data]
            source = "https://example.com/satis_verileri.json"

            [logging]
            file = "/tmp/sales.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.data.source, "https://example.com/satis_verileri.json");
        assert_eq!(config.data.http_timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file_path(), PathBuf::from("/tmp/sales.log"));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[data\nsource = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = Config::load(Path::new("/no/such/sales.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SALES_SOURCE", "other.json"),
            ("SALES_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.data.source, "other.json");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file.is_none());
    }
}
