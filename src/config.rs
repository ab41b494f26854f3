//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// How responses are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A JSON object.
    #[default]
    Json,
    /// One item per line.
    Lines,
    /// Items terminated by NUL bytes.
    Nul,
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output format; `None` means the default.
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output.
    pub pretty: Option<bool>,

    /// `EnvFilter` directive used when `SHELLWORDS_LOG` is unset.
    pub log: Option<String>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        if let Some(cwd) = cwd
            && let Some(project_config) = Self::load_project_config(cwd)?
        {
            config.merge(project_config);
        }

        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load user-level config.
    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        match Self::user_config_path() {
            Some(path) => Self::load_file(&path),
            None => Ok(None),
        }
    }

    /// Load project-level config from .shellwords.toml
    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_file(&cwd.join(".shellwords.toml"))
    }

    fn load_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map(Some)
    }

    /// Get user config path.
    /// Respects SHELLWORDS_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SHELLWORDS_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("shellwords.toml"))
    }

    /// Merge another config into this one (other takes precedence when set).
    fn merge(&mut self, other: Config) {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.pretty.is_some() {
            self.pretty = other.pretty;
        }
        if other.log.is_some() {
            self.log = other.log;
        }
    }

    /// Effective output format.
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Whether JSON output is pretty-printed.
    pub fn is_pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(!config.is_pretty());
        assert!(config.log.is_none());
    }

    #[test]
    fn test_parse_config() {
        let config = Config::from_toml(
            r#"
format = "nul"
pretty = true
log = "shellwords=trace"
"#,
        )
        .unwrap();
        assert_eq!(config.output_format(), OutputFormat::Nul);
        assert!(config.is_pretty());
        assert_eq!(config.log.as_deref(), Some("shellwords=trace"));
    }

    #[test]
    fn test_invalid_format() {
        assert!(matches!(
            Config::from_toml(r#"format = "xml""#),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let mut user = Config::from_toml("format = \"lines\"\npretty = true").unwrap();
        user.merge(Config::from_toml("pretty = false").unwrap());
        assert_eq!(user.output_format(), OutputFormat::Lines);
        assert!(!user.is_pretty());
    }

    #[test]
    fn test_project_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".shellwords.toml"), "format = \"lines\"").unwrap();
        let config = Config::load_project_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output_format(), OutputFormat::Lines);

        let empty = TempDir::new().unwrap();
        assert!(Config::load_project_config(empty.path()).unwrap().is_none());
    }
}
