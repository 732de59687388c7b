use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_AVATAR_URL, DEFAULT_LOG_FILE, DEFAULT_TICK_RATE_MS,
};

/// User configuration, read from `~/.split-tui/config.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default image URL offered by the add-friend form
    pub avatar_base_url: String,
    pub log_dir: PathBuf,
    pub log_file: String,
    pub log_level: String,
    /// Terminal event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            avatar_base_url: String::from(DEFAULT_AVATAR_URL),
            log_dir: PathBuf::from("."),
            log_file: String::from(DEFAULT_LOG_FILE),
            log_level: String::from("info"),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults.
    ///
    /// Any load error is handed back so it can be logged once the
    /// subscriber is installed.
    pub fn load() -> (Config, Option<anyhow::Error>) {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => (Config::default(), None),
        }
    }

    /// Load from `path`. A missing or malformed file yields defaults.
    pub fn load_or_default(path: &Path) -> (Config, Option<anyhow::Error>) {
        if !path.exists() {
            return (Config::default(), None);
        }
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Log file writer. Fails instead of panicking when `log_dir` cannot be created.
    pub fn log_appender(&self) -> Result<RollingFileAppender> {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(&self.log_file)
            .build(&self.log_dir)?;
        Ok(appender)
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, error) = Config::load_or_default(&dir.path().join("nope.yaml"));
        assert_eq!(config, Config::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_partial_file_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "avatar_base_url: https://avatars.local/64").unwrap();
        writeln!(file, "log_level: debug").unwrap();

        let (config, error) = Config::load_or_default(file.path());
        assert!(error.is_none());
        assert_eq!(config.avatar_base_url, "https://avatars.local/64");
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate_ms: [not, a, number").unwrap();
        assert!(Config::load_from(file.path()).is_err());

        let (config, error) = Config::load_or_default(file.path());
        assert_eq!(config, Config::default());
        let message = error.map(|e| e.to_string()).unwrap_or_default();
        assert!(message.starts_with("invalid config"), "{}", message);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = Config {
            log_level: String::from("loud"),
            ..Config::default()
        };
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_appender_writes_into_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_dir: dir.path().join("logs"),
            log_file: String::from("app.log"),
            ..Config::default()
        };
        assert!(config.log_appender().is_ok());
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_log_appender_reports_bad_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config {
            log_dir: file.path().join("logs"),
            ..Config::default()
        };
        assert!(config.log_appender().is_err());
    }
}
