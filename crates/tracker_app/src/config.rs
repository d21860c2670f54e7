use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracker_engine::{EnvToken, FetchSettings, StaticToken, TokenProvider};

use crate::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Settings read from `tracker.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub max_body_bytes: u64,
    /// Literal bearer token. Takes precedence over `token_env`.
    pub token: Option<String>,
    pub token_env: String,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.map(|timeout| timeout.as_secs()),
            max_body_bytes: fetch.max_bytes,
            token: None,
            token_env: "TRACKER_JWT".to_string(),
            log: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_bytes: self.max_body_bytes,
        }
    }

    pub fn token_provider(&self) -> Arc<dyn TokenProvider> {
        match &self.token {
            Some(token) => Arc::new(StaticToken::new(token.clone())),
            None => Arc::new(EnvToken::new(self.token_env.clone())),
        }
    }
}

/// Loads the config file; a missing file means defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(api_base_url: "https://api.example.com", request_timeout_secs: None, log: Both)"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.log, LogDestination::Both);
        assert_eq!(config.token_env, "TRACKER_JWT");
        assert_eq!(config.fetch_settings().request_timeout, None);
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(api_base_url: 42").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn literal_token_wins_over_environment() {
        let config = AppConfig {
            token: Some("abc".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.token_provider().token().as_deref(), Some("abc"));
    }
}
