/// CLI configuration
use serde::{Deserialize, Serialize};
use songbook_client::{ClientConfig, DEFAULT_API_URL, DEFAULT_AUTH_URL};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "songbook.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Playlist API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Login host base URL
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token attached to API requests
    #[serde(default)]
    pub token: Option<String>,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `songbook.toml` in the
    /// working directory is read when present. `SONGBOOK_*` variables
    /// override file values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(config::Environment::with_prefix("SONGBOOK").try_parsing(true));

        let config = settings
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [("base_url", &self.base_url), ("auth_url", &self.auth_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{name} must start with http:// or https:// (got {url:?})"
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".into()));
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::new(&self.base_url)
            .with_auth_url(&self.auth_url)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(token) = &self.token {
            client = client.with_token(token);
        }
        client
    }
}

// Default values
fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_url: default_auth_url(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.client_config().url, DEFAULT_API_URL);
        assert!(config.client_config().access_token.is_none());
    }

    #[test]
    fn rejects_non_http_urls() {
        let config = AppConfig {
            base_url: "ftp://example.com".into(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = AppConfig {
            timeout_secs: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn reads_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songbook.toml");
        std::fs::write(
            &path,
            "base_url = \"http://localhost:3000\"\ntimeout_secs = 5\ntoken = \"abc\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
        assert_eq!(config.timeout_secs, 5);

        let client = config.client_config();
        assert_eq!(client.access_token.as_deref(), Some("abc"));
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/no/such/songbook.toml")));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
