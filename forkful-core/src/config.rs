//! Configuration from environment variables.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::auth::AuthClient;
use crate::generator::DEFAULT_WEBHOOK_URL;
use crate::storage::StateStorage;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Recipe-generation webhook endpoint.
    pub webhook_url: String,
    /// Identity provider base URL; only needed for auth operations.
    pub auth_url: Option<String>,
    /// Identity provider API key; only needed for auth operations.
    pub auth_key: Option<String>,
    /// Directory the store snapshot lives in.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `FORKFUL_WEBHOOK_URL`: generation endpoint (default: the production webhook)
    /// - `FORKFUL_AUTH_URL`: identity provider base URL
    /// - `FORKFUL_AUTH_KEY`: identity provider API key
    /// - `FORKFUL_DATA_DIR`: snapshot directory (default: ~/.forkful)
    pub fn from_env() -> Self {
        let webhook_url =
            env::var("FORKFUL_WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());

        let auth_url = env::var("FORKFUL_AUTH_URL").ok();
        let auth_key = env::var("FORKFUL_AUTH_KEY").ok();

        let data_dir = env::var("FORKFUL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| StateStorage::default_dir());

        Self {
            webhook_url,
            auth_url,
            auth_key,
            data_dir,
        }
    }

    /// Build an auth client, erroring when the provider is not configured.
    pub fn auth_client(&self) -> Result<AuthClient, ConfigError> {
        let base_url = self
            .auth_url
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar("FORKFUL_AUTH_URL".to_string()))?;
        let api_key = self
            .auth_key
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar("FORKFUL_AUTH_KEY".to_string()))?;
        Ok(AuthClient::new(base_url, api_key))
    }
}
