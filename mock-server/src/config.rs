//! Environment-driven settings for the mock server binary.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4010;
pub const DEFAULT_TOKEN: &str = "mock-token";

pub const PORT_ENV_VAR: &str = "PORT";
pub const TOKEN_ENV_VAR: &str = "MOCK_API_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Bearer token every request must present.
    pub token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            token: DEFAULT_TOKEN.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(PORT_ENV_VAR).ok(),
            std::env::var(TOKEN_ENV_VAR).ok(),
        )
    }

    fn from_vars(port: Option<String>, token: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match port {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        Ok(Self {
            port,
            token: token.filter(|t| !t.is_empty()).unwrap_or(defaults.token),
        })
    }
}
