//! Service configuration.

use std::fmt;

/// Port used when the `PORT` environment variable is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Origins permitted to make cross-origin requests, unless overridden.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://localhost:5000",
    "https://movies.com",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => {
                write!(f, "PORT must be a number between 1 and 65535, got {:?}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime configuration: listening port and the cross-origin allow-list.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Only `PORT` is consulted; a set-but-unparsable value is a startup
    /// error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        Ok(config)
    }
}
