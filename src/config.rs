//! Process configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DATA_PATH: &str = "data/animals.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value '{value}': expected a port number")]
    InvalidPort { name: &'static str, value: String },
}

/// Where to listen and where the animals live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `ANIMALS_DATA_PATH`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST").filter(|v| !v.is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(path) = lookup("ANIMALS_DATA_PATH").filter(|v| !v.is_empty()) {
            config.data_path = PathBuf::from(path);
        }
        Ok(config)
    }

    /// `host:port`, suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
