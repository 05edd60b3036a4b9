//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid LMS_PORT {value:?}: expected 1-65535")]
    InvalidPort { value: String },
    #[error("invalid LMS_HOST {value:?}: must not be empty")]
    InvalidHost { value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `LMS_HOST`: default `0.0.0.0`
    /// - `LMS_PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_host(std::env::var("LMS_HOST").ok().as_deref())?;
        let port = parse_port(std::env::var("LMS_PORT").ok().as_deref())?;
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> Result<String, ConfigError> {
    match raw {
        None => Ok(DEFAULT_HOST.to_owned()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidHost { value: value.to_owned() }),
        Some(value) => Ok(value.trim().to_owned()),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
