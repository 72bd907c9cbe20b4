//! Configuration management for Gatehouse
//!
//! Loads settings from an optional config.toml with environment overrides.
//! All values are startup configuration; nothing is runtime-mutable.

use config::{Config, Environment, File};
use serde::Deserialize;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    5000
}

fn default_max_identity_length() -> usize {
    64
}

fn default_max_password_length() -> usize {
    128
}

/// Server configuration, loaded once during startup
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port for the HTTP listener
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Maximum accepted identity (email) length
    #[serde(default = "default_max_identity_length")]
    pub max_identity_length: usize,

    /// Maximum accepted password length
    #[serde(default = "default_max_password_length")]
    pub max_password_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            http_port: default_http_port(),
            max_identity_length: default_max_identity_length(),
            max_password_length: default_max_password_length(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("GATEHOUSE"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.http_port == 0 {
            return Err(config::ConfigError::Message("HTTP port cannot be 0".into()));
        }

        if self.bind_address.is_empty() {
            return Err(config::ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        if self.max_identity_length == 0 || self.max_password_length == 0 {
            return Err(config::ConfigError::Message(
                "field length limits must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as socket address string
    pub fn http_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.http_port)
    }
}
