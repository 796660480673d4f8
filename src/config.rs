//! Configuration management for login-flow
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then `LOGIN_FLOW_` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

use crate::auth::validator::{DEFAULT_MAX_PASSWORD_LENGTH, DEFAULT_MAX_USERNAME_LENGTH};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 2323;
pub const DEFAULT_CONFIG_PATH: &str = "config";
pub const ENV_PREFIX: &str = "LOGIN_FLOW";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// IP address the login server listens on
    pub bind_address: String,

    /// TCP port of the login server
    pub port: u16,

    pub max_username_length: usize,
    pub max_password_length: usize,

    /// Credential table served by the in-memory store
    #[serde(default = "default_users")]
    pub users: HashMap<String, String>,
}

fn default_users() -> HashMap<String, String> {
    [("alice", "alice123"), ("bob", "bob123"), ("admin", "admin123")]
        .into_iter()
        .map(|(user, pass)| (user.to_string(), pass.to_string()))
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
            max_password_length: DEFAULT_MAX_PASSWORD_LENGTH,
            users: default_users(),
        }
    }
}

impl AppConfig {
    /// Load configuration from ./config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from the given file stem; a missing file is not an error
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("max_username_length", DEFAULT_MAX_USERNAME_LENGTH as i64)?
            .set_default("max_password_length", DEFAULT_MAX_PASSWORD_LENGTH as i64)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Message("bind_address cannot be empty".into()));
        }

        if self.max_username_length == 0 || self.max_password_length == 0 {
            return Err(ConfigError::Message(
                "credential length limits must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Bind address and port as a socket address string
    pub fn control_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from("does-not-exist/login-flow").unwrap();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.max_username_length, DEFAULT_MAX_USERNAME_LENGTH);
        assert_eq!(config.users.get("alice").map(String::as_str), Some("alice123"));
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let config = AppConfig {
            port: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_length_limit_is_rejected() {
        let config = AppConfig {
            max_password_length: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_control_socket() {
        let config = AppConfig {
            bind_address: "0.0.0.0".into(),
            port: 4000,
            ..AppConfig::default()
        };
        assert_eq!(config.control_socket(), "0.0.0.0:4000");
    }
}
