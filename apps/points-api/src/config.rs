//! Points API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

/// Points API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface the HTTP server binds to
    pub host: String,

    /// HTTP server port
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            host: env::var("POINTS_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("POINTS_API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POINTS_API_PORT".to_string()))?,
        };

        Ok(config)
    }

    /// The address string the TCP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
