//! Server configuration
//!
//! Hierarchical configuration loading: a default configuration file, an
//! environment-specific file, then environment variables, each layer
//! overriding the previous one.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive (e.g. "info", "offering_service=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from files and environment variables
    pub fn load(config_dir: &str, environment: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{config_dir}/default")).required(false))
            .add_source(File::with_name(&format!("{config_dir}/{environment}")).required(false))
            .add_source(Environment::with_prefix("OFFERING").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load configuration, falling back to defaults on error
    pub fn load_or_default(config_dir: &str, environment: &str) -> Self {
        Self::load(config_dir, environment).unwrap_or_default()
    }

    /// The socket address string to bind to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_config_dir_falls_back_to_defaults() {
        let config = ServerConfig::load_or_default("does-not-exist", "development");
        assert_eq!(config.server.port, 3000);
    }
}
