use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use super::zone::ZoneConfig;

/// Main configuration structure for the DoH gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream DoH endpoint configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Local authoritative zone records
    #[serde(default)]
    pub zone: ZoneConfig,
}

/// Values passed on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub resolve_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. doh-gateway.toml in current directory
    /// 3. /etc/doh-gateway/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("doh-gateway.toml").exists() {
            Self::from_file("doh-gateway.toml")?
        } else if std::path::Path::new("/etc/doh-gateway/config.toml").exists() {
            Self::from_file("/etc/doh-gateway/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.resolve_url {
            self.upstream.resolve_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.upstream.resolve_url.is_empty() {
            return Err(ConfigError::Validation(
                "Upstream resolve URL cannot be empty".to_string(),
            ));
        }

        if !self.upstream.resolve_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "Upstream resolve URL must use https://, got '{}'",
                self.upstream.resolve_url
            )));
        }

        for record in &self.zone.records {
            if record.name.is_empty() {
                return Err(ConfigError::Validation(
                    "Zone record name cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
