//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! constants for the listen address, logging, and HTTP response headers.
//! `AppConfig` is the root configuration struct containing all settings.
//! Every field has a default, so the service runs without any config file.

use std::net::SocketAddr;
use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// HTTP
// =============================================================================

/// Default bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Responses are computed per request and must never be served from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Recommendations
// =============================================================================

/// Module used when a request does not name one
pub const DEFAULT_MODULE: &str = "library";

// =============================================================================
// Logging
// =============================================================================

/// Crate target used in the default log filter
const CRATE_TARGET: &str = "ai_service";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", CRATE_TARGET);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Log formats accepted in `[logging] format`
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Whether events should be emitted as JSON lines
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.host, self.http.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port '{}:{}': {}",
                    self.http.host, self.http.port, e
                ))
            })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}', expected one of {:?}",
                self.logging.format, LOG_FORMATS
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_listen_on_all_interfaces_port_8000() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.logging.format, "text");
        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:8000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_partial_http_section() {
        let file = write_config("[http]\nport = 9100\n");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, 9100);
    }

    #[test]
    fn test_json_logging() {
        let file = write_config("[logging]\nformat = \"json\"\n");
        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let file = write_config("[logging]\nformat = \"xml\"\n");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let file = write_config("[http\nport = ");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::load("/nonexistent/ai-service.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = AppConfig::load_or_default(None::<&str>).unwrap();
        assert_eq!(config.http.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_host_rejected_by_socket_addr() {
        let mut config = AppConfig::default();
        config.http.host = "not a host".to_string();
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::Validation(_))
        ));
    }
}
