//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! the published service version, the greeting markup, HTTP cache TTLs, and
//! default paths. `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Service Identity
// =============================================================================

/// Version string published on the greeting page and the health endpoint.
///
/// This is the deployed service contract, not the crate version: monitoring
/// and pipeline smoke checks match on it verbatim.
pub const SERVICE_VERSION: &str = "1.0";

/// Heading shown on the greeting page.
pub const GREETING_HEADING: &str = "Hello from DevOps Pipeline!";

/// Fixed greeting page body (compile-time string concatenation).
pub const GREETING_HTML: &str = formatcp!(
    "<h1>{}</h1><p>Version {}</p>",
    GREETING_HEADING,
    SERVICE_VERSION
);

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Cache-Control headers for upstream caches (nginx, CDNs). The greeting page
// is immutable for a given deployment but gets a short TTL so redeploys show
// up quickly. The health endpoint carries no cache header at all: liveness
// probes must always reach the process.

/// Greeting page - static content, short TTL
pub const HTTP_CACHE_PAGE_MAX_AGE: u32 = 60;

// Pre-formatted Cache-Control header value (compile-time string concatenation)
pub const CACHE_CONTROL_PAGE: &str = formatcp!("public, max-age={}", HTTP_CACHE_PAGE_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default listen host (all interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hello_pipeline=info";

/// Log filter used when dev mode is enabled and RUST_LOG is not set
pub const DEV_LOG_FILTER: &str = "hello_pipeline=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Verbose diagnostics for local development. Must stay disabled in
    /// production deployments.
    #[serde(default)]
    pub dev_mode: bool,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            dev_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    /// Listen address, an IP literal ("0.0.0.0" binds all interfaces)
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    /// Listen port
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
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
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
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the built-in defaults describe a fully
    /// working service (all interfaces, port 5000, dev mode off). Partial
    /// files are deserialized against those defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}'. Use \"text\" or \"json\"",
                other
            ))),
        }
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

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 5000);
        assert!(!config.dev_mode);
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 5000);
        assert!(!config.dev_mode);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[http]\nport = 8080\n").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert!(!config.dev_mode);
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn full_file_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "dev_mode = true\n\n[http]\nhost = \"127.0.0.1\"\nport = 9000\n\n[logging]\nformat = \"json\"\n"
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9000);
        assert!(config.dev_mode);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[logging]\nformat = \"xml\"\n").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[http\nport = oops").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn greeting_markup_is_well_formed() {
        assert_eq!(
            GREETING_HTML,
            "<h1>Hello from DevOps Pipeline!</h1><p>Version 1.0</p>"
        );
    }
}
