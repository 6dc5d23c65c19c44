//! Structured logging for the Watson client.

use crate::errors::{WatsonError, WatsonResult};
use http::HeaderMap;
use tracing::Level;
use tracing_subscriber::EnvFilter;

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "proxy-authorization",
    "cookie",
    "set-cookie",
    "x-api-key",
];

const SENSITIVE_FRAGMENTS: &[&str] = &["token", "secret", "apikey", "password"];

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level - wire-level detail
    Trace,
    /// Debug level - verbose debugging information
    Debug,
    /// Info level - general information
    Info,
    /// Warn level - warnings
    Warn,
    /// Error level - errors
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl LogLevel {
    fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Pretty printed format for development
    Pretty,
    /// JSON format for production
    Json,
    /// Compact format
    Compact,
}

/// Configuration for logging
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level, used when `RUST_LOG` is not set
    pub level: LogLevel,
    /// Log format
    pub format: LogFormat,
    /// Whether to include target (module path)
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable target
    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }

    /// Create configuration for development
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            include_target: true,
        }
    }

    /// Create configuration for production
    pub fn production() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            include_target: false,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> WatsonResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.include_target);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| WatsonError::configuration(format!("Failed to install logger: {}", e)))
}

/// Header names and values safe to log; credentials are masked.
pub fn redact_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let name = name.as_str().to_string();
            let value = if is_sensitive(&name) || value.is_sensitive() {
                REDACTED.to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name, value)
        })
        .collect()
}

fn is_sensitive(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SENSITIVE_HEADERS.contains(&lower.as_str())
        || SENSITIVE_FRAGMENTS.iter().any(|fragment| lower.contains(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config() {
        let config = LoggingConfig::new()
            .with_level(LogLevel::Debug)
            .with_format(LogFormat::Json)
            .with_target(true);

        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_target);
    }

    #[test]
    fn test_presets() {
        assert_eq!(LoggingConfig::development().level, LogLevel::Debug);
        assert_eq!(LoggingConfig::production().format, LogFormat::Json);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
    }

    #[test]
    fn test_redact_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Basic dXNlcjE6cGFzczE=".parse().unwrap());
        headers.insert("x-watson-authorization-token", "abc".parse().unwrap());
        headers.insert("accept", "application/json".parse().unwrap());

        let redacted = redact_headers(&headers);
        let lookup = |name: &str| {
            redacted
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(lookup("authorization"), Some(REDACTED));
        assert_eq!(lookup("x-watson-authorization-token"), Some(REDACTED));
        assert_eq!(lookup("accept"), Some("application/json"));
    }

    #[test]
    fn test_sensitive_value_flag_is_honoured() {
        let mut value: http::HeaderValue = "opaque".parse().unwrap();
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert("x-custom", value);

        assert_eq!(redact_headers(&headers)[0].1, REDACTED);
    }
}
