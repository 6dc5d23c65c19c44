//! Observability module: `tracing` subscriber setup and log redaction.

mod logging;

pub use logging::{init_logging, redact_headers, LogFormat, LogLevel, LoggingConfig};
