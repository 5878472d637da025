//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON console output on stderr
//! - Optional rolling JSON log files
//! - Credential redaction for connection strings and catalog properties

pub mod config;
pub mod logger;
pub mod redact;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
pub use redact::{is_secret_key, redact_uri_credentials, REDACTED};
