//! Infrastructure layer module
//!
//! - Configuration loading (YAML, environment placeholders, validation)
//! - Logging infrastructure

pub mod config;
pub mod logging;
