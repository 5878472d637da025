//! Configuration management infrastructure
//!
//! Loads a sync document in five strictly ordered stages:
//! - YAML parsing into a generic [`Node`] tree
//! - `${VAR}` resolution against the environment
//! - Binding onto the typed entities with unknown-key rejection
//! - Default application
//! - Fail-fast validation with path-qualified messages

pub mod binder;
pub mod document;
pub mod env;
pub mod error;
pub mod loader;
pub mod path;
pub mod validate;

pub use document::{Document, Node};
pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, ConfigErrorKind, ConfigResult};
pub use loader::{load, ConfigLoader};
pub use path::FieldPath;
