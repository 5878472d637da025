//! Configuration loading entry points.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::models::RootConfig;

use super::binder::bind_root;
use super::document::{parse_document, Document};
use super::env::{substitute, EnvSource, ProcessEnv};
use super::error::{ConfigError, ConfigResult};
use super::validate::validate;

/// Origin reported for documents loaded from memory.
const INLINE_ORIGIN: &str = "<inline>";

/// Configuration loader
///
/// Runs the pipeline parse → substitute → bind → default → validate and stops
/// at the first stage that fails. Holds no state, so independent loads can run
/// on any number of threads.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file, resolving placeholders against the
    /// process environment.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<RootConfig> {
        Self::load_with_env(path, &ProcessEnv)
    }

    /// Load configuration from a file, resolving placeholders against `env`.
    pub fn load_with_env<E: EnvSource + ?Sized>(
        path: impl AsRef<Path>,
        env: &E,
    ) -> ConfigResult<RootConfig> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::ReadFailure {
                path: path.to_path_buf(),
                source,
            },
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read config file");

        let document = parse_document(&bytes, &path.display().to_string())?;
        Self::finish(document, env)
    }

    /// Load configuration from document text already in memory.
    pub fn load_from_str<E: EnvSource + ?Sized>(text: &str, env: &E) -> ConfigResult<RootConfig> {
        let document = parse_document(text.as_bytes(), INLINE_ORIGIN)?;
        Self::finish(document, env)
    }

    fn finish<E: EnvSource + ?Sized>(document: Document, env: &E) -> ConfigResult<RootConfig> {
        debug!(origin = %document.origin, "parsed config document");

        let document = Document {
            root: substitute(&document.root, env)?,
            ..document
        };
        debug!(origin = %document.origin, "resolved environment placeholders");

        let bound = bind_root(&document)?;
        let config = bound.with_defaults();
        validate(&config)?;

        info!(
            origin = %document.origin,
            collections = config.collections().len(),
            "configuration loaded"
        );
        Ok(config)
    }
}

/// Load and validate the configuration at `path`.
///
/// Shorthand for [`ConfigLoader::load`].
pub fn load(path: impl AsRef<Path>) -> ConfigResult<RootConfig> {
    ConfigLoader::load(path)
}
