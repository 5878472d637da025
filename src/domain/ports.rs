//! Ports implemented by the daemon's collaborators.

use anyhow::Result;

use super::models::RootConfig;

/// Consumer of a validated configuration.
///
/// The daemon hands the loaded [`RootConfig`] to an engine once at startup. An
/// engine reads `sync.collections` to decide what to process, `iceberg.catalog`
/// to pick a catalog implementation and `mongodb` to open the source
/// connection. It must treat the configuration as read-only.
pub trait SyncEngine {
    /// Start synchronizing according to `config`.
    fn start(&self, config: &RootConfig) -> Result<()>;
}
