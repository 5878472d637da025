//! Implementation of the `mongo-iceberg-sync run` command.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::types::ConfigArgs;
use crate::domain::ports::SyncEngine;
use crate::infrastructure::config::ConfigLoader;

/// Load the configuration and hand it to `engine`.
///
/// A load failure is returned as an error so the caller exits non-zero; the
/// engine is never started in that case.
pub fn execute(args: &ConfigArgs, engine: &dyn SyncEngine) -> Result<()> {
    info!("starting with config: {}", args.config.display());

    let config = ConfigLoader::load(&args.config).context("failed to load configuration")?;

    info!(
        "loaded {} collection sync configuration(s)",
        config.collections().len()
    );

    engine.start(&config).context("failed to start sync engine")?;

    info!("started successfully");
    Ok(())
}
