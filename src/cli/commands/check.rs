//! Implementation of the `mongo-iceberg-sync check` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::cli::types::ConfigArgs;
use crate::domain::models::RootConfig;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{is_secret_key, redact_uri_credentials, REDACTED};
use crate::services::SyncPlan;

/// Result of `check`: the validated configuration and the plan derived from it.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Always `true`; failures are reported as errors instead
    pub valid: bool,
    /// File that was checked
    pub config_path: PathBuf,
    /// Defaulted configuration with credentials redacted
    pub config: RootConfig,
    /// What `run` would set up
    pub plan: SyncPlan,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let plan = &self.plan;
        let mut lines = vec![
            format!("Configuration OK: {}", self.config_path.display()),
            String::new(),
            format!("Source:    {} (database {})", plan.source_uri, plan.database),
            format!("Catalog:   {} at {}", plan.catalog, plan.warehouse),
            format!("Collections: {}", plan.collections.len()),
        ];
        lines.push(TableFormatter::new().format_collections(&plan.collections));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Validate the configuration at `args.config` and print what would run.
pub fn execute(args: &ConfigArgs, json_mode: bool) -> Result<()> {
    output(&check(args)?, json_mode);
    Ok(())
}

fn check(args: &ConfigArgs) -> Result<CheckOutput> {
    let config = ConfigLoader::load(&args.config).context("failed to load configuration")?;
    let plan = SyncPlan::from_config(&config)?;

    Ok(CheckOutput {
        valid: true,
        config_path: args.config.clone(),
        config: redact_config(config),
        plan,
    })
}

/// Mask URI userinfo and secret-looking catalog properties.
fn redact_config(mut config: RootConfig) -> RootConfig {
    if let Some(uri) = config.mongodb.as_mut().and_then(|m| m.uri.as_mut()) {
        *uri = redact_uri_credentials(uri);
    }
    if let Some(iceberg) = config.iceberg.as_mut() {
        if let Some(catalog) = iceberg.catalog.as_mut() {
            for value in [catalog.uri.as_mut(), catalog.warehouse.as_mut()]
                .into_iter()
                .flatten()
            {
                *value = redact_uri_credentials(value);
            }
        }
        for (key, value) in iceberg.properties.iter_mut().flatten() {
            *value = if is_secret_key(key) {
                REDACTED.to_owned()
            } else {
                redact_uri_credentials(value)
            };
        }
    }
    config
}
