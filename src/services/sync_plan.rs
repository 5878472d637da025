//! Startup plan derived from a validated configuration.
//!
//! Catalog initialization, change-stream consumption and batched writes are
//! not part of this crate. [`PlanningEngine`] stands in for them: it resolves
//! what a real engine would set up and logs it.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::domain::models::{CatalogKind, MappingMode, RootConfig};
use crate::domain::ports::SyncEngine;
use crate::infrastructure::logging::redact_uri_credentials;

/// What the daemon will synchronize, resolved from a validated config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncPlan {
    /// Source connection string with credentials redacted
    pub source_uri: String,
    /// Source database
    pub database: String,
    /// Catalog implementation
    pub catalog: String,
    /// Warehouse location with credentials redacted
    pub warehouse: String,
    /// One entry per collection, in document order
    pub collections: Vec<CollectionPlan>,
}

/// Resolved settings for one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionPlan {
    /// Source collection
    pub source: String,
    /// Target as `namespace.table`
    pub target: String,
    /// Mapping mode
    pub mode: String,
    /// Explicit field mappings (zero in auto mode)
    pub mapped_fields: usize,
    /// Partition spec as `transform(field)` entries
    pub partitions: Vec<String>,
    /// Record threshold
    pub max_records: i64,
    /// Byte threshold
    pub max_bytes: i64,
    /// Time threshold
    #[serde(with = "duration_secs")]
    pub flush_interval: Duration,
}

impl SyncPlan {
    /// Resolve the plan for a configuration returned by the loader.
    ///
    /// Fails only if `config` did not pass validation.
    pub fn from_config(config: &RootConfig) -> Result<Self> {
        let mongodb = config.mongodb.as_ref().context("mongodb section missing")?;
        let catalog = config
            .iceberg
            .as_ref()
            .and_then(|iceberg| iceberg.catalog.as_ref())
            .context("iceberg.catalog section missing")?;
        let kind: CatalogKind = catalog.kind().context("unsupported catalog type")?;

        let collections = config
            .collections()
            .iter()
            .map(|collection| -> Result<CollectionPlan> {
                let source = collection.source.as_ref().and_then(|s| s.collection.clone());
                let target = collection.target.as_ref();
                let mapping = collection.mapping.as_ref();
                let batch = collection.batch.as_ref().context("batch policy missing")?;

                Ok(CollectionPlan {
                    source: source.unwrap_or_default(),
                    target: format!(
                        "{}.{}",
                        target.and_then(|t| t.namespace.as_deref()).unwrap_or_default(),
                        target.and_then(|t| t.table.as_deref()).unwrap_or_default()
                    ),
                    mode: mapping
                        .and_then(|m| m.kind())
                        .unwrap_or(MappingMode::Auto)
                        .to_string(),
                    mapped_fields: mapping.and_then(|m| m.fields.as_ref()).map_or(0, Vec::len),
                    partitions: collection
                        .partitioning
                        .iter()
                        .flatten()
                        .map(|rule| {
                            format!(
                                "{}({})",
                                rule.transform.as_deref().unwrap_or_default(),
                                rule.field.as_deref().unwrap_or_default()
                            )
                        })
                        .collect(),
                    max_records: batch.max_records.context("batch.maxRecords missing")?,
                    max_bytes: batch.max_bytes.context("batch.maxBytes missing")?,
                    flush_interval: batch
                        .flush_interval()
                        .context("batch.flushIntervalSeconds missing")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source_uri: redact_uri_credentials(mongodb.uri.as_deref().unwrap_or_default()),
            database: mongodb.database.clone().unwrap_or_default(),
            catalog: kind.to_string(),
            warehouse: redact_uri_credentials(catalog.warehouse.as_deref().unwrap_or_default()),
            collections,
        })
    }
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }
}

/// Engine that resolves and logs the startup plan without moving any data.
#[derive(Debug, Default)]
pub struct PlanningEngine;

impl SyncEngine for PlanningEngine {
    fn start(&self, config: &RootConfig) -> Result<()> {
        let plan = SyncPlan::from_config(config)?;

        info!(
            source = %plan.source_uri,
            database = %plan.database,
            catalog = %plan.catalog,
            warehouse = %plan.warehouse,
            "resolved sync endpoints"
        );
        for collection in &plan.collections {
            info!(
                source = %collection.source,
                target = %collection.target,
                mode = %collection.mode,
                partitions = collection.partitions.len(),
                max_records = collection.max_records,
                max_bytes = collection.max_bytes,
                flush_interval_secs = collection.flush_interval.as_secs(),
                "planned collection sync"
            );
        }
        Ok(())
    }
}
