//! Validation of a bound and defaulted configuration.
//!
//! Walks the tree top-down and returns the first violation found. Sections are
//! checked in the order `mongodb`, `iceberg`, `sync`; within a collection the
//! order is source, target, mapping, batch, then partitioning.

use crate::domain::models::{
    BatchPolicy, CatalogConfig, CatalogDescriptor, CatalogKind, CollectionSyncConfig,
    FieldMapping, MappingConfig, MappingMode, MongoEndpoint, PartitionRule, RootConfig,
    SourceRef, SyncSection, TargetRef,
};

use super::error::{ConfigError, ConfigResult};
use super::path::FieldPath;

/// Validate a defaulted configuration.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationFailure`] for the first violation, with the
/// path of the offending field.
pub fn validate(config: &RootConfig) -> ConfigResult<()> {
    let root = FieldPath::root();
    let mongodb = require_present(config.mongodb.as_ref(), &root.key("mongodb"))?;
    let iceberg = require_present(config.iceberg.as_ref(), &root.key("iceberg"))?;
    let sync = require_present(config.sync.as_ref(), &root.key("sync"))?;

    validate_mongodb(mongodb, &root.key("mongodb"))?;
    validate_iceberg(iceberg, &root.key("iceberg"))?;
    validate_sync(sync, &root.key("sync"))?;
    Ok(())
}

fn validate_mongodb(mongodb: &MongoEndpoint, path: &FieldPath) -> ConfigResult<()> {
    require_non_blank(mongodb.uri.as_deref(), &path.key("uri"))?;
    require_non_blank(mongodb.database.as_deref(), &path.key("database"))?;
    Ok(())
}

fn validate_iceberg(iceberg: &CatalogConfig, path: &FieldPath) -> ConfigResult<()> {
    let catalog_path = path.key("catalog");
    let catalog = require_present(iceberg.catalog.as_ref(), &catalog_path)?;
    validate_catalog(catalog, &catalog_path)
}

fn validate_catalog(catalog: &CatalogDescriptor, path: &FieldPath) -> ConfigResult<()> {
    let kind: CatalogKind = require_one_of(
        catalog.catalog_type.as_deref(),
        &path.key("type"),
        &CatalogKind::NAMES,
    )?;

    if kind.requires_uri() {
        require_non_blank(catalog.uri.as_deref(), &path.key("uri"))?;
    }
    // Every catalog type names a warehouse, REST included.
    require_non_blank(catalog.warehouse.as_deref(), &path.key("warehouse"))?;
    Ok(())
}

fn validate_sync(sync: &SyncSection, path: &FieldPath) -> ConfigResult<()> {
    let collections_path = path.key("collections");
    let collections = sync.collections.as_deref().unwrap_or_default();
    if collections.is_empty() {
        return Err(ConfigError::validation(
            &collections_path,
            "must contain at least one collection config",
        ));
    }

    for (i, collection) in collections.iter().enumerate() {
        validate_collection(collection, &collections_path.index(i))?;
    }
    Ok(())
}

fn validate_collection(collection: &CollectionSyncConfig, path: &FieldPath) -> ConfigResult<()> {
    let source = require_present(collection.source.as_ref(), &path.key("source"))?;
    let target = require_present(collection.target.as_ref(), &path.key("target"))?;
    let mapping = require_present(collection.mapping.as_ref(), &path.key("mapping"))?;
    let batch = require_present(collection.batch.as_ref(), &path.key("batch"))?;

    validate_source(source, &path.key("source"))?;
    validate_target(target, &path.key("target"))?;
    validate_mapping(mapping, &path.key("mapping"))?;
    validate_batch(batch, &path.key("batch"))?;

    let partitioning_path = path.key("partitioning");
    for (i, rule) in collection.partitioning.iter().flatten().enumerate() {
        validate_partition(rule, &partitioning_path.index(i))?;
    }
    Ok(())
}

fn validate_source(source: &SourceRef, path: &FieldPath) -> ConfigResult<()> {
    require_non_blank(source.collection.as_deref(), &path.key("collection"))
}

fn validate_target(target: &TargetRef, path: &FieldPath) -> ConfigResult<()> {
    require_non_blank(target.namespace.as_deref(), &path.key("namespace"))?;
    require_non_blank(target.table.as_deref(), &path.key("table"))?;
    Ok(())
}

fn validate_mapping(mapping: &MappingConfig, path: &FieldPath) -> ConfigResult<()> {
    let mode: MappingMode =
        require_one_of(mapping.mode.as_deref(), &path.key("mode"), &MappingMode::NAMES)?;

    let fields = mapping.fields.as_deref().unwrap_or_default();
    if mode == MappingMode::Explicit && fields.is_empty() {
        return Err(ConfigError::validation(
            &path.key("fields"),
            "must be non-empty when mode is explicit",
        ));
    }

    let fields_path = path.key("fields");
    for (i, field) in fields.iter().enumerate() {
        validate_field_mapping(field, &fields_path.index(i))?;
    }
    Ok(())
}

fn validate_field_mapping(field: &FieldMapping, path: &FieldPath) -> ConfigResult<()> {
    require_non_blank(field.source.as_deref(), &path.key("source"))?;
    require_non_blank(field.target.as_deref(), &path.key("target"))?;
    Ok(())
}

fn validate_partition(rule: &PartitionRule, path: &FieldPath) -> ConfigResult<()> {
    require_non_blank(rule.field.as_deref(), &path.key("field"))?;
    require_non_blank(rule.transform.as_deref(), &path.key("transform"))?;
    Ok(())
}

fn validate_batch(batch: &BatchPolicy, path: &FieldPath) -> ConfigResult<()> {
    require_positive(batch.max_records, &path.key("maxRecords"))?;
    require_positive(batch.max_bytes, &path.key("maxBytes"))?;
    require_positive(batch.flush_interval_seconds.map(i64::from), &path.key("flushIntervalSeconds"))?;
    Ok(())
}

fn require_present<'a, T>(value: Option<&'a T>, path: &FieldPath) -> ConfigResult<&'a T> {
    value.ok_or_else(|| ConfigError::validation(path, "is required"))
}

fn require_non_blank(value: Option<&str>, path: &FieldPath) -> ConfigResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ConfigError::validation(path, "is required")),
    }
}

/// Check an enumerated field and return its parsed value.
fn require_one_of<T: std::str::FromStr>(
    value: Option<&str>,
    path: &FieldPath,
    options: &[&str],
) -> ConfigResult<T> {
    require_non_blank(value, path)?;
    value
        .unwrap_or_default()
        .parse()
        .map_err(|_| ConfigError::validation(path, format!("must be one of: {}", options.join(", "))))
}

fn require_positive(value: Option<i64>, path: &FieldPath) -> ConfigResult<()> {
    match value {
        Some(v) if v > 0 => Ok(()),
        _ => Err(ConfigError::validation(path, "must be > 0")),
    }
}
