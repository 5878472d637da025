//! Synchronization configuration entities.
//!
//! These are the shapes a sync document binds onto. Every field a document may
//! omit is an `Option`; binding leaves it `None` and [`RootConfig::with_defaults`]
//! produces a new value with the optional parts filled in. Validation happens in
//! [`crate::infrastructure::config::validate`] and never touches these values.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

/// Root of a sync document: source endpoint, target catalog and per-collection rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootConfig {
    /// MongoDB source endpoint
    pub mongodb: Option<MongoEndpoint>,
    /// Iceberg catalog the tables are written through
    pub iceberg: Option<CatalogConfig>,
    /// Collections to synchronize
    pub sync: Option<SyncSection>,
}

impl RootConfig {
    /// Return a copy with every absent optional field populated.
    ///
    /// Explicitly supplied values are kept as they are, except that a mapping
    /// mode is trimmed and lower-cased.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        Self {
            mongodb: self.mongodb,
            iceberg: self.iceberg.map(CatalogConfig::with_defaults),
            sync: self.sync.map(SyncSection::with_defaults),
        }
    }

    /// Collections in document order, empty when the section is absent.
    pub fn collections(&self) -> &[CollectionSyncConfig] {
        self.sync
            .as_ref()
            .and_then(|sync| sync.collections.as_deref())
            .unwrap_or_default()
    }
}

/// Connection settings for the source database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MongoEndpoint {
    /// Connection string, e.g. `mongodb://localhost:27017`
    pub uri: Option<String>,
    /// Database holding the synchronized collections
    pub database: Option<String>,
}

/// Target catalog plus free-form catalog properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogConfig {
    /// Which catalog implementation to use and where it lives
    pub catalog: Option<CatalogDescriptor>,
    /// Extra properties handed to the catalog as-is (e.g. `client.region`)
    pub properties: Option<BTreeMap<String, String>>,
}

impl CatalogConfig {
    #[must_use]
    fn with_defaults(self) -> Self {
        Self {
            catalog: self.catalog,
            properties: Some(self.properties.unwrap_or_default()),
        }
    }
}

/// Catalog selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogDescriptor {
    /// Catalog type as written in the document; see [`CatalogKind`]
    #[serde(rename = "type")]
    pub catalog_type: Option<String>,
    /// Catalog endpoint, required for REST catalogs
    pub uri: Option<String>,
    /// Warehouse location
    pub warehouse: Option<String>,
}

impl CatalogDescriptor {
    /// Typed view of `type`, or `None` if it is absent or unsupported.
    pub fn kind(&self) -> Option<CatalogKind> {
        self.catalog_type.as_deref()?.parse().ok()
    }
}

/// Supported catalog implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// Filesystem-backed catalog
    Local,
    /// AWS S3 Tables
    S3Tables,
    /// Iceberg REST catalog
    Rest,
}

impl CatalogKind {
    /// Accepted spellings, in the order they are reported.
    pub const NAMES: [&'static str; 3] = ["local", "s3tables", "rest"];

    /// Canonical lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::S3Tables => "s3tables",
            Self::Rest => "rest",
        }
    }

    /// Whether the catalog needs an endpoint `uri`.
    pub const fn requires_uri(self) -> bool {
        matches!(self, Self::Rest)
    }
}

impl FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "s3tables" => Ok(Self::S3Tables),
            "rest" => Ok(Self::Rest),
            other => Err(format!("unsupported catalog type: {other}")),
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `sync` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncSection {
    /// Per-collection rules in document order
    pub collections: Option<Vec<CollectionSyncConfig>>,
}

impl SyncSection {
    #[must_use]
    fn with_defaults(self) -> Self {
        Self {
            collections: self.collections.map(|collections| {
                collections
                    .into_iter()
                    .map(CollectionSyncConfig::with_defaults)
                    .collect()
            }),
        }
    }
}

/// How one source collection lands in one target table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSyncConfig {
    /// Source collection
    pub source: Option<SourceRef>,
    /// Target table
    pub target: Option<TargetRef>,
    /// Field-to-column mapping
    pub mapping: Option<MappingConfig>,
    /// Partition spec, in order
    pub partitioning: Option<Vec<PartitionRule>>,
    /// Flush thresholds
    pub batch: Option<BatchPolicy>,
}

impl CollectionSyncConfig {
    #[must_use]
    fn with_defaults(self) -> Self {
        Self {
            source: self.source,
            target: self.target,
            mapping: Some(self.mapping.unwrap_or_default().with_defaults()),
            partitioning: Some(self.partitioning.unwrap_or_default()),
            batch: Some(self.batch.unwrap_or_default().with_defaults()),
        }
    }
}

/// Source side of a collection rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceRef {
    /// Collection name
    pub collection: Option<String>,
}

/// Target side of a collection rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetRef {
    /// Iceberg namespace
    pub namespace: Option<String>,
    /// Iceberg table name
    pub table: Option<String>,
}

/// Field-to-column mapping for one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingConfig {
    /// `auto` or `explicit`
    pub mode: Option<String>,
    /// Explicit field mappings; must be non-empty in explicit mode
    pub fields: Option<Vec<FieldMapping>>,
}

impl MappingConfig {
    #[must_use]
    fn with_defaults(self) -> Self {
        let mode = self
            .mode
            .map_or_else(|| MappingMode::Auto.as_str().to_owned(), |mode| mode.trim().to_lowercase());
        Self {
            mode: Some(mode),
            fields: Some(self.fields.unwrap_or_default()),
        }
    }

    /// Typed view of `mode`, or `None` if it is absent or unsupported.
    pub fn kind(&self) -> Option<MappingMode> {
        self.mode.as_deref()?.parse().ok()
    }
}

/// How source fields map to target columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingMode {
    /// Columns are inferred from the documents
    Auto,
    /// Columns are exactly the listed field mappings
    Explicit,
}

impl MappingMode {
    /// Accepted spellings, in the order they are reported.
    pub const NAMES: [&'static str; 2] = ["auto", "explicit"];

    /// Canonical lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Explicit => "explicit",
        }
    }
}

impl FromStr for MappingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "explicit" => Ok(Self::Explicit),
            other => Err(format!("unsupported mapping mode: {other}")),
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One explicit source-field to target-column mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldMapping {
    /// Source document field (may be a dotted path)
    pub source: Option<String>,
    /// Target column
    pub target: Option<String>,
    /// Optional column type hint, passed through unvalidated
    #[serde(rename = "type")]
    pub field_type: Option<String>,
}

/// A partition field and its transform (`day`, `month`, `bucket[16]`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitionRule {
    /// Source field
    pub field: Option<String>,
    /// Transform name, not checked against a transform catalog
    pub transform: Option<String>,
}

/// Default record threshold for a batch.
pub const DEFAULT_MAX_RECORDS: i64 = 50_000;
/// Default byte threshold for a batch (128 MiB).
pub const DEFAULT_MAX_BYTES: i64 = 134_217_728;
/// Default time threshold for a batch, in seconds.
pub const DEFAULT_FLUSH_INTERVAL_SECONDS: i32 = 60;

/// Thresholds that trigger a flush to the target table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPolicy {
    /// Flush after this many records
    pub max_records: Option<i64>,
    /// Flush after this many bytes
    pub max_bytes: Option<i64>,
    /// Flush after this many seconds
    pub flush_interval_seconds: Option<i32>,
}

impl BatchPolicy {
    #[must_use]
    fn with_defaults(self) -> Self {
        Self {
            max_records: Some(self.max_records.unwrap_or(DEFAULT_MAX_RECORDS)),
            max_bytes: Some(self.max_bytes.unwrap_or(DEFAULT_MAX_BYTES)),
            flush_interval_seconds: Some(
                self.flush_interval_seconds
                    .unwrap_or(DEFAULT_FLUSH_INTERVAL_SECONDS),
            ),
        }
    }

    /// Flush interval as a [`Duration`], if set to a positive value.
    pub fn flush_interval(&self) -> Option<Duration> {
        self.flush_interval_seconds
            .and_then(|secs| u64::try_from(secs).ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
