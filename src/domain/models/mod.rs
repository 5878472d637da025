//! Domain models

pub mod sync_config;

pub use sync_config::{
    BatchPolicy, CatalogConfig, CatalogDescriptor, CatalogKind, CollectionSyncConfig,
    FieldMapping, MappingConfig, MappingMode, MongoEndpoint, PartitionRule, RootConfig,
    SourceRef, SyncSection, TargetRef, DEFAULT_FLUSH_INTERVAL_SECONDS, DEFAULT_MAX_BYTES,
    DEFAULT_MAX_RECORDS,
};
