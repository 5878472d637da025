//! mongo-iceberg-sync - MongoDB to Apache Iceberg synchronization daemon
//!
//! This crate holds the daemon's configuration pipeline: a YAML document is
//! parsed, `${VAR}` placeholders are resolved from the environment, the result
//! is bound onto typed entities, defaults are applied and the whole tree is
//! validated before anything starts.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Configuration entities and the engine port
//! - **Service Layer** (`services`): Startup planning from a validated config
//! - **Infrastructure Layer** (`infrastructure`): Config loading and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use mongo_iceberg_sync::ConfigLoader;
//!
//! let config = ConfigLoader::load("sync.yaml")?;
//! for collection in config.collections() {
//!     println!("{:?}", collection.target);
//! }
//! # Ok::<(), mongo_iceberg_sync::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    BatchPolicy, CatalogConfig, CatalogDescriptor, CatalogKind, CollectionSyncConfig,
    FieldMapping, MappingConfig, MappingMode, MongoEndpoint, PartitionRule, RootConfig,
    SourceRef, SyncSection, TargetRef,
};
pub use domain::ports::SyncEngine;
pub use infrastructure::config::{load, ConfigError, ConfigErrorKind, ConfigLoader, ConfigResult};
pub use services::{PlanningEngine, SyncPlan};
