//! Binding of a substituted [`Node`] tree onto the configuration entities.
//!
//! Each entity declares the keys it accepts in [`Bind::FIELDS`]. A mapping
//! holding any other key is rejected before the entity is built. Absent and
//! null fields bind to `None`; defaults are applied later.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::models::{
    BatchPolicy, CatalogConfig, CatalogDescriptor, CollectionSyncConfig, FieldMapping,
    MappingConfig, MongoEndpoint, PartitionRule, RootConfig, SourceRef, SyncSection, TargetRef,
};

use super::document::{Document, Node};
use super::error::{ConfigError, ConfigResult};
use super::path::FieldPath;

/// Bind a parsed and substituted document onto [`RootConfig`].
pub fn bind_root(document: &Document) -> ConfigResult<RootConfig> {
    let path = FieldPath::root();
    match &document.root {
        Node::Null => Err(ConfigError::EmptyDocument {
            origin: document.origin.clone(),
        }),
        node => bind_object::<RootConfig>(node, &path)
            .map(Option::unwrap_or_default),
    }
}

/// An entity with a closed set of keys.
trait Bind: Sized {
    /// Keys accepted in the entity's mapping.
    const FIELDS: &'static [&'static str];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self>;
}

fn bind_object<T: Bind>(node: &Node, path: &FieldPath) -> ConfigResult<Option<T>> {
    match node {
        Node::Null => Ok(None),
        Node::Mapping(entries) => {
            if let Some((key, _)) = entries.iter().find(|(key, _)| !T::FIELDS.contains(&key.as_str())) {
                return Err(ConfigError::UnknownField {
                    path: path.key(key),
                });
            }
            T::bind_fields(&Fields { entries, path }).map(Some)
        }
        other => Err(mismatch(path, "mapping", other)),
    }
}

fn mismatch(path: &FieldPath, expected: &'static str, found: &Node) -> ConfigError {
    let found = match found {
        Node::Scalar(text) => format!("scalar {text:?}"),
        other => other.shape().to_owned(),
    };
    ConfigError::TypeMismatch {
        path: path.clone(),
        expected,
        found,
    }
}

/// Typed accessors over the entries of one mapping.
struct Fields<'a> {
    entries: &'a [(String, Node)],
    path: &'a FieldPath,
}

impl Fields<'_> {
    fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    fn string(&self, key: &str) -> ConfigResult<Option<String>> {
        match self.get(key) {
            None | Some(Node::Null) => Ok(None),
            Some(Node::Scalar(text)) => Ok(Some(text.clone())),
            Some(other) => Err(mismatch(&self.path.key(key), "string", other)),
        }
    }

    fn integer<T: FromStr>(&self, key: &str) -> ConfigResult<Option<T>> {
        match self.get(key) {
            None | Some(Node::Null) => Ok(None),
            Some(Node::Scalar(text)) => text.trim().parse().map(Some).map_err(|_| {
                ConfigError::TypeMismatch {
                    path: self.path.key(key),
                    expected: "integer",
                    found: format!("scalar {text:?}"),
                }
            }),
            Some(other) => Err(mismatch(&self.path.key(key), "integer", other)),
        }
    }

    fn object<T: Bind>(&self, key: &str) -> ConfigResult<Option<T>> {
        self.get(key)
            .map_or(Ok(None), |node| bind_object(node, &self.path.key(key)))
    }

    fn list<T: Bind>(&self, key: &str) -> ConfigResult<Option<Vec<T>>> {
        let path = self.path.key(key);
        match self.get(key) {
            None | Some(Node::Null) => Ok(None),
            Some(Node::Sequence(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let item_path = path.index(i);
                    bind_object(item, &item_path)?.ok_or_else(|| mismatch(&item_path, "mapping", item))
                })
                .collect::<ConfigResult<Vec<T>>>()
                .map(Some),
            Some(other) => Err(mismatch(&path, "sequence", other)),
        }
    }

    fn string_map(&self, key: &str) -> ConfigResult<Option<BTreeMap<String, String>>> {
        let path = self.path.key(key);
        match self.get(key) {
            None | Some(Node::Null) => Ok(None),
            Some(Node::Mapping(entries)) => entries
                .iter()
                .map(|(k, value)| match value {
                    Node::Scalar(text) => Ok((k.clone(), text.clone())),
                    other => Err(mismatch(&path.key(k), "string", other)),
                })
                .collect::<ConfigResult<BTreeMap<_, _>>>()
                .map(Some),
            Some(other) => Err(mismatch(&path, "mapping", other)),
        }
    }
}

impl Bind for RootConfig {
    const FIELDS: &'static [&'static str] = &["mongodb", "iceberg", "sync"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            mongodb: fields.object("mongodb")?,
            iceberg: fields.object("iceberg")?,
            sync: fields.object("sync")?,
        })
    }
}

impl Bind for MongoEndpoint {
    const FIELDS: &'static [&'static str] = &["uri", "database"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            uri: fields.string("uri")?,
            database: fields.string("database")?,
        })
    }
}

impl Bind for CatalogConfig {
    const FIELDS: &'static [&'static str] = &["catalog", "properties"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            catalog: fields.object("catalog")?,
            properties: fields.string_map("properties")?,
        })
    }
}

impl Bind for CatalogDescriptor {
    const FIELDS: &'static [&'static str] = &["type", "uri", "warehouse"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            catalog_type: fields.string("type")?,
            uri: fields.string("uri")?,
            warehouse: fields.string("warehouse")?,
        })
    }
}

impl Bind for SyncSection {
    const FIELDS: &'static [&'static str] = &["collections"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            collections: fields.list("collections")?,
        })
    }
}

impl Bind for CollectionSyncConfig {
    const FIELDS: &'static [&'static str] = &["source", "target", "mapping", "partitioning", "batch"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            source: fields.object("source")?,
            target: fields.object("target")?,
            mapping: fields.object("mapping")?,
            partitioning: fields.list("partitioning")?,
            batch: fields.object("batch")?,
        })
    }
}

impl Bind for SourceRef {
    const FIELDS: &'static [&'static str] = &["collection"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            collection: fields.string("collection")?,
        })
    }
}

impl Bind for TargetRef {
    const FIELDS: &'static [&'static str] = &["namespace", "table"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            namespace: fields.string("namespace")?,
            table: fields.string("table")?,
        })
    }
}

impl Bind for MappingConfig {
    const FIELDS: &'static [&'static str] = &["mode", "fields"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            mode: fields.string("mode")?,
            fields: fields.list("fields")?,
        })
    }
}

impl Bind for FieldMapping {
    const FIELDS: &'static [&'static str] = &["source", "target", "type"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            source: fields.string("source")?,
            target: fields.string("target")?,
            field_type: fields.string("type")?,
        })
    }
}

impl Bind for PartitionRule {
    const FIELDS: &'static [&'static str] = &["field", "transform"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            field: fields.string("field")?,
            transform: fields.string("transform")?,
        })
    }
}

impl Bind for BatchPolicy {
    const FIELDS: &'static [&'static str] = &["maxRecords", "maxBytes", "flushIntervalSeconds"];

    fn bind_fields(fields: &Fields<'_>) -> ConfigResult<Self> {
        Ok(Self {
            max_records: fields.integer("maxRecords")?,
            max_bytes: fields.integer("maxBytes")?,
            flush_interval_seconds: fields.integer("flushIntervalSeconds")?,
        })
    }
}
