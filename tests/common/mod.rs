//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;

use tempfile::NamedTempFile;

/// Smallest document that loads successfully.
pub const MINIMAL: &str = r#"
mongodb:
  uri: "mongodb://localhost:27017"
  database: mydb
iceberg:
  catalog:
    type: local
    warehouse: /tmp/warehouse
sync:
  collections:
    - source:
        collection: orders
      target:
        namespace: analytics
        table: orders
"#;

/// Document with every optional field given explicitly.
pub const FULL: &str = r#"
mongodb:
  uri: "mongodb://localhost:27017"
  database: mydb
iceberg:
  catalog:
    type: rest
    uri: http://catalog:8181
    warehouse: s3://lake
  properties:
    io-impl: org.apache.iceberg.aws.s3.S3FileIO
sync:
  collections:
    - source:
        collection: orders
      target:
        namespace: analytics
        table: orders
      mapping:
        mode: explicit
        fields:
          - source: _id
            target: id
            type: string
          - source: customer.name
            target: customer_name
      partitioning:
        - field: order_date
          transform: day
      batch:
        maxRecords: 1000
        maxBytes: 4096
        flushIntervalSeconds: 5
"#;

/// Write `contents` to a fresh temporary file.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

/// Environment with no variables set.
pub fn empty_env() -> HashMap<String, String> {
    HashMap::new()
}

/// Environment built from `(name, value)` pairs.
pub fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}
