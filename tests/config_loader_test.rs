//! End-to-end tests for loading sync documents from disk.

mod common;

use common::{empty_env, env_of, write_config, FULL, MINIMAL};
use mongo_iceberg_sync::domain::models::{
    DEFAULT_FLUSH_INTERVAL_SECONDS, DEFAULT_MAX_BYTES, DEFAULT_MAX_RECORDS,
};
use mongo_iceberg_sync::infrastructure::config::binder::bind_root;
use mongo_iceberg_sync::infrastructure::config::document::parse_document;
use mongo_iceberg_sync::infrastructure::config::{ConfigError, ConfigErrorKind, ConfigLoader};

#[test]
fn test_minimal_document_loads_with_defaults() {
    let file = write_config(MINIMAL);
    let config = ConfigLoader::load_with_env(file.path(), &empty_env()).unwrap();

    let collection = &config.collections()[0];
    let batch = collection.batch.as_ref().unwrap();
    assert_eq!(batch.max_records, Some(50_000));
    assert_eq!(
        collection.mapping.as_ref().unwrap().mode.as_deref(),
        Some("auto")
    );
    assert_eq!(collection.partitioning.as_deref(), Some(&[][..]));
}

#[test]
fn test_missing_uri_is_reported() {
    let file = write_config(&MINIMAL.replace("  uri: \"mongodb://localhost:27017\"\n", ""));
    let err = ConfigLoader::load_with_env(file.path(), &empty_env()).unwrap_err();

    assert_eq!(err.kind(), ConfigErrorKind::ValidationFailure);
    assert!(err.to_string().contains("mongodb.uri is required"));
}

#[test]
fn test_home_placeholder_resolved_from_process_env() {
    let file = write_config(&MINIMAL.replace("/tmp/warehouse", "\"${HOME}/iceberg\""));

    temp_env::with_var("HOME", Some("/home/alice"), || {
        let config = ConfigLoader::load(file.path()).unwrap();
        let catalog = config.iceberg.unwrap().catalog.unwrap();
        assert_eq!(catalog.warehouse.as_deref(), Some("/home/alice/iceberg"));
    });
}

#[test]
fn test_rest_catalog_requires_uri() {
    let file = write_config(&MINIMAL.replace("type: local", "type: rest"));
    let err = ConfigLoader::load_with_env(file.path(), &empty_env()).unwrap_err();

    assert!(err.to_string().contains("iceberg.catalog.uri is required"));
}

#[test]
fn test_empty_collection_list_is_rejected() {
    let yaml = r#"
mongodb: {uri: "mongodb://localhost:27017", database: mydb}
iceberg:
  catalog: {type: local, warehouse: /tmp/warehouse}
sync:
  collections: []
"#;
    let file = write_config(yaml);
    let err = ConfigLoader::load_with_env(file.path(), &empty_env()).unwrap_err();

    assert!(err
        .to_string()
        .contains("sync.collections must contain at least one"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = ConfigLoader::load(&path).unwrap_err();

    assert_eq!(err.kind(), ConfigErrorKind::NotFound);
    assert_eq!(
        err.to_string(),
        format!("config file does not exist: {}", path.display())
    );
}

#[test]
fn test_directory_path_is_a_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::load(dir.path()).unwrap_err();

    assert_eq!(err.kind(), ConfigErrorKind::ReadFailure);
}

#[test]
fn test_empty_file_is_reported() {
    let file = write_config("   \n");
    let err = ConfigLoader::load_with_env(file.path(), &empty_env()).unwrap_err();

    assert_eq!(err.kind(), ConfigErrorKind::EmptyDocument);
    assert!(err.to_string().starts_with("config file is empty: "));
}

#[test]
fn test_malformed_yaml_names_the_file() {
    let file = write_config("mongodb: [unclosed\n");
    let err = ConfigLoader::load_with_env(file.path(), &empty_env()).unwrap_err();

    assert_eq!(err.kind(), ConfigErrorKind::MalformedDocument);
    let origin = file.path().display().to_string();
    assert!(err
        .to_string()
        .starts_with(&format!("invalid YAML in config file: {origin}: ")));
}

#[test]
fn test_unknown_field_is_rejected() {
    let yaml = MINIMAL.replace("  database: mydb\n", "  database: mydb\n  replicaSet: rs0\n");
    let err = ConfigLoader::load_from_str(&yaml, &empty_env()).unwrap_err();

    match err {
        ConfigError::UnknownField { path } => assert_eq!(path.as_str(), "mongodb.replicaSet"),
        other => panic!("expected unknown field, got {other:?}"),
    }
}

#[test]
fn test_unresolved_variable_anywhere_in_tree() {
    let locations = [
        MINIMAL.replace("mydb", "${DB_NAME}"),
        MINIMAL.replace("orders\n      target", "\"${COLL}\"\n      target"),
        MINIMAL.replace("table: orders", "table: \"t_${SUFFIX}\""),
    ];

    for (yaml, name) in locations.iter().zip(["DB_NAME", "COLL", "SUFFIX"]) {
        let err = ConfigLoader::load_from_str(yaml, &empty_env()).unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::UnresolvedVariable);
        assert_eq!(
            err.to_string(),
            format!("environment variable is not set: {name}")
        );
    }
}

#[test]
fn test_placeholders_resolved_from_injected_env() {
    let yaml = MINIMAL.replace("\"mongodb://localhost:27017\"", "\"mongodb://${MONGO_HOST}:${MONGO_PORT}\"");
    let env = env_of(&[("MONGO_HOST", "db.internal"), ("MONGO_PORT", "27018")]);
    let config = ConfigLoader::load_from_str(&yaml, &env).unwrap();

    assert_eq!(
        config.mongodb.unwrap().uri.as_deref(),
        Some("mongodb://db.internal:27018")
    );
}

#[test]
fn test_explicit_mode_without_fields_fails_on_fields_path() {
    let yaml = format!(
        "{MINIMAL}      mapping:\n        mode: Explicit\n        fields: []\n"
    );
    let err = ConfigLoader::load_from_str(&yaml, &empty_env()).unwrap_err();

    match err {
        ConfigError::ValidationFailure { path, message } => {
            assert!(path.as_str().ends_with(".mapping.fields"));
            assert_eq!(message, "must be non-empty when mode is explicit");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_partial_batch_keeps_supplied_values() {
    let yaml = format!("{MINIMAL}      batch:\n        maxBytes: 1024\n");
    let config = ConfigLoader::load_from_str(&yaml, &empty_env()).unwrap();
    let batch = config.collections()[0].batch.clone().unwrap();

    assert_eq!(batch.max_records, Some(DEFAULT_MAX_RECORDS));
    assert_eq!(batch.max_bytes, Some(1024));
    assert_eq!(batch.flush_interval_seconds, Some(DEFAULT_FLUSH_INTERVAL_SECONDS));
    assert_ne!(batch.max_bytes, Some(DEFAULT_MAX_BYTES));
}

#[test]
fn test_non_positive_batch_value_is_rejected() {
    let yaml = format!("{MINIMAL}      batch:\n        flushIntervalSeconds: 0\n");
    let err = ConfigLoader::load_from_str(&yaml, &empty_env()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "sync.collections[0].batch.flushIntervalSeconds must be > 0"
    );
}

#[test]
fn test_defaulting_is_noop_for_fully_specified_document() {
    let bound = bind_root(&parse_document(FULL.as_bytes(), "full.yaml").unwrap()).unwrap();
    let loaded = ConfigLoader::load_from_str(FULL, &empty_env()).unwrap();

    assert_eq!(bound.clone().with_defaults(), bound);
    assert_eq!(loaded, bound);
}

#[test]
fn test_catalog_type_kept_verbatim() {
    let yaml = MINIMAL.replace("type: local", "type: \" S3Tables \"");
    let config = ConfigLoader::load_from_str(&yaml, &empty_env()).unwrap();
    let catalog = config.iceberg.unwrap().catalog.unwrap();

    assert_eq!(catalog.catalog_type.as_deref(), Some(" S3Tables "));
}

#[test]
fn test_unsupported_catalog_type_lists_choices() {
    let yaml = MINIMAL.replace("type: local", "type: hive");
    let err = ConfigLoader::load_from_str(&yaml, &empty_env()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "iceberg.catalog.type must be one of: local, s3tables, rest"
    );
}

#[test]
fn test_quoted_numeric_text_is_kept_as_written() {
    let quoted = MINIMAL.replace("table: orders", "table: \"1.10\"");
    let config = ConfigLoader::load_from_str(&quoted, &empty_env()).unwrap();
    let target = config.collections()[0].target.clone().unwrap();
    assert_eq!(target.table.as_deref(), Some("1.10"));

    let bare = MINIMAL.replace("table: orders", "table: 1.10");
    let config = ConfigLoader::load_from_str(&bare, &empty_env()).unwrap();
    let target = config.collections()[0].target.clone().unwrap();
    assert_eq!(target.table.as_deref(), Some("1.1"));
}
