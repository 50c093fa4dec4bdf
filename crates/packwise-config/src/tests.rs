//! Tests for engine configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [allocator]
        max_dp_cells = 500000

        [catalog]
        enforce_unique_sizes = true
        max_pack_sizes = 32
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.allocator.max_dp_cells, 500_000);
    assert!(config.catalog.enforce_unique_sizes);
    assert_eq!(config.catalog.max_pack_sizes, Some(32));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        allocator:
          max_dp_cells: 500000
        catalog:
          enforce_unique_sizes: true
    "#;

    let config = EngineConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.allocator.max_dp_cells, 500_000);
    assert!(config.catalog.enforce_unique_sizes);
    assert_eq!(config.catalog.max_pack_sizes, None);
}

#[test]
fn test_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(
        config.allocator.max_dp_cells,
        AllocatorConfig::DEFAULT_MAX_DP_CELLS
    );
    assert!(!config.catalog.enforce_unique_sizes);
    assert_eq!(config.catalog.max_pack_sizes, None);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = EngineConfig::from_toml_str(
        r#"
        [catalog]
        enforce_unique_sizes = true
    "#,
    )
    .unwrap();
    assert_eq!(
        config.allocator.max_dp_cells,
        AllocatorConfig::DEFAULT_MAX_DP_CELLS
    );
    assert!(config.catalog.enforce_unique_sizes);
}

#[test]
fn test_builder() {
    let config = EngineConfig::new()
        .with_max_dp_cells(1024)
        .with_unique_sizes(true)
        .with_max_pack_sizes(8);
    assert_eq!(config.allocator.max_dp_cells, 1024);
    assert!(config.catalog.enforce_unique_sizes);
    assert_eq!(config.catalog.max_pack_sizes, Some(8));
}

#[test]
fn test_validate_rejects_zero_limits() {
    let config = EngineConfig::new().with_max_dp_cells(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = EngineConfig::new().with_max_pack_sizes(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    assert!(EngineConfig::default().validate().is_ok());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let err = EngineConfig::from_toml_str("allocator = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = EngineConfig::load("definitely-not-here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
