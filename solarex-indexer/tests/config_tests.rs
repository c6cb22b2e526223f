//! Configuration system tests

use anyhow::Result;
use solana_sdk::pubkey::Pubkey;
use solarex_indexer::adapters::solana::load_accounts;
use solarex_indexer::domain::NameOverrides;
use solarex_indexer::{IndexerConfig, IndexerError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a test configuration file
fn create_test_config_content(store: &Pubkey) -> String {
    format!(
        r#"
[program]
program_id = "p1exdMJcjVao65QdewkaZRUnU6VPSXhus9n2GzWfh98"
store = "{}"

[processing]
include_all_stores = true
concurrency = 16
name_overrides = "names.json"

[monitoring]
log_level = "debug"
structured_logging = true
"#,
        store
    )
}

#[test]
fn test_config_loading_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("indexer.toml");
    let store = Pubkey::new_from_array([7; 32]);
    fs::write(&config_path, create_test_config_content(&store))?;

    let config = IndexerConfig::from_file(&config_path)?;

    assert!(config.processing.include_all_stores);
    assert_eq!(config.processing.concurrency, 16);
    assert_eq!(
        config.processing.name_overrides,
        Some(PathBuf::from("names.json"))
    );
    assert_eq!(config.monitoring.log_level, "debug");
    assert!(config.monitoring.structured_logging);

    let settings = config.router_settings()?;
    assert_eq!(settings.store, Some(store));
    assert_eq!(settings.concurrency, 16);
    Ok(())
}

#[test]
fn test_partial_config_uses_defaults() -> Result<()> {
    let config = IndexerConfig::from_toml("[monitoring]\nlog_level = \"warn\"\n")?;

    assert_eq!(config.monitoring.log_level, "warn");
    assert_eq!(config.processing.concurrency, 64);
    assert!(!config.processing.include_all_stores);
    assert_eq!(config.program.store, None);
    Ok(())
}

#[test]
fn test_invalid_program_id_rejected() {
    let result = IndexerConfig::from_toml("[program]\nprogram_id = \"not-base58!\"\n");
    assert!(matches!(result, Err(IndexerError::Configuration(_))));

    let result = IndexerConfig::from_toml("[program]\nprogram_id = \"\"\n");
    assert!(matches!(result, Err(IndexerError::Configuration(_))));
}

#[test]
fn test_invalid_concurrency_rejected() {
    let result = IndexerConfig::from_toml("[processing]\nconcurrency = 5000\n");
    assert!(matches!(result, Err(IndexerError::Configuration(_))));
}

#[test]
fn test_name_overrides_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("names.json");
    let creator = Pubkey::new_from_array([4; 32]);
    fs::write(
        &path,
        format!(r#"{{ "{}": {{ "name": "Four", "description": "fourth" }} }}"#, creator),
    )?;

    let names = NameOverrides::from_file(&path)?;
    assert_eq!(names.len(), 1);
    let display = names.get(&creator).unwrap();
    assert_eq!(display.name.as_deref(), Some("Four"));
    assert_eq!(display.description.as_deref(), Some("fourth"));
    Ok(())
}

#[test]
fn test_missing_accounts_file() {
    let result = load_accounts(&PathBuf::from("/nonexistent/accounts.json"));
    assert!(matches!(result, Err(IndexerError::Io(_))));
}
