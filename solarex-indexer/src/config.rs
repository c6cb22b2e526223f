//! Configuration management for the Solarex indexer

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use validator::Validate;

use crate::adapters::solana::derive_store_address;
use crate::core::{IndexerError, IndexerResult};
use crate::domain::processors::RouterSettings;

/// Default Solarex program id
pub const DEFAULT_PROGRAM_ID: &str = "p1exdMJcjVao65QdewkaZRUnU6VPSXhus9n2GzWfh98";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IndexerConfig {
    pub program: ProgramConfig,
    #[validate]
    pub processing: ProcessingConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProgramConfig {
    pub program_id: String,
    /// Store this deployment indexes
    pub store: Option<String>,
    /// Owner the store address is derived from when `store` is unset
    pub store_owner: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Index auction managers of every store, not just ours
    pub include_all_stores: bool,
    #[validate(range(min = 1, max = 1024))]
    pub concurrency: usize,
    /// JSON file of creator display names
    pub name_overrides: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MonitoringConfig {
    pub log_level: String,
    pub structured_logging: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID.to_string(),
            store: None,
            store_owner: None,
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            include_all_stores: false,
            concurrency: 64,
            name_overrides: None,
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            structured_logging: false,
        }
    }
}

fn parse_pubkey(field: &str, value: &str) -> IndexerResult<Pubkey> {
    Pubkey::from_str(value)
        .map_err(|e| IndexerError::Configuration(format!("invalid {}: {} ({})", field, value, e)))
}

impl ProgramConfig {
    pub fn program_id(&self) -> IndexerResult<Pubkey> {
        parse_pubkey("program_id", &self.program_id)
    }

    /// Configured store, or the store derived from `store_owner`
    pub fn store(&self) -> IndexerResult<Option<Pubkey>> {
        let program_id = self.program_id()?;
        let explicit = self
            .store
            .as_deref()
            .map(|store| parse_pubkey("store", store))
            .transpose()?;
        let derived = self
            .store_owner
            .as_deref()
            .map(|owner| parse_pubkey("store_owner", owner))
            .transpose()?
            .map(|owner| derive_store_address(&program_id, &owner));

        match (explicit, derived) {
            (Some(store), Some(derived)) if store != derived => {
                Err(IndexerError::Configuration(format!(
                    "store {} does not belong to store_owner (expected {})",
                    store, derived
                )))
            }
            (Some(store), _) => Ok(Some(store)),
            (None, derived) => Ok(derived),
        }
    }
}

impl IndexerConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> IndexerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> IndexerResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Field-level rules plus the checks that need parsing
    pub fn validate(&self) -> IndexerResult<()> {
        Validate::validate(self)?;
        if self.program.program_id.is_empty() {
            return Err(IndexerError::Configuration(
                "Program ID cannot be empty".to_string(),
            ));
        }
        self.program.store()?;
        Ok(())
    }

    pub fn router_settings(&self) -> IndexerResult<RouterSettings> {
        Ok(
            RouterSettings::new(self.program.program_id()?, self.program.store()?)
                .with_concurrency(self.processing.concurrency),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = IndexerConfig::default();
        config.validate().unwrap();
        let settings = config.router_settings().unwrap();
        assert_eq!(settings.store, None);
        assert_eq!(settings.concurrency, 64);
    }

    #[test]
    fn test_store_owner_derivation() {
        let owner = Pubkey::new_from_array([8; 32]);
        let mut config = IndexerConfig::default();
        config.program.store_owner = Some(owner.to_string());

        let program_id = config.program.program_id().unwrap();
        assert_eq!(
            config.program.store().unwrap(),
            Some(derive_store_address(&program_id, &owner))
        );

        config.program.store = Some(Pubkey::new_from_array([1; 32]).to_string());
        assert!(matches!(
            config.validate(),
            Err(IndexerError::Configuration(_))
        ));
    }

    #[test]
    fn test_concurrency_range() {
        let mut config = IndexerConfig::default();
        config.processing.concurrency = 0;
        assert!(config.validate().is_err());
    }
}
