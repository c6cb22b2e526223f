//! Display names for known creators, loaded once at startup

use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::core::{IndexerError, IndexerResult};
use crate::domain::models::CreatorDisplay;

/// Read-only mapping from creator address to display fields
#[derive(Debug, Clone, Default)]
pub struct NameOverrides {
    entries: HashMap<Pubkey, CreatorDisplay>,
}

impl NameOverrides {
    pub fn new(entries: HashMap<Pubkey, CreatorDisplay>) -> Self {
        Self { entries }
    }

    /// Parse a JSON object keyed by base58 creator address
    pub fn from_json(json: &str) -> IndexerResult<Self> {
        let raw: HashMap<String, CreatorDisplay> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|(address, display)| {
                Pubkey::from_str(&address)
                    .map(|pubkey| (pubkey, display))
                    .map_err(|e| {
                        IndexerError::Configuration(format!(
                            "invalid creator address {} in name overrides: {}",
                            address, e
                        ))
                    })
            })
            .collect::<IndexerResult<HashMap<_, _>>>()?;
        Ok(Self { entries })
    }

    pub fn from_file(path: &Path) -> IndexerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let overrides = Self::from_json(&content)?;
        info!("Loaded {} creator name overrides from {:?}", overrides.len(), path);
        Ok(overrides)
    }

    pub fn get(&self, address: &Pubkey) -> Option<&CreatorDisplay> {
        self.entries.get(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
