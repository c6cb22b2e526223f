//! Loads account batches saved from `getProgramAccounts` responses

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use std::path::Path;
use std::str::FromStr;

use crate::core::{AccountRecord, IndexerError, IndexerResult, KeyedAccount};

#[derive(Debug, Deserialize)]
struct RpcKeyedAccount {
    pubkey: String,
    account: RpcAccount,
}

#[derive(Debug, Deserialize)]
struct RpcAccount {
    /// `[payload, encoding]`
    data: (String, String),
    owner: String,
}

fn parse_pubkey(value: &str, field: &str) -> IndexerResult<Pubkey> {
    Pubkey::from_str(value).map_err(|e| IndexerError::InvalidAccountData {
        account_type: "RpcKeyedAccount",
        reason: format!("invalid {} {}: {}", field, value, e),
    })
}

impl TryFrom<RpcKeyedAccount> for KeyedAccount {
    type Error = IndexerError;

    fn try_from(raw: RpcKeyedAccount) -> Result<Self, Self::Error> {
        let pubkey = parse_pubkey(&raw.pubkey, "pubkey")?;
        let owner = parse_pubkey(&raw.account.owner, "owner")?;
        let (payload, encoding) = raw.account.data;
        if encoding != "base64" {
            return Err(IndexerError::InvalidAccountData {
                account_type: "RpcKeyedAccount",
                reason: format!("unsupported encoding {} for {}", encoding, pubkey),
            });
        }
        let data = STANDARD
            .decode(payload.as_bytes())
            .map_err(|e| IndexerError::InvalidAccountData {
                account_type: "RpcKeyedAccount",
                reason: format!("bad base64 for {}: {}", pubkey, e),
            })?;
        Ok(KeyedAccount::new(pubkey, AccountRecord::new(owner, data)))
    }
}

/// Parse a JSON array of keyed accounts
pub fn parse_accounts(json: &str) -> IndexerResult<Vec<KeyedAccount>> {
    let raw: Vec<RpcKeyedAccount> = serde_json::from_str(json)?;
    raw.into_iter().map(KeyedAccount::try_from).collect()
}

pub fn load_accounts(path: &Path) -> IndexerResult<Vec<KeyedAccount>> {
    let content = std::fs::read_to_string(path)?;
    parse_accounts(&content)
}
