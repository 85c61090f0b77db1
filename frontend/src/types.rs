//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Collection Types** - Read-only data fetched from the indexer and view functions
//! - **Wallet Types** - Connected account info
//! - **Error Types** - Frontend error handling

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Collection Types
// =============================================================================

/// On-chain collection as returned by the indexer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection object address
    pub collection_id: String,
    /// Display name
    pub collection_name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Metadata URI
    #[serde(default)]
    pub uri: String,
}

/// Everything the mint page knows about the configured collection.
///
/// Every field is optional; the UI renders defensively when any is missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionData {
    pub collection: Option<Collection>,
    pub total_minted: Option<u64>,
    pub max_supply: Option<u64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_mint_infinite: Option<bool>,
    /// Set when the data source already decided whether minting is open.
    pub is_mint_active: Option<bool>,
}

impl CollectionData {
    /// Collection identifier, if the collection was found and the id is non-empty.
    pub fn collection_id(&self) -> Option<&str> {
        self.collection
            .as_ref()
            .map(|c| c.collection_id.as_str())
            .filter(|id| !id.trim().is_empty())
    }
}

// =============================================================================
// Wallet Types
// =============================================================================

/// Connected wallet information.
#[derive(Clone, Debug, PartialEq)]
pub struct WalletInfo {
    /// Hex account address (0x...)
    pub address: String,
    /// Ed25519 public key, when the wallet exposes it
    pub public_key: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Wallet connection or signing failed.
    #[error("Wallet error: {0}")]
    Wallet(String),
    /// Transaction was rejected or failed on chain.
    #[error("Transaction error: {0}")]
    Transaction(String),
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),
    /// Indexer or view function returned something unexpected.
    #[error("Indexer error: {0}")]
    Indexer(String),
    /// Site configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
    /// JSON encoding/decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Clipboard write failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for AppError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_id_ignores_blank() {
        let mut data = CollectionData::default();
        assert_eq!(data.collection_id(), None);

        data.collection = Some(Collection {
            collection_id: String::new(),
            collection_name: "Rx".to_string(),
            description: String::new(),
            uri: String::new(),
        });
        assert_eq!(data.collection_id(), None);

        data.collection.as_mut().unwrap().collection_id = "   ".to_string();
        assert_eq!(data.collection_id(), None);

        data.collection.as_mut().unwrap().collection_id = "0xabc".to_string();
        assert_eq!(data.collection_id(), Some("0xabc"));
    }

    #[test]
    fn test_error_display() {
        let err: AppError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("Serialization error:"));
        assert_eq!(
            AppError::Wallet("rejected".into()).to_string(),
            "Wallet error: rejected"
        );
    }
}
