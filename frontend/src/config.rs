//! Application configuration.
//!
//! Two layers:
//!
//! - Network constants, optionally overridden at build time through
//!   `MODULE_ADDRESS` and `APTOS_NETWORK` environment variables.
//! - The page content tree ([`SiteConfig`]) embedded from `site.config.json`.

use serde::{Deserialize, Serialize};

use crate::types::{AppError, AppResult};

/// Application name shown in the header.
pub const APP_NAME: &str = "Prescription Mint";

/// Address of the account that published the `launchpad` module.
pub const MODULE_ADDRESS: &str = match option_env!("MODULE_ADDRESS") {
    Some(addr) => addr,
    None => "0x8b7a6a2b6de1b1a1e2a8bc2d9e3a3c2b7f94ec0b2fd2fbd1e9d1bc3c43d5f7a1",
};

/// Network name used for RPC endpoints and explorer links.
pub const NETWORK_NAME: &str = match option_env!("APTOS_NETWORK") {
    Some(name) => name,
    None => "testnet",
};

/// Number of tokens minted per submission.
pub const DEFAULT_MINT_AMOUNT: u64 = 1;

/// How long the "Copied!" feedback stays visible (ms).
pub const COPY_FEEDBACK_MS: u32 = 3_000;

/// Delay between confirmation polls while a transaction is pending (ms).
pub const TX_POLL_INTERVAL_MS: u32 = 1_000;

/// Embedded page content.
const SITE_CONFIG_JSON: &str = include_str!("../site.config.json");

// =============================================================================
// Network
// =============================================================================

/// Aptos networks the page can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    /// Parse a network name; unknown names fall back to testnet.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Network::Mainnet,
            "devnet" => Network::Devnet,
            "testnet" => Network::Testnet,
            other => {
                log::warn!("⚠️ Unknown network '{}', using testnet", other);
                Network::Testnet
            }
        }
    }

    /// Network configured for this build.
    pub fn current() -> Self {
        Self::from_name(NETWORK_NAME)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }

    /// Fullnode REST base URL.
    pub fn fullnode_url(&self) -> String {
        format!("https://api.{}.aptoslabs.com/v1", self.as_str())
    }

    /// Indexer GraphQL endpoint.
    pub fn indexer_url(&self) -> String {
        format!("https://api.{}.aptoslabs.com/v1/graphql", self.as_str())
    }

    /// Explorer page for an account or object address.
    pub fn explorer_account_url(&self, address: &str) -> String {
        format!(
            "https://explorer.aptoslabs.com/account/{}?network={}",
            address,
            self.as_str()
        )
    }
}

// =============================================================================
// Site content
// =============================================================================

/// Static content tree consumed by the page sections.
///
/// Optional sections are simply not rendered when absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Collection to mint into. Empty until filled in.
    #[serde(default)]
    pub collection_id: String,
    pub socials: Option<Socials>,
    #[serde(default)]
    pub form_details: FormDetails,
    pub default_collection: Option<DefaultCollection>,
    pub our_story: Option<OurStory>,
    pub our_team: Option<OurTeam>,
    pub faqs: Option<Faqs>,
    pub nft_banner: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Socials {
    pub twitter: Option<String>,
    pub discord: Option<String>,
    pub homepage: Option<String>,
}

impl Socials {
    /// Present links as `(label, url)` pairs, in display order.
    pub fn links(&self) -> Vec<(&'static str, String)> {
        [
            ("Twitter", &self.twitter),
            ("Discord", &self.discord),
            ("Homepage", &self.homepage),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.clone().map(|u| (label, u)))
        .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDetails {
    pub name: String,
    pub description: String,
}

/// Placeholder shown until the collection is fetched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefaultCollection {
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OurStory {
    pub title: String,
    pub sub_title: String,
    pub description: String,
    pub discord_link: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OurTeam {
    pub title: String,
    pub members: Vec<TeamMember>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub desc: String,
    pub img: String,
    pub socials: Option<Socials>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faqs {
    pub title: String,
    pub questions: Vec<FaqEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub title: String,
    pub description: String,
}

impl SiteConfig {
    /// Parse a content tree from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load the embedded content, falling back to an empty tree.
    pub fn load() -> Self {
        match Self::from_json(SITE_CONFIG_JSON) {
            Ok(config) => {
                if config.collection_id.is_empty() {
                    log::warn!("⚠️ No collection id configured - minting is disabled");
                }
                config
            }
            Err(e) => {
                log::error!("❌ Failed to load site config: {}", e);
                Self::default()
            }
        }
    }

    /// Collection id, if one is configured.
    pub fn collection_id(&self) -> Option<&str> {
        Some(self.collection_id.as_str()).filter(|id| !id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_json(SITE_CONFIG_JSON).unwrap();
        assert!(!config.form_details.name.is_empty());
        let team = config.our_team.expect("team section");
        assert_eq!(team.members.len(), 5);
        assert_eq!(config.faqs.map(|f| f.questions.len()), Some(3));
    }

    #[test]
    fn test_optional_sections_may_be_absent() {
        let config = SiteConfig::from_json(r#"{"collectionId": "0x1"}"#).unwrap();
        assert_eq!(config.collection_id(), Some("0x1"));
        assert!(config.our_story.is_none());
        assert!(config.socials.is_none());
        assert_eq!(config.form_details, FormDetails::default());
    }

    #[test]
    fn test_blank_collection_id_is_absent() {
        let config = SiteConfig::from_json(r#"{"collectionId": "  "}"#).unwrap();
        assert_eq!(config.collection_id(), None);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_social_links_skip_missing() {
        let socials = Socials {
            twitter: Some("https://twitter.com".into()),
            discord: None,
            homepage: Some("#".into()),
        };
        let labels: Vec<_> = socials.links().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Twitter", "Homepage"]);
    }

    #[test]
    fn test_network_urls() {
        assert_eq!(Network::from_name("MAINNET"), Network::Mainnet);
        assert_eq!(Network::from_name("somewhere"), Network::Testnet);
        assert_eq!(
            Network::Devnet.fullnode_url(),
            "https://api.devnet.aptoslabs.com/v1"
        );
        assert_eq!(
            Network::Testnet.explorer_account_url("0xabc"),
            "https://explorer.aptoslabs.com/account/0xabc?network=testnet"
        );
    }
}
