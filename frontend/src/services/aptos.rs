//! Aptos fullnode and indexer client.
//!
//! Reads collection data (indexer GraphQL + `launchpad` view functions) and
//! waits for submitted transactions to commit.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::{Network, MODULE_ADDRESS, TX_POLL_INTERVAL_MS};
use crate::mint::TransactionWaiter;
use crate::types::{AppError, AppResult, Collection, CollectionData};

/// Stage windows ending after this year are treated as never ending.
const INFINITE_MINT_YEAR: i32 = 2100;

const COLLECTION_QUERY: &str = r#"
query CollectionData($collection_id: String) {
  current_collections_v2(where: { collection_id: { _eq: $collection_id } }, limit: 1) {
    collection_id
    collection_name
    description
    uri
    current_supply
    max_supply
    total_minted_v2
  }
}"#;

#[derive(Serialize)]
struct ViewRequest<'a> {
    function: String,
    type_arguments: Vec<String>,
    arguments: Vec<&'a str>,
}

/// Collection row from the indexer with its supply counters.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedCollection {
    pub collection: Collection,
    pub total_minted: u64,
    pub max_supply: u64,
}

/// Start/end of a mint stage.
#[derive(Clone, Debug, PartialEq)]
pub struct StageWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub infinite: bool,
}

/// Confirmation state of a submitted transaction.
#[derive(Clone, Debug, PartialEq)]
pub enum TransactionStatus {
    Pending,
    Committed,
    Failed(String),
}

/// Client bound to one network and one `launchpad` module.
#[derive(Clone, Debug)]
pub struct AptosClient {
    fullnode_url: String,
    indexer_url: String,
    module_address: String,
}

impl Default for AptosClient {
    fn default() -> Self {
        Self::new(Network::current(), MODULE_ADDRESS)
    }
}

impl AptosClient {
    pub fn new(network: Network, module_address: &str) -> Self {
        Self {
            fullnode_url: network.fullnode_url(),
            indexer_url: network.indexer_url(),
            module_address: module_address.to_string(),
        }
    }

    /// Everything the mint page shows about `collection_id`.
    ///
    /// A collection unknown to the indexer yields empty data, not an error.
    pub async fn get_collection_data(&self, collection_id: &str) -> AppResult<CollectionData> {
        log::debug!("🔍 Fetching collection {}", collection_id);

        let Some(indexed) = self.query_collection(collection_id).await? else {
            log::warn!("⚠️ Collection {} not found on indexer", collection_id);
            return Ok(CollectionData::default());
        };

        let mut data = CollectionData {
            collection: Some(indexed.collection),
            total_minted: Some(indexed.total_minted),
            max_supply: Some(indexed.max_supply),
            ..Default::default()
        };

        let stage = self
            .view("get_active_or_next_mint_stage", &[collection_id])
            .await
            .map(|values| parse_mint_stage(&values))?;

        if let Some(stage) = stage {
            let values = self
                .view("get_mint_stage_start_and_end_time", &[collection_id, stage.as_str()])
                .await?;
            let window = parse_stage_window(&values)?;
            log::debug!("🗓️ Stage '{}': {} -> {}", stage, window.start, window.end);
            data.start_date = Some(window.start);
            data.end_date = Some(window.end);
            data.is_mint_infinite = Some(window.infinite);
        }

        Ok(data)
    }

    async fn query_collection(&self, collection_id: &str) -> AppResult<Option<IndexedCollection>> {
        let body = json!({
            "query": COLLECTION_QUERY,
            "variables": { "collection_id": collection_id },
        });

        let response = Request::post(&self.indexer_url).json(&body)?.send().await?;
        if !response.ok() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Indexer(format!(
                "Indexer error ({}): {}",
                response.status(),
                error_text
            )));
        }

        let value: Value = response.json().await?;
        parse_collection_response(&value)
    }

    /// Call a `launchpad` view function.
    async fn view(&self, function: &str, arguments: &[&str]) -> AppResult<Vec<Value>> {
        let request = ViewRequest {
            function: format!("{}::launchpad::{}", self.module_address, function),
            type_arguments: Vec::new(),
            arguments: arguments.to_vec(),
        };
        let url = format!("{}/view", self.fullnode_url);

        let response = Request::post(&url).json(&request)?.send().await?;
        if !response.ok() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Indexer(format!(
                "View {} failed ({}): {}",
                function,
                response.status(),
                error_text
            )));
        }

        Ok(response.json::<Vec<Value>>().await?)
    }

    async fn transaction_status(&self, hash: &str) -> AppResult<TransactionStatus> {
        let url = format!("{}/transactions/wait_by_hash/{}", self.fullnode_url, hash);
        let response = Request::get(&url).send().await?;

        // Not yet visible to this fullnode
        if response.status() == 404 {
            return Ok(TransactionStatus::Pending);
        }
        if !response.ok() {
            return Err(AppError::Network(format!(
                "Fullnode error ({}) while waiting for {}",
                response.status(),
                hash
            )));
        }

        let value: Value = response.json().await?;
        Ok(parse_transaction_status(&value))
    }
}

impl TransactionWaiter for AptosClient {
    /// Poll until the transaction leaves the mempool. No timeout.
    async fn wait_for_transaction(&self, hash: &str) -> AppResult<()> {
        loop {
            match self.transaction_status(hash).await? {
                TransactionStatus::Committed => return Ok(()),
                TransactionStatus::Failed(vm_status) => {
                    log::error!("❌ Transaction {} failed: {}", hash, vm_status);
                    return Err(AppError::Transaction(vm_status));
                }
                TransactionStatus::Pending => TimeoutFuture::new(TX_POLL_INTERVAL_MS).await,
            }
        }
    }
}

// =============================================================================
// Response parsing
// =============================================================================

/// Numeric columns come back as numbers or strings depending on the column type.
fn as_u64(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

/// Parse the indexer response to [`COLLECTION_QUERY`].
pub fn parse_collection_response(value: &Value) -> AppResult<Option<IndexedCollection>> {
    if let Some(message) = value
        .get("errors")
        .and_then(|e| e.get(0))
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return Err(AppError::Indexer(message.to_string()));
    }

    let rows = value
        .pointer("/data/current_collections_v2")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Indexer("Missing current_collections_v2 in response".to_string()))?;

    let Some(row) = rows.first() else {
        return Ok(None);
    };

    let collection: Collection = serde_json::from_value(row.clone())?;
    let total_minted = row
        .get("total_minted_v2")
        .and_then(as_u64)
        .or_else(|| row.get("current_supply").and_then(as_u64))
        .unwrap_or(0);
    let max_supply = row.get("max_supply").and_then(as_u64).unwrap_or(1);

    Ok(Some(IndexedCollection {
        collection,
        total_minted,
        max_supply,
    }))
}

/// `Option<String>` as returned by `get_active_or_next_mint_stage`.
pub fn parse_mint_stage(values: &[Value]) -> Option<String> {
    values
        .first()?
        .get("vec")?
        .get(0)?
        .as_str()
        .map(str::to_string)
}

/// `(u64, u64)` seconds as returned by `get_mint_stage_start_and_end_time`.
pub fn parse_stage_window(values: &[Value]) -> AppResult<StageWindow> {
    let seconds = |idx: usize| -> AppResult<DateTime<Utc>> {
        let secs = values
            .get(idx)
            .and_then(as_u64)
            .ok_or_else(|| AppError::Indexer(format!("Missing stage time at index {}", idx)))?;
        i64::try_from(secs)
            .ok()
            .and_then(|s| Utc.timestamp_opt(s, 0).single())
            .ok_or_else(|| AppError::Indexer(format!("Stage time out of range: {}", secs)))
    };

    let start = seconds(0)?;
    let end = seconds(1)?;
    Ok(StageWindow {
        start,
        end,
        infinite: end.year() > INFINITE_MINT_YEAR,
    })
}

/// Classify a transaction returned by the fullnode.
pub fn parse_transaction_status(value: &Value) -> TransactionStatus {
    if value.get("type").and_then(Value::as_str) == Some("pending_transaction") {
        return TransactionStatus::Pending;
    }
    match value.get("success").and_then(Value::as_bool) {
        Some(true) => TransactionStatus::Committed,
        Some(false) => TransactionStatus::Failed(
            value
                .get("vm_status")
                .and_then(Value::as_str)
                .unwrap_or("Unknown VM status")
                .to_string(),
        ),
        None => TransactionStatus::Pending,
    }
}
