//! Injected Aptos wallet (Petra, and extensions exposing `window.aptos`).

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::mint::{InputTransactionData, PendingTransaction, TransactionSigner};
use crate::types::{AppError, AppResult, WalletInfo};

/// Extract a readable message from a rejected JS promise.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}

fn string_field(obj: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

/// Rust side of the browser wallet.
pub struct AptosWallet;

impl AptosWallet {
    /// Whether an Aptos wallet extension is injected.
    pub fn is_available() -> bool {
        let available = is_wallet_available();
        if available {
            log::info!("✅ Aptos wallet detected");
        } else {
            log::warn!("⚠️ No Aptos wallet found");
        }
        available
    }

    /// Ask the extension for access and return the active account.
    pub async fn connect() -> AppResult<WalletInfo> {
        if !Self::is_available() {
            return Err(AppError::Wallet(
                "No Aptos wallet found. Please install Petra or a compatible extension.".to_string(),
            ));
        }

        log::info!("🔌 Connecting to wallet...");

        let result = JsFuture::from(connect_wallet())
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to connect wallet: {}", js_error_message(&e))))?;

        let address = string_field(&result, "address")
            .ok_or_else(|| AppError::Wallet("Address is not a string".to_string()))?;
        let public_key = string_field(&result, "publicKey");

        log::info!("✅ Connected to wallet: {}", address);

        Ok(WalletInfo { address, public_key })
    }

    pub async fn disconnect() -> AppResult<()> {
        JsFuture::from(disconnect_wallet())
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to disconnect: {}", js_error_message(&e))))?;
        log::info!("👋 Wallet disconnected");
        Ok(())
    }
}

impl TransactionSigner for AptosWallet {
    async fn sign_and_submit(&self, tx: &InputTransactionData) -> AppResult<PendingTransaction> {
        // Plain objects and numbers, not ES Maps or BigInts
        let payload = tx.serialize(&Serializer::json_compatible())?;

        let js_result = JsFuture::from(sign_and_submit_transaction(payload))
            .await
            .map_err(|e| AppError::Wallet(js_error_message(&e)))?;

        let result: JsSubmitResult = serde_wasm_bindgen::from_value(js_result)
            .map_err(|e| AppError::Wallet(format!("Failed to parse wallet result: {}", e)))?;

        log::info!("📤 Transaction submitted: {}", result.hash);
        Ok(PendingTransaction { hash: result.hash })
    }
}

/// JavaScript result of `signAndSubmitTransaction`
#[derive(Debug, Clone, Deserialize)]
struct JsSubmitResult {
    hash: String,
}

/// JavaScript functions from wallet.js
#[wasm_bindgen(module = "/src/js/wallet.js")]
extern "C" {
    #[wasm_bindgen(js_name = "isWalletAvailable")]
    fn is_wallet_available() -> bool;

    #[wasm_bindgen(js_name = "connectWallet")]
    fn connect_wallet() -> js_sys::Promise;

    #[wasm_bindgen(js_name = "disconnectWallet")]
    fn disconnect_wallet() -> js_sys::Promise;

    #[wasm_bindgen(js_name = "signAndSubmitTransaction")]
    fn sign_and_submit_transaction(payload: JsValue) -> js_sys::Promise;
}
