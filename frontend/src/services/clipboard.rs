//! Clipboard access through `navigator.clipboard`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::services::wallet::js_error_message;
use crate::types::{AppError, AppResult};

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Clipboard("No window".to_string()))?;
    let navigator = window.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null())
        .ok_or_else(|| AppError::Clipboard("Clipboard API unavailable".to_string()))?;

    let write_text: js_sys::Function = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into().ok())
        .ok_or_else(|| AppError::Clipboard("writeText is not a function".to_string()))?;

    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| AppError::Clipboard("writeText did not return a promise".to_string()))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?;

    log::debug!("📋 Copied {} to clipboard", text);
    Ok(())
}
