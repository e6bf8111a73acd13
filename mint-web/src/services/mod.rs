//! Browser-side implementations of the contract service traits
//!
//! - [`wallet`] - Injected EIP-1193 wallet (`window.ethereum`)
//! - [`drop`] - NFT drop reads and claims through the contract SDK
//! - [`share`] - Image-transform endpoint over HTTP

pub mod drop;
pub mod share;
pub mod wallet;

use wasm_bindgen::JsValue;

/// Best-effort message of a value thrown by JavaScript.
///
/// Thrown values are usually `Error` objects, sometimes plain strings.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
