//! Catalog API Client
//!
//! One-shot fetch against the remote beer catalog endpoint.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::Beer;

/// Remote catalog endpoint, read once on startup.
pub const BEERS_URL: &str = "https://api.sampleapis.com/beers/ale";

/// Fetch the full beer collection.
///
/// No retry, no timeout: callers log the error and keep an empty list.
pub async fn fetch_beers() -> Result<Vec<Beer>, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let resp_value = JsFuture::from(window.fetch_with_str(BEERS_URL))
        .await
        .map_err(|e| format!("network error: {:?}", e))?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("catalog request failed: HTTP {}", resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("malformed payload: {:?}", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
