// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compile-time defaults and runtime configuration.
//!
//! The lookup endpoints default to public services but can be overridden
//! through a `window.__APP_CONFIG` object injected ahead of the bundle.
//! The integration tests use that hook to point the collector at a dead
//! host instead of the real services.

use wasm_bindgen::JsValue;

pub const DEFAULT_IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";
pub const DEFAULT_GEO_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Upper bound on rendered capture-log entries, newest first.
pub const MAX_CAPTURE_LOG_ENTRIES: usize = 6;

const APP_CONFIG_KEY: &str = "__APP_CONFIG";

fn config_override(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str(APP_CONFIG_KEY)).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    let value = js_sys::Reflect::get(&config, &JsValue::from_str(key)).ok()?;
    value.as_string().filter(|s| !s.is_empty())
}

/// Endpoint for the public-IP lookup (first collection step).
pub fn ip_lookup_url() -> String {
    config_override("ipLookupUrl").unwrap_or_else(|| DEFAULT_IP_LOOKUP_URL.to_string())
}

/// Endpoint for the geolocation/ISP lookup (second collection step).
pub fn geo_lookup_url() -> String {
    config_override("geoLookupUrl").unwrap_or_else(|| DEFAULT_GEO_LOOKUP_URL.to_string())
}
