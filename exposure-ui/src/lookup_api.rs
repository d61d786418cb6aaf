/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Clients for the two public lookup services the collector calls.
//!
//! Both requests are unauthenticated GETs with cache-bypass semantics.
//! Every failure mode collapses into one class, "lookup unavailable":
//! callers substitute the response type's `Default` value, which doubles
//! as the static fallback object.

use reqwasm::http::Request;
use serde::Deserialize;
use web_sys::RequestCache;

use crate::constants;
use crate::context::UNAVAILABLE;

#[derive(Debug, Clone)]
pub enum LookupError {
    Network(String),
    Status(u16),
    Parse(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Network(e) => write!(f, "Network error: {e}"),
            LookupError::Status(code) => write!(f, "Request failed with status {code}"),
            LookupError::Parse(e) => write!(f, "Malformed response body: {e}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IpLookupResponse {
    pub ip: String,
}

impl Default for IpLookupResponse {
    fn default() -> Self {
        Self {
            ip: UNAVAILABLE.to_string(),
        }
    }
}

/// Body of the geolocation/ISP lookup.  Every field is optional so a
/// partial response still deserializes; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeoLookupResponse {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_name: Option<String>,
    pub org: Option<String>,
    pub timezone: Option<String>,
}

impl Default for GeoLookupResponse {
    fn default() -> Self {
        Self {
            city: Some("Unknown city".to_string()),
            region: None,
            country_name: Some("Unknown country".to_string()),
            org: Some("Unknown provider".to_string()),
            timezone: None,
        }
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, LookupError> {
    let response = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| LookupError::Network(format!("{e}")))?;

    if !response.ok() {
        return Err(LookupError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| LookupError::Parse(format!("{e}")))
}

/// The caller's public address as a third party sees it.
pub async fn fetch_public_ip() -> Result<IpLookupResponse, LookupError> {
    fetch_json(&constants::ip_lookup_url()).await
}

/// Coarse geolocation and ISP, keyed implicitly by caller address.  Never
/// started before the IP lookup has resolved.
pub async fn fetch_geolocation() -> Result<GeoLookupResponse, LookupError> {
    fetch_json(&constants::geo_lookup_url()).await
}
