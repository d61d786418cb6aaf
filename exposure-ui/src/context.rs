// SPDX-License-Identifier: MIT OR Apache-2.0

//! The shared record every display target reads from.
//!
//! One `CollectedContext` is created at load from the ambient environment,
//! owned by the root component, and mutated in place as the asynchronous
//! collection steps resolve.  There is exactly one writer (the UI thread);
//! panels receive clones and re-render whenever it changes.

use serde::{Deserialize, Serialize};

use crate::environment::{self, EnvironmentSnapshot};

/// Static substitute shown whenever a value cannot be determined.
pub const UNAVAILABLE: &str = "Unavailable";

/// Literal placeholder displayed in place of a blank form field.
pub const EMPTY_FIELD_MARKER: &str = "(empty)";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CollectedContext {
    pub ip: String,
    pub location: String,
    pub network: String,
    pub timezone: String,
    pub timezone_display: String,
    pub user_agent: String,
    pub screen: String,
    pub languages: String,
    pub cores: String,
    pub dnt: String,
}

impl Default for CollectedContext {
    fn default() -> Self {
        Self {
            ip: UNAVAILABLE.to_string(),
            location: UNAVAILABLE.to_string(),
            network: UNAVAILABLE.to_string(),
            timezone: UNAVAILABLE.to_string(),
            timezone_display: UNAVAILABLE.to_string(),
            user_agent: UNAVAILABLE.to_string(),
            screen: UNAVAILABLE.to_string(),
            languages: UNAVAILABLE.to_string(),
            cores: UNAVAILABLE.to_string(),
            dnt: "Not shared".to_string(),
        }
    }
}

impl CollectedContext {
    /// Seed the record with everything that needs no network access.  The
    /// network-derived fields keep their fallback value until collection
    /// resolves them.
    pub fn from_environment(snapshot: &EnvironmentSnapshot) -> Self {
        Self {
            user_agent: snapshot
                .user_agent
                .clone()
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            screen: environment::resolve_screen(
                snapshot.screen_width,
                snapshot.screen_height,
                snapshot.pixel_ratio,
            ),
            languages: environment::resolve_languages(&snapshot.languages)
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            cores: environment::resolve_cores(snapshot.hardware_concurrency)
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            dnt: environment::resolve_do_not_track(snapshot.do_not_track.as_deref()).to_string(),
            ..Self::default()
        }
    }
}

/// Compose "city, region, country" from whatever pieces the lookup
/// returned, dropping the blanks.
pub fn compose_location(city: Option<&str>, region: Option<&str>, country: Option<&str>) -> String {
    let pieces: Vec<&str> = [city, region, country]
        .into_iter()
        .flatten()
        .filter(|p| !p.trim().is_empty())
        .collect();
    if pieces.is_empty() {
        UNAVAILABLE.to_string()
    } else {
        pieces.join(", ")
    }
}

/// The two form fields, captured verbatim at submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// No validation and no transformation, blank fields excepted: those
    /// become the literal placeholder so the result screen never renders
    /// an empty cell.
    pub fn captured(email: String, password: String) -> Self {
        Self {
            email: or_empty_marker(email),
            password: or_empty_marker(password),
        }
    }
}

fn or_empty_marker(value: String) -> String {
    if value.is_empty() {
        EMPTY_FIELD_MARKER.to_string()
    } else {
        value
    }
}
