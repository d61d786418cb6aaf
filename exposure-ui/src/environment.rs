/*
 * Ambient environment collection for the exposure demo.
 *
 * Gathers the browser/device attributes that are available from standard
 * Web APIs without any network round-trip.  All raw fields are optional so
 * the page keeps working when an API is missing or denied; the resolvers
 * below turn the raw values into the display strings the panels show.
 */

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::{Navigator, Window};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentSnapshot {
    /// Raw browser user-agent string
    pub user_agent: Option<String>,
    /// Preferred UI languages (`navigator.languages`)
    pub languages: Vec<String>,
    /// Screen width in CSS pixels
    pub screen_width: Option<u32>,
    /// Screen height in CSS pixels
    pub screen_height: Option<u32>,
    /// Device-pixel-ratio (`window.devicePixelRatio`)
    pub pixel_ratio: Option<f64>,
    /// Number of logical CPU cores (`navigator.hardwareConcurrency`)
    pub hardware_concurrency: Option<u32>,
    /// Raw Do-Not-Track signal, first non-empty of the three legacy spellings
    pub do_not_track: Option<String>,
}

/// Collect the attributes that are synchronously available in the browser.
pub fn gather_environment() -> anyhow::Result<EnvironmentSnapshot> {
    let window: Window = web_sys::window().ok_or(anyhow::anyhow!("No window found"))?;
    let navigator: Navigator = window.navigator();

    let mut snapshot = EnvironmentSnapshot::default();

    snapshot.user_agent = navigator.user_agent().ok();

    // Languages – `languages()` via JS reflection, fallback to primary language
    let langs_val = js_sys::Reflect::get(&navigator, &JsValue::from_str("languages")).ok();
    if let Some(val) = langs_val {
        if val.is_object() {
            let arr = js_sys::Array::from(&val);
            snapshot.languages = arr.iter().filter_map(|v| v.as_string()).collect();
        }
    }
    if snapshot.languages.is_empty() {
        if let Some(lang) = navigator.language() {
            snapshot.languages.push(lang);
        }
    }

    if let Ok(screen) = window.screen() {
        snapshot.screen_width = screen.width().ok().and_then(|v| u32::try_from(v).ok());
        snapshot.screen_height = screen.height().ok().and_then(|v| u32::try_from(v).ok());
    }
    snapshot.pixel_ratio = Some(window.device_pixel_ratio());

    let cores = navigator.hardware_concurrency();
    if cores > 0.0 {
        snapshot.hardware_concurrency = Some(cores as u32);
    }

    snapshot.do_not_track = raw_do_not_track(&window, &navigator);

    Ok(snapshot)
}

/// First non-empty of `navigator.doNotTrack`, `window.doNotTrack` and
/// `navigator.msDoNotTrack`.  None of the three is bound in `web_sys`, so
/// they are read through JS reflection.  Old engines report the signal as
/// a number rather than a string.
fn raw_do_not_track(window: &Window, navigator: &Navigator) -> Option<String> {
    let sources: [(&JsValue, &str); 3] = [
        (navigator.as_ref(), "doNotTrack"),
        (window.as_ref(), "doNotTrack"),
        (navigator.as_ref(), "msDoNotTrack"),
    ];
    for (target, key) in sources {
        if let Ok(value) = js_sys::Reflect::get(target, &JsValue::from_str(key)) {
            let text = value
                .as_string()
                .or_else(|| value.as_f64().map(|n| n.to_string()));
            if let Some(text) = text {
                if !text.trim().is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

/// Join the non-empty entries of the language-preference list with ", ".
pub fn resolve_languages(languages: &[String]) -> Option<String> {
    let joined = languages
        .iter()
        .filter(|l| !l.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// "{width}×{height}", plus " @ {ratio}x" when a reported pixel ratio
/// differs from the default 1.0 after one-decimal rounding.
pub fn resolve_screen(width: Option<u32>, height: Option<u32>, pixel_ratio: Option<f64>) -> String {
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
        _ => return "Unavailable".to_string(),
    };
    let mut formatted = format!("{width}×{height}");
    if let Some(ratio) = pixel_ratio {
        if ratio > 0.0 && format!("{ratio:.1}") != "1.0" {
            formatted.push_str(&format!(" @ {ratio:.1}x"));
        }
    }
    formatted
}

/// Normalize the raw Do-Not-Track signal to its three-valued display string.
pub fn resolve_do_not_track(raw: Option<&str>) -> &'static str {
    let normalized = match raw {
        Some(raw) => raw.trim().to_lowercase(),
        None => return "Not shared",
    };
    match normalized.as_str() {
        "1" | "yes" => "Enabled",
        "0" | "no" => "Disabled",
        _ => "Not shared",
    }
}

/// Positive core counts only; a zero report means the API is absent.
pub fn resolve_cores(cores: Option<u32>) -> Option<String> {
    cores.filter(|c| *c > 0).map(|c| c.to_string())
}
