// SPDX-License-Identifier: MIT OR Apache-2.0

//! Timezone selection and display formatting.
//!
//! The geolocation lookup may name a zone; otherwise the runtime's own
//! resolved zone is used.  Formatting goes through a Reflect-constructed
//! `Intl.DateTimeFormat` so that an invalid zone name coming off the wire
//! surfaces as a catchable error instead of an uncaught throw.

use wasm_bindgen::{JsCast, JsValue};

/// Preference order for the display zone: lookup response first, then the
/// runtime's resolved zone.
pub fn select_zone(geo: Option<&str>, local: Option<&str>) -> Option<String> {
    geo.filter(|z| !z.trim().is_empty())
        .or(local.filter(|z| !z.trim().is_empty()))
        .map(|z| z.to_string())
}

/// The zone the runtime itself resolves for the visitor.
pub fn local_zone() -> Option<String> {
    let formatter =
        js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    let options = formatter.resolved_options();
    js_sys::Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|z| !z.is_empty())
}

/// Current wall-clock time in `zone`, formatted "HH:MM".
pub fn clock_in_zone(zone: &str) -> Result<String, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("timeZone"),
        &JsValue::from_str(zone),
    )?;
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("hour"),
        &JsValue::from_str("2-digit"),
    )?;
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("minute"),
        &JsValue::from_str("2-digit"),
    )?;

    // Constructed through Reflect so a bogus zone becomes an Err.
    let intl = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Intl"))?;
    let ctor = js_sys::Reflect::get(&intl, &JsValue::from_str("DateTimeFormat"))?
        .dyn_into::<js_sys::Function>()?;
    let args = js_sys::Array::of2(&js_sys::Array::new(), &options);
    let formatter = js_sys::Reflect::construct(&ctor, &args)?;

    let format = js_sys::Reflect::get(&formatter, &JsValue::from_str("format"))?
        .dyn_into::<js_sys::Function>()?;
    let formatted = format.call1(&formatter, &js_sys::Date::new_0())?;
    formatted
        .as_string()
        .ok_or_else(|| JsValue::from_str("formatter returned a non-string"))
}

/// "HH:MM (Zone)", degrading to the bare zone name when formatting fails.
pub fn display_for_zone(zone: &str) -> String {
    match clock_in_zone(zone) {
        Ok(clock) => format!("{clock} ({zone})"),
        Err(e) => {
            log::warn!("Unable to format time for zone {zone}: {e:?}");
            zone.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_selection_prefers_the_lookup_then_the_runtime() {
        assert_eq!(
            select_zone(Some("Europe/Berlin"), Some("America/Denver")),
            Some("Europe/Berlin".to_string())
        );
        assert_eq!(
            select_zone(None, Some("America/Denver")),
            Some("America/Denver".to_string())
        );
        assert_eq!(
            select_zone(Some(""), Some("America/Denver")),
            Some("America/Denver".to_string())
        );
        assert_eq!(select_zone(Some("  "), Some("")), None);
        assert_eq!(select_zone(None, None), None);
    }
}
