// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for exposure-ui component tests.
//
// Provides mount/cleanup helpers plus runtime-config injection so the
// lookup endpoints can be pointed at a dead local port, forcing the
// fallback path without ever touching the public services.
//
// Each test file that does `mod support;` compiles its own copy, so not
// every function is used in every compilation unit.
#![allow(dead_code)]

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Inject a `window.__APP_CONFIG` whose lookup URLs point at the discard
/// port on localhost.  Both lookups fail fast and the collector falls
/// back to its static substitutes.
pub fn inject_unreachable_lookup_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("ipLookupUrl", &"http://127.0.0.1:9/ip".into());
    set("geoLookupUrl", &"http://127.0.0.1:9/geo".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
