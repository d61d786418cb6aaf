// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the staged consent → collection → result flow.
//
// The lookup endpoints are redirected at a dead local port, so both
// network steps exercise their fallback path and the tests stay
// deterministic offline.  Rather than asserting on every DOM node, each
// test checks the landmarks a human would glance at: which screen is
// visible, and what the display targets say.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, inject_unreachable_lookup_config, remove_app_config};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::platform::time::sleep;

use exposure_ui::app::App;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const CONTEXT_TARGETS: [&str; 9] = [
    "#ip-address",
    "#location",
    "#network",
    "#timezone",
    "#user-agent",
    "#screen",
    "#languages",
    "#cores",
    "#dnt",
];

fn query(mount: &web_sys::Element, selector: &str) -> web_sys::Element {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing element: {selector}"))
}

fn text_of(mount: &web_sys::Element, selector: &str) -> String {
    query(mount, selector).text_content().unwrap_or_default()
}

fn aria_hidden(mount: &web_sys::Element, selector: &str) -> String {
    query(mount, selector)
        .get_attribute("aria-hidden")
        .unwrap_or_default()
}

fn click(mount: &web_sys::Element, selector: &str) {
    query(mount, selector).unchecked_into::<HtmlElement>().click();
}

/// Wait for the failed lookups to resolve and the fallback values to land.
async fn settle() {
    sleep(Duration::from_millis(500)).await;
}

#[wasm_bindgen_test]
async fn consent_is_the_only_visible_screen_on_load() {
    inject_unreachable_lookup_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(aria_hidden(&mount, "#consent-screen"), "false");
    assert_eq!(aria_hidden(&mount, "#collection-screen"), "true");
    assert_eq!(aria_hidden(&mount, "#result-screen"), "true");

    // The log shows its placeholder until something is captured.
    let log = text_of(&mount, "#collection-screen .capture-log");
    assert!(log.contains("Nothing captured yet"));

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn consent_click_reveals_collection_and_survives_failed_lookups() {
    inject_unreachable_lookup_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, "#consent-button");
    sleep(Duration::ZERO).await;

    // The screen flips before any data arrives.
    assert_eq!(aria_hidden(&mount, "#collection-screen"), "false");
    assert_eq!(aria_hidden(&mount, "#consent-screen"), "true");

    settle().await;

    // The IP lookup failed, so the display target carries the fallback
    // and the flow still ran through the geolocation step.
    assert_eq!(text_of(&mount, "#ip-address"), "Unavailable");
    let location = text_of(&mount, "#location");
    assert!(
        location.contains("Unknown city"),
        "geolocation fallback expected, got: {location}"
    );
    assert_eq!(text_of(&mount, "#network"), "Unknown provider");

    // Every display target renders something.
    for selector in CONTEXT_TARGETS {
        assert!(
            !text_of(&mount, selector).is_empty(),
            "{selector} should never render empty"
        );
    }

    // The collection steps were logged, newest first, within the bound.
    let entries = mount
        .query_selector_all("#collection-screen .capture-log li")
        .unwrap();
    assert!(entries.length() >= 4);
    assert!(entries.length() <= 6);
    let newest = entries
        .item(0)
        .and_then(|n| n.text_content())
        .unwrap_or_default();
    assert!(
        newest.contains("fingerprint assembled"),
        "unexpected newest entry: {newest}"
    );

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn submission_is_gated_on_collection_and_reveals_the_result() {
    inject_unreachable_lookup_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, "#consent-button");
    sleep(Duration::ZERO).await;

    query(&mount, "#email")
        .unchecked_into::<HtmlInputElement>()
        .set_value("visitor@example.com");
    query(&mount, "#password")
        .unchecked_into::<HtmlInputElement>()
        .set_value("hunter2");

    // Submit right away; the lookups may still be in flight, in which
    // case the submission is parked until collection completes.
    click(&mount, "#credential-form button[type='submit']");
    settle().await;

    assert_eq!(aria_hidden(&mount, "#result-screen"), "false");
    assert_eq!(aria_hidden(&mount, "#collection-screen"), "true");

    assert_eq!(text_of(&mount, "#captured-email"), "visitor@example.com");
    assert_eq!(text_of(&mount, "#captured-password"), "hunter2");

    // The snapshot mirrors the shared record, fallbacks included.
    assert_eq!(text_of(&mount, "#result-ip"), "Unavailable");
    assert!(!text_of(&mount, "#result-user-agent").is_empty());
    assert!(text_of(&mount, "#result-location").contains("Unknown city"));

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn blank_fields_are_captured_as_the_placeholder() {
    inject_unreachable_lookup_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, "#consent-button");
    settle().await;

    click(&mount, "#credential-form button[type='submit']");
    settle().await;

    assert_eq!(aria_hidden(&mount, "#result-screen"), "false");
    assert_eq!(text_of(&mount, "#captured-email"), "(empty)");
    assert_eq!(text_of(&mount, "#captured-password"), "(empty)");

    cleanup(&mount);
    remove_app_config();
}
