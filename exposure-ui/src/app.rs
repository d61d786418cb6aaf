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

//! Root component: owns the collected context, the capture log and the
//! stage machine, and runs the two-step collection task.
//!
//! All three screens stay mounted; visibility is a `hidden` class plus an
//! `aria-hidden` attribute kept in lock-step, so every display target
//! updates idempotently on re-render regardless of which screen is shown.

use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::capture_log::{self, CaptureLog, LogSegment};
use crate::components::collection_panel::CollectionPanel;
use crate::components::consent_panel::ConsentPanel;
use crate::components::footer::PageFooter;
use crate::components::result_panel::ResultPanel;
use crate::context::{self, CollectedContext, Credentials};
use crate::environment;
use crate::lookup_api::{self, GeoLookupResponse, IpLookupResponse};
use crate::stage::{CollectionStatus, Stage};
use crate::timezone;

pub enum Msg {
    ConsentGranted,
    IpResolved(IpLookupResponse),
    GeoResolved(GeoLookupResponse),
    CollectionFinished,
    CredentialsSubmitted(Credentials),
}

pub struct App {
    stage: Stage,
    context: CollectedContext,
    capture_log: CaptureLog,
    collection: CollectionStatus,
    credentials: Option<Credentials>,
    /// Submission that arrived while collection was still pending; flushed
    /// on `CollectionFinished` so the result screen never shows defaults.
    pending_credentials: Option<Credentials>,
    result_section: NodeRef,
    scroll_pending: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let context = match environment::gather_environment() {
            Ok(snapshot) => CollectedContext::from_environment(&snapshot),
            Err(e) => {
                log::error!("Failed to read ambient environment: {e}");
                CollectedContext::default()
            }
        };
        Self {
            stage: Stage::Consent,
            context,
            capture_log: CaptureLog::new(),
            collection: CollectionStatus::default(),
            credentials: None,
            pending_credentials: None,
            result_section: NodeRef::default(),
            scroll_pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConsentGranted => {
                if !self.stage.permits(Stage::Collection) {
                    return false;
                }
                self.stage = Stage::Collection;
                self.start_collection(ctx);
                true
            }
            Msg::IpResolved(response) => {
                self.context.ip = if response.ip.is_empty() {
                    context::UNAVAILABLE.to_string()
                } else {
                    response.ip
                };
                self.record(capture_log::message(
                    "Network request exposed public IP ",
                    &self.context.ip,
                    ".",
                ));
                true
            }
            Msg::GeoResolved(response) => {
                self.apply_geolocation(response);
                true
            }
            Msg::CollectionFinished => {
                self.collection = CollectionStatus::Complete;
                self.record(capture_log::plain_message(
                    "Device fingerprint assembled (screen, languages, cores, DNT).",
                ));
                if let Some(credentials) = self.pending_credentials.take() {
                    self.publish_result(credentials);
                }
                true
            }
            Msg::CredentialsSubmitted(credentials) => {
                self.record(capture_log::message(
                    "Credentials harvested for ",
                    &credentials.email,
                    ".",
                ));
                match self.collection {
                    CollectionStatus::Complete => self.publish_result(credentials),
                    CollectionStatus::InFlight => self.pending_credentials = Some(credentials),
                    CollectionStatus::NotStarted => {
                        // Consent was skipped; run a full collection pass
                        // before revealing the result screen.
                        self.pending_credentials = Some(credentials);
                        self.start_collection(ctx);
                    }
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.scroll_pending {
            self.scroll_pending = false;
            if let Some(section) = self.result_section.cast::<web_sys::Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_consent = ctx.link().callback(|_: MouseEvent| Msg::ConsentGranted);
        let on_submit = ctx.link().callback(Msg::CredentialsSubmitted);
        let log_entries: Vec<_> = self.capture_log.entries().cloned().collect();

        html! {
            <div class="page">
                <main>
                    <ConsentPanel hidden={self.stage != Stage::Consent} {on_consent} />
                    <CollectionPanel
                        hidden={self.stage != Stage::Collection}
                        context={self.context.clone()}
                        log_entries={log_entries.clone()}
                        {on_submit}
                    />
                    <ResultPanel
                        hidden={self.stage != Stage::Result}
                        context={self.context.clone()}
                        credentials={self.credentials.clone()}
                        log_entries={log_entries}
                        section_ref={self.result_section.clone()}
                    />
                </main>
                <PageFooter />
            </div>
        }
    }
}

impl App {
    fn start_collection(&mut self, ctx: &Context<Self>) {
        if self.collection != CollectionStatus::NotStarted {
            return;
        }
        self.collection = CollectionStatus::InFlight;
        let link = ctx.link().clone();
        spawn_local(async move {
            // Strictly sequential: the geolocation call does not start
            // until the IP lookup has resolved.  Each step falls back on
            // its own, so one dead service never aborts the pass.
            let ip = lookup_api::fetch_public_ip().await.unwrap_or_else(|e| {
                log::warn!("Public IP lookup failed: {e}");
                IpLookupResponse::default()
            });
            link.send_message(Msg::IpResolved(ip));

            let geo = lookup_api::fetch_geolocation().await.unwrap_or_else(|e| {
                log::warn!("Geolocation lookup failed: {e}");
                GeoLookupResponse::default()
            });
            link.send_message(Msg::GeoResolved(geo));

            link.send_message(Msg::CollectionFinished);
        });
    }

    fn apply_geolocation(&mut self, response: GeoLookupResponse) {
        self.context.location = context::compose_location(
            response.city.as_deref(),
            response.region.as_deref(),
            response.country_name.as_deref(),
        );
        self.record(capture_log::message(
            "Approximate location mapped to ",
            &self.context.location,
            ".",
        ));

        self.context.network = response
            .org
            .filter(|org| !org.is_empty())
            .unwrap_or_else(|| context::UNAVAILABLE.to_string());
        self.record(capture_log::message(
            "ISP / network provider identified as ",
            &self.context.network,
            ".",
        ));

        match timezone::select_zone(response.timezone.as_deref(), timezone::local_zone().as_deref())
        {
            Some(zone) => {
                self.context.timezone_display = timezone::display_for_zone(&zone);
                self.context.timezone = zone;
            }
            None => {
                self.context.timezone = context::UNAVAILABLE.to_string();
                self.context.timezone_display = context::UNAVAILABLE.to_string();
            }
        }
        self.record(capture_log::message(
            "Local time calculated as ",
            &self.context.timezone_display,
            ".",
        ));
    }

    fn publish_result(&mut self, credentials: Credentials) {
        if !self.stage.permits(Stage::Result) {
            return;
        }
        self.credentials = Some(credentials);
        self.stage = Stage::Result;
        self.scroll_pending = true;
        self.record(capture_log::plain_message(
            "Capture bundle staged for hand-off to a collection endpoint (simulated, nothing is sent).",
        ));
    }

    fn record(&mut self, segments: Vec<LogSegment>) {
        self.capture_log.record(capture_log::clock_now(), segments);
    }
}
