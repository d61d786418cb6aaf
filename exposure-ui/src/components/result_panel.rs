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
 */

//! Terminal screen: the captured credentials next to the full context
//! snapshot, re-read from the shared record rather than re-derived.

use yew::prelude::*;

use crate::capture_log::CaptureEntry;
use crate::components::capture_log_list::CaptureLogList;
use crate::context::{CollectedContext, Credentials, EMPTY_FIELD_MARKER};

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub hidden: bool,
    pub context: CollectedContext,
    pub credentials: Option<Credentials>,
    pub log_entries: Vec<CaptureEntry>,
    pub section_ref: NodeRef,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let ctx = &props.context;
    let (email, password) = match &props.credentials {
        Some(credentials) => (credentials.email.as_str(), credentials.password.as_str()),
        None => (EMPTY_FIELD_MARKER, EMPTY_FIELD_MARKER),
    };

    html! {
        <section
            id="result-screen"
            ref={props.section_ref.clone()}
            class={classes!("screen", props.hidden.then_some("hidden"))}
            aria-hidden={props.hidden.to_string()}
        >
            <h1>{ "Here is everything you just handed over" }</h1>

            <h2>{ "Credentials" }</h2>
            <dl class="context-grid">
                { result_row("captured-email", "Email", email) }
                { result_row("captured-password", "Password", password) }
            </dl>

            <h2>{ "Context snapshot" }</h2>
            <dl class="context-grid">
                { result_row("result-ip", "Public IP", &ctx.ip) }
                { result_row("result-location", "Location", &ctx.location) }
                { result_row("result-network", "Network", &ctx.network) }
                { result_row("result-timezone", "Local time", &ctx.timezone_display) }
                { result_row("result-user-agent", "User agent", &ctx.user_agent) }
                { result_row("result-screen", "Screen", &ctx.screen) }
                { result_row("result-languages", "Languages", &ctx.languages) }
                { result_row("result-cores", "CPU cores", &ctx.cores) }
                { result_row("result-dnt", "Do Not Track", &ctx.dnt) }
            </dl>

            <h2>{ "Capture log" }</h2>
            <CaptureLogList entries={props.log_entries.clone()} />

            <p class="disclaimer">
                { "A real phishing page would have forwarded all of this before \
                   you finished reading. This one only shows it to you." }
            </p>
        </section>
    }
}

fn result_row(id: &str, label: &str, value: &str) -> Html {
    html! {
        <>
            <dt>{ label }</dt>
            <dd id={id.to_string()}>{ value }</dd>
        </>
    }
}
