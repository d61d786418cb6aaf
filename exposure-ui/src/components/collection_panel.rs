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

//! Collection screen: the live context read-out, the credential form and
//! the capture log.  Field values arrive through props, so the panel shows
//! whatever defaults are current until collection completes.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::capture_log::CaptureEntry;
use crate::components::capture_log_list::CaptureLogList;
use crate::context::{CollectedContext, Credentials};

#[derive(Properties, PartialEq)]
pub struct CollectionPanelProps {
    pub hidden: bool,
    pub context: CollectedContext,
    pub log_entries: Vec<CaptureEntry>,
    pub on_submit: Callback<Credentials>,
}

#[function_component(CollectionPanel)]
pub fn collection_panel(props: &CollectionPanelProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            on_submit.emit(Credentials::captured(email, password));
        })
    };

    let ctx = &props.context;
    html! {
        <section
            id="collection-screen"
            class={classes!("screen", props.hidden.then_some("hidden"))}
            aria-hidden={props.hidden.to_string()}
        >
            <h1>{ "What this page already knows" }</h1>
            <dl class="context-grid">
                { context_row("ip-address", "Public IP", &ctx.ip) }
                { context_row("location", "Location", &ctx.location) }
                { context_row("network", "Network", &ctx.network) }
                { context_row("timezone", "Local time", &ctx.timezone_display) }
                { context_row("user-agent", "User agent", &ctx.user_agent) }
                { context_row("screen", "Screen", &ctx.screen) }
                { context_row("languages", "Languages", &ctx.languages) }
                { context_row("cores", "CPU cores", &ctx.cores) }
                { context_row("dnt", "Do Not Track", &ctx.dnt) }
            </dl>

            <form id="credential-form" {onsubmit}>
                <h2>{ "Now try the part attackers actually want" }</h2>
                <label for="email">{ "Email" }</label>
                <input id="email" name="email" type="text" autocomplete="off" ref={email_ref} />
                <label for="password">{ "Password" }</label>
                <input id="password" name="password" type="password" autocomplete="off" ref={password_ref} />
                <button type="submit">{ "Sign in" }</button>
            </form>

            <h2>{ "Capture log" }</h2>
            <CaptureLogList entries={props.log_entries.clone()} />
        </section>
    }
}

fn context_row(id: &str, label: &str, value: &str) -> Html {
    html! {
        <>
            <dt>{ label }</dt>
            <dd id={id.to_string()}>{ value }</dd>
        </>
    }
}
