// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opening screen: nothing is gathered until the visitor opts in.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConsentPanelProps {
    pub hidden: bool,
    pub on_consent: Callback<MouseEvent>,
}

#[function_component(ConsentPanel)]
pub fn consent_panel(props: &ConsentPanelProps) -> Html {
    html! {
        <section
            id="consent-screen"
            class={classes!("screen", props.hidden.then_some("hidden"))}
            aria-hidden={props.hidden.to_string()}
        >
            <h1>{ "Before we continue" }</h1>
            <p>
                { "This demonstration shows how much a single page can learn about \
                   you the moment you interact with it. Everything gathered is \
                   displayed back to you and only to you; the page makes two \
                   read-only lookups and sends nothing anywhere else." }
            </p>
            <button id="consent-button" onclick={props.on_consent.clone()}>
                { "I understand, show me" }
            </button>
        </section>
    }
}
