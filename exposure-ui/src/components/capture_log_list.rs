// SPDX-License-Identifier: MIT OR Apache-2.0

//! Renders the capture log, newest entry first, with captured values
//! emphasized.  Shows a placeholder row until the first real entry lands.

use yew::prelude::*;

use crate::capture_log::{CaptureEntry, LogSegment};

#[derive(Properties, PartialEq)]
pub struct CaptureLogListProps {
    pub entries: Vec<CaptureEntry>,
}

#[function_component(CaptureLogList)]
pub fn capture_log_list(props: &CaptureLogListProps) -> Html {
    html! {
        <ul class="capture-log">
            if props.entries.is_empty() {
                <li class="log-empty">{ "Nothing captured yet." }</li>
            } else {
                { for props.entries.iter().map(render_entry) }
            }
        </ul>
    }
}

fn render_entry(entry: &CaptureEntry) -> Html {
    html! {
        <li>
            <strong>{ entry.timestamp.clone() }</strong>
            { " " }
            { for entry.segments.iter().map(render_segment) }
        </li>
    }
}

fn render_segment(segment: &LogSegment) -> Html {
    match segment {
        LogSegment::Plain(text) => html! { { text.clone() } },
        LogSegment::Value(value) => html! { <span class="log-value">{ value.clone() }</span> },
    }
}
