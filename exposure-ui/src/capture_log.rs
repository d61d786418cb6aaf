// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded, newest-first audit trail of what the page just learned.
//!
//! Display-only state.  The log is rebuilt from nothing on every page
//! load; there is no persistence.

use std::collections::VecDeque;

use crate::constants::MAX_CAPTURE_LOG_ENTRIES;

#[derive(Clone, Debug, PartialEq)]
pub enum LogSegment {
    Plain(String),
    /// Rendered with emphasis; holds the value that was just captured.
    Value(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CaptureEntry {
    pub timestamp: String,
    pub segments: Vec<LogSegment>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptureLog {
    entries: VecDeque<CaptureEntry>,
}

impl CaptureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, dropping anything beyond the display capacity.
    pub fn record(&mut self, timestamp: String, segments: Vec<LogSegment>) {
        self.entries.push_front(CaptureEntry { timestamp, segments });
        self.entries.truncate(MAX_CAPTURE_LOG_ENTRIES);
    }

    pub fn entries(&self) -> impl Iterator<Item = &CaptureEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The common "text, emphasized value, text" message shape.
pub fn message(lead: &str, value: &str, trail: &str) -> Vec<LogSegment> {
    vec![
        LogSegment::Plain(lead.to_string()),
        LogSegment::Value(value.to_string()),
        LogSegment::Plain(trail.to_string()),
    ]
}

pub fn plain_message(text: &str) -> Vec<LogSegment> {
    vec![LogSegment::Plain(text.to_string())]
}

/// "HH:MM:SS" on the visitor's local clock.
pub fn clock_now() -> String {
    let now = js_sys::Date::new_0();
    format_clock(now.get_hours(), now.get_minutes(), now.get_seconds())
}

fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
