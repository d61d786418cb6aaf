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

//! exposure-ui library root.
//!
//! Re-exports the application modules so that integration tests (under
//! `tests/`) can import components. The binary entry-point lives in
//! `main.rs`.

pub mod app;
pub mod capture_log;
pub mod components;
pub mod constants;
pub mod context;
pub mod environment;
pub mod lookup_api;
pub mod stage;
pub mod timezone;
