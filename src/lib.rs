// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod catalog;    // checkpoint label formatting
pub mod config;     // config + application context
pub mod errors;     // error handling
pub mod event;      // trace event types
pub mod sinks;      // bundled sink implementations
pub mod tracer;     // the process tracer
pub mod traits;     // unified abstractions
