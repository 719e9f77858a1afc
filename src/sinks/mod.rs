// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Bundled [`crate::traits::TraceSink`] implementations.
//!
//! * [`TracingSink`] - forwards events to the `tracing` subscriber stack
//! * [`BufferedSink`] - channel-buffered wrapper around any inner sink
//! * [`RecordingSink`] - in-memory capture for tests and demos

mod buffered;
mod recording;
mod tracing_sink;

pub use buffered::BufferedSink;
pub use recording::RecordingSink;
pub use tracing_sink::TracingSink;
