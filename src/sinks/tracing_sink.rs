// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ErrorRecord;
use crate::event::{Severity, TraceEvent};
use crate::traits::TraceSink;

/// Sink that forwards events to the `tracing` subscriber stack.
///
/// Severity maps onto `tracing` levels as `Verbose -> trace`,
/// `Information -> info`, `Warning -> warn`, and both `Error` and
/// `Critical -> error` (`tracing` has no level above error; the original
/// severity survives in the `severity` field).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl TraceSink for TracingSink {
    fn emit_trace(&self, event: TraceEvent) {
        match event.severity {
            Severity::Verbose => tracing::trace!(
                severity = event.severity.as_str(),
                attributes = ?event.attributes,
                "{}", event.label
            ),
            Severity::Information => tracing::info!(
                severity = event.severity.as_str(),
                attributes = ?event.attributes,
                "{}", event.label
            ),
            Severity::Warning => tracing::warn!(
                severity = event.severity.as_str(),
                attributes = ?event.attributes,
                "{}", event.label
            ),
            Severity::Error | Severity::Critical => tracing::error!(
                severity = event.severity.as_str(),
                attributes = ?event.attributes,
                "{}", event.label
            ),
        }
    }

    fn emit_exception(&self, record: ErrorRecord) {
        tracing::error!(error_data = %record.to_json(), "Traced process raised an exception");
    }
}
