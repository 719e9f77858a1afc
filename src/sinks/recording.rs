// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ErrorRecord;
use crate::event::TraceEvent;
use crate::traits::TraceSink;
use std::sync::Mutex;

/// In-memory sink that captures everything it receives.
///
/// Intended for tests and demos: hold an `Arc<RecordingSink>`, run traced
/// work against it, then inspect the captured events and exception records.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TraceEvent>>,
    exceptions: Mutex<Vec<ErrorRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured trace events, in emission order.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().expect("recording sink poisoned").clone()
    }

    /// Snapshot of the captured exception records, in emission order.
    pub fn exceptions(&self) -> Vec<ErrorRecord> {
        self.exceptions.lock().expect("recording sink poisoned").clone()
    }
}

impl TraceSink for RecordingSink {
    fn emit_trace(&self, event: TraceEvent) {
        self.events.lock().expect("recording sink poisoned").push(event);
    }

    fn emit_exception(&self, record: ErrorRecord) {
        self.exceptions
            .lock()
            .expect("recording sink poisoned")
            .push(record);
    }
}
