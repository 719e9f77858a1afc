// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ErrorRecord;
use crate::event::TraceEvent;
use crate::traits::TraceSink;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

enum SinkMessage {
    Trace(TraceEvent),
    Exception(ErrorRecord),
}

/// Sink that decouples emission from delivery.
///
/// Events are handed to an unbounded channel and drained by a spawned task
/// into the wrapped inner sink, so emitters never block on the inner sink's
/// I/O. Once every clone of the `BufferedSink` is dropped the channel closes,
/// the drain task finishes the backlog, and the returned [`JoinHandle`]
/// resolves — await it at shutdown to flush.
///
/// Messages sent after the drain task has gone away are dropped; delivery
/// guarantees beyond the process lifetime belong to the inner sink.
#[derive(Clone)]
pub struct BufferedSink {
    tx: mpsc::UnboundedSender<SinkMessage>,
}

impl BufferedSink {
    /// Spawn the drain task and return the sink plus its flush handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(inner: Arc<dyn TraceSink>) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                match message {
                    SinkMessage::Trace(event) => inner.emit_trace(event),
                    SinkMessage::Exception(record) => inner.emit_exception(record),
                }
            }
        });
        (Self { tx }, handle)
    }
}

impl TraceSink for BufferedSink {
    fn emit_trace(&self, event: TraceEvent) {
        let _ = self.tx.send(SinkMessage::Trace(event));
    }

    fn emit_exception(&self, record: ErrorRecord) {
        let _ = self.tx.send(SinkMessage::Exception(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Severity;
    use crate::sinks::RecordingSink;
    use std::collections::HashMap;

    #[tokio::test]
    async fn forwards_messages_to_inner_sink_in_order() {
        let inner = Arc::new(RecordingSink::new());
        let (sink, handle) = BufferedSink::spawn(inner.clone());

        sink.emit_trace(TraceEvent::new(
            "first".to_string(),
            Severity::Information,
            HashMap::new(),
        ));
        sink.emit_trace(TraceEvent::new(
            "second".to_string(),
            Severity::Error,
            HashMap::new(),
        ));
        sink.emit_exception(ErrorRecord::new("boom", None));

        drop(sink);
        handle.await.unwrap();

        let events = inner.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].label, "first");
        assert_eq!(events[1].label, "second");
        assert_eq!(inner.exceptions().len(), 1);
    }

    #[tokio::test]
    async fn drain_task_finishes_backlog_before_resolving() {
        let inner = Arc::new(RecordingSink::new());
        let (sink, handle) = BufferedSink::spawn(inner.clone());

        for i in 0..100 {
            sink.emit_trace(TraceEvent::new(
                format!("event-{i}"),
                Severity::Verbose,
                HashMap::new(),
            ));
        }

        drop(sink);
        handle.await.unwrap();
        assert_eq!(inner.events().len(), 100);
    }
}
