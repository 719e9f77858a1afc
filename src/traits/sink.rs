use crate::errors::ErrorRecord;
use crate::event::TraceEvent;

/// Destination for emitted checkpoint events and exception records.
///
/// Both methods are fire-and-forget from the tracer's perspective: the sink
/// owns buffering, batching, and transmission to whatever backend it fronts,
/// and its delivery failures are its own concern. Exceptions travel on a
/// distinct channel from trace events so backends can treat a failure as a
/// first-class record rather than one more log line.
pub trait TraceSink: Send + Sync {
    fn emit_trace(&self, event: TraceEvent);

    fn emit_exception(&self, record: ErrorRecord);
}
