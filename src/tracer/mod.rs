// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Process lifecycle tracing around a unit of work.
//!
//! [`ProcessTracer::run_traced`] wraps an async unit of work and guarantees
//! the checkpoint contract: one Start event before the work runs, zero or
//! more Warning events while it runs (emitted by the work itself through a
//! [`TraceScope`]), and exactly one terminal event afterwards — Success when
//! the work completes, Exception when it fails. A failure is additionally
//! converted to an [`ErrorRecord`] and forwarded to the exception channel of
//! the sink before the configured [`FailurePolicy`] decides whether the
//! caller sees `Err` or a suppressed outcome.

use crate::catalog::{Checkpoint, MessageCatalog};
use crate::config::consts::{
    ANONYMOUS_USER_ID, ERROR_DATA_KEY, LOG_LEVEL_KEY, PROCESS_NAME_KEY, TIMESTAMP_KEY, USER_ID_KEY,
};
use crate::config::{AppContext, TracerConfig};
use crate::errors::{ErrorRecord, FailurePolicy};
use crate::event::{Severity, TraceEvent};
use crate::traits::TraceSink;
use chrono::{SecondsFormat, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::panic::Location;
use std::sync::Arc;


/// Result of a traced unit of work that was not propagated as `Err`.
#[derive(Debug, PartialEq)]
pub enum WorkOutcome<T, E> {
    /// The work completed; the Success checkpoint was emitted.
    Completed(T),
    /// The work failed under [`FailurePolicy::Swallow`]; the Exception
    /// checkpoint was emitted and the failure is carried here for inspection
    /// instead of being raised to the caller.
    Suppressed(E),
}

impl<T, E> WorkOutcome<T, E> {
    pub fn is_completed(&self) -> bool {
        matches!(self, WorkOutcome::Completed(_))
    }

    /// The produced value, or `None` for a suppressed failure.
    pub fn completed(self) -> Option<T> {
        match self {
            WorkOutcome::Completed(value) => Some(value),
            WorkOutcome::Suppressed(_) => None,
        }
    }
}

/// Warning handle passed into the unit of work.
///
/// Lets the work report recoverable anomalies as Warning checkpoint events
/// without exposing the rest of the tracer. Cloneable and cheap; it can be
/// handed further down into helpers the work calls.
#[derive(Clone)]
pub struct TraceScope {
    catalog: MessageCatalog,
    sink: Arc<dyn TraceSink>,
    process_name: String,
}

impl TraceScope {
    /// Emit a Warning checkpoint event with no attributes.
    pub fn warn(&self) {
        self.warn_with(HashMap::new());
    }

    /// Emit a Warning checkpoint event carrying caller attributes.
    pub fn warn_with(&self, attributes: HashMap<String, String>) {
        let label = self.catalog.label(Checkpoint::Warning, &self.process_name);
        self.sink
            .emit_trace(TraceEvent::new(label, Severity::Warning, attributes));
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }
}

/// Stateless tracer emitting checkpoint events around units of work.
///
/// The tracer holds only shared immutable collaborators (catalog, sink,
/// policy), so a single cloned instance can serve any number of concurrent
/// invocations. Events from different invocations interleave freely; within
/// one invocation Start always precedes that invocation's Warnings and its
/// single terminal event.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use waymark::config::AppContext;
/// use waymark::errors::FailurePolicy;
/// use waymark::sinks::RecordingSink;
/// use waymark::tracer::ProcessTracer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let sink = Arc::new(RecordingSink::new());
/// let tracer = ProcessTracer::new(
///     Arc::new(AppContext::new("WeatherApp")),
///     sink.clone(),
///     FailurePolicy::Propagate,
/// );
///
/// let outcome = tracer
///     .run_traced("Get", HashMap::new(), |_scope| async {
///         Ok::<_, std::io::Error>(21 + 21)
///     })
///     .await
///     .unwrap();
///
/// assert_eq!(outcome.completed(), Some(42));
/// assert_eq!(sink.events().len(), 2); // Start + Success
/// # }
/// ```
#[derive(Clone)]
pub struct ProcessTracer {
    catalog: MessageCatalog,
    sink: Arc<dyn TraceSink>,
    policy: FailurePolicy,
}

impl ProcessTracer {
    pub fn new(context: Arc<AppContext>, sink: Arc<dyn TraceSink>, policy: FailurePolicy) -> Self {
        Self {
            catalog: MessageCatalog::new(context),
            sink,
            policy,
        }
    }

    /// Build a tracer from loaded configuration and a wired-up sink.
    pub fn from_config(config: &TracerConfig, sink: Arc<dyn TraceSink>) -> Self {
        Self::new(
            Arc::new(AppContext::from_config(config)),
            sink,
            config.failure_policy,
        )
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Run a unit of work inside the checkpoint contract.
    ///
    /// The Start event is emitted at Information severity before `work` is
    /// awaited. Its attributes are the caller-supplied map extended with
    /// `Timestamp` (UTC ISO-8601), `ProcessName`, `UserId`, and `LogLevel`.
    /// `Timestamp`, `ProcessName`, and `LogLevel` are tracer-owned and
    /// override caller values on key collision; `UserId` is caller-owned —
    /// a supplied identity wins and `"Anonymous"` only fills its absence.
    ///
    /// On `Ok` the Success event is emitted and the value returned as
    /// [`WorkOutcome::Completed`]. On `Err` the failure becomes an
    /// [`ErrorRecord`] (message plus the call site of this invocation as
    /// best-effort source location), the Exception event is emitted with the
    /// record JSON under `ErrorData`, the record is forwarded to
    /// `emit_exception`, and the [`FailurePolicy`] picks the return shape:
    /// `Propagate` yields `Err(e)`, `Swallow` yields
    /// `Ok(WorkOutcome::Suppressed(e))`.
    ///
    /// The tracer imposes no timeout, cancellation, or backpressure on the
    /// work; if the returned future is dropped before completion, no terminal
    /// event is emitted for the already-emitted Start.
    #[track_caller]
    pub fn run_traced<'a, T, E, F, Fut>(
        &'a self,
        process_name: &str,
        attributes: HashMap<String, String>,
        work: F,
    ) -> impl Future<Output = Result<WorkOutcome<T, E>, E>> + 'a
    where
        T: 'a,
        E: std::error::Error + 'a,
        F: FnOnce(TraceScope) -> Fut + 'a,
        Fut: Future<Output = Result<T, E>> + 'a,
    {
        let caller = Location::caller();
        let process_name = process_name.to_owned();
        async move {
            self.emit(
                Checkpoint::Start,
                Severity::Information,
                &process_name,
                self.start_attributes(&process_name, attributes),
            );

            let scope = TraceScope {
                catalog: self.catalog.clone(),
                sink: self.sink.clone(),
                process_name: process_name.clone(),
            };

            match work(scope).await {
                Ok(value) => {
                    self.emit(
                        Checkpoint::Success,
                        Severity::Information,
                        &process_name,
                        HashMap::new(),
                    );
                    Ok(WorkOutcome::Completed(value))
                }
                Err(error) => {
                    let record = ErrorRecord::from_error(&error, Some(caller));
                    let attributes =
                        HashMap::from([(ERROR_DATA_KEY.to_string(), record.to_json())]);
                    self.emit(Checkpoint::Exception, Severity::Error, &process_name, attributes);
                    self.sink.emit_exception(record);

                    match self.policy {
                        FailurePolicy::Propagate => Err(error),
                        FailurePolicy::Swallow => Ok(WorkOutcome::Suppressed(error)),
                    }
                }
            }
        }
    }

    fn start_attributes(
        &self,
        process_name: &str,
        mut attributes: HashMap<String, String>,
    ) -> HashMap<String, String> {
        attributes
            .entry(USER_ID_KEY.to_string())
            .or_insert_with(|| ANONYMOUS_USER_ID.to_string());
        attributes.insert(
            TIMESTAMP_KEY.to_string(),
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        attributes.insert(PROCESS_NAME_KEY.to_string(), process_name.to_string());
        attributes.insert(
            LOG_LEVEL_KEY.to_string(),
            Severity::Information.as_str().to_string(),
        );
        attributes
    }

    fn emit(
        &self,
        checkpoint: Checkpoint,
        severity: Severity,
        process_name: &str,
        attributes: HashMap<String, String>,
    ) {
        let label = self.catalog.label(checkpoint, process_name);
        self.sink
            .emit_trace(TraceEvent::new(label, severity, attributes));
    }
}
