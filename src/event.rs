// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Core trace event types.
//!
//! A [`TraceEvent`] is the single record a [`crate::traits::TraceSink`]
//! receives: a human-readable label, a severity, and a flat string-to-string
//! attribute map. Events are built at emission time, handed to the sink, and
//! never retained or mutated by the tracer.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Ordinal severity of a trace event.
///
/// Ordering is `Verbose < Information < Warning < Error < Critical`, so
/// sinks can threshold with a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Verbose,
    Information,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Severity name as emitted in the `LogLevel` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Verbose => "Verbose",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted checkpoint record.
///
/// Attribute keys are unique; when the same key is written twice during
/// construction, the last write wins (`HashMap` semantics).
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEvent {
    pub label: String,
    pub severity: Severity,
    pub attributes: HashMap<String, String>,
}

impl TraceEvent {
    pub fn new(label: String, severity: Severity, attributes: HashMap<String, String>) -> Self {
        Self {
            label,
            severity,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_is_ordinal() {
        assert!(Severity::Verbose < Severity::Information);
        assert!(Severity::Information < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn severity_names_match_log_level_attribute() {
        assert_eq!(Severity::Information.as_str(), "Information");
        assert_eq!(Severity::Error.to_string(), "Error");
    }

    #[test]
    fn duplicate_attribute_keys_last_write_wins() {
        let mut attributes = HashMap::new();
        attributes.insert("key".to_string(), "first".to_string());
        attributes.insert("key".to_string(), "second".to_string());

        let event = TraceEvent::new("label".to_string(), Severity::Information, attributes);
        assert_eq!(event.attributes.get("key").map(String::as_str), Some("second"));
    }
}
