// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Serialized form of a failed unit of work.

use serde::{Deserialize, Serialize};
use std::panic::Location;

/// Best-effort source position of a failure.
///
/// Rust cannot recover the innermost frame of an arbitrary `Error` value, so
/// this is the call site of `run_traced` captured via `#[track_caller]` —
/// close enough to point a reader at the traced operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
        }
    }
}

/// Record of a caught failure, serialized into the `ErrorData` attribute of
/// an Exception checkpoint event and forwarded whole to the exception channel
/// of the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SourceLocation>,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>, source_location: Option<SourceLocation>) -> Self {
        Self {
            message: message.into(),
            source_location,
        }
    }

    /// Build a record from any error, with an optional capture site.
    pub fn from_error(error: &dyn std::error::Error, location: Option<&Location<'_>>) -> Self {
        Self::new(error.to_string(), location.map(SourceLocation::from))
    }

    /// JSON form of the record.
    ///
    /// Serialization of this shape cannot fail in practice; should serde_json
    /// ever refuse it, the message alone is emitted so the failure still
    /// reaches the sink.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| format!("{{\"message\":{:?}}}", self.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_message_with_camel_case_location() {
        let record = ErrorRecord::new(
            "Database connection failed",
            Some(SourceLocation {
                file: "src/handlers/forecast.rs".to_string(),
                line: 42,
            }),
        );

        let json = record.to_json();
        assert!(json.contains("\"message\":\"Database connection failed\""));
        assert!(json.contains("\"sourceLocation\""));
        assert!(json.contains("\"file\":\"src/handlers/forecast.rs\""));
        assert!(json.contains("\"line\":42"));
    }

    #[test]
    fn omits_location_when_unavailable() {
        let record = ErrorRecord::new("boom", None);
        assert_eq!(record.to_json(), "{\"message\":\"boom\"}");
    }

    #[test]
    fn from_error_uses_display_message() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let record = ErrorRecord::from_error(&error, Some(Location::caller()));

        assert_eq!(record.message, "disk on fire");
        let location = record.source_location.unwrap();
        assert!(location.file.ends_with("record.rs"));
        assert!(location.line > 0);
    }

    #[test]
    fn round_trips_through_json() {
        let record = ErrorRecord::new("quoted \"text\" survives", None);
        let parsed: ErrorRecord = serde_json::from_str(&record.to_json()).unwrap();
        assert_eq!(parsed, record);
    }
}
