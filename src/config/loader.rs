// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{ConfigError, FailurePolicy};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure for the tracer.
///
/// This struct represents everything the hosting application configures about
/// tracing: the application identity stamped into every label, how failed
/// units of work are surfaced to callers, and the sink's backend settings.
/// It is typically loaded from a YAML configuration file.
///
/// # Fields
/// * `application_name` - Name prefixed onto every checkpoint label (optional,
///   defaults to the `DefaultApp` sentinel)
/// * `failure_policy` - How a failed unit of work is returned to the caller
///   (optional, defaults to `propagate`)
/// * `sink` - Sink backend settings (optional)
///
/// # Example
/// ```yaml
/// application_name: WeatherApp
/// failure_policy: propagate
/// sink:
///   endpoint: "https://telemetry.example.com/ingest"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TracerConfig {
    #[serde(default)]
    pub application_name: Option<String>,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default)]
    pub sink: SinkConfig,
}

/// Sink backend settings.
///
/// The tracer core treats these as opaque: the endpoint string is handed to
/// whatever sink implementation the hosting application wires up, and that
/// sink owns buffering, batching, and transmission.
///
/// # Fields
/// * `endpoint` - Connection/endpoint string for the sink's backend (optional)
#[derive(Debug, Default, Deserialize)]
pub struct SinkConfig {
    pub endpoint: Option<String>,
}

/// Load a tracer config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TracerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: TracerConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
application_name: WeatherApp
failure_policy: swallow
sink:
  endpoint: "https://telemetry.example.com/ingest"
"#;

        let cfg: TracerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.application_name.as_deref(), Some("WeatherApp"));
        assert_eq!(cfg.failure_policy, FailurePolicy::Swallow);
        assert_eq!(
            cfg.sink.endpoint.as_deref(),
            Some("https://telemetry.example.com/ingest")
        );
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: TracerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.application_name, None);
        assert_eq!(cfg.failure_policy, FailurePolicy::Propagate);
        assert_eq!(cfg.sink.endpoint, None);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "application_name: FileApp").unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.application_name.as_deref(), Some("FileApp"));
        assert_eq!(cfg.failure_policy, FailurePolicy::Propagate);
    }

    #[test]
    fn test_load_config_missing_file_is_io_error() {
        let result = load_config("/nonexistent/waymark.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_yaml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "failure_policy: [not, a, policy]").unwrap();

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
