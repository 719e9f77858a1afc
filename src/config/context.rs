// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_APPLICATION_NAME;
use crate::config::TracerConfig;

/// Process-wide application identity, constructed once at startup.
///
/// The context is an explicit value injected into [`crate::catalog::MessageCatalog`]
/// and [`crate::tracer::ProcessTracer`] — never an ambient global — so multiple
/// independently configured tracers can coexist in one process (and in tests).
/// It is immutable after construction; reconfiguring the application name means
/// building a new context and handing it to a new tracer.
///
/// # Examples
/// ```
/// use waymark::config::AppContext;
///
/// let ctx = AppContext::new("WeatherApp");
/// assert_eq!(ctx.application_name(), "WeatherApp");
///
/// // Unconfigured processes fall back to the sentinel name.
/// assert_eq!(AppContext::default().application_name(), "DefaultApp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    application_name: String,
}

impl AppContext {
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
        }
    }

    /// Build the context from loaded configuration.
    ///
    /// A missing or empty `application_name` resolves silently to
    /// [`DEFAULT_APPLICATION_NAME`]; this is the configured-default case,
    /// not an error.
    pub fn from_config(config: &TracerConfig) -> Self {
        let name = config
            .application_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_APPLICATION_NAME);
        Self::new(name)
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(DEFAULT_APPLICATION_NAME)
    }
}
