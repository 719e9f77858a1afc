// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized label formatting for checkpoint events.
//!
//! All human-readable checkpoint labels are produced here rather than by
//! format strings scattered through the tracer. This keeps every label on
//! the `"{application} Process {Checkpoint}: {process}"` shape, so log
//! queries written against one checkpoint keep working for the others.

use crate::config::AppContext;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Named lifecycle points of a traced unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checkpoint {
    Start,
    Warning,
    Success,
    Exception,
    Filter,
}

impl Checkpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Checkpoint::Start => "Start",
            Checkpoint::Warning => "Warning",
            Checkpoint::Success => "Success",
            Checkpoint::Exception => "Exception",
            Checkpoint::Filter => "Filter",
        }
    }
}

impl Display for Checkpoint {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure label formatter over an injected application context.
///
/// The catalog holds no mutable state; the application name is read through
/// the shared context on every call, never cached into the formatted string.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use waymark::catalog::{Checkpoint, MessageCatalog};
/// use waymark::config::AppContext;
///
/// let catalog = MessageCatalog::new(Arc::new(AppContext::new("WeatherApp")));
/// assert_eq!(
///     catalog.label(Checkpoint::Start, "Get"),
///     "WeatherApp Process Start: Get"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    context: Arc<AppContext>,
}

impl MessageCatalog {
    pub fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }

    /// Format the label for a checkpoint of the named process.
    ///
    /// An empty `process_name` yields a label with an empty trailing segment;
    /// it is not rejected.
    pub fn label(&self, checkpoint: Checkpoint, process_name: &str) -> String {
        let application = self.context.application_name();
        match checkpoint {
            // No space after the colon; kept byte-for-byte so queries written
            // against existing exception logs keep matching.
            Checkpoint::Exception => {
                format!("{} Process Exception:{}", application, process_name)
            }
            _ => format!(
                "{} Process {}: {}",
                application,
                checkpoint.as_str(),
                process_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(application_name: &str) -> MessageCatalog {
        MessageCatalog::new(Arc::new(AppContext::new(application_name)))
    }

    #[test]
    fn start_warning_success_labels_have_checkpoint_word() {
        let catalog = catalog("WeatherApp");
        assert_eq!(
            catalog.label(Checkpoint::Start, "Get"),
            "WeatherApp Process Start: Get"
        );
        assert_eq!(
            catalog.label(Checkpoint::Warning, "Get"),
            "WeatherApp Process Warning: Get"
        );
        assert_eq!(
            catalog.label(Checkpoint::Success, "Get"),
            "WeatherApp Process Success: Get"
        );
        assert_eq!(
            catalog.label(Checkpoint::Filter, "Get"),
            "WeatherApp Process Filter: Get"
        );
    }

    #[test]
    fn exception_label_has_no_space_before_process_name() {
        let catalog = catalog("WeatherApp");
        assert_eq!(
            catalog.label(Checkpoint::Exception, "Get"),
            "WeatherApp Process Exception:Get"
        );
    }

    #[test]
    fn labels_contain_both_names_for_every_checkpoint() {
        let catalog = catalog("Billing");
        for checkpoint in [
            Checkpoint::Start,
            Checkpoint::Warning,
            Checkpoint::Success,
            Checkpoint::Exception,
            Checkpoint::Filter,
        ] {
            let label = catalog.label(checkpoint, "SubmitInvoice");
            assert!(label.contains("Billing"), "missing app name in {label:?}");
            assert!(label.contains("SubmitInvoice"), "missing process in {label:?}");
        }
    }

    #[test]
    fn default_context_uses_sentinel_application_name() {
        let catalog = MessageCatalog::new(Arc::new(AppContext::default()));
        assert_eq!(
            catalog.label(Checkpoint::Start, "Get"),
            "DefaultApp Process Start: Get"
        );
    }

    #[test]
    fn empty_process_name_is_not_rejected() {
        let catalog = catalog("WeatherApp");
        assert_eq!(catalog.label(Checkpoint::Start, ""), "WeatherApp Process Start: ");
    }

    #[test]
    fn label_is_idempotent() {
        let catalog = catalog("WeatherApp");
        let first = catalog.label(Checkpoint::Success, "Get");
        let second = catalog.label(Checkpoint::Success, "Get");
        assert_eq!(first, second);
    }

    #[test]
    fn independently_configured_catalogs_coexist() {
        let weather = catalog("WeatherApp");
        let billing = catalog("Billing");
        assert_eq!(
            weather.label(Checkpoint::Start, "Get"),
            "WeatherApp Process Start: Get"
        );
        assert_eq!(
            billing.label(Checkpoint::Start, "Get"),
            "Billing Process Start: Get"
        );
    }
}
