// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// How a failed unit of work is surfaced to the caller of `run_traced`.
///
/// Either way the Exception checkpoint is emitted and the failure is forwarded
/// to the exception channel of the sink first; the policy only decides what
/// the caller gets back.
///
/// # Variants
/// * `Propagate` - Return the failure as `Err` (the default)
/// * `Swallow` - Return `Ok` carrying the failure as a suppressed outcome, so
///   the swallow is visible in the return type rather than silent
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    #[default]
    Propagate,
    Swallow,
}
