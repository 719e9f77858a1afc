// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod policy;
mod record;

pub use config::ConfigError;
pub use policy::FailurePolicy;
pub use record::{ErrorRecord, SourceLocation};
